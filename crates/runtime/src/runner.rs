//! Quest orchestration.
//!
//! The runner owns the quest graph, the current scene's controller and its
//! bound resolutions, the game clock, and the seeded random source. Each
//! call to [`QuestRunner::update_and_draw`] advances exactly one frame.

use std::sync::Arc;

use game_core::{AudioSink, Canvas, Clock, Frame, HumanoidData, QuestGraph, ROOT, Resolution};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::controller::{Controller, PlayerInput};
use crate::scene::make_controller_and_resolutions;
use crate::{ContentBundle, Result, RuntimeError};

pub struct QuestRunner {
    graph: QuestGraph,
    content: Arc<ContentBundle>,
    current: String,
    controller: Box<dyn Controller>,
    resolutions: Vec<Resolution>,
    clock: Clock,
    rng: StdRng,
    /// Labels of every scene entered, in order.
    history: Vec<String>,
}

impl QuestRunner {
    /// Starts the quest at its root scene with fresh player data.
    ///
    /// # Errors
    ///
    /// Fails if a dungeon scene names a level `content` lacks, or if the
    /// root scene cannot be built.
    pub fn new(graph: QuestGraph, content: Arc<ContentBundle>) -> Result<Self> {
        content.check_quest(&graph)?;

        let rng = match content.config().rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let data = content.fresh_player_data();
        let (controller, resolutions) =
            make_controller_and_resolutions(ROOT, graph.root(), &content, data)?;

        tracing::info!(scene = ROOT, kind = controller.kind(), "quest started");
        Ok(Self {
            graph,
            content,
            current: ROOT.to_string(),
            controller,
            resolutions,
            clock: Clock::new(),
            rng,
            history: vec![ROOT.to_string()],
        })
    }

    /// Advances one frame, then transitions if a resolution resolved.
    ///
    /// Returns the label of the scene entered, if any. When several
    /// resolutions resolve in the same frame the first in key order wins.
    pub fn update_and_draw(
        &mut self,
        elapsed_ms: u64,
        audio: &mut dyn AudioSink,
        canvas: &mut dyn Canvas,
    ) -> Result<Option<&str>> {
        self.clock.advance(elapsed_ms);

        let resolved = {
            let mut frame = Frame::new(&self.clock, &mut self.rng, self.content.config());
            self.controller.update(&mut frame, audio);
            self.controller.draw(canvas);

            if let Some(index) = self.controller.take_decision() {
                match self.resolutions.get_mut(index) {
                    Some(resolution) => {
                        resolution.choose();
                    }
                    None => tracing::warn!(index, "controller decided an unknown outcome"),
                }
            }

            let mut resolved = Vec::new();
            for (key, resolution) in self.resolutions.iter_mut().enumerate() {
                if resolution.is_resolved(self.controller.world_mut(), &mut frame) {
                    resolved.push(key);
                }
            }
            resolved
        };

        let Some(&key) = resolved.first() else {
            return Ok(None);
        };
        if resolved.len() > 1 {
            tracing::warn!(
                scene = %self.current,
                resolved = ?resolved,
                "several resolutions resolved at once; taking the first"
            );
        }

        let next = self
            .graph
            .next_scene(&self.current, key)
            .ok_or_else(|| RuntimeError::UnknownScene {
                label: format!("{}#{}", self.current, key),
            })?
            .to_string();
        let data = if next == ROOT {
            self.content.fresh_player_data()
        } else {
            self.controller.player_data()
        };
        self.enter(next, data)?;
        Ok(Some(&self.current))
    }

    fn enter(&mut self, label: String, data: HumanoidData) -> Result<()> {
        let scene = self
            .graph
            .scene(&label)
            .ok_or_else(|| RuntimeError::UnknownScene {
                label: label.clone(),
            })?;
        let (controller, resolutions) =
            make_controller_and_resolutions(&label, scene, &self.content, data)?;

        tracing::info!(
            from = %self.current,
            to = %label,
            kind = controller.kind(),
            "scene entered"
        );
        self.controller = controller;
        self.resolutions = resolutions;
        self.history.push(label.clone());
        self.current = label;
        Ok(())
    }

    /// Forwards a UI selection to the current scene.
    pub fn choose(&mut self, option: usize) {
        self.controller.select(option);
    }

    /// Forwards gameplay input to the current scene.
    pub fn input(&mut self, input: PlayerInput) {
        self.controller.input(input);
    }

    /// `true` once the quest reached a scene with no way out.
    pub fn is_finished(&self) -> bool {
        self.resolutions.is_empty()
    }

    pub fn current_scene(&self) -> &str {
        &self.current
    }

    pub fn controller(&self) -> &dyn Controller {
        self.controller.as_ref()
    }

    pub fn player_data(&self) -> HumanoidData {
        self.controller.player_data()
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }
}
