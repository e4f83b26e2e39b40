use game_core::{Actor, AudioSink, Canvas, EntityId, Frame, HumanoidData, Vec2};

use super::Controller;
use crate::{ContentBundle, Result};

/// Outcome index when every enemy is down.
pub const VICTORY: usize = 0;
/// Outcome index when the player is down.
pub const DEFEAT: usize = 1;

/// An exchange-of-blows fight outside any world.
///
/// Each update is one round: the player strikes the first enemy still
/// standing, then every enemy still standing strikes the player.
#[derive(Clone, Debug)]
pub struct TurnBasedController {
    player: Actor,
    enemies: Vec<Actor>,
    player_data: HumanoidData,
    round: u32,
    outcome: Option<usize>,
    reported: bool,
}

impl TurnBasedController {
    /// Builds the combatants from their templates.
    ///
    /// # Errors
    ///
    /// Fails if an enemy template is unknown.
    pub fn new(
        enemy_templates: &[String],
        content: &ContentBundle,
        player_data: HumanoidData,
    ) -> Result<Self> {
        let mut player = content.make_actor(EntityId(0), ContentBundle::PLAYER, Vec2::ZERO)?;
        player_data.apply_to(&mut player);

        let enemies = enemy_templates
            .iter()
            .zip(1..)
            .map(|(name, id)| content.make_actor(EntityId(id), name, Vec2::ZERO))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            player,
            enemies,
            player_data,
            round: 0,
            outcome: None,
            reported: false,
        })
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn enemies(&self) -> &[Actor] {
        &self.enemies
    }

    fn settle(&self) -> Option<usize> {
        if self.enemies.iter().all(Actor::is_dead) {
            Some(VICTORY)
        } else if self.player.is_dead() {
            Some(DEFEAT)
        } else {
            None
        }
    }
}

impl Controller for TurnBasedController {
    fn kind(&self) -> &'static str {
        "turn_based"
    }

    fn update(&mut self, _frame: &mut Frame<'_>, _audio: &mut dyn AudioSink) {
        if self.outcome.is_some() {
            return;
        }
        if let Some(outcome) = self.settle() {
            self.outcome = Some(outcome);
            return;
        }

        self.round += 1;
        let attack = self.player.attack;
        if let Some(enemy) = self.enemies.iter_mut().find(|enemy| !enemy.is_dead()) {
            enemy.health.drain(attack);
        }
        for enemy in self.enemies.iter().filter(|enemy| !enemy.is_dead()) {
            self.player.health.drain(enemy.attack);
        }

        self.player_data.capture(&self.player);
        self.outcome = self.settle();
        tracing::debug!(
            round = self.round,
            player_health = self.player.health.current(),
            outcome = ?self.outcome,
            "exchange of blows"
        );
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_text(
            &format!(
                "Round {}  HP {}/{}",
                self.round,
                self.player.health.current(),
                self.player.health.maximum()
            ),
            0,
        );
        for (line, enemy) in self.enemies.iter().enumerate() {
            canvas.draw_text(
                &format!(
                    "{} {}/{}",
                    enemy.kind,
                    enemy.health.current(),
                    enemy.health.maximum()
                ),
                line + 2,
            );
        }
    }

    fn set_player_data(&mut self, data: HumanoidData) {
        data.apply_to(&mut self.player);
        self.player_data = data;
    }

    fn player_data(&self) -> HumanoidData {
        self.player_data.clone()
    }

    fn take_decision(&mut self) -> Option<usize> {
        if self.reported {
            return None;
        }
        self.reported = self.outcome.is_some();
        self.outcome
    }
}
