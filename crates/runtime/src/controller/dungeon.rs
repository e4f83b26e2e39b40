use std::sync::Arc;

use game_core::{
    AudioSink, Canvas, Clock, Commands, Frame, HumanoidData, PlacementKind, PropKind, Vec2,
    World,
};

use super::{Controller, PlayerInput};
use crate::simulation::{self, StepReport};
use crate::{ContentBundle, Result, RuntimeError};

/// A level played in real time.
///
/// The world is populated from the level's placements on construction.
/// Player input is queued and applied at the start of the next update.
pub struct DungeonController {
    level: String,
    content: Arc<ContentBundle>,
    world: World,
    commands: Commands,
    pending: Vec<PlayerInput>,
    player_data: HumanoidData,
    /// Clock of the most recent update, for HUD cooldowns.
    clock: Clock,
    last_step: StepReport,
}

impl DungeonController {
    /// Builds the level's world and places the player in it.
    ///
    /// Every placement label becomes a label group; the player is also
    /// grouped under [`ContentBundle::PLAYER`].
    ///
    /// # Errors
    ///
    /// Fails if the level is unknown to `content`, places an unknown
    /// template or item, or contains no player-faction actor.
    pub fn new(
        scene: &str,
        level_name: &str,
        content: Arc<ContentBundle>,
        player_data: HumanoidData,
    ) -> Result<Self> {
        let level = content
            .level(level_name)
            .ok_or_else(|| RuntimeError::UnknownLevel {
                scene: scene.to_string(),
                level: level_name.to_string(),
            })?;

        let mut world = World::new();
        for placement in &level.placements {
            let id = match &placement.kind {
                PlacementKind::Actor(template) => {
                    content.spawn_actor(&mut world, template, placement.pos, placement.rot)?
                }
                PlacementKind::Item(label) => world
                    .spawn_item(content.items(), label, placement.pos)
                    .ok_or_else(|| RuntimeError::UnknownItem {
                        level: level_name.to_string(),
                        item: label.clone(),
                    })?,
                PlacementKind::Wall { half_extents } => {
                    world.spawn_prop(PropKind::Wall, placement.pos, *half_extents)
                }
                PlacementKind::Zone { half_extents } => {
                    world.spawn_prop(PropKind::Zone, placement.pos, *half_extents)
                }
            };
            for label in &placement.labels {
                world.tag(id, label.as_str());
            }
        }

        let player = world.player_id().ok_or_else(|| RuntimeError::MissingPlayer {
            level: level_name.to_string(),
        })?;
        world.tag(player, ContentBundle::PLAYER);

        let mut controller = Self {
            level: level_name.to_string(),
            content,
            world,
            commands: Commands::new(),
            pending: Vec::new(),
            player_data: player_data.clone(),
            clock: Clock::new(),
            last_step: StepReport::default(),
        };
        controller.set_player_data(player_data);

        tracing::debug!(
            level = %controller.level,
            actors = controller.world.actor_ids().len(),
            "dungeon populated"
        );
        Ok(controller)
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    /// The world as populated from the level.
    pub fn level_world(&self) -> &World {
        &self.world
    }

    /// Report of the most recent frame.
    pub fn last_step(&self) -> &StepReport {
        &self.last_step
    }

    fn apply_input(&mut self, input: PlayerInput, frame: &mut Frame<'_>) {
        let Some(id) = self.world.player_id() else {
            return;
        };

        match input {
            PlayerInput::Steer(direction) => {
                if let Some(player) = self.world.actor_mut(id) {
                    player.body.vel = if direction.length() > 0.0 {
                        Vec2::from_angle(direction.angle()) * player.speed
                    } else {
                        Vec2::ZERO
                    };
                }
            }
            PlayerInput::Aim(angle) => {
                if let Some(player) = self.world.actor_mut(id) {
                    player.body.rot = angle;
                }
            }
            PlayerInput::Equip(slot) => {
                if let Some(player) = self.world.actor_mut(id) {
                    if slot < player.mods.len() {
                        player.equipped = Some(slot);
                    }
                }
            }
            PlayerInput::UseMod => {
                let fired = self.world.with_actor_context(id, frame, &mut self.commands, |ctx| {
                    let Some(slot) = ctx.actor.equipped else {
                        return false;
                    };
                    let ability = Arc::clone(&ctx.actor.mods[slot].ability);
                    ability.try_use(slot, ctx)
                });
                if fired != Some(true) {
                    tracing::trace!("player mod is gated");
                }
            }
        }
    }

    fn capture_player(&mut self) {
        let Some(id) = self.world.player_id() else {
            return;
        };
        if let Some(player) = self.world.actor(id).or_else(|| self.world.departed(id)) {
            self.player_data.capture(player);
        }
    }
}

impl Controller for DungeonController {
    fn kind(&self) -> &'static str {
        "dungeon"
    }

    fn update(&mut self, frame: &mut Frame<'_>, audio: &mut dyn AudioSink) {
        self.clock = *frame.clock;

        for input in std::mem::take(&mut self.pending) {
            self.apply_input(input, frame);
        }

        let report = simulation::step(
            &mut self.world,
            frame,
            &self.content,
            &mut self.commands,
            audio,
        );
        self.player_data
            .inventory
            .extend(report.picked_up.iter().cloned());
        self.capture_player();
        self.last_step = report;
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        for decal in self.world.decals() {
            canvas.draw_sprite(&decal.image, decal.pos, 0.0);
        }
        for item in self.world.items() {
            let image = item.image.as_deref().unwrap_or(&item.label);
            canvas.draw_sprite(image, item.body.pos, 0.0);
        }
        for actor in self.world.actors() {
            canvas.draw_sprite(&actor.kind, actor.body.pos, actor.body.rot);
        }
        for projectile in self.world.projectiles() {
            let image = projectile.image.as_deref().unwrap_or("projectile");
            canvas.draw_sprite(image, projectile.body.pos, projectile.sprite_rotation());
        }

        let data = &self.player_data;
        canvas.draw_text(
            &format!(
                "HP {}/{}  EN {}/{}",
                data.health.current(),
                data.health.maximum(),
                data.energy.current(),
                data.energy.maximum()
            ),
            0,
        );
        if let Some(player) = self.world.player() {
            if let Some(slot) = player.equipped_mod() {
                let ready = slot.ability.cooldown_fraction(player, &self.clock);
                let uses = slot
                    .uses_left
                    .map_or_else(|| "-".to_string(), |n| n.to_string());
                canvas.draw_text(
                    &format!("{} [{:>3.0}%] x{}", slot.label(), ready * 100.0, uses),
                    1,
                );
            }
        }
    }

    fn set_player_data(&mut self, data: HumanoidData) {
        if let Some(player) = self.world.player_mut() {
            data.apply_to(player);
        }
        self.player_data = data;
    }

    fn player_data(&self) -> HumanoidData {
        self.player_data.clone()
    }

    fn world(&self) -> Option<&World> {
        Some(&self.world)
    }

    fn world_mut(&mut self) -> Option<&mut World> {
        Some(&mut self.world)
    }

    fn input(&mut self, input: PlayerInput) {
        self.pending.push(input);
    }
}

#[cfg(test)]
mod tests {
    use game_core::GameConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::sinks::{NullAudio, TextCanvas};
    use crate::testing::{ARENA, bundle};

    fn controller() -> DungeonController {
        let content = Arc::new(bundle());
        let data = content.fresh_player_data();
        DungeonController::new("arena", ARENA, content, data).unwrap()
    }

    fn update(controller: &mut DungeonController, clock: &mut Clock) {
        clock.advance(16);
        let mut rng = StdRng::seed_from_u64(3);
        let config = GameConfig::new();
        let mut frame = Frame::new(clock, &mut rng, &config);
        controller.update(&mut frame, &mut NullAudio);
    }

    #[test]
    fn populates_world_and_groups() {
        let controller = controller();
        let world = controller.world().unwrap();
        assert!(world.player().is_some());
        assert_eq!(world.group("player").map(|g| g.len()), Some(1));
        assert_eq!(world.group("horde").map(|g| g.len()), Some(2));
        assert_eq!(world.group("exit").map(|g| g.len()), Some(1));
        assert_eq!(world.items().count(), 1);
    }

    #[test]
    fn player_data_is_applied_on_entry() {
        let mut controller = controller();
        let mut data = controller.player_data();
        data.health.set(40);
        controller.set_player_data(data);

        let player = controller.world().unwrap().player().unwrap();
        assert_eq!(player.health.current(), 40);
    }

    #[test]
    fn steer_moves_player_at_its_speed() {
        let mut controller = controller();
        let start = controller.world().unwrap().player().unwrap().body.pos;
        controller.input(PlayerInput::Steer(Vec2::new(0.0, -3.0)));

        let mut clock = Clock::new();
        update(&mut controller, &mut clock);

        let player = controller.world().unwrap().player().unwrap();
        assert!((player.body.vel.length() - player.speed).abs() < 1e-3);
        assert!(player.body.pos.y < start.y);
    }

    #[test]
    fn equipped_mod_fires_on_use() {
        let mut controller = controller();
        controller.input(PlayerInput::Equip(0));
        controller.input(PlayerInput::UseMod);

        let mut clock = Clock::new();
        update(&mut controller, &mut clock);

        let world = controller.world().unwrap();
        assert_eq!(world.projectiles().count(), 1);
        assert_eq!(controller.player_data().equipped, Some(0));
    }

    #[test]
    fn hud_shows_player_resources() {
        let controller = controller();
        let mut canvas = TextCanvas::new();
        controller.draw(&mut canvas);
        assert!(canvas.lines()[0].starts_with("HP 100/100"));
        assert!(canvas.sprite_count() >= 3);
    }
}
