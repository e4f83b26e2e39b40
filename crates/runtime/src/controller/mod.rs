//! Scene controllers.
//!
//! A controller owns everything a scene needs while it is current: the
//! world for dungeons, the prompt and options for menus, the combatants for
//! turn-based fights. The quest runner drives it through [`Controller`] and
//! never needs to know which kind it holds.
mod decision;
mod dungeon;
mod skill_check;
mod turn_based;

pub use decision::DecisionController;
pub use dungeon::DungeonController;
pub use skill_check::SkillCheckController;
pub use turn_based::TurnBasedController;

use game_core::{AudioSink, Canvas, Frame, HumanoidData, Vec2, World};

/// Player commands forwarded by a front end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlayerInput {
    /// Move along a direction at full speed; `Vec2::ZERO` stops.
    Steer(Vec2),
    /// Face an absolute angle in degrees.
    Aim(f32),
    /// Equip the mod in a slot.
    Equip(usize),
    /// Use the equipped mod.
    UseMod,
}

pub trait Controller {
    /// Short scene kind for logs.
    fn kind(&self) -> &'static str;

    /// Advances the scene by one frame.
    fn update(&mut self, frame: &mut Frame<'_>, audio: &mut dyn AudioSink);

    fn draw(&self, canvas: &mut dyn Canvas);

    /// Hands the controller the player's persistent data on scene entry.
    fn set_player_data(&mut self, data: HumanoidData);

    /// The player's persistent data as it stands now.
    fn player_data(&self) -> HumanoidData;

    /// World the scene's resolutions are bound to, if it has one.
    fn world(&self) -> Option<&World> {
        None
    }

    fn world_mut(&mut self) -> Option<&mut World> {
        None
    }

    /// UI selection of an option by index. Ignored by scenes without options.
    fn select(&mut self, _option: usize) {}

    /// Gameplay input. Ignored by scenes without a player actor.
    fn input(&mut self, _input: PlayerInput) {}

    /// Index of the resolution the controller decided this frame, if any.
    ///
    /// Menus report the chosen option, skill checks and fights their outcome.
    fn take_decision(&mut self) -> Option<usize> {
        None
    }
}
