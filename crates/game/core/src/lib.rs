//! Rules and data types for the zombie quest engine.
//!
//! `game-core` owns the world registry, enemy behaviors, mods, resolutions,
//! and the quest graph. It performs no I/O: content arrives as already
//! deserialized specs, and sounds and sprites leave through the sink traits
//! in [`env`]. The runtime drives everything here frame by frame.
pub mod behavior;
pub mod config;
pub mod env;
pub mod error;
pub mod quest;
pub mod state;

pub use behavior::{
    Ability, AbilityKind, ActorContext, Behavior, BehaviorSpec, Condition, Effect, StateSpec,
};
pub use config::GameConfig;
pub use env::{AudioSink, Canvas, Frame};
pub use error::{ConfigError, ErrorSeverity, GameError};
pub use quest::{Edge, QuestError, QuestGraph, Resolution, ResolutionSpec, SceneSpec, ROOT};
pub use state::{
    Actor, ActorTemplate, Body, Clock, Command, Commands, EntityId, Faction, HumanoidData,
    ItemCatalog, ItemDefinition, ItemFactory, LevelSpec, ModSlot, Placement, PlacementKind,
    Projectile, ProjectileFlags, ProjectileSpec, PropKind, ResourceMeter, SpriteIndex, Vec2,
    World,
};
