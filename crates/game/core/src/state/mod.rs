//! World state representation.
//!
//! This module owns the data structures that describe entities, the game
//! clock, persistent player data, and the deferred command buffer. Behaviors
//! and controllers query and mutate this state; loaders only produce the
//! templates it is built from.
pub mod actor;
pub mod clock;
pub mod commands;
pub mod common;
pub mod humanoid;
pub mod item;
pub mod level;
pub mod projectile;
pub mod prop;
pub mod resources;
pub mod world;

pub use actor::{Actor, ActorTemplate, Body, CooldownLedger, Faction, ModSlot};
pub use clock::Clock;
pub use commands::{Command, Commands};
pub use common::{EntityId, Rect, Vec2};
pub use humanoid::HumanoidData;
pub use item::{ItemCatalog, ItemDefinition, ItemFactory, WorldItem};
pub use level::{LevelSpec, Placement, PlacementKind};
pub use projectile::{Projectile, ProjectileFlags, ProjectileLaunch, ProjectileSpec};
pub use prop::{Prop, PropKind};
pub use resources::ResourceMeter;
pub use world::{ApplyReport, Decal, SpriteIndex, World};
