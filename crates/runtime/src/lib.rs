//! Runtime orchestration for zombie quests.
//!
//! This crate turns validated content into running scenes. Consumers build a
//! [`ContentBundle`], hand it to a [`QuestRunner`] together with the quest
//! graph, and call [`QuestRunner::update_and_draw`] once per frame.
//!
//! Modules are organized by responsibility:
//! - [`content`] cross-validates loaded content and spawns actors
//! - [`controller`] hosts one controller per scene kind
//! - [`scene`] builds controllers and binds their resolutions
//! - [`simulation`] steps a dungeon world by one frame
//! - [`runner`] walks the quest graph
//! - [`sinks`] provides headless audio and drawing sinks
pub mod content;
pub mod controller;
pub mod error;
pub mod runner;
pub mod scene;
pub mod simulation;
pub mod sinks;

#[cfg(test)]
pub(crate) mod testing;

pub use content::{ContentBundle, ContentParts};
pub use controller::{
    Controller, DecisionController, DungeonController, PlayerInput, SkillCheckController,
    TurnBasedController,
};
pub use error::{Result, RuntimeError};
pub use runner::QuestRunner;
pub use scene::make_controller_and_resolutions;
pub use simulation::{StepReport, step};
pub use sinks::{NullAudio, NullCanvas, SoundLog, TextCanvas};
