//! Quest scene graph and scene outcomes.
//!
//! A quest is a directed multigraph of [`SceneSpec`]s. Each scene yields an
//! ordered list of [`Resolution`]s; when one resolves, the edge keyed by its
//! position selects the next scene.
mod error;
mod graph;
mod resolution;
mod scene;

pub use error::QuestError;
pub use graph::{Edge, QuestGraph, ROOT};
pub use resolution::{Resolution, ResolutionSpec};
pub use scene::SceneSpec;
