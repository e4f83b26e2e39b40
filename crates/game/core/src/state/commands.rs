//! Deferred world mutations.
//!
//! Effects run while the world's actor registry is being iterated, so they
//! never add or remove entities directly. Instead they queue [`Command`]s
//! that the world applies once every actor has been updated.

use super::{EntityId, ProjectileLaunch, Vec2};

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Launch(ProjectileLaunch),
    DropItem { label: String, pos: Vec2 },
    Kill(EntityId),
    PlaySound(String),
    /// Permanent sprite stamped onto the map surface.
    Decal { image: String, pos: Vec2 },
}

/// Ordered queue of deferred commands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Commands {
    queue: Vec<Command>,
}

impl Commands {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.queue.push(command);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.queue.iter()
    }

    /// Removes and returns every queued command in order.
    pub fn drain(&mut self) -> std::vec::Drain<'_, Command> {
        self.queue.drain(..)
    }
}
