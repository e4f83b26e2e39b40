use rand::RngCore;

use crate::config::GameConfig;
use crate::state::{Actor, Body, Clock, Commands};

/// Blackboard for evaluating one actor's conditions and effects.
///
/// The context borrows the actor mutably and sees everything else through
/// snapshots or the command buffer, so effects can never invalidate the
/// world's actor registry while it is being iterated.
pub struct ActorContext<'a> {
    /// The actor being evaluated.
    pub actor: &'a mut Actor,

    /// Snapshot of the actor's target (the player, for enemies).
    pub target: Option<Body>,

    pub clock: &'a Clock,

    pub rng: &'a mut dyn RngCore,

    /// Spawns, kills, and sounds requested by effects.
    pub commands: &'a mut Commands,

    pub config: &'a GameConfig,
}

impl ActorContext<'_> {
    /// Distance to the target, if there is one.
    pub fn target_distance(&self) -> Option<f32> {
        self.target
            .map(|target| self.actor.body.pos.distance(target.pos))
    }
}
