use rand::RngCore;

use crate::config::GameConfig;
use crate::state::Clock;

/// Shared resources threaded through one simulation frame.
///
/// Everything that evaluates conditions or activates effects receives the
/// frame explicitly; there is no global clock or random source.
pub struct Frame<'a> {
    pub clock: &'a Clock,
    pub rng: &'a mut dyn RngCore,
    pub config: &'a GameConfig,
}

impl<'a> Frame<'a> {
    pub fn new(clock: &'a Clock, rng: &'a mut dyn RngCore, config: &'a GameConfig) -> Self {
        Self { clock, rng, config }
    }
}
