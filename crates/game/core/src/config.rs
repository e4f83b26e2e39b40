use crate::state::Vec2;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Fixed frame length used by headless runs, in milliseconds.
    pub frame_ms: u64,

    /// Muzzle position relative to a shooter facing +x: forward, lateral.
    pub barrel_offset: Vec2,

    /// Subtracted from an actor's position when stamping decals, so the
    /// decal image is centered on the actor.
    pub decal_offset: Vec2,

    /// Seed for the quest runner's random source. `None` seeds from entropy.
    pub rng_seed: Option<u64>,

    /// Sides of the die rolled by skill checks.
    pub skill_die: u32,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_FRAME_MS: u64 = 16;
    pub const DEFAULT_BARREL_OFFSET: Vec2 = Vec2::new(30.0, 10.0);
    pub const DEFAULT_DECAL_OFFSET: Vec2 = Vec2::new(32.0, 32.0);
    pub const DEFAULT_SKILL_DIE: u32 = 6;

    pub fn new() -> Self {
        Self {
            frame_ms: Self::DEFAULT_FRAME_MS,
            barrel_offset: Self::DEFAULT_BARREL_OFFSET,
            decal_offset: Self::DEFAULT_DECAL_OFFSET,
            rng_seed: None,
            skill_die: Self::DEFAULT_SKILL_DIE,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng_seed: Some(seed),
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
