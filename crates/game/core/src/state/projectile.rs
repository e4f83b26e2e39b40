//! Projectiles fired by mods and behaviors.
//!
//! A projectile is a single entity type. Visual and on-kill variations are
//! expressed as flags and optional fields rather than wrapper types, so one
//! code path handles movement, rendering, and removal for all of them.

use bitflags::bitflags;

use super::{Body, EntityId, Faction, Vec2};

bitflags! {
    /// Optional traits of a projectile.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct ProjectileFlags: u8 {
        /// Sprite is drawn rotated to the direction of travel.
        const ANGLED = 1 << 0;
        /// Sprite spins while in flight.
        const ROTATING = 1 << 1;
    }
}

/// Static projectile description, as authored in mod and behavior data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectileSpec {
    /// Pixels per second.
    pub speed: f32,
    pub damage: u32,
    pub lifetime_ms: u64,
    #[cfg_attr(feature = "serde", serde(default = "ProjectileSpec::default_half_extent"))]
    pub half_extent: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: ProjectileFlags,
    /// Degrees per second; only used with [`ProjectileFlags::ROTATING`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub spin: f32,
    /// Item label dropped where the projectile is destroyed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub drops_on_kill: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub image: Option<String>,
}

impl ProjectileSpec {
    pub const DEFAULT_HALF_EXTENT: f32 = 4.0;

    #[cfg_attr(not(feature = "serde"), allow(dead_code))]
    fn default_half_extent() -> f32 {
        Self::DEFAULT_HALF_EXTENT
    }

    /// A plain bullet with no flags and no drop.
    pub fn bullet(speed: f32, damage: u32, lifetime_ms: u64) -> Self {
        Self {
            speed,
            damage,
            lifetime_ms,
            half_extent: Self::DEFAULT_HALF_EXTENT,
            flags: ProjectileFlags::empty(),
            spin: 0.0,
            drops_on_kill: None,
            image: None,
        }
    }
}

/// A projectile in flight.
#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub id: EntityId,
    /// Faction of the shooter; the projectile never hits its own side.
    pub faction: Faction,
    pub body: Body,
    pub damage: u32,
    /// Clock time (ms) at which the projectile expires.
    pub expires_at: u64,
    pub flags: ProjectileFlags,
    pub spin: f32,
    pub drops_on_kill: Option<String>,
    pub image: Option<String>,
}

/// A request to launch a projectile, queued by effects and resolved into a
/// [`Projectile`] once the world allocates an id.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectileLaunch {
    pub spec: ProjectileSpec,
    pub faction: Faction,
    pub origin: Vec2,
    /// Direction of travel in degrees.
    pub direction: f32,
    pub launched_at: u64,
}

impl Projectile {
    pub fn launch(id: EntityId, launch: ProjectileLaunch) -> Self {
        let spec = launch.spec;
        let half = spec.half_extent;
        Self {
            id,
            faction: launch.faction,
            body: Body {
                pos: launch.origin,
                rot: launch.direction,
                vel: Vec2::from_angle(launch.direction) * spec.speed,
                half_extents: Vec2::new(half, half),
            },
            damage: spec.damage,
            expires_at: launch.launched_at.saturating_add(spec.lifetime_ms),
            flags: spec.flags,
            spin: spec.spin,
            drops_on_kill: spec.drops_on_kill,
            image: spec.image,
        }
    }

    /// Moves the projectile and spins it if it rotates.
    pub fn advance(&mut self, dt: f32) {
        self.body.integrate(dt);
        if self.flags.contains(ProjectileFlags::ROTATING) {
            self.body.rot = (self.body.rot + self.spin * dt) % 360.0;
        }
    }

    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.expires_at
    }

    /// Rotation to draw the sprite with.
    pub fn sprite_rotation(&self) -> f32 {
        if self
            .flags
            .intersects(ProjectileFlags::ANGLED | ProjectileFlags::ROTATING)
        {
            self.body.rot
        } else {
            0.0
        }
    }
}
