use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Unique identifier for any entity tracked in the world.
///
/// Identifiers are allocated sequentially and never reused, so ordering by
/// id is ordering by spawn time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Continuous 2D vector in world pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `degrees` (0 = +x, counter-clockwise).
    pub fn from_angle(degrees: f32) -> Self {
        let radians = degrees.to_radians();
        Self::new(radians.cos(), radians.sin())
    }

    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    /// Angle of this vector in degrees, in `(-180, 180]`.
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x).to_degrees()
    }

    /// Rotates counter-clockwise by `degrees`.
    pub fn rotated(self, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

/// Axis-aligned rectangle described by its center and half extents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Rect {
    pub const fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Strict intersection: rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        let dx = (self.center.x - other.center.x).abs();
        let dy = (self.center.y - other.center.y).abs();
        dx < self.half_extents.x + other.half_extents.x
            && dy < self.half_extents.y + other.half_extents.y
    }
}
