use super::{Body, EntityId};

/// Static scenery that takes part in collisions or zone checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PropKind {
    /// Blocks projectiles.
    Wall,
    /// Invisible trigger region.
    Zone,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Prop {
    pub id: EntityId,
    pub kind: PropKind,
    pub body: Body,
}
