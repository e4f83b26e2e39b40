//! Authored dungeon layouts.

use super::Vec2;

/// What a placement puts into the world.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlacementKind {
    /// An actor spawned from the named template.
    Actor(String),
    /// An item from the catalog.
    Item(String),
    /// Blocks projectiles.
    Wall { half_extents: Vec2 },
    /// Invisible area used by enter-zone resolutions.
    Zone { half_extents: Vec2 },
}

/// One entity of a level.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub kind: PlacementKind,
    pub pos: Vec2,
    /// Initial facing in degrees; only used by actors.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rot: f32,
    /// Label groups the spawned entity joins.
    #[cfg_attr(feature = "serde", serde(default))]
    pub labels: Vec<String>,
}

/// A dungeon level: every entity placed when its scene starts.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelSpec {
    pub placements: Vec<Placement>,
}

impl LevelSpec {
    /// Template names of every placed actor, in placement order.
    pub fn actor_templates(&self) -> impl Iterator<Item = &str> {
        self.placements.iter().filter_map(|p| match &p.kind {
            PlacementKind::Actor(template) => Some(template.as_str()),
            _ => None,
        })
    }
}
