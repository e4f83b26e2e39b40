//! Items lying in the world and the catalog that creates them.

use std::collections::BTreeMap;

use super::{Body, EntityId, Vec2};
use crate::error::ConfigError;

/// Catalog entry for an item kind.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub label: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub image: Option<String>,
    /// Mod granted when the item is picked up.
    #[cfg_attr(feature = "serde", serde(default))]
    pub grants_mod: Option<String>,
}

/// An item lying on the map.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldItem {
    pub id: EntityId,
    pub label: String,
    pub image: Option<String>,
    pub body: Body,
}

/// Creates world items from labels.
pub trait ItemFactory {
    /// Returns `true` if `label` names a known item.
    fn knows(&self, label: &str) -> bool;

    /// Builds the item, or `None` if the label is unknown.
    fn make_item(&self, id: EntityId, label: &str, pos: Vec2) -> Option<WorldItem>;
}

/// Item catalog keyed by label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemCatalog {
    items: BTreeMap<String, ItemDefinition>,
}

impl ItemCatalog {
    pub const ITEM_HALF_EXTENT: f32 = 12.0;

    /// Builds a catalog, rejecting duplicate labels.
    pub fn new(definitions: Vec<ItemDefinition>) -> Result<Self, ConfigError> {
        let mut items = BTreeMap::new();
        for definition in definitions {
            let label = definition.label.clone();
            if items.insert(label.clone(), definition).is_some() {
                return Err(ConfigError::DuplicateLabel {
                    kind: "item",
                    label,
                });
            }
        }
        Ok(Self { items })
    }

    pub fn get(&self, label: &str) -> Option<&ItemDefinition> {
        self.items.get(label)
    }

    /// Definitions in label order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemFactory for ItemCatalog {
    fn knows(&self, label: &str) -> bool {
        self.items.contains_key(label)
    }

    fn make_item(&self, id: EntityId, label: &str, pos: Vec2) -> Option<WorldItem> {
        let definition = self.items.get(label)?;
        Some(WorldItem {
            id,
            label: definition.label.clone(),
            image: definition.image.clone(),
            body: Body::new(
                pos,
                Vec2::new(Self::ITEM_HALF_EXTENT, Self::ITEM_HALF_EXTENT),
            ),
        })
    }
}
