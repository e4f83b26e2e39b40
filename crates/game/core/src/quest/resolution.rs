//! Observable scene outcomes.
//!
//! Resolutions are authored as [`ResolutionSpec`]s that refer to label
//! groups by name. Once a scene's world exists, [`ResolutionSpec::load_sprite_data`]
//! binds each spec to concrete entity ids. Bound resolutions are latched:
//! once one reports resolved it stays resolved for the rest of the scene.

use std::collections::BTreeSet;

use super::QuestError;
use crate::behavior::Condition;
use crate::env::Frame;
use crate::state::{Commands, EntityId, SpriteIndex, World};

/// Unbound resolution, as authored in quest data.
#[derive(Clone, Debug, PartialEq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ResolutionSpec {
    /// Every entity in the group has left the world.
    KillGroup(String),

    /// Any entity of `entering` overlaps any entity of `zone`.
    EnterZone { entering: String, zone: String },

    /// `condition` holds for the single entity labelled `label`.
    ConditionSatisfied { label: String, condition: Condition },

    /// The player picked this option.
    MakeDecision(String),
}

impl ResolutionSpec {
    /// Binds the spec to the entities currently carrying its labels.
    ///
    /// # Errors
    ///
    /// - [`QuestError::UnknownLabel`] if a label has no group in `index`
    /// - [`QuestError::AmbiguousLabel`] if a condition label does not name
    ///   exactly one entity
    pub fn load_sprite_data(&self, index: &SpriteIndex) -> Result<Resolution, QuestError> {
        let group = |label: &str| {
            index
                .get(label)
                .cloned()
                .ok_or_else(|| QuestError::UnknownLabel {
                    label: label.to_string(),
                })
        };

        let binding = match self {
            Self::KillGroup(label) => Binding::KillGroup {
                remaining: group(label)?,
            },
            Self::EnterZone { entering, zone } => Binding::EnterZone {
                entering: group(entering)?,
                zones: group(zone)?,
            },
            Self::ConditionSatisfied { label, condition } => {
                let members = group(label)?;
                let actor = match members.first() {
                    Some(id) if members.len() == 1 => *id,
                    _ => {
                        return Err(QuestError::AmbiguousLabel {
                            label: label.clone(),
                            count: members.len(),
                        });
                    }
                };
                Binding::ConditionSatisfied {
                    actor,
                    condition: condition.clone(),
                }
            }
            Self::MakeDecision(option) => Binding::MakeDecision {
                option: option.clone(),
            },
        };

        Ok(Resolution {
            binding,
            resolved: false,
        })
    }

    /// Binds against a populated world.
    ///
    /// Same as [`load_sprite_data`](Self::load_sprite_data) over the world's
    /// label index, and additionally rejects a condition label whose single
    /// entity is a prop, item, or projectile.
    ///
    /// # Errors
    ///
    /// Everything `load_sprite_data` reports, plus [`QuestError::NotAnActor`].
    pub fn bind(&self, world: &World) -> Result<Resolution, QuestError> {
        let resolution = self.load_sprite_data(world.sprite_index())?;
        if let (Self::ConditionSatisfied { label, .. }, Binding::ConditionSatisfied { actor, .. }) =
            (self, &resolution.binding)
        {
            if world.actor(*actor).is_none() {
                return Err(QuestError::NotAnActor {
                    label: label.clone(),
                });
            }
        }
        Ok(resolution)
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Binding {
    KillGroup {
        remaining: BTreeSet<EntityId>,
    },
    EnterZone {
        entering: BTreeSet<EntityId>,
        zones: BTreeSet<EntityId>,
    },
    ConditionSatisfied {
        actor: EntityId,
        condition: Condition,
    },
    MakeDecision {
        option: String,
    },
}

/// A resolution bound to live entities.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    binding: Binding,
    resolved: bool,
}

impl Resolution {
    /// A decision resolution not tied to any world.
    pub fn decision(option: impl Into<String>) -> Self {
        Self {
            binding: Binding::MakeDecision {
                option: option.into(),
            },
            resolved: false,
        }
    }

    /// Polls the resolution.
    ///
    /// World-bound resolutions report `false` while `world` is `None`.
    /// Once `true` has been returned, every later poll returns `true`.
    pub fn is_resolved(&mut self, world: Option<&mut World>, frame: &mut Frame<'_>) -> bool {
        if self.resolved {
            return true;
        }

        self.resolved = match (&mut self.binding, world) {
            (Binding::MakeDecision { .. }, _) => false,
            (_, None) => false,
            (Binding::KillGroup { remaining }, Some(world)) => {
                remaining.retain(|id| world.contains(*id));
                remaining.is_empty()
            }
            (Binding::EnterZone { entering, zones }, Some(world)) => {
                entering.retain(|id| world.contains(*id));
                zones.retain(|id| world.contains(*id));
                entering.iter().filter_map(|id| world.body(*id)).any(|body| {
                    zones
                        .iter()
                        .filter_map(|id| world.body(*id))
                        .any(|zone| body.rect().overlaps(&zone.rect()))
                })
            }
            (Binding::ConditionSatisfied { actor, condition }, Some(world)) => {
                let mut scratch = Commands::new();
                world
                    .with_actor_context(*actor, frame, &mut scratch, |ctx| condition.check(ctx))
                    .unwrap_or(false)
            }
        };
        self.resolved
    }

    /// Resolves a decision. Returns `false` for every other kind.
    pub fn choose(&mut self) -> bool {
        if matches!(self.binding, Binding::MakeDecision { .. }) {
            self.resolved = true;
        }
        self.resolved
    }

    /// Option text of a decision resolution.
    pub fn option(&self) -> Option<&str> {
        match &self.binding {
            Binding::MakeDecision { option } => Some(option),
            _ => None,
        }
    }

    pub fn is_decision(&self) -> bool {
        matches!(self.binding, Binding::MakeDecision { .. })
    }
}
