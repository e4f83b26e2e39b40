use super::{Condition, Effect};

/// Declarative description of a behavior, as authored in content.
///
/// States keep their declaration order; it decides ties during selection.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BehaviorSpec {
    pub states: Vec<(String, StateSpec)>,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateSpec {
    #[cfg_attr(feature = "serde", serde(default))]
    pub default: bool,

    /// Weighted conditions scored during selection. Must be empty for the
    /// default state.
    #[cfg_attr(feature = "serde", serde(default))]
    pub conditions: Vec<(Condition, u32)>,

    /// Effects fired while in this state, each with its guard.
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<(Effect, Condition)>,
}

impl StateSpec {
    pub fn default_state() -> Self {
        Self {
            default: true,
            ..Self::default()
        }
    }

    pub fn weighted(conditions: Vec<(Condition, u32)>) -> Self {
        Self {
            conditions,
            ..Self::default()
        }
    }

    pub fn with_effect(mut self, effect: Effect, guard: Condition) -> Self {
        self.effects.push((effect, guard));
        self
    }
}
