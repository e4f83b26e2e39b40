//! Enemy behaviors.
//!
//! A [`Behavior`] is a priority state table whose guards are
//! [`Condition`]s and whose actions are [`Effect`]s. Each tick it first
//! selects the actor's state from weighted conditions, then fires the
//! guarded effects of that state. Behaviors are immutable once built and
//! shared by every actor of a template; all per-actor state lives on the
//! actor itself.
mod ability;
pub mod condition;
mod context;
mod effect;
mod spec;

use std::collections::BTreeSet;

use state_machine::{StateTable, StateTableBuilder};

pub use ability::{Ability, AbilityKind};
pub use condition::Condition;
pub use context::ActorContext;
pub use effect::Effect;
pub use spec::{BehaviorSpec, StateSpec};

use crate::error::ConfigError;
use crate::state::ItemFactory;

/// A validated, shareable enemy behavior.
#[derive(Debug)]
pub struct Behavior {
    name: String,
    table: StateTable<String, Condition, Effect>,
}

impl Behavior {
    /// Builds a behavior from its declarative description.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::StateTable`] for a missing, repeated, or weighted
    ///   default state, or a duplicate state label
    /// - [`ConfigError::UnknownItem`] if an effect drops an item `items`
    ///   does not know
    /// - [`ConfigError::UnknownCooldown`] if a cooldown is reset that no
    ///   condition declares
    /// - [`ConfigError::EmptySoundList`] for a random sound with no choices
    pub fn from_spec(
        name: impl Into<String>,
        spec: &BehaviorSpec,
        items: &dyn ItemFactory,
    ) -> Result<Self, ConfigError> {
        let name = name.into();

        let declared: BTreeSet<&str> = spec
            .states
            .iter()
            .flat_map(|(_, state)| {
                let weights = state.conditions.iter().map(|(condition, _)| condition);
                let guards = state.effects.iter().map(|(_, guard)| guard);
                weights.chain(guards)
            })
            .flat_map(|condition| condition.cooldown_keys())
            .collect();

        for (_, state) in &spec.states {
            for (effect, _) in &state.effects {
                validate_effect(&name, effect, items, &declared)?;
            }
        }

        let mut builder = StateTableBuilder::new(name.clone());
        for (label, state) in &spec.states {
            builder = builder.state(
                label.clone(),
                state.default,
                state.conditions.clone(),
                state.effects.clone(),
            );
        }
        let table = builder.build().map_err(|source| ConfigError::StateTable {
            behavior: name.clone(),
            source,
        })?;

        Ok(Self { name, table })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_state(&self) -> &str {
        self.table.default_state()
    }

    /// State labels in declaration order.
    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.table.states().map(String::as_str)
    }

    /// Labels of the mods this behavior equips, which every actor running it
    /// must carry.
    pub fn required_mods(&self) -> BTreeSet<&str> {
        self.table
            .states()
            .filter_map(|state| self.table.actions(state))
            .flatten()
            .filter_map(|(effect, _)| match effect {
                Effect::EquipAndUseMod(label) => Some(label.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Picks the actor's state for this tick and stores it on the actor.
    pub fn determine_state<'s>(&'s self, ctx: &mut ActorContext<'_>) -> &'s str {
        let state = self.table.select(ctx);
        if ctx.actor.state.as_deref() != Some(state.as_str()) {
            tracing::debug!(
                actor = %ctx.actor.id,
                behavior = %self.name,
                from = ctx.actor.state.as_deref().unwrap_or("-"),
                to = %state,
                "state change"
            );
            ctx.actor.state = Some(state.clone());
        }
        state
    }

    /// Fires every effect of the actor's current state whose guard holds.
    ///
    /// An actor that has never been through [`determine_state`](Self::determine_state)
    /// runs the default state. Returns the number of effects fired.
    pub fn do_state_behavior(&self, ctx: &mut ActorContext<'_>) -> usize {
        let state = ctx
            .actor
            .state
            .clone()
            .unwrap_or_else(|| self.table.default_state().clone());
        self.table.execute(&state, ctx)
    }

    /// Selection followed by execution.
    pub fn tick(&self, ctx: &mut ActorContext<'_>) -> usize {
        self.determine_state(ctx);
        self.do_state_behavior(ctx)
    }
}

fn validate_effect(
    behavior: &str,
    effect: &Effect,
    items: &dyn ItemFactory,
    declared: &BTreeSet<&str>,
) -> Result<(), ConfigError> {
    let unknown_item = |item: &str| ConfigError::UnknownItem {
        behavior: behavior.to_string(),
        item: item.to_string(),
    };

    match effect {
        Effect::DropItem(item) if !items.knows(item) => Err(unknown_item(item)),
        Effect::MakeProjectile { projectile, .. } => match &projectile.drops_on_kill {
            Some(item) if !items.knows(item) => Err(unknown_item(item)),
            _ => Ok(()),
        },
        Effect::PlayRandomSound(sounds) if sounds.is_empty() => Err(ConfigError::EmptySoundList {
            behavior: behavior.to_string(),
        }),
        Effect::UpdateLastUse(key) if !declared.contains(key.as_str()) => {
            Err(ConfigError::UnknownCooldown {
                behavior: behavior.to_string(),
                key: key.clone(),
            })
        }
        _ => Ok(()),
    }
}
