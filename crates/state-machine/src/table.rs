//! The state table and its two evaluation passes.

use crate::{Action, Guard};

/// Weighted guards contributing to one state's priority.
pub(crate) type Weights<G> = Vec<(G, u32)>;

/// Guarded actions fired while one state is active.
pub(crate) type GuardedActions<A, G> = Vec<(A, G)>;

/// An immutable state table built by [`StateTableBuilder`](crate::StateTableBuilder).
///
/// # Ordering
///
/// Both lists keep the declaration order of the source data. Selection ties
/// are broken by that order, so it is part of the observable behavior.
#[derive(Clone, Debug)]
pub struct StateTable<S, G, A> {
    pub(crate) default_state: S,
    pub(crate) weighted: Vec<(S, Weights<G>)>,
    pub(crate) effects: Vec<(S, GuardedActions<A, G>)>,
}

impl<S, G, A> StateTable<S, G, A>
where
    S: PartialEq,
{
    /// The state chosen when no other state scores above zero.
    pub fn default_state(&self) -> &S {
        &self.default_state
    }

    /// Iterates over every state in declaration order.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.effects.iter().map(|(state, _)| state)
    }

    /// Returns `true` if `state` is declared in this table.
    pub fn contains(&self, state: &S) -> bool {
        self.effects.iter().any(|(s, _)| s == state)
    }

    /// Selects the state with the highest summed weight.
    ///
    /// # Semantics
    ///
    /// - Every weighted state is scored, in declaration order
    /// - A state replaces the current pick only with a **strictly** higher
    ///   score, so the first state reaching the maximum wins ties
    /// - The running maximum starts at zero, so a state whose guards are all
    ///   false can never unseat the default
    pub fn select<C>(&self, ctx: &mut C) -> &S
    where
        G: Guard<C>,
    {
        let mut current = &self.default_state;
        let mut highest_priority = 0u32;

        for (state, weights) in &self.weighted {
            let priority = weights
                .iter()
                .filter(|(guard, _)| guard.check(ctx))
                .fold(0u32, |sum, (_, weight)| sum.saturating_add(*weight));

            if priority > highest_priority {
                highest_priority = priority;
                current = state;
            }
        }

        current
    }

    /// Fires every action of `state` whose guard currently holds.
    ///
    /// Actions run in declaration order and there is no early exit; several
    /// actions may fire in the same tick. Guards are evaluated lazily, so an
    /// action sees the effects of the actions fired before it.
    ///
    /// Returns the number of actions fired.
    pub fn execute<C>(&self, state: &S, ctx: &mut C) -> usize
    where
        G: Guard<C>,
        A: Action<C>,
    {
        let Some((_, actions)) = self.effects.iter().find(|(s, _)| s == state) else {
            return 0;
        };

        let mut fired = 0;
        for (action, guard) in actions {
            if guard.check(ctx) {
                action.activate(ctx);
                fired += 1;
            }
        }
        fired
    }

    /// Guarded actions declared for `state`, if the state exists.
    pub fn actions(&self, state: &S) -> Option<&[(A, G)]> {
        self.effects
            .iter()
            .find(|(s, _)| s == state)
            .map(|(_, actions)| actions.as_slice())
    }

    /// Weighted guards declared for `state`; `None` for the default state.
    pub fn weights(&self, state: &S) -> Option<&[(G, u32)]> {
        self.weighted
            .iter()
            .find(|(s, _)| s == state)
            .map(|(_, weights)| weights.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StateTableBuilder;

    struct Flags {
        near: bool,
        dead: bool,
        log: Vec<&'static str>,
    }

    #[derive(Clone, Copy)]
    enum Check {
        Near,
        Dead,
        Always,
        Never,
    }

    impl Guard<Flags> for Check {
        fn check(&self, ctx: &mut Flags) -> bool {
            match self {
                Check::Near => ctx.near,
                Check::Dead => ctx.dead,
                Check::Always => true,
                Check::Never => false,
            }
        }
    }

    struct Log(&'static str);

    impl Action<Flags> for Log {
        fn activate(&self, ctx: &mut Flags) {
            ctx.log.push(self.0);
        }
    }

    fn flags(near: bool, dead: bool) -> Flags {
        Flags {
            near,
            dead,
            log: Vec::new(),
        }
    }

    fn aggro_table() -> StateTable<&'static str, Check, Log> {
        StateTableBuilder::new("zombie")
            .state("passive", true, vec![], vec![(Log("idle"), Check::Always)])
            .state(
                "active",
                false,
                vec![(Check::Near, 1)],
                vec![(Log("pursue"), Check::Always), (Log("moan"), Check::Never)],
            )
            .state("dead", false, vec![(Check::Dead, 100)], vec![(Log("drop"), Check::Always), (Log("kill"), Check::Always)])
            .build()
            .unwrap()
    }

    #[test]
    fn defaults_when_nothing_scores() {
        let table = aggro_table();
        assert_eq!(*table.select(&mut flags(false, false)), "passive");
    }

    #[test]
    fn highest_weight_wins() {
        let table = aggro_table();
        assert_eq!(*table.select(&mut flags(true, false)), "active");
        assert_eq!(*table.select(&mut flags(true, true)), "dead");
        assert_eq!(*table.select(&mut flags(false, true)), "dead");
    }

    #[test]
    fn first_declared_state_wins_ties() {
        let table: StateTable<&str, Check, Log> = StateTableBuilder::new("tie")
            .state("idle", true, vec![], vec![])
            .state("a", false, vec![(Check::Always, 5)], vec![])
            .state("b", false, vec![(Check::Always, 5)], vec![])
            .build()
            .unwrap();

        for _ in 0..10 {
            assert_eq!(*table.select(&mut flags(false, false)), "a");
        }
    }

    #[test]
    fn execute_fires_every_satisfied_action_in_order() {
        let table = aggro_table();
        let mut ctx = flags(false, true);

        assert_eq!(table.execute(&"dead", &mut ctx), 2);
        assert_eq!(ctx.log, vec!["drop", "kill"]);

        let mut ctx = flags(true, false);
        assert_eq!(table.execute(&"active", &mut ctx), 1);
        assert_eq!(ctx.log, vec!["pursue"]);
    }

    #[test]
    fn execute_unknown_state_is_noop() {
        let table = aggro_table();
        let mut ctx = flags(false, false);
        assert_eq!(table.execute(&"fleeing", &mut ctx), 0);
        assert!(ctx.log.is_empty());
    }

    #[test]
    fn states_lists_declaration_order() {
        let table = aggro_table();
        let states: Vec<_> = table.states().copied().collect();
        assert_eq!(states, vec!["passive", "active", "dead"]);
        assert!(table.weights(&"passive").is_none());
        assert_eq!(table.weights(&"dead").map(<[_]>::len), Some(1));
    }
}
