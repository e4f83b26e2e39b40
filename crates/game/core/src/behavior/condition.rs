//! Conditions guarding state selection and effects.

use rand::Rng;
use state_machine::Guard;

use super::ActorContext;
use crate::state::{Actor, Clock};

/// Boolean predicate over an actor.
///
/// Conditions are stateless. The only per-actor state they consult (cooldown
/// timestamps) lives in the actor's [`CooldownLedger`](crate::state::CooldownLedger),
/// so one condition can be shared by every actor of a kind.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Condition {
    /// Always holds.
    Always,

    /// Actor's health is zero.
    Dead,

    /// Actor's health is below its maximum.
    Damaged,

    /// Actor's energy is below its maximum.
    EnergyNotFull,

    /// Actor holds strictly more energy than the given amount.
    EnergyAvailable(u32),

    /// Target is strictly closer than the given distance in pixels.
    TargetClose(f32),

    /// Fires with probability `dt * rate` per tick.
    ///
    /// Approximates a Poisson process of `rate` events per second; only
    /// accurate while `dt * rate` is small, and only if checked once per tick.
    RandomRate(f32),

    /// More than `duration_ms` has elapsed since `key` was last used.
    ///
    /// Checking never resets the timer; pair it with an
    /// [`Effect::UpdateLastUse`](super::Effect::UpdateLastUse) on the same key.
    Cooldown { key: String, duration_ms: u64 },

    /// Condition must be false.
    Not(Box<Condition>),

    /// All conditions must be true.
    And(Vec<Condition>),

    /// Any condition must be true.
    Or(Vec<Condition>),
}

impl Condition {
    pub fn cooldown(key: impl Into<String>, duration_ms: u64) -> Self {
        Self::Cooldown {
            key: key.into(),
            duration_ms,
        }
    }

    pub fn negate(condition: Condition) -> Self {
        Self::Not(Box::new(condition))
    }

    pub fn check(&self, ctx: &mut ActorContext<'_>) -> bool {
        match self {
            Self::Always => true,
            Self::Dead => ctx.actor.is_dead(),
            Self::Damaged => !ctx.actor.health.is_full(),
            Self::EnergyNotFull => !ctx.actor.energy.is_full(),
            Self::EnergyAvailable(required) => ctx.actor.energy.current() > *required,
            Self::TargetClose(threshold) => ctx
                .target_distance()
                .is_some_and(|distance| distance < *threshold),
            Self::RandomRate(rate) => ctx.rng.r#gen::<f32>() < ctx.clock.dt() * rate,
            Self::Cooldown { key, duration_ms } => {
                cooldown_ready(ctx.actor, key, *duration_ms, ctx.clock)
            }
            Self::Not(inner) => !inner.check(ctx),
            Self::And(all) => all.iter().all(|c| c.check(ctx)),
            Self::Or(any) => any.iter().any(|c| c.check(ctx)),
        }
    }

    /// Progress of a cooldown condition in `[0, 1]`, for UI display.
    ///
    /// Returns `None` for every other variant.
    pub fn cooldown_fraction(&self, actor: &Actor, clock: &Clock) -> Option<f32> {
        match self {
            Self::Cooldown { key, duration_ms } => {
                Some(cooldown_fraction(actor, key, *duration_ms, clock))
            }
            _ => None,
        }
    }

    /// Every cooldown key declared in this condition tree.
    pub fn cooldown_keys(&self) -> Vec<&str> {
        let mut keys = Vec::new();
        self.collect_cooldown_keys(&mut keys);
        keys
    }

    fn collect_cooldown_keys<'a>(&'a self, keys: &mut Vec<&'a str>) {
        match self {
            Self::Cooldown { key, .. } => keys.push(key),
            Self::Not(inner) => inner.collect_cooldown_keys(keys),
            Self::And(all) | Self::Or(all) => {
                for condition in all {
                    condition.collect_cooldown_keys(keys);
                }
            }
            _ => {}
        }
    }
}

impl<'a> Guard<ActorContext<'a>> for Condition {
    #[inline]
    fn check(&self, ctx: &mut ActorContext<'a>) -> bool {
        Condition::check(self, ctx)
    }
}

/// `true` if `key` was never used or its last use is more than `duration_ms` ago.
pub fn cooldown_ready(actor: &Actor, key: &str, duration_ms: u64, clock: &Clock) -> bool {
    match actor.cooldowns.last_use(key) {
        None => true,
        Some(last_use) => clock.since(last_use) > duration_ms,
    }
}

/// Elapsed fraction of a cooldown, clamped to `[0, 1]`.
pub fn cooldown_fraction(actor: &Actor, key: &str, duration_ms: u64, clock: &Clock) -> f32 {
    match actor.cooldowns.last_use(key) {
        None => 1.0,
        Some(_) if duration_ms == 0 => 1.0,
        Some(last_use) => (clock.since(last_use) as f32 / duration_ms as f32).clamp(0.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;

    use super::*;
    use crate::behavior::testing::{Harness, zombie};
    use crate::state::{Body, Vec2};

    #[test]
    fn target_close_is_strict() {
        let mut harness = Harness::new(zombie());
        harness.target = Some(Body::new(Vec2::new(400.0, 0.0), Vec2::ZERO));

        assert!(!harness.check(&Condition::TargetClose(400.0)));
        assert!(harness.check(&Condition::TargetClose(400.5)));
    }

    #[test]
    fn target_close_without_target_is_false() {
        let mut harness = Harness::new(zombie());
        assert!(!harness.check(&Condition::TargetClose(f32::MAX)));
    }

    #[test]
    fn energy_available_is_strict() {
        let mut harness = Harness::new(zombie());
        harness.actor.energy.set(10);
        assert!(harness.check(&Condition::EnergyAvailable(9)));
        assert!(!harness.check(&Condition::EnergyAvailable(10)));
    }

    #[test]
    fn damaged_and_dead_follow_health() {
        let mut harness = Harness::new(zombie());
        assert!(!harness.check(&Condition::Damaged));
        harness.actor.health.drain(1);
        assert!(harness.check(&Condition::Damaged));
        assert!(!harness.check(&Condition::Dead));
        harness.actor.health.set(0);
        assert!(harness.check(&Condition::Dead));
    }

    #[test]
    fn composition_operators() {
        let mut harness = Harness::new(zombie());
        let always = Condition::Always;
        let dead = Condition::Dead;

        assert!(harness.check(&Condition::negate(dead.clone())));
        assert!(!harness.check(&Condition::And(vec![always.clone(), dead.clone()])));
        assert!(harness.check(&Condition::Or(vec![dead.clone(), always.clone()])));
        assert!(harness.check(&Condition::And(vec![])));
        assert!(!harness.check(&Condition::Or(vec![])));
    }

    #[test]
    fn random_rate_scales_with_dt() {
        let mut harness = Harness::new(zombie());
        // StepRng(0, 0) always yields 0.0.
        harness.rng = Box::new(StepRng::new(0, 0));

        harness.clock.advance(0);
        assert!(!harness.check(&Condition::RandomRate(5.0)));

        harness.clock.advance(16);
        assert!(harness.check(&Condition::RandomRate(5.0)));
        assert!(!harness.check(&Condition::RandomRate(0.0)));
    }

    #[test]
    fn random_rate_frequency_tracks_rate() {
        let mut harness = Harness::seeded(zombie(), 7);
        harness.clock.advance(100);

        let hits = (0..10_000)
            .filter(|_| harness.check(&Condition::RandomRate(2.0)))
            .count();
        // Expected 0.2 * 10_000.
        assert!((1_700..2_300).contains(&hits), "hits = {hits}");
    }

    #[test]
    fn cooldown_blocks_until_duration_strictly_elapsed() {
        let mut harness = Harness::new(zombie());
        let cooldown = Condition::cooldown("bite", 1000);
        harness.clock.advance(5000);
        assert!(harness.check(&cooldown));

        harness.actor.cooldowns.mark("bite", harness.clock.current_time());
        assert!(!harness.check(&cooldown));

        harness.clock.advance(1000);
        assert!(!harness.check(&cooldown));
        harness.clock.advance(1);
        assert!(harness.check(&cooldown));
    }

    #[test]
    fn cooldown_fraction_is_monotone_and_clamped() {
        let mut harness = Harness::new(zombie());
        let cooldown = Condition::cooldown("spit", 400);
        assert_eq!(cooldown.cooldown_fraction(&harness.actor, &harness.clock), Some(1.0));

        harness.actor.cooldowns.mark("spit", 0);
        let mut previous = 0.0;
        for _ in 0..10 {
            let fraction = cooldown
                .cooldown_fraction(&harness.actor, &harness.clock)
                .unwrap();
            assert!((0.0..=1.0).contains(&fraction));
            assert!(fraction >= previous);
            previous = fraction;
            harness.clock.advance(100);
        }
        assert_eq!(previous, 1.0);
        assert_eq!(Condition::Always.cooldown_fraction(&harness.actor, &harness.clock), None);
    }

    #[test]
    fn cooldown_state_is_per_actor() {
        let cooldown = Condition::cooldown("bite", 1000);
        let mut first = Harness::new(zombie());
        let mut second = Harness::new(zombie());
        first.clock.advance(10);
        second.clock.advance(10);

        first.actor.cooldowns.mark("bite", 10);
        assert!(!first.check(&cooldown));
        assert!(second.check(&cooldown));
    }

    #[test]
    fn collects_nested_cooldown_keys() {
        let condition = Condition::And(vec![
            Condition::cooldown("a", 1),
            Condition::negate(Condition::Or(vec![Condition::cooldown("b", 2), Condition::Dead])),
        ]);
        assert_eq!(condition.cooldown_keys(), vec!["a", "b"]);
    }
}
