//! Core guard and action traits.
//!
//! Both traits are generic over a context type `C`, allowing implementors to
//! read and mutate game state during evaluation.

/// A predicate evaluated against a context.
pub trait Guard<C>: Send + Sync {
    /// Returns `true` if the guard currently holds.
    ///
    /// The context is mutable so that guards may draw from a random source
    /// or read per-actor bookkeeping, but a guard must not otherwise change
    /// the world.
    fn check(&self, ctx: &mut C) -> bool;
}

/// A side effect applied to a context.
///
/// Actions are unconditional: guarding them is the caller's job.
pub trait Action<C>: Send + Sync {
    fn activate(&self, ctx: &mut C);
}

/// Blanket implementation for boxed guards.
///
/// This allows `Box<dyn Guard<C>>` to also implement `Guard<C>`, enabling
/// heterogeneous tables.
impl<C, G: Guard<C> + ?Sized> Guard<C> for Box<G> {
    #[inline]
    fn check(&self, ctx: &mut C) -> bool {
        (**self).check(ctx)
    }
}

impl<C, A: Action<C> + ?Sized> Action<C> for Box<A> {
    #[inline]
    fn activate(&self, ctx: &mut C) {
        (**self).activate(ctx)
    }
}
