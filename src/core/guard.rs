//! Guard predicates for use inside transition functions.
//!
//! Guards choose between transition targets for the same event. The engine
//! has no awareness of them — a guard is ordinary caller logic over the
//! machine context, and this type is only a convenience wrapper for
//! naming and reusing such predicates.

/// Predicate over the machine context.
///
/// Transition functions evaluate guards to pick a target (or to decline
/// the event altogether). The predicate must not mutate anything; it is
/// given shared access only.
///
/// # Example
///
/// ```rust
/// use flatstate::core::Guard;
///
/// struct Ctx {
///     credits: u32,
/// }
///
/// let has_credit = Guard::new(|ctx: &Ctx| ctx.credits > 0);
///
/// assert!(has_credit.check(&Ctx { credits: 3 }));
/// assert!(!has_credit.check(&Ctx { credits: 0 }));
/// ```
pub struct Guard<C> {
    predicate: Box<dyn Fn(&C) -> bool + Send + Sync>,
}

impl<C> Guard<C> {
    /// Create a guard from a predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate the guard against the current context.
    pub fn check(&self, context: &C) -> bool {
        (self.predicate)(context)
    }
}
