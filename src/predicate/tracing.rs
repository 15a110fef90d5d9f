//! Tracing support for predicates.
//!
//! [`Predicate::traced`] names a predicate so its evaluations show up as
//! `tracing` events. Without the `tracing` feature it returns the predicate
//! unchanged.

use super::base::Predicate;

impl<T: ?Sized + 'static> Predicate<T> {
    /// Emit an event for every evaluation of this predicate.
    ///
    /// Outcomes are logged at `TRACE` with the predicate name; evaluation
    /// errors at `DEBUG`. Errors are still returned to the caller.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tributary::predicate::*;
    ///
    /// let adult = at_least(18).traced("adult");
    /// assert!(adult.test(&21));
    /// ```
    #[cfg(feature = "tracing")]
    pub fn traced(self, name: &'static str) -> Predicate<T> {
        Predicate::try_of(move |value| {
            let outcome = self.try_test(value);
            match &outcome {
                Ok(matched) => tracing::trace!(predicate = name, matched, "predicate evaluated"),
                Err(err) => tracing::debug!(predicate = name, error = %err, "predicate failed"),
            }
            outcome
        })
    }

    /// Emit an event for every evaluation of this predicate.
    ///
    /// The `tracing` feature is disabled, so this returns `self`.
    #[cfg(not(feature = "tracing"))]
    pub fn traced(self, name: &'static str) -> Predicate<T> {
        let _ = name;
        self
    }
}
