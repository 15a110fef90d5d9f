//! Number predicates
//!
//! This module provides common predicates for numeric validation.

use std::ops::Rem;

use super::base::Predicate;
use crate::error::PredicateError;

/// Create a predicate that checks if value is less than threshold.
///
/// # Example
///
/// ```rust
/// use tributary::predicate::*;
///
/// assert!(less_than(5).test(&4));
/// assert!(!less_than(5).test(&5));
/// ```
pub fn less_than<N>(threshold: N) -> Predicate<N>
where
    N: PartialOrd + Send + Sync + 'static,
{
    Predicate::of(move |value: &N| *value < threshold)
}

/// Create a predicate that checks if value is greater than threshold.
///
/// # Example
///
/// ```rust
/// use tributary::predicate::*;
///
/// assert!(greater_than(5).test(&6));
/// assert!(!greater_than(5).test(&5));
/// ```
pub fn greater_than<N>(threshold: N) -> Predicate<N>
where
    N: PartialOrd + Send + Sync + 'static,
{
    Predicate::of(move |value: &N| *value > threshold)
}

/// Create a predicate that checks if value is less than or equal to threshold.
pub fn at_most<N>(threshold: N) -> Predicate<N>
where
    N: PartialOrd + Send + Sync + 'static,
{
    Predicate::of(move |value: &N| *value <= threshold)
}

/// Create a predicate that checks if value is greater than or equal to threshold.
pub fn at_least<N>(threshold: N) -> Predicate<N>
where
    N: PartialOrd + Send + Sync + 'static,
{
    Predicate::of(move |value: &N| *value >= threshold)
}

/// Create a predicate that checks if value is between lower and upper.
///
/// Both bounds are inclusive.
///
/// # Example
///
/// ```rust
/// use tributary::predicate::*;
///
/// let p = within_bound(0, 10);
/// assert!(p.test(&0));
/// assert!(p.test(&10));
/// assert!(!p.test(&-1));
/// assert!(!p.test(&11));
/// ```
pub fn within_bound<N>(lower: N, upper: N) -> Predicate<N>
where
    N: PartialOrd + Send + Sync + 'static,
{
    at_least(lower).and(at_most(upper))
}

/// Create a predicate that checks if value is positive (greater than zero).
pub fn positive<N>() -> Predicate<N>
where
    N: PartialOrd + Default + Send + Sync + 'static,
{
    greater_than(N::default())
}

/// Create a predicate that checks if value is negative (less than zero).
pub fn negative<N>() -> Predicate<N>
where
    N: PartialOrd + Default + Send + Sync + 'static,
{
    less_than(N::default())
}

/// Create a predicate that checks if value is a multiple of `divisor`.
///
/// Evaluation fails with [`PredicateError::Evaluation`] when `divisor` is
/// zero.
///
/// # Example
///
/// ```rust
/// use tributary::predicate::*;
///
/// assert!(divisible_by(3).test(&9));
/// assert!(!divisible_by(3).test(&10));
/// assert!(divisible_by(0).try_test(&10).is_err());
/// ```
pub fn divisible_by<N>(divisor: N) -> Predicate<N>
where
    N: Copy + PartialEq + Rem<Output = N> + From<u8> + Send + Sync + 'static,
{
    Predicate::try_of(move |value: &N| {
        let zero = N::from(0);
        if divisor == zero {
            return Err(PredicateError::evaluation("division by zero"));
        }
        Ok(*value % divisor == zero)
    })
}

/// Create a predicate that checks if value is even.
pub fn even<N>() -> Predicate<N>
where
    N: Copy + PartialEq + Rem<Output = N> + From<u8> + Send + Sync + 'static,
{
    divisible_by(N::from(2))
}

/// Create a predicate that checks if value is odd.
pub fn odd<N>() -> Predicate<N>
where
    N: Copy + PartialEq + Rem<Output = N> + From<u8> + Send + Sync + 'static,
{
    even().not()
}
