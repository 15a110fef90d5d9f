//! Logical combinators and the domain-mapping adapter
//!
//! The N-ary combinators take any iterable of homogeneous predicates.
//! `all_of` and `any_of` stop at the first decisive child, left to right;
//! `xor` and the counting family have to visit every child.

use super::base::Predicate;
use super::equality::equal_to;
use super::number::{at_least, at_most};

/// Test the value produced by `mapper` against a fixed predicate.
///
/// # Example
///
/// ```rust
/// use tributary::predicate::*;
///
/// let long_word = then(|s: &String| s.chars().count(), greater_than(4usize));
/// assert!(long_word.test(&"river".to_string()));
/// assert!(!long_word.test(&"lake".to_string()));
/// ```
pub fn then<T, U, M>(mapper: M, predicate: Predicate<U>) -> Predicate<T>
where
    T: ?Sized + 'static,
    U: 'static,
    M: Fn(&T) -> U + Send + Sync + 'static,
{
    Predicate::from_mapper(mapper, predicate)
}

/// Invert a predicate.
pub fn not<T: ?Sized + 'static>(predicate: Predicate<T>) -> Predicate<T> {
    predicate.not()
}

/// Check if all predicates are satisfied.
///
/// Vacuously true for an empty list. Stops at the first failure.
///
/// # Example
///
/// ```rust
/// use tributary::predicate::*;
///
/// let bounds = all_of([greater_than(0), greater_than(-10), less_than(100)]);
/// assert!(bounds.test(&50));
/// assert!(!bounds.test(&-5));
/// assert!(all_of(Vec::<Predicate<i32>>::new()).test(&0));
/// ```
pub fn all_of<T, I>(predicates: I) -> Predicate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Predicate<T>>,
{
    let predicates: Vec<_> = predicates.into_iter().collect();
    Predicate::try_of(move |value| {
        for predicate in &predicates {
            if !predicate.try_test(value)? {
                return Ok(false);
            }
        }
        Ok(true)
    })
}

/// Check if any predicate is satisfied.
///
/// False for an empty list. Stops at the first success.
///
/// # Example
///
/// ```rust
/// use tributary::predicate::*;
///
/// let special = any_of([equal_to(1), equal_to(5), equal_to(10)]);
/// assert!(special.test(&5));
/// assert!(!special.test(&7));
/// ```
pub fn any_of<T, I>(predicates: I) -> Predicate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Predicate<T>>,
{
    let predicates: Vec<_> = predicates.into_iter().collect();
    Predicate::try_of(move |value| {
        for predicate in &predicates {
            if predicate.try_test(value)? {
                return Ok(true);
            }
        }
        Ok(false)
    })
}

/// Check if no predicate is satisfied. Equivalent to `not(any_of(...))`.
///
/// # Example
///
/// ```rust
/// use tributary::predicate::*;
///
/// let ordinary = none_of([equal_to(1), equal_to(5), equal_to(10)]);
/// assert!(ordinary.test(&7));
/// assert!(!ordinary.test(&5));
/// ```
pub fn none_of<T, I>(predicates: I) -> Predicate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Predicate<T>>,
{
    not(any_of(predicates))
}

/// True when an odd number of predicates pass.
///
/// This is a parity fold, not "exactly one": three passing predicates make
/// `xor` true as well.
///
/// # Example
///
/// ```rust
/// use tributary::predicate::*;
///
/// let odd_hits = xor([greater_than(0), greater_than(10), greater_than(20)]);
/// assert!(odd_hits.test(&5)); // one passes
/// assert!(!odd_hits.test(&15)); // two pass
/// assert!(odd_hits.test(&25)); // three pass
/// ```
pub fn xor<T, I>(predicates: I) -> Predicate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Predicate<T>>,
{
    let predicates: Vec<_> = predicates.into_iter().collect();
    Predicate::try_of(move |value| {
        let mut parity = false;
        for predicate in &predicates {
            parity ^= predicate.try_test(value)?;
        }
        Ok(parity)
    })
}

/// True when exactly one of the two predicates passes.
pub fn either<T: ?Sized + 'static>(first: Predicate<T>, second: Predicate<T>) -> Predicate<T> {
    Predicate::try_of(move |value| Ok(first.try_test(value)? != second.try_test(value)?))
}

/// True when neither predicate passes.
pub fn neither<T: ?Sized + 'static>(first: Predicate<T>, second: Predicate<T>) -> Predicate<T> {
    none_of([first, second])
}

/// Count the passing predicates and test the count.
///
/// # Example
///
/// ```rust
/// use tributary::predicate::*;
///
/// let two_or_three = count_of(
///     [greater_than(0), even(), less_than(100)],
///     within_bound(2usize, 3usize),
/// );
/// assert!(two_or_three.test(&7)); // positive, below 100
/// assert!(!two_or_three.test(&-7)); // below 100 only
/// ```
pub fn count_of<T, I>(predicates: I, count: Predicate<usize>) -> Predicate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Predicate<T>>,
{
    let predicates: Vec<_> = predicates.into_iter().collect();
    Predicate::try_of(move |value| {
        let mut passed = 0usize;
        for predicate in &predicates {
            if predicate.try_test(value)? {
                passed += 1;
            }
        }
        count.try_test(&passed)
    })
}

/// At least `n` of the predicates pass.
pub fn at_least_of<T, I>(predicates: I, n: usize) -> Predicate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Predicate<T>>,
{
    count_of(predicates, at_least(n))
}

/// At most `n` of the predicates pass.
pub fn at_most_of<T, I>(predicates: I, n: usize) -> Predicate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Predicate<T>>,
{
    count_of(predicates, at_most(n))
}

/// Exactly one of the predicates passes.
///
/// # Example
///
/// ```rust
/// use tributary::predicate::*;
///
/// let single_hit = one_of([greater_than(0), greater_than(10), greater_than(20)]);
/// assert!(single_hit.test(&5));
/// assert!(!single_hit.test(&25)); // xor would accept this one
/// ```
pub fn one_of<T, I>(predicates: I) -> Predicate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Predicate<T>>,
{
    count_of(predicates, equal_to(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PredicateError;
    use crate::predicate::{even, greater_than, less_than, positive};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn no_predicates() -> Vec<Predicate<i32>> {
        Vec::new()
    }

    fn boom() -> Predicate<i32> {
        Predicate::try_of(|_: &i32| Err(PredicateError::evaluation("boom")))
    }

    #[test]
    fn test_empty_lists() {
        assert!(all_of(no_predicates()).test(&0));
        assert!(!any_of(no_predicates()).test(&0));
        assert!(none_of(no_predicates()).test(&0));
        assert!(!xor(no_predicates()).test(&0));
    }

    #[test]
    fn test_all_of_stops_at_first_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = {
            let calls = Arc::clone(&calls);
            Predicate::of(move |_: &i32| {
                calls.fetch_add(1, Ordering::SeqCst);
                true
            })
        };
        let p = all_of([less_than(0), counter, boom()]);
        assert_eq!(p.try_test(&5), Ok(false));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_any_of_stops_at_first_success() {
        let p = any_of([positive::<i32>(), boom()]);
        assert_eq!(p.try_test(&5), Ok(true));
        assert_eq!(p.try_test(&-5), Err(PredicateError::evaluation("boom")));
    }

    #[test]
    fn test_none_of() {
        let p = none_of([equal_to(1), equal_to(5), equal_to(10)]);
        assert!(!p.test(&1));
        assert!(p.test(&2));
    }

    #[test]
    fn test_xor_is_parity() {
        let p = positive::<i32>();
        assert!(xor([p.clone()]).test(&1));
        assert!(!xor([p.clone()]).test(&-1));
        assert!(!xor([p.clone(), p.clone()]).test(&1));
        assert!(!xor([p.clone(), p]).test(&-1));
    }

    #[test]
    fn test_either() {
        let p = either(positive::<i32>(), even());
        assert!(p.test(&3)); // positive only
        assert!(p.test(&-2)); // even only
        assert!(!p.test(&4)); // both
        assert!(!p.test(&-3)); // neither
    }

    #[test]
    fn test_neither() {
        let p = neither(positive::<i32>(), even());
        assert!(p.test(&-3));
        assert!(!p.test(&-2));
        assert!(!p.test(&3));
    }

    #[test]
    fn test_counting_family() {
        let ps = || [greater_than(0), greater_than(10), greater_than(20)];
        assert!(at_least_of(ps(), 2).test(&15));
        assert!(!at_least_of(ps(), 2).test(&5));
        assert!(at_most_of(ps(), 1).test(&5));
        assert!(!at_most_of(ps(), 1).test(&15));
        assert!(one_of(ps()).test(&5));
        assert!(!one_of(ps()).test(&-5));
    }

    #[test]
    fn test_then() {
        let p = then(|pair: &(i32, i32)| pair.0 + pair.1, equal_to(10));
        assert!(p.test(&(4, 6)));
        assert!(!p.test(&(4, 5)));
    }

    #[test]
    fn test_complex_chain() {
        // not((0 < x < 10) or x > 100)
        let p = not(all_of([greater_than(0), less_than(10)]).or(greater_than(100)));
        assert!(p.test(&0));
        assert!(p.test(&50));
        assert!(!p.test(&5));
        assert!(!p.test(&150));
    }
}
