//! Sequence quantifiers and the general fold
//!
//! Every predicate here is a `Predicate<[T]>`; use
//! [`via_borrow`](Predicate::via_borrow) to apply one to a `Vec<T>`.
//! Sequences are only ever read. A fold without an initial value takes its
//! seed from the first element by reference, so the caller's data is never
//! touched and the same predicate can be shared freely.

use super::base::{Predicate, Target};
use super::combinators::not;
use super::equality::equal_to;
use super::number::{at_least, at_most};
use crate::error::PredicateError;

/// Create a predicate that checks if all elements satisfy a condition.
///
/// Vacuously true for an empty sequence. Stops at the first failing element.
///
/// # Example
///
/// ```rust
/// use tributary::predicate::*;
///
/// assert!(every_item(positive::<i32>()).test(&[1, 2, 3]));
/// assert!(!every_item(positive::<i32>()).test(&[1, -2, 3]));
/// assert!(every_item(positive::<i32>()).test(&[]));
/// ```
pub fn every_item<T: 'static>(item: Predicate<T>) -> Predicate<[T]> {
    Predicate::try_of(move |items: &[T]| {
        for value in items {
            if !item.try_test(value)? {
                return Ok(false);
            }
        }
        Ok(true)
    })
}

/// Create a predicate that checks if any element satisfies a condition.
///
/// False for an empty sequence. Stops at the first passing element.
///
/// # Example
///
/// ```rust
/// use tributary::predicate::*;
///
/// assert!(any_item(equal_to(5)).test(&[1, 5, 10]));
/// assert!(!any_item(equal_to(5)).test(&[1, 2, 3]));
/// ```
pub fn any_item<T: 'static>(item: Predicate<T>) -> Predicate<[T]> {
    Predicate::try_of(move |items: &[T]| {
        for value in items {
            if item.try_test(value)? {
                return Ok(true);
            }
        }
        Ok(false)
    })
}

/// Create a predicate that checks if no element satisfies a condition.
pub fn none_item<T: 'static>(item: Predicate<T>) -> Predicate<[T]> {
    not(any_item(item))
}

/// Alias for [`any_item`].
///
/// Searching for a value is `includes_item(equal_to(value))`.
pub fn includes_item<T: 'static>(item: Predicate<T>) -> Predicate<[T]> {
    any_item(item)
}

/// Create a predicate that tests the number of elements.
///
/// # Example
///
/// ```rust
/// use tributary::predicate::*;
///
/// assert!(has_size(equal_to(3)).test(&[1, 2, 3]));
/// assert!(!has_size(at_least(4)).test(&[1, 2, 3]));
/// ```
pub fn has_size<T: 'static>(size: Predicate<usize>) -> Predicate<[T]> {
    Predicate::from_mapper(|items: &[T]| items.len(), size)
}

/// Create a predicate that checks if a sequence has no elements.
pub fn is_empty_array<T: 'static>() -> Predicate<[T]> {
    has_size(equal_to(0))
}

/// Create a predicate that checks that no two elements are equal.
///
/// Uses the element type's own `PartialEq`.
///
/// # Example
///
/// ```rust
/// use tributary::predicate::*;
///
/// assert!(has_distinct_items().test(&[1, 2, 3]));
/// assert!(!has_distinct_items().test(&[1, 2, 2]));
/// ```
pub fn has_distinct_items<T>() -> Predicate<[T]>
where
    T: PartialEq + 'static,
{
    Predicate::of(|items: &[T]| {
        items
            .iter()
            .enumerate()
            .all(|(index, item)| !items[index + 1..].contains(item))
    })
}

/// Count the elements satisfying `item` and test the count.
///
/// The count target may be a fixed predicate or a [`Target::provider`]
/// chosen from the sequence itself.
///
/// # Example
///
/// ```rust
/// use tributary::predicate::*;
///
/// // More than half of the elements must be positive.
/// let majority = count_items(
///     positive::<i32>(),
///     Target::provider(|items: &[i32]| greater_than(items.len() / 2)),
/// );
/// assert!(majority.test(&[1, 2, -3]));
/// assert!(!majority.test(&[1, -2, -3, 4]));
/// ```
pub fn count_items<T: 'static>(
    item: Predicate<T>,
    count: impl Into<Target<[T], usize>>,
) -> Predicate<[T]> {
    try_reduce_items(
        count,
        move |passed: usize, value: &T, _, _| Ok(passed + usize::from(item.try_test(value)?)),
        0,
    )
}

/// At least `n` elements satisfy `item`.
pub fn at_least_items<T: 'static>(item: Predicate<T>, n: usize) -> Predicate<[T]> {
    count_items(item, at_least(n))
}

/// At most `n` elements satisfy `item`.
pub fn at_most_items<T: 'static>(item: Predicate<T>, n: usize) -> Predicate<[T]> {
    count_items(item, at_most(n))
}

/// Fold the sequence from `initial`, then test the result.
///
/// The reducer receives the accumulator, the element, its index and the
/// whole sequence. The target may be fixed or selected from the original
/// sequence with [`Target::provider`].
///
/// # Example
///
/// ```rust
/// use tributary::predicate::*;
///
/// let sums_to_six = reduce_items(equal_to(6), |acc: i32, x: &i32, _, _| acc + x, 0);
/// let data = vec![1, 2, 3];
/// assert!(sums_to_six.test(&data));
/// assert_eq!(data, vec![1, 2, 3]);
/// ```
pub fn reduce_items<T, U, R>(
    target: impl Into<Target<[T], U>>,
    reducer: R,
    initial: U,
) -> Predicate<[T]>
where
    T: 'static,
    U: Clone + Send + Sync + 'static,
    R: Fn(U, &T, usize, &[T]) -> U + Send + Sync + 'static,
{
    try_reduce_items(
        target,
        move |acc, item, index, items| Ok(reducer(acc, item, index, items)),
        initial,
    )
}

/// Like [`reduce_items`], with a reducer that can fail.
///
/// The first reducer error stops the fold and is returned by `try_test`.
pub fn try_reduce_items<T, U, R>(
    target: impl Into<Target<[T], U>>,
    reducer: R,
    initial: U,
) -> Predicate<[T]>
where
    T: 'static,
    U: Clone + Send + Sync + 'static,
    R: Fn(U, &T, usize, &[T]) -> Result<U, PredicateError> + Send + Sync + 'static,
{
    let target = target.into();
    Predicate::try_of(move |items: &[T]| {
        let mut acc = initial.clone();
        for (index, item) in items.iter().enumerate() {
            acc = reducer(acc, item, index, items)?;
        }
        target.try_test_for(items, &acc)
    })
}

/// Fold the sequence seeded with its first element, then test the result.
///
/// The reducer runs once per remaining element, with indices counted in the
/// original sequence. Evaluating an empty sequence fails with
/// [`PredicateError::EmptySequence`].
///
/// # Example
///
/// ```rust
/// use tributary::predicate::*;
///
/// let max_is_nine = reduce_items_from_first(
///     equal_to(9),
///     |best: i32, x: &i32, _, _| best.max(*x),
/// );
/// assert!(max_is_nine.test(&[2, 9, 4]));
/// assert!(max_is_nine.try_test(&[]).is_err());
/// ```
pub fn reduce_items_from_first<T, R>(
    target: impl Into<Target<[T], T>>,
    reducer: R,
) -> Predicate<[T]>
where
    T: Clone + 'static,
    R: Fn(T, &T, usize, &[T]) -> T + Send + Sync + 'static,
{
    let target = target.into();
    Predicate::try_of(move |items: &[T]| {
        let Some((first, rest)) = items.split_first() else {
            #[cfg(feature = "tracing")]
            tracing::debug!("fold without an initial value over an empty sequence");
            return Err(PredicateError::EmptySequence);
        };
        let folded = rest
            .iter()
            .enumerate()
            .fold(first.clone(), |acc, (offset, item)| {
                reducer(acc, item, offset + 1, items)
            });
        target.try_test_for(items, &folded)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{even, greater_than, less_than, within_bound};

    fn sample() -> Vec<i32> {
        vec![2, 5, 9, 4, 7]
    }

    #[test]
    fn test_quantifiers() {
        let arr = sample();
        assert!(!includes_item(equal_to(1)).test(&arr));
        assert!(includes_item(equal_to(5)).test(&arr));
        assert!(every_item(less_than(10)).test(&arr));
        assert!(any_item(greater_than(6)).test(&arr));
        assert!(none_item(greater_than(10)).test(&arr));
        assert!(at_least_items(greater_than(6), 2).test(&arr));
        assert!(at_most_items(less_than(6), 3).test(&arr));
        assert!(!at_most_items(less_than(6), 2).test(&arr));
        assert!(has_size(equal_to(5)).test(&arr));
    }

    #[test]
    fn test_empty_sequence_edges() {
        let empty: Vec<i32> = Vec::new();
        assert!(every_item(even::<i32>()).test(&empty));
        assert!(!any_item(even::<i32>()).test(&empty));
        assert!(none_item(even::<i32>()).test(&empty));
        assert!(is_empty_array::<i32>().test(&empty));
        assert!(!is_empty_array().test(&sample()));
        assert!(has_distinct_items::<i32>().test(&empty));
    }

    #[test]
    fn test_combined_with_all_of() {
        use crate::predicate::all_of;
        let p = all_of([every_item(within_bound(0, 10)), any_item(even())]);
        assert!(p.test(&sample()));
    }

    #[test]
    fn test_has_distinct_items() {
        assert!(has_distinct_items().test(&[1, 2, 3]));
        assert!(!has_distinct_items().test(&[1, 2, 2]));
        assert!(!has_distinct_items().test(&["en", "fr", "en"]));
    }

    #[test]
    fn test_every_item_short_circuits_before_error() {
        let guarded = Predicate::try_of(|x: &i32| {
            if *x < 0 {
                Err(PredicateError::evaluation("negative"))
            } else {
                Ok(*x < 5)
            }
        });
        let p = every_item(guarded);
        assert_eq!(p.try_test(&[1, 9, -1]), Ok(false));
        assert!(p.try_test(&[1, -1, 9]).is_err());
    }

    #[test]
    fn test_reduce_with_seed_leaves_input_untouched() {
        let data = vec![1, 2, 3];
        let p = reduce_items(equal_to(6), |acc: i32, x: &i32, _, _| acc + x, 0);
        assert!(p.test(&data));
        assert!(p.test(&data));
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn test_reduce_passes_index_and_sequence() {
        let p = reduce_items(
            equal_to(true),
            |ok: bool, x: &i32, index, items: &[i32]| ok && items[index] == *x,
            true,
        );
        assert!(p.test(&sample()));
    }

    #[test]
    fn test_reduce_from_first_seeds_with_head() {
        let indices = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let seen = std::sync::Arc::clone(&indices);
        let p = reduce_items_from_first(equal_to(6), move |acc: i32, x: &i32, index, _| {
            seen.lock().unwrap().push(index);
            acc + x
        });
        let data = vec![1, 2, 3];
        assert!(p.test(&data));
        assert_eq!(data, vec![1, 2, 3]);
        assert_eq!(*indices.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_reduce_from_first_single_element_skips_reducer() {
        let p = reduce_items_from_first(equal_to(7), |_: i32, _: &i32, _, _| unreachable!());
        assert!(p.test(&[7]));
    }

    #[test]
    fn test_reduce_from_first_on_empty_fails() {
        let p = reduce_items_from_first(equal_to(0), |acc: i32, x: &i32, _, _| acc + x);
        let err = p.try_test(&[]).unwrap_err();
        assert_eq!(err, PredicateError::EmptySequence);
        assert_eq!(err.to_string(), "No initialValue provided and array is empty");
    }

    #[test]
    #[should_panic(expected = "No initialValue provided and array is empty")]
    fn test_reduce_from_first_on_empty_panics_in_test() {
        let p = reduce_items_from_first(equal_to(0), |acc: i32, x: &i32, _, _| acc + x);
        p.test(&[]);
    }

    #[test]
    fn test_count_items_propagates_leaf_errors() {
        let strict = Predicate::try_of(|x: &i32| {
            if *x == 0 {
                Err(PredicateError::evaluation("zero"))
            } else {
                Ok(*x > 0)
            }
        });
        let p = at_least_items(strict, 1);
        assert_eq!(p.try_test(&[1, 2]), Ok(true));
        assert_eq!(p.try_test(&[1, 0]), Err(PredicateError::evaluation("zero")));
    }

    #[test]
    fn test_reduce_provider_uses_original_sequence() {
        // Pass when at least half the elements are even.
        let p = count_items(
            even::<i32>(),
            Target::provider(|items: &[i32]| at_least(items.len().div_ceil(2))),
        );
        assert!(p.test(&[2, 4, 5]));
        assert!(!p.test(&[2, 5, 7]));
    }

    #[test]
    fn test_via_borrow_on_vec() {
        let p = every_item(even::<i32>()).via_borrow::<Vec<i32>>();
        assert!(p.test(&vec![2, 4]));
        assert!(!p.test(&vec![2, 3]));
    }
}
