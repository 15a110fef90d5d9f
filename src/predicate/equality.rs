//! Equality, absence and type predicates

use std::any::Any;

use super::base::Predicate;

/// Create a predicate that checks for equality.
///
/// # Example
///
/// ```rust
/// use tributary::predicate::*;
///
/// assert!(equal_to(5).test(&5));
/// assert!(!equal_to(5).test(&4));
/// ```
pub fn equal_to<T>(expected: T) -> Predicate<T>
where
    T: PartialEq + Send + Sync + 'static,
{
    Predicate::of(move |value: &T| *value == expected)
}

/// Create a predicate that checks for inequality.
pub fn not_equal_to<T>(unexpected: T) -> Predicate<T>
where
    T: PartialEq + Send + Sync + 'static,
{
    equal_to(unexpected).not()
}

/// Create a predicate that checks if an optional value is absent.
///
/// # Example
///
/// ```rust
/// use tributary::predicate::*;
///
/// assert!(is_null::<i32>().test(&None));
/// assert!(!is_null().test(&Some(1)));
/// ```
pub fn is_null<T: 'static>() -> Predicate<Option<T>> {
    Predicate::of(|value: &Option<T>| value.is_none())
}

/// Create a predicate that checks the concrete type behind a `dyn Any`.
///
/// # Example
///
/// ```rust
/// use std::any::Any;
/// use tributary::predicate::*;
///
/// let is_text = instance_of::<String>();
/// let boxed: Box<dyn Any> = Box::new(String::from("x"));
/// assert!(is_text.test(&*boxed));
/// assert!(!is_text.test(&5_i32));
/// ```
pub fn instance_of<U: Any>() -> Predicate<dyn Any> {
    Predicate::of(|value: &dyn Any| value.is::<U>())
}
