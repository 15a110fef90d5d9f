//! The predicate value type and its core operations
//!
//! A [`Predicate<T>`] is an immutable, cheaply cloneable handle to one pure
//! evaluation function over `&T`. Every operation here returns a new handle;
//! nothing ever mutates an existing predicate or the value under test.

use std::borrow::Borrow;
use std::fmt;
use std::ops;
use std::sync::Arc;

use crate::error::PredicateError;

type EvalFn<T> = dyn Fn(&T) -> Result<bool, PredicateError> + Send + Sync;

/// A boolean test over values of type `T`.
///
/// This is the contract leaf collaborators implement. Any
/// `Fn(&T) -> bool + Send + Sync` closure is a `Check` through the blanket
/// impl, and a [`Predicate<T>`] is one too.
///
/// # Example
///
/// ```rust
/// use tributary::predicate::{Check, Predicate};
///
/// struct IsVowel;
///
/// impl Check<char> for IsVowel {
///     fn check(&self, value: &char) -> bool {
///         "aeiou".contains(*value)
///     }
/// }
///
/// let vowel = Predicate::from_check(IsVowel);
/// assert!(vowel.test(&'e'));
/// assert!(!vowel.test(&'x'));
/// ```
pub trait Check<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this test.
    fn check(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Check<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// An immutable, composable boolean test over values of type `T`.
///
/// Cloning is an `Arc` bump. Predicates are `Send + Sync` and carry no
/// per-call state, so one instance can be built once and shared by any number
/// of threads.
///
/// # Example
///
/// ```rust
/// use tributary::predicate::*;
///
/// let small_even = even::<i32>().and(less_than(10));
/// assert!(small_even.test(&4));
/// assert!(!small_even.test(&12));
/// assert!(!small_even.test(&3));
/// ```
pub struct Predicate<T: ?Sized> {
    eval: Arc<EvalFn<T>>,
}

impl<T: ?Sized> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            eval: Arc::clone(&self.eval),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("input", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl<T: ?Sized + 'static> Predicate<T> {
    /// Wrap a plain boolean test.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tributary::predicate::Predicate;
    ///
    /// let short = Predicate::of(|s: &str| s.len() < 4);
    /// assert!(short.test("abc"));
    /// assert!(!short.test("abcd"));
    /// ```
    pub fn of<F>(test: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::try_of(move |value| Ok(test(value)))
    }

    /// Wrap a test that can fail.
    ///
    /// The error is propagated by every combinator that evaluates this
    /// predicate.
    pub fn try_of<F>(test: F) -> Self
    where
        F: Fn(&T) -> Result<bool, PredicateError> + Send + Sync + 'static,
    {
        Self {
            eval: Arc::new(test),
        }
    }

    /// Wrap any [`Check`] implementation.
    pub fn from_check<C>(check: C) -> Self
    where
        C: Check<T> + 'static,
    {
        Self::of(move |value| check.check(value))
    }

    /// Evaluate the predicate, propagating any evaluation error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tributary::predicate::*;
    ///
    /// let total_is_six = reduce_items(equal_to(6), |acc: i32, x: &i32, _, _| acc + x, 0);
    /// assert_eq!(total_is_six.try_test(&[1, 2, 3]), Ok(true));
    /// ```
    #[inline]
    pub fn try_test(&self, value: &T) -> Result<bool, PredicateError> {
        (self.eval)(value)
    }

    /// Evaluate the predicate.
    ///
    /// # Panics
    ///
    /// Panics with the error's message if evaluation fails. Use
    /// [`try_test`](Predicate::try_test) where a leaf can fail and the caller
    /// wants to handle it.
    pub fn test(&self, value: &T) -> bool {
        match self.try_test(value) {
            Ok(matched) => matched,
            Err(err) => panic!("{}", err),
        }
    }

    /// Both predicates must pass. `other` runs only if `self` passed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tributary::predicate::*;
    ///
    /// let p = greater_than(0).and(less_than(100));
    /// assert!(p.test(&50));
    /// assert!(!p.test(&0));
    /// assert!(!p.test(&100));
    /// ```
    pub fn and(self, other: Predicate<T>) -> Predicate<T> {
        Predicate::try_of(move |value| Ok(self.try_test(value)? && other.try_test(value)?))
    }

    /// Either predicate must pass. `other` runs only if `self` failed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tributary::predicate::*;
    ///
    /// let p = less_than(0).or(greater_than(100));
    /// assert!(p.test(&-5));
    /// assert!(p.test(&150));
    /// assert!(!p.test(&50));
    /// ```
    pub fn or(self, other: Predicate<T>) -> Predicate<T> {
        Predicate::try_of(move |value| Ok(self.try_test(value)? || other.try_test(value)?))
    }

    /// Invert the predicate.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Predicate<T> {
        Predicate::try_of(move |value| Ok(!self.try_test(value)?))
    }

    /// Test a value derived from the input.
    ///
    /// `mapper` turns the input into a `U`. The target is either a fixed
    /// `Predicate<U>` or a [`Target::provider`] that picks the predicate from
    /// the original, unmapped input.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tributary::predicate::*;
    ///
    /// enum Currency {
    ///     Eur,
    ///     Jpy,
    /// }
    ///
    /// // The rule applied to the amount depends on the currency tag.
    /// let payment = Predicate::from_mapper(
    ///     |p: &(Currency, u32)| p.1,
    ///     Target::provider(|p: &(Currency, u32)| match p.0 {
    ///         Currency::Jpy => at_least(100u32),
    ///         Currency::Eur => at_least(1u32),
    ///     }),
    /// );
    ///
    /// assert!(payment.test(&(Currency::Eur, 5)));
    /// assert!(!payment.test(&(Currency::Jpy, 5)));
    /// ```
    pub fn from_mapper<U, M>(mapper: M, target: impl Into<Target<T, U>>) -> Predicate<T>
    where
        U: 'static,
        M: Fn(&T) -> U + Send + Sync + 'static,
    {
        let target = target.into();
        Predicate::try_of(move |value| target.try_test_for(value, &mapper(value)))
    }

    /// Test a part of the input borrowed from it, without copying.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tributary::predicate::*;
    ///
    /// struct User {
    ///     name: String,
    /// }
    ///
    /// let named = Predicate::project(|u: &User| u.name.as_str(), is_blank::<str>().not());
    /// assert!(named.test(&User { name: "ada".into() }));
    /// assert!(!named.test(&User { name: String::new() }));
    /// ```
    pub fn project<U, F>(projection: F, predicate: Predicate<U>) -> Predicate<T>
    where
        U: ?Sized + 'static,
        F: for<'a> Fn(&'a T) -> &'a U + Send + Sync + 'static,
    {
        Predicate::try_of(move |value| predicate.try_test(projection(value)))
    }

    /// Reuse this predicate on any type that borrows as `T`.
    ///
    /// Turns a `Predicate<[T]>` into a `Predicate<Vec<T>>`, a
    /// `Predicate<str>` into a `Predicate<String>`, and so on.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tributary::predicate::*;
    ///
    /// let all_positive = every_item(positive::<i32>()).via_borrow::<Vec<i32>>();
    /// assert!(all_positive.test(&vec![1, 2, 3]));
    /// ```
    pub fn via_borrow<O>(self) -> Predicate<O>
    where
        O: Borrow<T> + ?Sized + 'static,
    {
        Predicate::try_of(move |owner: &O| self.try_test(owner.borrow()))
    }
}

impl<T: ?Sized + 'static> Check<T> for Predicate<T> {
    fn check(&self, value: &T) -> bool {
        self.test(value)
    }
}

impl<T: ?Sized + 'static> ops::Not for Predicate<T> {
    type Output = Predicate<T>;

    fn not(self) -> Self::Output {
        Predicate::not(self)
    }
}

impl<T: ?Sized + 'static> ops::BitAnd for Predicate<T> {
    type Output = Predicate<T>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl<T: ?Sized + 'static> ops::BitOr for Predicate<T> {
    type Output = Predicate<T>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

/// The predicate a mapping combinator applies to its derived value.
///
/// `S` is the original input, `U` the derived value.
pub enum Target<S: ?Sized, U: ?Sized> {
    /// Always apply the same predicate.
    Fixed(Predicate<U>),
    /// Pick the predicate per call from the original input.
    Provided(Arc<dyn Fn(&S) -> Predicate<U> + Send + Sync>),
}

impl<S: ?Sized, U: ?Sized> Target<S, U> {
    /// Select the predicate from the original input on every evaluation.
    pub fn provider<F>(select: F) -> Self
    where
        F: Fn(&S) -> Predicate<U> + Send + Sync + 'static,
    {
        Self::Provided(Arc::new(select))
    }
}

impl<S: ?Sized + 'static, U: ?Sized + 'static> Target<S, U> {
    /// Evaluate the selected predicate against `derived`.
    pub(crate) fn try_test_for(&self, source: &S, derived: &U) -> Result<bool, PredicateError> {
        match self {
            Self::Fixed(predicate) => predicate.try_test(derived),
            Self::Provided(select) => select(source).try_test(derived),
        }
    }
}

impl<S: ?Sized, U: ?Sized> From<Predicate<U>> for Target<S, U> {
    fn from(predicate: Predicate<U>) -> Self {
        Self::Fixed(predicate)
    }
}

impl<S: ?Sized, U: ?Sized> Clone for Target<S, U> {
    fn clone(&self) -> Self {
        match self {
            Self::Fixed(predicate) => Self::Fixed(predicate.clone()),
            Self::Provided(select) => Self::Provided(Arc::clone(select)),
        }
    }
}

impl<S: ?Sized, U: ?Sized> fmt::Debug for Target<S, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(predicate) => f.debug_tuple("Fixed").field(predicate).finish(),
            Self::Provided(_) => f.debug_tuple("Provided").field(&"<fn>").finish(),
        }
    }
}
