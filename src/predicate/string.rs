//! String predicates
//!
//! Blankness is defined over anything that may hold text: `str`, `String`,
//! optional strings and JSON values. A value is blank when it is absent or
//! holds the empty string.

use serde_json::Value;

use super::base::Predicate;
use super::combinators::any_of;

/// A value that may hold text.
pub trait Text {
    /// True when there is no value at all (`None`, JSON `null`).
    fn is_absent(&self) -> bool {
        false
    }

    /// The text held, if the value is a string.
    fn as_text(&self) -> Option<&str>;
}

impl Text for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl Text for String {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl<S: Text + ?Sized> Text for &S {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }

    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<S: Text> Text for Option<S> {
    fn is_absent(&self) -> bool {
        self.as_ref().is_none_or(Text::is_absent)
    }

    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(Text::as_text)
    }
}

impl Text for Value {
    fn is_absent(&self) -> bool {
        self.is_null()
    }

    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }
}

/// Create a predicate that checks if a value is absent.
pub fn is_absent<T: Text + ?Sized + 'static>() -> Predicate<T> {
    Predicate::of(|value: &T| value.is_absent())
}

/// Create a predicate that checks if a value holds the empty string.
///
/// # Example
///
/// ```rust
/// use tributary::predicate::*;
///
/// assert!(is_empty::<str>().test(""));
/// assert!(!is_empty::<str>().test("x"));
/// assert!(!is_empty::<Option<String>>().test(&None));
/// ```
pub fn is_empty<T: Text + ?Sized + 'static>() -> Predicate<T> {
    Predicate::of(|value: &T| value.as_text() == Some(""))
}

/// Create a predicate that checks if a value is absent or empty.
///
/// # Example
///
/// ```rust
/// use tributary::predicate::*;
///
/// let blank = is_blank::<Option<String>>();
/// assert!(blank.test(&None));
/// assert!(blank.test(&Some(String::new())));
/// assert!(!blank.test(&Some("en".to_string())));
/// ```
pub fn is_blank<T: Text + ?Sized + 'static>() -> Predicate<T> {
    any_of([is_absent(), is_empty()])
}
