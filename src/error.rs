//! Error types for predicate evaluation.
//!
//! Evaluation is fail-fast: a combinator never turns an error raised by one of
//! its children into `false`. The first error aborts the whole `try_test` call
//! and reaches the caller unchanged.

use std::fmt;

/// Error raised while evaluating a predicate.
///
/// # Examples
///
/// ```rust
/// use tributary::predicate::*;
/// use tributary::PredicateError;
///
/// let sum_is_six = reduce_items_from_first(equal_to(6), |acc: i32, x: &i32, _, _| acc + x);
///
/// assert_eq!(sum_is_six.try_test(&[1, 2, 3]), Ok(true));
/// assert_eq!(sum_is_six.try_test(&[]), Err(PredicateError::EmptySequence));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredicateError {
    /// A fold without an initial value was run over an empty sequence.
    EmptySequence,
    /// A zero-argument method was invoked on an object that does not have it.
    UnknownMethod {
        /// Name of the missing method.
        method: String,
    },
    /// A value did not have the shape a bridge expected.
    Mismatch {
        /// What the bridge expected, e.g. `"array"`.
        expected: &'static str,
        /// Description of what was found instead.
        found: String,
    },
    /// Any other failure raised by a fallible leaf.
    Evaluation(String),
}

impl PredicateError {
    /// Create an [`UnknownMethod`](PredicateError::UnknownMethod) error.
    pub fn unknown_method(method: impl Into<String>) -> Self {
        Self::UnknownMethod {
            method: method.into(),
        }
    }

    /// Create a [`Mismatch`](PredicateError::Mismatch) error.
    pub fn mismatch(expected: &'static str, found: impl fmt::Display) -> Self {
        Self::Mismatch {
            expected,
            found: found.to_string(),
        }
    }

    /// Create an [`Evaluation`](PredicateError::Evaluation) error.
    pub fn evaluation(message: impl fmt::Display) -> Self {
        Self::Evaluation(message.to_string())
    }

    /// Returns true if this error came from a seedless fold over nothing.
    pub fn is_empty_sequence(&self) -> bool {
        matches!(self, Self::EmptySequence)
    }
}

impl fmt::Display for PredicateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySequence => write!(f, "No initialValue provided and array is empty"),
            Self::UnknownMethod { method } => write!(f, "no method named `{}`", method),
            Self::Mismatch { expected, found } => {
                write!(f, "expected {}, found {}", expected, found)
            }
            Self::Evaluation(message) => write!(f, "evaluation failed: {}", message),
        }
    }
}

impl std::error::Error for PredicateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_message_is_exact() {
        assert_eq!(
            PredicateError::EmptySequence.to_string(),
            "No initialValue provided and array is empty"
        );
    }

    #[test]
    fn test_unknown_method_display() {
        let err = PredicateError::unknown_method("isFinal");
        assert_eq!(err.to_string(), "no method named `isFinal`");
        assert!(!err.is_empty_sequence());
    }

    #[test]
    fn test_mismatch_display() {
        let err = PredicateError::mismatch("array", "string \"abc\"");
        assert_eq!(err.to_string(), "expected array, found string \"abc\"");
    }

    #[test]
    fn test_evaluation_display() {
        let err = PredicateError::evaluation("division by zero");
        assert!(err.to_string().contains("division by zero"));
    }
}
