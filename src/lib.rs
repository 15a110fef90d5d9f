//! # Tributary
//!
//! > *"Many small streams, one river"*
//!
//! A Rust library for composing boolean tests.
//!
//! ## Philosophy
//!
//! **Tributary** builds large validation rules out of small, pure pieces:
//! - **Leaves** are tiny tests: equality, comparisons, blankness
//! - **Combinators** join them: logic, counting, quantifiers over sequences,
//!   property access and whole-record schemas
//!
//! Every piece is an immutable [`Predicate`] value. Rules are assembled once
//! and reused for any number of checks, from any number of threads.
//!
//! ## Quick Example
//!
//! ```rust
//! use tributary::predicate::*;
//!
//! struct Content {
//!     is_default: bool,
//!     locale: Option<String>,
//! }
//!
//! let contents_ok: Predicate<[Content]> = all_of([
//!     is_empty_array().not(),
//!     count_items(Predicate::of(|c: &Content| c.is_default), equal_to(1usize)),
//!     Predicate::from_mapper(
//!         |contents: &[Content]| contents.iter().map(|c| c.locale.clone()).collect::<Vec<_>>(),
//!         all_of([has_distinct_items(), none_item(is_blank::<Option<String>>())])
//!             .via_borrow::<Vec<Option<String>>>(),
//!     ),
//! ]);
//!
//! let contents = vec![
//!     Content { is_default: true, locale: Some("en".into()) },
//!     Content { is_default: false, locale: Some("fr".into()) },
//! ];
//! assert!(contents_ok.test(&contents));
//! ```
//!
//! Evaluation errors (a fold with no seed over an empty sequence, a leaf that
//! cannot read its input) are never turned into `false`:
//! [`Predicate::try_test`] returns them as [`PredicateError`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod predicate;

// Re-exports
pub use error::PredicateError;
pub use predicate::{Predicate, Target};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::PredicateError;
    pub use crate::predicate::prelude::*;
}
