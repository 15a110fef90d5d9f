//! Predicate prelude for convenient imports
//!
//! This module re-exports the most commonly used predicate types and functions.
//!
//! # Example
//!
//! ```rust
//! use tributary::predicate::prelude::*;
//!
//! let valid_age = at_least(0).and(at_most(150));
//! assert!(valid_age.test(&25));
//! ```

// Core types
pub use super::base::{Predicate, Target};

// Logical combinators
pub use super::combinators::{all_of, any_of, none_of, not, one_of, then, xor};

// Sequence quantifiers
pub use super::collection::{
    any_item, count_items, every_item, has_distinct_items, has_size, is_empty_array, none_item,
    reduce_items,
};

// Records
pub use super::object::{has_property, invoke_property, typed, Object};
pub use super::record::{record, Schema};

// Leaves
pub use super::equality::{equal_to, is_null};
pub use super::number::{at_least, at_most, greater_than, less_than, within_bound};
pub use super::string::is_blank;
