//! Predicate combinators for composable boolean tests
//!
//! This module provides an algebra for building complex, reusable boolean
//! tests from small leaf predicates. Predicates are combined with logical
//! operators (`and`, `or`, `not`), counted and quantified over sequences,
//! and assembled into whole-record checks from field schemas.
//!
//! # Philosophy
//!
//! Instead of writing nested conditionals for every validation rule,
//! predicate combinators allow you to:
//!
//! - Build complex predicates from simple, reusable pieces
//! - Build a rule once and evaluate it from any number of threads
//! - Keep evaluation order explicit: `and`, `all_of`, `every_item` and
//!   friends stop left to right as soon as the answer is known
//!
//! # Example
//!
//! ```rust
//! use tributary::predicate::*;
//!
//! let scores = all_of([
//!     every_item(within_bound(0, 100)),
//!     at_least_items(greater_than(50), 2),
//!     has_distinct_items(),
//! ]);
//!
//! assert!(scores.test(&[72, 91, 40]));
//! assert!(!scores.test(&[72, 72, 40]));
//! assert!(!scores.test(&[72, 10, 40]));
//! ```
//!
//! # Records
//!
//! ```rust
//! use serde_json::{json, Value};
//! use tributary::predicate::*;
//!
//! let user = record::<Value>(
//!     Schema::new()
//!         .field("name", is_blank::<Value>().not())
//!         .field("age", typed(at_least(18_u32))),
//! );
//!
//! assert!(user.test(&json!({ "name": "ada", "age": 36 })));
//! assert!(!user.test(&json!({ "name": "", "age": 36 })));
//! ```

mod base;
mod collection;
mod combinators;
mod equality;
mod number;
mod object;
mod record;
mod string;
mod tracing;

pub mod prelude;

// Re-export core types
pub use base::{Check, Predicate, Target};

// Re-export logical combinators
pub use combinators::{
    all_of, any_of, at_least_of, at_most_of, count_of, either, neither, none_of, not, one_of,
    then, xor,
};

// Re-export sequence quantifiers and folds
pub use collection::{
    any_item, at_least_items, at_most_items, count_items, every_item, has_distinct_items,
    has_size, includes_item, is_empty_array, none_item, reduce_items, reduce_items_from_first,
    try_reduce_items,
};

// Re-export object and record combinators
pub use object::{
    as_predicate, has_property, has_property_as_predicate, invoke_property,
    invoke_property_as_predicate, items, serialized, type_of, typed, Kind, Object, Truthy,
};
pub use record::{record, Schema, SchemaNode};

// Re-export leaf predicates
pub use equality::{equal_to, instance_of, is_null, not_equal_to};
pub use number::{
    at_least, at_most, divisible_by, even, greater_than, less_than, negative, odd, positive,
    within_bound,
};
pub use string::{is_absent, is_blank, is_empty, Text};
