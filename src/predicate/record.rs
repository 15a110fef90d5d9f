//! Nested record schemas
//!
//! A [`Schema`] maps field names to either a leaf predicate or a nested
//! schema. [`record`] turns the whole tree into one predicate: every leaf
//! must hold for the member found at its path.

use std::collections::BTreeMap;

use serde_json::Value;

use super::base::Predicate;
use super::combinators::all_of;
use super::object::{has_property, Object};

/// One entry of a [`Schema`].
#[derive(Clone, Debug)]
pub enum SchemaNode {
    /// Test the member itself.
    Leaf(Predicate<Value>),
    /// The member is a nested record with its own fields.
    Group(Schema),
}

impl From<Predicate<Value>> for SchemaNode {
    fn from(predicate: Predicate<Value>) -> Self {
        SchemaNode::Leaf(predicate)
    }
}

impl From<Schema> for SchemaNode {
    fn from(schema: Schema) -> Self {
        SchemaNode::Group(schema)
    }
}

/// A tree of per-field predicates.
///
/// Field names are unique per level; setting a field twice keeps the last
/// node. Order does not matter.
///
/// # Example
///
/// ```rust
/// use serde_json::{json, Value};
/// use tributary::predicate::*;
///
/// let schema = Schema::new()
///     .field("name", is_blank::<Value>().not())
///     .field("value", typed(greater_than(5_i64)))
///     .field("inner", Schema::new().field("order", typed(within_bound(2_i64, 7_i64))));
///
/// let valid = record::<Value>(schema);
/// assert!(valid.test(&json!({ "name": "hello", "value": 10, "inner": { "order": 5 } })));
/// assert!(!valid.test(&json!({ "name": "hello", "value": 10, "inner": { "order": 9 } })));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Schema {
    fields: BTreeMap<String, SchemaNode>,
}

impl Schema {
    /// Create an empty schema. An empty schema accepts every value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a field.
    pub fn field(mut self, name: impl Into<String>, node: impl Into<SchemaNode>) -> Self {
        self.fields.insert(name.into(), node.into());
        self
    }

    /// Number of fields at this level.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if there are no fields at this level.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The fields at this level, by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.fields.iter().map(|(name, node)| (name.as_str(), node))
    }
}

impl<K, N> FromIterator<(K, N)> for Schema
where
    K: Into<String>,
    N: Into<SchemaNode>,
{
    fn from_iter<I: IntoIterator<Item = (K, N)>>(entries: I) -> Self {
        entries
            .into_iter()
            .fold(Schema::new(), |schema, (name, node)| schema.field(name, node))
    }
}

/// Build one predicate from a schema tree.
///
/// Each leaf becomes `has_property(name, leaf)`, each nested schema becomes
/// `has_property(name, record(nested))`, and the result is `all_of` the
/// entries of the top level.
pub fn record<O>(schema: Schema) -> Predicate<O>
where
    O: Object + ?Sized + 'static,
{
    all_of(schema.fields.into_iter().map(|(name, node)| match node {
        SchemaNode::Leaf(predicate) => has_property(name, predicate),
        SchemaNode::Group(nested) => has_property(name, record::<Value>(nested)),
    }))
}
