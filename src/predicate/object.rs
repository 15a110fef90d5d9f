//! Property access, method invocation and JSON bridges
//!
//! Record-shaped data is seen through the [`Object`] trait: named data
//! members come from [`Object::property`], named zero-argument methods from
//! [`Object::invoke`]. The two namespaces are separate, so
//! [`has_property`] can never call behavior and [`invoke_property`] can
//! never read a plain field.
//!
//! Member values are `serde_json::Value`s. Use [`typed`] to test one with a
//! predicate over a concrete Rust type, and [`serialized`] to check a typed
//! struct with keyed predicates.

use std::borrow::Cow;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use super::base::Predicate;
use crate::error::PredicateError;

static NULL: Value = Value::Null;

/// A value with named data members and named zero-argument methods.
///
/// # Example
///
/// ```rust
/// use std::borrow::Cow;
/// use serde_json::{json, Value};
/// use tributary::predicate::*;
///
/// struct Job {
///     name: String,
///     retries: u32,
/// }
///
/// impl Object for Job {
///     fn property(&self, key: &str) -> Option<Cow<'_, Value>> {
///         match key {
///             "name" => Some(Cow::Owned(json!(self.name))),
///             "retries" => Some(Cow::Owned(json!(self.retries))),
///             _ => None,
///         }
///     }
///
///     fn invoke(&self, method: &str) -> Option<Value> {
///         match method {
///             "exhausted" => Some(json!(self.retries >= 3)),
///             _ => None,
///         }
///     }
/// }
///
/// let healthy = all_of([
///     has_property("name", is_blank::<Value>().not()),
///     invoke_property_as_predicate("exhausted").not(),
/// ]);
/// assert!(healthy.test(&Job { name: "sync".into(), retries: 1 }));
/// assert!(!healthy.test(&Job { name: "sync".into(), retries: 3 }));
/// ```
pub trait Object {
    /// Look up a data member. `None` when the member does not exist.
    fn property(&self, key: &str) -> Option<Cow<'_, Value>>;

    /// Call a zero-argument method. `None` when there is no such method.
    fn invoke(&self, method: &str) -> Option<Value> {
        let _ = method;
        None
    }
}

impl Object for Map<String, Value> {
    fn property(&self, key: &str) -> Option<Cow<'_, Value>> {
        self.get(key).map(Cow::Borrowed)
    }

    fn invoke(&self, method: &str) -> Option<Value> {
        match method {
            "len" => Some(Value::from(self.len())),
            "is_empty" => Some(Value::Bool(self.is_empty())),
            "keys" => Some(Value::Array(
                self.keys().cloned().map(Value::String).collect(),
            )),
            _ => None,
        }
    }
}

/// Objects expose their members. Every JSON value answers `is_null`,
/// `is_array` and `is_object`; arrays, objects and strings also answer `len`
/// and `is_empty`, and objects answer `keys`.
impl Object for Value {
    fn property(&self, key: &str) -> Option<Cow<'_, Value>> {
        self.as_object().and_then(|members| members.property(key))
    }

    fn invoke(&self, method: &str) -> Option<Value> {
        match method {
            "is_null" => return Some(Value::Bool(self.is_null())),
            "is_array" => return Some(Value::Bool(self.is_array())),
            "is_object" => return Some(Value::Bool(self.is_object())),
            _ => {}
        }
        match self {
            Value::Object(members) => members.invoke(method),
            Value::Array(items) => match method {
                "len" => Some(Value::from(items.len())),
                "is_empty" => Some(Value::Bool(items.is_empty())),
                _ => None,
            },
            Value::String(text) => match method {
                "len" => Some(Value::from(text.chars().count())),
                "is_empty" => Some(Value::Bool(text.is_empty())),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Test the data member `key` of an object.
///
/// A missing member is tested as `Value::Null`, the same as an explicit
/// `null`.
///
/// # Example
///
/// ```rust
/// use serde_json::{json, Value};
/// use tributary::predicate::*;
///
/// let has_id = has_property::<Value>("id", is_blank().not());
/// assert!(has_id.test(&json!({ "id": "abc" })));
/// assert!(!has_id.test(&json!({ "id": "" })));
/// assert!(!has_id.test(&json!({})));
/// ```
pub fn has_property<O>(key: impl Into<String>, predicate: Predicate<Value>) -> Predicate<O>
where
    O: Object + ?Sized + 'static,
{
    let key = key.into();
    Predicate::try_of(move |object: &O| {
        let member = object.property(&key).unwrap_or(Cow::Borrowed(&NULL));
        predicate.try_test(&member)
    })
}

/// Call the zero-argument method `method` and test its return value.
///
/// Evaluation fails with [`PredicateError::UnknownMethod`] when the object
/// has no such method.
///
/// # Example
///
/// ```rust
/// use serde_json::{json, Value};
/// use tributary::predicate::*;
///
/// let short = invoke_property::<Value>("len", typed(less_than(3usize)));
/// assert!(short.test(&json!([1, 2])));
/// assert!(!short.test(&json!([1, 2, 3])));
/// assert!(short.try_test(&json!(5)).is_err());
/// ```
pub fn invoke_property<O>(method: impl Into<String>, predicate: Predicate<Value>) -> Predicate<O>
where
    O: Object + ?Sized + 'static,
{
    let method = method.into();
    Predicate::try_of(move |object: &O| {
        let result = object
            .invoke(&method)
            .ok_or_else(|| PredicateError::unknown_method(method.as_str()))?;
        predicate.try_test(&result)
    })
}

/// A value that can stand in for a boolean.
pub trait Truthy {
    /// The value's truthiness.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

/// `null` and `false` are falsy, as are `0` and `""`. Arrays and objects are
/// truthy even when empty.
impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(flag) => *flag,
            Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
            Value::String(text) => !text.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

/// Create a predicate that treats the value itself as the answer.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tributary::predicate::*;
///
/// assert!(as_predicate::<bool>().test(&true));
/// assert!(!as_predicate::<Option<bool>>().test(&None));
/// assert!(!as_predicate().test(&json!(0)));
/// ```
pub fn as_predicate<T: Truthy + ?Sized + 'static>() -> Predicate<T> {
    Predicate::of(|value: &T| value.is_truthy())
}

/// Shorthand for `has_property(key, as_predicate())`.
pub fn has_property_as_predicate<O>(key: impl Into<String>) -> Predicate<O>
where
    O: Object + ?Sized + 'static,
{
    has_property(key, as_predicate())
}

/// Shorthand for `invoke_property(method, as_predicate())`.
pub fn invoke_property_as_predicate<O>(method: impl Into<String>) -> Predicate<O>
where
    O: Object + ?Sized + 'static,
{
    invoke_property(method, as_predicate())
}

/// The shape of a JSON value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `null`
    Null,
    /// `true` / `false`
    Bool,
    /// Any number
    Number,
    /// A string
    String,
    /// An array
    Array,
    /// An object
    Object,
}

impl Kind {
    /// The kind of `value`.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        };
        f.write_str(name)
    }
}

/// Create a predicate that checks the shape of a JSON value.
pub fn type_of(kind: Kind) -> Predicate<Value> {
    Predicate::of(move |value: &Value| Kind::of(value) == kind)
}

/// Test a JSON value with a predicate over a concrete type.
///
/// The value is deserialized into `U` first. A value that does not fit fails
/// evaluation with [`PredicateError::Mismatch`]. Use `Option<U>` to accept
/// `null` and missing members.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tributary::predicate::*;
///
/// let big = typed(greater_than(5_i64));
/// assert!(big.test(&json!(10)));
/// assert!(!big.test(&json!(1)));
/// assert!(big.try_test(&json!("ten")).is_err());
/// ```
pub fn typed<U>(predicate: Predicate<U>) -> Predicate<Value>
where
    U: DeserializeOwned + 'static,
{
    Predicate::try_of(move |value: &Value| {
        let converted = U::deserialize(value)
            .map_err(|err| PredicateError::mismatch(std::any::type_name::<U>(), err))?;
        predicate.try_test(&converted)
    })
}

/// Test a JSON array as a sequence of values.
///
/// Evaluation fails with [`PredicateError::Mismatch`] for anything that is
/// not an array.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tributary::predicate::*;
///
/// let unique = items(has_distinct_items());
/// assert!(unique.test(&json!(["en", "fr"])));
/// assert!(!unique.test(&json!(["en", "en"])));
/// ```
pub fn items(predicate: Predicate<[Value]>) -> Predicate<Value> {
    Predicate::try_of(move |value: &Value| match value {
        Value::Array(elements) => predicate.try_test(elements),
        other => Err(PredicateError::mismatch("array", Kind::of(other))),
    })
}

/// Check a serializable value through its JSON form.
///
/// # Example
///
/// ```rust
/// use serde::Serialize;
/// use serde_json::Value;
/// use tributary::predicate::*;
///
/// #[derive(Serialize)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let on_axis = serialized::<Point>(any_of([
///     has_property("x", typed(equal_to(0))),
///     has_property("y", typed(equal_to(0))),
/// ]));
/// assert!(on_axis.test(&Point { x: 0, y: 4 }));
/// assert!(!on_axis.test(&Point { x: 1, y: 4 }));
/// ```
pub fn serialized<T>(predicate: Predicate<Value>) -> Predicate<T>
where
    T: Serialize + ?Sized + 'static,
{
    Predicate::try_of(move |value: &T| {
        let json = serde_json::to_value(value).map_err(PredicateError::evaluation)?;
        predicate.try_test(&json)
    })
}
