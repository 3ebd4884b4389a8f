//! Prop maps and prop values.
//!
//! Prop values are never deep-compared. [`PropValue::strict_eq`] compares
//! primitives by value and function/object/array values by the identity of
//! their shared allocation, so two separately built but identical objects are
//! *not* equal while clones of one object are.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Event handler stored as a prop value.
pub type Handler = Arc<dyn Fn(&PropValue) + Send + Sync>;

/// A single prop value.
#[derive(Clone)]
pub enum PropValue {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Function(Handler),
    Object(Arc<Props>),
    Array(Arc<Vec<PropValue>>),
}

static UNDEFINED: PropValue = PropValue::Undefined;

impl PropValue {
    /// Wrap a closure as a function-valued prop.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&PropValue) + Send + Sync + 'static,
    {
        PropValue::Function(Arc::new(f))
    }

    /// Wrap a nested prop map as an object-valued prop.
    pub fn object(props: Props) -> Self {
        PropValue::Object(Arc::new(props))
    }

    /// Wrap a list of values as an array-valued prop.
    pub fn array(values: Vec<PropValue>) -> Self {
        PropValue::Array(Arc::new(values))
    }

    /// Strict equality.
    ///
    /// Primitives compare by value (`NaN` is never equal to itself, `+0`
    /// equals `-0`); functions, objects and arrays compare by reference.
    pub fn strict_eq(&self, other: &PropValue) -> bool {
        match (self, other) {
            (PropValue::Undefined, PropValue::Undefined) => true,
            (PropValue::Null, PropValue::Null) => true,
            (PropValue::Bool(a), PropValue::Bool(b)) => a == b,
            (PropValue::Number(a), PropValue::Number(b)) => a == b,
            (PropValue::String(a), PropValue::String(b)) => a == b,
            (PropValue::Function(a), PropValue::Function(b)) => Arc::ptr_eq(a, b),
            (PropValue::Object(a), PropValue::Object(b)) => Arc::ptr_eq(a, b),
            (PropValue::Array(a), PropValue::Array(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, PropValue::Undefined)
    }
}

impl PartialEq for PropValue {
    fn eq(&self, other: &Self) -> bool {
        self.strict_eq(other)
    }
}

impl fmt::Debug for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Undefined => f.write_str("undefined"),
            PropValue::Null => f.write_str("null"),
            PropValue::Bool(b) => write!(f, "{b}"),
            PropValue::Number(n) => write!(f, "{n}"),
            PropValue::String(s) => write!(f, "{s:?}"),
            PropValue::Function(func) => write!(f, "Function({:p})", Arc::as_ptr(func)),
            PropValue::Object(obj) => write!(f, "Object({:?})", obj),
            PropValue::Array(items) => f.debug_list().entries(items.iter()).finish(),
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::String(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::String(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Number(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Number(f64::from(value))
    }
}

impl From<u32> for PropValue {
    fn from(value: u32) -> Self {
        PropValue::Number(f64::from(value))
    }
}

impl From<Props> for PropValue {
    fn from(value: Props) -> Self {
        PropValue::object(value)
    }
}

impl From<Vec<PropValue>> for PropValue {
    fn from(value: Vec<PropValue>) -> Self {
        PropValue::array(value)
    }
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(PropValue::Null, Into::into)
    }
}

/// Mapping from prop name to value.
///
/// Backed by a `BTreeMap` so iteration order is deterministic.
#[derive(Clone, Default, PartialEq)]
pub struct Props(BTreeMap<String, PropValue>);

impl Props {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.0.get(key)
    }

    /// Look up a prop, reading an absent key as `Undefined`.
    pub fn get_or_undefined(&self, key: &str) -> &PropValue {
        self.0.get(key).unwrap_or(&UNDEFINED)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Insert or overwrite a prop, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Option<PropValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder form of [`Props::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }
}

/// Shallow props equality.
///
/// Equal when both maps have the same number of keys and every key of
/// `prev` maps to a strictly equal value in `next`.
pub fn shallow_equal(prev: &Props, next: &Props) -> bool {
    prev.len() == next.len()
        && prev
            .iter()
            .all(|(key, value)| value.strict_eq(next.get_or_undefined(key)))
}

impl fmt::Debug for Props {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Props
where
    K: Into<String>,
    V: Into<PropValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Build a [`Props`] map.
///
/// ```
/// use vdiff_core::props;
///
/// let props = props! { "id" => "main", "count" => 2 };
/// assert_eq!(props.len(), 2);
/// ```
#[macro_export]
macro_rules! props {
    () => {
        $crate::model::Props::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::model::Props::new()$(.with($key, $value))+
    };
}
