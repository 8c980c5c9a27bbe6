//! Raw payload helpers
//!
//! Raw payloads are plain `serde_json::Value` trees. Keyed mappings keep wire
//! order (`preserve_order`), which the array conversion relies on.

use serde_json::Value;
use std::fmt;

/// Short name of a raw value's shape, used in error messages
#[must_use]
pub fn value_kind(raw: &Value) -> &'static str {
    match raw {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Constructor arguments for a non-keyed raw value
///
/// A sequence is spread into the full argument list, anything else is passed
/// as the single argument.
#[must_use]
pub fn constructor_args(raw: &Value) -> &[Value] {
    match raw {
        Value::Array(items) => items,
        other => std::slice::from_ref(other),
    }
}

/// Key of an entry in a converted array
///
/// Source payloads may use sparse or string keys for array-like data, so the
/// original key is kept next to every converted element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArrayKey {
    /// Position in a sequence, or a numeric key of a mapping
    Index(usize),
    /// Non-numeric key of a mapping
    Key(String),
}

impl ArrayKey {
    /// Build a key from a mapping key
    ///
    /// Only canonical decimal keys (`"0"`, `"17"`) become indices, so keys
    /// such as `"007"` or `"+7"` stay distinct from `"7"`.
    #[must_use]
    pub fn from_wire(key: &str) -> Self {
        let canonical = key.bytes().all(|byte| byte.is_ascii_digit())
            && !key.is_empty()
            && (key == "0" || !key.starts_with('0'));

        match key.parse::<usize>() {
            Ok(index) if canonical => Self::Index(index),
            _ => Self::Key(key.to_string()),
        }
    }
}

impl fmt::Display for ArrayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Key(key) => f.write_str(key),
        }
    }
}

impl From<usize> for ArrayKey {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for ArrayKey {
    fn from(key: &str) -> Self {
        Self::from_wire(key)
    }
}

/// Iterate the entries of an array-like raw value in wire order
pub(crate) fn array_entries(raw: &Value) -> Vec<(ArrayKey, &Value)> {
    match raw {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| (ArrayKey::Index(index), item))
            .collect(),
        Value::Object(map) => map
            .iter()
            .map(|(key, item)| (ArrayKey::from_wire(key), item))
            .collect(),
        _ => Vec::new(),
    }
}

/// Result of converting an annotated array field
///
/// Entries keep the source key and order. A slot is `None` when its element
/// could not be converted (or was null).
#[derive(Debug, Clone, PartialEq)]
pub struct MappedArray<V> {
    entries: Vec<(ArrayKey, Option<V>)>,
}

impl<V> MappedArray<V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, key: ArrayKey, value: Option<V>) {
        self.entries.push((key, value));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Converted element stored under a numeric key
    ///
    /// Returns `None` both for a missing key and for an empty slot; use
    /// [`MappedArray::slot`] to tell them apart.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&V> {
        self.slot(&ArrayKey::Index(index)).and_then(Option::as_ref)
    }

    /// Converted element stored under a mapping key
    #[must_use]
    pub fn get_key(&self, key: &str) -> Option<&V> {
        self.slot(&ArrayKey::from_wire(key)).and_then(Option::as_ref)
    }

    /// Slot stored under a source key
    #[must_use]
    pub fn slot(&self, key: &ArrayKey) -> Option<&Option<V>> {
        self.entries
            .iter()
            .find(|(entry_key, _)| entry_key == key)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ArrayKey, Option<&V>)> {
        self.entries.iter().map(|(key, value)| (key, value.as_ref()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &ArrayKey> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Successfully converted elements, in order, skipping empty slots
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().filter_map(|(_, value)| value.as_ref())
    }

    /// All slots in order, dropping the keys
    #[must_use]
    pub fn into_slots(self) -> Vec<Option<V>> {
        self.entries.into_iter().map(|(_, value)| value).collect()
    }
}

impl<V> Default for MappedArray<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<(ArrayKey, Option<V>)> for MappedArray<V> {
    fn from_iter<I: IntoIterator<Item = (ArrayKey, Option<V>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<V> IntoIterator for MappedArray<V> {
    type Item = (ArrayKey, Option<V>);
    type IntoIter = std::vec::IntoIter<(ArrayKey, Option<V>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
