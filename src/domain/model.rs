use crate::utils::error::{BagError, Result};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Static label reported for the container, replacing runtime type
/// introspection.
pub const TYPE_LABEL: &str = "ArgBag";

/// A single named-argument value. Scalar only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// Ordered mapping from argument names to values. Iteration follows
/// insertion order, matching the order keywords were written at the
/// call site.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgBag {
    entries: Vec<(String, Value)>,
}

impl ArgBag {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Label identifying the aggregate container type.
    pub fn type_label(&self) -> &'static str {
        TYPE_LABEL
    }

    /// Inserts a named value. A duplicate key replaces the value in
    /// place and keeps the key's original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Builds a bag from a JSON object, preserving member order.
    /// Nested arrays and objects are rejected.
    pub fn from_json_value(json: serde_json::Value) -> Result<Self> {
        let serde_json::Value::Object(map) = json else {
            return Err(BagError::ConfigError {
                message: "expected a JSON object at the top level".to_string(),
            });
        };

        let mut bag = ArgBag::new();
        for (key, value) in map {
            let value = match value {
                serde_json::Value::Bool(b) => Value::Bool(b),
                serde_json::Value::Number(n) => {
                    if let Some(i) = n.as_i64() {
                        Value::Int(i)
                    } else if let Some(x) = n.as_f64() {
                        Value::Float(x)
                    } else {
                        return Err(BagError::UnsupportedValueError {
                            key,
                            reason: format!("number out of range: {}", n),
                        });
                    }
                }
                serde_json::Value::String(s) => Value::Str(s),
                other => {
                    return Err(BagError::UnsupportedValueError {
                        key,
                        reason: format!("non-scalar value: {}", other),
                    });
                }
            };
            bag.entries.push((key, value));
        }
        Ok(bag)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let parsed: serde_json::Value = serde_json::from_str(json)?;
        Self::from_json_value(parsed)
    }
}

impl Serialize for ArgBag {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ArgBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = ArgBag::new();
        for (key, value) in iter {
            bag.insert(key, value);
        }
        bag
    }
}

impl IntoIterator for ArgBag {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Keyword-argument style construction: `bag! { name = "x", age = 29 }`.
#[macro_export]
macro_rules! bag {
    () => {
        $crate::domain::model::ArgBag::new()
    };
    ($($key:ident = $value:expr),+ $(,)?) => {{
        let mut bag = $crate::domain::model::ArgBag::new();
        $(bag.insert(stringify!($key), $value);)+
        bag
    }};
}
