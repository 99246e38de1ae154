use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A value accepted by `Cache::store`.
///
/// Values are written to the backing store the way a Redis client encodes
/// command arguments: text as UTF-8, bytes unmodified, numbers as their
/// decimal representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum StoredValue {
    Text(String),
    Bytes(Vec<u8>),
    Int(i64),
    Float(f64),
}

impl StoredValue {
    /// Returns the bytes written to the backing store for this value.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Self::Text(text) => text.as_bytes().to_vec(),
            Self::Bytes(bytes) => bytes.clone(),
            Self::Int(n) => n.to_string().into_bytes(),
            Self::Float(x) => x.to_string().into_bytes(),
        }
    }

    /// Interprets command-line style input: integers first, then floats,
    /// falling back to text.
    ///
    /// # Examples
    ///
    /// ```
    /// use cachetrail_core::cache::StoredValue;
    ///
    /// assert_eq!(StoredValue::parse("42"), StoredValue::Int(42));
    /// assert_eq!(StoredValue::parse("2.5"), StoredValue::Float(2.5));
    /// assert_eq!(StoredValue::parse("hello"), StoredValue::Text("hello".into()));
    /// ```
    pub fn parse(input: &str) -> Self {
        if let Ok(n) = input.parse::<i64>() {
            return Self::Int(n);
        }
        // Only accept floats that look numeric, "inf" and "nan" stay text
        if input.chars().any(|c| c.is_ascii_digit()) {
            if let Ok(x) = input.parse::<f64>() {
                return Self::Float(x);
            }
        }
        Self::Text(input.to_string())
    }

    /// Short name of the variant, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
        }
    }
}

/// Renders the value the way it is recorded in a call history.
///
/// `store` takes a single argument, so the history records that argument
/// bare (`"foo"`, `42`) rather than wrapped in a one-element tuple. Replay
/// puts the parentheses back: `Cache.store("foo")`.
impl fmt::Display for StoredValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{:?}", text),
            Self::Bytes(bytes) => write!(f, "b\"{}\"", bytes.escape_ascii()),
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<String> for StoredValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for StoredValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Vec<u8>> for StoredValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<&[u8]> for StoredValue {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for StoredValue {
    fn from(value: &[u8; N]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl From<i64> for StoredValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for StoredValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for StoredValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Key addressing a stored value: a random v4 UUID in hyphenated form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(String);

impl Key {
    /// Generates a fresh random key.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
