//! Parameter sets shared by every request: the tagged scalar values, the
//! ordered set that is both signed and serialized, and the helpers that turn it
//! into a query string or a nonce.

pub mod nonce;
pub mod query;

pub use nonce::NonceGenerator;
pub use query::build_query_string;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

// ─── ParamValue ──────────────────────────────────────────────────────────────

/// A scalar request parameter.
///
/// The variant decides both the query-string rendering and the EIP-712 field
/// type the parameter is signed as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Bool(bool),
    Uint(u64),
    Str(String),
}

impl ParamValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Uint(n) => Some(*n),
            _ => None,
        }
    }
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Uint(n) => write!(f, "{}", n),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<u64> for ParamValue {
    fn from(n: u64) -> Self {
        Self::Uint(n)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl Serialize for ParamValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Uint(n) => serializer.serialize_u64(*n),
            Self::Str(s) => serializer.serialize_str(s),
        }
    }
}

// ─── ParamSet ────────────────────────────────────────────────────────────────

/// Insertion-ordered request parameters.
///
/// Order is significant: the typed-data schema a request is signed with and
/// the query string it is sent with are both built by walking the set front to
/// back, so the two always agree. Absent entries are kept as `None` and are
/// skipped by both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamSet {
    entries: Vec<(String, Option<ParamValue>)>,
}

impl ParamSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a present value.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        self.entries.push((name.into(), Some(value.into())));
        self
    }

    /// Append a value that may be absent.
    pub fn push_opt<V: Into<ParamValue>>(
        &mut self,
        name: impl Into<String>,
        value: Option<V>,
    ) -> &mut Self {
        self.entries.push((name.into(), value.map(Into::into)));
        self
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.push(name, value);
        self
    }

    /// Builder-style [`push_opt`](Self::push_opt).
    pub fn with_opt<V: Into<ParamValue>>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        self.push_opt(name, value);
        self
    }

    /// First present value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(n, v)| n == name && v.is_some())
            .and_then(|(_, v)| v.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Present entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries
            .iter()
            .filter_map(|(n, v)| v.as_ref().map(|v| (n.as_str(), v)))
    }

    /// Number of present entries.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Serialize for ParamSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
