//! Request parameter bags and their wire serialization.
//!
//! Endpoints accept loosely typed parameters. [`Params`] is an insertion-ordered
//! map from name to [`ParamValue`], serialized uniformly:
//!
//! | Value | Wire form |
//! |-------|-----------|
//! | [`ParamValue::Absent`] | key omitted |
//! | [`ParamValue::Bool`] | `"true"` / `"false"` |
//! | [`ParamValue::List`] | elements joined with `,` |
//! | anything else | its canonical string form |
//!
//! # Examples
//!
//! ```
//! use heycafe::Params;
//!
//! let params = Params::new()
//!     .with("query", "hey")
//!     .with("draft", true)
//!     .with("start", None::<u32>)
//!     .with("ids", vec!["a", "b", "c"]);
//!
//! assert_eq!(
//!     params.serialize(),
//!     vec![
//!         ("query".to_string(), "hey".to_string()),
//!         ("draft".to_string(), "true".to_string()),
//!         ("ids".to_string(), "a,b,c".to_string()),
//!     ]
//! );
//! ```

use std::fmt;

/// A single parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// No value; the key is left out of the request
    Absent,
    /// Rendered as `true` or `false`
    Bool(bool),
    /// Rendered verbatim
    Str(String),
    /// Integer rendered in decimal
    Int(i64),
    /// Float rendered with Rust's shortest round-trip formatting
    Float(f64),
    /// Rendered as comma-joined elements
    List(Vec<String>),
}

impl ParamValue {
    /// Wire representation, or `None` when the key must be omitted.
    pub fn to_wire(&self) -> Option<String> {
        match self {
            ParamValue::Absent => None,
            ParamValue::Bool(b) => Some(if *b { "true" } else { "false" }.to_string()),
            ParamValue::Str(s) => Some(s.clone()),
            ParamValue::Int(n) => Some(n.to_string()),
            ParamValue::Float(n) => Some(n.to_string()),
            ParamValue::List(items) => Some(items.join(",")),
        }
    }

    /// Whether this value is [`ParamValue::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, ParamValue::Absent)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_wire().as_deref().unwrap_or(""))
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Str(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Str(v)
    }
}

impl From<&String> for ParamValue {
    fn from(v: &String) -> Self {
        ParamValue::Str(v.clone())
    }
}

macro_rules! int_param {
    ($($t:ty),*) => {
        $(impl From<$t> for ParamValue {
            fn from(v: $t) -> Self {
                ParamValue::Int(i64::from(v))
            }
        })*
    };
}

int_param!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for ParamValue {
    fn from(v: usize) -> Self {
        match i64::try_from(v) {
            Ok(n) => ParamValue::Int(n),
            Err(_) => ParamValue::Str(v.to_string()),
        }
    }
}

impl From<u64> for ParamValue {
    fn from(v: u64) -> Self {
        match i64::try_from(v) {
            Ok(n) => ParamValue::Int(n),
            Err(_) => ParamValue::Str(v.to_string()),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl<T: ToString> From<Vec<T>> for ParamValue {
    fn from(v: Vec<T>) -> Self {
        ParamValue::List(v.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString> From<&[T]> for ParamValue {
    fn from(v: &[T]) -> Self {
        ParamValue::List(v.iter().map(ToString::to_string).collect())
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(ParamValue::Absent, Into::into)
    }
}

/// Insertion-ordered parameter map.
///
/// Setting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Params::set`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert or replace `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Whether `key` is present, absent-valued or not.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    /// Copy the present entries of `other` over this bag.
    ///
    /// Absent values in `other` are skipped, so they never erase a value
    /// already set here.
    pub fn extend(&mut self, other: Params) {
        for (k, v) in other.entries {
            if !v.is_absent() {
                self.set(k, v);
            }
        }
    }

    /// Number of entries, counting absent ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bag has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render to wire pairs, dropping absent values.
    pub fn serialize(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.to_wire().map(|s| (k.clone(), s)))
            .collect()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.set(k, v);
        }
        params
    }
}

impl<K: Into<String>, V: Into<ParamValue>, const N: usize> From<[(K, V); N]> for Params {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_serialization() {
        assert_eq!(ParamValue::from(true).to_wire().as_deref(), Some("true"));
        assert_eq!(ParamValue::from(false).to_wire().as_deref(), Some("false"));
    }

    #[test]
    fn test_list_serialization() {
        assert_eq!(
            ParamValue::from(vec!["a", "b", "c"]).to_wire().as_deref(),
            Some("a,b,c")
        );
        assert_eq!(ParamValue::from(vec![1, 2, 3]).to_wire().as_deref(), Some("1,2,3"));
        assert_eq!(ParamValue::from(Vec::<String>::new()).to_wire().as_deref(), Some(""));
    }

    #[test]
    fn test_scalars() {
        assert_eq!(ParamValue::from(20u32).to_wire().as_deref(), Some("20"));
        assert_eq!(ParamValue::from(-5i64).to_wire().as_deref(), Some("-5"));
        assert_eq!(ParamValue::from(1.5).to_wire().as_deref(), Some("1.5"));
        assert_eq!(ParamValue::from(u64::MAX).to_wire(), Some(u64::MAX.to_string()));
    }

    #[test]
    fn test_absent_is_omitted() {
        let params = Params::new()
            .with("start", None::<u32>)
            .with("count", Some(20u32))
            .with("rule", ParamValue::Absent);
        assert_eq!(params.len(), 3);
        assert_eq!(params.serialize(), vec![("count".to_string(), "20".to_string())]);
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut params = Params::from([("a", "1"), ("b", "2")]);
        params.set("a", "3");
        let keys: Vec<_> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(params.get("a"), Some(&ParamValue::Str("3".to_string())));
    }

    #[test]
    fn test_extend_skips_absent_values() {
        let mut params = Params::new().with("query", "hey").with("count", 5u32);
        params.extend(Params::new().with("query", None::<String>).with("count", 10u32));
        assert_eq!(
            params.serialize(),
            vec![
                ("query".to_string(), "hey".to_string()),
                ("count".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_extend_and_remove() {
        let mut params = Params::from([("query", "hey")]);
        params.extend(Params::new().with("count", 5u32).with("query", "other"));
        assert_eq!(params.get("query"), Some(&ParamValue::from("other")));
        assert_eq!(params.remove("count"), Some(ParamValue::Int(5)));
        assert!(!params.contains_key("count"));
        assert_eq!(params.remove("missing"), None);
    }
}
