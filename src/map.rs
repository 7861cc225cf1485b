//! Field storage for records.
//!
//! This module provides [`FieldMap`], a wrapper around [`IndexMap`] holding
//! the normalized keys and values of a [`Record`](crate::Record).
//!
//! ## Why IndexMap?
//!
//! The map remembers the order in which keys were first set, which is the
//! order they appeared in the scanned text. The writer does not rely on it:
//! records are always written with their keys sorted, see
//! [`FieldMap::sorted`].
//!
//! ## Examples
//!
//! ```rust
//! use reclist::FieldMap;
//!
//! let mut map = FieldMap::new();
//! map.insert("radius".to_string(), "0.5320".to_string());
//! map.insert("mass".to_string(), "0.107".to_string());
//!
//! let order: Vec<_> = map.keys().cloned().collect();
//! assert_eq!(order, vec!["radius", "mass"]);
//! assert_eq!(map.sorted().next(), Some(("mass", "0.107")));
//! ```

use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Normalized keys to trimmed, non-empty values.
///
/// Normalization happens in [`Record::set`](crate::Record::set); the map
/// itself stores what it is given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap(IndexMap<String, String>);

impl FieldMap {
    /// Creates an empty `FieldMap`.
    #[must_use]
    pub fn new() -> Self {
        FieldMap(IndexMap::new())
    }

    /// Inserts a key-value pair, returning the previous value of the key.
    ///
    /// A replaced key keeps its original position.
    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        self.0.insert(key, value)
    }

    /// Removes a key, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.shift_remove(key)
    }

    /// Returns the value of a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in first-insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, String> {
        self.0.keys()
    }

    /// Returns the key-value pairs sorted by key.
    pub fn sorted(&self) -> impl Iterator<Item = (&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self
            .0
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();
        pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));
        pairs.into_iter()
    }
}

impl From<FieldMap> for BTreeMap<String, String> {
    fn from(map: FieldMap) -> Self {
        map.0.into_iter().collect()
    }
}
