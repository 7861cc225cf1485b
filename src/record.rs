//! Records and name normalization.
//!
//! A [`Record`] is a type, an ID and a set of fields. All inputs are
//! sanitized rather than rejected: names are normalized, values trimmed, and
//! an empty value removes its field.
//!
//! ## Examples
//!
//! ```rust
//! use reclist::Record;
//!
//! let mut rec = Record::new("Dwarf Planet", "  Eris ").unwrap();
//! assert_eq!(rec.kind(), "dwarf-planet");
//! assert_eq!(rec.id(), "Eris");
//!
//! rec.set("Orbital  Period", " 559 years ");
//! assert_eq!(rec.get("orbital-period"), "559 years");
//!
//! rec.set("orbital period", "");
//! assert!(rec.is_empty());
//! ```

use crate::map::FieldMap;
use crate::Error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lower-cases `name` and joins its whitespace-separated words with hyphens.
///
/// This is how record types and field keys are stored.
///
/// ```rust
/// assert_eq!(reclist::normalize_name("  Orbital \t Period "), "orbital-period");
/// ```
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Collapses the whitespace runs of `id` to single spaces and trims it.
///
/// ```rust
/// assert_eq!(reclist::normalize_id(" Alpha\t Centauri "), "Alpha Centauri");
/// ```
#[must_use]
pub fn normalize_id(id: &str) -> String {
    id.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A reclist record.
///
/// The type and ID are never empty: [`Record::new`] returns `None` instead of
/// building such a record. Field values are never empty either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord", into = "RawRecord")]
pub struct Record {
    kind: String,
    id: String,
    fields: FieldMap,
}

impl Record {
    /// Creates a record without fields.
    ///
    /// Returns `None` if the normalized type or ID is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reclist::Record;
    ///
    /// assert!(Record::new("planet", "Mars").is_some());
    /// assert!(Record::new("  ", "Mars").is_none());
    /// assert!(Record::new("planet", "\t").is_none());
    /// ```
    #[must_use]
    pub fn new(kind: &str, id: &str) -> Option<Self> {
        let kind = normalize_name(kind);
        if kind.is_empty() {
            return None;
        }
        let id = normalize_id(id);
        if id.is_empty() {
            return None;
        }
        Some(Record {
            kind,
            id,
            fields: FieldMap::new(),
        })
    }

    /// Returns the record ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the record type.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the value of `key`, or an empty string if it is not set.
    ///
    /// The key is normalized before the lookup.
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.fields.get(&normalize_name(key)).unwrap_or("")
    }

    /// Sets the value of `key`.
    ///
    /// The key is normalized and the value trimmed. An empty key is ignored,
    /// and an empty value removes the field.
    pub fn set(&mut self, key: &str, value: &str) {
        let key = normalize_name(key);
        if key.is_empty() {
            return;
        }
        let value = value.trim();
        if value.is_empty() {
            self.fields.remove(&key);
            return;
        }
        self.fields.insert(key, value.to_string());
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.fields.remove(&normalize_name(key))
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(&normalize_name(key))
    }

    /// Returns the keys of the record, sorted.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.fields.sorted().map(|(key, _)| key).collect()
    }

    /// Returns the fields of the record, sorted by key.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.sorted()
    }

    /// Returns the underlying field map, in the order keys were first set.
    #[must_use]
    pub fn field_map(&self) -> &FieldMap {
        &self.fields
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Serde shape of a record.
#[derive(Serialize, Deserialize)]
struct RawRecord {
    #[serde(rename = "type")]
    kind: String,
    id: String,
    #[serde(default)]
    fields: BTreeMap<String, String>,
}

impl From<Record> for RawRecord {
    fn from(record: Record) -> Self {
        RawRecord {
            kind: record.kind,
            id: record.id,
            fields: record.fields.into(),
        }
    }
}

impl TryFrom<RawRecord> for Record {
    type Error = Error;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let mut record = Record::new(&raw.kind, &raw.id).ok_or_else(|| {
            Error::custom(format!(
                "record needs a type and an ID, got type {:?} and ID {:?}",
                raw.kind, raw.id
            ))
        })?;
        for (key, value) in &raw.fields {
            record.set(key, value);
        }
        Ok(record)
    }
}
