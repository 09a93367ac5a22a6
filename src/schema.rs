//! Prefix-keyed schema tables.
//!
//! Multi-layout feeds tag each record with a leading literal (a record
//! type code). A `SchemaTable` maps such prefixes to width schemas and
//! selects the first entry, in insertion order, whose key is a prefix of
//! the record. Insertion order is the tie-break when several keys would
//! match: the earliest-inserted key wins, so callers that care should
//! insert more specific prefixes first.

use crate::error::ConfigError;
use crate::spec::WidthSpec;

/// An insertion-ordered table of line prefix -> width schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaTable {
    entries: Vec<(String, WidthSpec)>,
}

impl SchemaTable {
    /// Build a table from `(prefix, widths)` pairs, validating each
    /// widths list. Rejects an empty pair list.
    ///
    /// # Example
    /// ```
    /// use fixedwidth_rs::SchemaTable;
    ///
    /// let table = SchemaTable::from_pairs([
    ///     ("HDR", vec![3, 8]),
    ///     ("DTL", vec![3, -1, 10, 8]),
    /// ]).unwrap();
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn from_pairs<K, I, W>(pairs: I) -> Result<Self, ConfigError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, W)>,
        W: AsRef<[i64]>,
    {
        let mut table = Self {
            entries: Vec::new(),
        };
        for (key, widths) in pairs {
            table.insert(key, widths.as_ref())?;
        }
        if table.entries.is_empty() {
            return Err(ConfigError::EmptyTable);
        }
        Ok(table)
    }

    /// Add a schema under a prefix key.
    ///
    /// Re-inserting an existing key replaces its schema in place, keeping
    /// the key's original position in the match order.
    pub fn insert(&mut self, key: impl Into<String>, widths: &[i64]) -> Result<(), ConfigError> {
        let key = key.into();
        let spec = WidthSpec::new(widths)?;
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = spec,
            None => self.entries.push((key, spec)),
        }
        Ok(())
    }

    /// Select the schema for a record: the first entry whose key is a
    /// byte prefix of the record, or `None` if no key matches.
    pub(crate) fn select(&self, raw: &[u8]) -> Option<&WidthSpec> {
        self.entries
            .iter()
            .find(|(key, _)| raw.starts_with(key.as_bytes()))
            .map(|(_, spec)| spec)
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The prefix keys in match order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}
