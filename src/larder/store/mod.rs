//! # Storage Layer
//!
//! This module defines the storage abstraction for larder. The
//! [`RecordStore`] trait allows the rest of the application to work with
//! different storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Keep domain logic **decoupled** from persistence details
//!
//! The store is deliberately untyped: it deals in flat [`Record`] mappings
//! and knows nothing about cookbooks or recipes. Reconstructing typed
//! values, and validating them, is the manager's job. That keeps one store
//! implementation identical for every record kind; only the backing file
//! differs per instance.
//!
//! Backends supply whole-collection [`load`](RecordStore::load) and
//! [`save`](RecordStore::save). The field-keyed operations are provided
//! methods implemented on the trait itself, so every backend shares the
//! same linear-scan semantics. Linear scans are fine here: collections are
//! personal-scale, and the goal is a durable, human-readable file rather
//! than throughput.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: production storage, one JSON file holding the
//!   whole collection as a top-level array of flat objects
//! - [`memory::InMemoryStore`]: in-memory storage for tests, with a
//!   write-failure toggle for exercising error paths
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── cookbooks.json      # JSON array of cookbook records
//! └── recipes.json        # JSON array of recipe records
//! ```
//!
//! Records keep their insertion order. A missing file reads as an empty
//! collection; a corrupt one is a parse error, never silently empty.

use crate::error::Result;
use serde_json::Value;

pub mod fs;
pub mod memory;

/// One persisted record: a flat mapping of field names to JSON values.
pub type Record = serde_json::Map<String, Value>;

/// Abstract interface over one file-backed collection of records.
pub trait RecordStore {
    /// Load the full collection in stored order. Missing backing state is
    /// an empty collection.
    fn load(&self) -> Result<Vec<Record>>;

    /// Replace the backing collection with `records`.
    fn save(&mut self, records: &[Record]) -> Result<()>;

    /// Append a record to the collection. No duplicate check.
    fn insert(&mut self, record: Record) -> Result<()> {
        let mut records = self.load()?;
        records.push(record);
        self.save(&records)
    }

    /// Every record, in stored order.
    fn get_all(&self) -> Result<Vec<Record>> {
        self.load()
    }

    /// The first record whose `field` equals `value`, in stored order.
    /// Records lacking the field never match.
    fn find_by_field(&self, field: &str, value: &Value) -> Result<Option<Record>> {
        let records = self.load()?;
        Ok(records.into_iter().find(|r| r.get(field) == Some(value)))
    }

    /// Merge `new_fields` into the first record whose `field` equals
    /// `value`: a shallow overwrite that preserves unrelated fields.
    /// Returns whether a record matched; no match leaves the collection
    /// untouched and is not an error.
    fn update_by_field(&mut self, field: &str, value: &Value, new_fields: Record) -> Result<bool> {
        let mut records = self.load()?;
        match records.iter_mut().find(|r| r.get(field) == Some(value)) {
            Some(record) => {
                for (key, val) in new_fields {
                    record.insert(key, val);
                }
                self.save(&records)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove every record whose `field` equals `value`. Saves only when
    /// the collection shrank; returns whether anything was removed.
    fn delete_by_field(&mut self, field: &str, value: &Value) -> Result<bool> {
        let mut records = self.load()?;
        let initial_len = records.len();
        records.retain(|r| r.get(field) != Some(value));
        if records.len() == initial_len {
            return Ok(false);
        }
        self.save(&records)?;
        Ok(true)
    }
}
