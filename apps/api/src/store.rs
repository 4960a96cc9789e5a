use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::ids;

/// A record managed by a [`Store`]. The id is assigned by the store at
/// creation time and is never altered afterwards.
pub trait Record: Clone {
    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    /// Applies a partial update: fields present in `patch` with the expected
    /// type override the record's fields, everything else is retained. An
    /// `id` entry in the patch must be ignored.
    fn merge(&mut self, patch: &Map<String, Value>);
}

/// The only failure a store operation can produce: no record carries the
/// requested id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("record not found")]
pub struct NotFound;

/// In-memory ordered collection of records of one resource type.
///
/// All lookups are linear scans; these are demonstration-sized collections
/// with no scale requirement, so insertion order and simplicity win over
/// indexing.
#[derive(Debug, Default)]
pub struct Store<T: Record> {
    records: Vec<T>,
}

impl<T: Record> Store<T> {
    pub fn new() -> Self {
        Store {
            records: Vec::new(),
        }
    }

    /// All records in insertion order.
    pub fn list(&self) -> Vec<T> {
        self.records.clone()
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.records.iter().find(|r| r.id() == id).cloned()
    }

    /// Assigns a fresh id to `record`, appends it, and returns the stored
    /// record. Any id already set on the input is overwritten.
    pub fn create(&mut self, mut record: T) -> T {
        record.set_id(ids::generate());
        self.records.push(record.clone());
        record
    }

    /// Merges `patch` over the record with the given id and returns the
    /// updated record. The record keeps its position and its id.
    pub fn update(&mut self, id: &str, patch: &Map<String, Value>) -> Result<T, NotFound> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(NotFound)?;
        record.merge(patch);
        Ok(record.clone())
    }

    /// Removes the record with the given id, preserving the relative order
    /// of the remaining records.
    pub fn delete(&mut self, id: &str) -> Result<(), NotFound> {
        let index = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(NotFound)?;
        self.records.remove(index);
        Ok(())
    }

    /// Case-insensitive substring search over the strings `field` yields for
    /// each record. A record matches when ANY yielded string contains
    /// `needle`; records yielding no strings never match. Matches come back
    /// in collection order.
    pub fn search<F>(&self, needle: &str, field: F) -> Vec<T>
    where
        F: Fn(&T) -> Vec<String>,
    {
        let needle = needle.to_lowercase();
        self.records
            .iter()
            .filter(|r| field(r).iter().any(|s| s.to_lowercase().contains(&needle)))
            .cloned()
            .collect()
    }
}

/// The record as it would look after `Store::update` with this patch:
/// the serialized record with the patch entries overlaid and the id kept.
/// Lets the caller validate an update before mutating the store.
pub fn preview_update<T>(record: &T, patch: &Map<String, Value>) -> anyhow::Result<Value>
where
    T: Record + Serialize,
{
    let mut value = serde_json::to_value(record)?;
    let Some(fields) = value.as_object_mut() else {
        anyhow::bail!("record did not serialize to a JSON object");
    };
    for (key, entry) in patch {
        if key != "id" {
            fields.insert(key.clone(), entry.clone());
        }
    }
    Ok(value)
}

/// A [`Store`] behind one mutex, cloneable into handlers.
///
/// One lock per store is all the coordination the service needs: operations
/// are short in-memory scans. No atomicity is promised across a handler's
/// preview-then-update sequence; a record deleted in between simply turns up
/// `NotFound`.
#[derive(Debug, Clone)]
pub struct SharedStore<T: Record>(Arc<Mutex<Store<T>>>);

impl<T: Record> SharedStore<T> {
    pub fn new(store: Store<T>) -> Self {
        SharedStore(Arc::new(Mutex::new(store)))
    }

    fn guard(&self) -> MutexGuard<'_, Store<T>> {
        // A poisoned lock only means another handler panicked mid-operation;
        // the data itself is still a valid Vec.
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list(&self) -> Vec<T> {
        self.guard().list()
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.guard().get(id)
    }

    pub fn create(&self, record: T) -> T {
        self.guard().create(record)
    }

    pub fn update(&self, id: &str, patch: &Map<String, Value>) -> Result<T, NotFound> {
        self.guard().update(id, patch)
    }

    pub fn delete(&self, id: &str) -> Result<(), NotFound> {
        self.guard().delete(id)
    }

    pub fn search<F>(&self, needle: &str, field: F) -> Vec<T>
    where
        F: Fn(&T) -> Vec<String>,
    {
        self.guard().search(needle, field)
    }
}
