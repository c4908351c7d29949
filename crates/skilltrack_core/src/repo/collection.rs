//! Insertion-ordered record collection.
//!
//! # Responsibility
//! - Hold one kind of record in insertion order.
//! - Provide id-matched replace/remove with miss reported as `None`.
//!
//! # Invariants
//! - Ids are unique within a collection; `insert` refuses duplicates.
//! - Removal preserves the relative order of the remaining records.

use crate::model::certificate::Certificate;
use crate::model::skill::Skill;

/// Records addressable by a stable text id.
pub trait Record {
    fn record_id(&self) -> &str;
}

impl Record for Skill {
    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Record for Certificate {
    fn record_id(&self) -> &str {
        &self.id
    }
}

/// In-memory collection backing one domain store list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordCollection<T: Record> {
    items: Vec<T>,
}

impl<T: Record> Default for RecordCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record> RecordCollection<T> {
    /// Builds a collection from seed records, keeping the first record for
    /// any duplicated id.
    pub fn from_records(records: impl IntoIterator<Item = T>) -> Self {
        let mut collection = Self::default();
        for record in records {
            // Duplicate seed ids are dropped; the first occurrence wins.
            let _ = collection.insert(record);
        }
        collection
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.position(id).map(|index| &self.items[index])
    }

    /// Appends `record` unless its id is already taken.
    ///
    /// Returns the rejected record on id collision.
    pub fn insert(&mut self, record: T) -> Result<&T, T> {
        if self.contains_id(record.record_id()) {
            return Err(record);
        }
        self.items.push(record);
        let last = self.items.len() - 1;
        Ok(&self.items[last])
    }

    /// Replaces the record with the same id in place.
    ///
    /// Returns the previous record, or `None` when no record matched.
    pub fn replace(&mut self, record: T) -> Option<T> {
        let index = self.position(record.record_id())?;
        Some(std::mem::replace(&mut self.items[index], record))
    }

    /// Removes the record with `id`, shifting later records down.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.record_id() == id)
    }
}
