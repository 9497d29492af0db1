use std::fmt;

use tally_types::{Record, RecordId};

use crate::traits::EntityStore;

/// Vec-backed, insertion-ordered entity store.
///
/// Lookups scan linearly by identifier, which is fine at in-memory scale and
/// keeps ordering trivially correct. The table does no locking; the owning
/// service serializes access.
#[derive(Clone)]
pub struct MemoryTable<T> {
    records: Vec<T>,
}

impl<T: Record> MemoryTable<T> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Create a table holding `records` in the given order.
    pub fn from_records(records: Vec<T>) -> Self {
        Self { records }
    }

    /// Iterate over the records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }

    fn position(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }
}

impl<T: Record> Default for MemoryTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> EntityStore for MemoryTable<T> {
    type Item = T;

    fn insert(&mut self, record: T) {
        self.records.push(record);
    }

    fn find(&self, id: &RecordId) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    fn find_mut(&mut self, id: &RecordId) -> Option<&mut T> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    fn update(&mut self, id: &RecordId, record: T) -> Option<&T> {
        let index = self.position(id)?;
        let slot = self.records.get_mut(index)?;
        *slot = record;
        Some(&*slot)
    }

    fn delete(&mut self, id: &RecordId) -> Option<T> {
        let index = self.position(id)?;
        Some(self.records.remove(index))
    }

    fn remove_where(&mut self, predicate: &dyn Fn(&T) -> bool) -> Vec<T> {
        let (removed, kept): (Vec<T>, Vec<T>) = std::mem::take(&mut self.records)
            .into_iter()
            .partition(|r| predicate(r));
        self.records = kept;
        if !removed.is_empty() {
            tracing::trace!(kind = %T::KIND, removed = removed.len(), "filtered records");
        }
        removed
    }

    fn list_where(&self, predicate: &dyn Fn(&T) -> bool) -> Vec<T> {
        self.records.iter().filter(|r| predicate(r)).cloned().collect()
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn any(&self, predicate: &dyn Fn(&T) -> bool) -> bool {
        self.records.iter().any(|r| predicate(r))
    }
}

impl<T: Record> fmt::Debug for MemoryTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryTable")
            .field("kind", &T::KIND)
            .field("record_count", &self.records.len())
            .finish()
    }
}
