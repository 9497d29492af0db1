use tally_types::{Record, RecordId};

/// Insertion-ordered collection of one record type.
///
/// All implementations must satisfy these invariants:
/// - `list` and `list_where` return records in insertion order.
/// - `update` keeps the record at its original position.
/// - `delete` and `remove_where` keep the relative order of survivors.
/// - The store never validates record contents.
///
/// The trait is object-safe so a store can sit behind
/// `dyn EntityStore<Item = T>`.
pub trait EntityStore {
    /// The record type held by this store.
    type Item: Record;

    /// Append a record.
    fn insert(&mut self, record: Self::Item);

    /// Look up a record by identifier.
    fn find(&self, id: &RecordId) -> Option<&Self::Item>;

    /// Look up a record by identifier for in-place mutation.
    fn find_mut(&mut self, id: &RecordId) -> Option<&mut Self::Item>;

    /// Replace the record with the given identifier.
    ///
    /// Returns the stored record, or `None` if no record had that id.
    fn update(&mut self, id: &RecordId, record: Self::Item) -> Option<&Self::Item>;

    /// Remove the record with the given identifier and return it.
    fn delete(&mut self, id: &RecordId) -> Option<Self::Item>;

    /// Remove every record matching `predicate` and return the removed
    /// records in their original order.
    fn remove_where(&mut self, predicate: &dyn Fn(&Self::Item) -> bool) -> Vec<Self::Item>;

    /// Snapshot every record whose `predicate` holds.
    fn list_where(&self, predicate: &dyn Fn(&Self::Item) -> bool) -> Vec<Self::Item>;

    /// Number of records held.
    fn len(&self) -> usize;

    /// Snapshot every record.
    fn list(&self) -> Vec<Self::Item> {
        self.list_where(&|_: &Self::Item| true)
    }

    /// Returns `true` if a record with this identifier exists.
    fn contains(&self, id: &RecordId) -> bool {
        self.find(id).is_some()
    }

    /// Returns `true` if any record matches `predicate`.
    fn any(&self, predicate: &dyn Fn(&Self::Item) -> bool) -> bool {
        !self.list_where(predicate).is_empty()
    }

    /// Returns `true` if the store holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
