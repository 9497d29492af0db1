use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Identifier of a stored record.
///
/// Identifiers are assigned by the server and travel as strings holding a
/// decimal integer (`"1"`, `"2"`, ...). Foreign-key fields carry whatever
/// string the client sent, so a `RecordId` is not guaranteed to be numeric.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the empty identifier (an unset foreign key).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The integer value, if this identifier was produced by an allocator.
    pub fn numeric(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<u64> for RecordId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordId({})", self.0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Process-wide source of record identifiers.
///
/// Identifiers are strictly increasing and never reused, even after the
/// records that held them are deleted. One allocator is shared by every
/// store of a process; it is injected into the services rather than held in
/// a global.
#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicU64,
}

impl IdAllocator {
    /// Create an allocator whose first identifier is `1`.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Create an allocator whose first identifier is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first.max(1)),
        }
    }

    /// Hand out the next identifier.
    pub fn next_id(&self) -> RecordId {
        RecordId::from(self.next.fetch_add(1, Ordering::SeqCst))
    }

    /// Make sure future identifiers are strictly greater than `id`.
    ///
    /// Used when bootstrap records with pre-assigned ids are loaded.
    /// Non-numeric ids are ignored.
    pub fn observe(&self, id: &RecordId) {
        if let Some(n) = id.numeric() {
            self.next.fetch_max(n.saturating_add(1), Ordering::SeqCst);
        }
    }

    /// The identifier the next call to [`next_id`](Self::next_id) returns.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn ids_are_strictly_increasing() {
        let alloc = IdAllocator::new();
        let a = alloc.next_id().numeric().unwrap();
        let b = alloc.next_id().numeric().unwrap();
        let c = alloc.next_id().numeric().unwrap();
        assert!(a < b && b < c);
        assert_eq!(a, 1);
    }

    #[test]
    fn observe_moves_past_seeded_ids() {
        let alloc = IdAllocator::new();
        alloc.observe(&RecordId::from("2"));
        alloc.observe(&RecordId::from("1"));
        assert_eq!(alloc.next_id(), RecordId::from("3"));
    }

    #[test]
    fn observe_never_moves_backwards() {
        let alloc = IdAllocator::starting_at(10);
        alloc.observe(&RecordId::from("4"));
        assert_eq!(alloc.peek(), 10);
    }

    #[test]
    fn observe_ignores_non_numeric_ids() {
        let alloc = IdAllocator::new();
        alloc.observe(&RecordId::from("abc"));
        assert_eq!(alloc.peek(), 1);
    }

    #[test]
    fn concurrent_allocation_never_duplicates() {
        let alloc = Arc::new(IdAllocator::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let alloc = Arc::clone(&alloc);
                thread::spawn(move || (0..100).map(|_| alloc.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for h in handles {
            for id in h.join().expect("thread should not panic") {
                assert!(seen.insert(id), "duplicate id handed out");
            }
        }
        assert_eq!(seen.len(), 800);
    }

    #[test]
    fn record_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&RecordId::from("7")).unwrap();
        assert_eq!(json, "\"7\"");
    }

    #[test]
    fn display_is_the_raw_value() {
        assert_eq!(format!("{}", RecordId::from(12u64)), "12");
    }
}
