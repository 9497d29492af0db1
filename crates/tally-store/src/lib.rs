//! In-memory entity storage for Tally.
//!
//! An entity store holds the records of one type, keyed by [`RecordId`] and
//! kept in insertion order. Stores are plain collections: they never reject
//! a structurally valid record and they do no locking of their own. The
//! domain services own their stores behind a single lock and layer the
//! integrity checks from [`integrity`] on top.
//!
//! # Design Rules
//!
//! 1. Surviving records keep their insertion order through every operation.
//! 2. Updates replace a record in place; they never move it.
//! 3. Lookups are linear scans by identifier equality.
//! 4. Validation is the caller's job, never the store's.
//!
//! [`RecordId`]: tally_types::RecordId

pub mod integrity;
pub mod memory;
pub mod traits;

pub use integrity::{ensure_unique, is_unique, require_reference};
pub use memory::MemoryTable;
pub use traits::EntityStore;
