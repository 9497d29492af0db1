use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::RecordId;

/// The kind of a stored record, used in error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Source,
    Product,
    Transaction,
    User,
    Post,
    Like,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Source => "Source",
            Self::Product => "Product",
            Self::Transaction => "Transaction",
            Self::User => "User",
            Self::Post => "Post",
            Self::Like => "Like",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record that can be held in an entity store.
pub trait Record: Clone + Send + Sync + 'static {
    /// The kind reported when a lookup for this record type misses.
    const KIND: EntityKind;

    /// The record's unique identifier.
    fn id(&self) -> &RecordId;
}
