//! Foundation types for Tally.
//!
//! This crate provides the identifiers, records, and error taxonomy shared by
//! every other Tally crate. It holds no state of its own beyond the
//! [`IdAllocator`], which callers inject into the domain services.
//!
//! # Key Types
//!
//! - [`RecordId`]: server-assigned, string-encoded integer identifier
//! - [`IdAllocator`]: strictly increasing identifier source, never reuses ids
//! - [`Record`] / [`EntityKind`]: the contract every stored record satisfies
//! - [`Source`], [`Product`], [`Transaction`]: commerce records
//! - [`User`], [`Post`], [`Like`]: social records
//! - [`DomainError`]: the five recoverable failure kinds

pub mod commerce;
pub mod error;
pub mod id;
pub mod record;
pub mod social;

pub use commerce::{Product, Source, Transaction};
pub use error::{DomainError, DomainResult};
pub use id::{IdAllocator, RecordId};
pub use record::{EntityKind, Record};
pub use social::{Like, Post, User};
