//! Commerce domain for Tally.
//!
//! This crate provides:
//! - Source and Product CRUD with referential checks (`Product.source_id`)
//! - The purchase processor: validate, resolve, check stock, then commit a
//!   stock decrement and a frozen-total [`Transaction`] as one unit
//! - `Commerce`, the service that owns all commerce stores behind one lock
//! - Bootstrap records for demos and local runs
//!
//! Deleting a Source neither cascades nor is refused; products keep their
//! now-dangling `source_id`.
//!
//! [`Transaction`]: tally_types::Transaction

pub mod input;
pub mod purchase;
pub mod seed;
pub mod service;
pub mod validation;

pub use input::{ProductFilter, ProductInput, PurchaseRequest, SourceInput};
pub use service::{Commerce, CommerceCounts};
