use serde::{Deserialize, Serialize};

use crate::id::RecordId;
use crate::record::{EntityKind, Record};

/// A supplier that products are sourced from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub id: RecordId,
    pub name: String,
}

/// A product held in inventory.
///
/// `source_id` names a [`Source`] at the time the product was admitted.
/// Deleting that source later leaves the reference dangling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    pub source_id: RecordId,
}

/// A completed purchase.
///
/// `total` is the product price times the quantity at the moment of
/// purchase. It is never recomputed when the product changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: RecordId,
    pub product_id: RecordId,
    pub quantity: u32,
    pub total: f64,
}

impl Record for Source {
    const KIND: EntityKind = EntityKind::Source;

    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Record for Product {
    const KIND: EntityKind = EntityKind::Product;

    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Record for Transaction {
    const KIND: EntityKind = EntityKind::Transaction;

    fn id(&self) -> &RecordId {
        &self.id
    }
}
