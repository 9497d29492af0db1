//! Bootstrap records for demos and local runs.

use std::sync::Arc;

use tally_types::{IdAllocator, Product, Source};

pub fn sample_sources() -> Vec<Source> {
    vec![
        Source {
            id: "1".into(),
            name: "Supplier A".into(),
        },
        Source {
            id: "2".into(),
            name: "Supplier B".into(),
        },
    ]
}

pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".into(),
            name: "Laptop".into(),
            description: "Gaming laptop".into(),
            price: 15_000_000.0,
            stock: 10,
            source_id: "1".into(),
        },
        Product {
            id: "2".into(),
            name: "Mouse".into(),
            description: "Wireless mouse".into(),
            price: 250_000.0,
            stock: 50,
            source_id: "2".into(),
        },
    ]
}

/// A commerce service preloaded with the sample sources and products.
pub fn sample(ids: Arc<IdAllocator>) -> crate::Commerce {
    crate::Commerce::from_records(ids, sample_sources(), sample_products(), Vec::new())
}
