use serde::Deserialize;
use tally_types::RecordId;

/// Client-supplied fields of a [`Source`](tally_types::Source).
///
/// Absent fields default to empty values so that a missing `name` surfaces
/// as a validation failure rather than a parse failure.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SourceInput {
    pub name: String,
}

/// Client-supplied fields of a [`Product`](tally_types::Product).
///
/// `stock` is signed so that a negative value reaches validation.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    pub source_id: RecordId,
}

/// A request to buy `quantity` units of a product.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PurchaseRequest {
    pub product_id: RecordId,
    pub quantity: i64,
}

impl PurchaseRequest {
    pub fn new(product_id: impl Into<RecordId>, quantity: i64) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// Optional filter for product listings.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProductFilter {
    pub source_id: Option<RecordId>,
}

impl ProductFilter {
    pub fn by_source(source_id: impl Into<RecordId>) -> Self {
        Self {
            source_id: Some(source_id.into()),
        }
    }

    /// The effective source filter. An empty `source_id` means "no filter".
    pub fn source(&self) -> Option<&RecordId> {
        self.source_id.as_ref().filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_empty() {
        let input: ProductInput = serde_json::from_str(r#"{"price": 10.5}"#).unwrap();
        assert!(input.name.is_empty());
        assert_eq!(input.stock, 0);
        assert!(input.source_id.is_empty());
    }

    #[test]
    fn client_supplied_id_is_ignored() {
        let input: SourceInput = serde_json::from_str(r#"{"id": "99", "name": "X"}"#).unwrap();
        assert_eq!(input.name, "X");
    }

    #[test]
    fn empty_source_filter_means_no_filter() {
        assert!(ProductFilter::by_source("").source().is_none());
        assert_eq!(ProductFilter::by_source("2").source().unwrap().as_str(), "2");
        assert!(ProductFilter::default().source().is_none());
    }
}
