//! Field-level validation of commerce inputs.
//!
//! These checks look only at the input itself. Reference checks against
//! other stores run afterwards, under the service lock.

use tally_types::{DomainError, DomainResult};

use crate::input::{ProductInput, SourceInput};

pub fn validate_source(input: &SourceInput) -> DomainResult<()> {
    require_name(&input.name)
}

/// Validate a product input and return its stock as an unsigned count.
pub fn validate_product(input: &ProductInput) -> DomainResult<u32> {
    require_name(&input.name)?;

    // NaN and infinities are not finite and share the message.
    if !input.price.is_finite() || input.price <= 0.0 {
        return Err(DomainError::validation(
            "price",
            "Price must be greater than 0",
        ));
    }

    if input.stock < 0 {
        return Err(DomainError::validation(
            "stock",
            "Stock must be greater than or equal to 0",
        ));
    }
    u32::try_from(input.stock).map_err(|_| {
        DomainError::validation("stock", format!("Stock must not exceed {}", u32::MAX))
    })
}

/// Validate a purchase quantity and return it as an unsigned count.
pub fn validate_quantity(quantity: i64) -> DomainResult<u32> {
    if quantity <= 0 {
        return Err(DomainError::validation(
            "quantity",
            "Quantity must be greater than 0",
        ));
    }
    u32::try_from(quantity).map_err(|_| {
        DomainError::validation("quantity", format!("Quantity must not exceed {}", u32::MAX))
    })
}

fn require_name(name: &str) -> DomainResult<()> {
    if name.is_empty() {
        return Err(DomainError::validation("name", "Name is required"));
    }
    Ok(())
}
