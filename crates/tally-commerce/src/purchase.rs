//! The purchase processor.
//!
//! A purchase is a one-shot computation over the commerce state:
//!
//! 1. **Validate** the quantity (`> 0`).
//! 2. **Resolve** the product (`NotFound` if absent).
//! 3. **Check stock** (`InsufficientStock` if `stock < quantity`).
//! 4. **Price** the purchase (`ValidationFailed` if the total overflows).
//! 5. **Commit**: assign an id, freeze `total = price × quantity`, decrement
//!    stock in place, append the transaction.
//!
//! Nothing is written before step 5, so a failed purchase leaves no trace.
//! The caller must hold the commerce write lock for the whole call.

use tally_store::EntityStore;
use tally_types::{DomainError, DomainResult, EntityKind, IdAllocator, Transaction};

use crate::input::PurchaseRequest;
use crate::service::CommerceState;
use crate::validation::validate_quantity;

pub(crate) fn process(
    state: &mut CommerceState,
    ids: &IdAllocator,
    request: &PurchaseRequest,
) -> DomainResult<Transaction> {
    let quantity = validate_quantity(request.quantity)?;

    let product = state
        .products
        .find_mut(&request.product_id)
        .ok_or_else(|| DomainError::not_found(EntityKind::Product, &request.product_id))?;

    let remaining = product
        .stock
        .checked_sub(quantity)
        .ok_or(DomainError::InsufficientStock {
            available: product.stock,
            requested: quantity,
        })?;

    let total = product.price * f64::from(quantity);
    if !total.is_finite() {
        return Err(DomainError::validation(
            "quantity",
            "Total exceeds the representable amount",
        ));
    }

    let transaction = Transaction {
        id: ids.next_id(),
        product_id: product.id.clone(),
        quantity,
        total,
    };
    product.stock = remaining;
    state.transactions.insert(transaction.clone());

    Ok(transaction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_store::MemoryTable;
    use tally_types::{Product, Source};

    fn state() -> CommerceState {
        CommerceState {
            sources: MemoryTable::from_records(vec![Source {
                id: "1".into(),
                name: "Supplier A".into(),
            }]),
            products: MemoryTable::from_records(vec![Product {
                id: "1".into(),
                name: "Laptop".into(),
                description: "Gaming laptop".into(),
                price: 15_000_000.0,
                stock: 10,
                source_id: "1".into(),
            }]),
            transactions: MemoryTable::new(),
        }
    }

    fn stock(state: &CommerceState) -> u32 {
        state.products.find(&"1".into()).unwrap().stock
    }

    #[test]
    fn commit_decrements_stock_and_freezes_total() {
        let mut state = state();
        let ids = IdAllocator::starting_at(3);
        let tx = process(&mut state, &ids, &PurchaseRequest::new("1", 3)).unwrap();
        assert_eq!(tx.id.as_str(), "3");
        assert_eq!(tx.total, 45_000_000.0);
        assert_eq!(tx.quantity, 3);
        assert_eq!(stock(&state), 7);
        assert_eq!(state.transactions.len(), 1);
    }

    #[test]
    fn exact_stock_can_be_bought_out() {
        let mut state = state();
        let ids = IdAllocator::new();
        process(&mut state, &ids, &PurchaseRequest::new("1", 10)).unwrap();
        assert_eq!(stock(&state), 0);
        let err = process(&mut state, &ids, &PurchaseRequest::new("1", 1)).unwrap_err();
        assert_eq!(
            err,
            DomainError::InsufficientStock {
                available: 0,
                requested: 1,
            }
        );
    }

    #[test]
    fn insufficient_stock_leaves_state_untouched() {
        let mut state = state();
        let ids = IdAllocator::starting_at(3);
        let err = process(&mut state, &ids, &PurchaseRequest::new("1", 11)).unwrap_err();
        assert_eq!(
            err,
            DomainError::InsufficientStock {
                available: 10,
                requested: 11,
            }
        );
        assert_eq!(stock(&state), 10);
        assert!(state.transactions.is_empty());
        // No id was consumed by the failed attempt.
        assert_eq!(ids.peek(), 3);
    }

    #[test]
    fn unknown_product_is_not_found() {
        let mut state = state();
        let err = process(&mut state, &IdAllocator::new(), &PurchaseRequest::new("42", 1))
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::NotFound {
                kind: EntityKind::Product,
                ..
            }
        ));
        assert!(state.transactions.is_empty());
    }

    #[test]
    fn overflowing_total_is_rejected_without_commit() {
        let mut state = state();
        state.products.insert(Product {
            id: "2".into(),
            name: "Yacht".into(),
            description: String::new(),
            price: 1e308,
            stock: 10,
            source_id: "1".into(),
        });
        let ids = IdAllocator::starting_at(3);
        let err = process(&mut state, &ids, &PurchaseRequest::new("2", 2)).unwrap_err();
        assert!(matches!(err, DomainError::ValidationFailed { ref field, .. } if field == "quantity"));
        assert_eq!(state.products.find(&"2".into()).unwrap().stock, 10);
        assert!(state.transactions.is_empty());
        assert_eq!(ids.peek(), 3);

        // A single unit is still representable.
        let tx = process(&mut state, &ids, &PurchaseRequest::new("2", 1)).unwrap();
        assert_eq!(tx.total, 1e308);
    }

    #[test]
    fn quantity_is_validated_before_lookup() {
        let mut state = state();
        let err = process(&mut state, &IdAllocator::new(), &PurchaseRequest::new("42", 0))
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationFailed { .. }));
    }
}
