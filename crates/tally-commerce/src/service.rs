use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tally_store::{require_reference, EntityStore, MemoryTable};
use tally_types::{
    DomainError, DomainResult, EntityKind, IdAllocator, Product, RecordId, Source, Transaction,
};

use crate::input::{ProductFilter, ProductInput, PurchaseRequest, SourceInput};
use crate::purchase;
use crate::validation::{validate_product, validate_source};

/// In-memory commerce service.
///
/// Owns the Source, Product, and Transaction stores behind a single
/// `RwLock`. Every read-validate-mutate sequence runs under one write guard,
/// which is what makes a purchase's check-then-decrement atomic.
pub struct Commerce {
    ids: Arc<IdAllocator>,
    inner: RwLock<CommerceState>,
}

#[derive(Debug, Default)]
pub(crate) struct CommerceState {
    pub(crate) sources: MemoryTable<Source>,
    pub(crate) products: MemoryTable<Product>,
    pub(crate) transactions: MemoryTable<Transaction>,
}

/// Record counts per store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommerceCounts {
    pub sources: usize,
    pub products: usize,
    pub transactions: usize,
}

impl Commerce {
    /// Create an empty service drawing ids from `ids`.
    pub fn new(ids: Arc<IdAllocator>) -> Self {
        Self {
            ids,
            inner: RwLock::new(CommerceState::default()),
        }
    }

    /// Create a service holding pre-existing records.
    ///
    /// The allocator is advanced past every id found, so new records never
    /// collide with loaded ones.
    pub fn from_records(
        ids: Arc<IdAllocator>,
        sources: Vec<Source>,
        products: Vec<Product>,
        transactions: Vec<Transaction>,
    ) -> Self {
        sources.iter().for_each(|r| ids.observe(&r.id));
        products.iter().for_each(|r| ids.observe(&r.id));
        transactions.iter().for_each(|r| ids.observe(&r.id));

        Self {
            ids,
            inner: RwLock::new(CommerceState {
                sources: MemoryTable::from_records(sources),
                products: MemoryTable::from_records(products),
                transactions: MemoryTable::from_records(transactions),
            }),
        }
    }

    // ---- Sources ----

    pub fn create_source(&self, input: SourceInput) -> DomainResult<Source> {
        validate_source(&input)?;
        let mut state = self.write();
        let source = Source {
            id: self.ids.next_id(),
            name: input.name,
        };
        state.sources.insert(source.clone());
        tracing::info!(id = %source.id, "source created");
        Ok(source)
    }

    pub fn source(&self, id: &RecordId) -> DomainResult<Source> {
        self.read()
            .sources
            .find(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(EntityKind::Source, id))
    }

    pub fn sources(&self) -> Vec<Source> {
        self.read().sources.list()
    }

    pub fn update_source(&self, id: &RecordId, input: SourceInput) -> DomainResult<Source> {
        let mut state = self.write();
        if !state.sources.contains(id) {
            return Err(DomainError::not_found(EntityKind::Source, id));
        }
        validate_source(&input)?;

        let source = Source {
            id: id.clone(),
            name: input.name,
        };
        state.sources.update(id, source.clone());
        tracing::info!(%id, "source updated");
        Ok(source)
    }

    /// Delete a source.
    ///
    /// Products that reference it are left in place with a dangling
    /// `source_id`.
    pub fn delete_source(&self, id: &RecordId) -> DomainResult<Source> {
        let mut state = self.write();
        let removed = state
            .sources
            .delete(id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Source, id))?;

        let dangling = state.products.iter().filter(|p| &p.source_id == id).count();
        if dangling > 0 {
            tracing::warn!(%id, dangling, "source deleted while still referenced by products");
        }
        tracing::info!(%id, "source deleted");
        Ok(removed)
    }

    // ---- Products ----

    pub fn create_product(&self, input: ProductInput) -> DomainResult<Product> {
        let stock = validate_product(&input)?;
        let mut state = self.write();
        require_reference(&state.sources, &input.source_id)?;

        let product = Product {
            id: self.ids.next_id(),
            name: input.name,
            description: input.description,
            price: input.price,
            stock,
            source_id: input.source_id,
        };
        state.products.insert(product.clone());
        tracing::info!(id = %product.id, source_id = %product.source_id, stock, "product created");
        Ok(product)
    }

    pub fn product(&self, id: &RecordId) -> DomainResult<Product> {
        self.read()
            .products
            .find(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(EntityKind::Product, id))
    }

    /// List products in insertion order, optionally restricted to one source.
    pub fn products(&self, filter: &ProductFilter) -> Vec<Product> {
        let state = self.read();
        match filter.source() {
            Some(source_id) => state.products.list_where(&|p: &Product| &p.source_id == source_id),
            None => state.products.list(),
        }
    }

    /// Replace every client-editable field of a product.
    pub fn update_product(&self, id: &RecordId, input: ProductInput) -> DomainResult<Product> {
        let mut state = self.write();
        if !state.products.contains(id) {
            return Err(DomainError::not_found(EntityKind::Product, id));
        }
        let stock = validate_product(&input)?;
        require_reference(&state.sources, &input.source_id)?;

        let product = Product {
            id: id.clone(),
            name: input.name,
            description: input.description,
            price: input.price,
            stock,
            source_id: input.source_id,
        };
        state.products.update(id, product.clone());
        tracing::info!(%id, "product updated");
        Ok(product)
    }

    /// Delete a product. Past transactions keep their frozen totals.
    pub fn delete_product(&self, id: &RecordId) -> DomainResult<Product> {
        let removed = self
            .write()
            .products
            .delete(id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Product, id))?;
        tracing::info!(%id, "product deleted");
        Ok(removed)
    }

    // ---- Transactions ----

    /// Buy `request.quantity` units of a product.
    ///
    /// On success the product's stock has been decremented and the returned
    /// transaction recorded. On failure nothing has changed.
    pub fn purchase(&self, request: &PurchaseRequest) -> DomainResult<Transaction> {
        let mut state = self.write();
        match purchase::process(&mut state, &self.ids, request) {
            Ok(tx) => {
                tracing::info!(
                    id = %tx.id,
                    product_id = %tx.product_id,
                    quantity = tx.quantity,
                    total = tx.total,
                    "purchase committed"
                );
                Ok(tx)
            }
            Err(err) => {
                tracing::warn!(product_id = %request.product_id, quantity = request.quantity, %err, "purchase rejected");
                Err(err)
            }
        }
    }

    pub fn transaction(&self, id: &RecordId) -> DomainResult<Transaction> {
        self.read()
            .transactions
            .find(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(EntityKind::Transaction, id))
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.read().transactions.list()
    }

    // ---- Introspection ----

    pub fn counts(&self) -> CommerceCounts {
        let state = self.read();
        CommerceCounts {
            sources: state.sources.len(),
            products: state.products.len(),
            transactions: state.transactions.len(),
        }
    }

    // All mutations happen after every check passes, so a guard poisoned by
    // a panicking reader or writer still protects consistent state.
    fn read(&self) -> RwLockReadGuard<'_, CommerceState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CommerceState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Commerce {
    fn default() -> Self {
        Self::new(Arc::new(IdAllocator::new()))
    }
}

impl std::fmt::Debug for Commerce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Commerce")
            .field("counts", &self.counts())
            .field("next_id", &self.ids.peek())
            .finish()
    }
}
