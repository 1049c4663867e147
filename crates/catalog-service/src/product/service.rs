//! Product management operations — create, lookup, update, delete.

use tracing::info;

use catalog_core::error::AppError;
use catalog_core::result::AppResult;
use catalog_core::traits::service::Service;
use catalog_core::types::ProductId;
use catalog_entity::product::{Product, ProductDraft};
use catalog_store::DynProductStore;

/// Handles product catalog operations.
///
/// The service holds no state of its own; every operation is a single
/// logical read or read-then-write against the store, and not-found
/// translation happens here, at the lookup point.
#[derive(Debug, Clone)]
pub struct ProductService {
    /// Product store.
    store: DynProductStore,
}

impl ProductService {
    /// Creates a new product service.
    pub fn new(store: DynProductStore) -> Self {
        Self { store }
    }

    /// Create a product from the draft and return it with its assigned id.
    pub async fn create(&self, draft: ProductDraft) -> AppResult<Product> {
        let product = self.store.insert(draft).await?;

        info!(product_id = %product.id, "Product created");

        Ok(product)
    }

    /// Get a product by id.
    pub async fn find(&self, id: ProductId) -> AppResult<Product> {
        self.store
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product {id} not found")))
    }

    /// List every product, in store-defined order.
    ///
    /// An empty catalog is a success outcome, never an error.
    pub async fn find_all(&self) -> AppResult<Vec<Product>> {
        self.store.find_all().await
    }

    /// Replace a product's fields wholesale, keeping its id.
    ///
    /// Fails with not-found exactly like [`find`](Self::find) when the id
    /// does not resolve to an existing record.
    pub async fn update(&self, id: ProductId, replacement: ProductDraft) -> AppResult<Product> {
        let mut product = self.find(id).await?;

        product.apply(replacement);

        let updated = self.store.save(&product).await?;

        info!(product_id = %updated.id, "Product updated");

        Ok(updated)
    }

    /// Delete a product by id.
    ///
    /// Existence is confirmed before removal: a second delete of the same
    /// id fails with not-found rather than silently succeeding.
    pub async fn delete(&self, id: ProductId) -> AppResult<()> {
        let product = self.find(id).await?;

        self.store.delete_by_id(&product.id).await?;

        info!(product_id = %product.id, "Product deleted");

        Ok(())
    }
}

impl Service for ProductService {}
