//! In-memory product store.
//!
//! Records live in a concurrent map; identifiers come from an atomic
//! sequence that is never reset, so an identifier is not handed out again
//! after deletion or [`clear`](catalog_core::traits::store::Store::clear).

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use catalog_core::result::AppResult;
use catalog_core::traits::store::Store;
use catalog_core::types::ProductId;
use catalog_entity::product::{Product, ProductDraft};

/// In-memory product store backed by a dashmap.
#[derive(Debug)]
pub struct MemoryProductStore {
    /// Records keyed by identifier.
    records: DashMap<ProductId, Product>,
    /// Next identifier to assign.
    sequence: AtomicI64,
}

impl MemoryProductStore {
    /// Create an empty store. The first assigned identifier is 1.
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            sequence: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store<Product, ProductDraft, ProductId> for MemoryProductStore {
    async fn insert(&self, draft: ProductDraft) -> AppResult<Product> {
        let id = ProductId::from_raw(self.sequence.fetch_add(1, Ordering::SeqCst));
        let product = Product {
            id,
            name: draft.name,
            maker: draft.maker,
            price: draft.price,
            image_url: draft.image_url,
        };
        self.records.insert(id, product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: &ProductId) -> AppResult<Option<Product>> {
        Ok(self.records.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        Ok(self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn save(&self, record: &Product) -> AppResult<Product> {
        // Overwrite-by-id; a save racing a concurrent remove re-inserts
        // the record (last write wins).
        self.records.insert(record.id, record.clone());
        Ok(record.clone())
    }

    async fn delete_by_id(&self, id: &ProductId) -> AppResult<()> {
        self.records.remove(id);
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        // The sequence keeps running across clears.
        self.records.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            maker: "Acme".to_string(),
            price: 1000,
            image_url: "https://cdn/toy.jpg".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let store = MemoryProductStore::new();
        let first = store.insert(draft("a")).await.unwrap();
        let second = store.insert(draft("b")).await.unwrap();
        assert_eq!(first.id, ProductId::from_raw(1));
        assert_eq!(second.id, ProductId::from_raw(2));
    }

    #[tokio::test]
    async fn test_find_by_id_absent_is_none() {
        let store = MemoryProductStore::new();
        let found = store.find_by_id(&ProductId::from_raw(100)).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_by_id() {
        let store = MemoryProductStore::new();
        let mut product = store.insert(draft("a")).await.unwrap();
        product.name = "renamed".to_string();
        store.save(&product).await.unwrap();

        let found = store.find_by_id(&product.id).await.unwrap().unwrap();
        assert_eq!(found.name, "renamed");
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let store = MemoryProductStore::new();
        let product = store.insert(draft("a")).await.unwrap();
        store.delete_by_id(&product.id).await.unwrap();
        assert!(store.find_by_id(&product.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clear_keeps_sequence_running() {
        let store = MemoryProductStore::new();
        let before = store.insert(draft("a")).await.unwrap();
        store.clear().await.unwrap();
        assert!(store.find_all().await.unwrap().is_empty());

        let after = store.insert(draft("b")).await.unwrap();
        assert!(after.id > before.id);
    }
}
