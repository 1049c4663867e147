//! PostgreSQL product store.

use async_trait::async_trait;
use sqlx::PgPool;

use catalog_core::error::{AppError, ErrorKind};
use catalog_core::result::AppResult;
use catalog_core::traits::store::Store;
use catalog_core::types::ProductId;
use catalog_entity::product::{Product, ProductDraft};

/// Product store backed by a PostgreSQL `products` table.
///
/// Identifier assignment is delegated to the table's `BIGSERIAL` column.
/// Reference DDL lives in `schema.sql` at the crate root.
#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    /// Create a new store on top of an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store<Product, ProductDraft, ProductId> for PgProductStore {
    async fn insert(&self, draft: ProductDraft) -> AppResult<Product> {
        sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, maker, price, image_url) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&draft.name)
        .bind(&draft.maker)
        .bind(draft.price)
        .bind(&draft.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert product", e))
    }

    async fn find_by_id(&self, id: &ProductId) -> AppResult<Option<Product>> {
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(*id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find product by id", e)
            })
    }

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list products", e))
    }

    async fn save(&self, record: &Product) -> AppResult<Product> {
        sqlx::query_as::<_, Product>(
            "UPDATE products SET name = $2, maker = $3, price = $4, image_url = $5 \
             WHERE id = $1 RETURNING *",
        )
        .bind(record.id)
        .bind(&record.name)
        .bind(&record.maker)
        .bind(record.price)
        .bind(&record.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to save product", e))
    }

    async fn delete_by_id(&self, id: &ProductId) -> AppResult<()> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(*id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete product", e))?;
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        // Plain DELETE so the id sequence keeps advancing; identifiers
        // are never reused within the store's lifetime.
        sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to clear products", e))?;
        Ok(())
    }
}
