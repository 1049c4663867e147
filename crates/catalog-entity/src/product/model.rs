//! Product entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use catalog_core::types::ProductId;

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// Unique product identifier, assigned by the store at insert time
    /// and immutable thereafter.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Manufacturer name.
    pub maker: String,
    /// Price as an opaque non-negative integer amount.
    pub price: i64,
    /// URL reference to the product image. Not validated.
    pub image_url: String,
}

impl Product {
    /// Overwrite every field except `id` with the draft's values.
    ///
    /// This is the wholesale-replace update: the draft carries no
    /// identifier, so the record's identity cannot change.
    pub fn apply(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.maker = draft.maker;
        self.price = draft.price;
        self.image_url = draft.image_url;
    }
}

/// Data required to create a product, or to replace an existing
/// product's fields wholesale on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    /// Product name.
    pub name: String,
    /// Manufacturer name.
    pub maker: String,
    /// Price as an opaque non-negative integer amount.
    pub price: i64,
    /// URL reference to the product image.
    pub image_url: String,
}
