//! # catalog-store
//!
//! Concrete product store adapters for the Product Catalog service: an
//! in-memory map for tests and single-process use, and a PostgreSQL
//! implementation. The adapter is selected at composition time via
//! [`provider::connect`]; consumers only ever see [`DynProductStore`].

use std::sync::Arc;

use catalog_core::traits::store::Store;
use catalog_core::types::ProductId;
use catalog_entity::product::{Product, ProductDraft};

pub mod connection;
pub mod memory;
pub mod postgres;
pub mod provider;

pub use memory::MemoryProductStore;
pub use postgres::PgProductStore;
pub use provider::connect;

/// Shared trait object for the product store boundary.
pub type DynProductStore = Arc<dyn Store<Product, ProductDraft, ProductId>>;
