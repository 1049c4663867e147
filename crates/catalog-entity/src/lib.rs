//! # catalog-entity
//!
//! Domain entity models for the Product Catalog service. Every struct in
//! this crate represents a store record or a domain value object. All
//! entities derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and
//! store records additionally derive `sqlx::FromRow`.

pub mod product;

pub use product::{Product, ProductDraft};
