//! # catalog-service
//!
//! Business logic service layer for the Product Catalog. The product
//! service orchestrates the store boundary to implement application-level
//! use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod product;

pub use product::ProductService;
