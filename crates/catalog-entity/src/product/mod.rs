//! Product entity and its draft record.

pub mod model;

pub use model::{Product, ProductDraft};
