//! Generic store trait for record persistence.

use async_trait::async_trait;

use crate::result::AppResult;

/// Generic keyed record store.
///
/// This trait is defined with generic type parameters so that each
/// entity can have a strongly typed store boundary. `Draft` is the
/// identifier-free record shape the store turns into a full `Entity`
/// on insert; identifier assignment is entirely the store's job.
#[async_trait]
pub trait Store<Entity, Draft, Id>: Send + Sync + std::fmt::Debug + 'static
where
    Entity: Send + Sync + 'static,
    Draft: Send + Sync + 'static,
    Id: Send + Sync + 'static,
{
    /// Insert a new record, assigning a fresh unique identifier, and
    /// return the stored record including that identifier.
    async fn insert(&self, draft: Draft) -> AppResult<Entity>;

    /// Find a record by its identifier.
    ///
    /// Absence is `Ok(None)`, never an error; translating absence into a
    /// domain error is the caller's job.
    async fn find_by_id(&self, id: &Id) -> AppResult<Option<Entity>>;

    /// Return every record, in store-defined order.
    async fn find_all(&self) -> AppResult<Vec<Entity>>;

    /// Overwrite the record with the same identifier as `record`.
    async fn save(&self, record: &Entity) -> AppResult<Entity>;

    /// Remove a record by its identifier. Performs no existence check.
    async fn delete_by_id(&self, id: &Id) -> AppResult<()>;

    /// Remove all records. Used for test isolation, not normal operation.
    async fn clear(&self) -> AppResult<()>;
}
