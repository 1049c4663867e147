//! Store factory that selects the configured provider.

use std::sync::Arc;

use tracing::info;

use catalog_core::config::store::StoreConfig;
use catalog_core::error::AppError;
use catalog_core::result::AppResult;

use crate::DynProductStore;
use crate::memory::MemoryProductStore;
use crate::postgres::PgProductStore;

/// Connect the store selected by configuration.
///
/// The adapter is chosen at composition time based on the provider
/// string; consumers only ever see the trait object.
pub async fn connect(config: &StoreConfig) -> AppResult<DynProductStore> {
    let store: DynProductStore = match config.provider.as_str() {
        "memory" => {
            info!("Initializing in-memory product store");
            Arc::new(MemoryProductStore::new())
        }
        "postgres" => {
            info!("Initializing PostgreSQL product store");
            let pool = crate::connection::create_pool(&config.postgres).await?;
            Arc::new(PgProductStore::new(pool))
        }
        other => {
            return Err(AppError::configuration(format!(
                "Unknown store provider: '{other}'. Supported: memory, postgres"
            )));
        }
    };

    Ok(store)
}
