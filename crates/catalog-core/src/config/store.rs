//! Product store configuration.

use serde::{Deserialize, Serialize};

use super::database::DatabaseConfig;

/// Top-level store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store provider type: `"memory"` or `"postgres"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// PostgreSQL-specific store configuration.
    #[serde(default)]
    pub postgres: DatabaseConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            postgres: DatabaseConfig::default(),
        }
    }
}

fn default_provider() -> String {
    "memory".to_string()
}
