//! Configuration schemas.
//!
//! Configuration is read from an optional TOML file and overlaid with
//! environment variables prefixed with `TRIGGER__` (for example
//! `TRIGGER__LOGGING__LEVEL=debug`).

pub mod audit;
pub mod logging;

use serde::{Deserialize, Serialize};

use self::audit::AuditConfig;
use self::logging::LoggingConfig;

use crate::error::TriggerError;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Audit run settings.
    #[serde(default)]
    pub audit: AuditConfig,
}

impl AppConfig {
    /// Load configuration from `path` (if it exists) and the environment.
    pub fn load(path: &str) -> Result<Self, TriggerError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("TRIGGER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| TriggerError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| TriggerError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
