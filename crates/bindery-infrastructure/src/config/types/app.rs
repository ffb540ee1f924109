//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{FactoryConfig, KernelConfig, LoggingConfig};

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Resolution kernel configuration
    #[serde(default)]
    pub kernel: KernelConfig,

    /// Factory extension configuration
    #[serde(default)]
    pub factory: FactoryConfig,
}
