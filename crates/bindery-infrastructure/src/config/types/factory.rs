//! Factory extension configuration types

use serde::{Deserialize, Serialize};

/// Factory extension configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    /// Resolve without a name when no binding is named like the method
    pub fallback_to_unnamed: bool,
}
