//! Kernel configuration types

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_REQUEST_DEPTH;

/// Resolution kernel configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Deepest request chain activated before failing
    pub max_request_depth: usize,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            max_request_depth: DEFAULT_MAX_REQUEST_DEPTH,
        }
    }
}
