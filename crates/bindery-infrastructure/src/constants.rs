//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Factory naming rules are defined in `bindery_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "bindery.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "bindery";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "BINDERY";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// KERNEL CONSTANTS
// ============================================================================

/// Deepest request chain the kernel will activate
pub const DEFAULT_MAX_REQUEST_DEPTH: usize = 64;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV_VAR: &str = "BINDERY_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// File name prefix of rotated log files when the path has no stem
pub const DEFAULT_LOG_FILE_PREFIX: &str = "bindery";
