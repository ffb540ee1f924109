//! Domain layer constants
//!
//! Naming rules shared by the factory extension and the kernel.

// ============================================================================
// FACTORY NAMING CONSTANTS
// ============================================================================

/// Literal prefix a factory method needs before its name can become a binding name
pub const FACTORY_METHOD_PREFIX: &str = "Get";

// ============================================================================
// ACTIVATION MESSAGES
// ============================================================================

/// Leading text of the activation error raised when nothing satisfies a request
pub const NO_MATCHING_BINDINGS: &str = "No matching bindings are available";

/// Leading text of the activation error raised when a single-instance request is ambiguous
pub const AMBIGUOUS_BINDINGS: &str = "More than one matching binding is available";
