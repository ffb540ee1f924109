//! # Infrastructure Layer
//!
//! The resolution kernel, the auto-factory extension built on top of it, and
//! the cross-cutting concerns both share.
//!
//! ## Module Categories
//!
//! ### Resolution
//! | Module | Description |
//! |--------|-------------|
//! | [`kernel`] | Binding table, request chain, selection and scope cache |
//! | [`factory`] | Factory bindings, instance providers, adapter generation |
//!
//! ### Configuration & Bootstrap
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based TOML and environment configuration |
//! | [`bootstrap`] | Builds a configured kernel |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod factory;
pub mod kernel;
pub mod logging;

// Re-export commonly used types
pub use error_ext::ErrorContext;
pub use factory::{FactoryBindingExt, FactoryConditionExt};
pub use kernel::{Context, Kernel};

/// Paths used by `factory_interface!` expansions
#[doc(hidden)]
pub mod __private {
    pub use std::sync::Arc;

    pub use bindery_domain::error::Result;
    pub use bindery_domain::value_objects::{CallDescriptor, FactoryArgument};
}
