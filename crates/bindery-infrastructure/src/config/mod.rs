//! Configuration management
//!
//! Layered configuration: defaults, then `bindery.toml`, then
//! `BINDERY__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, FactoryConfig, KernelConfig, LoggingConfig};
