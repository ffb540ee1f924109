//! Configuration types module

pub mod app;
pub mod factory;
pub mod kernel;
pub mod logging;

// Re-export main types
pub use app::AppConfig;
pub use factory::FactoryConfig;
pub use kernel::KernelConfig;
pub use logging::LoggingConfig;
