//! Domain Port Interfaces
//!
//! Contracts between the factory extension and whatever answers its
//! resolution requests. The kernel in `bindery-infrastructure` implements
//! [`ResolutionRoot`]; instance providers implement [`InstanceProvider`].

/// Instance provider port
pub mod instance_provider;
/// Resolution root port
pub mod resolution;

pub use instance_provider::InstanceProvider;
pub use resolution::{ResolutionRequest, ResolutionRoot};
