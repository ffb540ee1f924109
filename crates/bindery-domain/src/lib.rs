//! # bindery domain layer
//!
//! Value objects and ports shared by the resolution kernel and the
//! auto-factory extension. Nothing in here performs resolution itself.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy and `Result` alias |
//! | [`constants`] | Factory naming rules and activation message prefixes |
//! | [`value_objects`] | Binding identity, service keys, call descriptors, parameters |
//! | [`ports`] | `ResolutionRoot` and `InstanceProvider` contracts |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
