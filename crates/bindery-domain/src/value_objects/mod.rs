//! Domain Value Objects
//!
//! Immutable values exchanged between the kernel and the factory extension.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`BindingId`] | Process-unique identity of one binding configuration |
//! | [`BindingRef`] | Identity snapshot recorded on a resolved request |
//! | [`ScopeKey`] | Key deciding instance reuse in the scope cache |
//! | [`ServiceKey`] | Requested capability (sized type or trait object) |
//! | [`CallDescriptor`] | Factory interface method reference |
//! | [`FactoryCall`] | One invocation of a factory method with its arguments |
//! | [`ConstructorArgument`] | Named value offered to a provider callback |

/// Binding identity and scope keys
pub mod binding;
/// Factory method call descriptors
pub mod call;
/// Type-erased instances
pub mod instance;
/// Request parameters
pub mod parameter;
/// Service keys
pub mod service;

pub use binding::{BindingId, BindingRef, ScopeKey};
pub use call::{CallDescriptor, FactoryArgument, FactoryCall};
pub use instance::{AnyInstance, downcast_instance, erase_instance};
pub use parameter::{ConstructorArgument, Parameter, ProxyTargetParameter};
pub use service::ServiceKey;
