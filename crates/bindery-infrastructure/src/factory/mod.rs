//! Auto-factory extension
//!
//! Binds a factory interface to a generated adapter whose methods resolve
//! components through the kernel, each factory binding talking to its own
//! instance provider.
//!
//! ## Components
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`expression`] | Derives binding names from factory method descriptors |
//! | [`provider_binding`] | Installs the binding-scoped instance provider |
//! | [`proxy`] | Installs the adapter as the target of a factory binding |
//! | [`conditions`] | Ancestor-name conditions derived from factory methods |
//! | [`interceptor`] | Routes adapter calls to the instance provider |
//! | [`instance_provider`] | Default name-and-arguments instance provider |
//!
//! ## Call path
//!
//! ```text
//! kernel.get::<dyn ShapeFactory>()
//!     └─► proxy binding ──► FactoryInterceptor::from_context
//!                               └─► dyn InstanceProvider (only the provider
//!                                   binding keyed to this proxy binding matches)
//! factory.get_circle(5)
//!     └─► interceptor.invoke ──► provider.get_instance ──► kernel
//! ```

pub mod conditions;
pub mod expression;
pub mod instance_provider;
pub mod interceptor;
mod macros;
pub mod provider_binding;
pub mod proxy;

pub use conditions::{FactoryConditionExt, derive_ancestor_condition};
pub use expression::{derive_name, factory_method_name};
pub use instance_provider::StandardInstanceProvider;
pub use interceptor::FactoryInterceptor;
pub use provider_binding::{bind_instance_provider, is_requested_by};
pub use proxy::{FactoryBindingExt, FactoryInterface, FactoryProxy};
