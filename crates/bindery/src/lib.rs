//! # bindery
//!
//! Auto-factory bindings for a dependency-injection kernel.
//!
//! Declare a factory trait, generate its adapter with [`factory_interface!`],
//! and bind it with `to_factory()`. Every call on the resolved factory is
//! answered by the kernel through the instance provider that belongs to that
//! exact factory binding.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use bindery::prelude::*;
//!
//! pub trait Shape: Send + Sync {
//!     fn size(&self) -> u32;
//! }
//!
//! struct Circle(u32);
//!
//! impl Shape for Circle {
//!     fn size(&self) -> u32 {
//!         self.0
//!     }
//! }
//!
//! pub trait ShapeFactory: Send + Sync {
//!     fn get_circle(&self, radius: u32) -> Result<Arc<dyn Shape>>;
//! }
//!
//! factory_interface! {
//!     struct ShapeFactoryProxy for dyn ShapeFactory {
//!         fn get_circle(radius: u32) -> dyn Shape;
//!     }
//! }
//!
//! fn circle(context: &Context<'_>) -> Result<Arc<dyn Shape>> {
//!     Ok(Arc::new(Circle(context.argument::<u32>("radius")?)))
//! }
//!
//! let kernel = Kernel::new();
//! kernel.bind::<dyn Shape>().to_method(circle).named("Circle");
//! kernel.bind::<dyn ShapeFactory>().to_factory();
//!
//! let factory = kernel.get::<dyn ShapeFactory>().ok().unwrap();
//! assert_eq!(factory.get_circle(5).unwrap().size(), 5);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Error taxonomy, value objects and ports
//! - `infrastructure` - Kernel, factory extension, configuration and logging

/// Domain layer - errors, value objects and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use bindery_domain::*;
}

/// Infrastructure layer - kernel, factory extension, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use bindery_infrastructure::*;
}

pub use bindery_domain::{Error, Result};
pub use bindery_infrastructure::bootstrap::init_kernel;
pub use bindery_infrastructure::factory_interface;
pub use bindery_infrastructure::kernel::{Context, Kernel};

/// Everything needed to declare bindings and factories
pub mod prelude {
    pub use bindery_domain::error::{Error, Result};
    pub use bindery_domain::ports::{InstanceProvider, ResolutionRequest, ResolutionRoot};
    pub use bindery_domain::value_objects::{
        BindingId, CallDescriptor, ConstructorArgument, ScopeKey, ServiceKey,
    };
    pub use bindery_infrastructure::factory::{
        FactoryBindingExt, FactoryConditionExt, FactoryInterceptor, FactoryInterface,
        FactoryProxy, StandardInstanceProvider,
    };
    pub use bindery_infrastructure::factory_interface;
    pub use bindery_infrastructure::kernel::{Context, Kernel, RequestNode, ScopeStrategy};
}
