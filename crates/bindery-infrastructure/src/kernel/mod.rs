//! Resolution Kernel
//!
//! The container the factory extension plugs into. It owns the binding
//! table and the scope cache, and walks request chains to pick the binding
//! that answers each request.
//!
//! ## Architecture
//!
//! ```text
//! kernel.bind::<T>()  ──►  BindingSyntax  ──►  BindingConfiguration (table)
//!                                                     │
//! kernel.get::<T>()   ──►  RequestNode  ──►  select  ─┘
//!                                │              │
//!                                ▼              ▼
//!                          Context ◄──── activate ──► ScopeCache
//! ```
//!
//! ## Lifecycle
//!
//! The binding table is populated while bindings are declared, queried on
//! every request, and dropped together with the last [`Kernel`] handle.
//! Nothing in the crate holds it as a global.

pub mod binding;
pub mod context;
#[allow(clippy::module_inception)]
pub mod kernel;
pub mod request;
pub mod scope;
pub mod syntax;

pub use binding::{BindingConfiguration, BindingSettings, Condition, ProviderCallback, ScopeStrategy};
pub use context::Context;
pub use kernel::{Kernel, WeakKernel};
pub use request::{Ancestors, RequestNode};
pub use scope::ScopeCache;
pub use syntax::BindingSyntax;
