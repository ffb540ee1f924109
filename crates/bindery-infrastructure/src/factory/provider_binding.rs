//! Provider Registry Binder
//!
//! Every factory binding owns one instance provider. The provider is bound
//! on the kernel as a `dyn InstanceProvider` binding that:
//!
//! - only answers requests issued while activating the owning binding,
//! - caches its instance under `ScopeKey::Binding(owner)`.
//!
//! Both rules compare plain [`BindingId`] values, so provider bindings of
//! different factory bindings never match the same request and never share
//! a cached instance.

use std::sync::Arc;

use bindery_domain::error::Result;
use bindery_domain::ports::InstanceProvider;
use bindery_domain::value_objects::{BindingId, ScopeKey};
use tracing::trace;

use crate::kernel::{Context, Kernel, RequestNode, ScopeStrategy};

/// Bind the instance provider owned by `target`
///
/// `provider_factory` runs once per owning binding and may resolve further
/// services from the context. Returns the identity of the provider binding.
pub fn bind_instance_provider<P>(
    kernel: &Kernel,
    target: BindingId,
    provider_factory: P,
) -> BindingId
where
    P: Fn(&Context<'_>) -> Result<Arc<dyn InstanceProvider>> + Send + Sync + 'static,
{
    let provider_binding = kernel
        .bind::<dyn InstanceProvider>()
        .to_method(provider_factory)
        .when(move |request| is_requested_by(request, target))
        .in_scope(ScopeStrategy::Custom(Arc::new(move |_: &Context<'_>| {
            Some(ScopeKey::Binding(target))
        })))
        .binding_configuration();

    trace!(owner = %target, provider = %provider_binding, "Bound instance provider");
    provider_binding
}

/// Whether `request` was issued while activating the binding `target`
pub fn is_requested_by(request: &RequestNode, target: BindingId) -> bool {
    request
        .parent_request()
        .and_then(|parent| parent.binding())
        .is_some_and(|binding| binding.id() == target)
}
