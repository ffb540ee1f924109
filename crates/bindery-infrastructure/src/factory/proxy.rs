//! Factory Proxy Installer
//!
//! Makes a generated adapter the target of a binding and installs the
//! instance provider that adapter talks to.
//!
//! The deferred callbacks registered here only capture the binding's
//! [`BindingId`](bindery_domain::value_objects::BindingId). The
//! [`BindingSyntax`] itself is never captured.

use std::any::type_name;
use std::sync::Arc;

use bindery_domain::error::Result;
use bindery_domain::ports::InstanceProvider;
use bindery_domain::value_objects::ProxyTargetParameter;
use tracing::debug;

use super::instance_provider::StandardInstanceProvider;
use super::interceptor::FactoryInterceptor;
use super::provider_binding::bind_instance_provider;
use crate::kernel::{BindingSyntax, Context};

// ============================================================================
// Adapter Traits
// ============================================================================

/// Marker capability carried by every generated factory adapter
pub trait FactoryProxy: Send + Sync {
    /// Interceptor the adapter forwards its calls to
    fn interceptor(&self) -> &FactoryInterceptor;
}

/// A factory interface with a generated adapter
///
/// Implemented for `dyn Trait` by [`factory_interface!`](crate::factory_interface).
pub trait FactoryInterface: Send + Sync + 'static {
    /// Build the adapter around `interceptor`
    fn create_proxy(interceptor: FactoryInterceptor) -> Arc<Self>;
}

// ============================================================================
// Binding Extension
// ============================================================================

/// Binds a factory interface to its generated adapter
///
/// # Example
///
/// ```ignore
/// kernel.bind::<dyn ShapeFactory>().to_factory();
/// let circle = kernel.get::<dyn ShapeFactory>()?.get_circle(5)?;
/// ```
pub trait FactoryBindingExt<T: ?Sized>: Sized {
    /// Bind to the adapter of `T` backed by the standard instance provider
    fn to_factory(self) -> Self
    where
        T: FactoryInterface;

    /// Bind to the adapter of `T` backed by a custom instance provider
    fn to_factory_with<P>(self, provider_factory: P) -> Self
    where
        T: FactoryInterface,
        P: Fn(&Context<'_>) -> Result<Arc<dyn InstanceProvider>> + Send + Sync + 'static;

    /// Bind to the adapter of a distinct factory interface `F`
    ///
    /// `upcast` converts the adapter of `F` into the bound interface.
    fn to_factory_of<F, P, U>(self, provider_factory: P, upcast: U) -> Self
    where
        F: FactoryInterface + ?Sized,
        P: Fn(&Context<'_>) -> Result<Arc<dyn InstanceProvider>> + Send + Sync + 'static,
        U: Fn(Arc<F>) -> Arc<T> + Send + Sync + 'static;
}

impl<T: ?Sized + Send + Sync + 'static> FactoryBindingExt<T> for BindingSyntax<'_, T> {
    fn to_factory(self) -> Self
    where
        T: FactoryInterface,
    {
        self.to_factory_with(standard_provider)
    }

    fn to_factory_with<P>(self, provider_factory: P) -> Self
    where
        T: FactoryInterface,
        P: Fn(&Context<'_>) -> Result<Arc<dyn InstanceProvider>> + Send + Sync + 'static,
    {
        self.to_factory_of::<T, _, _>(provider_factory, |proxy| proxy)
    }

    fn to_factory_of<F, P, U>(self, provider_factory: P, upcast: U) -> Self
    where
        F: FactoryInterface + ?Sized,
        P: Fn(&Context<'_>) -> Result<Arc<dyn InstanceProvider>> + Send + Sync + 'static,
        U: Fn(Arc<F>) -> Arc<T> + Send + Sync + 'static,
    {
        install_factory::<T, F, P, U>(self, provider_factory, upcast)
    }
}

fn install_factory<'k, T, F, P, U>(
    syntax: BindingSyntax<'k, T>,
    provider_factory: P,
    upcast: U,
) -> BindingSyntax<'k, T>
where
    T: ?Sized + Send + Sync + 'static,
    F: FactoryInterface + ?Sized,
    P: Fn(&Context<'_>) -> Result<Arc<dyn InstanceProvider>> + Send + Sync + 'static,
    U: Fn(Arc<F>) -> Arc<T> + Send + Sync + 'static,
{
    let syntax = syntax
        .to_method(move |context| {
            let interceptor = FactoryInterceptor::from_context(context)?;
            Ok(upcast(F::create_proxy(interceptor)))
        })
        .with_parameter(ProxyTargetParameter::new(type_name::<F>()));

    let target = syntax.binding_configuration();
    let provider = bind_instance_provider(syntax.kernel(), target, provider_factory);
    debug!(
        interface = type_name::<F>(),
        binding = %target,
        provider = %provider,
        "Installed factory binding"
    );
    syntax
}

fn standard_provider(context: &Context<'_>) -> Result<Arc<dyn InstanceProvider>> {
    Ok(Arc::new(StandardInstanceProvider::from_config(
        context.kernel().factory_config(),
    )))
}
