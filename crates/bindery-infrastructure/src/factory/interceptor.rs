//! Factory interceptor
//!
//! Every generated adapter owns one interceptor. It turns a method call into
//! a [`FactoryCall`] and hands it to the instance provider that belongs to
//! the adapter's binding.

use std::fmt;
use std::sync::Arc;

use bindery_domain::error::{Error, Result};
use bindery_domain::ports::InstanceProvider;
use bindery_domain::value_objects::{
    CallDescriptor, FactoryArgument, FactoryCall, ProxyTargetParameter, ServiceKey,
    downcast_instance,
};
use tracing::trace;

use crate::kernel::{Context, Kernel, WeakKernel};

/// Dispatches factory method calls to a binding-scoped instance provider
#[derive(Clone)]
pub struct FactoryInterceptor {
    kernel: WeakKernel,
    provider: Arc<dyn InstanceProvider>,
    target: &'static str,
}

impl FactoryInterceptor {
    /// Create an interceptor for the factory interface `target`
    pub fn new(kernel: WeakKernel, provider: Arc<dyn InstanceProvider>, target: &'static str) -> Self {
        Self {
            kernel,
            provider,
            target,
        }
    }

    /// Build the interceptor while a proxy binding is being activated
    ///
    /// The binding must carry a [`ProxyTargetParameter`]. The instance
    /// provider is resolved as a child of the proxy request, which is what
    /// selects the provider binding keyed to this proxy binding.
    pub fn from_context(context: &Context<'_>) -> Result<Self> {
        let target = context
            .parameter::<ProxyTargetParameter>()
            .map(ProxyTargetParameter::interface)
            .ok_or_else(|| {
                Error::activation(format!(
                    "{} is not a factory proxy target",
                    context.binding().id()
                ))
            })?;
        let provider = context.get::<dyn InstanceProvider>()?;
        Ok(Self::new(context.kernel().downgrade(), provider, target))
    }

    /// Factory interface the adapter implements
    pub fn target(&self) -> &'static str {
        self.target
    }

    /// Instance provider owned by the adapter's binding
    pub fn instance_provider(&self) -> &Arc<dyn InstanceProvider> {
        &self.provider
    }

    /// Answer a factory method returning a single `T`
    pub fn invoke<T: ?Sized + Send + Sync + 'static>(
        &self,
        descriptor: CallDescriptor,
        arguments: Vec<FactoryArgument>,
    ) -> Result<Arc<T>> {
        let kernel = self.kernel()?;
        let call = FactoryCall::new(descriptor, ServiceKey::of::<T>(), arguments);
        trace!(call = %call.descriptor(), service = %call.service(), "Factory call");
        let instance = self.provider.get_instance(&kernel, &call)?;
        downcast_instance::<T>(&instance)
    }

    /// Answer a factory method returning every matching `T`
    pub fn invoke_all<T: ?Sized + Send + Sync + 'static>(
        &self,
        descriptor: CallDescriptor,
        arguments: Vec<FactoryArgument>,
    ) -> Result<Vec<Arc<T>>> {
        let kernel = self.kernel()?;
        let call = FactoryCall::new(descriptor, ServiceKey::of::<T>(), arguments);
        trace!(call = %call.descriptor(), service = %call.service(), "Factory collection call");
        self.provider
            .get_all_instances(&kernel, &call)?
            .iter()
            .map(downcast_instance::<T>)
            .collect()
    }

    fn kernel(&self) -> Result<Kernel> {
        self.kernel.upgrade().ok_or_else(|| {
            Error::activation(format!(
                "The kernel behind factory {} has been dropped",
                self.target
            ))
        })
    }
}

impl fmt::Debug for FactoryInterceptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryInterceptor")
            .field("target", &self.target)
            .field("kernel_alive", &self.kernel.upgrade().is_some())
            .finish_non_exhaustive()
    }
}
