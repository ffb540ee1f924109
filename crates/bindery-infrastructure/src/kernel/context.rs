//! Activation context
//!
//! Handed to provider callbacks and scope callbacks. It exposes the request
//! being answered, the binding answering it, and a way to issue child
//! requests that keep the chain intact.

use std::any::{Any, type_name};
use std::sync::Arc;

use bindery_domain::error::{Error, Result};
use bindery_domain::value_objects::{
    ConstructorArgument, Parameter, ServiceKey, downcast_instance,
};

use super::binding::{BindingConfiguration, BindingSettings};
use super::kernel::Kernel;
use super::request::RequestNode;

/// Context of one binding activation
pub struct Context<'k> {
    kernel: &'k Kernel,
    request: Arc<RequestNode>,
    binding: Arc<BindingConfiguration>,
    settings: Arc<BindingSettings>,
}

impl<'k> Context<'k> {
    pub(crate) fn new(
        kernel: &'k Kernel,
        request: Arc<RequestNode>,
        binding: Arc<BindingConfiguration>,
        settings: Arc<BindingSettings>,
    ) -> Self {
        Self {
            kernel,
            request,
            binding,
            settings,
        }
    }

    /// Kernel performing the activation
    pub fn kernel(&self) -> &'k Kernel {
        self.kernel
    }

    /// Request being answered, already carrying the binding reference
    pub fn request(&self) -> &Arc<RequestNode> {
        &self.request
    }

    /// Binding being activated
    pub fn binding(&self) -> &BindingConfiguration {
        &self.binding
    }

    /// Request parameters followed by the binding's own parameters
    pub fn parameters(&self) -> impl Iterator<Item = &Arc<dyn Parameter>> {
        self.request
            .parameters()
            .iter()
            .chain(self.settings.parameters())
    }

    /// First parameter of type `P`
    pub fn parameter<P: Parameter>(&self) -> Option<&P> {
        self.parameters()
            .find_map(|parameter| parameter.downcast_ref::<P>())
    }

    /// Value of the constructor argument called `name`
    pub fn argument<V: Any + Clone>(&self, name: &str) -> Result<V> {
        let argument = self
            .parameters()
            .filter_map(|parameter| parameter.downcast_ref::<ConstructorArgument>())
            .find(|argument| argument.name() == name)
            .ok_or_else(|| {
                Error::activation(format!(
                    "Missing constructor argument '{name}' while activating {}",
                    self.request
                ))
            })?;

        argument.value_as::<V>().cloned().ok_or_else(|| {
            Error::activation(format!(
                "Constructor argument '{name}' is not a {} while activating {}",
                type_name::<V>(),
                self.request
            ))
        })
    }

    /// Resolve `T` as a child of the current request
    pub fn get<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<T>> {
        let instance = self.kernel.resolve_node(self.child_request::<T>(None))?;
        downcast_instance::<T>(&instance)
    }

    /// Resolve `T` bound under `name` as a child of the current request
    pub fn get_named<T: ?Sized + Send + Sync + 'static>(&self, name: &str) -> Result<Arc<T>> {
        let request = self.child_request::<T>(Some(name.to_string()));
        let instance = self.kernel.resolve_node(request)?;
        downcast_instance::<T>(&instance)
    }

    /// Resolve every binding of `T` as children of the current request
    pub fn get_all<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Vec<Arc<T>>> {
        self.kernel
            .resolve_all_nodes(self.child_request::<T>(None))?
            .iter()
            .map(downcast_instance::<T>)
            .collect()
    }

    fn child_request<T: ?Sized + 'static>(&self, name: Option<String>) -> RequestNode {
        let inherited = self
            .parameters()
            .filter(|parameter| parameter.should_inherit())
            .cloned()
            .collect();
        RequestNode::child(&self.request, ServiceKey::of::<T>())
            .with_name(name)
            .with_parameters(inherited)
    }
}
