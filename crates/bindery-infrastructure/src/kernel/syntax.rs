//! Fluent binding syntax
//!
//! Returned by [`Kernel::bind`]. Every call edits the binding that was already
//! added to the table, so the syntax value may be dropped at any point.

use std::marker::PhantomData;
use std::sync::Arc;

use bindery_domain::error::Result;
use bindery_domain::value_objects::{BindingId, Parameter, erase_instance};

use super::binding::{BindingConfiguration, Condition, ScopeStrategy};
use super::context::Context;
use super::kernel::Kernel;
use super::request::RequestNode;

/// Builder over one declared binding of `T`
pub struct BindingSyntax<'k, T: ?Sized> {
    kernel: &'k Kernel,
    binding: Arc<BindingConfiguration>,
    _service: PhantomData<fn() -> Arc<T>>,
}

impl<'k, T: ?Sized + Send + Sync + 'static> BindingSyntax<'k, T> {
    pub(crate) fn new(kernel: &'k Kernel, binding: Arc<BindingConfiguration>) -> Self {
        Self {
            kernel,
            binding,
            _service: PhantomData,
        }
    }

    // ========================================================================
    // Targets
    // ========================================================================

    /// Activate the binding by calling `method`
    pub fn to_method<F>(self, method: F) -> Self
    where
        F: Fn(&Context<'_>) -> Result<Arc<T>> + Send + Sync + 'static,
    {
        self.binding.update(|settings| {
            settings.provider = Some(Arc::new(move |context: &Context<'_>| {
                method(context).map(erase_instance::<T>)
            }));
        });
        self
    }

    /// Always answer with the same instance
    pub fn to_constant(self, value: Arc<T>) -> Self {
        self.to_method(move |_| Ok(Arc::clone(&value)))
    }

    // ========================================================================
    // Names and conditions
    // ========================================================================

    /// Name the binding
    pub fn named(self, name: impl Into<Arc<str>>) -> Self {
        let name = name.into();
        self.binding.update(|settings| settings.name = Some(name));
        self
    }

    /// Only answer requests for which `condition` holds
    pub fn when<C>(self, condition: C) -> Self
    where
        C: Fn(&RequestNode) -> bool + Send + Sync + 'static,
    {
        self.when_condition(Arc::new(condition))
    }

    /// Only answer requests for which the shared `condition` holds
    pub fn when_condition(self, condition: Condition) -> Self {
        self.binding
            .update(|settings| settings.condition = Some(condition));
        self
    }

    /// Only answer requests with an ancestor answered by a binding named `name`
    pub fn when_any_ancestor_named(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.when(move |request| request.has_ancestor_named(&name))
    }

    // ========================================================================
    // Scopes
    // ========================================================================

    /// Reuse instances according to `scope`
    pub fn in_scope(self, scope: ScopeStrategy) -> Self {
        self.binding.update(|settings| settings.scope = scope);
        self
    }

    /// One instance for the lifetime of the kernel
    pub fn in_singleton_scope(self) -> Self {
        self.in_scope(ScopeStrategy::Singleton)
    }

    /// A new instance per activation
    pub fn in_transient_scope(self) -> Self {
        self.in_scope(ScopeStrategy::Transient)
    }

    // ========================================================================
    // Parameters and accessors
    // ========================================================================

    /// Attach a parameter visible to every activation of the binding
    pub fn with_parameter(self, parameter: impl Parameter) -> Self {
        let parameter: Arc<dyn Parameter> = Arc::new(parameter);
        self.binding
            .update(|settings| settings.parameters.push(parameter));
        self
    }

    /// Identity of the binding being declared
    pub fn binding_configuration(&self) -> BindingId {
        self.binding.id()
    }

    /// The binding being declared
    pub fn binding(&self) -> &Arc<BindingConfiguration> {
        &self.binding
    }

    /// Kernel the binding belongs to
    pub fn kernel(&self) -> &'k Kernel {
        self.kernel
    }
}
