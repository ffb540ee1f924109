//! Kernel

use std::sync::{Arc, Weak};

use bindery_domain::constants::{AMBIGUOUS_BINDINGS, NO_MATCHING_BINDINGS};
use bindery_domain::error::{Error, Result};
use bindery_domain::ports::{ResolutionRequest, ResolutionRoot};
use bindery_domain::value_objects::{AnyInstance, ScopeKey, ServiceKey, downcast_instance};
use dashmap::DashMap;
use tracing::{trace, warn};

use super::binding::BindingConfiguration;
use super::context::Context;
use super::request::RequestNode;
use super::scope::ScopeCache;
use super::syntax::BindingSyntax;
use crate::config::{AppConfig, FactoryConfig, KernelConfig};

struct KernelInner {
    bindings: DashMap<ServiceKey, Vec<Arc<BindingConfiguration>>>,
    scopes: ScopeCache,
    config: KernelConfig,
    factory: FactoryConfig,
}

/// Resolution kernel
///
/// Cheap to clone; clones share the binding table and the scope cache.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use bindery_infrastructure::kernel::Kernel;
///
/// let kernel = Kernel::new();
/// kernel.bind::<String>().to_method(|_| Ok(Arc::new("hello".to_string())));
/// assert_eq!(kernel.get::<String>().unwrap().as_str(), "hello");
/// ```
#[derive(Clone)]
pub struct Kernel {
    inner: Arc<KernelInner>,
}

/// Non-owning kernel handle held by long-lived factory adapters
#[derive(Clone)]
pub struct WeakKernel {
    inner: Weak<KernelInner>,
}

impl WeakKernel {
    /// The kernel, unless every owning handle has been dropped
    pub fn upgrade(&self) -> Option<Kernel> {
        self.inner.upgrade().map(|inner| Kernel { inner })
    }
}

impl Kernel {
    /// Kernel with default settings
    pub fn new() -> Self {
        Self::with_settings(KernelConfig::default(), FactoryConfig::default())
    }

    /// Kernel configured from the application configuration
    pub fn with_config(config: &AppConfig) -> Self {
        Self::with_settings(config.kernel.clone(), config.factory.clone())
    }

    /// Kernel with explicit kernel and factory settings
    pub fn with_settings(config: KernelConfig, factory: FactoryConfig) -> Self {
        Self {
            inner: Arc::new(KernelInner {
                bindings: DashMap::new(),
                scopes: ScopeCache::new(),
                config,
                factory,
            }),
        }
    }

    /// Kernel settings
    pub fn config(&self) -> &KernelConfig {
        &self.inner.config
    }

    /// Factory extension settings
    pub fn factory_config(&self) -> &FactoryConfig {
        &self.inner.factory
    }

    /// Non-owning handle to this kernel
    pub fn downgrade(&self) -> WeakKernel {
        WeakKernel {
            inner: Arc::downgrade(&self.inner),
        }
    }

    // ========================================================================
    // Binding table
    // ========================================================================

    /// Declare a new binding for `T`
    ///
    /// The binding enters the table immediately; the returned syntax edits it.
    pub fn bind<T: ?Sized + Send + Sync + 'static>(&self) -> BindingSyntax<'_, T> {
        let binding = Arc::new(BindingConfiguration::new(ServiceKey::of::<T>()));
        self.add_binding(Arc::clone(&binding));
        BindingSyntax::new(self, binding)
    }

    /// Append a binding to the table
    pub fn add_binding(&self, binding: Arc<BindingConfiguration>) {
        trace!(service = %binding.service(), binding = %binding.id(), "Adding binding");
        self.inner
            .bindings
            .entry(binding.service())
            .or_default()
            .push(binding);
    }

    /// Bindings declared for `service`, in declaration order
    pub fn bindings(&self, service: ServiceKey) -> Vec<Arc<BindingConfiguration>> {
        self.inner
            .bindings
            .get(&service)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Bindings declared for `T`, in declaration order
    pub fn bindings_for<T: ?Sized + 'static>(&self) -> Vec<Arc<BindingConfiguration>> {
        self.bindings(ServiceKey::of::<T>())
    }

    // ========================================================================
    // Typed resolution
    // ========================================================================

    /// Resolve the single binding of `T`
    pub fn get<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<T>> {
        let instance = self.resolve_node(RequestNode::root(ServiceKey::of::<T>()))?;
        downcast_instance::<T>(&instance)
    }

    /// Resolve the binding of `T` named `name`
    pub fn get_named<T: ?Sized + Send + Sync + 'static>(&self, name: &str) -> Result<Arc<T>> {
        let request = RequestNode::root(ServiceKey::of::<T>()).with_name(Some(name.to_string()));
        let instance = self.resolve_node(request)?;
        downcast_instance::<T>(&instance)
    }

    /// Resolve every binding of `T` that satisfies a root request
    pub fn get_all<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Vec<Arc<T>>> {
        self.resolve_all_nodes(RequestNode::root(ServiceKey::of::<T>()))?
            .iter()
            .map(downcast_instance::<T>)
            .collect()
    }

    // ========================================================================
    // Scopes
    // ========================================================================

    /// Evict every instance cached under `scope`
    pub fn release(&self, scope: &ScopeKey) -> usize {
        self.inner.scopes.release(scope)
    }

    /// Evict every cached instance
    pub fn clear_scopes(&self) {
        self.inner.scopes.clear();
    }

    /// Number of cached scoped instances
    pub fn cached_instances(&self) -> usize {
        self.inner.scopes.len()
    }

    // ========================================================================
    // Request pipeline
    // ========================================================================

    /// Whether at least one binding satisfies `request`
    pub fn can_resolve_node(&self, request: &RequestNode) -> bool {
        !self.satisfied_bindings(request).is_empty()
    }

    /// Answer a single-instance request
    pub fn resolve_node(&self, request: RequestNode) -> Result<AnyInstance> {
        self.check_depth(&request)?;
        let mut satisfied = self.satisfied_bindings(&request);
        match satisfied.len() {
            0 => Err(Error::activation(format!(
                "{NO_MATCHING_BINDINGS} for {request}{}",
                requested_by(&request)
            ))),
            1 => {
                let binding = satisfied.remove(0);
                self.activate(&request, binding)
            }
            candidates => {
                warn!(request = %request, candidates, "Ambiguous request");
                Err(Error::activation(format!(
                    "{AMBIGUOUS_BINDINGS} for {request}{} ({candidates} candidates)",
                    requested_by(&request)
                )))
            }
        }
    }

    /// Answer a multi-instance request; no match yields an empty list
    pub fn resolve_all_nodes(&self, request: RequestNode) -> Result<Vec<AnyInstance>> {
        self.check_depth(&request)?;
        self.satisfied_bindings(&request)
            .into_iter()
            .map(|binding| self.activate(&request, binding))
            .collect()
    }

    /// Bindings allowed to answer `request`
    ///
    /// When any conditional binding is satisfied, unconditional bindings are
    /// set aside so the narrower rule wins.
    fn satisfied_bindings(&self, request: &RequestNode) -> Vec<Arc<BindingConfiguration>> {
        let satisfied: Vec<(Arc<BindingConfiguration>, bool)> = self
            .bindings(request.service())
            .into_iter()
            .filter_map(|binding| {
                let settings = binding.settings();
                settings
                    .satisfies(request)
                    .then(|| (binding, settings.is_conditional()))
            })
            .collect();

        let prefer_conditional = satisfied.iter().any(|(_, conditional)| *conditional);
        trace!(
            request = %request,
            satisfied = satisfied.len(),
            prefer_conditional,
            "Selected bindings"
        );
        satisfied
            .into_iter()
            .filter(|(_, conditional)| *conditional || !prefer_conditional)
            .map(|(binding, _)| binding)
            .collect()
    }

    fn activate(
        &self,
        request: &RequestNode,
        binding: Arc<BindingConfiguration>,
    ) -> Result<AnyInstance> {
        if request
            .ancestors()
            .any(|ancestor| ancestor.binding().is_some_and(|active| active.id() == binding.id()))
        {
            return Err(Error::activation(format!(
                "Cyclic dependency detected while activating {request} via {}",
                binding.id()
            )));
        }

        let settings = binding.settings();
        let provider = settings.provider().cloned().ok_or_else(|| {
            Error::activation(format!(
                "{} for {request} has no target configured",
                binding.id()
            ))
        })?;

        let resolved = request.resolved(binding.to_ref());
        let scope = settings.scope().clone();
        let id = binding.id();
        let context = Context::new(self, resolved, binding, settings);
        trace!(request = %request, binding = %id, "Activating binding");

        match scope.key(&context) {
            None => provider(&context),
            Some(key) => self
                .inner
                .scopes
                .get_or_activate(id, key, || provider(&context)),
        }
    }

    fn check_depth(&self, request: &RequestNode) -> Result<()> {
        let limit = self.inner.config.max_request_depth;
        if request.depth() > limit {
            return Err(Error::activation(format!(
                "Request for {request} exceeds the maximum depth of {limit}"
            )));
        }
        Ok(())
    }

    fn root_request(request: ResolutionRequest) -> RequestNode {
        RequestNode::root(request.service())
            .with_name(request.name().map(str::to_string))
            .with_parameters(request.parameters().to_vec())
    }
}

impl Default for Kernel {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Kernel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Kernel")
            .field("services", &self.inner.bindings.len())
            .field("cached_instances", &self.inner.scopes.len())
            .field("config", &self.inner.config)
            .finish()
    }
}

impl ResolutionRoot for Kernel {
    fn can_resolve(&self, request: &ResolutionRequest) -> bool {
        self.can_resolve_node(&Self::root_request(request.clone()))
    }

    fn resolve(&self, request: ResolutionRequest) -> Result<AnyInstance> {
        self.resolve_node(Self::root_request(request))
    }

    fn resolve_all(&self, request: ResolutionRequest) -> Result<Vec<AnyInstance>> {
        self.resolve_all_nodes(Self::root_request(request))
    }
}

fn requested_by(request: &RequestNode) -> String {
    match request.parent_request() {
        Some(parent) => format!(" (requested by {parent})"),
        None => String::new(),
    }
}
