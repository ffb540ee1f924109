//! Binding configurations
//!
//! A [`BindingConfiguration`] is the identity of one declared binding. Its
//! settings are written while the binding is declared and published as an
//! immutable snapshot, so resolution threads never observe a half-written
//! binding and never take a lock to read one.

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use bindery_domain::error::Result;
use bindery_domain::value_objects::{
    AnyInstance, BindingId, BindingRef, Parameter, ScopeKey, ServiceKey,
};

use super::context::Context;
use super::request::RequestNode;

/// Produces the instance for an activated binding
pub type ProviderCallback = Arc<dyn Fn(&Context<'_>) -> Result<AnyInstance> + Send + Sync>;

/// Decides whether a binding may answer a pending request
///
/// Conditions are evaluated concurrently from arbitrary threads; they must
/// only read the request chain.
pub type Condition = Arc<dyn Fn(&RequestNode) -> bool + Send + Sync>;

/// Derives the scope key of an activation
pub type ScopeCallback = Arc<dyn Fn(&Context<'_>) -> Option<ScopeKey> + Send + Sync>;

/// Instance reuse policy of a binding
#[derive(Clone, Default)]
pub enum ScopeStrategy {
    /// A new instance per activation
    #[default]
    Transient,
    /// One instance for the lifetime of the kernel
    Singleton,
    /// One instance per key returned by the callback; `None` means transient
    Custom(ScopeCallback),
}

impl ScopeStrategy {
    /// Scope key for an activation, `None` when the instance is not cached
    pub fn key(&self, context: &Context<'_>) -> Option<ScopeKey> {
        match self {
            Self::Transient => None,
            Self::Singleton => Some(ScopeKey::Singleton),
            Self::Custom(callback) => callback(context),
        }
    }
}

impl fmt::Debug for ScopeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transient => f.write_str("Transient"),
            Self::Singleton => f.write_str("Singleton"),
            Self::Custom(_) => f.write_str("Custom"),
        }
    }
}

/// Snapshot of everything configurable on a binding
#[derive(Clone, Default)]
pub struct BindingSettings {
    pub(crate) name: Option<Arc<str>>,
    pub(crate) provider: Option<ProviderCallback>,
    pub(crate) condition: Option<Condition>,
    pub(crate) scope: ScopeStrategy,
    pub(crate) parameters: Vec<Arc<dyn Parameter>>,
}

impl BindingSettings {
    /// Binding name, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether a condition restricts the binding
    pub fn is_conditional(&self) -> bool {
        self.condition.is_some()
    }

    /// Provider callback, if a target was configured
    pub fn provider(&self) -> Option<&ProviderCallback> {
        self.provider.as_ref()
    }

    /// Scope strategy
    pub fn scope(&self) -> &ScopeStrategy {
        &self.scope
    }

    /// Parameters attached to the binding itself
    pub fn parameters(&self) -> &[Arc<dyn Parameter>] {
        &self.parameters
    }

    /// Whether the binding may answer `request`
    ///
    /// A named request only matches bindings of that exact name; an unnamed
    /// request matches any name. The condition, when present, must hold.
    pub fn satisfies(&self, request: &RequestNode) -> bool {
        let name_matches = match request.name() {
            Some(requested) => self.name() == Some(requested),
            None => true,
        };
        name_matches
            && self
                .condition
                .as_ref()
                .is_none_or(|condition| condition(request))
    }
}

impl fmt::Debug for BindingSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingSettings")
            .field("name", &self.name)
            .field("has_provider", &self.provider.is_some())
            .field("conditional", &self.is_conditional())
            .field("scope", &self.scope)
            .field("parameters", &self.parameters)
            .finish()
    }
}

/// Identity and settings of one declared binding
pub struct BindingConfiguration {
    id: BindingId,
    service: ServiceKey,
    settings: ArcSwap<BindingSettings>,
}

impl BindingConfiguration {
    /// Create an unconfigured binding for `service` with a fresh identity
    pub fn new(service: ServiceKey) -> Self {
        Self {
            id: BindingId::next(),
            service,
            settings: ArcSwap::from_pointee(BindingSettings::default()),
        }
    }

    /// Identity key of the binding
    pub fn id(&self) -> BindingId {
        self.id
    }

    /// Service the binding answers
    pub fn service(&self) -> ServiceKey {
        self.service
    }

    /// Current settings snapshot
    pub fn settings(&self) -> Arc<BindingSettings> {
        self.settings.load_full()
    }

    /// Plain reference recorded on requests this binding answers
    pub fn to_ref(&self) -> BindingRef {
        BindingRef::new(self.id, self.settings.load().name.clone())
    }

    /// Replace the settings with an edited copy
    ///
    /// Only called while the binding is being declared.
    pub(crate) fn update(&self, edit: impl FnOnce(&mut BindingSettings)) {
        let mut next = BindingSettings::clone(&self.settings.load());
        edit(&mut next);
        self.settings.store(Arc::new(next));
    }
}

impl PartialEq for BindingConfiguration {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for BindingConfiguration {}

impl fmt::Debug for BindingConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingConfiguration")
            .field("id", &self.id)
            .field("service", &self.service.type_name())
            .field("settings", &self.settings.load_full())
            .finish()
    }
}
