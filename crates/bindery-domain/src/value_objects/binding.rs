//! Binding Identity Value Objects

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_BINDING_ID: AtomicU64 = AtomicU64::new(1);

/// Value Object: Binding Identity
///
/// Every binding configuration receives one at creation. Two bindings are the
/// same binding iff their ids are equal; settings are never compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindingId(u64);

impl BindingId {
    /// Allocate a fresh, process-unique identity
    pub fn next() -> Self {
        Self(NEXT_BINDING_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BindingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "binding#{}", self.0)
    }
}

/// Value Object: Binding Reference
///
/// Plain snapshot of the binding that answered a request. Request nodes carry
/// this instead of the configuration so conditions never touch mutable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingRef {
    id: BindingId,
    name: Option<Arc<str>>,
}

impl BindingRef {
    /// Create a reference from an identity and the binding's name
    pub fn new(id: BindingId, name: Option<Arc<str>>) -> Self {
        Self { id, name }
    }

    /// Identity of the referenced binding
    pub fn id(&self) -> BindingId {
        self.id
    }

    /// Name of the referenced binding, if it was named
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether the binding carries exactly this name
    pub fn is_named(&self, name: &str) -> bool {
        self.name() == Some(name)
    }
}

/// Value Object: Scope Key
///
/// Instances activated under the same binding and the same key are reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKey {
    /// Kernel-wide scope, lives as long as the kernel
    Singleton,
    /// Scope owned by one binding configuration
    Binding(BindingId),
}

impl fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Singleton => f.write_str("singleton"),
            Self::Binding(id) => write!(f, "scope({id})"),
        }
    }
}
