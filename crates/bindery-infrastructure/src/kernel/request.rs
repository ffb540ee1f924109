//! Request chain
//!
//! Every resolution attempt is a [`RequestNode`] linked to the node that
//! issued it. Nodes are immutable: selecting a binding produces a new node
//! carrying the binding reference, and child requests hang off that node.
//! The chain therefore only ever grows downwards and can be read from any
//! thread without synchronisation.

use std::fmt;
use std::sync::Arc;

use bindery_domain::value_objects::{BindingRef, Parameter, ServiceKey};

/// One in-flight request for a service
#[derive(Clone)]
pub struct RequestNode {
    service: ServiceKey,
    name: Option<String>,
    binding: Option<BindingRef>,
    parent: Option<Arc<RequestNode>>,
    parameters: Vec<Arc<dyn Parameter>>,
    depth: usize,
}

impl RequestNode {
    /// A top-level request with no parent
    pub fn root(service: ServiceKey) -> Self {
        Self {
            service,
            name: None,
            binding: None,
            parent: None,
            parameters: Vec::new(),
            depth: 1,
        }
    }

    /// A request issued while activating `parent`
    pub fn child(parent: &Arc<RequestNode>, service: ServiceKey) -> Self {
        Self {
            service,
            name: None,
            binding: None,
            parent: Some(Arc::clone(parent)),
            parameters: Vec::new(),
            depth: parent.depth + 1,
        }
    }

    /// Restrict the request to bindings with this name
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Attach parameters to the request
    pub fn with_parameters(mut self, parameters: Vec<Arc<dyn Parameter>>) -> Self {
        self.parameters = parameters;
        self
    }

    /// The same request, answered by `binding`
    pub fn resolved(&self, binding: BindingRef) -> Arc<RequestNode> {
        Arc::new(Self {
            binding: Some(binding),
            ..self.clone()
        })
    }

    /// Requested service
    pub fn service(&self) -> ServiceKey {
        self.service
    }

    /// Name constraint, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Binding that answered this request; `None` while it is pending
    pub fn binding(&self) -> Option<&BindingRef> {
        self.binding.as_ref()
    }

    /// The request this one was issued from
    pub fn parent_request(&self) -> Option<&Arc<RequestNode>> {
        self.parent.as_ref()
    }

    /// Parameters attached to this request
    pub fn parameters(&self) -> &[Arc<dyn Parameter>] {
        &self.parameters
    }

    /// Position in the chain, 1 for a root request
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Ancestors from the immediate parent up to the root
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors {
            next: self.parent.as_deref(),
        }
    }

    /// Whether any ancestor was answered by a binding named exactly `name`
    ///
    /// The walk stops at the root request; a root request has no ancestors
    /// and never matches.
    pub fn has_ancestor_named(&self, name: &str) -> bool {
        self.ancestors()
            .any(|ancestor| ancestor.binding().is_some_and(|binding| binding.is_named(name)))
    }
}

impl fmt::Display for RequestNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} named \"{}\"", self.service, name),
            None => write!(f, "{}", self.service),
        }
    }
}

impl fmt::Debug for RequestNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestNode")
            .field("service", &self.service.type_name())
            .field("name", &self.name)
            .field("binding", &self.binding)
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}

/// Iterator over the ancestors of a request, ending at the root
pub struct Ancestors<'a> {
    next: Option<&'a RequestNode>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a RequestNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.parent.as_deref();
        Some(node)
    }
}
