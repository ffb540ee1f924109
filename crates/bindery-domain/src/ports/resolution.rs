//! Resolution Root Port

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::value_objects::{AnyInstance, Parameter, ServiceKey};

/// A top-level request addressed to a resolution root
#[derive(Clone)]
pub struct ResolutionRequest {
    service: ServiceKey,
    name: Option<String>,
    parameters: Vec<Arc<dyn Parameter>>,
}

impl ResolutionRequest {
    /// Request an instance of `service`
    pub fn new(service: ServiceKey) -> Self {
        Self {
            service,
            name: None,
            parameters: Vec::new(),
        }
    }

    /// Restrict the request to bindings carrying `name`
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Drop the name constraint
    pub fn without_name(mut self) -> Self {
        self.name = None;
        self
    }

    /// Attach a parameter visible to the activated provider
    pub fn with_parameter(mut self, parameter: Arc<dyn Parameter>) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Requested service
    pub fn service(&self) -> ServiceKey {
        self.service
    }

    /// Name constraint, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Attached parameters
    pub fn parameters(&self) -> &[Arc<dyn Parameter>] {
        &self.parameters
    }
}

impl fmt::Debug for ResolutionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolutionRequest")
            .field("service", &self.service)
            .field("name", &self.name)
            .field("parameters", &self.parameters.len())
            .finish()
    }
}

/// Something that can answer resolution requests
///
/// # Example
///
/// ```ignore
/// let request = ResolutionRequest::new(ServiceKey::of::<dyn Shape>()).named("Circle");
/// if root.can_resolve(&request) {
///     let shape = root.resolve(request)?;
/// }
/// ```
pub trait ResolutionRoot: Send + Sync {
    /// Whether at least one binding would satisfy the request
    fn can_resolve(&self, request: &ResolutionRequest) -> bool;

    /// Resolve exactly one instance
    fn resolve(&self, request: ResolutionRequest) -> Result<AnyInstance>;

    /// Resolve every instance whose binding satisfies the request
    fn resolve_all(&self, request: ResolutionRequest) -> Result<Vec<AnyInstance>>;
}
