//! Standard instance provider
//!
//! Resolves the component a factory method returns. The method name,
//! stripped of its `Get` prefix, constrains the binding name and every
//! argument is passed on as a constructor argument.

use std::sync::Arc;

use bindery_domain::error::Result;
use bindery_domain::ports::{InstanceProvider, ResolutionRequest, ResolutionRoot};
use bindery_domain::value_objects::{AnyInstance, FactoryCall};
use tracing::trace;

use super::expression::factory_method_name;
use crate::config::FactoryConfig;

/// Default [`InstanceProvider`] installed by `to_factory`
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardInstanceProvider {
    fallback: bool,
}

impl StandardInstanceProvider {
    /// Provider that always resolves by the method's name
    pub fn new() -> Self {
        Self::default()
    }

    /// Retry without the name when no binding carries it
    pub fn with_fallback(mut self, fallback: bool) -> Self {
        self.fallback = fallback;
        self
    }

    /// Provider configured from the factory settings
    pub fn from_config(config: &FactoryConfig) -> Self {
        Self::new().with_fallback(config.fallback_to_unnamed)
    }

    /// Whether unnamed resolution is attempted when the name matches nothing
    pub fn fallback(&self) -> bool {
        self.fallback
    }

    fn request_for(&self, root: &dyn ResolutionRoot, call: &FactoryCall) -> ResolutionRequest {
        let mut request = call.arguments().iter().fold(
            ResolutionRequest::new(call.service()),
            |request, argument| request.with_parameter(Arc::new(argument.to_constructor_argument())),
        );

        if let Some(name) = factory_method_name(call.descriptor()) {
            request = request.named(name);
            if self.fallback && !root.can_resolve(&request) {
                trace!(call = %call.descriptor(), "Falling back to unnamed resolution");
                request = request.without_name();
            }
        }
        request
    }
}

impl InstanceProvider for StandardInstanceProvider {
    fn get_instance(&self, root: &dyn ResolutionRoot, call: &FactoryCall) -> Result<AnyInstance> {
        root.resolve(self.request_for(root, call))
    }

    fn get_all_instances(
        &self,
        root: &dyn ResolutionRoot,
        call: &FactoryCall,
    ) -> Result<Vec<AnyInstance>> {
        root.resolve_all(self.request_for(root, call))
    }
}
