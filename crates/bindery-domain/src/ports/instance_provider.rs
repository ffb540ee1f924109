//! Instance Provider Port

use crate::error::Result;
use crate::ports::resolution::ResolutionRoot;
use crate::value_objects::{AnyInstance, FactoryCall};

/// Produces component instances for factory method calls
///
/// One provider instance exists per factory binding. The factory adapter of
/// that binding hands every call to it together with the root that should
/// answer the resulting requests.
pub trait InstanceProvider: Send + Sync {
    /// Produce the single instance a factory method returns
    fn get_instance(&self, root: &dyn ResolutionRoot, call: &FactoryCall) -> Result<AnyInstance>;

    /// Produce every instance a collection-returning factory method returns
    fn get_all_instances(
        &self,
        root: &dyn ResolutionRoot,
        call: &FactoryCall,
    ) -> Result<Vec<AnyInstance>>;
}
