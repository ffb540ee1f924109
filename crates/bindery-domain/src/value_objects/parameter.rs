//! Request Parameters
//!
//! Parameters travel with a request and are visible to the provider callback
//! that activates it. Bindings may also carry parameters of their own.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use downcast_rs::{DowncastSync, impl_downcast};

/// Name under which the proxy target marker is attached to a binding
pub const PROXY_TARGET_PARAMETER: &str = "factory-proxy-target";

/// A named value attached to a request or a binding
pub trait Parameter: DowncastSync + fmt::Debug {
    /// Parameter name
    fn name(&self) -> &str;

    /// Whether child requests issued while activating see this parameter too
    fn should_inherit(&self) -> bool {
        false
    }
}
impl_downcast!(sync Parameter);

/// Named constructor argument
#[derive(Clone)]
pub struct ConstructorArgument {
    name: Cow<'static, str>,
    value: Arc<dyn Any + Send + Sync>,
    inherit: bool,
}

impl ConstructorArgument {
    /// Create an argument from an owned value
    pub fn new<V: Any + Send + Sync>(name: impl Into<Cow<'static, str>>, value: V) -> Self {
        Self::from_shared(name, Arc::new(value))
    }

    /// Create an argument from an already shared value
    pub fn from_shared(
        name: impl Into<Cow<'static, str>>,
        value: Arc<dyn Any + Send + Sync>,
    ) -> Self {
        Self {
            name: name.into(),
            value,
            inherit: false,
        }
    }

    /// Make the argument visible to child requests as well
    pub fn inherited(mut self) -> Self {
        self.inherit = true;
        self
    }

    /// Borrow the value as `V`, if it has that type
    pub fn value_as<V: Any>(&self) -> Option<&V> {
        self.value.downcast_ref::<V>()
    }
}

impl Parameter for ConstructorArgument {
    fn name(&self) -> &str {
        &self.name
    }

    fn should_inherit(&self) -> bool {
        self.inherit
    }
}

impl fmt::Debug for ConstructorArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorArgument")
            .field("name", &self.name)
            .field("inherit", &self.inherit)
            .finish_non_exhaustive()
    }
}

/// Marks a binding whose target is a factory proxy without a backing object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyTargetParameter {
    interface: &'static str,
}

impl ProxyTargetParameter {
    /// Mark a proxy target for the given factory interface
    pub fn new(interface: &'static str) -> Self {
        Self { interface }
    }

    /// Factory interface the proxy implements
    pub fn interface(&self) -> &'static str {
        self.interface
    }
}

impl Parameter for ProxyTargetParameter {
    fn name(&self) -> &str {
        PROXY_TARGET_PARAMETER
    }
}
