//! Factory Call Value Objects
//!
//! A [`CallDescriptor`] stands in for a quoted method-call expression: it
//! names the factory interface and the method, and nothing else. Adapters
//! built with `factory_interface!` construct one per invocation.

use std::any::{Any, type_name};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use super::parameter::ConstructorArgument;
use super::service::ServiceKey;

/// Value Object: Factory Method Reference
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallDescriptor {
    interface: &'static str,
    method: Cow<'static, str>,
}

impl CallDescriptor {
    /// Describe `method` on `interface`, taking the method name verbatim
    pub fn new(interface: &'static str, method: impl Into<Cow<'static, str>>) -> Self {
        Self {
            interface,
            method: method.into(),
        }
    }

    /// Describe `method` on the factory interface `F`
    pub fn of<F: ?Sized + 'static>(method: impl Into<Cow<'static, str>>) -> Self {
        Self::new(type_name::<F>(), method)
    }

    /// Describe a Rust method of `F` by its snake_case identifier
    ///
    /// The identifier is converted to PascalCase, so `get_circle` is
    /// described as `GetCircle`.
    pub fn for_method<F: ?Sized + 'static>(identifier: &str) -> Self {
        Self::of::<F>(pascal_case(identifier))
    }

    /// Name of the declaring factory interface
    pub fn interface(&self) -> &'static str {
        self.interface
    }

    /// Method name
    pub fn method(&self) -> &str {
        &self.method
    }
}

impl fmt::Display for CallDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}(..)", self.interface, self.method)
    }
}

fn pascal_case(identifier: &str) -> String {
    identifier
        .split('_')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Value Object: Factory Method Argument
///
/// One argument passed to a factory method, keyed by the parameter name.
#[derive(Clone)]
pub struct FactoryArgument {
    name: &'static str,
    value: Arc<dyn Any + Send + Sync>,
}

impl FactoryArgument {
    /// Capture a named argument value
    ///
    /// The value is moved behind an `Arc` and outlives the call, hence the
    /// `'static` bound implied by `Any`.
    pub fn new<V: Any + Send + Sync>(name: &'static str, value: V) -> Self {
        Self {
            name,
            value: Arc::new(value),
        }
    }

    /// Parameter name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Borrow the value as `V`, if it has that type
    pub fn value_as<V: Any>(&self) -> Option<&V> {
        self.value.downcast_ref::<V>()
    }

    /// Offer this argument to the activated provider as a constructor argument
    pub fn to_constructor_argument(&self) -> ConstructorArgument {
        ConstructorArgument::from_shared(self.name, self.value.clone())
    }
}

impl fmt::Debug for FactoryArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryArgument")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Value Object: Factory Method Invocation
///
/// What a factory adapter hands to its instance provider: which method was
/// called, the component type it returns, and the arguments it received.
#[derive(Debug, Clone)]
pub struct FactoryCall {
    descriptor: CallDescriptor,
    service: ServiceKey,
    arguments: Vec<FactoryArgument>,
}

impl FactoryCall {
    /// Create a call record
    pub fn new(descriptor: CallDescriptor, service: ServiceKey, arguments: Vec<FactoryArgument>) -> Self {
        Self {
            descriptor,
            service,
            arguments,
        }
    }

    /// Invoked method
    pub fn descriptor(&self) -> &CallDescriptor {
        &self.descriptor
    }

    /// Component type the method returns
    pub fn service(&self) -> ServiceKey {
        self.service
    }

    /// Arguments in declaration order
    pub fn arguments(&self) -> &[FactoryArgument] {
        &self.arguments
    }
}
