//! Ancestor-Name Conditional Matcher
//!
//! Conditions for bindings that should only apply below a factory method,
//! e.g. a material bound only for whatever `GetSword` produces.

use std::sync::Arc;

use bindery_domain::error::Result;
use bindery_domain::value_objects::CallDescriptor;

use super::expression::derive_name;
use crate::kernel::{BindingSyntax, Condition, RequestNode};

/// Condition that holds when an ancestor was answered by the binding named
/// like the factory method `call`
pub fn derive_ancestor_condition(call: &CallDescriptor) -> Result<Condition> {
    let name = derive_name(call)?;
    Ok(Arc::new(move |request: &RequestNode| {
        request.has_ancestor_named(&name)
    }))
}

/// Names and conditions derived from factory methods
pub trait FactoryConditionExt: Sized {
    /// Name the binding after the factory method, `GetFoo` naming it `Foo`
    fn named_like_factory_method(self, call: &CallDescriptor) -> Result<Self>;

    /// Only apply below the binding named like the factory method
    fn when_any_ancestor_named_like_factory_method(self, call: &CallDescriptor) -> Result<Self>;
}

impl<T: ?Sized + Send + Sync + 'static> FactoryConditionExt for BindingSyntax<'_, T> {
    fn named_like_factory_method(self, call: &CallDescriptor) -> Result<Self> {
        Ok(self.named(derive_name(call)?))
    }

    fn when_any_ancestor_named_like_factory_method(self, call: &CallDescriptor) -> Result<Self> {
        Ok(self.when_condition(derive_ancestor_condition(call)?))
    }
}
