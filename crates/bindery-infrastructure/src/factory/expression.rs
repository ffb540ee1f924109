//! Expression Inspector
//!
//! Factory methods are referenced through a [`CallDescriptor`]. The binding
//! name of a factory method is its name without the `Get` prefix, so
//! `GetCircle` names the binding `Circle`.

use bindery_domain::constants::FACTORY_METHOD_PREFIX;
use bindery_domain::error::{Error, Result};
use bindery_domain::value_objects::CallDescriptor;

/// Binding name derived from a factory method
///
/// # Errors
///
/// - `NullArgument` when the descriptor carries no method name
/// - `InvalidArgument` when the method name is not a single identifier,
///   does not start with `Get`, or has nothing after the prefix
///
/// # Example
///
/// ```
/// use bindery_domain::value_objects::CallDescriptor;
/// use bindery_infrastructure::factory::derive_name;
///
/// let call = CallDescriptor::new("ShapeFactory", "GetCircle");
/// assert_eq!(derive_name(&call).unwrap(), "Circle");
/// ```
pub fn derive_name(call: &CallDescriptor) -> Result<String> {
    let method = call.method();
    if method.is_empty() {
        return Err(Error::null_argument("call.method"));
    }
    if !is_identifier(method) {
        return Err(Error::invalid_argument(format!(
            "`{call}` is not a single method call"
        )));
    }

    match method.strip_prefix(FACTORY_METHOD_PREFIX) {
        Some("") => Err(Error::invalid_argument(format!(
            "`{call}` has no name after the '{FACTORY_METHOD_PREFIX}' prefix"
        ))),
        Some(name) => Ok(name.to_string()),
        None => Err(Error::invalid_argument(format!(
            "`{call}` does not start with '{FACTORY_METHOD_PREFIX}'"
        ))),
    }
}

/// Name constraint used when a factory method is invoked
///
/// Unlike [`derive_name`] this never fails: methods without the `Get`
/// prefix simply resolve without a name.
pub fn factory_method_name(call: &CallDescriptor) -> Option<&str> {
    call.method()
        .strip_prefix(FACTORY_METHOD_PREFIX)
        .filter(|name| !name.is_empty())
}

fn is_identifier(method: &str) -> bool {
    let mut chars = method.chars();
    chars
        .next()
        .is_some_and(|first| first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}
