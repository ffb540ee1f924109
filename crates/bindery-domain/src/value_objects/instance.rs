//! Type-erased instances
//!
//! The kernel stores every activated value as an `Arc<T>` boxed behind
//! `dyn Any`, so that trait-object services (`Arc<dyn Shape>`) survive the
//! round trip through the binding table and the scope cache.

use std::any::{Any, type_name};
use std::sync::Arc;

use crate::error::{Error, Result};

/// An activated value, wrapping an `Arc<T>`
pub type AnyInstance = Arc<dyn Any + Send + Sync>;

/// Erase a typed instance
pub fn erase_instance<T: ?Sized + Send + Sync + 'static>(value: Arc<T>) -> AnyInstance {
    Arc::new(value)
}

/// Recover the typed instance, failing with an activation error on mismatch
pub fn downcast_instance<T: ?Sized + Send + Sync + 'static>(
    instance: &AnyInstance,
) -> Result<Arc<T>> {
    instance.downcast_ref::<Arc<T>>().cloned().ok_or_else(|| {
        Error::activation(format!(
            "Activated instance is not of the requested type {}",
            type_name::<T>()
        ))
    })
}
