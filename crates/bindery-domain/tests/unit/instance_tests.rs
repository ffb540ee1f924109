//! Unit tests for type-erased instances

use std::sync::Arc;

use bindery_domain::Error;
use bindery_domain::value_objects::{ServiceKey, downcast_instance, erase_instance};

trait Shape: Send + Sync {
    fn area(&self) -> f64;
}

struct Square(f64);

impl Shape for Square {
    fn area(&self) -> f64 {
        self.0 * self.0
    }
}

#[test]
fn test_trait_object_round_trip_preserves_identity() {
    let shape: Arc<dyn Shape> = Arc::new(Square(2.0));
    let instance = erase_instance(shape.clone());

    let recovered = downcast_instance::<dyn Shape>(&instance).expect("same type");
    assert!(Arc::ptr_eq(&shape, &recovered));
    assert_eq!(recovered.area(), 4.0);
}

#[test]
fn test_downcast_mismatch_is_activation_error() {
    let instance = erase_instance(Arc::new(42_u8));
    let result = downcast_instance::<String>(&instance);
    assert!(matches!(result, Err(Error::Activation { .. })));
}

#[test]
fn test_service_keys_distinguish_trait_objects() {
    assert_eq!(ServiceKey::of::<dyn Shape>(), ServiceKey::of::<dyn Shape>());
    assert_ne!(ServiceKey::of::<dyn Shape>(), ServiceKey::of::<Square>());
    assert!(ServiceKey::of::<dyn Shape>().type_name().contains("Shape"));
}
