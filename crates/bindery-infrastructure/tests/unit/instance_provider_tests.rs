//! Standard Instance Provider Tests

use std::sync::Arc;

use bindery_domain::ports::InstanceProvider;
use bindery_domain::value_objects::{
    CallDescriptor, FactoryArgument, FactoryCall, ServiceKey, downcast_instance,
};
use bindery_infrastructure::config::FactoryConfig;
use bindery_infrastructure::factory::StandardInstanceProvider;
use bindery_infrastructure::kernel::Kernel;

use crate::test_utils::{Circle, Shape, ShapeFactory, bind_named_shapes, circle};

fn shape_call(method: &str, arguments: Vec<FactoryArgument>) -> FactoryCall {
    FactoryCall::new(
        CallDescriptor::for_method::<dyn ShapeFactory>(method),
        ServiceKey::of::<dyn Shape>(),
        arguments,
    )
}

#[test]
fn test_method_name_selects_named_binding() {
    let kernel = Kernel::new();
    bind_named_shapes(&kernel);
    let provider = StandardInstanceProvider::new();

    let call = shape_call("get_square", vec![FactoryArgument::new("side", 6u32)]);
    let instance = provider.get_instance(&kernel, &call).unwrap();
    let shape = downcast_instance::<dyn Shape>(&instance).unwrap();

    assert_eq!(shape.kind(), "square");
    assert_eq!(shape.size(), 6);
}

#[test]
fn test_method_without_prefix_resolves_unnamed() {
    let kernel = Kernel::new();
    kernel
        .bind::<dyn Shape>()
        .to_method(|_| Ok(Arc::new(Circle { radius: 9 })));
    let provider = StandardInstanceProvider::new();

    let instance = provider
        .get_instance(&kernel, &shape_call("create_any", Vec::new()))
        .unwrap();
    assert_eq!(downcast_instance::<dyn Shape>(&instance).unwrap().size(), 9);
}

#[test]
fn test_missing_name_fails_without_fallback() {
    let kernel = Kernel::new();
    kernel.bind::<dyn Shape>().to_method(circle);
    let provider = StandardInstanceProvider::new();

    let call = shape_call("get_circle", vec![FactoryArgument::new("radius", 2u32)]);
    let err = provider.get_instance(&kernel, &call).unwrap_err();
    assert!(err.is_missing_binding(), "{err}");
}

#[test]
fn test_fallback_resolves_unnamed_binding() {
    let kernel = Kernel::new();
    kernel.bind::<dyn Shape>().to_method(circle);
    let provider = StandardInstanceProvider::new().with_fallback(true);

    let call = shape_call("get_circle", vec![FactoryArgument::new("radius", 2u32)]);
    let instance = provider.get_instance(&kernel, &call).unwrap();
    assert_eq!(downcast_instance::<dyn Shape>(&instance).unwrap().size(), 2);
}

#[test]
fn test_fallback_prefers_named_binding_when_present() {
    let kernel = Kernel::new();
    bind_named_shapes(&kernel);
    let provider = StandardInstanceProvider::new().with_fallback(true);

    let call = shape_call("get_circle", vec![FactoryArgument::new("radius", 4u32)]);
    let instance = provider.get_instance(&kernel, &call).unwrap();
    assert_eq!(downcast_instance::<dyn Shape>(&instance).unwrap().kind(), "circle");
}

#[test]
fn test_get_all_instances_with_fallback() {
    let kernel = Kernel::new();
    kernel
        .bind::<dyn Shape>()
        .to_method(|_| Ok(Arc::new(Circle { radius: 1 })));
    kernel
        .bind::<dyn Shape>()
        .to_method(|_| Ok(Arc::new(Circle { radius: 2 })));

    let call = shape_call("get_shapes", Vec::new());
    let strict = StandardInstanceProvider::new();
    assert!(strict.get_all_instances(&kernel, &call).unwrap().is_empty());

    let lenient = StandardInstanceProvider::new().with_fallback(true);
    assert_eq!(lenient.get_all_instances(&kernel, &call).unwrap().len(), 2);
}

#[test]
fn test_from_config_reads_fallback_flag() {
    let config = FactoryConfig {
        fallback_to_unnamed: true,
    };
    assert!(StandardInstanceProvider::from_config(&config).fallback());
    assert!(!StandardInstanceProvider::from_config(&FactoryConfig::default()).fallback());
}
