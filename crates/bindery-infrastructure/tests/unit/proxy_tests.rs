//! Factory Proxy Installer Tests

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use bindery_domain::error::{Error, Result};
use bindery_domain::ports::InstanceProvider;
use bindery_domain::value_objects::parameter::PROXY_TARGET_PARAMETER;
use bindery_domain::value_objects::ProxyTargetParameter;
use bindery_infrastructure::config::AppConfig;
use bindery_infrastructure::factory::{
    FactoryBindingExt, FactoryInterceptor, FactoryInterface, FactoryProxy,
    StandardInstanceProvider,
};
use bindery_infrastructure::kernel::{Context, Kernel};

use crate::test_utils::{
    Circle, FixedShapeProvider, Shape, ShapeFactory, ShapeFactoryProxy, bind_named_shapes,
};

mod tools {
    use std::sync::Arc;

    use bindery_domain::error::Result;

    use crate::test_utils::Shape;

    pub trait ToolFactory: Send + Sync {
        fn get_circle(&self, radius: u32) -> Result<Arc<dyn Shape>>;
        fn get_label(&self, text: String) -> Result<Arc<String>>;
    }
}

bindery_infrastructure::factory_interface! {
    struct ToolFactoryProxy for dyn tools::ToolFactory {
        fn get_circle(radius: u32) -> dyn Shape;
        fn get_label(text: String) -> String;
    }
}

struct ShapeCatalog {
    factory: Arc<dyn ShapeFactory>,
}

fn factory(kernel: &Kernel) -> Arc<dyn ShapeFactory> {
    match kernel.get::<dyn ShapeFactory>() {
        Ok(factory) => factory,
        Err(err) => panic!("factory should resolve: {err}"),
    }
}

fn named_factory(kernel: &Kernel, name: &str) -> Arc<dyn ShapeFactory> {
    match kernel.get_named::<dyn ShapeFactory>(name) {
        Ok(factory) => factory,
        Err(err) => panic!("factory {name} should resolve: {err}"),
    }
}

fn fixed(
    provider: &Arc<FixedShapeProvider>,
) -> impl Fn(&Context<'_>) -> Result<Arc<dyn InstanceProvider>> + Send + Sync + 'static {
    let provider = Arc::clone(provider);
    move |_: &Context<'_>| Ok(Arc::clone(&provider) as Arc<dyn InstanceProvider>)
}

#[test]
fn test_to_factory_routes_calls_to_named_bindings() {
    let kernel = Kernel::new();
    bind_named_shapes(&kernel);
    kernel.bind::<dyn ShapeFactory>().to_factory();

    let factory = factory(&kernel);
    let circle = factory.get_circle(5).unwrap();
    let square = factory.get_square(3).unwrap();

    assert_eq!((circle.kind(), circle.size()), ("circle", 5));
    assert_eq!((square.kind(), square.size()), ("square", 3));
}

#[test]
fn test_factory_binding_is_marked_as_proxy_target() {
    let kernel = Kernel::new();
    kernel.bind::<dyn ShapeFactory>().to_factory();

    let bindings = kernel.bindings_for::<dyn ShapeFactory>();
    let settings = bindings[0].settings();
    let marker = settings
        .parameters()
        .iter()
        .find(|parameter| parameter.name() == PROXY_TARGET_PARAMETER)
        .and_then(|parameter| parameter.downcast_ref::<ProxyTargetParameter>())
        .expect("proxy binding should carry the target marker");

    assert!(marker.interface().contains("ShapeFactory"), "{}", marker.interface());
}

#[test]
fn test_to_factory_installs_one_conditional_provider_binding() {
    let kernel = Kernel::new();
    kernel.bind::<dyn ShapeFactory>().to_factory();

    let providers = kernel.bindings_for::<dyn InstanceProvider>();
    assert_eq!(providers.len(), 1);
    assert!(providers[0].settings().is_conditional());
}

#[test]
fn test_factory_syntax_remains_chainable() {
    let kernel = Kernel::new();
    kernel
        .bind::<dyn ShapeFactory>()
        .to_factory()
        .named("Shapes")
        .in_singleton_scope();

    let first = named_factory(&kernel, "Shapes");
    let second = named_factory(&kernel, "Shapes");
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_independent_factory_bindings_do_not_cross() {
    let kernel = Kernel::new();
    let small = Arc::new(FixedShapeProvider::new(1));
    let large = Arc::new(FixedShapeProvider::new(100));
    kernel
        .bind::<dyn ShapeFactory>()
        .to_factory_with(fixed(&small))
        .named("Small");
    kernel
        .bind::<dyn ShapeFactory>()
        .to_factory_with(fixed(&large))
        .named("Large");

    assert_eq!(named_factory(&kernel, "Small").get_circle(7).unwrap().size(), 1);
    assert_eq!(named_factory(&kernel, "Large").get_circle(7).unwrap().size(), 100);
    assert_eq!(named_factory(&kernel, "Small").get_circle(8).unwrap().size(), 1);

    assert_eq!(small.calls(), 2);
    assert_eq!(large.calls(), 1);
}

#[test]
fn test_provider_is_created_once_per_factory_binding() {
    let kernel = Kernel::new();
    bind_named_shapes(&kernel);
    let created = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&created);
    kernel
        .bind::<dyn ShapeFactory>()
        .to_factory_with(move |context: &Context<'_>| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(StandardInstanceProvider::from_config(
                context.kernel().factory_config(),
            )) as Arc<dyn InstanceProvider>)
        });

    let first = factory(&kernel);
    let second = factory(&kernel);
    assert!(!Arc::ptr_eq(&first, &second), "the factory itself is transient");
    assert_eq!(first.get_circle(1).unwrap().size(), 1);
    assert_eq!(second.get_square(2).unwrap().size(), 2);

    assert_eq!(created.load(Ordering::SeqCst), 1);
    assert_eq!(kernel.cached_instances(), 1);
}

#[test]
fn test_to_factory_of_wraps_distinct_interface() {
    let kernel = Kernel::new();
    bind_named_shapes(&kernel);
    kernel
        .bind::<ShapeCatalog>()
        .to_factory_of::<dyn ShapeFactory, _, _>(
            |context: &Context<'_>| {
                Ok(Arc::new(StandardInstanceProvider::from_config(
                    context.kernel().factory_config(),
                )) as Arc<dyn InstanceProvider>)
            },
            |factory| Arc::new(ShapeCatalog { factory }),
        );

    let catalog = kernel.get::<ShapeCatalog>().ok().expect("catalog should resolve");
    assert_eq!(catalog.factory.get_square(2).unwrap().size(), 2);
}

#[test]
fn test_adapter_for_trait_named_by_path() {
    let kernel = Kernel::new();
    bind_named_shapes(&kernel);
    kernel
        .bind::<String>()
        .to_method(|context| Ok(Arc::new(context.argument::<String>("text")?.to_uppercase())))
        .named("Label");
    kernel.bind::<dyn tools::ToolFactory>().to_factory();

    let tools = kernel
        .get::<dyn tools::ToolFactory>()
        .ok()
        .expect("path-named factory should resolve");
    assert_eq!(tools.get_circle(6).unwrap().size(), 6);
    assert_eq!(tools.get_label("owned".to_string()).unwrap().as_str(), "OWNED");
}

#[test]
fn test_collection_method_resolves_every_shape() {
    let mut config = AppConfig::default();
    config.factory.fallback_to_unnamed = true;
    let kernel = Kernel::with_config(&config);
    kernel
        .bind::<dyn Shape>()
        .to_method(|_| Ok(Arc::new(Circle { radius: 1 })));
    kernel
        .bind::<dyn Shape>()
        .to_method(|_| Ok(Arc::new(Circle { radius: 2 })));
    kernel.bind::<dyn ShapeFactory>().to_factory();

    let sizes: Vec<_> = factory(&kernel)
        .get_shapes()
        .unwrap()
        .iter()
        .map(|shape| shape.size())
        .collect();
    assert_eq!(sizes, vec![1, 2]);
}

#[test]
fn test_method_without_get_prefix_resolves_unnamed() {
    let kernel = Kernel::new();
    kernel
        .bind::<dyn Shape>()
        .to_method(|_| Ok(Arc::new(Circle { radius: 11 })));
    kernel.bind::<dyn ShapeFactory>().to_factory();

    assert_eq!(factory(&kernel).create_any().unwrap().size(), 11);
}

#[test]
fn test_factory_calls_fail_after_kernel_dropped() {
    let kernel = Kernel::new();
    bind_named_shapes(&kernel);
    kernel.bind::<dyn ShapeFactory>().to_factory();
    let factory = factory(&kernel);
    drop(kernel);

    let err = factory.get_circle(1).unwrap_err();
    assert!(
        matches!(&err, Error::Activation { message } if message.contains("has been dropped")),
        "{err}"
    );
}

#[test]
fn test_provider_factory_errors_propagate_unchanged() {
    let kernel = Kernel::new();
    kernel
        .bind::<dyn ShapeFactory>()
        .to_factory_with(|_: &Context<'_>| Err(Error::internal("provider unavailable")));

    let err = kernel.get::<dyn ShapeFactory>().err().expect("activation should fail");
    assert!(
        matches!(&err, Error::Internal { message } if message == "provider unavailable"),
        "{err}"
    );
}

#[test]
fn test_interceptor_requires_proxy_target_marker() {
    let kernel = Kernel::new();
    kernel.bind::<dyn ShapeFactory>().to_method(|context| {
        let interceptor = FactoryInterceptor::from_context(context)?;
        Ok(<dyn ShapeFactory as FactoryInterface>::create_proxy(interceptor))
    });

    let err = kernel.get::<dyn ShapeFactory>().err().expect("activation should fail");
    assert!(err.to_string().contains("is not a factory proxy target"), "{err}");
}

#[test]
fn test_adapter_built_from_interceptor() {
    let kernel = Kernel::new();
    let provider = Arc::new(FixedShapeProvider::new(4));
    let interceptor = FactoryInterceptor::new(kernel.downgrade(), provider.clone(), "ShapeFactory");
    let factory = <dyn ShapeFactory as FactoryInterface>::create_proxy(interceptor.clone());

    assert_eq!(factory.get_circle(1).unwrap().size(), 4);
    assert_eq!(interceptor.target(), "ShapeFactory");
    assert_eq!(provider.calls(), 1);

    let expected: Arc<dyn InstanceProvider> = provider;
    assert!(Arc::ptr_eq(interceptor.instance_provider(), &expected));
}

#[test]
fn test_generated_adapter_carries_marker() {
    fn assert_factory_proxy<P: FactoryProxy>() {}
    assert_factory_proxy::<ShapeFactoryProxy>();
}
