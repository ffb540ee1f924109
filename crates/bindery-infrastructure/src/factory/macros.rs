//! Adapter generation for factory interfaces

/// Generate the dispatch adapter of a factory trait
///
/// Each listed method forwards its name and arguments to the adapter's
/// [`FactoryInterceptor`](crate::factory::FactoryInterceptor). A method
/// declared `-> T` returns `Result<Arc<T>>`; a method declared `-> [T]`
/// returns `Result<Vec<Arc<T>>>` and resolves every matching binding.
///
/// The trait must be object safe and have `Send + Sync` as supertraits. It
/// may be named by path, e.g. `for dyn shapes::ShapeFactory`.
///
/// Arguments are captured as [`FactoryArgument`](bindery_domain::value_objects::FactoryArgument)
/// values and handed to the component as constructor arguments, so every
/// argument type must be `Any + Send + Sync` and therefore `'static`. Pass
/// owned values (`String`, `Arc<T>`) instead of borrows.
///
/// # Example
///
/// ```ignore
/// pub trait ShapeFactory: Send + Sync {
///     fn get_circle(&self, radius: u32) -> Result<Arc<dyn Shape>>;
///     fn get_shapes(&self) -> Result<Vec<Arc<dyn Shape>>>;
/// }
///
/// factory_interface! {
///     pub struct ShapeFactoryProxy for dyn ShapeFactory {
///         fn get_circle(radius: u32) -> dyn Shape;
///         fn get_shapes() -> [dyn Shape];
///     }
/// }
/// ```
#[macro_export]
macro_rules! factory_interface {
    (@methods $iface:path;) => {};

    (@methods $iface:path;
        fn $method:ident($($arg:ident : $arg_ty:ty),* $(,)?) -> [$ret:ty];
        $($rest:tt)*
    ) => {
        fn $method(
            &self,
            $($arg: $arg_ty),*
        ) -> $crate::__private::Result<::std::vec::Vec<$crate::__private::Arc<$ret>>> {
            $crate::factory::FactoryProxy::interceptor(self).invoke_all::<$ret>(
                $crate::__private::CallDescriptor::for_method::<dyn $iface>(
                    ::std::stringify!($method),
                ),
                ::std::vec![$($crate::__private::FactoryArgument::new(::std::stringify!($arg), $arg)),*],
            )
        }

        $crate::factory_interface!(@methods $iface; $($rest)*);
    };

    (@methods $iface:path;
        fn $method:ident($($arg:ident : $arg_ty:ty),* $(,)?) -> $ret:ty;
        $($rest:tt)*
    ) => {
        fn $method(
            &self,
            $($arg: $arg_ty),*
        ) -> $crate::__private::Result<$crate::__private::Arc<$ret>> {
            $crate::factory::FactoryProxy::interceptor(self).invoke::<$ret>(
                $crate::__private::CallDescriptor::for_method::<dyn $iface>(
                    ::std::stringify!($method),
                ),
                ::std::vec![$($crate::__private::FactoryArgument::new(::std::stringify!($arg), $arg)),*],
            )
        }

        $crate::factory_interface!(@methods $iface; $($rest)*);
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $proxy:ident for dyn $iface:path {
            $($body:tt)*
        }
    ) => {
        $(#[$meta])*
        $vis struct $proxy {
            interceptor: $crate::factory::FactoryInterceptor,
        }

        impl $crate::factory::FactoryProxy for $proxy {
            fn interceptor(&self) -> &$crate::factory::FactoryInterceptor {
                &self.interceptor
            }
        }

        impl $crate::factory::FactoryInterface for dyn $iface {
            fn create_proxy(
                interceptor: $crate::factory::FactoryInterceptor,
            ) -> $crate::__private::Arc<Self> {
                $crate::__private::Arc::new($proxy { interceptor })
            }
        }

        impl $iface for $proxy {
            $crate::factory_interface!(@methods $iface; $($body)*);
        }
    };
}
