//! Items referenced by the code `fv_expose_derive` generates.
//!
//! Not part of the public API.

crate::cfg::auto_register! {
    pub mod auto_register {
        use crate::Expose;
        use crate::registry::TypeRegistry;

        pub use inventory;

        /// A registration function submitted through `inventory`.
        pub struct __AutoRegisterFunc(pub fn(&mut TypeRegistry));

        inventory::collect!(__AutoRegisterFunc);

        pub trait __RegisterType {
            fn __register(registry: &mut TypeRegistry);
        }

        impl<T: Expose> __RegisterType for T {
            fn __register(registry: &mut TypeRegistry) {
                if let Err(err) = registry.register::<T>() {
                    log::error!("automatic registration failed: {err}");
                }
            }
        }

        /// Submitted by this crate; running it proves the platform collects
        /// submissions.
        pub struct __AvailFlag;

        impl __AvailFlag {
            fn __register(registry: &mut TypeRegistry) {
                registry.mark_auto_registered();
            }
        }

        inventory::submit! {
            __AutoRegisterFunc(__AvailFlag::__register)
        }

        pub fn __register_types(registry: &mut TypeRegistry) {
            for func in inventory::iter::<__AutoRegisterFunc> {
                (func.0)(registry);
            }
        }
    }
}
