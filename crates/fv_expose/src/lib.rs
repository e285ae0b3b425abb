#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Compilation config

/// Some macros used for compilation control.
pub mod cfg {
    fv_cfg::define_alias! {
        #[cfg(feature = "std")] => std,
        #[cfg(feature = "auto_register")] => auto_register,
        #[cfg(all(debug_assertions, feature = "debug"))] => debug,
    }
}

// -----------------------------------------------------------------------------
// Extern Self

// Derived code names this crate `::fv_expose`, both inside the crate and in
// its doctests.
extern crate self as fv_expose;

// -----------------------------------------------------------------------------
// no_std support

crate::cfg::std! {
    extern crate std;
}

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod expose;
mod exposed;
mod value;

pub mod case;
pub mod derivation;
pub mod info;
pub mod registry;
pub mod rename;
pub mod select;

#[cfg(test)]
mod tests;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use error::ExposeError;
pub use expose::Expose;
pub use exposed::{Exposed, FieldMap, Reduced};
pub use fv_expose_derive as derive;
pub use value::Value;

crate::cfg::std! {
    pub use registry::expose;
}
