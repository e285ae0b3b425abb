//! Type-indexed dispatch of custom serialization behavior.
//!
//! ## Menu
//!
//! - [`Exposure`]: The type-erased entry of one record type, holding its
//!   `'static` rename table.
//! - [`TypeRegistry`]: Maps [`TypeId`](core::any::TypeId) to [`Exposure`] and
//!   dispatches values with [`TypeRegistry::expose`].
//! - [`init_global`], [`global`], [`expose`]: The process-wide registry
//!   (`std` feature).
//!
//! ## Dispatch
//!
//! Resolution has two tiers: the entry of the value's concrete type, else
//! the passthrough fallback. Every `'static` serializable type resolves to
//! one of them, so dispatch never fails. New types join by registering;
//! the registry itself never changes.
//!
//! ## auto_register
//!
//! See [`TypeRegistry::auto_register`] .
//!
//! We use [`inventory`] crate to implement static registration,
//! not all platforms support it (although major platforms do).
//! On other platforms the function returns false and registers nothing.
//!
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod exposure;
mod type_registry;

crate::cfg::std! {
    mod global;
}

// -----------------------------------------------------------------------------
// Exports

pub use exposure::Exposure;
pub use type_registry::TypeRegistry;

crate::cfg::std! {
    pub use global::{expose, global, init_global};
}
