//! This independent module is used to provide the required path.
//! So as to minimize changes when the `fv_expose` structure is modified.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `fv_expose` crate.
///
/// See [`Manifest::expose_path`](fv_macro_utils::Manifest::expose_path).
/// This reads the invoking crate's `Cargo.toml`, so the result is passed
/// around instead of recomputed.
pub(crate) fn fv_expose() -> syn::Path {
    fv_macro_utils::Manifest::shared(fv_macro_utils::Manifest::expose_path)
}

// -----------------------------------------------------------------------------
// Internal API

#[inline]
pub(crate) fn value_(fv_expose_path: &syn::Path) -> TokenStream {
    quote! {
        #fv_expose_path::Value
    }
}

#[inline]
pub(crate) fn expose_(fv_expose_path: &syn::Path) -> TokenStream {
    quote! {
        #fv_expose_path::Expose
    }
}

#[inline]
pub(crate) fn record_(fv_expose_path: &syn::Path) -> TokenStream {
    quote! {
        #fv_expose_path::info::Record
    }
}

#[inline]
pub(crate) fn record_info_(fv_expose_path: &syn::Path) -> TokenStream {
    quote! {
        #fv_expose_path::info::RecordInfo
    }
}

#[inline]
pub(crate) fn field_info_(fv_expose_path: &syn::Path) -> TokenStream {
    quote! {
        #fv_expose_path::info::FieldInfo
    }
}

#[inline]
pub(crate) fn rename_table_(fv_expose_path: &syn::Path) -> TokenStream {
    quote! {
        #fv_expose_path::rename::FieldRenameTable
    }
}

#[inline]
pub(crate) fn rename_entry_(fv_expose_path: &syn::Path) -> TokenStream {
    quote! {
        #fv_expose_path::rename::RenameEntry
    }
}

#[cfg(feature = "auto_register")]
#[inline]
pub(crate) fn auto_register_(fv_expose_path: &syn::Path) -> TokenStream {
    quote! {
        #fv_expose_path::__macro_exports::auto_register
    }
}
