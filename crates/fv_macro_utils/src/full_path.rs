//! Fully qualified paths of `core` items.
//!
//! Generated code must not depend on what the invoking crate has in scope,
//! so every `core` item is emitted through its absolute path.
//!
//! ```
//! use fv_macro_utils::full_path::OptionFP;
//! use quote::quote;
//!
//! let tokens = quote!(#OptionFP<u8>);
//! let text = tokens.to_string();
//! assert!(text.starts_with(":: core"));
//! assert!(text.contains("Option"));
//! ```

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_full_path {
    ($($(#[$meta:meta])* $name:ident => { $($path:tt)+ })*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy)]
            pub struct $name;

            impl ToTokens for $name {
                #[inline]
                fn to_tokens(&self, tokens: &mut TokenStream) {
                    tokens.extend(quote!($($path)+));
                }
            }
        )*
    };
}

define_full_path! {
    /// `::core::option::Option`
    OptionFP => { ::core::option::Option }
    /// `::core::option::Option::Some`
    SomeFP => { ::core::option::Option::Some }
    /// `::core::option::Option::None`
    NoneFP => { ::core::option::Option::None }
    /// `::core::concat`
    ConcatFP => { ::core::concat }
    /// `::core::module_path`
    ModulePathFP => { ::core::module_path }
}
