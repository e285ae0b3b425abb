//! See following macros:
//!
//! - [`Record`]
//! - [`Expose`]
//! - [`impl_auto_register`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

static EXPOSE_ATTRIBUTE_NAME: &str = "expose";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

use derive_data::{DeriveKind, ExposeStruct};

// -----------------------------------------------------------------------------
// Macros

/// # Record Derivation
///
/// `#[derive(Record)]` implements `Record` for a struct with named fields:
/// a `static` `RecordInfo` listing the fields in declaration order, and
/// by-name access to every data field.
///
/// Every data field type must implement `serde::Serialize` and be `'static`.
///
/// ```rust, ignore
/// #[derive(serde::Serialize, Record)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
/// ```
///
/// The type path stored in the descriptor is `module_path!()` followed by
/// the type name, without generic arguments.
///
/// ## Tag
///
/// A record may carry one structural marker field. It is listed in the
/// `RecordInfo` but is never a data field. A field named `__tag__` is the
/// marker automatically; any other field can be marked with `tag`:
///
/// ```rust, ignore
/// #[derive(serde::Serialize, Record)]
/// struct Event {
///     #[expose(tag)]
///     kind: (),
///     at: u64,
/// }
/// ```
///
/// Selection options (`only`, `except`, `rename_all`, `rename`,
/// `auto_register`) belong to [`derive Expose`](derive_expose); with
/// `#[derive(Record)]` alone they are errors. Use `TypeRegistry::register_with`
/// to choose a policy at registration time instead.
///
/// Enums, unions and tuple structs are rejected. Unit structs are records
/// without fields.
#[proc_macro_derive(Record, attributes(expose))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let data = match ExposeStruct::from_derive_input(&ast, DeriveKind::Record) {
        Ok(data) => data,
        Err(err) => return err.into_compile_error().into(),
    };

    let record_impls = impls::impl_trait_record(&data);

    quote! {
        const _: () = {
            #record_impls
        };
    }
    .into()
}

/// # Expose Derivation
///
/// `#[derive(Expose)]` implements `Record` and `Expose`. The exposed fields
/// and their display names are computed while compiling and stored in a
/// `static` `FieldRenameTable`; nothing is converted at runtime.
///
/// ```rust, ignore
/// #[derive(serde::Serialize, Expose)]
/// #[expose(except(password), rename_all = "camelCase")]
/// struct Account {
///     user_name: String,
///     password: String,
///     #[expose(rename = "mail")]
///     email_address: String,
/// }
/// // exposes `user_name` as "userName" and `email_address` as "mail"
/// ```
///
/// ## Type attributes
///
/// - `only(a, b, ...)`: expose exactly the listed fields.
/// - `except(a, b, ...)`: expose every data field except the listed ones.
/// - `rename_all = "..."`: display-name convention, one of `preserve`,
///   `lowercase`, `UPPERCASE`, `camelCase`, `PascalCase`, `snake_case`,
///   `SCREAMING_SNAKE_CASE`, `kebab-case`. Defaults to `preserve`.
/// - `auto_register`: submit the type for `TypeRegistry::auto_register`.
///   Ignored for generic types.
///
/// Without `only` or `except`, every data field is exposed.
///
/// ## Field attributes
///
/// - `rename = "..."`: display name of this field, overriding `rename_all`.
/// - `tag`: mark the structural marker field; see [`derive Record`](derive_record).
///
/// ## Errors
///
/// The following are compile errors:
///
/// - `only` together with `except`;
/// - a listed name that is not a data field (naming the tag in `except` is
///   allowed);
/// - two exposed fields with the same display name;
/// - an input that is not a struct with named fields.
#[proc_macro_derive(Expose, attributes(expose))]
pub fn derive_expose(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let data = match ExposeStruct::from_derive_input(&ast, DeriveKind::Expose) {
        Ok(data) => data,
        Err(err) => return err.into_compile_error().into(),
    };

    let expose_impls = match impls::impl_trait_expose(&data) {
        Ok(tokens) => tokens,
        Err(err) => return err.into_compile_error().into(),
    };
    let record_impls = impls::impl_trait_record(&data);
    let auto_register_impls = impls::get_auto_register_impl(&data);

    quote! {
        const _: () = {
            #record_impls
            #expose_impls
            #auto_register_impls
        };
    }
    .into()
}

/// Add the type to the automatic registry.
///
/// If the feature is not enabled, this macro will not do anything.
///
/// The type must implement `Expose` and be concrete (no uncertain generic
/// parameters).
///
/// ## Example
///
/// ```ignore
/// impl_auto_register!(foo::Foo);
/// impl_auto_register!(Wrapper<u32>); // Ok
/// impl_auto_register!(Wrapper<T>); // Error
/// ```
///
/// This is not conflict with `expose(auto_register)` attribute.
///
/// See: [`derive Expose`](derive_expose)
#[proc_macro]
pub fn impl_auto_register(_input: TokenStream) -> TokenStream {
    #[cfg(not(feature = "auto_register"))]
    return utils::empty().into();

    #[cfg(feature = "auto_register")]
    {
        let type_path = parse_macro_input!(_input as syn::Type);

        let fv_expose_path = path::fv_expose();
        let auto_register_ = path::auto_register_(&fv_expose_path);

        TokenStream::from(quote! {
            const _: () = {
                #auto_register_::inventory::submit!{
                    #auto_register_::__AutoRegisterFunc(
                        <#type_path as #auto_register_::__RegisterType>::__register
                    )
                }
            };
        })
    }
}
