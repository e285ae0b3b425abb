// -----------------------------------------------------------------------------
// Modules

mod auto_register;
mod trait_expose;
mod trait_record;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use auto_register::get_auto_register_impl;
pub(crate) use trait_expose::impl_trait_expose;
pub(crate) use trait_record::impl_trait_record;

use syn::{Generics, parse_quote};

use crate::derive_data::ExposeStruct;

/// Returns the generics of the impl blocks.
///
/// For generic records every data field type must be a `Value`, and so
/// must the record itself.
pub(crate) fn bounded_generics(data: &ExposeStruct) -> Generics {
    let mut generics = data.generics().clone();
    if !data.is_generic() {
        return generics;
    }

    let value_ = crate::path::value_(data.fv_expose_path());
    let ident = data.ident();
    let (_, ty_generics, _) = data.generics().split_for_impl();

    let where_clause = generics.make_where_clause();
    where_clause
        .predicates
        .push(parse_quote!(#ident #ty_generics: #value_));
    for field in data.data_fields() {
        let ty = field.ty;
        where_clause.predicates.push(parse_quote!(#ty: #value_));
    }
    generics
}
