use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ExposeStruct;

/// Generate implementation code for `Expose` trait.
///
/// Field selection and case conversion run here, while compiling; the
/// generated table is a `static` of display-name literals.
pub(crate) fn impl_trait_expose(data: &ExposeStruct) -> syn::Result<TokenStream> {
    let fv_expose_path = data.fv_expose_path();
    let expose_ = crate::path::expose_(fv_expose_path);
    let rename_table_ = crate::path::rename_table_(fv_expose_path);
    let rename_entry_ = crate::path::rename_entry_(fv_expose_path);

    let entries = data.exposed_fields()?.into_iter().map(|(field, display)| {
        let name = &field.name;
        quote!(#rename_entry_::new(#name, #display))
    });

    let ident = data.ident();
    let generics = super::bounded_generics(data);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #expose_ for #ident #ty_generics #where_clause {
            fn rename_table() -> &'static #rename_table_ {
                static TABLE: #rename_table_ = #rename_table_::from_static(&[ #(#entries),* ]);
                &TABLE
            }
        }
    })
}
