use fv_macro_utils::full_path::{ConcatFP, ModulePathFP, NoneFP, OptionFP, SomeFP};
use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ExposeStruct;

/// Generate implementation code for `Record` trait.
///
/// The `RecordInfo` is a `static` inside `record_info`, so every call
/// returns the same descriptor.
pub(crate) fn impl_trait_record(data: &ExposeStruct) -> TokenStream {
    let fv_expose_path = data.fv_expose_path();
    let record_ = crate::path::record_(fv_expose_path);
    let record_info_ = crate::path::record_info_(fv_expose_path);
    let field_info_ = crate::path::field_info_(fv_expose_path);
    let value_ = crate::path::value_(fv_expose_path);

    let ident = data.ident();
    let type_name = ident.to_string();

    let field_infos = data.fields().iter().map(|field| {
        let name = &field.name;
        if field.is_tag() {
            quote!(#field_info_::tag(#name))
        } else {
            quote!(#field_info_::new(#name))
        }
    });

    let field_arms = data.data_fields().map(|field| {
        let name = &field.name;
        let member = field.ident;
        quote! {
            #name => #SomeFP(&self.#member),
        }
    });

    let generics = super::bounded_generics(data);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #record_ for #ident #ty_generics #where_clause {
            fn record_info() -> &'static #record_info_ {
                static INFO: #record_info_ = #record_info_::new(
                    #ConcatFP!(#ModulePathFP!(), "::", #type_name),
                    &[ #(#field_infos),* ],
                );
                &INFO
            }

            fn field(&self, name: &str) -> #OptionFP<&dyn #value_> {
                match name {
                    #(#field_arms)*
                    _ => #NoneFP,
                }
            }
        }
    }
}
