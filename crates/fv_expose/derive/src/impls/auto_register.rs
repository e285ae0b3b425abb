use crate::derive_data::ExposeStruct;

/// Generate `auto_register` implementation
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(data: &ExposeStruct) -> proc_macro2::TokenStream {
    use quote::quote_spanned;

    if let Some(span) = data.attrs().auto_register {
        // Invalid for generic types.
        if data.is_generic() {
            return crate::utils::empty();
        }

        let auto_register_ = crate::path::auto_register_(data.fv_expose_path());
        let ident = data.ident();

        quote_spanned! { span =>
            #auto_register_::inventory::submit!{
                #auto_register_::__AutoRegisterFunc(
                    <#ident as #auto_register_::__RegisterType>::__register
                )
            }
        }
    } else {
        crate::utils::empty()
    }
}

/// Generate `auto_register` implementation
#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &ExposeStruct) -> proc_macro2::TokenStream {
    crate::utils::empty()
}
