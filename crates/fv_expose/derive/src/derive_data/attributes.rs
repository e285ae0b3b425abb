use fv_utils::case::Case;
use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::meta::ParseNestedMeta;
use syn::punctuated::Punctuated;
use syn::{Attribute, Ident, LitStr, Token, parenthesized};

use crate::EXPOSE_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// Type Attributes

/// A list of field names, e.g. `only(a, b)`.
#[derive(Debug)]
pub(crate) struct FieldList {
    pub span: Span,
    pub names: Vec<ListedName>,
}

/// A name inside a [`FieldList`], with `r#` stripped.
#[derive(Debug)]
pub(crate) struct ListedName {
    pub ident: Ident,
    pub name: String,
}

impl AsRef<str> for ListedName {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.name
    }
}

/// Options of `#[expose(...)]` on the type.
#[derive(Debug, Default)]
pub(crate) struct TypeAttributes {
    pub only: Option<FieldList>,
    pub except: Option<FieldList>,
    pub rename_all: Option<(Span, Case)>,
    pub auto_register: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if attr.path().is_ident(EXPOSE_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
            }
        }
        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        let span = meta.path.get_ident().map_or_else(Span::call_site, Ident::span);

        if meta.path.is_ident("only") {
            check_unset(&meta, self.only.is_some())?;
            if self.except.is_some() {
                return Err(meta.error("`only` and `except` cannot be used together"));
            }
            self.only = Some(parse_field_list(&meta, span)?);
        } else if meta.path.is_ident("except") {
            check_unset(&meta, self.except.is_some())?;
            if self.only.is_some() {
                return Err(meta.error("`only` and `except` cannot be used together"));
            }
            self.except = Some(parse_field_list(&meta, span)?);
        } else if meta.path.is_ident("rename_all") {
            check_unset(&meta, self.rename_all.is_some())?;
            let lit: LitStr = meta.value()?.parse()?;
            let Some(case) = Case::parse(&lit.value()) else {
                let expected = Case::ALL.map(Case::as_str).join("`, `");
                return Err(syn::Error::new(
                    lit.span(),
                    format!("unknown case convention, expected one of `{expected}`"),
                ));
            };
            self.rename_all = Some((span, case));
        } else if meta.path.is_ident("auto_register") {
            check_unset(&meta, self.auto_register.is_some())?;
            self.auto_register = Some(span);
        } else {
            return Err(meta.error(
                "unsupported type attribute, expected `only`, `except`, `rename_all` or `auto_register`",
            ));
        }
        Ok(())
    }

    /// Returns the span of the first option only `#[derive(Expose)]` uses.
    pub fn selection_span(&self) -> Option<Span> {
        self.only
            .as_ref()
            .or(self.except.as_ref())
            .map(|list| list.span)
            .or(self.rename_all.map(|(span, _)| span))
            .or(self.auto_register)
    }
}

fn parse_field_list(meta: &ParseNestedMeta, span: Span) -> syn::Result<FieldList> {
    let content;
    parenthesized!(content in meta.input);
    let names = Punctuated::<Ident, Token![,]>::parse_terminated(&content)?;
    Ok(FieldList {
        span,
        names: names
            .into_iter()
            .map(|ident| ListedName {
                name: ident.unraw().to_string(),
                ident,
            })
            .collect(),
    })
}

fn check_unset(meta: &ParseNestedMeta, is_set: bool) -> syn::Result<()> {
    if is_set {
        Err(meta.error("duplicate attribute"))
    } else {
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Field Attributes

/// Options of `#[expose(...)]` on a field.
#[derive(Debug, Default)]
pub(crate) struct FieldAttributes {
    pub tag: Option<Span>,
    pub rename: Option<LitStr>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if attr.path().is_ident(EXPOSE_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
            }
        }
        if let (Some(span), Some(_)) = (this.tag, &this.rename) {
            return Err(syn::Error::new(span, "the tag field cannot be renamed"));
        }
        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("tag") {
            check_unset(&meta, self.tag.is_some())?;
            self.tag = meta.path.get_ident().map(Ident::span);
        } else if meta.path.is_ident("rename") {
            check_unset(&meta, self.rename.is_some())?;
            self.rename = Some(meta.value()?.parse()?);
        } else {
            return Err(meta.error("unsupported field attribute, expected `tag` or `rename`"));
        }
        Ok(())
    }
}
