use fv_utils::case::Case;
use fv_utils::select::{FieldName, NameFilter, select};
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Generics, Ident, LitStr, Type};

use super::{FieldAttributes, TypeAttributes};

/// The field name that always marks the structural tag.
const TYPE_TAG: &str = "__tag__";

/// Which derive macro is being expanded.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum DeriveKind {
    /// `#[derive(Record)]`
    Record,
    /// `#[derive(Expose)]`
    Expose,
}

// -----------------------------------------------------------------------------
// StructField

/// A named field of the input struct.
pub(crate) struct StructField<'a> {
    /// The field identifier as written, possibly raw.
    pub ident: &'a Ident,
    /// The field name without `r#`.
    pub name: String,
    pub ty: &'a Type,
    pub attrs: FieldAttributes,
}

impl StructField<'_> {
    #[inline]
    pub fn is_tag(&self) -> bool {
        self.attrs.tag.is_some() || self.name == TYPE_TAG
    }
}

impl FieldName for StructField<'_> {
    #[inline]
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn is_tag(&self) -> bool {
        StructField::is_tag(self)
    }
}

// -----------------------------------------------------------------------------
// ExposeStruct

/// The parsed input of `#[derive(Record)]` and `#[derive(Expose)]`.
pub(crate) struct ExposeStruct<'a> {
    fv_expose_path: syn::Path,
    ident: &'a Ident,
    generics: &'a Generics,
    attrs: TypeAttributes,
    fields: Vec<StructField<'a>>,
}

impl<'a> ExposeStruct<'a> {
    pub fn from_derive_input(ast: &'a DeriveInput, kind: DeriveKind) -> syn::Result<Self> {
        let fields = match &ast.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named
                    .named
                    .iter()
                    .map(|field| {
                        let Some(ident) = field.ident.as_ref() else {
                            return Err(syn::Error::new(field.span(), "expected a named field"));
                        };
                        Ok(StructField {
                            ident,
                            name: ident.unraw().to_string(),
                            ty: &field.ty,
                            attrs: FieldAttributes::parse_attrs(&field.attrs)?,
                        })
                    })
                    .collect::<syn::Result<Vec<_>>>()?,
                Fields::Unit => Vec::new(),
                Fields::Unnamed(unnamed) => {
                    return Err(syn::Error::new(
                        unnamed.span(),
                        "records must be structs with named fields",
                    ));
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "records must be structs with named fields, found an enum",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "records must be structs with named fields, found a union",
                ));
            }
        };

        let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;

        if kind == DeriveKind::Record
            && let Some(span) = attrs.selection_span()
        {
            return Err(syn::Error::new(span, "this option requires `#[derive(Expose)]`"));
        }

        let mut tags = fields.iter().filter(|field| field.is_tag());
        if tags.next().is_some()
            && let Some(extra) = tags.next()
        {
            return Err(syn::Error::new(
                extra.ident.span(),
                "a record can have at most one tag field",
            ));
        }

        if kind == DeriveKind::Record
            && let Some(lit) = fields.iter().find_map(|field| field.attrs.rename.as_ref())
        {
            return Err(syn::Error::new(lit.span(), "`rename` requires `#[derive(Expose)]`"));
        }

        Ok(Self {
            fv_expose_path: crate::path::fv_expose(),
            ident: &ast.ident,
            generics: &ast.generics,
            attrs,
            fields,
        })
    }

    #[inline]
    pub fn fv_expose_path(&self) -> &syn::Path {
        &self.fv_expose_path
    }

    #[inline]
    pub fn ident(&self) -> &'a Ident {
        self.ident
    }

    #[inline]
    pub fn generics(&self) -> &'a Generics {
        self.generics
    }

    #[inline]
    #[cfg_attr(not(feature = "auto_register"), allow(dead_code))]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }

    /// Iterates over the data fields, the tag excluded.
    pub fn data_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| !field.is_tag())
    }

    #[inline]
    pub fn is_generic(&self) -> bool {
        !self.generics.params.is_empty()
    }

    /// Selects the exposed fields and computes their display names.
    ///
    /// Selection is shared with the runtime derivation; on top of it every
    /// display name must be unique.
    pub fn exposed_fields(&self) -> syn::Result<Vec<(&StructField<'a>, String)>> {
        let filter = match (&self.attrs.only, &self.attrs.except) {
            (Some(only), _) => NameFilter::Only(only.names.as_slice()),
            (None, Some(except)) => NameFilter::Except(except.names.as_slice()),
            (None, None) => NameFilter::All,
        };

        let selected = select(&self.fields, filter).map_err(|unknown| {
            syn::Error::new(
                unknown.ident.span(),
                format!("`{}` has no data field named `{}`", self.ident, unknown.name),
            )
        })?;

        let case = self.attrs.rename_all.map_or(Case::Preserve, |(_, case)| case);

        let mut exposed: Vec<(&StructField<'a>, String)> = Vec::with_capacity(selected.len());
        for field in selected {
            let display = match &field.attrs.rename {
                Some(lit) => lit.value(),
                None => case.convert(&field.name),
            };
            if exposed.iter().any(|(_, prev)| *prev == display) {
                let span = field
                    .attrs
                    .rename
                    .as_ref()
                    .map_or_else(|| field.ident.span(), LitStr::span);
                return Err(syn::Error::new(
                    span,
                    format!("display name `{display}` is used by more than one field"),
                ));
            }
            exposed.push((field, display));
        }
        Ok(exposed)
    }
}
