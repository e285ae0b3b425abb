//! Identifier case conversion.
//!
//! Derivation maps every exposed field identifier to a display name
//! through a [`CaseConverter`]. The converter is an external collaborator:
//! anything with the signature `&str -> String` qualifies, and the
//! built-in conventions of [`Case`] are provided.
//!
//! `#[derive(Expose)]` accepts the [`Case`] spellings in its `rename_all`
//! option and converts at compile time with the same rules.

use alloc::string::String;

pub use fv_utils::case::Case;

/// Maps a field identifier to its display name.
///
/// Converters must be deterministic: the same identifier always yields the
/// same display name.
///
/// # Examples
///
/// ```
/// use fv_expose::case::{Case, CaseConverter};
///
/// assert_eq!(Case::Camel.convert_case("pos_x"), "posX");
///
/// let shout = |ident: &str| ident.to_uppercase();
/// assert_eq!(shout.convert_case("pos_x"), "POS_X");
/// ```
pub trait CaseConverter {
    /// Returns the display name for `ident`.
    fn convert_case(&self, ident: &str) -> String;
}

impl CaseConverter for Case {
    #[inline]
    fn convert_case(&self, ident: &str) -> String {
        self.convert(ident)
    }
}

impl<F: Fn(&str) -> String> CaseConverter for F {
    #[inline]
    fn convert_case(&self, ident: &str) -> String {
        self(ident)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::{Case, CaseConverter};

    fn display_names(converter: &dyn CaseConverter) -> [String; 2] {
        [converter.convert_case("pos_x"), converter.convert_case("id")]
    }

    #[test]
    fn conventions() {
        assert_eq!(display_names(&Case::Preserve), ["pos_x", "id"]);
        assert_eq!(display_names(&Case::Camel), ["posX", "id"]);
        assert_eq!(display_names(&Case::Pascal), ["PosX", "Id"]);
        assert_eq!(display_names(&Case::Kebab), ["pos-x", "id"]);
    }

    #[test]
    fn closures() {
        let prefixed = |ident: &str| alloc::format!("f_{ident}");
        assert_eq!(display_names(&prefixed), ["f_pos_x", "f_id"]);
    }
}
