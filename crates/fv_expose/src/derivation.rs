//! Rename tables derived at registration time.
//!
//! `#[derive(Expose)]` computes its table while compiling. This module
//! performs the same derivation at runtime, for record types whose policy
//! or case convention is only known when the registry is built.
//!
//! The derivation runs once per registration. Its result is handed to the
//! registry, which keeps it for the rest of the program; see
//! [`Exposure::derive`](crate::registry::Exposure::derive).

use alloc::string::String;
use alloc::vec::Vec;

use crate::ExposeError;
use crate::case::CaseConverter;
use crate::info::{FieldId, RecordInfo};
use crate::rename::{FieldRenameTable, RenameEntry};
use crate::select::{SelectionPolicy, select};

/// Derives the rename table of a record type.
///
/// 1. The exposed fields are selected with [`select`].
/// 2. Each exposed field, in declaration order, gets the display name
///    `converter(field)`.
///
/// Fails with the selection errors, or with
/// [`ExposeError::DuplicateDisplayName`] if two exposed fields convert to
/// the same display name.
///
/// Display names of a successful derivation are leaked, like the table
/// they end up in. Derive once per type.
///
/// # Examples
///
/// ```
/// use fv_expose::case::Case;
/// use fv_expose::derivation::derive_rename_table;
/// use fv_expose::info::{FieldInfo, RecordInfo};
/// use fv_expose::select::SelectionPolicy;
///
/// static INFO: RecordInfo = RecordInfo::new(
///     "demo::Cursor",
///     &[FieldInfo::new("pos_x"), FieldInfo::new("pos_y"), FieldInfo::new("blink")],
/// );
///
/// let table = derive_rename_table(&INFO, &SelectionPolicy::except(["blink"]), &Case::Camel).unwrap();
/// assert_eq!(table.iter().collect::<Vec<_>>(), [("pos_x", "posX"), ("pos_y", "posY")]);
/// ```
pub fn derive_rename_table(
    info: &RecordInfo,
    policy: &SelectionPolicy,
    converter: &dyn CaseConverter,
) -> Result<FieldRenameTable, ExposeError> {
    let selected = select(info, policy)?;

    let mut names: Vec<(FieldId, String)> = Vec::with_capacity(selected.len());
    for field in selected {
        let display = converter.convert_case(field);
        if names.iter().any(|(_, prev)| *prev == display) {
            return Err(ExposeError::DuplicateDisplayName {
                type_path: info.type_path(),
                display,
            });
        }
        names.push((field, display));
    }

    let entries = names
        .into_iter()
        .map(|(field, display)| RenameEntry::owned(field, display))
        .collect();
    Ok(FieldRenameTable::from_entries(entries))
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::derive_rename_table;
    use crate::ExposeError;
    use crate::case::Case;
    use crate::info::{FieldInfo, RecordInfo, TYPE_TAG};
    use crate::select::SelectionPolicy;

    static POINT: RecordInfo = RecordInfo::new(
        "fv_expose::derivation::tests::Point",
        &[
            FieldInfo::new("x"),
            FieldInfo::new("y"),
            FieldInfo::tag(TYPE_TAG),
        ],
    );

    static WIDGET: RecordInfo = RecordInfo::new(
        "fv_expose::derivation::tests::Widget",
        &[
            FieldInfo::new("pos_x"),
            FieldInfo::new("posX"),
            FieldInfo::new("label"),
        ],
    );

    fn pairs(info: &RecordInfo, policy: SelectionPolicy, case: Case) -> Vec<(&'static str, String)> {
        derive_rename_table(info, &policy, &case)
            .unwrap()
            .iter()
            .map(|(field, display)| (field, String::from(display)))
            .collect()
    }

    #[test]
    fn identity_converter() {
        assert_eq!(
            pairs(&POINT, SelectionPolicy::All, Case::Preserve),
            [("x", String::from("x")), ("y", String::from("y"))]
        );
        assert_eq!(
            pairs(&POINT, SelectionPolicy::except(["y"]), Case::Preserve),
            [("x", String::from("x"))]
        );
    }

    #[test]
    fn table_keys_are_the_selection() {
        let policy = SelectionPolicy::only(["label", "pos_x"]);
        let table = derive_rename_table(&WIDGET, &policy, &Case::ScreamingSnake).unwrap();
        assert_eq!(table.keys().collect::<Vec<_>>(), ["pos_x", "label"]);
        assert_eq!(table.display("label"), Some("LABEL"));
        assert_eq!(table.display("posX"), None);
    }

    #[test]
    fn duplicate_display_name() {
        let err = derive_rename_table(&WIDGET, &SelectionPolicy::All, &Case::Camel).unwrap_err();
        assert_eq!(
            err,
            ExposeError::DuplicateDisplayName {
                type_path: "fv_expose::derivation::tests::Widget",
                display: "posX".into(),
            }
        );

        // Excluding one side of the collision resolves it.
        let policy = SelectionPolicy::except(["posX"]);
        assert!(derive_rename_table(&WIDGET, &policy, &Case::Camel).is_ok());
    }

    #[test]
    fn selection_errors_propagate() {
        let err = derive_rename_table(&POINT, &SelectionPolicy::only(["z"]), &Case::Camel).unwrap_err();
        assert!(matches!(err, ExposeError::UnknownField { .. }));
    }

    #[test]
    fn custom_converter() {
        let upper = |ident: &str| ident.to_uppercase();
        let table = derive_rename_table(&POINT, &SelectionPolicy::All, &upper).unwrap();
        assert_eq!(table.display("x"), Some("X"));
    }
}
