use alloc::string::String;

use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// Errors raised when a type's exposure is declared, derived or registered.
///
/// All of them are configuration errors, raised before any value is
/// encoded. Dispatching a value never fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExposeError {
    /// Both an `only` and an `except` list were declared.
    #[error("`{type_path}` declares both `only` and `except` field lists")]
    InvalidPolicy { type_path: &'static str },
    /// A listed identifier names no data field of the record.
    #[error("`{type_path}` has no data field named `{field}`")]
    UnknownField {
        type_path: &'static str,
        field: String,
    },
    /// Two exposed fields map to the same display name.
    #[error("`{type_path}` exposes more than one field as `{display}`")]
    DuplicateDisplayName {
        type_path: &'static str,
        display: String,
    },
    /// The global registry was already initialized.
    #[error("the global type registry is already initialized")]
    GlobalAlreadyInitialized,
}
