//! Display names of exposed fields.
//!
//! A [`FieldRenameTable`] is the exact set of exposed fields of one record
//! type, each paired with the name an encoder must emit for it.
//!
//! Tables are created once per type and live for the rest of the program.
//! Every reduction of that type refers to the same table, so two
//! reductions of one type can be compared with [`core::ptr::eq`] on their
//! [`Reduced::renames`](crate::Reduced::renames).

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::info::FieldId;

// -----------------------------------------------------------------------------
// RenameEntry

/// One exposed field and its display name.
///
/// Entries own nothing, so arrays of them can be promoted into `static`
/// tables.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RenameEntry {
    field: FieldId,
    display: &'static str,
}

impl RenameEntry {
    /// Creates an entry with a static display name.
    #[inline]
    pub const fn new(field: FieldId, display: &'static str) -> Self {
        Self { field, display }
    }

    /// Creates an entry with a computed display name.
    ///
    /// The name is leaked. Call this once per table, when the table itself
    /// is built to live for the rest of the program.
    #[inline]
    pub fn owned(field: FieldId, display: impl Into<String>) -> Self {
        Self {
            field,
            display: display.into().leak(),
        }
    }

    /// Returns the field identifier.
    #[inline]
    pub fn field(&self) -> FieldId {
        self.field
    }

    /// Returns the display name.
    #[inline]
    pub const fn display(&self) -> &'static str {
        self.display
    }
}

impl fmt::Debug for RenameEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {:?}", self.field, self.display)
    }
}

// -----------------------------------------------------------------------------
// FieldRenameTable

/// Ordered mapping from exposed field identifiers to display names.
///
/// The keys are exactly the exposed fields of the type, in declaration
/// order. Display names are unique within a table.
///
/// # Examples
///
/// ```
/// use fv_expose::rename::{FieldRenameTable, RenameEntry};
///
/// static TABLE: FieldRenameTable = FieldRenameTable::from_static(&[
///     RenameEntry::new("pos_x", "posX"),
///     RenameEntry::new("pos_y", "posY"),
/// ]);
///
/// assert_eq!(TABLE.len(), 2);
/// assert_eq!(TABLE.display("pos_x"), Some("posX"));
/// assert_eq!(TABLE.display("pos_z"), None);
/// assert_eq!(TABLE.keys().collect::<Vec<_>>(), ["pos_x", "pos_y"]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct FieldRenameTable {
    entries: Cow<'static, [RenameEntry]>,
}

impl FieldRenameTable {
    /// An empty table: a type exposing no field.
    pub const EMPTY: Self = Self::from_static(&[]);

    /// Creates a table from entries computed at compile time.
    #[inline]
    pub const fn from_static(entries: &'static [RenameEntry]) -> Self {
        Self {
            entries: Cow::Borrowed(entries),
        }
    }

    /// Creates a table from entries computed at runtime.
    ///
    /// The caller guarantees declaration order and unique display names;
    /// [`derive_rename_table`](crate::derivation::derive_rename_table)
    /// is the checked way to build one.
    #[inline]
    pub fn from_entries(entries: Vec<RenameEntry>) -> Self {
        Self {
            entries: Cow::Owned(entries),
        }
    }

    /// Returns the number of exposed fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the type exposes no field.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the display name of `field`, if it is exposed.
    pub fn display(&self, field: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.field == field)
            .map(RenameEntry::display)
    }

    /// Returns `true` if `field` is exposed.
    pub fn contains(&self, field: &str) -> bool {
        self.entries.iter().any(|entry| entry.field == field)
    }

    /// Iterates over the exposed field identifiers in order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = FieldId> + '_ {
        self.entries.iter().map(RenameEntry::field)
    }

    /// Returns all entries in order.
    #[inline]
    pub fn entries(&self) -> &[RenameEntry] {
        &self.entries
    }

    /// Iterates over `(field, display)` pairs in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (FieldId, &'static str)> + '_ {
        self.entries.iter().map(|entry| (entry.field, entry.display()))
    }
}

impl Default for FieldRenameTable {
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Debug for FieldRenameTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}
