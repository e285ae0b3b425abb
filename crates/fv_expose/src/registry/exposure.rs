use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::case::CaseConverter;
use crate::derivation::derive_rename_table;
use crate::info::{Record, RecordInfo};
use crate::rename::FieldRenameTable;
use crate::select::SelectionPolicy;
use crate::{Expose, ExposeError, Reduced, Value};

/// The registry entry of one record type.
///
/// Stores the type's `'static` rename table and a projection function
/// monomorphized for the concrete type, so a `&dyn Value` can be reduced
/// without knowing its type statically.
///
/// # Examples
///
/// ```
/// use fv_expose::derive::Expose;
/// use fv_expose::registry::Exposure;
///
/// #[derive(serde::Serialize, Expose)]
/// struct Size {
///     width: u32,
///     height: u32,
/// }
///
/// let exposure = Exposure::of::<Size>();
/// let size = Size { width: 4, height: 3 };
///
/// let reduced = exposure.reduce(&size);
/// assert_eq!(reduced.fields().get_as::<u32>("height"), Some(&3));
/// assert!(core::ptr::eq(reduced.renames(), exposure.renames()));
/// ```
#[derive(Clone, Copy)]
pub struct Exposure {
    type_id: TypeId,
    info: &'static RecordInfo,
    renames: &'static FieldRenameTable,
    fun: for<'a> fn(&'a dyn Value, &'static FieldRenameTable) -> Reduced<'a>,
}

impl Exposure {
    /// Creates the entry of a type with an [`Expose`] implementation.
    pub fn of<T: Expose>() -> Self {
        Self::with_table::<T>(T::rename_table())
    }

    /// Derives the entry of a record type from a policy and a converter.
    ///
    /// The rename table is computed here and leaked, so it lives for the
    /// rest of the program. Every call leaks a new table: derive once per
    /// type. [`TypeRegistry::register_with`](super::TypeRegistry::register_with)
    /// skips the derivation when the type is already registered.
    ///
    /// # Examples
    ///
    /// ```
    /// use fv_expose::case::Case;
    /// use fv_expose::derive::Record;
    /// use fv_expose::registry::Exposure;
    /// use fv_expose::select::SelectionPolicy;
    ///
    /// #[derive(serde::Serialize, Record)]
    /// struct Span {
    ///     start_at: u64,
    ///     end_at: u64,
    ///     trace_id: u64,
    /// }
    ///
    /// let exposure = Exposure::derive::<Span>(&SelectionPolicy::only(["start_at"]), &Case::Kebab).unwrap();
    /// assert_eq!(exposure.renames().display("start_at"), Some("start-at"));
    /// assert_eq!(exposure.renames().len(), 1);
    /// ```
    pub fn derive<T: Record>(
        policy: &SelectionPolicy,
        converter: &dyn CaseConverter,
    ) -> Result<Self, ExposeError> {
        let table = derive_rename_table(T::record_info(), policy, converter)?;
        let table: &'static FieldRenameTable = Box::leak(Box::new(table));
        Ok(Self::with_table::<T>(table))
    }

    fn with_table<T: Record>(renames: &'static FieldRenameTable) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            info: T::record_info(),
            renames,
            fun: |value, renames| {
                let any: &dyn Any = value;
                match any.downcast_ref::<T>() {
                    Some(record) => Reduced::project(record, renames),
                    None => panic!(
                        "exposure type mismatched, expected `{}`",
                        T::record_info().type_path(),
                    ),
                }
            },
        }
    }

    /// Returns the [`TypeId`] of the record type.
    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the type descriptor of the record type.
    #[inline]
    pub fn info(&self) -> &'static RecordInfo {
        self.info
    }

    /// Returns the type path of the record type.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.info.type_path()
    }

    /// Returns the rename table shared by every reduction of this type.
    #[inline]
    pub fn renames(&self) -> &'static FieldRenameTable {
        self.renames
    }

    /// Reduces a value of the record type.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not of the record type.
    #[inline]
    pub fn reduce<'a>(&self, value: &'a dyn Value) -> Reduced<'a> {
        (self.fun)(value, self.renames)
    }

    /// Checks a table that was written by hand.
    ///
    /// Every key must be a data field of the record, and display names
    /// must be unique.
    pub(crate) fn validate(&self) -> Result<(), ExposeError> {
        let entries = self.renames.entries();
        for (index, entry) in entries.iter().enumerate() {
            if !self.info.has_data_field(entry.field()) {
                return Err(ExposeError::UnknownField {
                    type_path: self.type_path(),
                    field: entry.field().into(),
                });
            }
            if entries[..index].iter().any(|prev| prev.display() == entry.display()) {
                return Err(ExposeError::DuplicateDisplayName {
                    type_path: self.type_path(),
                    display: entry.display().into(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Exposure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Exposure")
            .field("type_path", &self.type_path())
            .field("renames", self.renames)
            .finish()
    }
}
