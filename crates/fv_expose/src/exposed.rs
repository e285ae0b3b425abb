use alloc::vec::Vec;
use core::fmt;

use crate::Value;
use crate::info::{FieldId, Record};
use crate::rename::FieldRenameTable;

// -----------------------------------------------------------------------------
// FieldMap

/// The selected fields of one record value, in declaration order.
///
/// Values are borrowed from the record; nothing is cloned.
#[derive(Clone, Default)]
pub struct FieldMap<'a> {
    entries: Vec<(FieldId, &'a dyn Value)>,
}

impl<'a> FieldMap<'a> {
    /// Returns the number of fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no field is present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value of `field`.
    pub fn get(&self, field: &str) -> Option<&'a dyn Value> {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| *value)
    }

    /// Returns the value of `field` downcast to `T`.
    pub fn get_as<T: Value>(&self, field: &str) -> Option<&'a T> {
        let value: &'a dyn core::any::Any = self.get(field)?;
        value.downcast_ref()
    }

    /// Iterates over the field identifiers in order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = FieldId> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Iterates over `(field, value)` pairs in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (FieldId, &'a dyn Value)> + '_ {
        self.entries.iter().copied()
    }
}

impl fmt::Debug for FieldMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.keys()).finish()
    }
}

// -----------------------------------------------------------------------------
// Reduced

/// A record value restricted to its exposed fields, with their display names.
///
/// A `Reduced` is only created by [`Reduced::project`], which reads exactly
/// the fields named by the rename table. The field map and the table
/// therefore hold the same keys in the same order.
///
/// The table is the `'static` table of the value's type, shared by every
/// reduction of that type.
///
/// # Examples
///
/// ```
/// use fv_expose::{Expose, Reduced};
/// use fv_expose::derive::Expose;
///
/// #[derive(serde::Serialize, Expose)]
/// #[expose(rename_all = "camelCase")]
/// struct Point {
///     pos_x: i32,
///     pos_y: i32,
/// }
///
/// let point = Point { pos_x: 1, pos_y: 2 };
/// let reduced: Reduced<'_> = point.reduce();
///
/// assert_eq!(reduced.fields().get_as::<i32>("pos_x"), Some(&1));
/// assert_eq!(
///     reduced.iter_renamed().map(|(name, _)| name).collect::<Vec<_>>(),
///     ["posX", "posY"],
/// );
/// ```
#[derive(Clone)]
pub struct Reduced<'a> {
    fields: FieldMap<'a>,
    renames: &'static FieldRenameTable,
}

impl<'a> Reduced<'a> {
    /// Projects `record` onto the keys of `renames`.
    ///
    /// Every key of `renames` must be readable through [`Record::field`],
    /// see the contract of [`Record`]. With the `debug` feature, a missing
    /// field panics in debug builds; otherwise it is left out of the field
    /// map and the field map no longer matches the table.
    pub fn project<R: Record + ?Sized>(record: &'a R, renames: &'static FieldRenameTable) -> Self {
        let mut entries = Vec::with_capacity(renames.len());

        for field in renames.keys() {
            let value = record.field(field);

            crate::cfg::debug! {
                assert!(
                    value.is_some(),
                    "exposed field `{field}` cannot be read from the record value",
                );
            }

            if let Some(value) = value {
                entries.push((field, value));
            }
        }

        Self {
            fields: FieldMap { entries },
            renames,
        }
    }

    /// Returns the selected fields.
    #[inline]
    pub fn fields(&self) -> &FieldMap<'a> {
        &self.fields
    }

    /// Returns the rename table of the value's type.
    #[inline]
    pub fn renames(&self) -> &'static FieldRenameTable {
        self.renames
    }

    /// Iterates over `(display name, value)` pairs in order.
    ///
    /// This is what an encoder emits for the reduced value.
    pub fn iter_renamed(&self) -> impl Iterator<Item = (&'static str, &'a dyn Value)> + '_ {
        let renames: &'static FieldRenameTable = self.renames;
        let mut entries = renames.entries().iter();
        self.fields.iter().filter_map(move |(field, value)| {
            let entry = entries.find(|entry| entry.field() == field)?;
            Some((entry.display(), value))
        })
    }

    /// Consumes the reduction and returns the field map.
    #[inline]
    pub fn into_fields(self) -> FieldMap<'a> {
        self.fields
    }
}

impl fmt::Debug for Reduced<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reduced")
            .field("fields", &self.fields)
            .field("renames", self.renames)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Exposed

/// The outcome of dispatching one value.
///
/// - [`Exposed::Reduced`]: the value's type has an exposure; the encoder
///   emits the reduced fields under their display names.
/// - [`Exposed::Passthrough`]: it does not; the encoder handles the original
///   value with its own generic rules.
///
/// The encoder recurses into nested values itself.
#[derive(Clone)]
pub enum Exposed<'a> {
    /// Selected fields plus the type's rename table.
    Reduced(Reduced<'a>),
    /// The original value, unchanged.
    Passthrough(&'a dyn Value),
}

impl<'a> Exposed<'a> {
    /// Returns `true` for [`Exposed::Passthrough`].
    #[inline]
    pub fn is_passthrough(&self) -> bool {
        matches!(self, Self::Passthrough(_))
    }

    /// Returns `true` for [`Exposed::Reduced`].
    #[inline]
    pub fn is_reduced(&self) -> bool {
        matches!(self, Self::Reduced(_))
    }

    /// Returns the reduction, if any.
    #[inline]
    pub fn as_reduced(&self) -> Option<&Reduced<'a>> {
        match self {
            Self::Reduced(reduced) => Some(reduced),
            Self::Passthrough(_) => None,
        }
    }

    /// Returns the passthrough value, if any.
    #[inline]
    pub fn as_passthrough(&self) -> Option<&'a dyn Value> {
        match self {
            Self::Reduced(_) => None,
            Self::Passthrough(value) => Some(*value),
        }
    }
}

impl fmt::Debug for Exposed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reduced(reduced) => f.debug_tuple("Reduced").field(reduced).finish(),
            Self::Passthrough(_) => f.write_str("Passthrough(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Reduced;
    use crate::Value;
    use crate::info::{FieldInfo, Record, RecordInfo};
    use crate::rename::{FieldRenameTable, RenameEntry};

    #[derive(serde::Serialize)]
    struct Pair {
        left: u32,
        right: &'static str,
    }

    impl Record for Pair {
        fn record_info() -> &'static RecordInfo {
            static INFO: RecordInfo = RecordInfo::new(
                "fv_expose::exposed::tests::Pair",
                &[FieldInfo::new("left"), FieldInfo::new("right")],
            );
            &INFO
        }

        fn field(&self, name: &str) -> Option<&dyn Value> {
            match name {
                "left" => Some(&self.left),
                "right" => Some(&self.right),
                _ => None,
            }
        }
    }

    static RIGHT_ONLY: FieldRenameTable =
        FieldRenameTable::from_static(&[RenameEntry::new("right", "Right")]);

    #[test]
    fn projection_follows_table() {
        let pair = Pair {
            left: 3,
            right: "r",
        };
        let reduced = Reduced::project(&pair, &RIGHT_ONLY);

        assert!(reduced.fields().keys().eq(reduced.renames().keys()));
        assert!(reduced.fields().get("left").is_none());
        assert_eq!(reduced.fields().get_as::<&str>("right"), Some(&"r"));
        assert_eq!(reduced.fields().get_as::<u32>("right"), None);

        let renamed: alloc::vec::Vec<_> = reduced.iter_renamed().map(|(name, _)| name).collect();
        assert_eq!(renamed, ["Right"]);
    }

    #[test]
    fn empty_table() {
        static EMPTY: FieldRenameTable = FieldRenameTable::EMPTY;

        let pair = Pair {
            left: 0,
            right: "",
        };
        let reduced = Reduced::project(&pair, &EMPTY);
        assert!(reduced.fields().is_empty());
        assert_eq!(alloc::format!("{reduced:?}"), "Reduced { fields: [], renames: [] }");
    }

    #[test]
    #[cfg(not(all(debug_assertions, feature = "debug")))]
    fn unreadable_field_is_left_out() {
        static BROKEN: FieldRenameTable = FieldRenameTable::from_static(&[
            RenameEntry::new("left", "left"),
            RenameEntry::new("middle", "middle"),
        ]);

        let pair = Pair {
            left: 0,
            right: "",
        };
        let reduced = Reduced::project(&pair, &BROKEN);
        assert_eq!(reduced.fields().keys().collect::<alloc::vec::Vec<_>>(), ["left"]);
        assert_eq!(reduced.renames().len(), 2);
    }

    #[test]
    #[cfg(all(debug_assertions, feature = "debug"))]
    #[should_panic(expected = "exposed field `middle`")]
    fn missing_field_panics() {
        static BROKEN: FieldRenameTable =
            FieldRenameTable::from_static(&[RenameEntry::new("middle", "middle")]);

        let pair = Pair {
            left: 0,
            right: "",
        };
        let _ = Reduced::project(&pair, &BROKEN);
    }
}
