use crate::Value;
use crate::info::RecordInfo;

/// A structured value type with a fixed, named, statically known set of fields.
///
/// This is the reflection surface derivation works from: the field list
/// comes from [`Record::record_info`] and values are read by name with
/// [`Record::field`].
///
/// Usually implemented with [`#[derive(Record)]`](crate::derive::Record)
/// or [`#[derive(Expose)]`](crate::derive::Expose).
///
/// # Implementation
///
/// ```
/// use fv_expose::Value;
/// use fv_expose::info::{FieldInfo, Record, RecordInfo};
///
/// #[derive(serde::Serialize)]
/// struct Rgb {
///     r: u8,
///     g: u8,
///     b: u8,
/// }
///
/// impl Record for Rgb {
///     fn record_info() -> &'static RecordInfo {
///         static INFO: RecordInfo = RecordInfo::new(
///             "demo::Rgb",
///             &[FieldInfo::new("r"), FieldInfo::new("g"), FieldInfo::new("b")],
///         );
///         &INFO
///     }
///
///     fn field(&self, name: &str) -> Option<&dyn Value> {
///         match name {
///             "r" => Some(&self.r),
///             "g" => Some(&self.g),
///             "b" => Some(&self.b),
///             _ => None,
///         }
///     }
/// }
///
/// let color = Rgb { r: 1, g: 2, b: 3 };
/// assert!(color.field("g").is_some());
/// assert!(color.field("alpha").is_none());
/// ```
///
/// Every data field listed in the [`RecordInfo`] must be readable through
/// [`Record::field`]. The derives guarantee it; a hand-written `field`
/// that misses one breaks [`Reduced`](crate::Reduced): the field is
/// dropped from the field map but stays in the rename table. The tag
/// field need not be readable.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a record type",
    note = "consider annotating `{Self}` with `#[derive(Record)]` or `#[derive(Expose)]`"
)]
pub trait Record: Value {
    /// Returns the static type descriptor.
    fn record_info() -> &'static RecordInfo
    where
        Self: Sized;

    /// Returns the value of the named field.
    fn field(&self, name: &str) -> Option<&dyn Value>;
}
