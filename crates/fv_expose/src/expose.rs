use crate::Reduced;
use crate::info::Record;
use crate::rename::FieldRenameTable;

/// A record type with custom serialization behavior.
///
/// The type names its exposed fields and their display names once, in a
/// `'static` [`FieldRenameTable`]; [`Expose::reduce`] projects a value onto
/// that table.
///
/// Implementing `Expose` alone does not change dispatch: the type must be
/// registered in a [`TypeRegistry`], either explicitly or with
/// `#[expose(auto_register)]`.
///
/// # Deriving
///
/// ```
/// use fv_expose::Expose;
/// use fv_expose::derive::Expose;
///
/// #[derive(serde::Serialize, Expose)]
/// #[expose(except(password))]
/// struct Login {
///     user: String,
///     password: String,
/// }
///
/// assert_eq!(Login::rename_table().keys().collect::<Vec<_>>(), ["user"]);
/// ```
///
/// # Implementing by hand
///
/// A hand-written table must only name data fields of the record;
/// [`TypeRegistry::register`] checks it. Each of them must also be
/// readable through [`Record::field`], which no registration can check.
///
/// ```
/// use fv_expose::{Expose, Value};
/// use fv_expose::info::{FieldInfo, Record, RecordInfo};
/// use fv_expose::rename::{FieldRenameTable, RenameEntry};
///
/// #[derive(serde::Serialize)]
/// struct Temperature {
///     celsius: f32,
///     sensor: u32,
/// }
///
/// impl Record for Temperature {
///     fn record_info() -> &'static RecordInfo {
///         static INFO: RecordInfo = RecordInfo::new(
///             "demo::Temperature",
///             &[FieldInfo::new("celsius"), FieldInfo::new("sensor")],
///         );
///         &INFO
///     }
///
///     fn field(&self, name: &str) -> Option<&dyn Value> {
///         match name {
///             "celsius" => Some(&self.celsius),
///             "sensor" => Some(&self.sensor),
///             _ => None,
///         }
///     }
/// }
///
/// impl Expose for Temperature {
///     fn rename_table() -> &'static FieldRenameTable {
///         static TABLE: FieldRenameTable =
///             FieldRenameTable::from_static(&[RenameEntry::new("celsius", "°C")]);
///         &TABLE
///     }
/// }
///
/// let reduced = Temperature { celsius: 21.5, sensor: 7 }.reduce();
/// assert_eq!(reduced.fields().len(), 1);
/// ```
///
/// # Rejected declarations
///
/// `#[derive(Expose)]` checks the declaration while compiling. Each of
/// the following is a compile error.
///
/// `only` together with `except`:
///
/// ```compile_fail
/// use fv_expose::derive::Expose;
///
/// #[derive(serde::Serialize, Expose)]
/// #[expose(only(x), except(y))]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
/// ```
///
/// A listed name that is not a field:
///
/// ```compile_fail
/// use fv_expose::derive::Expose;
///
/// #[derive(serde::Serialize, Expose)]
/// #[expose(except(z))]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
/// ```
///
/// The tag field in `only`; it is never a data field:
///
/// ```compile_fail
/// use fv_expose::derive::Expose;
///
/// #[derive(serde::Serialize, Expose)]
/// #[expose(only(__tag__))]
/// struct Point {
///     x: i32,
///     __tag__: (),
/// }
/// ```
///
/// Two fields with one display name:
///
/// ```compile_fail
/// use fv_expose::derive::Expose;
///
/// #[derive(serde::Serialize, Expose)]
/// #[expose(rename_all = "camelCase")]
/// struct Cursor {
///     pos_x: i32,
///     #[allow(non_snake_case)]
///     posX: i32,
/// }
/// ```
///
/// The same declarations with the offending part removed compile:
///
/// ```
/// use fv_expose::derive::Expose;
///
/// #[derive(serde::Serialize, Expose)]
/// #[expose(only(x))]
/// struct Point {
///     x: i32,
///     y: i32,
///     __tag__: (),
/// }
///
/// #[derive(serde::Serialize, Expose)]
/// #[expose(except(__tag__), rename_all = "camelCase")]
/// struct Cursor {
///     pos_x: i32,
///     #[expose(rename = "rawX")]
///     #[allow(non_snake_case)]
///     posX: i32,
///     __tag__: (),
/// }
/// ```
///
/// [`TypeRegistry`]: crate::registry::TypeRegistry
/// [`TypeRegistry::register`]: crate::registry::TypeRegistry::register
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no custom serialization behavior",
    note = "consider annotating `{Self}` with `#[derive(Expose)]`"
)]
pub trait Expose: Record {
    /// Returns the rename table of this type.
    ///
    /// Must return the same table on every call.
    fn rename_table() -> &'static FieldRenameTable;

    /// Projects this value onto its exposed fields.
    #[inline]
    fn reduce(&self) -> Reduced<'_>
    where
        Self: Sized,
    {
        Reduced::project(self, Self::rename_table())
    }
}
