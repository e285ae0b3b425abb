/// The identifier of a record field.
///
/// Field identifiers are the field names as declared, interned at compile
/// time. They are unique within a record type.
pub type FieldId = &'static str;

/// The name of the implicit structural marker field.
///
/// A field with this name is never a data field: `#[derive(Record)]`
/// marks it as the type tag automatically.
pub const TYPE_TAG: FieldId = "__tag__";

// -----------------------------------------------------------------------------
// FieldInfo

/// Information for a named record field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldInfo {
    name: FieldId,
    is_tag: bool,
}

impl FieldInfo {
    /// Creates a data field.
    #[inline]
    pub const fn new(name: FieldId) -> Self {
        Self {
            name,
            is_tag: false,
        }
    }

    /// Creates the structural marker field.
    #[inline]
    pub const fn tag(name: FieldId) -> Self {
        Self { name, is_tag: true }
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> FieldId {
        self.name
    }

    /// Returns `true` for the structural marker field.
    #[inline]
    pub const fn is_tag(&self) -> bool {
        self.is_tag
    }
}

impl fv_utils::select::FieldName for FieldInfo {
    #[inline]
    fn name(&self) -> &str {
        self.name
    }

    #[inline]
    fn is_tag(&self) -> bool {
        self.is_tag
    }
}

// -----------------------------------------------------------------------------
// RecordInfo

/// The type descriptor of a record type.
///
/// Fields keep declaration order. The order carries no meaning for
/// encoders but keeps every derived artifact deterministic.
///
/// # Examples
///
/// ```
/// use fv_expose::info::{FieldInfo, RecordInfo};
///
/// static INFO: RecordInfo = RecordInfo::new(
///     "demo::Point",
///     &[FieldInfo::new("x"), FieldInfo::new("y"), FieldInfo::tag("__tag__")],
/// );
///
/// assert_eq!(INFO.type_name(), "Point");
/// assert_eq!(INFO.data_fields().collect::<Vec<_>>(), ["x", "y"]);
/// assert_eq!(INFO.tag(), Some("__tag__"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RecordInfo {
    type_path: &'static str,
    fields: &'static [FieldInfo],
}

impl RecordInfo {
    /// Creates a record descriptor.
    #[inline]
    pub const fn new(type_path: &'static str, fields: &'static [FieldInfo]) -> Self {
        Self { type_path, fields }
    }

    /// Returns the full type path, e.g. `my_crate::shapes::Point`.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Returns the last segment of the type path.
    pub fn type_name(&self) -> &'static str {
        match self.type_path.rsplit_once("::") {
            Some((_, name)) => name,
            None => self.type_path,
        }
    }

    /// Returns all fields, the tag included, in declaration order.
    #[inline]
    pub const fn fields(&self) -> &'static [FieldInfo] {
        self.fields
    }

    /// Returns the number of fields, the tag included.
    #[inline]
    pub const fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the field with the given name.
    pub fn field(&self, name: &str) -> Option<&'static FieldInfo> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Returns the index of the field with the given name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    /// Returns `true` if `name` is a data field of this record.
    pub fn has_data_field(&self, name: &str) -> bool {
        self.field(name).is_some_and(|field| !field.is_tag)
    }

    /// Iterates over the names of the data fields in declaration order.
    pub fn data_fields(&self) -> impl Iterator<Item = FieldId> + use<> {
        self.fields
            .iter()
            .filter(|field| !field.is_tag)
            .map(FieldInfo::name)
    }

    /// Returns the name of the structural marker field, if any.
    pub fn tag(&self) -> Option<FieldId> {
        self.fields
            .iter()
            .find(|field| field.is_tag)
            .map(FieldInfo::name)
    }
}
