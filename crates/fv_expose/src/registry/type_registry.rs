use core::any::{Any, TypeId};

use fv_utils::TypeIdMap;
use fv_utils::hash::{FixedHashState, HashMap};

use crate::case::CaseConverter;
use crate::info::Record;
use crate::registry::Exposure;
use crate::select::SelectionPolicy;
use crate::{Expose, ExposeError, Exposed, Value};

// -----------------------------------------------------------------------------
// TypeRegistry

/// The table of record types with custom serialization behavior.
///
/// Keyed by [`TypeId`]. A value whose type has an entry is reduced by
/// [`expose`](Self::expose); any other value, of any type, passes through
/// unchanged. The fallback is total: there is no value `expose` cannot
/// handle.
///
/// A registry is filled once, then only read. Reads take `&self`, so a
/// finished registry can be shared between threads.
///
/// # Example
///
/// ```
/// use fv_expose::derive::Expose;
/// use fv_expose::registry::TypeRegistry;
///
/// #[derive(serde::Serialize, Expose)]
/// #[expose(only(name))]
/// struct User {
///     name: String,
///     token: String,
/// }
///
/// let mut registry = TypeRegistry::empty();
/// registry.register::<User>().unwrap();
///
/// let user = User { name: "ada".into(), token: "secret".into() };
/// let exposed = registry.expose(&user);
///
/// let reduced = exposed.as_reduced().unwrap();
/// assert_eq!(reduced.fields().keys().collect::<Vec<_>>(), ["name"]);
///
/// // Anything else passes through.
/// assert!(registry.expose(&42_u8).is_passthrough());
/// assert!(registry.expose(&vec!["a", "b"]).is_passthrough());
/// ```
pub struct TypeRegistry {
    exposures: TypeIdMap<Exposure>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    #[cfg_attr(not(feature = "auto_register"), allow(dead_code))]
    auto_registered: bool,
}

impl Default for TypeRegistry {
    /// See [`TypeRegistry::new`] .
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Creates an empty [`TypeRegistry`].
    #[inline]
    pub const fn empty() -> Self {
        Self {
            exposures: TypeIdMap::new(),
            type_path_to_id: HashMap::with_hasher(FixedHashState),
            auto_registered: false,
        }
    }

    /// Creates a registry holding every auto-registered type.
    ///
    /// See [`auto_register`](Self::auto_register).
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.auto_register();
        registry
    }

    // - If the type already has an entry, nothing happens and `false` is returned.
    // - Otherwise the entry is inserted and `true` is returned.
    fn register_internal(&mut self, type_id: TypeId, exposure: impl FnOnce() -> Exposure) -> bool {
        let type_path_to_id = &mut self.type_path_to_id;
        self.exposures.try_insert(type_id, || {
            let exposure = exposure();
            index_type_path(type_path_to_id, &exposure);
            log::debug!(
                "registered `{}` exposing {} field(s)",
                exposure.type_path(),
                exposure.renames().len(),
            );
            exposure
        })
    }

    /// Registers the type `T` with its own rename table.
    ///
    /// The table is checked against the record: every key must be a data
    /// field and display names must be unique. Tables produced by
    /// `#[derive(Expose)]` always pass.
    ///
    /// Returns `Ok(false)` if `T` was already registered, leaving the
    /// existing entry in place. Use [`insert`](Self::insert) to overwrite.
    pub fn register<T: Expose>(&mut self) -> Result<bool, ExposeError> {
        if self.contains(TypeId::of::<T>()) {
            log::trace!("`{}` is already registered", T::record_info().type_path());
            return Ok(false);
        }

        let exposure = Exposure::of::<T>();
        exposure.validate()?;
        Ok(self.register_internal(TypeId::of::<T>(), || exposure))
    }

    /// Registers the record type `T` with a policy and a case converter.
    ///
    /// The rename table is derived here, once; see [`Exposure::derive`].
    /// Returns `Ok(false)` without deriving anything if `T` was already
    /// registered.
    ///
    /// # Examples
    ///
    /// ```
    /// use fv_expose::case::Case;
    /// use fv_expose::derive::Record;
    /// use fv_expose::registry::TypeRegistry;
    /// use fv_expose::select::SelectionPolicy;
    ///
    /// #[derive(serde::Serialize, Record)]
    /// struct Session {
    ///     user_id: u64,
    ///     cookie: String,
    /// }
    ///
    /// let mut registry = TypeRegistry::empty();
    /// let policy = SelectionPolicy::except(["cookie"]);
    /// assert!(registry.register_with::<Session>(&policy, &Case::Camel).unwrap());
    ///
    /// let session = Session { user_id: 9, cookie: "c".into() };
    /// let exposed = registry.expose(&session);
    /// let reduced = exposed.as_reduced().unwrap();
    /// assert_eq!(reduced.renames().display("user_id"), Some("userId"));
    /// ```
    pub fn register_with<T: Record>(
        &mut self,
        policy: &SelectionPolicy,
        converter: &dyn CaseConverter,
    ) -> Result<bool, ExposeError> {
        if self.contains(TypeId::of::<T>()) {
            log::trace!("`{}` is already registered", T::record_info().type_path());
            return Ok(false);
        }

        let exposure = Exposure::derive::<T>(policy, converter)?;
        Ok(self.register_internal(TypeId::of::<T>(), || exposure))
    }

    /// Inserts or **overwrites** an entry.
    ///
    /// Returns the previous entry of the type, if any. The entry is not
    /// validated.
    pub fn insert(&mut self, exposure: Exposure) -> Option<Exposure> {
        let type_id = exposure.type_id();
        index_type_path(&mut self.type_path_to_id, &exposure);

        let previous = self.exposures.insert(type_id, exposure);
        if previous.is_some() {
            log::warn!("overwrote the exposure of `{}`", exposure.type_path());
        }
        previous
    }

    /// Automatically registers all non-generic types annotated with
    /// `#[expose(auto_register)]` or declared via `impl_auto_register!`.
    ///
    /// Equivalent to calling [`register`](Self::register) for each of them.
    /// Repeated calls are cheap and will not insert duplicates.
    ///
    /// Returns `true` if automatic registration is supported on the current
    /// platform. Always `false` without the `auto_register` feature.
    ///
    /// Supported platforms are those of the `inventory` crate.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use core::any::TypeId;
    /// use fv_expose::derive::Expose;
    /// use fv_expose::registry::TypeRegistry;
    ///
    /// #[derive(serde::Serialize, Expose)]
    /// #[expose(auto_register)]
    /// struct Foo {
    ///     value: i32,
    /// }
    ///
    /// let mut registry = TypeRegistry::empty();
    /// assert!(registry.auto_register());
    /// assert!(registry.contains(TypeId::of::<Foo>()));
    /// ```
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        crate::cfg::auto_register! {
            if {
                if self.auto_registered {
                    return true;
                }
                crate::__macro_exports::auto_register::__register_types(self);
                let supported = self.auto_registered;
                if !supported {
                    log::warn!("automatic registration is not supported on this platform");
                }
                supported
            } else {
                false
            }
        }
    }

    // Called by the availability marker submitted by this crate itself.
    crate::cfg::auto_register! {
        #[inline]
        pub(crate) fn mark_auto_registered(&mut self) {
            self.auto_registered = true;
        }
    }

    /// Whether the type with given [`TypeId`] has an entry.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.exposures.contains(&type_id)
    }

    /// Returns the entry of the type with the given [`TypeId`].
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&Exposure> {
        self.exposures.get(&type_id)
    }

    /// Returns the entry of the type with the given type path.
    ///
    /// Instantiations of a generic record share one type path, e.g.
    /// `Wrapper<u32>` and `Wrapper<i64>` are both `my_crate::Wrapper`. The
    /// path then refers to the instantiation registered last; use
    /// [`get`](Self::get) to tell them apart.
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&Exposure> {
        match self.type_path_to_id.get(type_path) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Iterates over all entries, in no particular order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Exposure> {
        self.exposures.values()
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.exposures.len()
    }

    /// Returns `true` if no type is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exposures.is_empty()
    }

    /// Dispatches a value on its runtime type.
    ///
    /// - A registered type yields [`Exposed::Reduced`], projected through the
    ///   type's one rename table.
    /// - Any other value yields [`Exposed::Passthrough`] with the value
    ///   itself.
    ///
    /// Never fails and has no side effects.
    pub fn expose<'a>(&self, value: &'a dyn Value) -> Exposed<'a> {
        let any: &dyn Any = value;
        match self.exposures.get(&any.type_id()) {
            Some(exposure) => Exposed::Reduced(exposure.reduce(value)),
            None => Exposed::Passthrough(value),
        }
    }
}

// A type path names at most one type, the one registered last.
fn index_type_path(type_path_to_id: &mut HashMap<&'static str, TypeId>, exposure: &Exposure) {
    let previous = type_path_to_id.insert(exposure.type_path(), exposure.type_id());
    if previous.is_some_and(|id| id != exposure.type_id()) {
        log::trace!(
            "type path `{}` now refers to another instantiation",
            exposure.type_path(),
        );
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::any::TypeId;

    use super::TypeRegistry;
    use crate::case::Case;
    use crate::derive::{Expose, Record};
    use crate::info::{FieldInfo, Record, RecordInfo, TYPE_TAG};
    use crate::registry::Exposure;
    use crate::rename::{FieldRenameTable, RenameEntry};
    use crate::select::SelectionPolicy;
    use crate::{Expose, ExposeError, Value};

    #[derive(serde::Serialize, Expose)]
    struct Point {
        x: i32,
        y: i32,
        __tag__: (),
    }

    #[derive(serde::Serialize, Expose)]
    #[expose(except(y))]
    struct PointX {
        x: i32,
        y: i32,
    }

    #[derive(serde::Serialize, Record)]
    struct Cursor {
        pos_x: i32,
        pos_y: i32,
    }

    #[derive(serde::Serialize, Expose)]
    struct Wrapper<T> {
        inner: T,
    }

    #[derive(serde::Serialize, Record)]
    struct Unregistered {
        a: u8,
    }

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::empty();
        registry.register::<Point>().unwrap();
        registry.register::<PointX>().unwrap();
        registry
    }

    fn field_names(exposed: &crate::Exposed<'_>) -> Vec<(&'static str, &'static str)> {
        let reduced = exposed.as_reduced().unwrap();
        reduced
            .fields()
            .keys()
            .map(|key| (key, reduced.renames().display(key).unwrap()))
            .collect()
    }

    #[test]
    fn point_all() {
        let registry = registry();
        let point = Point {
            x: 1,
            y: 2,
            __tag__: (),
        };

        let exposed = registry.expose(&point);
        assert_eq!(field_names(&exposed), [("x", "x"), ("y", "y")]);

        let fields = exposed.as_reduced().unwrap().fields();
        assert_eq!(fields.get_as::<i32>("x"), Some(&1));
        assert_eq!(fields.get_as::<i32>("y"), Some(&2));
        assert!(fields.get(TYPE_TAG).is_none());
    }

    #[test]
    fn point_except() {
        let registry = registry();
        let point = PointX { x: 1, y: 2 };

        let exposed = registry.expose(&point);
        assert_eq!(field_names(&exposed), [("x", "x")]);
        assert!(exposed.as_reduced().unwrap().renames().display("y").is_none());
    }

    #[test]
    fn camel_case_at_registration() {
        let mut registry = TypeRegistry::empty();
        let inserted = registry
            .register_with::<Cursor>(&SelectionPolicy::All, &Case::Camel)
            .unwrap();
        assert!(inserted);

        let cursor = Cursor { pos_x: 1, pos_y: 2 };
        let exposed = registry.expose(&cursor);
        assert_eq!(field_names(&exposed), [("pos_x", "posX"), ("pos_y", "posY")]);
    }

    #[test]
    fn fallback_is_total() {
        let registry = registry();

        let text = String::from("text");
        let list = vec![Point {
            x: 0,
            y: 0,
            __tag__: (),
        }];
        let map = BTreeMap::from([("k", 1_u32)]);
        let unregistered = Unregistered { a: 1 };

        let values: [&dyn Value; 9] = [
            &1_i64,
            &1.5_f64,
            &true,
            &'c',
            &(),
            &text,
            &list,
            &map,
            &unregistered,
        ];

        for value in values {
            let exposed = registry.expose(value);
            let passthrough = exposed.as_passthrough().unwrap();
            assert!(core::ptr::addr_eq(passthrough, value));
        }
    }

    #[test]
    fn same_table_every_call() {
        let registry = registry();
        let point = Point {
            x: 1,
            y: 2,
            __tag__: (),
        };

        let first = registry.expose(&point);
        let second = registry.expose(&point);
        let (first, second) = (first.as_reduced().unwrap(), second.as_reduced().unwrap());

        assert!(core::ptr::eq(first.renames(), second.renames()));
        assert!(core::ptr::eq(first.renames(), Point::rename_table()));
        assert!(first.fields().keys().eq(second.fields().keys()));
    }

    #[test]
    fn derived_table_is_kept() {
        let mut registry = TypeRegistry::empty();
        registry
            .register_with::<Cursor>(&SelectionPolicy::only(["pos_y"]), &Case::Pascal)
            .unwrap();
        let table = registry.get(TypeId::of::<Cursor>()).unwrap().renames();

        // A second registration does not derive a new table.
        let again = registry
            .register_with::<Cursor>(&SelectionPolicy::All, &Case::Camel)
            .unwrap();
        assert!(!again);

        let cursor = Cursor { pos_x: 1, pos_y: 2 };
        let exposed = registry.expose(&cursor);
        assert!(core::ptr::eq(exposed.as_reduced().unwrap().renames(), table));
        assert_eq!(field_names(&exposed), [("pos_y", "PosY")]);
    }

    #[test]
    fn lookup() {
        let registry = registry();
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
        assert!(registry.contains(TypeId::of::<Point>()));
        assert!(!registry.contains(TypeId::of::<Cursor>()));

        let path = Point::record_info().type_path();
        assert!(path.ends_with("::Point"));
        let exposure = registry.get_with_type_path(path).unwrap();
        assert_eq!(exposure.type_id(), TypeId::of::<Point>());
        assert!(registry.get_with_type_path("nowhere::Point").is_none());
    }

    #[test]
    fn generic_instantiations_share_a_type_path() {
        let mut registry = TypeRegistry::empty();
        registry.register::<Wrapper<u32>>().unwrap();
        registry.register::<Wrapper<i64>>().unwrap();
        assert_eq!(registry.len(), 2);

        let path = Wrapper::<u32>::record_info().type_path();
        assert_eq!(path, Wrapper::<i64>::record_info().type_path());

        // The path resolves to the last registration; the type id to each.
        let by_path = registry.get_with_type_path(path).unwrap();
        assert_eq!(by_path.type_id(), TypeId::of::<Wrapper<i64>>());
        let by_id = registry.get(TypeId::of::<Wrapper<u32>>()).unwrap();
        assert_eq!(by_id.type_id(), TypeId::of::<Wrapper<u32>>());
    }

    #[test]
    fn duplicate_register_is_noop() {
        let mut registry = registry();
        assert_eq!(registry.register::<Point>(), Ok(false));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn insert_overwrites() {
        let mut registry = registry();
        let derived = Exposure::derive::<Point>(&SelectionPolicy::only(["y"]), &Case::Upper).unwrap();

        let previous = registry.insert(derived).unwrap();
        assert!(core::ptr::eq(previous.renames(), Point::rename_table()));

        let point = Point {
            x: 1,
            y: 2,
            __tag__: (),
        };
        assert_eq!(field_names(&registry.expose(&point)), [("y", "Y")]);
    }

    #[test]
    fn registration_errors() {
        let mut registry = TypeRegistry::empty();

        let err = registry
            .register_with::<Cursor>(&SelectionPolicy::only(["pos_z"]), &Case::Camel)
            .unwrap_err();
        assert!(matches!(err, ExposeError::UnknownField { .. }));

        let policy = SelectionPolicy::only([TYPE_TAG]);
        let err = registry.register_with::<Point>(&policy, &Case::Camel).unwrap_err();
        assert!(matches!(err, ExposeError::UnknownField { .. }));

        let collide = |_: &str| String::from("same");
        let err = registry
            .register_with::<Cursor>(&SelectionPolicy::All, &collide)
            .unwrap_err();
        assert!(matches!(err, ExposeError::DuplicateDisplayName { .. }));

        assert!(registry.is_empty());
    }

    // A hand-written implementation naming a field the record lacks.
    #[derive(serde::Serialize)]
    struct Broken {
        a: u8,
    }

    impl Record for Broken {
        fn record_info() -> &'static RecordInfo {
            static INFO: RecordInfo =
                RecordInfo::new("fv_expose::registry::tests::Broken", &[FieldInfo::new("a")]);
            &INFO
        }

        fn field(&self, name: &str) -> Option<&dyn Value> {
            match name {
                "a" => Some(&self.a),
                _ => None,
            }
        }
    }

    impl Expose for Broken {
        fn rename_table() -> &'static FieldRenameTable {
            static TABLE: FieldRenameTable =
                FieldRenameTable::from_static(&[RenameEntry::new("a", "a"), RenameEntry::new("b", "b")]);
            &TABLE
        }
    }

    #[test]
    fn hand_written_table_is_checked() {
        let mut registry = TypeRegistry::empty();
        let err = registry.register::<Broken>().unwrap_err();
        assert_eq!(
            err,
            ExposeError::UnknownField {
                type_path: "fv_expose::registry::tests::Broken",
                field: "b".into(),
            }
        );
        assert!(!registry.contains(TypeId::of::<Broken>()));
    }
}
