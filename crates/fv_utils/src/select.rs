//! Field selection over plain names.
//!
//! Used by the `Expose` derive while compiling and by the runtime
//! derivation, so both apply the same rules:
//!
//! - the tag field is never selected;
//! - a listed name must be a data field, except that naming the tag in an
//!   `Except` list is allowed;
//! - the result keeps declaration order, whatever the order or repetition
//!   of the list.

use alloc::vec::Vec;

// -----------------------------------------------------------------------------
// FieldName

/// A declared field, as selection sees it.
pub trait FieldName {
    /// The field name, without `r#`.
    fn name(&self) -> &str;

    /// Whether this is the structural tag field.
    fn is_tag(&self) -> bool;
}

// -----------------------------------------------------------------------------
// NameFilter

/// Which fields to keep. List items are anything that reads as a name.
#[derive(Debug)]
pub enum NameFilter<'n, S> {
    All,
    Only(&'n [S]),
    Except(&'n [S]),
}

impl<S> Clone for NameFilter<'_, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for NameFilter<'_, S> {}

impl<'n, S: AsRef<str>> NameFilter<'n, S> {
    /// Returns the first listed name that does not name a selectable field.
    pub fn find_unknown<F: FieldName>(self, fields: &[F]) -> Option<&'n S> {
        let (list, tag_allowed) = match self {
            Self::All => return None,
            Self::Only(list) => (list, false),
            Self::Except(list) => (list, true),
        };

        list.iter().find(|listed| {
            let listed: &str = (*listed).as_ref();
            let known = fields
                .iter()
                .find(|field| field.name() == listed)
                .is_some_and(|field| !field.is_tag() || tag_allowed);
            !known
        })
    }

    fn keeps(self, name: &str) -> bool {
        let listed = |list: &[S]| list.iter().any(|item| AsRef::<str>::as_ref(item) == name);
        match self {
            Self::All => true,
            Self::Only(list) => listed(list),
            Self::Except(list) => !listed(list),
        }
    }
}

/// Selects fields in declaration order.
///
/// Fails with the first listed name that is not a data field.
///
/// # Examples
///
/// ```
/// use fv_utils::select::{FieldName, NameFilter, select};
///
/// struct Field(&'static str, bool);
///
/// impl FieldName for Field {
///     fn name(&self) -> &str { self.0 }
///     fn is_tag(&self) -> bool { self.1 }
/// }
///
/// let fields = [Field("a", false), Field("b", false), Field("__tag__", true)];
/// let names = |selected: Vec<&Field>| selected.iter().map(|f| f.0).collect::<Vec<_>>();
///
/// assert_eq!(names(select(&fields, NameFilter::<&str>::All).unwrap()), ["a", "b"]);
/// assert_eq!(names(select(&fields, NameFilter::Only(&["b", "a"])).unwrap()), ["a", "b"]);
/// assert_eq!(names(select(&fields, NameFilter::Except(&["__tag__"])).unwrap()), ["a", "b"]);
/// assert_eq!(select(&fields, NameFilter::Only(&["__tag__"])).err(), Some(&"__tag__"));
/// ```
pub fn select<'f, 'n, F: FieldName, S: AsRef<str>>(
    fields: &'f [F],
    filter: NameFilter<'n, S>,
) -> Result<Vec<&'f F>, &'n S> {
    if let Some(unknown) = filter.find_unknown(fields) {
        return Err(unknown);
    }

    Ok(fields
        .iter()
        .filter(|field| !field.is_tag() && filter.keeps(field.name()))
        .collect())
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::{FieldName, NameFilter, select};

    struct Field {
        name: &'static str,
        tag: bool,
    }

    impl FieldName for Field {
        fn name(&self) -> &str {
            self.name
        }

        fn is_tag(&self) -> bool {
            self.tag
        }
    }

    const fn data(name: &'static str) -> Field {
        Field { name, tag: false }
    }

    static FIELDS: [Field; 4] = [
        data("a"),
        Field {
            name: "kind",
            tag: true,
        },
        data("b"),
        data("c"),
    ];

    fn names<S: AsRef<str> + core::fmt::Debug>(filter: NameFilter<'_, S>) -> Vec<&'static str> {
        select(&FIELDS, filter)
            .unwrap()
            .into_iter()
            .map(|field| field.name)
            .collect()
    }

    #[test]
    fn declaration_order() {
        assert_eq!(names(NameFilter::<&str>::All), ["a", "b", "c"]);
        assert_eq!(names(NameFilter::Only(&["c", "a", "c"])), ["a", "c"]);
        assert_eq!(names(NameFilter::Except(&["b"])), ["a", "c"]);
    }

    #[test]
    fn owned_names() {
        let list = [String::from("b")];
        assert_eq!(names(NameFilter::Only(&list)), ["b"]);
    }

    #[test]
    fn tag_rules() {
        assert_eq!(names(NameFilter::Except(&["kind"])), ["a", "b", "c"]);
        assert_eq!(select(&FIELDS, NameFilter::Only(&["kind"])).err(), Some(&"kind"));
    }

    #[test]
    fn unknown_name() {
        assert_eq!(select(&FIELDS, NameFilter::Except(&["b", "z"])).err(), Some(&"z"));
        assert_eq!(NameFilter::Only(&["a", "b"]).find_unknown(&FIELDS), None);
    }

    #[test]
    fn empty_lists() {
        assert!(names(NameFilter::<&str>::Only(&[])).is_empty());
        assert_eq!(names(NameFilter::<&str>::Except(&[])), ["a", "b", "c"]);
    }
}
