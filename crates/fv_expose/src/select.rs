//! Field selection.
//!
//! A [`SelectionPolicy`] decides which fields of a record are exposed.
//! [`select`] applies a policy to a [`RecordInfo`] and returns the exposed
//! field identifiers in declaration order.
//!
//! The structural marker field (see [`TYPE_TAG`](crate::info::TYPE_TAG))
//! is never selected.
//!
//! Identifiers in `Only` and `Except` lists are validated against the
//! record. An identifier that names no data field fails with
//! [`ExposeError::UnknownField`], except that naming the marker field in
//! an `Except` list is accepted, as it is excluded anyway.

use alloc::vec::Vec;

use fv_utils::select::NameFilter;

use crate::ExposeError;
use crate::info::{FieldId, FieldInfo, RecordInfo};

// -----------------------------------------------------------------------------
// SelectionPolicy

/// Which fields of a record type are exposed.
///
/// `All` is the default when a type opts in without a policy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Every data field.
    #[default]
    All,
    /// Exactly the listed fields.
    Only(Vec<FieldId>),
    /// Every data field except the listed ones.
    Except(Vec<FieldId>),
}

impl SelectionPolicy {
    /// Creates an `Only` policy.
    pub fn only(fields: impl IntoIterator<Item = FieldId>) -> Self {
        Self::Only(fields.into_iter().collect())
    }

    /// Creates an `Except` policy.
    pub fn except(fields: impl IntoIterator<Item = FieldId>) -> Self {
        Self::Except(fields.into_iter().collect())
    }

    /// Builds the policy from optional `only` and `except` declarations.
    ///
    /// The two lists are mutually exclusive: giving both fails with
    /// [`ExposeError::InvalidPolicy`]. Giving neither yields `All`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fv_expose::ExposeError;
    /// use fv_expose::info::{FieldInfo, RecordInfo};
    /// use fv_expose::select::SelectionPolicy;
    ///
    /// static INFO: RecordInfo = RecordInfo::new("demo::P", &[FieldInfo::new("x")]);
    ///
    /// let policy = SelectionPolicy::from_lists(&INFO, None, Some(vec!["x"])).unwrap();
    /// assert_eq!(policy, SelectionPolicy::Except(vec!["x"]));
    ///
    /// let err = SelectionPolicy::from_lists(&INFO, Some(vec![]), Some(vec![])).unwrap_err();
    /// assert!(matches!(err, ExposeError::InvalidPolicy { .. }));
    /// ```
    pub fn from_lists(
        info: &RecordInfo,
        only: Option<Vec<FieldId>>,
        except: Option<Vec<FieldId>>,
    ) -> Result<Self, ExposeError> {
        match (only, except) {
            (Some(_), Some(_)) => Err(ExposeError::InvalidPolicy {
                type_path: info.type_path(),
            }),
            (Some(only), None) => Ok(Self::Only(only)),
            (None, Some(except)) => Ok(Self::Except(except)),
            (None, None) => Ok(Self::All),
        }
    }

    /// Returns the listed identifiers, empty for `All`.
    pub fn listed(&self) -> &[FieldId] {
        match self {
            Self::All => &[],
            Self::Only(fields) | Self::Except(fields) => fields,
        }
    }
}

// -----------------------------------------------------------------------------
// select

/// Computes the ordered set of exposed fields.
///
/// - `All`: every data field.
/// - `Only(S)`: exactly `S`.
/// - `Except(S)`: every data field not in `S`.
///
/// The result follows declaration order and holds no duplicates, whatever
/// the order or repetition inside the lists.
///
/// # Examples
///
/// ```
/// use fv_expose::info::{FieldInfo, RecordInfo};
/// use fv_expose::select::{SelectionPolicy, select};
///
/// static INFO: RecordInfo = RecordInfo::new(
///     "demo::Abc",
///     &[FieldInfo::new("a"), FieldInfo::new("b"), FieldInfo::new("c")],
/// );
///
/// assert_eq!(select(&INFO, &SelectionPolicy::All).unwrap(), ["a", "b", "c"]);
/// assert_eq!(select(&INFO, &SelectionPolicy::only(["a"])).unwrap(), ["a"]);
/// assert_eq!(select(&INFO, &SelectionPolicy::except(["b"])).unwrap(), ["a", "c"]);
/// ```
pub fn select(info: &RecordInfo, policy: &SelectionPolicy) -> Result<Vec<FieldId>, ExposeError> {
    let filter = match policy {
        SelectionPolicy::All => NameFilter::All,
        SelectionPolicy::Only(list) => NameFilter::Only(list.as_slice()),
        SelectionPolicy::Except(list) => NameFilter::Except(list.as_slice()),
    };

    match fv_utils::select::select(info.fields(), filter) {
        Ok(selected) => Ok(selected.into_iter().map(FieldInfo::name).collect()),
        Err(unknown) => Err(ExposeError::UnknownField {
            type_path: info.type_path(),
            field: (*unknown).into(),
        }),
    }
}
