use core::any::TypeId;
use core::fmt::Debug;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::hash::NoOpHashState;

// -----------------------------------------------------------------------------
// TypeIdMap

/// A map keyed by [`TypeId`], hashed with [`NoOpHashState`].
///
/// Only the operations a per-type table needs are exposed.
pub struct TypeIdMap<V>(HashMap<TypeId, V, NoOpHashState>);

impl<V> TypeIdMap<V> {
    /// Creates an empty map, usable in `const` and `static` items.
    ///
    /// ```
    /// use fv_utils::TypeIdMap;
    ///
    /// static EMPTY: TypeIdMap<&str> = TypeIdMap::new();
    /// assert!(EMPTY.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self(HashMap::with_hasher(NoOpHashState))
    }

    /// Inserts the value built by `f` unless `type_id` is already present.
    ///
    /// Returns `false`, without calling `f`, if the key exists.
    ///
    /// ```
    /// use core::any::TypeId;
    /// use fv_utils::TypeIdMap;
    ///
    /// let mut map = TypeIdMap::new();
    /// assert!(map.try_insert(TypeId::of::<u8>(), || "u8"));
    /// assert!(!map.try_insert(TypeId::of::<u8>(), || unreachable!()));
    /// assert_eq!(map.get(&TypeId::of::<u8>()), Some(&"u8"));
    /// ```
    #[inline]
    pub fn try_insert(&mut self, type_id: TypeId, f: impl FnOnce() -> V) -> bool {
        let Entry::Vacant(entry) = self.0.entry(type_id) else {
            return false;
        };
        entry.insert(f());
        true
    }

    /// Inserts `value`, returning the one it replaced.
    #[inline]
    pub fn insert(&mut self, type_id: TypeId, value: V) -> Option<V> {
        self.0.insert(type_id, value)
    }

    #[inline]
    pub fn get(&self, type_id: &TypeId) -> Option<&V> {
        self.0.get(type_id)
    }

    #[inline]
    pub fn contains(&self, type_id: &TypeId) -> bool {
        self.0.contains_key(type_id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Values in arbitrary order.
    #[inline]
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> {
        self.0.values()
    }
}

impl<V> Default for TypeIdMap<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Debug> Debug for TypeIdMap<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.0.values()).finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use core::any::TypeId;

    use super::TypeIdMap;

    #[test]
    fn insert_replaces() {
        let mut map = TypeIdMap::default();
        assert!(map.insert(TypeId::of::<i32>(), "i32").is_none());
        assert_eq!(map.insert(TypeId::of::<i32>(), "int"), Some("i32"));
        assert!(map.contains(&TypeId::of::<i32>()));
        assert!(!map.contains(&TypeId::of::<u32>()));
        assert_eq!(map.len(), 1);
        assert_eq!(map.values().copied().collect::<Vec<_>>(), ["int"]);
    }

    #[test]
    fn try_insert_keeps_first() {
        let mut map = TypeIdMap::new();
        assert!(map.try_insert(TypeId::of::<str>(), || 1));
        assert!(!map.try_insert(TypeId::of::<str>(), || 2));
        assert_eq!(map.get(&TypeId::of::<str>()), Some(&1));
    }
}
