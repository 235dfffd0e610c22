use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::{
    any::TypeId,
    collections::HashMap,
    fmt,
    marker::PhantomData,
    sync::{LazyLock, Mutex, PoisonError},
};

///
/// GroupKey
///
/// Closed enumeration indexing a family of same-shaped columns (e.g. one
/// column per stat type). `group_key!` generates conforming enums.
///
/// Invariant: `ALL` lists every variant in declaration order and
/// `ordinal` is dense over `0..ALL.len()`.
///

pub trait GroupKey: Copy + fmt::Debug + PartialEq + 'static {
    const ALL: &'static [Self];

    /// Bare key name; the full column name is the group prefix plus this.
    fn name(self) -> &'static str;

    fn ordinal(self) -> usize;
}

///
/// ColumnGroup
///
/// Dense per-key storage for a column family, exposed as a keyed
/// collection rather than one field per column. Sized to the key
/// enumeration's cardinality; every slot defaults to zero until set.
/// No resize, and no raw-index surface: the key type itself is the
/// bounds invariant.
///

pub struct ColumnGroup<K: GroupKey, V> {
    values: Box<[V]>,
    _marker: PhantomData<fn() -> K>,
}

impl<K: GroupKey, V: Copy + Default> ColumnGroup<K, V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: vec![V::default(); K::ALL.len()].into_boxed_slice(),
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub fn get(&self, key: K) -> V {
        self.values[key.ordinal()]
    }

    pub fn set(&mut self, key: K, value: V) {
        self.values[key.ordinal()] = value;
    }

    /// Key/value pairs in key declaration order, for bulk export.
    pub fn iter(&self) -> impl Iterator<Item = (K, V)> + '_ {
        K::ALL.iter().map(|key| (*key, self.get(*key)))
    }
}

impl<K: GroupKey, V: Copy + Default> Default for ColumnGroup<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: GroupKey, V: Clone> Clone for ColumnGroup<K, V> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            _marker: PhantomData,
        }
    }
}

impl<K: GroupKey, V: fmt::Debug> fmt::Debug for ColumnGroup<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(K::ALL.iter().map(|k| (k, &self.values[k.ordinal()])))
            .finish()
    }
}

impl<K: GroupKey, V: PartialEq> PartialEq for ColumnGroup<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<K: GroupKey, V: Eq> Eq for ColumnGroup<K, V> {}

impl<K: GroupKey, V: Serialize> Serialize for ColumnGroup<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.values.serialize(serializer)
    }
}

impl<'de, K: GroupKey, V: Deserialize<'de>> Deserialize<'de> for ColumnGroup<K, V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<V>::deserialize(deserializer)?;
        if values.len() != K::ALL.len() {
            return Err(de::Error::invalid_length(
                values.len(),
                &"one value per group key",
            ));
        }

        Ok(Self {
            values: values.into_boxed_slice(),
            _marker: PhantomData,
        })
    }
}

// ---- group column names -------------------------------------------------

type NameTable = HashMap<(TypeId, &'static str), &'static [&'static str]>;

// Memoized (key type, prefix) -> column-name table, built once per process
// and read thereafter without mutation.
static GROUP_NAMES: LazyLock<Mutex<NameTable>> = LazyLock::new(|| Mutex::new(HashMap::new()));

/// Full column names for one group, prefix applied, key order.
pub fn group_column_names<K: GroupKey>(prefix: &'static str) -> &'static [&'static str] {
    let mut table = GROUP_NAMES.lock().unwrap_or_else(PoisonError::into_inner);

    *table.entry((TypeId::of::<K>(), prefix)).or_insert_with(|| {
        let names: Vec<&'static str> = K::ALL
            .iter()
            .map(|key| &*Box::leak(format!("{prefix}{}", key.name()).into_boxed_str()))
            .collect();

        Box::leak(names.into_boxed_slice())
    })
}

/// Full column name of one group key.
pub fn group_column_name<K: GroupKey>(prefix: &'static str, key: K) -> &'static str {
    group_column_names::<K>(prefix)[key.ordinal()]
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::group_key! {
        enum Axis {
            X => "x",
            Y => "y",
            Z => "z",
        }
    }

    #[test]
    fn slots_default_to_zero() {
        let group: ColumnGroup<Axis, u16> = ColumnGroup::new();
        for key in Axis::ALL {
            assert_eq!(group.get(*key), 0);
        }
    }

    #[test]
    fn set_then_get_per_key() {
        let mut group: ColumnGroup<Axis, u16> = ColumnGroup::new();
        group.set(Axis::Y, 9);

        assert_eq!(group.get(Axis::Y), 9);
        assert_eq!(group.get(Axis::X), 0);
        assert_eq!(group.get(Axis::Z), 0);
    }

    #[test]
    fn iterates_once_per_key_in_order() {
        let mut group: ColumnGroup<Axis, u16> = ColumnGroup::new();
        group.set(Axis::Z, 3);

        let pairs: Vec<_> = group.iter().collect();
        assert_eq!(pairs, vec![(Axis::X, 0), (Axis::Y, 0), (Axis::Z, 3)]);
    }

    #[test]
    fn names_are_prefixed_and_memoized() {
        assert_eq!(group_column_names::<Axis>("pos_"), &["pos_x", "pos_y", "pos_z"]);
        assert_eq!(group_column_name::<Axis>("pos_", Axis::Y), "pos_y");

        // a second prefix over the same key type is a distinct family
        assert_eq!(group_column_name::<Axis>("vel_", Axis::X), "vel_x");

        // same slice instance on repeat lookups
        let a = group_column_names::<Axis>("pos_").as_ptr();
        let b = group_column_names::<Axis>("pos_").as_ptr();
        assert_eq!(a, b);
    }
}
