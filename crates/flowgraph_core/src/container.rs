// SPDX-License-Identifier: MIT OR Apache-2.0
//! Storage policy for graphs.
//!
//! A graph does not hard-code its collections. It is generic over a
//! [`MapFamily`], which builds the node and arc maps, and a [`SetFamily`],
//! which builds the per-node arc sets. The choice only affects iteration
//! order and performance:
//!
//! | family      | map        | set        | iteration order  |
//! |-------------|------------|------------|------------------|
//! | [`Hashed`]  | `HashMap`  | `HashSet`  | unspecified      |
//! | [`Ordered`] | `BTreeMap` | `BTreeSet` | ascending key    |
//! | [`Indexed`] | `IndexMap` | `IndexSet` | insertion        |
//!
//! Identifiers are issued in increasing order, so insertion order and key
//! order coincide for [`Indexed`]. Removal from an [`Indexed`] collection
//! shifts the remaining entries to keep that order and is linear.

use indexmap::{IndexMap, IndexSet};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// Bound for keys stored in graph collections.
pub trait Key: Copy + Eq + Ord + Hash + fmt::Debug + 'static {}

impl<T: Copy + Eq + Ord + Hash + fmt::Debug + 'static> Key for T {}

/// Unique-key mapping with insert, erase and lookup.
pub trait AssociativeArray<K: Key, V>: Default {
    /// Insert a value, returning the previous one for that key
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Remove a key, returning its value
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Look up a value
    fn get(&self, key: &K) -> Option<&V>;

    /// Look up a value mutably
    fn get_mut(&mut self, key: &K) -> Option<&mut V>;

    /// Number of entries
    fn len(&self) -> usize;

    /// Iterate over entries in the collection's order
    fn iter<'a>(&'a self) -> impl Iterator<Item = (K, &'a V)>
    where
        V: 'a;

    /// Iterate over keys in the collection's order
    fn keys(&self) -> impl Iterator<Item = K> + '_;

    /// Whether the key is present
    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Whether the collection is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Set of keys with insert, erase and membership.
pub trait IdSet<K: Key>: Default + Clone + fmt::Debug {
    /// Insert a key, returning `true` if it was not present
    fn insert(&mut self, key: K) -> bool;

    /// Remove a key, returning `true` if it was present
    fn remove(&mut self, key: &K) -> bool;

    /// Membership test
    fn contains(&self, key: &K) -> bool;

    /// Number of keys
    fn len(&self) -> usize;

    /// Iterate over keys in the collection's order
    fn iter(&self) -> impl Iterator<Item = K> + '_;

    /// Whether the set is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builds the node and arc maps of a graph.
pub trait MapFamily {
    /// The map type for a key/value pair
    type Map<K: Key, V>: AssociativeArray<K, V>;
}

/// Builds the per-node arc sets of a graph.
pub trait SetFamily {
    /// The set type for a key
    type Set<K: Key>: IdSet<K>;
}

/// Hash-based collections. Fastest, unordered iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hashed;

/// B-tree collections. Iterates in ascending key order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ordered;

/// `indexmap` collections. Iterates in insertion order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Indexed;

impl MapFamily for Hashed {
    type Map<K: Key, V> = HashMap<K, V>;
}

impl SetFamily for Hashed {
    type Set<K: Key> = HashSet<K>;
}

impl MapFamily for Ordered {
    type Map<K: Key, V> = BTreeMap<K, V>;
}

impl SetFamily for Ordered {
    type Set<K: Key> = BTreeSet<K>;
}

impl MapFamily for Indexed {
    type Map<K: Key, V> = IndexMap<K, V>;
}

impl SetFamily for Indexed {
    type Set<K: Key> = IndexSet<K>;
}

impl<K: Key, V> AssociativeArray<K, V> for HashMap<K, V> {
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        HashMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        HashMap::remove(self, key)
    }

    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        HashMap::get_mut(self, key)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = (K, &'a V)>
    where
        V: 'a,
    {
        HashMap::iter(self).map(|(key, value)| (*key, value))
    }

    fn keys(&self) -> impl Iterator<Item = K> + '_ {
        HashMap::keys(self).copied()
    }
}

impl<K: Key, V> AssociativeArray<K, V> for BTreeMap<K, V> {
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        BTreeMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        BTreeMap::remove(self, key)
    }

    fn get(&self, key: &K) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        BTreeMap::get_mut(self, key)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = (K, &'a V)>
    where
        V: 'a,
    {
        BTreeMap::iter(self).map(|(key, value)| (*key, value))
    }

    fn keys(&self) -> impl Iterator<Item = K> + '_ {
        BTreeMap::keys(self).copied()
    }
}

impl<K: Key, V> AssociativeArray<K, V> for IndexMap<K, V> {
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        IndexMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        IndexMap::shift_remove(self, key)
    }

    fn get(&self, key: &K) -> Option<&V> {
        IndexMap::get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        IndexMap::get_mut(self, key)
    }

    fn len(&self) -> usize {
        IndexMap::len(self)
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = (K, &'a V)>
    where
        V: 'a,
    {
        IndexMap::iter(self).map(|(key, value)| (*key, value))
    }

    fn keys(&self) -> impl Iterator<Item = K> + '_ {
        IndexMap::keys(self).copied()
    }
}

impl<K: Key> IdSet<K> for HashSet<K> {
    fn insert(&mut self, key: K) -> bool {
        HashSet::insert(self, key)
    }

    fn remove(&mut self, key: &K) -> bool {
        HashSet::remove(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        HashSet::contains(self, key)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn iter(&self) -> impl Iterator<Item = K> + '_ {
        HashSet::iter(self).copied()
    }
}

impl<K: Key> IdSet<K> for BTreeSet<K> {
    fn insert(&mut self, key: K) -> bool {
        BTreeSet::insert(self, key)
    }

    fn remove(&mut self, key: &K) -> bool {
        BTreeSet::remove(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        BTreeSet::contains(self, key)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn iter(&self) -> impl Iterator<Item = K> + '_ {
        BTreeSet::iter(self).copied()
    }
}

impl<K: Key> IdSet<K> for IndexSet<K> {
    fn insert(&mut self, key: K) -> bool {
        IndexSet::insert(self, key)
    }

    fn remove(&mut self, key: &K) -> bool {
        IndexSet::shift_remove(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        IndexSet::contains(self, key)
    }

    fn len(&self) -> usize {
        IndexSet::len(self)
    }

    fn iter(&self) -> impl Iterator<Item = K> + '_ {
        IndexSet::iter(self).copied()
    }
}
