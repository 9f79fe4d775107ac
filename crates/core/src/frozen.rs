//! Immutable validation sets
//!
//! Closed value types validate membership against a [`FrozenSet`] built once,
//! lazily, from the type's list of members. Built sets are never mutated and
//! are safe to share between threads.

use rustc_hash::FxHashSet;
use std::borrow::Borrow;
use std::hash::Hash;
use tracing::debug;

/// A hash set that cannot be modified after construction
#[derive(Debug, Clone)]
pub struct FrozenSet<T: Eq + Hash> {
    items: FxHashSet<T>,
}

impl<T: Eq + Hash> FrozenSet<T> {
    /// Build a set for the named value type
    pub fn build(name: &str, items: impl IntoIterator<Item = T>) -> Self {
        let items: FxHashSet<T> = items.into_iter().collect();
        debug!(set = name, members = items.len(), "Built validation set");
        FrozenSet { items }
    }

    /// Whether `value` is a member
    #[inline]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.items.contains(value)
    }

    /// The member equal to `value`, if any
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.items.get(value)
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set has no members
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over members in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Eq + Hash> FromIterator<T> for FrozenSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        FrozenSet {
            items: iter.into_iter().collect(),
        }
    }
}
