//! The public map type.

use std::fmt;
use std::ops;

use crate::error::InvalidArg;
use crate::iter::{Iter, MaximaIter};
use crate::maxima::MaximaIndex;
use crate::ops::erase::erase_point;
use crate::ops::set_value::write_point;
use crate::order::TryOrd;
use crate::store::PointStore;

/// Mutable, partially-defined function from `A` to `V` that maintains the set
/// of its local maxima as an always-consistent derived view.
///
/// A point is a local maximum when its value is not less than the value of
/// each currently-defined argument-adjacent neighbour; endpoints compare
/// against their single neighbour and an isolated point is always a maximum.
/// Every update re-evaluates only the written point and its two neighbours.
///
/// Value comparisons go through [`TryOrd`] and may fail. A failed comparison
/// surfaces verbatim from [`set_value`](Self::set_value) and
/// [`erase`](Self::erase), with the map left exactly as it was before the
/// call.
#[derive(Clone)]
pub struct MaximaMap<A, V> {
    store: PointStore<A, V>,
    maxima: MaximaIndex<A>,
}

// ---------------------------------------------------------------------------
// Construction & accessors — no trait bounds
// ---------------------------------------------------------------------------

impl<A, V> MaximaMap<A, V> {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            store: PointStore::new(),
            maxima: MaximaIndex::new(),
        }
    }

    /// Returns the number of arguments with a defined value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if no argument has a defined value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Ascending-by-argument iteration over all `(argument, value)` points.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, A, V> {
        Iter::new(self.store.iter())
    }
}

// ---------------------------------------------------------------------------
// Read operations — A: Ord
// ---------------------------------------------------------------------------

impl<A: Ord, V> MaximaMap<A, V> {
    /// Returns the value defined for `arg`, if any.
    #[must_use]
    pub fn get(&self, arg: &A) -> Option<&V> {
        self.store.get(arg)
    }

    /// Returns `true` if `arg` has a defined value.
    #[must_use]
    pub fn contains_arg(&self, arg: &A) -> bool {
        self.store.get(arg).is_some()
    }

    /// Returns the value defined for `arg`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArg`] if `arg` has no defined value.
    pub fn value_at(&self, arg: &A) -> Result<&V, InvalidArg> {
        self.store.get(arg).ok_or(InvalidArg)
    }

    /// Descending-by-value iteration over the local maxima, ties broken by
    /// ascending argument.
    #[must_use]
    pub fn maxima(&self) -> MaximaIter<'_, A, V> {
        MaximaIter::new(&self.store, self.maxima.keys())
    }

    /// Returns the point attaining the maximum value currently defined, ties
    /// broken by smallest argument. `None` on an empty map.
    #[must_use]
    pub fn peak(&self) -> Option<(&A, &V)> {
        self.maxima().next()
    }
}

// ---------------------------------------------------------------------------
// Write operations — A: Ord + Clone, V: TryOrd
// ---------------------------------------------------------------------------

impl<A: Ord + Clone, V: TryOrd> MaximaMap<A, V> {
    /// Sets the function value at `arg` to `value`.
    ///
    /// Overwriting an existing value with an equivalent one is a no-op: no
    /// reclassification happens and nothing observable changes.
    ///
    /// # Errors
    ///
    /// Propagates the first failed value comparison, in which case neither
    /// the points nor the maxima view have changed.
    pub fn set_value(&mut self, arg: A, value: V) -> Result<(), V::Error> {
        write_point(&mut self.store, &mut self.maxima, arg, value)
    }

    /// Removes the value defined for `arg`. A no-op if `arg` is undefined.
    ///
    /// # Errors
    ///
    /// Propagates the first failed value comparison made while reclassifying
    /// the former neighbours, in which case nothing has changed.
    pub fn erase(&mut self, arg: &A) -> Result<(), V::Error> {
        erase_point(&mut self.store, &mut self.maxima, arg)
    }
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl<A, V> Default for MaximaMap<A, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, V> fmt::Debug for MaximaMap<A, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaximaMap")
            .field("len", &self.store.len())
            .field("maxima", &self.maxima.len())
            .finish_non_exhaustive()
    }
}

impl<A: Ord, V> ops::Index<&A> for MaximaMap<A, V> {
    type Output = V;

    fn index(&self, arg: &A) -> &V {
        self.get(arg).expect("argument not found")
    }
}

impl<'a, A, V> IntoIterator for &'a MaximaMap<A, V> {
    type Item = (&'a A, &'a V);
    type IntoIter = Iter<'a, A, V>;

    fn into_iter(self) -> Iter<'a, A, V> {
        self.iter()
    }
}

impl<A: Ord + Clone, V: Ord> Extend<(A, V)> for MaximaMap<A, V> {
    fn extend<I: IntoIterator<Item = (A, V)>>(&mut self, iter: I) {
        for (arg, value) in iter {
            match self.set_value(arg, value) {
                Ok(()) => {}
                Err(never) => match never {},
            }
        }
    }
}

impl<A: Ord + Clone, V: Ord> FromIterator<(A, V)> for MaximaMap<A, V> {
    fn from_iter<I: IntoIterator<Item = (A, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}
