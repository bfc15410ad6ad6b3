//! The derived maxima view.
//!
//! A sorted vector of *argument keys*, ordered by `(value descending,
//! argument ascending)`. Values are never duplicated here: every comparison
//! resolves the key's value through the owning [`PointStore`], so the view
//! cannot drift from the function it is derived from.

use std::cmp::Ordering;

use crate::order::TryOrd;
use crate::store::PointStore;

/// Ordering of two maxima entries: value descending, argument ascending.
///
/// Only `try_cmp` is ever invoked on the values; `Ordering::Equal` from it
/// means the values are equivalent and the argument order decides.
pub fn maxima_cmp<A, V>(
    lhs_value: &V,
    lhs_arg: &A,
    rhs_value: &V,
    rhs_arg: &A,
) -> Result<Ordering, V::Error>
where
    A: Ord,
    V: TryOrd,
{
    Ok(match lhs_value.try_cmp(rhs_value)? {
        Ordering::Equal => lhs_arg.cmp(rhs_arg),
        other => other.reverse(),
    })
}

/// Ordered set of the arguments currently classified as local maxima.
///
/// Mutations are position-addressed and infallible; all fallible comparison
/// work happens in [`locate`](Self::locate) before any mutation is staged.
#[derive(Clone)]
pub struct MaximaIndex<A> {
    keys: Vec<A>,
}

impl<A> MaximaIndex<A> {
    /// Creates an empty view.
    pub const fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Returns the number of maxima.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Keys in `(value desc, argument asc)` order.
    pub fn keys(&self) -> &[A] {
        &self.keys
    }

    /// Inserts `arg` at `pos`, shifting later entries right.
    pub fn insert_at(&mut self, pos: usize, arg: A) {
        self.keys.insert(pos, arg);
    }

    /// Removes the entry at `pos`, shifting later entries left.
    pub fn remove_at(&mut self, pos: usize) -> A {
        self.keys.remove(pos)
    }
}

impl<A: Ord> MaximaIndex<A> {
    /// Binary search for the slot of the point `(value, arg)`.
    ///
    /// Returns `Ok(Ok(pos))` if the point is present at `pos`, `Ok(Err(pos))`
    /// with its insertion slot otherwise. The probe value is supplied by the
    /// caller rather than looked up, so the slot of a point whose value is
    /// about to change can be computed against either the old or the new
    /// value while the store still holds the old one.
    ///
    /// # Errors
    ///
    /// Propagates the first failed value comparison; the view is not touched.
    pub fn locate<V: TryOrd>(
        &self,
        store: &PointStore<A, V>,
        value: &V,
        arg: &A,
    ) -> Result<Result<usize, usize>, V::Error> {
        let mut lo = 0;
        let mut hi = self.keys.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let key = &self.keys[mid];
            match maxima_cmp(store.value_of(key), key, value, arg)? {
                Ordering::Less => lo = mid + 1,
                Ordering::Greater => hi = mid,
                Ordering::Equal => return Ok(Ok(mid)),
            }
        }
        Ok(Err(lo))
    }
}
