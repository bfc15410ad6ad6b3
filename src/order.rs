//! Fallible total ordering of values.
//!
//! The map never asks values for equality: two values are *equivalent* when
//! neither is less than the other. [`TryOrd`] expresses that relation as a
//! single three-way comparison that is allowed to fail, which is the seam the
//! whole update engine is generic over.

use std::cmp::Ordering;
use std::convert::Infallible;

/// Total order whose comparison may fail.
///
/// `Ordering::Equal` means *neither operand is less than the other*: the
/// equivalence relation induced by the order, not structural equality. The
/// comparison is the only operation the map ever invokes on a value.
pub trait TryOrd {
    /// Error produced by a failed comparison.
    type Error;

    /// Three-way comparison of `self` against `other`.
    ///
    /// # Errors
    ///
    /// Returns whatever error the underlying comparison produces. A failed
    /// comparison during a map update leaves the map untouched.
    fn try_cmp(&self, other: &Self) -> Result<Ordering, Self::Error>;

    /// Returns `true` if neither operand is less than the other.
    ///
    /// # Errors
    ///
    /// Propagates the error of [`try_cmp`](Self::try_cmp).
    fn try_equivalent(&self, other: &Self) -> Result<bool, Self::Error> {
        Ok(self.try_cmp(other)? == Ordering::Equal)
    }
}

/// Every infallibly ordered type is trivially `TryOrd`.
impl<T: Ord> TryOrd for T {
    type Error = Infallible;

    fn try_cmp(&self, other: &Self) -> Result<Ordering, Infallible> {
        Ok(self.cmp(other))
    }
}
