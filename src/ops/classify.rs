//! Local-maximum classification.

use std::cmp::Ordering;

use crate::order::TryOrd;

/// `true` if `value` is not less than the neighbouring value.
///
/// Vacuously true for an absent neighbour.
fn not_less<V: TryOrd>(value: &V, neighbour: Option<&V>) -> Result<bool, V::Error> {
    match neighbour {
        None => Ok(true),
        Some(n) => Ok(value.try_cmp(n)? != Ordering::Less),
    }
}

/// Classifies a point by its neighbourhood.
///
/// A point is a local maximum when its value is not less than each defined
/// neighbour's value. Short-circuits on the left neighbour, so a point that
/// already fails there costs a single comparison.
pub fn is_maximum<V: TryOrd>(
    value: &V,
    left: Option<&V>,
    right: Option<&V>,
) -> Result<bool, V::Error> {
    if !not_less(value, left)? {
        return Ok(false);
    }
    not_less(value, right)
}
