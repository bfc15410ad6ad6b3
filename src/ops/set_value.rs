//! Assignment: planning and commit for `set_value`.

use crate::maxima::MaximaIndex;
use crate::order::TryOrd;
use crate::plan::{StagedInserts, UpdatePlan};
use crate::store::PointStore;

use super::classify;

/// Assigns `value` to `arg` and reclassifies the written point and its two
/// argument-adjacent neighbours.
///
/// Overwriting an existing value with an equivalent one returns after the
/// single equivalence check. The neighbours of the written point are the
/// points with the nearest arguments strictly below and above `arg`, which is
/// already the post-write arrangement whether `arg` is fresh or overwritten:
/// the superseded entry is never consulted as a neighbour, so it never has to
/// be skipped.
///
/// # Errors
///
/// Propagates the first failed value comparison. Planning is read-only, so on
/// failure both the points and the maxima view are exactly as before.
pub fn write_point<A, V>(
    store: &mut PointStore<A, V>,
    maxima: &mut MaximaIndex<A>,
    arg: A,
    value: V,
) -> Result<(), V::Error>
where
    A: Ord + Clone,
    V: TryOrd,
{
    if let Some(old) = store.get(&arg) {
        if value.try_equivalent(old)? {
            return Ok(());
        }
    }

    let mut plan = UpdatePlan::new();
    {
        let mut staged = StagedInserts::new();
        let left = store.below(&arg);
        let right = store.above(&arg);

        // The written point itself.
        if classify::is_maximum(&value, left.map(|(_, v)| v), right.map(|(_, v)| v))? {
            let slot = maxima
                .locate(store, &value, &arg)?
                .err()
                .expect("a point with a fresh value is never already indexed");
            staged.stage(slot, &arg, &value)?;
        }

        // Left neighbour: its right-hand side becomes the written point.
        if let Some((la, lv)) = left {
            let beyond = store.below(la).map(|(_, v)| v);
            let is_max = classify::is_maximum(lv, beyond, Some(&value))?;
            match (maxima.locate(store, lv, la)?, is_max) {
                (Err(slot), true) => staged.stage(slot, la, lv)?,
                (Ok(pos), false) => plan.stage_remove(pos),
                _ => {}
            }
        }

        // Right neighbour: its left-hand side becomes the written point.
        if let Some((ra, rv)) = right {
            let beyond = store.above(ra).map(|(_, v)| v);
            let is_max = classify::is_maximum(rv, Some(&value), beyond)?;
            match (maxima.locate(store, rv, ra)?, is_max) {
                (Err(slot), true) => staged.stage(slot, ra, rv)?,
                (Ok(pos), false) => plan.stage_remove(pos),
                _ => {}
            }
        }

        // The superseded entry, located while the store still holds the old
        // value so the index comparator sees a consistent view.
        if let Some(old) = store.get(&arg) {
            if let Ok(pos) = maxima.locate(store, old, &arg)? {
                plan.stage_remove(pos);
            }
        }

        staged.drain_into(&mut plan);
    }

    store.insert(arg, value);
    plan.apply(maxima);
    Ok(())
}
