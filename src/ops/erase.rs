//! Removal: planning and commit for `erase`.

use crate::maxima::MaximaIndex;
use crate::order::TryOrd;
use crate::plan::{StagedInserts, UpdatePlan};
use crate::store::PointStore;

use super::classify;

/// Removes the point at `arg`, if defined, and reclassifies its two former
/// neighbours against each other.
///
/// The neighbours are evaluated as if `arg` were already gone: each one's
/// far-side neighbour is unchanged and its near side becomes the other former
/// neighbour (or nothing).
///
/// # Errors
///
/// Propagates the first failed value comparison. Planning is read-only, so on
/// failure both the points and the maxima view are exactly as before.
pub fn erase_point<A, V>(
    store: &mut PointStore<A, V>,
    maxima: &mut MaximaIndex<A>,
    arg: &A,
) -> Result<(), V::Error>
where
    A: Ord + Clone,
    V: TryOrd,
{
    let Some(value) = store.get(arg) else {
        return Ok(());
    };

    let mut plan = UpdatePlan::new();
    {
        let mut staged = StagedInserts::new();

        // The erased point leaves the view if it is in it.
        if let Ok(pos) = maxima.locate(store, value, arg)? {
            plan.stage_remove(pos);
        }

        let left = store.below(arg);
        let right = store.above(arg);

        // Left neighbour: its right-hand side becomes the right neighbour.
        if let Some((la, lv)) = left {
            let beyond = store.below(la).map(|(_, v)| v);
            let is_max = classify::is_maximum(lv, beyond, right.map(|(_, v)| v))?;
            match (maxima.locate(store, lv, la)?, is_max) {
                (Err(slot), true) => staged.stage(slot, la, lv)?,
                (Ok(pos), false) => plan.stage_remove(pos),
                _ => {}
            }
        }

        // Right neighbour, symmetric.
        if let Some((ra, rv)) = right {
            let beyond = store.above(ra).map(|(_, v)| v);
            let is_max = classify::is_maximum(rv, left.map(|(_, v)| v), beyond)?;
            match (maxima.locate(store, rv, ra)?, is_max) {
                (Err(slot), true) => staged.stage(slot, ra, rv)?,
                (Ok(pos), false) => plan.stage_remove(pos),
                _ => {}
            }
        }

        staged.drain_into(&mut plan);
    }

    plan.apply(maxima);
    store.remove(arg);
    Ok(())
}
