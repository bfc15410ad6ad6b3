//! Bounded bookkeeping for a single update.
//!
//! One mutation reclassifies at most three points, so every action the commit
//! phase will take fits in fixed-size buffers populated during planning.
//! Committing performs pure position arithmetic on the maxima view, with no
//! comparisons and no lookups, so once planning has succeeded the update can
//! no longer fail partway.

use std::cmp::Ordering;

use crate::maxima::{MaximaIndex, maxima_cmp};
use crate::order::TryOrd;

/// Upper bound on staged insertions/removals per update.
///
/// `set_value` touches the written point and its two neighbours; `erase`
/// touches the erased point and its two neighbours. Either way at most three
/// entries of the maxima view change in each direction.
pub const MAX_STAGED: usize = 3;

/// Actions to perform on the maxima view, recorded during planning.
///
/// Positions are slots in the view *before* the update; [`apply`](Self::apply)
/// translates them as it goes.
pub struct UpdatePlan<A> {
    inserts: [Option<(usize, A)>; MAX_STAGED],
    n_inserts: usize,
    removes: [Option<usize>; MAX_STAGED],
    n_removes: usize,
}

impl<A> UpdatePlan<A> {
    /// Creates an empty plan.
    pub const fn new() -> Self {
        Self {
            inserts: [None, None, None],
            n_inserts: 0,
            removes: [None; MAX_STAGED],
            n_removes: 0,
        }
    }

    /// Records the removal of the entry at pre-update position `pos`.
    pub fn stage_remove(&mut self, pos: usize) {
        self.removes[self.n_removes] = Some(pos);
        self.n_removes += 1;
    }

    /// Records the insertion of `arg` at pre-update slot `pos`.
    ///
    /// Push order is significant: insertions targeting the same slot must be
    /// pushed in their final relative order (see [`StagedInserts`]).
    pub fn push_insert(&mut self, pos: usize, arg: A) {
        self.inserts[self.n_inserts] = Some((pos, arg));
        self.n_inserts += 1;
    }

    /// Commits the plan. Infallible.
    ///
    /// Removals are applied highest position first, so earlier removals do not
    /// disturb later ones. Each insertion slot is then shifted left by the
    /// removals below it and right by the insertions already applied.
    pub fn apply(self, index: &mut MaximaIndex<A>) {
        let mut removes = self.removes;
        removes.sort_unstable();
        for pos in removes.into_iter().rev().flatten() {
            index.remove_at(pos);
        }
        for (applied, (pos, arg)) in self.inserts.into_iter().flatten().enumerate() {
            let shift = removes.iter().flatten().filter(|r| **r < pos).count();
            index.insert_at(pos - shift + applied, arg);
        }
    }
}

/// Insertion candidates collected during planning, kept in final order.
///
/// Candidates are borrowed `(slot, argument, value)` triples; the value of
/// the written point is not yet in the store, so values travel alongside the
/// keys here. When two candidates target the same slot their relative order
/// is decided by the maxima ordering itself. That comparison is fallible,
/// which is why ordering happens now and not at commit.
pub struct StagedInserts<'a, A, V> {
    slots: [Option<(usize, &'a A, &'a V)>; MAX_STAGED],
    len: usize,
}

impl<'a, A: Ord, V: TryOrd> StagedInserts<'a, A, V> {
    /// Creates an empty candidate set.
    pub const fn new() -> Self {
        Self {
            slots: [None; MAX_STAGED],
            len: 0,
        }
    }

    /// Adds a candidate, keeping candidates sorted by `(slot, maxima order)`.
    ///
    /// # Errors
    ///
    /// Propagates a failed value comparison while ordering same-slot
    /// candidates; no state outside this buffer is affected.
    pub fn stage(&mut self, pos: usize, arg: &'a A, value: &'a V) -> Result<(), V::Error> {
        let mut at = self.len;
        for (i, slot) in self.slots.iter().enumerate().take(self.len) {
            let (p, a, v) = slot.expect("staged slots are populated up to len");
            let ord = match pos.cmp(&p) {
                Ordering::Equal => maxima_cmp(value, arg, v, a)?,
                other => other,
            };
            if ord == Ordering::Less {
                at = i;
                break;
            }
        }
        self.slots.copy_within(at..self.len, at + 1);
        self.slots[at] = Some((pos, arg, value));
        self.len += 1;
        Ok(())
    }

    /// Moves the ordered candidates into `plan`, cloning their keys.
    pub fn drain_into(self, plan: &mut UpdatePlan<A>)
    where
        A: Clone,
    {
        for (pos, arg, _) in self.slots.into_iter().flatten() {
            plan.push_insert(pos, arg.clone());
        }
    }
}
