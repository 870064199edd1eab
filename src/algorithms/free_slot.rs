//! Free-slot reordering: rearranges an array in place when every exchange
//! must involve a single designated free element, the way containers are
//! shuffled through one empty bay.
//!
//! The sorter parks the free element at the last position, quicksorts the
//! remaining positions by target rank using [triadic exchanges] routed
//! through the free slot, and finally walks the free element to its own
//! target position.
//!
//! [triadic exchanges]: FreeSlotSorter#triadic-exchange

use std::hash::Hash;

use super::error::SwapSortError;
use super::exchange::{Exchange, ExchangeSink};
use super::rank_index::{RankMap, RankedArrangement};
use crate::tracing_helpers::{debug_log, trace_log};

/// Reorders `arrangement` in place so that it equals `target`, moving
/// elements only by exchanging them with `free`.
///
/// Shorthand for [`FreeSlotSorter::reorder`].
///
/// # Errors
///
/// Returns [`SwapSortError`] without touching `arrangement` if `target` is
/// not a permutation of it, or if `free` does not occur in it.
///
/// # Examples
///
/// ```
/// use swapsort::prelude::*;
///
/// let mut arr = [1, 2, 0, 3];
/// reorder(&mut arr, &[3, 1, 2, 0], &0)?;
///
/// assert_eq!(arr, [3, 1, 2, 0]);
/// # Result::<(), SwapSortError>::Ok(())
/// ```
pub fn reorder<T: Eq + Hash>(
    arrangement: &mut [T],
    target: &[T],
    free: &T,
) -> Result<(), SwapSortError> {
    reorder_with(arrangement, target, free, &mut ())
}

/// Like [`reorder`], reporting every pairwise exchange to `sink`.
///
/// # Examples
///
/// ```
/// use swapsort::prelude::*;
///
/// let mut arr = [1, 2, 3, 0];
/// let mut trace: Vec<Exchange> = Vec::new();
/// reorder_traced(&mut arr, &[1, 2, 0, 3], &0, &mut trace)?;
///
/// assert_eq!(arr, [1, 2, 0, 3]);
/// assert_eq!(trace, [Exchange { free: 3, other: 2 }]);
/// # Result::<(), SwapSortError>::Ok(())
/// ```
pub fn reorder_traced<T: Eq + Hash, S: ExchangeSink>(
    arrangement: &mut [T],
    target: &[T],
    free: &T,
    sink: &mut S,
) -> Result<(), SwapSortError> {
    reorder_with(arrangement, target, free, sink)
}

/// Reorders arrangements through a configured free element.
///
/// # Triadic exchange
///
/// Two positions `i` and `j`, neither holding the free element, are swapped
/// through the free slot `k` with three pairwise exchanges `(k, i)`,
/// `(i, j)`, `(j, k)`. Each one involves the free element, and when the
/// sequence ends the free element is back at `k`.
///
/// # Time Complexity
///
/// Takes *O*(*n log n*) exchanges on average: the quicksort performs
/// *O*(*n log n*) comparisons and each swap costs three exchanges. Parking and
/// placing the free element cost *O*(*n*) adjacent exchanges each.
///
/// # Examples
///
/// ```
/// use swapsort::prelude::*;
///
/// let sorter = FreeSlotSorter::new("_");
///
/// let mut bays = ["b", "_", "c", "a"];
/// sorter.reorder(&mut bays, &["a", "b", "c", "_"])?;
///
/// assert_eq!(bays, ["a", "b", "c", "_"]);
/// # Result::<(), SwapSortError>::Ok(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeSlotSorter<T> {
    free: T,
}

impl<T: Eq + Hash> FreeSlotSorter<T> {
    /// Creates a sorter that moves elements through `free`.
    #[inline]
    pub const fn new(free: T) -> Self {
        Self { free }
    }

    /// Returns the free element's identity.
    #[inline]
    pub const fn free(&self) -> &T {
        &self.free
    }

    /// Reorders `arrangement` in place so that it equals `target`.
    ///
    /// # Errors
    ///
    /// See [`reorder`].
    pub fn reorder(&self, arrangement: &mut [T], target: &[T]) -> Result<(), SwapSortError> {
        reorder_with(arrangement, target, &self.free, &mut ())
    }

    /// Reorders `arrangement` in place, reporting every pairwise exchange to
    /// `sink`.
    ///
    /// # Errors
    ///
    /// See [`reorder`]. Nothing is reported on error.
    pub fn reorder_traced<S: ExchangeSink>(
        &self,
        arrangement: &mut [T],
        target: &[T],
        sink: &mut S,
    ) -> Result<(), SwapSortError> {
        reorder_with(arrangement, target, &self.free, sink)
    }
}

fn reorder_with<T: Eq + Hash, S: ExchangeSink>(
    arrangement: &mut [T],
    target: &[T],
    free: &T,
    sink: &mut S,
) -> Result<(), SwapSortError> {
    let map = RankMap::build(arrangement.len(), target)?;
    let RankedArrangement { ranks, free: free_idx } = map.rank_arrangement(arrangement, free)?;

    let n = ranks.len();
    let free_rank = ranks[free_idx];

    debug_log!(len = n, free = free_idx, free_rank, "reorder start");

    let mut slots = Slots {
        elems: arrangement,
        ranks,
        free: free_idx,
        sink,
    };

    // With the free element parked at the end, `[0, n - 2]` never contains it.
    slots.move_free_to(n - 1);
    if n >= 2 {
        slots.quicksort(0, n - 2);
    }
    slots.move_free_to(free_rank);

    debug_assert!(slots.ranks.iter().enumerate().all(|(i, &r)| i == r));
    debug_log!(len = n, "reorder done");

    Ok(())
}

/// The arrangement being reordered, its ranks and the free slot index.
///
/// `elems` and `ranks` are always permuted together.
struct Slots<'a, T, S> {
    elems: &'a mut [T],
    ranks: Vec<usize>,
    free: usize,
    sink: &'a mut S,
}

impl<T, S: ExchangeSink> Slots<'_, T, S> {
    /// Exchanges the free element with position `other`.
    #[inline]
    fn step(&mut self, other: usize) {
        let free = self.free;
        self.elems.swap(free, other);
        self.ranks.swap(free, other);
        self.free = other;
        self.sink.record(Exchange { free, other });
    }

    /// Walks the free element to `target` one adjacent exchange at a time.
    fn move_free_to(&mut self, target: usize) {
        debug_assert!(target < self.elems.len());

        while self.free < target {
            self.step(self.free + 1);
        }
        while self.free > target {
            self.step(self.free - 1);
        }
    }

    /// Swaps positions `i` and `j` through the free slot, leaving the free
    /// element where it started.
    fn exchange(&mut self, i: usize, j: usize) {
        debug_assert!(i != j, "exchange of a position with itself");
        debug_assert!(
            i != self.free && j != self.free,
            "exchange would move the free element"
        );

        let k = self.free;
        self.step(i);
        self.step(j);
        self.step(k);
    }

    /// Quicksorts `[lo, hi]` by rank.
    ///
    /// Recurses into the smaller side only, so the stack depth stays
    /// logarithmic even on unlucky pivots.
    fn quicksort(&mut self, mut lo: usize, mut hi: usize) {
        while lo < hi {
            let split = self.partition(lo, hi);

            if split - lo < hi - split {
                if split > lo {
                    self.quicksort(lo, split - 1);
                }
                lo = split + 1;
            } else {
                if split < hi {
                    self.quicksort(split + 1, hi);
                }
                if split == lo {
                    break;
                }
                hi = split - 1;
            }
        }
    }

    /// Partitions `[l, r]` around the median of the ranks at `l`, the middle
    /// and `r`, returning the pivot's final position.
    ///
    /// Ranks are distinct, so the pivot is an element of the range and ends up
    /// where the cursors meet.
    fn partition(&mut self, mut l: usize, mut r: usize) -> usize {
        debug_assert!(
            self.free < l || self.free > r,
            "free slot inside the active range"
        );

        let pivot = median_of_three(self.ranks[l], self.ranks[l + (r - l) / 2], self.ranks[r]);

        loop {
            while self.ranks[l] < pivot && l < r {
                l += 1;
            }
            while self.ranks[r] > pivot && l < r {
                r -= 1;
            }
            if l == r {
                break;
            }
            self.exchange(l, r);
        }

        trace_log!(pivot, split = l, "partitioned");
        l
    }
}

#[inline]
fn median_of_three(a: usize, b: usize, c: usize) -> usize {
    a.min(b).max(a.max(b).min(c))
}
