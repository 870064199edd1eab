//! Rank Index: maps every element identity to its position in the target
//! order.
//!
//! A [`RankMap`] is built once per reorder and then turns the arrangement
//! into a buffer of ranks, which is what the sorter actually compares.

use std::collections::HashMap;
use std::hash::Hash;

use super::error::{InvalidArrangementError, InvalidTargetError, SwapSortError};

/// Mapping from element identity to its index in the target order.
///
/// The map is a bijection between the target's identities and `0..len`.
#[derive(Debug)]
pub struct RankMap<'a, T> {
    ranks: HashMap<&'a T, usize>,
}

/// An arrangement translated into ranks, along with the free element's
/// current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedArrangement {
    /// `ranks[i]` is the target index of the element at position `i`.
    pub ranks: Vec<usize>,
    /// Position of the free element.
    pub free: usize,
}

impl<'a, T: Eq + Hash> RankMap<'a, T> {
    /// Builds the rank map of `target`, which must describe an arrangement of
    /// `arrangement_len` elements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTargetError::LengthMismatch`] if the lengths differ and
    /// [`InvalidTargetError::Duplicate`] if `target` repeats an identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use swapsort::algorithms::rank_index::RankMap;
    ///
    /// let target = ['c', 'a', 'b'];
    /// let map = RankMap::build(3, &target).unwrap();
    ///
    /// assert_eq!(map.rank(&'a'), Some(1));
    /// assert_eq!(map.rank(&'z'), None);
    /// ```
    pub fn build(arrangement_len: usize, target: &'a [T]) -> Result<Self, InvalidTargetError> {
        if target.len() != arrangement_len {
            return Err(InvalidTargetError::LengthMismatch {
                arrangement: arrangement_len,
                target: target.len(),
            });
        }

        let mut ranks = HashMap::with_capacity(target.len());
        for (index, elem) in target.iter().enumerate() {
            if ranks.insert(elem, index).is_some() {
                return Err(InvalidTargetError::Duplicate { index });
            }
        }

        Ok(Self { ranks })
    }

    /// Returns the target index of `elem`, or [`None`] if the target does not
    /// contain it.
    #[inline]
    pub fn rank(&self, elem: &T) -> Option<usize> {
        self.ranks.get(elem).copied()
    }

    /// Number of identities in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Returns `true` if the target was empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Translates `arrangement` into ranks and locates `free` in it.
    ///
    /// Together with [`RankMap::build`] this proves the arrangement is a
    /// permutation of the target: every element has a rank and no rank is
    /// seen twice.
    ///
    /// # Errors
    ///
    /// - [`InvalidTargetError::Missing`] if an element has no rank.
    /// - [`InvalidArrangementError::Duplicate`] if an identity repeats.
    /// - [`InvalidArrangementError::MissingFree`] if `free` does not occur.
    pub fn rank_arrangement(
        &self,
        arrangement: &[T],
        free: &T,
    ) -> Result<RankedArrangement, SwapSortError> {
        debug_assert_eq!(arrangement.len(), self.len());

        let mut seen = vec![false; arrangement.len()];
        let mut ranks = Vec::with_capacity(arrangement.len());
        let mut free_idx = None;

        for (index, elem) in arrangement.iter().enumerate() {
            let rank = self
                .rank(elem)
                .ok_or(InvalidTargetError::Missing { index })?;

            if seen[rank] {
                return Err(InvalidArrangementError::Duplicate { index }.into());
            }
            seen[rank] = true;

            if elem == free {
                free_idx = Some(index);
            }
            ranks.push(rank);
        }

        let free = free_idx.ok_or(InvalidArrangementError::MissingFree)?;

        Ok(RankedArrangement { ranks, free })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_assigns_target_indices() {
        let target = [3, 1, 2, 0];
        let map = RankMap::build(4, &target).unwrap();

        assert_eq!(map.len(), 4);
        assert_eq!(map.rank(&3), Some(0));
        assert_eq!(map.rank(&1), Some(1));
        assert_eq!(map.rank(&2), Some(2));
        assert_eq!(map.rank(&0), Some(3));
        assert_eq!(map.rank(&7), None);
    }

    #[test]
    fn test_build_rejects_length_mismatch() {
        let target = [1, 0];
        assert_eq!(
            RankMap::build(3, &target).unwrap_err(),
            InvalidTargetError::LengthMismatch {
                arrangement: 3,
                target: 2
            }
        );
    }

    #[test]
    fn test_build_rejects_duplicate() {
        let target = [1, 1, 0];
        assert_eq!(
            RankMap::build(3, &target).unwrap_err(),
            InvalidTargetError::Duplicate { index: 1 }
        );
    }

    #[test]
    fn test_build_empty() {
        let target: [u32; 0] = [];
        let map = RankMap::build(0, &target).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_rank_arrangement() {
        let target = [3, 1, 2, 0];
        let map = RankMap::build(4, &target).unwrap();

        let ranked = map.rank_arrangement(&[1, 2, 0, 3], &0).unwrap();
        assert_eq!(ranked.ranks, vec![1, 2, 3, 0]);
        assert_eq!(ranked.free, 2);
    }

    #[test]
    fn test_rank_arrangement_missing_element() {
        let target = [3, 1, 2, 0];
        let map = RankMap::build(4, &target).unwrap();

        assert_eq!(
            map.rank_arrangement(&[1, 2, 0, 9], &0).unwrap_err(),
            SwapSortError::InvalidTarget(InvalidTargetError::Missing { index: 3 })
        );
    }

    #[test]
    fn test_rank_arrangement_duplicate_element() {
        let target = [3, 1, 2, 0];
        let map = RankMap::build(4, &target).unwrap();

        assert_eq!(
            map.rank_arrangement(&[1, 2, 1, 0], &0).unwrap_err(),
            SwapSortError::InvalidArrangement(InvalidArrangementError::Duplicate { index: 2 })
        );
    }

    #[test]
    fn test_rank_arrangement_without_free() {
        let target = [3, 1, 2];
        let map = RankMap::build(3, &target).unwrap();

        assert_eq!(
            map.rank_arrangement(&[1, 2, 3], &0).unwrap_err(),
            SwapSortError::InvalidArrangement(InvalidArrangementError::MissingFree)
        );
    }
}
