//! Adjacency table for the cross-shaped grid
//!
//! Each usable cell carries a bitmask of the cells a word may step to next.
//! The table is treated as authoritative configuration: it is validated once
//! on construction and its directionality is honoured exactly, so a table in
//! which A lists B but B does not list A permits A→B and forbids B→A.

use super::PuzzleError;
use super::grid::{GRID_SIZE, Position, USABLE_POSITIONS, is_usable};

/// Neighbour lists of the shipped game
///
/// Orthogonal and diagonal steps between usable cells (king moves), which
/// makes the relation symmetric.
const CANONICAL_ENTRIES: [(Position, &[Position]); 12] = [
    (1, &[2, 4, 5, 6]),
    (2, &[1, 5, 6, 7]),
    (4, &[1, 5, 8, 9]),
    (5, &[1, 2, 4, 6, 8, 9, 10]),
    (6, &[1, 2, 5, 7, 9, 10, 11]),
    (7, &[2, 6, 10, 11]),
    (8, &[4, 5, 9, 13]),
    (9, &[4, 5, 6, 8, 10, 13, 14]),
    (10, &[5, 6, 7, 9, 11, 13, 14]),
    (11, &[6, 7, 10, 14]),
    (13, &[8, 9, 10, 14]),
    (14, &[9, 10, 11, 13]),
];

/// Directed adjacency relation over grid positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMap {
    masks: [u16; GRID_SIZE],
}

impl AdjacencyMap {
    /// Build a map from `(position, neighbours)` entries
    ///
    /// Positions without an entry have no neighbours.
    ///
    /// # Errors
    /// Returns `PuzzleError` if:
    /// - A key or neighbour is not a usable position
    /// - A key appears twice, or a neighbour is repeated within one entry
    /// - A position lists itself
    ///
    /// # Examples
    /// ```
    /// use cornerstones::core::AdjacencyMap;
    ///
    /// let map = AdjacencyMap::from_entries(&[(1, &[2]), (2, &[])]).unwrap();
    /// assert!(map.is_adjacent(1, 2));
    /// assert!(!map.is_adjacent(2, 1));
    ///
    /// assert!(AdjacencyMap::from_entries(&[(0, &[1])]).is_err());
    /// ```
    pub fn from_entries(entries: &[(Position, &[Position])]) -> Result<Self, PuzzleError> {
        let mut masks = [0u16; GRID_SIZE];
        let mut seen_keys = 0u16;

        for &(pos, neighbours) in entries {
            if !is_usable(pos) {
                return Err(PuzzleError::UnusablePosition(pos));
            }
            if seen_keys & (1 << pos) != 0 {
                return Err(PuzzleError::DuplicatePosition(pos));
            }
            seen_keys |= 1 << pos;

            for &next in neighbours {
                if !is_usable(next) {
                    return Err(PuzzleError::UnusablePosition(next));
                }
                if next == pos {
                    return Err(PuzzleError::SelfLoop(pos));
                }
                if masks[pos] & (1 << next) != 0 {
                    return Err(PuzzleError::DuplicatePosition(next));
                }
                masks[pos] |= 1 << next;
            }
        }

        Ok(Self { masks })
    }

    /// The adjacency table used by the shipped game
    ///
    /// # Panics
    /// Will not panic - the built-in table is covered by tests.
    #[must_use]
    pub fn canonical() -> Self {
        Self::from_entries(&CANONICAL_ENTRIES).expect("canonical adjacency table is valid")
    }

    /// Neighbour bitmask of a position (bit `n` set when `n` is reachable)
    #[inline]
    #[must_use]
    pub fn mask(&self, pos: Position) -> u16 {
        self.masks.get(pos).copied().unwrap_or(0)
    }

    /// Neighbours of a position in ascending order
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        let mask = self.mask(pos);
        (0..GRID_SIZE).filter(move |&n| mask & (1 << n) != 0)
    }

    /// Check whether a single step `from → to` is permitted
    #[inline]
    #[must_use]
    pub fn is_adjacent(&self, from: Position, to: Position) -> bool {
        to < GRID_SIZE && self.mask(from) & (1 << to) != 0
    }

    /// Check whether every edge has a matching reverse edge
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        USABLE_POSITIONS
            .iter()
            .all(|&a| self.neighbors(a).all(|b| self.is_adjacent(b, a)))
    }

    /// Check that each consecutive pair of a path is an allowed step
    ///
    /// # Errors
    /// Returns `PuzzleError::PathNotConnected` naming the first missing step.
    pub fn validate_walk(&self, path: &[Position]) -> Result<(), PuzzleError> {
        for step in path.windows(2) {
            if !self.is_adjacent(step[0], step[1]) {
                return Err(PuzzleError::PathNotConnected {
                    from: step[0],
                    to: step[1],
                });
            }
        }
        Ok(())
    }
}

impl Default for AdjacencyMap {
    fn default() -> Self {
        Self::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::CORNER_POSITIONS;

    #[test]
    fn canonical_covers_all_usable_positions() {
        let map = AdjacencyMap::canonical();
        for pos in USABLE_POSITIONS {
            assert!(map.neighbors(pos).count() >= 4, "{pos} has too few neighbours");
            assert!(map.neighbors(pos).all(is_usable));
        }
        for pos in CORNER_POSITIONS {
            assert_eq!(map.neighbors(pos).count(), 0);
        }
    }

    #[test]
    fn canonical_is_symmetric() {
        assert!(AdjacencyMap::canonical().is_symmetric());
    }

    #[test]
    fn canonical_includes_diagonals() {
        let map = AdjacencyMap::canonical();
        assert!(map.is_adjacent(2, 7));
        assert!(map.is_adjacent(5, 10));
        assert!(!map.is_adjacent(1, 7));
        assert!(!map.is_adjacent(4, 13));
    }

    #[test]
    fn neighbors_are_ascending() {
        let map = AdjacencyMap::canonical();
        let n: Vec<_> = map.neighbors(5).collect();
        assert_eq!(n, vec![1, 2, 4, 6, 8, 9, 10]);
    }

    #[test]
    fn asymmetric_table_is_kept() {
        let map = AdjacencyMap::from_entries(&[(1, &[2, 5]), (2, &[6]), (5, &[1])]).unwrap();
        assert!(map.is_adjacent(1, 2));
        assert!(!map.is_adjacent(2, 1));
        assert!(map.is_adjacent(5, 1));
        assert!(!map.is_symmetric());
    }

    #[test]
    fn rejects_unusable_key_and_neighbour() {
        assert_eq!(
            AdjacencyMap::from_entries(&[(3, &[2])]),
            Err(PuzzleError::UnusablePosition(3))
        );
        assert_eq!(
            AdjacencyMap::from_entries(&[(2, &[3])]),
            Err(PuzzleError::UnusablePosition(3))
        );
        assert_eq!(
            AdjacencyMap::from_entries(&[(2, &[40])]),
            Err(PuzzleError::UnusablePosition(40))
        );
    }

    #[test]
    fn rejects_duplicates_and_self_loops() {
        assert_eq!(
            AdjacencyMap::from_entries(&[(1, &[2]), (1, &[5])]),
            Err(PuzzleError::DuplicatePosition(1))
        );
        assert_eq!(
            AdjacencyMap::from_entries(&[(1, &[2, 2])]),
            Err(PuzzleError::DuplicatePosition(2))
        );
        assert_eq!(
            AdjacencyMap::from_entries(&[(1, &[1])]),
            Err(PuzzleError::SelfLoop(1))
        );
    }

    #[test]
    fn validate_walk_reports_first_gap() {
        let map = AdjacencyMap::canonical();
        assert!(
            map.validate_walk(&[1, 5, 4, 8, 9, 13, 14, 10, 6, 2, 7, 11])
                .is_ok()
        );
        assert_eq!(
            map.validate_walk(&[1, 5, 14]),
            Err(PuzzleError::PathNotConnected { from: 5, to: 14 })
        );
    }

    #[test]
    fn out_of_range_lookups_are_empty() {
        let map = AdjacencyMap::canonical();
        assert_eq!(map.mask(99), 0);
        assert!(!map.is_adjacent(99, 1));
        assert!(!map.is_adjacent(1, 99));
    }
}
