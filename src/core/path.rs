//! Hamiltonian letter-placement paths

use super::PuzzleError;
use super::adjacency::AdjacencyMap;
use super::grid::{Position, USABLE_POSITIONS, is_usable};

/// Number of positions in a full placement path
pub const PATH_LENGTH: usize = USABLE_POSITIONS.len();

/// An ordering of all 12 usable positions that walks the adjacency map
///
/// Seed words are laid out along these paths, so a validated path guarantees
/// that the seed word itself can be traced back out of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HamiltonianPath([Position; PATH_LENGTH]);

impl HamiltonianPath {
    /// Validate a path against an adjacency map
    ///
    /// # Errors
    /// Returns `PuzzleError` if:
    /// - A position is a corner or out of range
    /// - A position repeats (so some usable position is missing)
    /// - Two consecutive positions are not adjacent in `adjacency`
    ///
    /// # Examples
    /// ```
    /// use cornerstones::core::{AdjacencyMap, HamiltonianPath};
    ///
    /// let map = AdjacencyMap::canonical();
    /// let path = HamiltonianPath::new([1, 5, 4, 8, 9, 13, 14, 10, 6, 2, 7, 11], &map).unwrap();
    /// assert_eq!(path.positions()[0], 1);
    ///
    /// assert!(HamiltonianPath::new([1, 2, 4, 5, 6, 7, 8, 9, 10, 11, 13, 14], &map).is_err());
    /// ```
    pub fn new(positions: [Position; PATH_LENGTH], adjacency: &AdjacencyMap) -> Result<Self, PuzzleError> {
        let mut seen = 0u16;
        for &pos in &positions {
            if !is_usable(pos) {
                return Err(PuzzleError::UnusablePosition(pos));
            }
            if seen & (1 << pos) != 0 {
                return Err(PuzzleError::DuplicatePosition(pos));
            }
            seen |= 1 << pos;
        }

        adjacency.validate_walk(&positions)?;
        Ok(Self(positions))
    }

    /// The positions in placement order
    #[inline]
    #[must_use]
    pub const fn positions(&self) -> &[Position; PATH_LENGTH] {
        &self.0
    }
}

impl AsRef<[Position]> for HamiltonianPath {
    fn as_ref(&self) -> &[Position] {
        &self.0
    }
}
