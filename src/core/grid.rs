//! Cross-shaped letter grid
//!
//! The board is a 4x4 addressable space where only the 12 cells of the
//! plus shape hold letters:
//!
//! ```text
//!  .  1  2  .
//!  4  5  6  7
//!  8  9 10 11
//!  . 13 14  .
//! ```

use super::PuzzleError;
use std::fmt;

/// Index of a cell in the 4x4 grid (0-15)
pub type Position = usize;

/// Number of addressable cells
pub const GRID_SIZE: usize = 16;

/// Width (and height) of the addressable square
pub const GRID_WIDTH: usize = 4;

/// Cells that hold letters, in ascending order
pub const USABLE_POSITIONS: [Position; 12] = [1, 2, 4, 5, 6, 7, 8, 9, 10, 11, 13, 14];

/// Cells that are always empty
pub const CORNER_POSITIONS: [Position; 4] = [0, 3, 12, 15];

/// Bitmask with one bit set per usable position
pub(crate) const USABLE_MASK: u16 = {
    let mut mask = 0u16;
    let mut i = 0;
    while i < USABLE_POSITIONS.len() {
        mask |= 1 << USABLE_POSITIONS[i];
        i += 1;
    }
    mask
};

/// Check whether a position is one of the 12 letter-holding cells
#[inline]
#[must_use]
pub const fn is_usable(pos: Position) -> bool {
    pos < GRID_SIZE && USABLE_MASK & (1 << pos) != 0
}

/// A filled or partially filled puzzle grid
///
/// Letters are stored as uppercase ASCII bytes. Corner cells are always `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    cells: [Option<u8>; GRID_SIZE],
}

impl Grid {
    /// Create an empty grid
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Place a seed word along a path, one letter per position
    ///
    /// Assigns `path[i]` the letter `seed[i]`. The seed is uppercased first.
    /// Positions not on the path stay empty.
    ///
    /// # Errors
    /// Returns `PuzzleError` if:
    /// - The seed word and path lengths differ
    /// - The seed contains a non-alphabetic character
    /// - The path names a corner or out-of-range position
    /// - The path repeats a position
    ///
    /// # Examples
    /// ```
    /// use cornerstones::core::Grid;
    ///
    /// let path = [1, 5, 4, 8, 9, 13, 14, 10, 6, 2, 7, 11];
    /// let grid = Grid::place_seed_word("cornerstones", &path).unwrap();
    /// assert_eq!(grid.letter_at(1), Some('C'));
    /// assert_eq!(grid.letter_at(0), None);
    ///
    /// assert!(Grid::place_seed_word("corner", &path).is_err());
    /// ```
    pub fn place_seed_word(seed: &str, path: &[Position]) -> Result<Self, PuzzleError> {
        let seed_len = seed.chars().count();
        if seed_len != path.len() {
            return Err(PuzzleError::LengthMismatch {
                seed_len,
                path_len: path.len(),
            });
        }

        if let Some(bad) = seed.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(PuzzleError::InvalidLetter(bad));
        }

        let mut grid = Self::empty();
        for (&pos, letter) in path.iter().zip(seed.bytes()) {
            if !is_usable(pos) {
                return Err(PuzzleError::UnusablePosition(pos));
            }
            if grid.cells[pos].is_some() {
                return Err(PuzzleError::DuplicatePosition(pos));
            }
            grid.cells[pos] = Some(letter.to_ascii_uppercase());
        }

        Ok(grid)
    }

    /// Raw letter byte at a position, if any
    #[inline]
    #[must_use]
    pub fn byte_at(&self, pos: Position) -> Option<u8> {
        self.cells.get(pos).copied().flatten()
    }

    /// Letter at a position, if any
    #[inline]
    #[must_use]
    pub fn letter_at(&self, pos: Position) -> Option<char> {
        self.byte_at(pos).map(char::from)
    }

    /// Check whether a position holds a letter
    #[inline]
    #[must_use]
    pub fn is_filled(&self, pos: Position) -> bool {
        self.byte_at(pos).is_some()
    }

    /// Number of cells holding a letter
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// The grid as four rows of optional letters
    #[must_use]
    pub fn rows(&self) -> [[Option<char>; GRID_WIDTH]; GRID_WIDTH] {
        let mut rows = [[None; GRID_WIDTH]; GRID_WIDTH];
        for (pos, cell) in self.cells.iter().enumerate() {
            rows[pos / GRID_WIDTH][pos % GRID_WIDTH] = cell.map(char::from);
        }
        rows
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row
                .iter()
                .map(|cell| cell.map_or_else(|| ".".to_string(), |c| c.to_string()))
                .collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATH: [Position; 12] = [1, 5, 4, 8, 9, 13, 14, 10, 6, 2, 7, 11];

    #[test]
    fn usable_positions_match_mask() {
        for pos in 0..GRID_SIZE {
            assert_eq!(is_usable(pos), USABLE_POSITIONS.contains(&pos));
        }
        for pos in CORNER_POSITIONS {
            assert!(!is_usable(pos));
        }
        assert!(!is_usable(16));
        assert!(!is_usable(99));
    }

    #[test]
    fn place_assigns_letters_along_path() {
        let seed = "CORNERSTONES";
        let grid = Grid::place_seed_word(seed, &PATH).unwrap();

        for (i, &pos) in PATH.iter().enumerate() {
            assert_eq!(grid.byte_at(pos), Some(seed.as_bytes()[i]));
        }
        for pos in CORNER_POSITIONS {
            assert!(!grid.is_filled(pos));
        }
        assert_eq!(grid.filled_count(), 12);
    }

    #[test]
    fn place_uppercases_seed() {
        let grid = Grid::place_seed_word("cornerstones", &PATH).unwrap();
        assert_eq!(grid.letter_at(1), Some('C'));
        assert_eq!(grid.letter_at(11), Some('S'));
    }

    #[test]
    fn place_rejects_length_mismatch() {
        assert_eq!(
            Grid::place_seed_word("CORNERSTONE", &PATH),
            Err(PuzzleError::LengthMismatch {
                seed_len: 11,
                path_len: 12
            })
        );
        assert_eq!(
            Grid::place_seed_word("CORNERSTONES", &PATH[..11]),
            Err(PuzzleError::LengthMismatch {
                seed_len: 12,
                path_len: 11
            })
        );
    }

    #[test]
    fn place_rejects_invalid_letters() {
        assert_eq!(
            Grid::place_seed_word("CORNER STONE", &PATH),
            Err(PuzzleError::InvalidLetter(' '))
        );
        assert_eq!(
            Grid::place_seed_word("CORNERST0NES", &PATH),
            Err(PuzzleError::InvalidLetter('0'))
        );
    }

    #[test]
    fn place_rejects_corner_positions() {
        let mut path = PATH;
        path[3] = 12;
        assert_eq!(
            Grid::place_seed_word("CORNERSTONES", &path),
            Err(PuzzleError::UnusablePosition(12))
        );
    }

    #[test]
    fn place_rejects_repeated_positions() {
        let mut path = PATH;
        path[11] = 1;
        assert_eq!(
            Grid::place_seed_word("CORNERSTONES", &path),
            Err(PuzzleError::DuplicatePosition(1))
        );
    }

    #[test]
    fn partial_placement_leaves_other_cells_empty() {
        let grid = Grid::place_seed_word("CORE", &[1, 5, 4, 8]).unwrap();
        assert_eq!(grid.filled_count(), 4);
        assert!(!grid.is_filled(9));
    }

    #[test]
    fn display_renders_cross() {
        let grid = Grid::place_seed_word("CORNERSTONES", &PATH).unwrap();
        let expected = ". C N .\nR O O E\nN E T S\n. R S .";
        assert_eq!(grid.to_string(), expected);
    }
}
