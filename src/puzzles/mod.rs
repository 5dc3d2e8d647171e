//! Static puzzle catalog
//!
//! Pre-validated Hamiltonian placement paths and the named puzzles that lay
//! a seed word along one of them.

use crate::core::{AdjacencyMap, Grid, HamiltonianPath, PATH_LENGTH, Position, PuzzleError};

/// Placement orders through all 12 usable positions
///
/// Every consecutive pair is adjacent under `AdjacencyMap::canonical()`.
pub const PATHS: [[Position; PATH_LENGTH]; 8] = [
    [1, 5, 4, 8, 9, 13, 14, 10, 6, 2, 7, 11],
    [8, 13, 14, 9, 5, 4, 1, 2, 6, 10, 7, 11],
    [4, 9, 6, 1, 2, 5, 8, 13, 14, 10, 11, 7],
    [10, 14, 9, 13, 8, 4, 1, 5, 2, 7, 11, 6],
    [1, 6, 7, 2, 5, 9, 10, 11, 14, 13, 8, 4],
    [2, 5, 1, 4, 9, 14, 11, 6, 7, 10, 13, 8],
    [14, 11, 7, 10, 13, 9, 8, 4, 5, 6, 1, 2],
    [2, 7, 10, 11, 14, 13, 9, 6, 1, 4, 8, 5],
];

/// A named puzzle: a seed word and the path it is laid along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleDef {
    pub name: &'static str,
    pub seed_word: &'static str,
    pub path_index: usize,
}

/// All shipped puzzles
pub const PUZZLES: &[PuzzleDef] = &[
    PuzzleDef {
        name: "cornerstone",
        seed_word: "CORNERSTONES",
        path_index: 0,
    },
    PuzzleDef {
        name: "storm",
        seed_word: "THUNDERSTORM",
        path_index: 1,
    },
    PuzzleDef {
        name: "orchard",
        seed_word: "STRAWBERRIES",
        path_index: 2,
    },
    PuzzleDef {
        name: "darkroom",
        seed_word: "PHOTOGRAPHER",
        path_index: 3,
    },
    PuzzleDef {
        name: "aisle",
        seed_word: "SUPERMARKETS",
        path_index: 4,
    },
    PuzzleDef {
        name: "library",
        seed_word: "DICTIONARIES",
        path_index: 5,
    },
    PuzzleDef {
        name: "blueprint",
        seed_word: "ARCHITECTURE",
        path_index: 6,
    },
    PuzzleDef {
        name: "scaffold",
        seed_word: "CONSTRUCTION",
        path_index: 7,
    },
    PuzzleDef {
        name: "songbird",
        seed_word: "NIGHTINGALES",
        path_index: 0,
    },
    PuzzleDef {
        name: "reunion",
        seed_word: "GRANDPARENTS",
        path_index: 3,
    },
];

impl PuzzleDef {
    /// The placement path, validated against `adjacency`
    ///
    /// # Errors
    /// Returns `PuzzleError::PathIndexOutOfRange` for a bad index, or the
    /// path validation error if the path does not walk `adjacency`.
    pub fn path(&self, adjacency: &AdjacencyMap) -> Result<HamiltonianPath, PuzzleError> {
        let positions = PATHS
            .get(self.path_index)
            .ok_or(PuzzleError::PathIndexOutOfRange(self.path_index))?;
        HamiltonianPath::new(*positions, adjacency)
    }

    /// Lay the seed word out along the validated path
    ///
    /// # Errors
    /// Returns `PuzzleError` if the path is invalid or the seed word does not fit it.
    ///
    /// # Examples
    /// ```
    /// use cornerstones::core::AdjacencyMap;
    /// use cornerstones::puzzles::find_puzzle;
    ///
    /// let puzzle = find_puzzle("cornerstone").unwrap();
    /// let grid = puzzle.build_grid(&AdjacencyMap::canonical()).unwrap();
    /// assert_eq!(grid.filled_count(), 12);
    /// ```
    pub fn build_grid(&self, adjacency: &AdjacencyMap) -> Result<Grid, PuzzleError> {
        let path = self.path(adjacency)?;
        Grid::place_seed_word(self.seed_word, path.as_ref())
    }
}

/// Look up a catalog puzzle by name, ignoring case
///
/// # Errors
/// Returns `PuzzleError::UnknownPuzzle` if no puzzle has that name.
pub fn find_puzzle(name: &str) -> Result<&'static PuzzleDef, PuzzleError> {
    PUZZLES
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| PuzzleError::UnknownPuzzle(name.to_string()))
}

/// Pick a catalog puzzle at random
#[must_use]
pub fn random_puzzle() -> &'static PuzzleDef {
    use rand::prelude::IndexedRandom;

    PUZZLES.choose(&mut rand::rng()).unwrap_or(&PUZZLES[0])
}
