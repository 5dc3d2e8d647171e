//! Puzzle solving command
//!
//! Builds a grid from a catalog puzzle or a custom seed word and path, then
//! finds and classifies every word in it.

use crate::core::{AdjacencyMap, Grid, Position, PuzzleError};
use crate::finder::{Classification, SearchOptions, WordFinder, classify_cornerstones};
use crate::puzzles::find_puzzle;
use crate::wordlists::Dictionary;
use log::warn;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// Where the grid comes from
pub enum PuzzleSource {
    /// A named puzzle from the static catalog
    Catalog(String),
    /// A seed word laid along an explicit path
    Custom { seed_word: String, path: Vec<Position> },
}

/// Configuration for solving a puzzle
pub struct SolveConfig {
    pub source: PuzzleSource,
    pub options: SearchOptions,
}

impl SolveConfig {
    #[must_use]
    pub fn catalog(name: impl Into<String>) -> Self {
        Self {
            source: PuzzleSource::Catalog(name.into()),
            options: SearchOptions::default(),
        }
    }

    #[must_use]
    pub fn custom(seed_word: impl Into<String>, path: Vec<Position>) -> Self {
        Self {
            source: PuzzleSource::Custom {
                seed_word: seed_word.into(),
                path,
            },
            options: SearchOptions::default(),
        }
    }
}

/// Result of solving a puzzle
pub struct SolveResult {
    pub name: String,
    pub seed_word: String,
    pub grid: Grid,
    pub all_words: BTreeSet<String>,
    pub classification: Classification,
    pub duration: Duration,
}

impl SolveResult {
    /// Check whether the seed word itself was discovered
    #[must_use]
    pub fn seed_found(&self) -> bool {
        self.all_words.contains(&self.seed_word)
    }
}

/// Solve a puzzle with the given word sets
///
/// # Errors
///
/// Returns an error if:
/// - The catalog puzzle does not exist or its path is invalid
/// - The custom seed word does not fit the custom path
pub fn solve_puzzle(
    config: SolveConfig,
    adjacency: &AdjacencyMap,
    dictionary: &Dictionary,
    cornerstones: &Dictionary,
) -> Result<SolveResult, PuzzleError> {
    let (name, seed_word, grid) = match config.source {
        PuzzleSource::Catalog(name) => {
            let puzzle = find_puzzle(&name)?;
            let grid = puzzle.build_grid(adjacency)?;
            (puzzle.name.to_string(), puzzle.seed_word.to_string(), grid)
        }
        PuzzleSource::Custom { seed_word, path } => {
            let grid = Grid::place_seed_word(&seed_word, &path)?;
            if let Err(e) = adjacency.validate_walk(&path) {
                warn!("{e}; the seed word may not be discoverable");
            }
            ("custom".to_string(), seed_word.to_ascii_uppercase(), grid)
        }
    };

    let start = Instant::now();
    let all_words = WordFinder::new(adjacency, dictionary)
        .with_options(config.options)
        .find_all_words(&grid);
    let classification = classify_cornerstones(&all_words, cornerstones);
    let duration = start.elapsed();

    Ok(SolveResult {
        name,
        seed_word,
        grid,
        all_words,
        classification,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{embedded_cornerstones, embedded_dictionary};

    #[test]
    fn solve_catalog_puzzle() {
        let map = AdjacencyMap::canonical();
        let dict = embedded_dictionary();
        let common = embedded_cornerstones();

        let result = solve_puzzle(SolveConfig::catalog("cornerstone"), &map, &dict, &common).unwrap();

        assert_eq!(result.name, "cornerstone");
        assert!(result.seed_found());
        assert_eq!(result.classification.total(), result.all_words.len());
        assert!(result.classification.is_cornerstone("CORE"));
    }

    #[test]
    fn solve_custom_puzzle() {
        let map = AdjacencyMap::canonical();
        let dict = Dictionary::from_words(["core", "corner", "stone", "cornerstones"]);
        let common = Dictionary::from_words(["stone"]);
        let config = SolveConfig::custom("cornerstones", vec![1, 5, 4, 8, 9, 13, 14, 10, 6, 2, 7, 11]);

        let result = solve_puzzle(config, &map, &dict, &common).unwrap();

        assert_eq!(result.seed_word, "CORNERSTONES");
        assert_eq!(result.all_words.len(), 4);
        assert_eq!(result.classification.cornerstone, vec!["STONE"]);
    }

    #[test]
    fn solve_unknown_puzzle_returns_error() {
        let map = AdjacencyMap::canonical();
        let dict = Dictionary::default();

        let result = solve_puzzle(SolveConfig::catalog("nowhere"), &map, &dict, &dict);
        assert!(matches!(result, Err(PuzzleError::UnknownPuzzle(_))));
    }

    #[test]
    fn solve_custom_length_mismatch_returns_error() {
        let map = AdjacencyMap::canonical();
        let dict = Dictionary::default();
        let config = SolveConfig::custom("corner", vec![1, 5, 4, 8, 9, 13, 14]);

        let result = solve_puzzle(config, &map, &dict, &dict);
        assert!(matches!(
            result,
            Err(PuzzleError::LengthMismatch {
                seed_len: 6,
                path_len: 7
            })
        ));
    }

    #[test]
    fn custom_path_that_is_not_a_walk_still_solves() {
        let map = AdjacencyMap::canonical();
        let dict = Dictionary::from_words(["cornerstones"]);
        // 2 → 4 is not a step, but placement itself is valid
        let config = SolveConfig::custom("cornerstones", vec![1, 2, 4, 5, 6, 7, 8, 9, 10, 11, 13, 14]);

        let result = solve_puzzle(config, &map, &dict, &dict).unwrap();
        assert!(!result.seed_found());
    }
}
