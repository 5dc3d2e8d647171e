//! Verify the puzzle catalog
//!
//! Checks every catalog puzzle against the adjacency map and word lists: the
//! placement path must walk the map and the seed word must be discoverable.

use crate::core::AdjacencyMap;
use crate::finder::{WordFinder, classify_cornerstones};
use crate::puzzles::PuzzleDef;
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use std::time::{Duration, Instant};

/// Outcome of checking a single puzzle
#[derive(Debug, Clone)]
pub struct PuzzleCheck {
    pub name: String,
    pub seed_word: String,
    /// Why the grid could not be built, if it could not
    pub error: Option<String>,
    pub seed_found: bool,
    pub word_count: usize,
    pub cornerstone_count: usize,
    pub duration: Duration,
}

impl PuzzleCheck {
    /// Check whether the puzzle is playable as configured
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.error.is_none() && self.seed_found
    }
}

/// Results of checking a set of puzzles
#[derive(Debug)]
pub struct VerifyReport {
    pub checks: Vec<PuzzleCheck>,
    pub total_time: Duration,
}

impl VerifyReport {
    /// Number of puzzles that passed
    #[must_use]
    pub fn passed(&self) -> usize {
        self.checks.iter().filter(|c| c.passed()).count()
    }

    /// Number of puzzles that failed
    #[must_use]
    pub fn failed(&self) -> usize {
        self.checks.len() - self.passed()
    }

    /// Check whether every puzzle passed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(PuzzleCheck::passed)
    }

    /// Puzzle with the most discoverable words
    #[must_use]
    pub fn richest(&self) -> Option<&PuzzleCheck> {
        self.checks
            .iter()
            .filter(|c| c.error.is_none())
            .max_by_key(|c| c.word_count)
    }

    /// Puzzle with the fewest discoverable words
    #[must_use]
    pub fn sparsest(&self) -> Option<&PuzzleCheck> {
        self.checks
            .iter()
            .filter(|c| c.error.is_none())
            .min_by_key(|c| c.word_count)
    }
}

/// Check each puzzle, optionally showing a progress bar
pub fn verify_catalog(
    puzzles: &[PuzzleDef],
    adjacency: &AdjacencyMap,
    dictionary: &Dictionary,
    cornerstones: &Dictionary,
    show_progress: bool,
) -> VerifyReport {
    let pb = if show_progress {
        let pb = ProgressBar::new(puzzles.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░");
        pb.set_style(style);
        pb
    } else {
        ProgressBar::hidden()
    };

    let finder = WordFinder::new(adjacency, dictionary);
    let total_start = Instant::now();
    let mut checks = Vec::with_capacity(puzzles.len());

    for puzzle in puzzles {
        pb.set_message(puzzle.name);
        let start = Instant::now();

        let check = match puzzle.build_grid(adjacency) {
            Ok(grid) => {
                let words = finder.find_all_words(&grid);
                let split = classify_cornerstones(&words, cornerstones);
                let seed_found = words.contains(puzzle.seed_word);
                if !seed_found {
                    warn!(
                        "Seed word {} is not discoverable in puzzle {}",
                        puzzle.seed_word, puzzle.name
                    );
                }
                PuzzleCheck {
                    name: puzzle.name.to_string(),
                    seed_word: puzzle.seed_word.to_string(),
                    error: None,
                    seed_found,
                    word_count: words.len(),
                    cornerstone_count: split.cornerstone.len(),
                    duration: start.elapsed(),
                }
            }
            Err(e) => {
                warn!("Puzzle {} is invalid: {e}", puzzle.name);
                PuzzleCheck {
                    name: puzzle.name.to_string(),
                    seed_word: puzzle.seed_word.to_string(),
                    error: Some(e.to_string()),
                    seed_found: false,
                    word_count: 0,
                    cornerstone_count: 0,
                    duration: start.elapsed(),
                }
            }
        };

        checks.push(check);
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    VerifyReport {
        checks,
        total_time: total_start.elapsed(),
    }
}
