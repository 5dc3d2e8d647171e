//! Benchmark command
//!
//! Times the word finder across catalog grids in each search mode.

use crate::core::{AdjacencyMap, Grid, PuzzleError};
use crate::finder::{SearchOptions, WordFinder};
use crate::puzzles::PuzzleDef;
use crate::wordlists::Dictionary;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// Search modes compared by the benchmark
pub const MODES: [SearchOptions; 4] = [
    SearchOptions::EXHAUSTIVE,
    SearchOptions {
        parallel: false,
        prune_prefixes: true,
    },
    SearchOptions {
        parallel: true,
        prune_prefixes: false,
    },
    SearchOptions {
        parallel: true,
        prune_prefixes: true,
    },
];

/// Timing of one search mode
pub struct ModeTiming {
    pub options: SearchOptions,
    pub total: Duration,
    pub per_grid: Duration,
    pub words_found: usize,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub grids: usize,
    pub rounds: usize,
    pub timings: Vec<ModeTiming>,
    /// Every mode returned the same words for every grid
    pub consistent: bool,
}

impl BenchmarkResult {
    /// Fastest mode, if any were timed
    #[must_use]
    pub fn fastest(&self) -> Option<&ModeTiming> {
        self.timings.iter().min_by_key(|t| t.total)
    }
}

/// Run the finder over each puzzle `rounds` times per mode
///
/// # Errors
///
/// Returns an error if a puzzle's grid cannot be built.
pub fn run_benchmark(
    puzzles: &[PuzzleDef],
    rounds: usize,
    adjacency: &AdjacencyMap,
    dictionary: &Dictionary,
) -> Result<BenchmarkResult, PuzzleError> {
    let grids = puzzles
        .iter()
        .map(|p| p.build_grid(adjacency))
        .collect::<Result<Vec<Grid>, _>>()?;
    let rounds = rounds.max(1);

    let mut reference: Option<Vec<BTreeSet<String>>> = None;
    let mut consistent = true;
    let mut timings = Vec::with_capacity(MODES.len());

    for options in MODES {
        let finder = WordFinder::new(adjacency, dictionary).with_options(options);
        let mut results = Vec::with_capacity(grids.len());

        let start = Instant::now();
        for round in 0..rounds {
            for grid in &grids {
                let words = finder.find_all_words(grid);
                if round == 0 {
                    results.push(words);
                }
            }
        }
        let total = start.elapsed();

        let searches = (grids.len() * rounds).max(1);
        let words_found = results.iter().map(BTreeSet::len).sum();

        match &reference {
            Some(expected) => consistent &= *expected == results,
            None => reference = Some(results),
        }

        timings.push(ModeTiming {
            options,
            total,
            per_grid: total / searches as u32,
            words_found,
        });
    }

    Ok(BenchmarkResult {
        grids: grids.len(),
        rounds,
        timings,
        consistent,
    })
}
