//! Depth-first word discovery over the grid
//!
//! Every usable position starts an independent search. A branch walks simple
//! paths through the adjacency map, recording each dictionary word of at
//! least `MIN_WORD_LENGTH` letters it spells, and stops at `MAX_WORD_LENGTH`.

use crate::core::{AdjacencyMap, Grid, Position, USABLE_POSITIONS};
use crate::wordlists::Dictionary;
use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;
use std::time::Instant;

/// Shortest word that is ever recorded
pub const MIN_WORD_LENGTH: usize = 4;

/// Longest word that is ever considered (the seed word length)
pub const MAX_WORD_LENGTH: usize = 12;

/// Tuning knobs for the search
///
/// Neither option changes the set of words returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Run one rayon task per start position
    pub parallel: bool,
    /// Abandon branches no dictionary word starts with
    pub prune_prefixes: bool,
}

impl SearchOptions {
    /// Plain exhaustive search: sequential, no pruning
    pub const EXHAUSTIVE: Self = Self {
        parallel: false,
        prune_prefixes: false,
    };
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            prune_prefixes: true,
        }
    }
}

/// Word-discovery engine
///
/// Borrows the adjacency table and dictionary; both are read-only for the
/// lifetime of the finder.
pub struct WordFinder<'a> {
    adjacency: &'a AdjacencyMap,
    dictionary: &'a Dictionary,
    options: SearchOptions,
}

impl<'a> WordFinder<'a> {
    /// Create a finder with default options
    #[must_use]
    pub fn new(adjacency: &'a AdjacencyMap, dictionary: &'a Dictionary) -> Self {
        Self {
            adjacency,
            dictionary,
            options: SearchOptions::default(),
        }
    }

    /// Replace the search options
    #[must_use]
    pub const fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Current search options
    #[must_use]
    pub const fn options(&self) -> SearchOptions {
        self.options
    }

    /// Find every dictionary word spelled by a simple path through the grid
    ///
    /// Words are returned uppercased, once each, in sorted order.
    /// An empty dictionary yields an empty set.
    ///
    /// # Examples
    /// ```
    /// use cornerstones::core::{AdjacencyMap, Grid};
    /// use cornerstones::finder::WordFinder;
    /// use cornerstones::wordlists::Dictionary;
    ///
    /// let path = [1, 5, 4, 8, 9, 13, 14, 10, 6, 2, 7, 11];
    /// let grid = Grid::place_seed_word("CORNERSTONES", &path).unwrap();
    /// let map = AdjacencyMap::canonical();
    /// let dict = Dictionary::from_words(["core", "stone", "zebra"]);
    ///
    /// let words = WordFinder::new(&map, &dict).find_all_words(&grid);
    /// assert!(words.contains("CORE"));
    /// assert!(words.contains("STONE"));
    /// assert!(!words.contains("ZEBRA"));
    /// ```
    #[must_use]
    pub fn find_all_words(&self, grid: &Grid) -> BTreeSet<String> {
        let start = Instant::now();

        let found: FxHashSet<String> = if self.options.parallel {
            USABLE_POSITIONS
                .par_iter()
                .map(|&pos| self.search_from(grid, pos))
                .reduce(FxHashSet::default, merge)
        } else {
            USABLE_POSITIONS
                .iter()
                .map(|&pos| self.search_from(grid, pos))
                .fold(FxHashSet::default(), merge)
        };

        debug!(
            "Found {} words in {:.2?} (parallel: {}, pruning: {})",
            found.len(),
            start.elapsed(),
            self.options.parallel,
            self.options.prune_prefixes
        );

        found.into_iter().collect()
    }

    /// Search all paths beginning at one position
    fn search_from(&self, grid: &Grid, start: Position) -> FxHashSet<String> {
        let mut found = FxHashSet::default();

        if let Some(letter) = grid.byte_at(start) {
            let mut word = String::with_capacity(MAX_WORD_LENGTH);
            word.push(char::from(letter));
            self.extend(grid, start, 1 << start, &mut word, &mut found);
        }

        found
    }

    /// Record `word` if valid, then try every unvisited lettered neighbour
    ///
    /// `visited` is a per-branch bitmask of positions on the current path;
    /// `word` is pushed before each recursive call and popped after it.
    fn extend(
        &self,
        grid: &Grid,
        pos: Position,
        visited: u16,
        word: &mut String,
        found: &mut FxHashSet<String>,
    ) {
        if word.len() >= MIN_WORD_LENGTH && self.dictionary.contains(word) {
            found.insert(word.clone());
        }

        if word.len() >= MAX_WORD_LENGTH {
            return;
        }

        if self.options.prune_prefixes && !self.dictionary.has_prefix(word) {
            return;
        }

        for next in self.adjacency.neighbors(pos) {
            if visited & (1 << next) != 0 {
                continue;
            }
            let Some(letter) = grid.byte_at(next) else {
                continue;
            };

            word.push(char::from(letter));
            self.extend(grid, next, visited | (1 << next), word, found);
            word.pop();
        }
    }
}

fn merge(mut acc: FxHashSet<String>, other: FxHashSet<String>) -> FxHashSet<String> {
    if acc.len() < other.len() {
        return merge(other, acc);
    }
    acc.extend(other);
    acc
}

/// Find all words using the default search options
#[must_use]
pub fn find_all_words(
    grid: &Grid,
    adjacency: &AdjacencyMap,
    dictionary: &Dictionary,
) -> BTreeSet<String> {
    WordFinder::new(adjacency, dictionary).find_all_words(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATH: [Position; 12] = [1, 5, 4, 8, 9, 13, 14, 10, 6, 2, 7, 11];

    fn cornerstones_grid() -> Grid {
        Grid::place_seed_word("CORNERSTONES", &PATH).unwrap()
    }

    fn all_modes() -> [SearchOptions; 4] {
        [
            SearchOptions::EXHAUSTIVE,
            SearchOptions {
                parallel: true,
                prune_prefixes: false,
            },
            SearchOptions {
                parallel: false,
                prune_prefixes: true,
            },
            SearchOptions::default(),
        ]
    }

    #[test]
    fn finds_seed_and_sub_words() {
        let map = AdjacencyMap::canonical();
        let dict = Dictionary::from_words(["CORE", "CORNER", "STONE", "CORNERSTONES"]);
        let words = find_all_words(&cornerstones_grid(), &map, &dict);

        let expected: BTreeSet<String> = ["CORE", "CORNER", "CORNERSTONES", "STONE"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(words, expected);
    }

    #[test]
    fn dictionary_lookup_ignores_case() {
        let map = AdjacencyMap::canonical();
        let dict = Dictionary::from_words(["core", "Stone"]);
        let words = find_all_words(&cornerstones_grid(), &map, &dict);

        assert!(words.contains("CORE"));
        assert!(words.contains("STONE"));
    }

    #[test]
    fn short_words_never_recorded() {
        let map = AdjacencyMap::canonical();
        let dict = Dictionary::from_words(["COR", "ORE", "TO", "CORE"]);
        let words = find_all_words(&cornerstones_grid(), &map, &dict);

        assert_eq!(words.len(), 1);
        assert!(words.iter().all(|w| w.len() >= MIN_WORD_LENGTH));
    }

    #[test]
    fn words_longer_than_grid_never_found() {
        let map = AdjacencyMap::canonical();
        let dict = Dictionary::from_words(["CORNERSTONESS", "CORNERSTONES"]);
        let words = find_all_words(&cornerstones_grid(), &map, &dict);

        assert_eq!(words.len(), 1);
        assert!(words.iter().all(|w| w.len() <= MAX_WORD_LENGTH));
    }

    #[test]
    fn repeated_letters_use_distinct_positions() {
        // NOON needs both N cells and both O cells
        let map = AdjacencyMap::canonical();
        let dict = Dictionary::from_words(["NOON", "TOOT"]);
        let words = find_all_words(&cornerstones_grid(), &map, &dict);

        assert!(words.contains("NOON"));
        // Only one T in the grid, so TOOT would need to revisit it
        assert!(!words.contains("TOOT"));
    }

    #[test]
    fn empty_dictionary_yields_nothing() {
        let map = AdjacencyMap::canonical();
        let dict = Dictionary::default();
        for options in all_modes() {
            let words = WordFinder::new(&map, &dict)
                .with_options(options)
                .find_all_words(&cornerstones_grid());
            assert!(words.is_empty());
        }
    }

    #[test]
    fn empty_cells_are_skipped() {
        let map = AdjacencyMap::canonical();
        let grid = Grid::place_seed_word("CORE", &[1, 5, 4, 9]).unwrap();
        let dict = Dictionary::from_words(["CORE", "CORN"]);

        let words = find_all_words(&grid, &map, &dict);
        assert_eq!(words.into_iter().collect::<Vec<_>>(), vec!["CORE"]);
    }

    #[test]
    fn empty_grid_yields_nothing() {
        let map = AdjacencyMap::canonical();
        let dict = Dictionary::from_words(["CORE"]);
        assert!(find_all_words(&Grid::empty(), &map, &dict).is_empty());
    }

    #[test]
    fn honours_directed_adjacency() {
        let grid = Grid::place_seed_word("STOP", &[1, 2, 6, 7]).unwrap();
        let dict = Dictionary::from_words(["STOP", "POTS"]);

        let one_way = AdjacencyMap::from_entries(&[(1, &[2]), (2, &[6]), (6, &[7])]).unwrap();
        let words = find_all_words(&grid, &one_way, &dict);
        assert!(words.contains("STOP"));
        assert!(!words.contains("POTS"));

        let reverse = AdjacencyMap::from_entries(&[(7, &[6]), (6, &[2]), (2, &[1])]).unwrap();
        let words = find_all_words(&grid, &reverse, &dict);
        assert!(!words.contains("STOP"));
        assert!(words.contains("POTS"));
    }

    #[test]
    fn dead_end_positions_are_not_errors() {
        let grid = Grid::place_seed_word("STOP", &[1, 2, 6, 7]).unwrap();
        let dict = Dictionary::from_words(["STOP"]);
        let map = AdjacencyMap::from_entries(&[(1, &[2])]).unwrap();

        assert!(find_all_words(&grid, &map, &dict).is_empty());
    }

    #[test]
    fn all_modes_agree() {
        let map = AdjacencyMap::canonical();
        let dict = crate::wordlists::embedded_dictionary();
        let grid = cornerstones_grid();

        let reference = WordFinder::new(&map, &dict)
            .with_options(SearchOptions::EXHAUSTIVE)
            .find_all_words(&grid);
        assert!(reference.len() > 10);

        for options in all_modes() {
            let words = WordFinder::new(&map, &dict)
                .with_options(options)
                .find_all_words(&grid);
            assert_eq!(words, reference, "mode {options:?} disagrees");
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        let map = AdjacencyMap::canonical();
        let dict = crate::wordlists::embedded_dictionary();
        let grid = cornerstones_grid();
        let finder = WordFinder::new(&map, &dict);

        assert_eq!(finder.find_all_words(&grid), finder.find_all_words(&grid));
    }

    #[test]
    fn results_are_unique_ignoring_case() {
        let map = AdjacencyMap::canonical();
        let dict = crate::wordlists::embedded_dictionary();
        let words = find_all_words(&cornerstones_grid(), &map, &dict);

        let lowered: FxHashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        assert_eq!(lowered.len(), words.len());
        assert!(words.iter().all(|w| w.chars().all(|c| c.is_ascii_uppercase())));
    }

    #[test]
    fn options_default_is_parallel_pruned() {
        let map = AdjacencyMap::canonical();
        let dict = Dictionary::default();
        assert_eq!(WordFinder::new(&map, &dict).options(), SearchOptions::default());
        assert!(SearchOptions::default().parallel);
        assert!(SearchOptions::default().prune_prefixes);
    }
}
