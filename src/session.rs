//! Puzzle session state
//!
//! A `PuzzleSession` is the explicit context a game runs against: the grid,
//! the word sets it was solved with, the discovered words, and the words the
//! player has found so far.

use crate::core::{AdjacencyMap, Grid};
use crate::finder::{Classification, MIN_WORD_LENGTH, WordFinder, classify_cornerstones, trace_word};
use crate::wordlists::Dictionary;
use log::debug;
use std::collections::BTreeSet;

/// Result of submitting a word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Fewer than four letters
    TooShort,
    /// The letters cannot be traced through the grid
    NotInGrid,
    /// Traceable but not a dictionary word
    NotInDictionary,
    /// Already found earlier in this session
    AlreadyFound,
    /// Newly found
    Found { cornerstone: bool },
}

/// Found/total counts for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub cornerstone_found: usize,
    pub cornerstone_total: usize,
    pub regular_found: usize,
    pub regular_total: usize,
}

impl Progress {
    /// Words found across both classes
    #[must_use]
    pub const fn found(&self) -> usize {
        self.cornerstone_found + self.regular_found
    }

    /// Words available across both classes
    #[must_use]
    pub const fn total(&self) -> usize {
        self.cornerstone_total + self.regular_total
    }
}

/// One puzzle being played
pub struct PuzzleSession<'a> {
    grid: Grid,
    adjacency: &'a AdjacencyMap,
    dictionary: &'a Dictionary,
    cornerstones: &'a Dictionary,
    all_words: BTreeSet<String>,
    classification: Classification,
    found: BTreeSet<String>,
}

impl<'a> PuzzleSession<'a> {
    /// Start a session: solve the grid once and classify the results
    ///
    /// # Examples
    /// ```
    /// use cornerstones::core::{AdjacencyMap, Grid};
    /// use cornerstones::session::{PuzzleSession, SubmitOutcome};
    /// use cornerstones::wordlists::Dictionary;
    ///
    /// let path = [1, 5, 4, 8, 9, 13, 14, 10, 6, 2, 7, 11];
    /// let grid = Grid::place_seed_word("CORNERSTONES", &path).unwrap();
    /// let map = AdjacencyMap::canonical();
    /// let dict = Dictionary::from_words(["core", "corner"]);
    /// let common = Dictionary::from_words(["core"]);
    ///
    /// let mut session = PuzzleSession::new(grid, &map, &dict, &common);
    /// assert_eq!(session.submit("core"), SubmitOutcome::Found { cornerstone: true });
    /// assert_eq!(session.submit("CORE"), SubmitOutcome::AlreadyFound);
    /// ```
    #[must_use]
    pub fn new(
        grid: Grid,
        adjacency: &'a AdjacencyMap,
        dictionary: &'a Dictionary,
        cornerstones: &'a Dictionary,
    ) -> Self {
        let all_words = WordFinder::new(adjacency, dictionary).find_all_words(&grid);
        let classification = classify_cornerstones(&all_words, cornerstones);

        debug!(
            "Session started: {} words ({} cornerstone)",
            all_words.len(),
            classification.cornerstone.len()
        );

        Self {
            grid,
            adjacency,
            dictionary,
            cornerstones,
            all_words,
            classification,
            found: BTreeSet::new(),
        }
    }

    /// Submit a word guess
    pub fn submit(&mut self, word: &str) -> SubmitOutcome {
        let word = word.trim().to_ascii_uppercase();

        if word.len() < MIN_WORD_LENGTH {
            return SubmitOutcome::TooShort;
        }
        if self.found.contains(&word) {
            return SubmitOutcome::AlreadyFound;
        }
        if !self.all_words.contains(&word) {
            return if trace_word(&self.grid, self.adjacency, &word).is_some() {
                SubmitOutcome::NotInDictionary
            } else {
                SubmitOutcome::NotInGrid
            };
        }

        let cornerstone = self.cornerstones.contains(&word);
        debug!("Found {word} (cornerstone: {cornerstone})");
        self.found.insert(word);
        SubmitOutcome::Found { cornerstone }
    }

    /// Current found/total counts
    #[must_use]
    pub fn progress(&self) -> Progress {
        let cornerstone_found = self
            .found
            .iter()
            .filter(|w| self.classification.is_cornerstone(w))
            .count();

        Progress {
            cornerstone_found,
            cornerstone_total: self.classification.cornerstone.len(),
            regular_found: self.found.len() - cornerstone_found,
            regular_total: self.classification.regular.len(),
        }
    }

    /// Check whether every cornerstone word has been found
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.classification
            .cornerstone
            .iter()
            .all(|w| self.found.contains(w))
    }

    /// The grid being played
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Every discoverable word
    #[must_use]
    pub const fn all_words(&self) -> &BTreeSet<String> {
        &self.all_words
    }

    /// Discoverable cornerstone words, sorted
    #[must_use]
    pub fn cornerstone_words(&self) -> &[String] {
        &self.classification.cornerstone
    }

    /// Discoverable regular words, sorted
    #[must_use]
    pub fn regular_words(&self) -> &[String] {
        &self.classification.regular
    }

    /// Words found so far
    #[must_use]
    pub const fn found(&self) -> &BTreeSet<String> {
        &self.found
    }

    /// Discoverable words not yet found
    pub fn remaining(&self) -> impl Iterator<Item = &String> {
        self.all_words.difference(&self.found)
    }

    /// Dictionary the grid was solved with
    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        self.dictionary
    }
}
