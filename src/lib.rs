//! Cornerstones
//!
//! Word-discovery engine for the Cornerstones puzzle: a seed word is laid out
//! along a path through a cross-shaped 4x4 grid, and every dictionary word
//! spelled by a simple path of adjacent cells is found and split into
//! cornerstone (common) and regular words.
//!
//! # Quick Start
//!
//! ```rust
//! use cornerstones::core::{AdjacencyMap, Grid};
//! use cornerstones::finder::{classify_cornerstones, find_all_words};
//! use cornerstones::wordlists::Dictionary;
//!
//! let path = [1, 5, 4, 8, 9, 13, 14, 10, 6, 2, 7, 11];
//! let grid = Grid::place_seed_word("CORNERSTONES", &path).unwrap();
//! let map = AdjacencyMap::canonical();
//! let dict = Dictionary::from_words(["core", "corner", "stone", "cornerstones"]);
//!
//! let words = find_all_words(&grid, &map, &dict);
//! assert!(words.contains("CORNERSTONES"));
//!
//! let split = classify_cornerstones(&words, &Dictionary::from_words(["core"]));
//! assert_eq!(split.cornerstone, vec!["CORE"]);
//! ```

// Grid model
pub mod core;

// Word discovery engine
pub mod finder;

// Word lists
pub mod wordlists;

// Static puzzle catalog
pub mod puzzles;

// Game state
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
