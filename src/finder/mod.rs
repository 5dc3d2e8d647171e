//! Word discovery and classification
//!
//! This module contains the search engine that enumerates dictionary words in
//! a grid, the cornerstone classifier, and a single-word tracer.

mod classify;
mod engine;
mod trace;

pub use classify::{Classification, classify_cornerstones};
pub use engine::{MAX_WORD_LENGTH, MIN_WORD_LENGTH, SearchOptions, WordFinder, find_all_words};
pub use trace::trace_word;
