//! Word lists for Cornerstones puzzles
//!
//! Provides the dictionary type plus embedded word lists compiled into the
//! binary for zero-cost access.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{CORNERSTONES, CORNERSTONES_COUNT, DICTIONARY, DICTIONARY_COUNT};

/// The embedded dictionary as a `Dictionary`
#[must_use]
pub fn embedded_dictionary() -> Dictionary {
    loader::dictionary_from_slice(DICTIONARY)
}

/// The embedded cornerstone set as a `Dictionary`
#[must_use]
pub fn embedded_cornerstones() -> Dictionary {
    loader::dictionary_from_slice(CORNERSTONES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn cornerstones_count_matches_const() {
        assert_eq!(CORNERSTONES.len(), CORNERSTONES_COUNT);
    }

    #[test]
    fn embedded_words_are_lowercase_letters() {
        for &word in DICTIONARY.iter().chain(CORNERSTONES) {
            assert!(
                !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_lists_have_no_duplicates() {
        assert_eq!(embedded_dictionary().len(), DICTIONARY_COUNT);
        assert_eq!(embedded_cornerstones().len(), CORNERSTONES_COUNT);
    }

    #[test]
    fn cornerstones_in_dictionary() {
        // Not enforced by the engine, but the shipped data keeps them aligned
        let dict = embedded_dictionary();
        for &word in CORNERSTONES {
            assert!(dict.contains(word), "Cornerstone '{word}' not in dictionary");
        }
    }
}
