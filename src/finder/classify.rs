//! Cornerstone classification of discovered words

use crate::wordlists::Dictionary;
use std::collections::BTreeSet;

/// Discovered words split into cornerstone and regular words
///
/// Both lists are sorted and disjoint; together they hold every input word once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub cornerstone: Vec<String>,
    pub regular: Vec<String>,
}

impl Classification {
    /// Total number of classified words
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.cornerstone.len() + self.regular.len()
    }

    /// Check whether a word was classified as a cornerstone
    #[must_use]
    pub fn is_cornerstone(&self, word: &str) -> bool {
        let upper = word.to_ascii_uppercase();
        self.cornerstone.binary_search(&upper).is_ok()
    }
}

/// Partition discovered words by membership in the cornerstone set
///
/// Membership is case-insensitive. Cornerstone words need not be in the
/// dictionary; only membership in `cornerstones` matters here.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use cornerstones::finder::classify_cornerstones;
/// use cornerstones::wordlists::Dictionary;
///
/// let all: BTreeSet<String> = ["CORE", "TONER"].into_iter().map(String::from).collect();
/// let common = Dictionary::from_words(["core"]);
///
/// let split = classify_cornerstones(&all, &common);
/// assert_eq!(split.cornerstone, vec!["CORE"]);
/// assert_eq!(split.regular, vec!["TONER"]);
/// ```
#[must_use]
pub fn classify_cornerstones(all_words: &BTreeSet<String>, cornerstones: &Dictionary) -> Classification {
    let (cornerstone, regular) = all_words
        .iter()
        .cloned()
        .partition(|word| cornerstones.contains(word));

    Classification {
        cornerstone,
        regular,
    }
}
