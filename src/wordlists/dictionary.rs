//! Case-normalised word set with a prefix index

use rustc_hash::FxHashSet;

/// An immutable set of uppercase words
///
/// Alongside the words themselves, every proper prefix is indexed so the
/// word finder can abandon a branch as soon as no word can start with it.
/// Used for both the full dictionary and the curated cornerstone set.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
    prefixes: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Entries are trimmed and uppercased. Empty entries and entries with
    /// non-alphabetic characters are skipped; duplicates collapse.
    ///
    /// # Examples
    /// ```
    /// use cornerstones::wordlists::Dictionary;
    ///
    /// let dict = Dictionary::from_words(["core", " Stone ", "it's", ""]);
    /// assert_eq!(dict.len(), 2);
    /// assert!(dict.contains("CORE"));
    /// assert!(dict.contains("stone"));
    /// assert!(dict.has_prefix("STO"));
    /// ```
    pub fn from_words<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::default();
        for entry in entries {
            let trimmed = entry.as_ref().trim();
            if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
                continue;
            }
            dict.insert(trimmed.to_ascii_uppercase());
        }
        dict
    }

    fn insert(&mut self, word: String) {
        if self.words.contains(&word) {
            return;
        }
        for end in 1..word.len() {
            self.prefixes.insert(word[..end].to_string());
        }
        self.words.insert(word);
    }

    /// Check whether a word is present, ignoring case
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if word.bytes().any(|b| b.is_ascii_lowercase()) {
            self.words.contains(&word.to_ascii_uppercase())
        } else {
            self.words.contains(word)
        }
    }

    /// Check whether some longer word starts with `prefix` (uppercase)
    #[inline]
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.prefixes.contains(prefix)
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the dictionary holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
