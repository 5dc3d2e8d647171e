//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::Dictionary;
use log::info;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file with one word per line
///
/// Invalid lines are skipped rather than rejected.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use cornerstones::wordlists::loader::load_from_file;
///
/// let dict = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let dict = Dictionary::from_words(content.lines());

    info!("Loaded {} words from {}", dict.len(), path.display());
    Ok(dict)
}

/// Convert an embedded string slice to a dictionary
///
/// # Examples
/// ```
/// use cornerstones::wordlists::loader::dictionary_from_slice;
/// use cornerstones::wordlists::CORNERSTONES;
///
/// let dict = dictionary_from_slice(CORNERSTONES);
/// assert_eq!(dict.len(), CORNERSTONES.len());
/// ```
#[must_use]
pub fn dictionary_from_slice(slice: &[&str]) -> Dictionary {
    Dictionary::from_words(slice.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn dictionary_from_slice_converts_valid_words() {
        let input = &["core", "stone", "corner"];
        let dict = dictionary_from_slice(input);

        assert_eq!(dict.len(), 3);
        assert!(dict.contains("CORE"));
        assert!(dict.contains("STONE"));
        assert!(dict.contains("CORNER"));
    }

    #[test]
    fn dictionary_from_slice_skips_invalid() {
        let input = &["core", "no way", "x-ray", "stone"];
        let dict = dictionary_from_slice(input);

        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn dictionary_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(dictionary_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!(
            "cornerstones-loader-{}.txt",
            std::process::id()
        ));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "core\n\nSTONE\n  corner  \nbad entry").unwrap();
        }

        let dict = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(dict.len(), 3);
        assert!(dict.contains("CORNER"));
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("definitely/not/here.txt").is_err());
    }
}
