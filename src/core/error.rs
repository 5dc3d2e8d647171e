//! Puzzle configuration errors

use std::fmt;

/// Error type for invalid puzzle configuration
///
/// Raised while placing a seed word, validating a path or adjacency table,
/// or looking up a catalog puzzle. All checks happen once, up front; the
/// word finder itself never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// Seed word and path have different lengths
    LengthMismatch { seed_len: usize, path_len: usize },
    /// Seed word contains a character that is not an ASCII letter
    InvalidLetter(char),
    /// Position is a corner or outside the 4x4 grid
    UnusablePosition(usize),
    /// Position appears more than once in a path or adjacency table
    DuplicatePosition(usize),
    /// Adjacency entry lists a position as its own neighbour
    SelfLoop(usize),
    /// Consecutive path positions are not adjacent
    PathNotConnected { from: usize, to: usize },
    /// Catalog puzzle refers to a path that does not exist
    PathIndexOutOfRange(usize),
    /// No catalog puzzle has this name
    UnknownPuzzle(String),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { seed_len, path_len } => write!(
                f,
                "Seed word has {seed_len} letters but path has {path_len} positions"
            ),
            Self::InvalidLetter(c) => write!(f, "Seed word contains invalid character '{c}'"),
            Self::UnusablePosition(pos) => {
                write!(f, "Position {pos} is not a usable grid position")
            }
            Self::DuplicatePosition(pos) => write!(f, "Position {pos} is listed more than once"),
            Self::SelfLoop(pos) => write!(f, "Position {pos} lists itself as a neighbour"),
            Self::PathNotConnected { from, to } => {
                write!(f, "Path steps from {from} to {to}, which are not adjacent")
            }
            Self::PathIndexOutOfRange(index) => write!(f, "No path with index {index}"),
            Self::UnknownPuzzle(name) => write!(f, "Unknown puzzle '{name}'"),
        }
    }
}

impl std::error::Error for PuzzleError {}
