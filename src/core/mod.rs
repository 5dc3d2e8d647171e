//! Core domain types for the Cornerstones grid
//!
//! This module contains the grid model: positions, the adjacency relation,
//! placement paths and seed-word placement. Everything here is pure and is
//! validated once at construction time.

mod adjacency;
mod error;
mod grid;
mod path;

pub use adjacency::AdjacencyMap;
pub use error::PuzzleError;
pub use grid::{
    CORNER_POSITIONS, GRID_SIZE, GRID_WIDTH, Grid, Position, USABLE_POSITIONS, is_usable,
};
pub use path::{HamiltonianPath, PATH_LENGTH};
