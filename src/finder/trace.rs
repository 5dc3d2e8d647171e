//! Locating a specific word in the grid

use crate::core::{AdjacencyMap, Grid, Position, USABLE_POSITIONS};

/// Find one simple path through the grid that spells `word`
///
/// Matching ignores case. Returns the positions in spelling order, or `None`
/// when the word cannot be traced. Dictionary membership is not checked.
///
/// # Examples
/// ```
/// use cornerstones::core::{AdjacencyMap, Grid};
/// use cornerstones::finder::trace_word;
///
/// let path = [1, 5, 4, 8, 9, 13, 14, 10, 6, 2, 7, 11];
/// let grid = Grid::place_seed_word("CORNERSTONES", &path).unwrap();
/// let map = AdjacencyMap::canonical();
///
/// assert_eq!(trace_word(&grid, &map, "core"), Some(vec![1, 5, 4, 9]));
/// assert_eq!(trace_word(&grid, &map, "zone"), None);
/// ```
#[must_use]
pub fn trace_word(grid: &Grid, adjacency: &AdjacencyMap, word: &str) -> Option<Vec<Position>> {
    let target: Vec<u8> = word.bytes().map(|b| b.to_ascii_uppercase()).collect();
    let &first = target.first()?;

    let mut route = Vec::with_capacity(target.len());
    for start in USABLE_POSITIONS {
        if grid.byte_at(start) != Some(first) {
            continue;
        }
        route.push(start);
        if follow(grid, adjacency, &target, 1 << start, &mut route) {
            return Some(route);
        }
        route.pop();
    }

    None
}

fn follow(
    grid: &Grid,
    adjacency: &AdjacencyMap,
    target: &[u8],
    visited: u16,
    route: &mut Vec<Position>,
) -> bool {
    if route.len() == target.len() {
        return true;
    }
    let Some(&pos) = route.last() else {
        return false;
    };
    let wanted = target[route.len()];

    for next in adjacency.neighbors(pos) {
        if visited & (1 << next) != 0 || grid.byte_at(next) != Some(wanted) {
            continue;
        }
        route.push(next);
        if follow(grid, adjacency, target, visited | (1 << next), route) {
            return true;
        }
        route.pop();
    }

    false
}
