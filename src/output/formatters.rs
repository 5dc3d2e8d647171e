//! Formatting utilities for terminal output

use crate::core::Grid;
use crate::finder::SearchOptions;
use std::collections::BTreeMap;

/// Render the grid as boxed cells in its cross shape
///
/// Empty usable cells are shown blank.
#[must_use]
pub fn render_grid(grid: &Grid) -> String {
    let rows = grid.rows();
    let cell = |r: usize, c: usize| rows[r][c].unwrap_or(' ');

    [
        "    ┌───┬───┐".to_string(),
        format!("    │ {} │ {} │", cell(0, 1), cell(0, 2)),
        "┌───┼───┼───┼───┐".to_string(),
        format!(
            "│ {} │ {} │ {} │ {} │",
            cell(1, 0),
            cell(1, 1),
            cell(1, 2),
            cell(1, 3)
        ),
        "├───┼───┼───┼───┤".to_string(),
        format!(
            "│ {} │ {} │ {} │ {} │",
            cell(2, 0),
            cell(2, 1),
            cell(2, 2),
            cell(2, 3)
        ),
        "└───┼───┼───┼───┘".to_string(),
        format!("    │ {} │ {} │", cell(3, 1), cell(3, 2)),
        "    └───┴───┘".to_string(),
    ]
    .join("\n")
}

/// Group words by length, shortest first
#[must_use]
pub fn group_by_length<'a, I>(words: I) -> BTreeMap<usize, Vec<&'a str>>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut groups: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
    for word in words {
        groups.entry(word.len()).or_default().push(word.as_str());
    }
    groups
}

/// Short label for a search mode
#[must_use]
pub fn options_label(options: SearchOptions) -> &'static str {
    match (options.parallel, options.prune_prefixes) {
        (false, false) => "sequential",
        (false, true) => "sequential+prune",
        (true, false) => "parallel",
        (true, true) => "parallel+prune",
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
