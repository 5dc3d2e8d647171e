//! Display functions for command results

use super::formatters::{create_progress_bar, group_by_length, options_label, render_grid};
use crate::commands::{BenchmarkResult, SolveResult, VerifyReport};
use crate::puzzles::{PATHS, PuzzleDef};
use crate::session::Progress;
use colored::Colorize;

/// Print the result of solving a puzzle
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Puzzle: {}  Seed: {}",
        result.name.bright_white().bold(),
        result.seed_word.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n{}\n", render_grid(&result.grid));

    let split = &result.classification;
    println!(
        "⭐ {} ({})",
        "Cornerstone words".bright_yellow().bold(),
        split.cornerstone.len()
    );
    for (len, words) in group_by_length(&split.cornerstone) {
        println!("  {len:2}: {}", words.join(" ").bright_yellow());
    }

    println!(
        "\n✓ {} ({})",
        "Other valid words".green().bold(),
        split.regular.len()
    );
    if verbose {
        for (len, words) in group_by_length(&split.regular) {
            println!("  {len:2}: {}", words.join(" "));
        }
    } else {
        println!("  (use --verbose to list them)");
    }

    println!();
    println!("Total words:  {}", result.all_words.len());
    println!("Search time:  {:.2?}", result.duration);
    if !result.seed_found() {
        println!(
            "{}",
            format!("⚠ Seed word {} was not discovered", result.seed_word)
                .red()
                .bold()
        );
    }
}

/// Print the puzzle catalog
pub fn print_catalog(puzzles: &[PuzzleDef]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PUZZLE CATALOG".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for puzzle in puzzles {
        let path = PATHS
            .get(puzzle.path_index)
            .map(|p| format!("{p:?}"))
            .unwrap_or_else(|| "<missing>".to_string());
        println!(
            "  {} {} path {} {}",
            format!("{:<12}", puzzle.name).bright_white(),
            format!("{:<14}", puzzle.seed_word).bright_yellow(),
            puzzle.path_index,
            path.bright_black()
        );
    }
}

/// Print session progress
pub fn print_progress(progress: &Progress) {
    let bar = create_progress_bar(
        progress.cornerstone_found as f64,
        progress.cornerstone_total as f64,
        20,
    );
    println!(
        "Cornerstones [{}] {}/{}   Other words {}/{}",
        bar.bright_yellow(),
        progress.cornerstone_found,
        progress.cornerstone_total,
        progress.regular_found,
        progress.regular_total
    );
}

/// Print the result of verifying the catalog
pub fn print_verify_report(report: &VerifyReport) {
    println!("\n{}", "═".repeat(70));
    println!(" Catalog Verification ");
    println!("{}", "═".repeat(70));

    for check in &report.checks {
        let status = if check.passed() {
            "PASS".green().bold()
        } else {
            "FAIL".red().bold()
        };
        let detail = match &check.error {
            Some(e) => e.clone(),
            None if !check.seed_found => "seed word not discoverable".to_string(),
            None => format!(
                "{} words, {} cornerstone, {:.1?}",
                check.word_count, check.cornerstone_count, check.duration
            ),
        };
        println!(
            "  {status}  {:<12} {:<14} {detail}",
            check.name, check.seed_word
        );
    }

    println!("\n📊 {}", "Summary".bright_cyan().bold());
    println!("  Puzzles checked: {}", report.checks.len());
    println!("  Passed:          {}", report.passed().to_string().green());
    if report.failed() > 0 {
        println!("  Failed:          {}", report.failed().to_string().red());
    }
    println!("  Total time:      {:.2}s", report.total_time.as_secs_f64());

    if let (Some(rich), Some(sparse)) = (report.richest(), report.sparsest()) {
        println!(
            "  Most words:      {} ({})",
            rich.name.bright_green(),
            rich.word_count
        );
        println!(
            "  Fewest words:    {} ({})",
            sparse.name.yellow(),
            sparse.word_count
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Workload:".bright_cyan().bold());
    println!("   Grids:            {}", result.grids);
    println!("   Rounds:           {}", result.rounds);

    let slowest = result
        .timings
        .iter()
        .map(|t| t.per_grid.as_secs_f64())
        .fold(0.0, f64::max);

    println!("\n⏱  {}", "Time per grid:".bright_cyan().bold());
    for timing in &result.timings {
        let bar = create_progress_bar(timing.per_grid.as_secs_f64(), slowest, 30);
        println!(
            "   {:<18} {} {:>10.2?}  ({} words)",
            options_label(timing.options),
            bar.green(),
            timing.per_grid,
            timing.words_found
        );
    }

    if let Some(fastest) = result.fastest() {
        println!(
            "\n   Fastest: {}",
            options_label(fastest.options).bright_yellow().bold()
        );
    }

    if result.consistent {
        println!("   {}", "All modes returned identical word sets".green());
    } else {
        println!("   {}", "Modes returned different word sets!".red().bold());
    }
}
