//! Cornerstones - CLI
//!
//! Solve, verify, benchmark and play Cornerstones word-search puzzles.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cornerstones::{
    commands::{SolveConfig, run_benchmark, run_play, solve_puzzle, verify_catalog},
    core::{AdjacencyMap, Position},
    finder::SearchOptions,
    logging::init_logger,
    output::{
        print_benchmark_result, print_catalog, print_solve_result, print_verify_report,
    },
    puzzles::{PUZZLES, find_puzzle, random_puzzle},
    session::PuzzleSession,
    wordlists::{Dictionary, embedded_cornerstones, embedded_dictionary, loader::load_from_file},
};
use log::debug;

#[derive(Parser)]
#[command(
    name = "cornerstones",
    about = "Word-discovery engine for the Cornerstones cross-grid word puzzle",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a word-per-line file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Cornerstone words: 'embedded' (default) or path to a word-per-line file
    #[arg(short = 'c', long, global = true, default_value = "embedded")]
    cornerstones: String,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a puzzle interactively (random puzzle if none given)
    Play {
        /// Catalog puzzle name
        puzzle: Option<String>,
    },

    /// List the puzzle catalog
    List,

    /// Find every word in a catalog puzzle
    Solve {
        /// Catalog puzzle name
        puzzle: String,

        /// List regular words as well as cornerstones
        #[arg(short, long)]
        verbose: bool,

        /// Search start positions one at a time
        #[arg(long)]
        sequential: bool,

        /// Disable prefix pruning
        #[arg(long)]
        no_prune: bool,
    },

    /// Lay a seed word along a custom path and find every word
    Custom {
        /// 12-letter seed word
        seed_word: String,

        /// Comma-separated positions, e.g. 1,5,4,8,9,13,14,10,6,2,7,11
        #[arg(short, long, value_delimiter = ',', required = true)]
        path: Vec<Position>,

        /// List regular words as well as cornerstones
        #[arg(short, long)]
        verbose: bool,
    },

    /// Check every catalog puzzle is playable
    Verify,

    /// Time the word finder in each search mode
    Benchmark {
        /// Number of passes over the catalog per mode
        #[arg(short = 'n', long, default_value = "20")]
        rounds: usize,
    },
}

/// Load a word set based on a flag value
///
/// - "embedded": the word list compiled into the binary
/// - "<path>": a word-per-line file
fn load_words(source: &str, embedded: fn() -> Dictionary) -> Result<Dictionary> {
    match source {
        "embedded" => Ok(embedded()),
        path => load_from_file(path).with_context(|| format!("Failed to read word list {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.debug);

    let dictionary = load_words(&cli.dictionary, embedded_dictionary)?;
    let cornerstones = load_words(&cli.cornerstones, embedded_cornerstones)?;
    debug!(
        "Using {} dictionary words and {} cornerstone words",
        dictionary.len(),
        cornerstones.len()
    );

    let adjacency = AdjacencyMap::canonical();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { puzzle: None });

    match command {
        Commands::Play { puzzle } => {
            run_play_command(puzzle.as_deref(), &adjacency, &dictionary, &cornerstones)
        }
        Commands::List => {
            print_catalog(PUZZLES);
            Ok(())
        }
        Commands::Solve {
            puzzle,
            verbose,
            sequential,
            no_prune,
        } => {
            let mut config = SolveConfig::catalog(puzzle);
            config.options = SearchOptions {
                parallel: !sequential,
                prune_prefixes: !no_prune,
            };
            let result = solve_puzzle(config, &adjacency, &dictionary, &cornerstones)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Custom {
            seed_word,
            path,
            verbose,
        } => {
            let config = SolveConfig::custom(seed_word, path);
            let result = solve_puzzle(config, &adjacency, &dictionary, &cornerstones)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Verify => {
            let report = verify_catalog(PUZZLES, &adjacency, &dictionary, &cornerstones, true);
            print_verify_report(&report);
            if report.all_passed() {
                Ok(())
            } else {
                Err(anyhow::anyhow!(
                    "{} of {} puzzles failed verification",
                    report.failed(),
                    report.checks.len()
                ))
            }
        }
        Commands::Benchmark { rounds } => {
            println!(
                "Running benchmark over {} puzzles, {rounds} rounds per mode...",
                PUZZLES.len()
            );
            let result = run_benchmark(PUZZLES, rounds, &adjacency, &dictionary)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(
    puzzle_name: Option<&str>,
    adjacency: &AdjacencyMap,
    dictionary: &Dictionary,
    cornerstones: &Dictionary,
) -> Result<()> {
    let puzzle = match puzzle_name {
        Some(name) => find_puzzle(name)?,
        None => random_puzzle(),
    };

    let grid = puzzle.build_grid(adjacency)?;
    let mut session = PuzzleSession::new(grid, adjacency, dictionary, cornerstones);
    run_play(&mut session, puzzle.name).map_err(|e| anyhow::anyhow!(e))
}
