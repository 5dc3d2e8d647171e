//! Simple interactive play mode
//!
//! Line-based game over a `PuzzleSession`

use crate::output::display::print_progress;
use crate::output::formatters::render_grid;
use crate::session::{PuzzleSession, SubmitOutcome};
use colored::Colorize;
use std::io::{self, Write};

/// Run the interactive game until the player quits or finds every cornerstone
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_play(session: &mut PuzzleSession<'_>, name: &str) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Cornerstones - Interactive Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Puzzle: {}", name.bright_yellow().bold());
    println!("Trace words of 4+ letters through touching cells, no cell twice.");
    println!("Find every cornerstone word to win.\n");
    println!("Commands: 'grid', 'progress', 'found', 'reveal', 'quit'\n");

    println!("{}\n", render_grid(session.grid()));
    print_progress(&session.progress());

    loop {
        let input = get_user_input("\nWord")?;

        match input.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "grid" | "g" => println!("\n{}", render_grid(session.grid())),
            "progress" | "p" => print_progress(&session.progress()),
            "found" | "f" => {
                let found: Vec<&str> = session.found().iter().map(String::as_str).collect();
                if found.is_empty() {
                    println!("Nothing found yet.");
                } else {
                    println!("{}", found.join(", "));
                }
            }
            "reveal" => {
                let remaining: Vec<&str> = session.remaining().map(String::as_str).collect();
                println!("Remaining: {}", remaining.join(", "));
                return Ok(());
            }
            word => {
                report_outcome(word, session.submit(word));

                if session.is_complete() {
                    println!("\n{}", "═".repeat(70).bright_cyan());
                    println!(
                        "{}",
                        "   🎉  A L L   C O R N E R S T O N E S   F O U N D !  🎉"
                            .bright_green()
                            .bold()
                    );
                    println!("{}", "═".repeat(70).bright_cyan());
                    print_progress(&session.progress());
                    return Ok(());
                }
            }
        }
    }
}

fn report_outcome(word: &str, outcome: SubmitOutcome) {
    let word = word.to_uppercase();
    match outcome {
        SubmitOutcome::TooShort => println!("❌ Words need at least 4 letters"),
        SubmitOutcome::NotInGrid => println!("❌ {word} can't be traced in the grid"),
        SubmitOutcome::NotInDictionary => println!("❌ {word} is not in the word list"),
        SubmitOutcome::AlreadyFound => println!("↺ {word} already found"),
        SubmitOutcome::Found { cornerstone: true } => {
            println!("{}", format!("⭐ {word} - cornerstone!").bright_yellow().bold());
        }
        SubmitOutcome::Found { cornerstone: false } => {
            println!("{}", format!("✓ {word}").green());
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
