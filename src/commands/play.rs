//! Interactive play mode
//!
//! Text-based round against a secret word. Validation failures re-prompt;
//! the engine is only advanced with validated guesses.

use crate::core::Word;
use crate::output::Renderer;
use crate::session::{GameRules, Outcome, Session};
use crate::words::Vocabulary;
use colored::Colorize;
use std::io::{self, Write};

/// Run one interactive round
///
/// # Errors
///
/// Returns an error when reading from stdin or writing the prompt fails.
pub fn run_play(
    vocabulary: &Vocabulary,
    secret: Word,
    rules: GameRules,
    renderer: &Renderer,
) -> io::Result<()> {
    println!("\n{}", "WORDLE ARENA".bold());
    println!("{}", "─".repeat(40));
    println!("{}", renderer.rules());
    println!("Type 'quit' to give up.\n");

    let mut session = Session::new(vocabulary, secret, rules);

    while !session.is_terminal() {
        let attempts = session.attempts_left();
        let input = prompt(&format!("Guess ({attempts} left)"))?;

        if input.eq_ignore_ascii_case("quit") {
            println!(
                "\nThe word was {}.",
                session.secret().text().to_uppercase().bold()
            );
            return Ok(());
        }

        match session.validate_guess(&input) {
            Ok(guess) => {
                // Cannot fail: the loop guard keeps the session in progress
                if session.advance(guess).is_err() {
                    break;
                }
                println!("\n{}\n", renderer.transcript(session.transcript()));
            }
            Err(error) => println!("{}", error.to_string().red()),
        }
    }

    match session.outcome() {
        Some(Outcome::Won) => {
            let guesses = session.transcript().len();
            println!(
                "{}",
                format!(
                    "You won! Congrats! Solved in {guesses} guess{}.",
                    if guesses == 1 { "" } else { "es" }
                )
                .green()
                .bold()
            );
        }
        _ => {
            println!(
                "{} The word was {}.",
                "You lost. Better luck next time.".yellow(),
                session.secret().text().to_uppercase().bold()
            );
        }
    }

    Ok(())
}

/// Prompt for one line of input
fn prompt(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
