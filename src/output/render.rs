//! Feedback and transcript rendering
//!
//! Turns the plain data the engine produces into colored terminal tiles, in
//! the original game's scheme: green background for a correct spot, yellow
//! for a misplaced letter, red for an absent one.

use crate::core::LetterScore;
use crate::session::GuessRecord;
use colored::Colorize;

/// Renders engine data for a terminal
///
/// Construction-time flag decides colored tiles versus plain text; the game
/// logic never checks it.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    /// One letter tile
    #[must_use]
    pub fn tile(&self, letter: u8, score: LetterScore) -> String {
        let cell = format!(" {} ", char::from(letter).to_ascii_uppercase());
        if self.color {
            let colored_cell = match score {
                LetterScore::Correct => cell.black().on_green(),
                LetterScore::Present => cell.black().on_yellow(),
                LetterScore::Absent => cell.white().on_red(),
            };
            format!("[{colored_cell}]")
        } else {
            format!("[{cell}]")
        }
    }

    /// One guess with its feedback, as a single line
    ///
    /// Plain mode appends the compact G/Y/- form instead of coloring.
    #[must_use]
    pub fn guess_line(&self, record: &GuessRecord) -> String {
        let tiles: Vec<String> = record
            .guess
            .letters()
            .iter()
            .zip(record.feedback.scores())
            .map(|(&letter, &score)| self.tile(letter, score))
            .collect();

        if self.color {
            tiles.join(" ")
        } else {
            format!("{}  {}", tiles.join(" "), record.feedback)
        }
    }

    /// The full transcript, one guess per line
    #[must_use]
    pub fn transcript(&self, records: &[GuessRecord]) -> String {
        records
            .iter()
            .map(|record| self.guess_line(record))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Rules text with a color legend
    #[must_use]
    pub fn rules(&self) -> String {
        let correct = self.tile(b'a', LetterScore::Correct);
        let present = self.tile(b'b', LetterScore::Present);
        let absent = self.tile(b'c', LetterScore::Absent);

        format!(
            "Guess the secret five-letter word within six attempts.\n\
             After each guess, every letter is scored:\n\
             \n\
               {correct}  letter is in the word, in that exact spot\n\
               {present}  letter is in the word, but somewhere else\n\
               {absent}  letter is not in the word\n"
        )
    }
}
