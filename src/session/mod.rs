//! Game session state machine
//!
//! A [`Session`] owns one round of play: the secret, the remaining attempt
//! count, the accumulated [`Knowledge`], and the ordered transcript. It moves
//! from `InProgress` to `Won` or `Lost` exactly once and never prints; the
//! presentation layer renders the data it exposes.

use crate::core::{Feedback, Knowledge, Word};
use crate::words::Vocabulary;
use std::fmt;

/// Round configuration passed at construction
///
/// Replaces any module-level constants: callers decide the attempt budget.
#[derive(Debug, Clone, Copy)]
pub struct GameRules {
    /// Number of guesses a round allows
    pub attempts: u8,
}

impl Default for GameRules {
    fn default() -> Self {
        Self { attempts: 6 }
    }
}

/// Terminal result of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    InProgress,
    Won,
    Lost,
}

/// Errors surfaced by guess validation and session advancement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Guess contains non-alphabetic characters or has the wrong length
    InvalidGuessFormat,
    /// Guess is well-formed but not a vocabulary member
    GuessNotInVocabulary,
    /// `advance` was called after the session reached Won or Lost
    AdvanceOnTerminalSession,
    /// Simulation was requested without a usable solver
    NoSolverConfigured,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuessFormat => write!(f, "Guess must be exactly five letters"),
            Self::GuessNotInVocabulary => write!(f, "Guess is not in the vocabulary"),
            Self::AdvanceOnTerminalSession => {
                write!(f, "Session is already over; no further guesses accepted")
            }
            Self::NoSolverConfigured => write!(f, "No solver configured for simulation"),
        }
    }
}

impl std::error::Error for GameError {}

/// One guess and the feedback it earned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub feedback: Feedback,
}

/// One bounded round of play, from secret selection to terminal outcome
#[derive(Debug, Clone)]
pub struct Session<'a> {
    vocabulary: &'a Vocabulary,
    secret: Word,
    attempts_left: u8,
    state: SessionState,
    knowledge: Knowledge,
    transcript: Vec<GuessRecord>,
}

impl<'a> Session<'a> {
    /// Start a round with the given secret
    ///
    /// The secret must be a five-letter word but need not be a vocabulary
    /// member.
    #[must_use]
    pub fn new(vocabulary: &'a Vocabulary, secret: Word, rules: GameRules) -> Self {
        Self {
            vocabulary,
            secret,
            attempts_left: rules.attempts,
            state: SessionState::InProgress,
            knowledge: Knowledge::new(),
            transcript: Vec::with_capacity(usize::from(rules.attempts)),
        }
    }

    /// Validate a raw candidate guess without mutating any state
    ///
    /// Returns the normalized [`Word`] on success; `advance` only accepts a
    /// `Word`, so validation cannot be skipped by accident.
    ///
    /// # Errors
    ///
    /// `InvalidGuessFormat` for non-alphabetic or wrong-length input,
    /// `GuessNotInVocabulary` for a well-formed word outside the vocabulary.
    pub fn validate_guess(&self, candidate: &str) -> Result<Word, GameError> {
        if !candidate.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(GameError::InvalidGuessFormat);
        }

        let word = Word::new(candidate).map_err(|_| GameError::InvalidGuessFormat)?;

        if !self.vocabulary.contains(&word) {
            return Err(GameError::GuessNotInVocabulary);
        }

        Ok(word)
    }

    /// Apply a validated guess to the session
    ///
    /// Decrements the attempt budget, classifies the guess against the
    /// secret, merges the feedback into the accumulated knowledge, appends to
    /// the transcript, and transitions to `Won` or `Lost` when the round
    /// ends.
    ///
    /// # Errors
    ///
    /// `AdvanceOnTerminalSession` if the round already reached Won or Lost.
    pub fn advance(&mut self, guess: Word) -> Result<Feedback, GameError> {
        if self.is_terminal() {
            return Err(GameError::AdvanceOnTerminalSession);
        }

        self.attempts_left = self.attempts_left.saturating_sub(1);

        let feedback = Feedback::classify(&self.secret, &guess);
        self.knowledge.absorb(&guess, &feedback);

        if feedback.is_win() {
            self.state = SessionState::Won;
        } else if self.attempts_left == 0 {
            self.state = SessionState::Lost;
        }

        self.transcript.push(GuessRecord { guess, feedback });

        Ok(feedback)
    }

    /// Whether the session reached Won or Lost
    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state != SessionState::InProgress
    }

    /// Terminal result, `None` while the round is still in progress
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            SessionState::InProgress => None,
            SessionState::Won => Some(Outcome::Won),
            SessionState::Lost => Some(Outcome::Lost),
        }
    }

    /// Guesses still available
    #[inline]
    #[must_use]
    pub const fn attempts_left(&self) -> u8 {
        self.attempts_left
    }

    /// Everything learned about the secret so far
    #[inline]
    #[must_use]
    pub const fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    /// Ordered (guess, feedback) history
    #[inline]
    #[must_use]
    pub fn transcript(&self) -> &[GuessRecord] {
        &self.transcript
    }

    /// The target word; revealed to callers for end-of-round reporting
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Consume the session and hand back its transcript
    #[must_use]
    pub fn into_transcript(self) -> Vec<GuessRecord> {
        self.transcript
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterScore::{Absent, Correct};
    use crate::words::loader::vocabulary_from_slice;

    fn vocabulary() -> Vocabulary {
        vocabulary_from_slice(&["axiom", "major", "argon"])
    }

    fn session(vocabulary: &Vocabulary) -> Session<'_> {
        Session::new(
            vocabulary,
            Word::new("axiom").unwrap(),
            GameRules::default(),
        )
    }

    #[test]
    fn validate_accepts_vocabulary_words() {
        let vocabulary = vocabulary();
        let session = session(&vocabulary);

        let word = session.validate_guess("ARGON").unwrap();
        assert_eq!(word.text(), "argon");
    }

    #[test]
    fn validate_rejects_non_alphabetic() {
        let vocabulary = vocabulary();
        let session = session(&vocabulary);

        assert_eq!(
            session.validate_guess("ax10m"),
            Err(GameError::InvalidGuessFormat)
        );
        assert_eq!(
            session.validate_guess("ax"),
            Err(GameError::InvalidGuessFormat)
        );
    }

    #[test]
    fn validate_rejects_out_of_vocabulary() {
        let vocabulary = vocabulary();
        let session = session(&vocabulary);

        assert_eq!(
            session.validate_guess("slate"),
            Err(GameError::GuessNotInVocabulary)
        );
    }

    #[test]
    fn validate_is_idempotent_and_pure() {
        let vocabulary = vocabulary();
        let session = session(&vocabulary);

        for _ in 0..3 {
            assert!(session.validate_guess("major").is_ok());
            assert!(session.validate_guess("slate").is_err());
        }
        assert_eq!(session.attempts_left(), 6);
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn advance_argon_against_axiom() {
        let vocabulary = vocabulary();
        let mut session = session(&vocabulary);

        let guess = session.validate_guess("argon").unwrap();
        let feedback = session.advance(guess).unwrap();

        assert_eq!(
            feedback.scores(),
            &[Correct, Absent, Absent, Correct, Absent]
        );
        assert_eq!(session.attempts_left(), 5);
        assert!(!session.is_terminal());
        assert_eq!(session.outcome(), None);
    }

    #[test]
    fn winning_guess_terminates() {
        let vocabulary = vocabulary();
        let mut session = session(&vocabulary);

        let guess = session.validate_guess("axiom").unwrap();
        session.advance(guess).unwrap();

        assert!(session.is_terminal());
        assert_eq!(session.outcome(), Some(Outcome::Won));
        assert_eq!(session.attempts_left(), 5);
    }

    #[test]
    fn six_misses_lose() {
        let vocabulary = vocabulary();
        let mut session = session(&vocabulary);

        for i in 0..6 {
            assert!(!session.is_terminal(), "terminal after {i} guesses");
            let guess = session.validate_guess("major").unwrap();
            session.advance(guess).unwrap();
        }

        assert!(session.is_terminal());
        assert_eq!(session.outcome(), Some(Outcome::Lost));
        assert_eq!(session.attempts_left(), 0);
        assert_eq!(session.transcript().len(), 6);
    }

    #[test]
    fn advance_after_terminal_is_rejected() {
        let vocabulary = vocabulary();
        let mut session = session(&vocabulary);

        let guess = session.validate_guess("axiom").unwrap();
        session.advance(guess).unwrap();

        let late = session.validate_guess("major").unwrap();
        assert_eq!(
            session.advance(late),
            Err(GameError::AdvanceOnTerminalSession)
        );
        assert_eq!(session.transcript().len(), 1);
    }

    #[test]
    fn transcript_and_knowledge_accumulate() {
        let vocabulary = vocabulary();
        let mut session = session(&vocabulary);

        let first = session.validate_guess("argon").unwrap();
        session.advance(first).unwrap();
        let second = session.validate_guess("major").unwrap();
        session.advance(second).unwrap();

        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.transcript()[0].guess.text(), "argon");
        assert_eq!(session.transcript()[1].guess.text(), "major");

        // A and O were pinned by ARGON; R and G ruled out
        assert!(session.knowledge().is_placed(b'a'));
        assert!(session.knowledge().is_placed(b'o'));
        assert!(session.knowledge().is_absent(b'r'));
    }

    #[test]
    fn custom_attempt_budget() {
        let vocabulary = vocabulary();
        let mut session = Session::new(
            &vocabulary,
            Word::new("axiom").unwrap(),
            GameRules { attempts: 2 },
        );

        for _ in 0..2 {
            let guess = session.validate_guess("major").unwrap();
            session.advance(guess).unwrap();
        }

        assert_eq!(session.outcome(), Some(Outcome::Lost));
    }
}
