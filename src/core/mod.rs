//! Core domain types for the game engine
//!
//! This module contains the fundamental domain types with zero external
//! surface: words, per-letter feedback, and accumulated knowledge. All types
//! here are pure data with clear invariants.

mod feedback;
mod knowledge;
mod word;

pub use feedback::{Feedback, LetterScore};
pub use knowledge::Knowledge;
pub use word::{Word, WordError};

/// Number of letters in every word the engine handles
pub const WORD_LENGTH: usize = 5;
