//! Accumulated cross-guess knowledge
//!
//! Tracks what a session has learned about the secret: letters pinned to a
//! position, letters known to be in the secret somewhere else, and letters
//! ruled out entirely. Absent-marking is duplicate-aware: a letter is only
//! ruled out when no copy of it scored Correct or Present in the same guess.

use super::feedback::{Feedback, LetterScore};
use super::word::Word;
use super::WORD_LENGTH;
use rustc_hash::FxHashSet;

/// What the session knows about the secret so far
///
/// A position's entry in `placed`, once set, is never overwritten with a
/// different letter: guesses are evaluated against a single secret, so a
/// second Correct at the same position always carries the same letter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Knowledge {
    placed: [Option<u8>; WORD_LENGTH],
    present: FxHashSet<u8>,
    absent: FxHashSet<u8>,
}

impl Knowledge {
    /// Fresh knowledge with nothing learned
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one guess's feedback into the accumulated knowledge
    ///
    /// - `Correct` pins the letter to its position and drops it from the
    ///   present-elsewhere set.
    /// - `Present` records the letter as in the secret, unless it is already
    ///   pinned somewhere (a pin is never downgraded).
    /// - `Absent` rules a letter out only when no copy of it scored Correct
    ///   or Present anywhere in this guess.
    pub fn absorb(&mut self, guess: &Word, feedback: &Feedback) {
        let mut hit_this_guess = [false; 26];
        for (i, score) in feedback.scores().iter().enumerate() {
            if *score != LetterScore::Absent {
                hit_this_guess[usize::from(guess.letter_at(i) - b'a')] = true;
            }
        }

        for (i, score) in feedback.scores().iter().enumerate() {
            let letter = guess.letter_at(i);
            match score {
                LetterScore::Correct => {
                    self.placed[i] = Some(letter);
                    self.present.remove(&letter);
                }
                LetterScore::Present => {
                    if !self.is_placed(letter) {
                        self.present.insert(letter);
                    }
                }
                LetterScore::Absent => {
                    if !hit_this_guess[usize::from(letter - b'a')] {
                        self.absent.insert(letter);
                    }
                }
            }
        }
    }

    /// Confirmed letter per position, in position order
    #[inline]
    #[must_use]
    pub const fn placed(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.placed
    }

    /// Whether a letter is pinned to at least one position
    #[must_use]
    pub fn is_placed(&self, letter: u8) -> bool {
        self.placed.contains(&Some(letter))
    }

    /// Whether a letter is known to be in the secret at an unresolved position
    #[inline]
    #[must_use]
    pub fn is_present(&self, letter: u8) -> bool {
        self.present.contains(&letter)
    }

    /// Whether a letter is ruled out of the secret
    #[inline]
    #[must_use]
    pub fn is_absent(&self, letter: u8) -> bool {
        self.absent.contains(&letter)
    }

    /// Letters known in the secret but not yet pinned
    #[inline]
    pub fn present_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.present.iter().copied()
    }

    /// Letters ruled out of the secret
    #[inline]
    pub fn absent_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.absent.iter().copied()
    }

    /// Check a candidate word against everything learned so far
    ///
    /// A word is admitted when it matches every pinned position, contains
    /// every present-elsewhere letter, and avoids ruled-out letters at every
    /// unpinned position.
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        for (i, pinned) in self.placed.iter().enumerate() {
            if let Some(letter) = pinned
                && word.letter_at(i) != *letter
            {
                return false;
            }
        }

        for letter in self.present_letters() {
            if !word.contains_letter(letter) {
                return false;
            }
        }

        for (i, &letter) in word.letters().iter().enumerate() {
            if self.absent.contains(&letter) && self.placed[i] != Some(letter) {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn absorb(knowledge: &mut Knowledge, secret: &str, guess: &str) {
        let secret = word(secret);
        let guess = word(guess);
        let feedback = Feedback::classify(&secret, &guess);
        knowledge.absorb(&guess, &feedback);
    }

    #[test]
    fn absorb_records_correct_positions() {
        let mut knowledge = Knowledge::new();
        absorb(&mut knowledge, "axiom", "argon");

        assert_eq!(knowledge.placed()[0], Some(b'a'));
        assert_eq!(knowledge.placed()[3], Some(b'o'));
        assert_eq!(knowledge.placed()[1], None);
        assert!(knowledge.is_placed(b'a'));
        assert!(!knowledge.is_placed(b'x'));
    }

    #[test]
    fn absorb_records_absent_letters() {
        let mut knowledge = Knowledge::new();
        absorb(&mut knowledge, "axiom", "argon");

        assert!(knowledge.is_absent(b'r'));
        assert!(knowledge.is_absent(b'g'));
        assert!(knowledge.is_absent(b'n'));
        assert!(!knowledge.is_absent(b'a'));
    }

    #[test]
    fn absorb_records_present_letters() {
        let mut knowledge = Knowledge::new();
        absorb(&mut knowledge, "axiom", "moist");

        // M and O occur in the secret away from their guessed spots; the I
        // lines up exactly and is pinned instead.
        assert!(knowledge.is_present(b'm'));
        assert!(knowledge.is_present(b'o'));
        assert!(knowledge.is_placed(b'i'));
        assert!(knowledge.is_absent(b's'));
        assert!(knowledge.is_absent(b't'));
    }

    #[test]
    fn correct_clears_present_entry() {
        let mut knowledge = Knowledge::new();
        absorb(&mut knowledge, "axiom", "moist");
        assert!(knowledge.is_present(b'o'));

        absorb(&mut knowledge, "axiom", "argon");
        assert!(knowledge.is_placed(b'o'));
        assert!(!knowledge.is_present(b'o'));
    }

    #[test]
    fn present_never_downgrades_a_pin() {
        let mut knowledge = Knowledge::new();
        // Pin the O at position 3 first
        absorb(&mut knowledge, "axiom", "argon");
        assert!(knowledge.is_placed(b'o'));

        // A later guess with O misplaced must not re-enter the present set
        absorb(&mut knowledge, "axiom", "moist");
        assert!(!knowledge.is_present(b'o'));
        assert!(knowledge.is_placed(b'o'));
    }

    #[test]
    fn duplicate_letter_not_marked_absent_when_one_copy_hits() {
        // Guess ABBEY vs secret ABIDE: one B scores Correct, the other
        // Absent. B still has a use in the secret, so it must not be ruled
        // out.
        let mut knowledge = Knowledge::new();
        absorb(&mut knowledge, "abide", "abbey");

        assert!(!knowledge.is_absent(b'b'));
        assert!(knowledge.is_placed(b'b'));
        assert!(knowledge.is_absent(b'y'));
    }

    #[test]
    fn fully_missing_letter_marked_absent() {
        let mut knowledge = Knowledge::new();
        absorb(&mut knowledge, "abide", "abbey");
        // Y appears nowhere in the secret
        assert!(knowledge.is_absent(b'y'));
    }

    #[test]
    fn admits_respects_pins_and_absences() {
        let mut knowledge = Knowledge::new();
        absorb(&mut knowledge, "axiom", "argon");

        // a _ _ o _ pinned; r, g, n ruled out
        assert!(knowledge.admits(&word("axiom")));
        assert!(!knowledge.admits(&word("major"))); // wrong pin at 0, has r
        assert!(!knowledge.admits(&word("atoll"))); // o not at position 3
    }

    #[test]
    fn admits_requires_present_letters() {
        let mut knowledge = Knowledge::new();
        absorb(&mut knowledge, "axiom", "moist");

        // m, o, i must all appear somewhere
        assert!(knowledge.admits(&word("axiom")));
        assert!(!knowledge.admits(&word("mails"))); // no o, contains s
    }

    #[test]
    fn fresh_knowledge_admits_everything() {
        let knowledge = Knowledge::new();
        for s in ["axiom", "major", "argon", "abbey"] {
            assert!(knowledge.admits(&word(s)));
        }
    }
}
