//! Guess evaluation
//!
//! Implements the classic two-pass feedback rules, including proper handling
//! of duplicate letters: exact matches are resolved first and consume their
//! secret-letter slot, then misplaced letters claim the remaining slots in
//! left-to-right order.

use super::{LetterStatus, WORD_LENGTH, Word};

// Sentinels for the working copies: a consumed secret slot can never match
// again, a processed guess slot is skipped in the second pass.
const CONSUMED: u8 = b'*';
const PROCESSED: u8 = b'-';

/// Evaluate `guess` against `secret`, producing one status per position
///
/// # Algorithm
/// 1. First pass: mark exact position matches `Correct`, consuming both the
///    secret slot and the guess slot.
/// 2. Second pass: for each remaining guess letter in order, claim the first
///    unconsumed occurrence of that letter in the secret as `Present`;
///    otherwise the position stays `Absent`.
///
/// A guess letter is credited `Present` at most as many times as it occurs
/// unconsumed in the secret.
///
/// # Examples
/// ```
/// use wordle_daily::core::{LetterStatus, Word, evaluate};
///
/// let secret = Word::new("SLATE").unwrap();
/// let guess = Word::new("CRANE").unwrap();
/// let statuses = evaluate(&guess, &secret);
///
/// // C(absent) R(absent) A(correct) N(absent) E(correct)
/// assert_eq!(statuses[2], LetterStatus::Correct);
/// assert_eq!(statuses[4], LetterStatus::Correct);
/// ```
#[must_use]
pub fn evaluate(guess: &Word, secret: &Word) -> [LetterStatus; WORD_LENGTH] {
    let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
    let mut secret_letters = *secret.chars();
    let mut guess_letters = *guess.chars();

    // First pass: exact position matches
    for i in 0..WORD_LENGTH {
        if guess_letters[i] == secret_letters[i] {
            statuses[i] = LetterStatus::Correct;
            secret_letters[i] = CONSUMED;
            guess_letters[i] = PROCESSED;
        }
    }

    // Second pass: misplaced letters claim remaining secret slots in order
    for i in 0..WORD_LENGTH {
        if guess_letters[i] != PROCESSED {
            if let Some(slot) = secret_letters.iter().position(|&s| s == guess_letters[i]) {
                statuses[i] = LetterStatus::Present;
                secret_letters[slot] = CONSUMED;
            }
        }
    }

    statuses
}
