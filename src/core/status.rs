//! Per-letter feedback status
//!
//! Statuses form a total order used for keyboard-hint aggregation:
//! `Unused < Absent < Present < Correct`. A letter's aggregated hint may
//! only move up this order, never down.

use serde::{Deserialize, Serialize};

/// Feedback for a single letter of a guess
///
/// The derive order of the variants defines the upgrade order, so
/// `Ord::max` implements "keep the better of two observations".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterStatus {
    /// Letter has not appeared in any submitted guess
    Unused,
    /// Letter does not occur in the secret (or all occurrences are consumed)
    Absent,
    /// Letter occurs in the secret but at a different position
    Present,
    /// Letter is in exactly the right position
    Correct,
}

impl LetterStatus {
    /// Return the higher-ranked of `self` and `other`
    #[inline]
    #[must_use]
    pub fn upgraded(self, other: Self) -> Self {
        self.max(other)
    }
}
