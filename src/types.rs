//! Common types used throughout the rating library

use serde::{Deserialize, Serialize};

/// Competitive strength of a player. Unbounded.
pub type Rating = f64;

/// Actual match score from player A's perspective (1 = win, 0.5 = draw, 0 = loss).
/// Values outside `[0, 1]` are accepted and computed through.
pub type Score = f64;

/// Result of a match from player A's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchResult {
    Win,
    Draw,
    Loss,
}

impl MatchResult {
    /// Score value fed into the rating formulas
    pub fn score(self) -> Score {
        match self {
            MatchResult::Win => 1.0,
            MatchResult::Draw => 0.5,
            MatchResult::Loss => 0.0,
        }
    }

    /// The same result seen from the opponent's side
    pub fn reversed(self) -> Self {
        match self {
            MatchResult::Win => MatchResult::Loss,
            MatchResult::Draw => MatchResult::Draw,
            MatchResult::Loss => MatchResult::Win,
        }
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchResult::Win => write!(f, "Win"),
            MatchResult::Draw => write!(f, "Draw"),
            MatchResult::Loss => write!(f, "Loss"),
        }
    }
}

impl From<MatchResult> for Score {
    fn from(result: MatchResult) -> Self {
        result.score()
    }
}

/// Rating change applied to one side of a match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SideOutcome {
    /// Signed adjustment to the rating
    pub delta: f64,
    /// Rating after the adjustment
    pub rating: Rating,
}

/// Rating changes for both competitors after one match.
///
/// Always zero-sum: `b.delta == -a.delta`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub a: SideOutcome,
    pub b: SideOutcome,
}

impl Outcome {
    /// Build an outcome from A's delta, applying the negated delta to B
    pub fn from_delta(rating_a: Rating, rating_b: Rating, delta: f64) -> Self {
        Self {
            a: SideOutcome {
                delta,
                rating: rating_a + delta,
            },
            b: SideOutcome {
                delta: -delta,
                rating: rating_b - delta,
            },
        }
    }

    /// The same outcome with the two sides exchanged
    pub fn swapped(self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }
}
