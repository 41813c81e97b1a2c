//! Heuristic soft scoring layered on top of the hard-criteria gate.
//!
//! The score is additive:
//!
//! - [`GATE_BONUS`] when the candidate passes the hard criteria
//! - [`KEYWORD_BONUS`] per query term longer than [`MIN_TERM_CHARS`]
//!   characters found in the candidate's summary or name
//! - half the total years of experience, capped at [`EXPERIENCE_BONUS_CAP`]

use serde::Serialize;

use crate::candidate::Candidate;
use crate::criteria::{GateVerdict, HardCriteria, evaluate_at};
use crate::records::{current_utc_year, total_experience_years_at};

/// Score added when the hard-criteria gate passes
pub const GATE_BONUS: f64 = 100.0;
/// Score added per matching query term occurrence
pub const KEYWORD_BONUS: f64 = 1.0;
/// Terms must be longer than this many characters to count
pub const MIN_TERM_CHARS: usize = 3;
/// Upper bound of the experience component
pub const EXPERIENCE_BONUS_CAP: f64 = 10.0;

/// Per-component score of one candidate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub gate: f64,
    pub keywords: f64,
    pub experience: f64,
    pub total: f64,
    /// Why the gate rejected the candidate, if it did
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<String>,
}

/// Soft scorer bound to one evaluation year
///
/// A ranking run reads the clock once so every candidate's ongoing roles are
/// measured against the same year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scorer {
    current_year: i32,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer {
    /// Scorer evaluating against the current UTC year
    pub fn new() -> Self {
        Self::at_year(current_utc_year())
    }

    pub fn at_year(current_year: i32) -> Self {
        Self { current_year }
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Total score of a candidate
    pub fn score(&self, candidate: &Candidate, query: &str, criteria: &HardCriteria) -> f64 {
        self.breakdown(candidate, query, criteria).total
    }

    /// Score with each component broken out
    pub fn breakdown(
        &self,
        candidate: &Candidate,
        query: &str,
        criteria: &HardCriteria,
    ) -> ScoreBreakdown {
        let verdict = evaluate_at(candidate, criteria, self.current_year);
        let gate = if verdict.is_pass() { GATE_BONUS } else { 0.0 };
        let keywords = keyword_overlap(query, &candidate.search_text());
        let experience = self.experience_bonus(candidate);

        ScoreBreakdown {
            gate,
            keywords,
            experience,
            total: gate + keywords + experience,
            rejection: match verdict {
                GateVerdict::Pass => None,
                GateVerdict::Fail(failure) => Some(failure.to_string()),
            },
        }
    }

    fn experience_bonus(&self, candidate: &Candidate) -> f64 {
        let years = total_experience_years_at(candidate.experience(), self.current_year);
        (f64::from(years) / 2.0).min(EXPERIENCE_BONUS_CAP)
    }
}

/// Score a candidate against the current UTC year
pub fn score(candidate: &Candidate, query: &str, criteria: &HardCriteria) -> f64 {
    Scorer::new().score(candidate, query, criteria)
}

/// Keyword component: one bonus per query term occurrence found in `text`
///
/// `text` is expected lowercased already. Repeated query terms count every
/// time they occur.
pub fn keyword_overlap(query: &str, text: &str) -> f64 {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|term| term.chars().count() > MIN_TERM_CHARS && text.contains(term))
        .map(|_| KEYWORD_BONUS)
        .sum()
}
