//! Hard-criteria gate.
//!
//! Checks run in a fixed order (country, degree, minimum years) and stop at
//! the first failure.

use std::fmt;

use super::HardCriteria;
use crate::candidate::Candidate;
use crate::records::{current_utc_year, total_experience_years_at};

/// Which check rejected a candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateFailure {
    /// Candidate country does not contain the required country
    Country { required: String, actual: String },
    /// No degree matches the required degree
    MissingDegree { required: String },
    /// Total experience below the threshold
    InsufficientExperience { required: u32, actual: u32 },
}

impl fmt::Display for GateFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateFailure::Country { required, actual } => {
                write!(f, "country '{}' does not match '{}'", actual, required)
            }
            GateFailure::MissingDegree { required } => {
                write!(f, "no degree matching '{}'", required)
            }
            GateFailure::InsufficientExperience { required, actual } => {
                write!(f, "{} years of experience, {} required", actual, required)
            }
        }
    }
}

/// Outcome of the gate for one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateVerdict {
    Pass,
    Fail(GateFailure),
}

impl GateVerdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, GateVerdict::Pass)
    }

    pub fn failure(&self) -> Option<&GateFailure> {
        match self {
            GateVerdict::Pass => None,
            GateVerdict::Fail(failure) => Some(failure),
        }
    }
}

/// Map a raw degree string onto a coarse level
///
/// Lowercased substring tests, first match wins: `jd`/`doctor`,
/// `master`/`ms`, `bachelor`/`bs`, `mba`. Anything else is returned
/// lowercased.
pub fn normalize_degree(degree: &str) -> String {
    let d = degree.to_lowercase();
    if d.contains("jd") || d.contains("doctor") {
        "jd/doctorate".to_string()
    } else if d.contains("master") || d.contains("ms") {
        "master".to_string()
    } else if d.contains("bachelor") || d.contains("bs") {
        "bachelor".to_string()
    } else if d.contains("mba") {
        "mba".to_string()
    } else {
        d
    }
}

/// True when the candidate passes every constraint in effect
pub fn satisfies(candidate: &Candidate, criteria: &HardCriteria) -> bool {
    evaluate(candidate, criteria).is_pass()
}

/// Run the gate against the current UTC year
pub fn evaluate(candidate: &Candidate, criteria: &HardCriteria) -> GateVerdict {
    evaluate_at(candidate, criteria, current_utc_year())
}

/// Run the gate, measuring ongoing roles up to `current_year`
pub fn evaluate_at(
    candidate: &Candidate,
    criteria: &HardCriteria,
    current_year: i32,
) -> GateVerdict {
    if let Some(required) = criteria.country() {
        let actual = candidate.country().unwrap_or_default();
        // an unknown country never disqualifies
        if !actual.is_empty() && !actual.to_lowercase().contains(&required.to_lowercase()) {
            return GateVerdict::Fail(GateFailure::Country {
                required: required.to_string(),
                actual: actual.to_string(),
            });
        }
    }

    if let Some(required) = criteria.degree() {
        let need = required.to_lowercase();
        // The normalized degree is tested against the raw criterion, not a
        // normalized one: "doctor" matches "jd/doctorate" but "phd" does not.
        let found = candidate
            .degrees()
            .iter()
            .any(|d| d.to_lowercase().contains(&need) || normalize_degree(d).contains(&need));
        if !found {
            return GateVerdict::Fail(GateFailure::MissingDegree {
                required: required.to_string(),
            });
        }
    }

    if let Some(required) = criteria.min_years() {
        let actual = total_experience_years_at(candidate.experience(), current_year);
        if actual < required {
            return GateVerdict::Fail(GateFailure::InsufficientExperience { required, actual });
        }
    }

    GateVerdict::Pass
}
