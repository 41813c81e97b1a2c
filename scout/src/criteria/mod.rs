//! Hard criteria: mandatory, disqualifying constraints on a candidate.

mod gate;
mod resolver;

pub use gate::{GateFailure, GateVerdict, evaluate, evaluate_at, normalize_degree, satisfies};
pub use resolver::{CriteriaCatalog, CriteriaResolver, builtin_profiles};

use serde::{Deserialize, Serialize};

/// Required attributes for a role
///
/// An absent key means no constraint for that attribute. Empty strings and a
/// zero `min_years` are treated the same as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HardCriteria {
    /// Substring to find in a candidate degree (raw or normalized)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,

    /// Minimum total years of experience
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_years: Option<u32>,

    /// Case-insensitive substring of the candidate country
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl HardCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_degree(mut self, degree: impl Into<String>) -> Self {
        self.degree = Some(degree.into());
        self
    }

    pub fn with_min_years(mut self, years: u32) -> Self {
        self.min_years = Some(years);
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Degree constraint, if one is in effect
    pub fn degree(&self) -> Option<&str> {
        self.degree.as_deref().filter(|d| !d.is_empty())
    }

    /// Experience constraint, if one is in effect
    pub fn min_years(&self) -> Option<u32> {
        self.min_years.filter(|&years| years > 0)
    }

    /// Country constraint, if one is in effect
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref().filter(|c| !c.is_empty())
    }

    /// True when no constraint is in effect
    pub fn is_empty(&self) -> bool {
        self.degree().is_none() && self.min_years().is_none() && self.country().is_none()
    }
}
