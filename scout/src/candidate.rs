//! Candidate records.
//!
//! A candidate is kept as the raw JSON object it arrived as, so that every
//! attribute written by the vector index survives a retrieve/rerank round
//! trip. Typed accessors read the handful of fields the ranking core needs and
//! treat anything of the wrong JSON type as absent.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Attribute holding the primary identifier
pub const PRIMARY_ID_KEY: &str = "_id";
/// Fallback identifier attribute
pub const FALLBACK_ID_KEY: &str = "id";
/// Degree list attributes, in lookup order
pub const DEGREE_KEYS: &[&str] = &["deg_degrees", "degrees", "degree"];
/// Free-text attributes used for keyword matching, in concatenation order
pub const SEARCH_TEXT_KEYS: &[&str] = &["rerankSummary", "rerank_summary", "name"];
/// Distance attribute attached by the vector index
pub const DISTANCE_KEY: &str = "$dist";

/// Identifier of a candidate, re-emitted with its original JSON type
///
/// Numeric ids keep the exact JSON number, so u64 and float ids survive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CandidateId {
    Text(String),
    Numeric(Number),
}

impl CandidateId {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(CandidateId::Text(s.clone())),
            Value::Number(n) => Some(CandidateId::Numeric(n.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateId::Text(s) => write!(f, "{}", s),
            CandidateId::Numeric(n) => write!(f, "{}", n),
        }
    }
}

impl From<i64> for CandidateId {
    fn from(value: i64) -> Self {
        CandidateId::Numeric(value.into())
    }
}

impl From<&str> for CandidateId {
    fn from(value: &str) -> Self {
        CandidateId::Text(value.to_string())
    }
}

/// A person record being evaluated for a role
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Candidate {
    attributes: Map<String, Value>,
}

impl Candidate {
    /// Wrap a raw attribute map
    pub fn from_attributes(attributes: Map<String, Value>) -> Self {
        Self { attributes }
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    pub fn into_attributes(self) -> Map<String, Value> {
        self.attributes
    }

    /// Raw attribute lookup
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Identifier from `_id`, falling back to `id` only when `_id` is absent
    ///
    /// A present but null `_id` yields `None`.
    pub fn id(&self) -> Option<CandidateId> {
        match self.attributes.get(PRIMARY_ID_KEY) {
            Some(value) => CandidateId::from_value(value),
            None => self
                .attributes
                .get(FALLBACK_ID_KEY)
                .and_then(CandidateId::from_value),
        }
    }

    pub fn country(&self) -> Option<&str> {
        self.string_attribute("country")
    }

    pub fn name(&self) -> Option<&str> {
        self.string_attribute("name")
    }

    /// Degree strings from the first of `deg_degrees`, `degrees`, `degree`
    /// that holds any
    pub fn degrees(&self) -> Vec<&str> {
        DEGREE_KEYS
            .iter()
            .map(|key| self.string_list(key))
            .find(|list| !list.is_empty())
            .unwrap_or_default()
    }

    /// Encoded experience record strings
    pub fn experience(&self) -> Vec<&str> {
        self.string_list("experience")
    }

    /// Encoded education record strings
    pub fn education(&self) -> Vec<&str> {
        self.string_list("education")
    }

    /// Lowercased free text used for keyword matching
    pub fn search_text(&self) -> String {
        SEARCH_TEXT_KEYS
            .iter()
            .filter_map(|key| self.string_attribute(key))
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// ANN distance reported by the vector index, if retained
    pub fn distance(&self) -> Option<f64> {
        self.attributes.get(DISTANCE_KEY).and_then(Value::as_f64)
    }

    fn string_attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }

    fn string_list(&self, key: &str) -> Vec<&str> {
        match self.attributes.get(key) {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            Some(Value::String(single)) => vec![single.as_str()],
            _ => Vec::new(),
        }
    }
}

impl TryFrom<Value> for Candidate {
    type Error = Value;

    /// Accepts JSON objects; hands any other value back
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(attributes) => Ok(Self { attributes }),
            other => Err(other),
        }
    }
}
