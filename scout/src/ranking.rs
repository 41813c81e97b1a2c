//! Ranking driver: score every candidate, stable-sort, truncate.

use std::cmp::Ordering;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::Result;
use crate::artifacts::{load_candidates, write_json};
use crate::candidate::{Candidate, CandidateId};
use crate::criteria::{CriteriaResolver, HardCriteria};
use crate::scoring::{ScoreBreakdown, Scorer};

/// Number of ids kept when nothing else is configured
pub const DEFAULT_TOP_N: usize = 10;

/// Terminal artifact of a ranking run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingOutput {
    pub config_path: String,
    /// Ranked identifiers; `null` marks a candidate without an id
    pub object_ids: Vec<Option<CandidateId>>,
}

/// A candidate with its score, valid for one ranking run
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'a> {
    pub candidate: &'a Candidate,
    pub breakdown: ScoreBreakdown,
}

impl ScoredCandidate<'_> {
    pub fn score(&self) -> f64 {
        self.breakdown.total
    }

    pub fn id(&self) -> Option<CandidateId> {
        self.candidate.id()
    }
}

/// Top candidates in rank order
#[derive(Debug, Clone)]
pub struct RankedList<'a> {
    entries: Vec<ScoredCandidate<'a>>,
}

impl<'a> RankedList<'a> {
    pub fn entries(&self) -> &[ScoredCandidate<'a>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Identifiers in rank order
    pub fn object_ids(&self) -> Vec<Option<CandidateId>> {
        self.entries.iter().map(ScoredCandidate::id).collect()
    }

    pub fn into_output(self, config_path: impl Into<String>) -> RankingOutput {
        RankingOutput {
            config_path: config_path.into(),
            object_ids: self.object_ids(),
        }
    }
}

/// Scores candidates and keeps the best `top_n`
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    scorer: Scorer,
    top_n: usize,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(Scorer::new(), DEFAULT_TOP_N)
    }
}

impl Ranker {
    pub fn new(scorer: Scorer, top_n: usize) -> Self {
        Self { scorer, top_n }
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_scorer(mut self, scorer: Scorer) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Rank candidates by descending score
    ///
    /// The sort is stable: candidates with equal scores keep their input
    /// order.
    pub fn rank<'a>(
        &self,
        candidates: &'a [Candidate],
        query: &str,
        criteria: &HardCriteria,
    ) -> RankedList<'a> {
        let mut entries: Vec<ScoredCandidate<'a>> = candidates
            .iter()
            .map(|candidate| {
                let breakdown = self.scorer.breakdown(candidate, query, criteria);
                debug!(
                    id = ?candidate.id(),
                    score = breakdown.total,
                    gate = breakdown.gate,
                    keywords = breakdown.keywords,
                    experience = breakdown.experience,
                    "Scored candidate"
                );
                ScoredCandidate {
                    candidate,
                    breakdown,
                }
            })
            .collect();

        entries.sort_by(|a, b| b.score().partial_cmp(&a.score()).unwrap_or(Ordering::Equal));
        entries.truncate(self.top_n);

        let missing = entries.iter().filter(|e| e.id().is_none()).count();
        if missing > 0 {
            warn!(missing, "Ranked candidates without `_id` or `id`; emitting null ids");
        }

        info!(
            scored = candidates.len(),
            kept = entries.len(),
            passed_gate = entries.iter().filter(|e| e.breakdown.rejection.is_none()).count(),
            "Ranking complete"
        );

        RankedList { entries }
    }

    /// Rerank a candidate file and write the ranking output
    ///
    /// Loads `input`, resolves `config_path` to hard criteria, ranks, and
    /// writes `{config_path, object_ids}` to `output`.
    pub fn rerank_file(
        &self,
        input: impl AsRef<Path>,
        query: &str,
        config_path: &str,
        resolver: &dyn CriteriaResolver,
        output: impl AsRef<Path>,
    ) -> Result<RankingOutput> {
        let candidates = load_candidates(input)?;
        let criteria = resolver.resolve(config_path);
        let ranking = self.rank(&candidates, query, &criteria).into_output(config_path);
        write_json(output, &ranking)?;
        Ok(ranking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn candidates(value: serde_json::Value) -> Vec<Candidate> {
        serde_json::from_value(value).unwrap()
    }

    fn ids(list: &RankedList<'_>) -> Vec<String> {
        list.object_ids()
            .into_iter()
            .map(|id| id.map(|id| id.to_string()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let ranked = Ranker::default().rank(&[], "anything", &HardCriteria::new());
        assert!(ranked.is_empty());
        let output = ranked.into_output("tax_lawyer.yml");
        assert_eq!(
            serde_json::to_value(&output).unwrap(),
            json!({"config_path": "tax_lawyer.yml", "object_ids": []})
        );
    }

    #[test]
    fn test_ties_keep_input_order() {
        let pool = candidates(json!([
            {"_id": "c1"}, {"_id": "c2"}, {"_id": "c3"}, {"_id": "c4"}
        ]));
        let ranked = Ranker::default().rank(&pool, "", &HardCriteria::new());
        assert_eq!(ids(&ranked), vec!["c1", "c2", "c3", "c4"]);
    }

    #[test]
    fn test_higher_scores_move_up_and_ties_stay_stable() {
        let pool = candidates(json!([
            {"_id": "low1"},
            {"_id": "high", "name": "staff engineer"},
            {"_id": "low2"},
            {"_id": "high2", "name": "engineer"}
        ]));
        let ranked = Ranker::default().rank(&pool, "engineer", &HardCriteria::new());
        assert_eq!(ids(&ranked), vec!["high", "high2", "low1", "low2"]);
    }

    #[test]
    fn test_truncates_to_top_n() {
        let pool: Vec<Candidate> = (0..25)
            .map(|i| Candidate::try_from(json!({"_id": format!("c{i}")})).unwrap())
            .collect();

        let ranked = Ranker::default().rank(&pool, "", &HardCriteria::new());
        assert_eq!(ranked.len(), 10);
        assert_eq!(ids(&ranked)[9], "c9");

        let ranked = Ranker::default().with_top_n(3).rank(&pool, "", &HardCriteria::new());
        assert_eq!(ids(&ranked), vec!["c0", "c1", "c2"]);
    }

    #[test]
    fn test_missing_id_is_null() {
        let pool = candidates(json!([{"name": "anonymous"}, {"id": 5}]));
        let output = Ranker::default()
            .rank(&pool, "", &HardCriteria::new())
            .into_output("x.yml");
        assert_eq!(
            serde_json::to_value(&output.object_ids).unwrap(),
            json!([null, 5])
        );
    }

    #[test]
    fn test_numeric_ids_keep_their_json_value() {
        let pool = candidates(json!([
            {"_id": 1.5},
            {"_id": 18446744073709551615u64},
            {"_id": true}
        ]));
        let output = Ranker::default()
            .rank(&pool, "", &HardCriteria::new())
            .into_output("x.yml");
        assert_eq!(
            serde_json::to_value(&output.object_ids).unwrap(),
            json!([1.5, 18446744073709551615u64, null])
        );

        let reloaded: RankingOutput =
            serde_json::from_value(serde_json::to_value(&output).unwrap()).unwrap();
        assert_eq!(reloaded, output);
    }

    #[test]
    fn test_gate_dominates_soft_signals() {
        let pool = candidates(json!([
            {"_id": "keywords", "degree": ["MBA"], "name": "radiology radiology specialist",
             "experience": ["start_1990::end_2020"]},
            {"_id": "qualified", "degree": ["MD"], "experience": ["start_2020::end_2022"]}
        ]));
        let criteria = HardCriteria::new().with_degree("md").with_min_years(1);
        let ranked =
            Ranker::new(Scorer::at_year(2025), 10).rank(&pool, "radiology specialist", &criteria);

        assert_eq!(ids(&ranked), vec!["qualified", "keywords"]);
        assert_eq!(ranked.entries()[0].score(), 101.0);
        assert_eq!(ranked.entries()[1].score(), 2.0 + 10.0);
    }
}
