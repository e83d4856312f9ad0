//! Score models produced by the scoring oracle.

use serde::{Deserialize, Serialize};

/// A per-category integer score.
///
/// The scoring oracle is asked for integers in 1..=9 but its output is not
/// validated or clamped: category names are free-form text (not guaranteed to
/// echo the requested categories) and a missing `score` field deserializes
/// as 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub score: i64,
}

impl CategoryScore {
    pub fn new(category: impl Into<String>, score: i64) -> Self {
        Self {
            category: category.into(),
            score,
        }
    }
}

/// Ordered scores for one candidate, always produced and stored atomically
/// with the candidate text they score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ScoreSnapshot {
    scores: Vec<CategoryScore>,
}

impl ScoreSnapshot {
    pub fn new(scores: Vec<CategoryScore>) -> Self {
        Self { scores }
    }

    pub fn scores(&self) -> &[CategoryScore] {
        &self.scores
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Sum of all scores. Missing values already defaulted to 0 at parse
    /// time, so the total of an empty snapshot is 0.
    pub fn total(&self) -> i64 {
        self.scores.iter().map(|s| s.score).sum()
    }
}

impl From<Vec<CategoryScore>> for ScoreSnapshot {
    fn from(scores: Vec<CategoryScore>) -> Self {
        Self::new(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_sums_all_scores() {
        let snapshot = ScoreSnapshot::new(vec![
            CategoryScore::new("clarity", 7),
            CategoryScore::new("hook", 5),
        ]);
        assert_eq!(snapshot.total(), 12);
    }

    #[test]
    fn empty_snapshot_totals_zero() {
        assert_eq!(ScoreSnapshot::default().total(), 0);
    }

    #[test]
    fn missing_score_field_defaults_to_zero() {
        let parsed: Vec<CategoryScore> =
            serde_json::from_str(r#"[{"category": "clarity"}, {"category": "hook", "score": 4}]"#)
                .unwrap();
        let snapshot = ScoreSnapshot::new(parsed);
        assert_eq!(snapshot.total(), 4);
    }

    #[test]
    fn out_of_range_scores_are_not_clamped() {
        let parsed: Vec<CategoryScore> =
            serde_json::from_str(r#"[{"category": "x", "score": 42}]"#).unwrap();
        assert_eq!(ScoreSnapshot::new(parsed).total(), 42);
    }
}
