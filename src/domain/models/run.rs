//! Working memory for a single optimization run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::score::ScoreSnapshot;

/// Why the last run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopCause {
    /// Ran all configured iterations.
    Completed,
    /// Hit the configured number of consecutive non-improving iterations.
    PatienceExhausted,
    /// Stopped by an external stop request.
    Cancelled,
    /// An oracle call failed.
    Failed,
}

/// The controller's working memory for one optimization run.
///
/// Mutated exclusively by the controller while a run is active; read by the
/// session facade for display. Reset wholesale at the start of the next run,
/// so no run-to-run history is retained.
///
/// Invariant: `best_scores.total()` is monotonically non-decreasing for the
/// lifetime of a run, and a candidate is always updated in the same state
/// transition as its scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunState {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,

    /// True while a run is active. Cleared externally to request
    /// cancellation; cleared exactly once by the controller on every exit
    /// path.
    pub processing: bool,

    /// 1-based count of completed post-bootstrap iterations, 0 before the
    /// first one.
    pub iteration_index: u32,

    /// Consecutive non-improving iterations since the last improvement.
    pub patience_counter: u32,

    /// Most recently evaluated candidate. May score worse than the best.
    pub current_candidate: String,
    pub current_scores: ScoreSnapshot,

    /// Best candidate accepted so far.
    pub best_candidate: String,
    pub best_scores: ScoreSnapshot,

    /// Set when the run reaches a terminal state; `None` while running or
    /// before the first run.
    pub stop_cause: Option<StopCause>,
}

impl RunState {
    /// State before any run has started.
    pub fn idle() -> Self {
        Self {
            run_id: Uuid::nil(),
            started_at: Utc::now(),
            processing: false,
            iteration_index: 0,
            patience_counter: 0,
            current_candidate: String::new(),
            current_scores: ScoreSnapshot::default(),
            best_candidate: String::new(),
            best_scores: ScoreSnapshot::default(),
            stop_cause: None,
        }
    }

    /// Reset for a fresh run: counters zeroed, best cleared, processing set.
    pub fn begin(&mut self) {
        self.run_id = Uuid::new_v4();
        self.started_at = Utc::now();
        self.processing = true;
        self.iteration_index = 0;
        self.patience_counter = 0;
        self.best_candidate.clear();
        self.best_scores = ScoreSnapshot::default();
        self.stop_cause = None;
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::score::CategoryScore;

    #[test]
    fn begin_resets_counters_and_best() {
        let mut state = RunState::idle();
        state.iteration_index = 5;
        state.patience_counter = 2;
        state.best_candidate = "old best".to_string();
        state.best_scores = ScoreSnapshot::new(vec![CategoryScore::new("x", 9)]);
        state.stop_cause = Some(StopCause::Completed);

        state.begin();

        assert!(state.processing);
        assert_eq!(state.iteration_index, 0);
        assert_eq!(state.patience_counter, 0);
        assert!(state.best_candidate.is_empty());
        assert!(state.best_scores.is_empty());
        assert!(state.stop_cause.is_none());
        assert!(!state.run_id.is_nil());
    }
}
