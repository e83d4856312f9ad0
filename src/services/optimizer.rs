//! Hill-climbing optimization controller and session facade.
//!
//! One optimization run alternates between the generation and scoring
//! oracles: generate a candidate seeded from the best-so-far text, score it,
//! keep it only on strict improvement, and stop on patience exhaustion, the
//! iteration cap, cancellation, or an oracle failure.

use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::domain::error::{OracleError, RubricStoreError};
use crate::domain::models::{RunState, ScoreSnapshot, StopCause};
use crate::domain::ports::OracleSet;
use crate::services::rubric_store::RubricStore;

/// Text shown as the current candidate while the bootstrap step is in
/// flight.
const BOOTSTRAP_PLACEHOLDER: &str = "Generating initial tweet...";

/// Session state visible to the presentation layer.
///
/// Configuration fields may be edited while idle or while a run is active;
/// an active run reads them once at start, so edits take effect on the next
/// run. The embedded [`RunState`] is written only by the controller task.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub input_text: String,
    pub max_iterations: u32,
    pub patience: u32,
    pub run: RunState,
}

impl SessionState {
    fn new() -> Self {
        Self {
            input_text: String::new(),
            max_iterations: 10,
            patience: 3,
            run: RunState::idle(),
        }
    }
}

/// The externally observable optimization session.
///
/// All mutation of the shared state goes through one `RwLock`; the
/// controller task never holds the lock across an oracle call, so stop
/// requests and snapshot reads stay responsive while a call is outstanding.
pub struct OptimizerSession {
    state: Arc<RwLock<SessionState>>,
    oracles: OracleSet,
    rubric: Arc<RubricStore>,
}

impl OptimizerSession {
    pub fn new(oracles: OracleSet, rubric: Arc<RubricStore>) -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState::new())),
            oracles,
            rubric,
        }
    }

    /// Set the source text candidates are generated from.
    pub async fn set_input_text(&self, text: impl Into<String>) {
        self.state.write().await.input_text = text.into();
    }

    /// Set the post-bootstrap iteration cap for subsequent runs.
    pub async fn set_max_iterations(&self, max_iterations: u32) {
        self.state.write().await.max_iterations = max_iterations;
    }

    /// Set the patience (consecutive non-improving iterations tolerated).
    pub async fn set_patience(&self, patience: u32) {
        self.state.write().await.patience = patience;
    }

    /// Snapshot of the current run state for display.
    pub async fn snapshot(&self) -> RunState {
        self.state.read().await.run.clone()
    }

    /// Whether a run is currently active.
    pub async fn processing(&self) -> bool {
        self.state.read().await.run.processing
    }

    /// Append a rubric category for subsequent runs.
    pub async fn add_category(&self, description: &str) -> Result<(), RubricStoreError> {
        self.rubric.add(description).await
    }

    /// Remove a rubric category by position for subsequent runs.
    pub async fn remove_category(&self, index: usize) -> Result<(), RubricStoreError> {
        self.rubric.remove(index).await
    }

    /// Start an optimization run on a background task.
    ///
    /// Idempotent: if a run is already active the spawned task exits without
    /// touching any state. The returned handle completes when the run
    /// reaches a terminal state.
    pub fn start(&self) -> JoinHandle<()> {
        let state = Arc::clone(&self.state);
        let oracles = self.oracles.clone();
        let rubric = Arc::clone(&self.rubric);
        tokio::spawn(run_loop(state, oracles, rubric))
    }

    /// Request cancellation of the active run.
    ///
    /// Advisory: the controller observes it at iteration boundaries only, so
    /// an in-flight oracle call always completes first. Idempotent when
    /// already idle.
    pub async fn stop(&self) {
        let mut state = self.state.write().await;
        if state.run.processing {
            info!(run_id = %state.run.run_id, "stop requested");
            state.run.processing = false;
        }
    }
}

/// One full optimization run: reset, bootstrap, iterate, settle.
async fn run_loop(
    state: Arc<RwLock<SessionState>>,
    oracles: OracleSet,
    rubric: Arc<RubricStore>,
) {
    // Single-flight: a start while already running is a no-op.
    let (input_text, max_iterations, patience) = {
        let mut s = state.write().await;
        if s.run.processing {
            debug!("start ignored, a run is already active");
            return;
        }
        s.run.begin();
        (s.input_text.clone(), s.max_iterations, s.patience)
    };

    // The rubric is read once per run; edits made while the run is active
    // take effect on the next run.
    let categories = rubric.load().await.joined();

    {
        let mut s = state.write().await;
        info!(
            run_id = %s.run.run_id,
            max_iterations,
            patience,
            categories = %categories,
            "optimization run started"
        );
        s.run.current_candidate = BOOTSTRAP_PLACEHOLDER.to_string();
        s.run.current_scores = ScoreSnapshot::default();
    }

    let outcome = drive(&state, &oracles, &input_text, &categories, max_iterations, patience).await;

    // Settle terminal state. `processing` is cleared here on every exit
    // path, so the session can never be observed stuck running.
    let mut s = state.write().await;
    match outcome {
        Ok(cause) => {
            info!(run_id = %s.run.run_id, iterations = s.run.iteration_index, ?cause, "optimization run finished");
            s.run.stop_cause = Some(cause);
        }
        Err(err) => {
            error!(run_id = %s.run.run_id, error = %err, "optimization run failed");
            s.run.current_candidate = format!("Error: {err}");
            s.run.stop_cause = Some(StopCause::Failed);
        }
    }
    s.run.processing = false;
}

/// The hill-climbing state machine proper. Returns the terminal cause, or
/// the oracle error that aborted the run.
async fn drive(
    state: &Arc<RwLock<SessionState>>,
    oracles: &OracleSet,
    input_text: &str,
    categories: &str,
    max_iterations: u32,
    patience: u32,
) -> Result<StopCause, OracleError> {
    // Bootstrap: always one generate+score pair, outside the iteration cap
    // and not cancellable, so a run that starts produces at least one scored
    // candidate.
    let candidate = oracles.generator.generate(input_text).await?;
    let scores = oracles.evaluator.score(&candidate, categories).await?;
    let mut best_total = scores.total();
    {
        let mut s = state.write().await;
        debug!(run_id = %s.run.run_id, total = best_total, "bootstrap candidate scored");
        s.run.current_candidate = candidate.clone();
        s.run.current_scores = scores.clone();
        s.run.best_candidate = candidate;
        s.run.best_scores = scores;
    }

    for i in 1..=max_iterations {
        // Cancellation is polled here, before the next Generate is issued.
        let best = {
            let mut s = state.write().await;
            if !s.run.processing {
                return Ok(StopCause::Cancelled);
            }
            s.run.iteration_index = i;
            s.run.best_candidate.clone()
        };

        // Generation is seeded from the best-so-far candidate, not the
        // current one: hill climbing, not a random walk.
        let new_candidate = oracles.generator.generate(&best).await?;
        let new_scores = oracles.evaluator.score(&new_candidate, categories).await?;
        let new_total = new_scores.total();

        let mut s = state.write().await;
        s.run.current_candidate = new_candidate.clone();
        s.run.current_scores = new_scores.clone();

        // Strict improvement required; ties count against patience so the
        // best does not oscillate between equally-scored candidates.
        if new_total > best_total {
            debug!(run_id = %s.run.run_id, iteration = i, new_total, best_total, "accepted new best");
            s.run.best_candidate = new_candidate;
            s.run.best_scores = new_scores;
            best_total = new_total;
            s.run.patience_counter = 0;
        } else {
            s.run.patience_counter += 1;
            debug!(
                run_id = %s.run.run_id,
                iteration = i,
                new_total,
                best_total,
                patience_counter = s.run.patience_counter,
                "rejected candidate"
            );
        }

        if s.run.patience_counter >= patience {
            warn!(run_id = %s.run.run_id, iteration = i, "patience exhausted");
            return Ok(StopCause::PatienceExhausted);
        }
    }

    Ok(StopCause::Completed)
}
