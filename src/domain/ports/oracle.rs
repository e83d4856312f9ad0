//! Oracle port traits.
//!
//! The controller treats text generation and scoring as black-box
//! capabilities: both are potentially slow (network-bound) and fallible.
//! Neither contract retries internally; a single failure aborts the run.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::error::OracleError;
use crate::domain::models::ScoreSnapshot;

/// Capability contract for producing a candidate tweet from a source text.
///
/// Implementations must be `Send + Sync` so a handle can be shared across
/// sequential runs; no concurrent calls occur in this design (single-flight).
#[async_trait]
pub trait Generator: Send + Sync {
    /// Produce a candidate text from `source_text`.
    async fn generate(&self, source_text: &str) -> Result<String, OracleError>;
}

/// Capability contract for scoring a candidate against a rubric.
#[async_trait]
pub trait Evaluator: Send + Sync {
    /// Score `candidate` against `categories`, a `"; "`-joined list of
    /// category descriptions.
    ///
    /// Returned category names are free-form text and are not guaranteed to
    /// echo the requested categories verbatim.
    async fn score(&self, candidate: &str, categories: &str)
        -> Result<ScoreSnapshot, OracleError>;
}

/// The pair of oracle handles a session is constructed with.
///
/// Built once at session start and passed in by shared ownership, so tests
/// can substitute fake oracles for the OpenRouter-backed ones.
#[derive(Clone)]
pub struct OracleSet {
    pub generator: Arc<dyn Generator>,
    pub evaluator: Arc<dyn Evaluator>,
}

impl OracleSet {
    pub fn new(generator: Arc<dyn Generator>, evaluator: Arc<dyn Evaluator>) -> Self {
        Self {
            generator,
            evaluator,
        }
    }
}
