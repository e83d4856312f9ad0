//! Shared test fixtures: scripted in-memory oracles.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, Semaphore};

use ascent::domain::error::OracleError;
use ascent::domain::models::{CategoryScore, ScoreSnapshot};
use ascent::domain::ports::{Evaluator, Generator, OracleSet};
use ascent::infrastructure::persistence::InMemoryRubricRepository;
use ascent::services::{OptimizerSession, RubricStore};

/// A snapshot with a single category carrying the whole total.
pub fn snapshot(total: i64) -> ScoreSnapshot {
    ScoreSnapshot::new(vec![CategoryScore::new("quality", total)])
}

/// Generator that replays a scripted list of outcomes and records the source
/// text of every call.
pub struct ScriptedGenerator {
    outputs: Mutex<VecDeque<Result<String, OracleError>>>,
    calls: Mutex<Vec<String>>,
    gate: Option<Arc<Semaphore>>,
}

impl ScriptedGenerator {
    pub fn new(outputs: Vec<Result<String, OracleError>>) -> Self {
        Self {
            outputs: Mutex::new(outputs.into()),
            calls: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// Block each call until the test releases a permit.
    pub fn gated(mut self, gate: Arc<Semaphore>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }
}

#[async_trait]
impl Generator for ScriptedGenerator {
    async fn generate(&self, source_text: &str) -> Result<String, OracleError> {
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }
        self.calls.lock().await.push(source_text.to_string());
        self.outputs
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok("unscripted candidate".to_string()))
    }
}

/// Evaluator that replays a scripted list of outcomes.
pub struct ScriptedEvaluator {
    outputs: Mutex<VecDeque<Result<ScoreSnapshot, OracleError>>>,
    calls: Mutex<Vec<String>>,
    gate: Option<Arc<Semaphore>>,
}

impl ScriptedEvaluator {
    pub fn new(outputs: Vec<Result<ScoreSnapshot, OracleError>>) -> Self {
        Self {
            outputs: Mutex::new(outputs.into()),
            calls: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// Score every candidate with the same total.
    pub fn constant(total: i64, calls: usize) -> Self {
        Self::new((0..calls).map(|_| Ok(snapshot(total))).collect())
    }

    /// Block each call until the test releases a permit.
    pub fn gated(mut self, gate: Arc<Semaphore>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }
}

#[async_trait]
impl Evaluator for ScriptedEvaluator {
    async fn score(
        &self,
        candidate: &str,
        _categories: &str,
    ) -> Result<ScoreSnapshot, OracleError> {
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }
        self.calls.lock().await.push(candidate.to_string());
        self.outputs
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(snapshot(0)))
    }
}

/// Session wired to the scripted oracles and an in-memory rubric slot.
pub fn session_with(
    generator: Arc<ScriptedGenerator>,
    evaluator: Arc<ScriptedEvaluator>,
) -> OptimizerSession {
    let oracles = OracleSet::new(generator, evaluator);
    let rubric = Arc::new(RubricStore::new(Arc::new(InMemoryRubricRepository::new())));
    OptimizerSession::new(oracles, rubric)
}
