//! Ascent - Hill-Climbing Tweet Optimizer
//!
//! Ascent iteratively improves a generated tweet against a user-defined
//! scoring rubric, using an LLM text-generation oracle and an LLM scoring
//! oracle as black boxes. Each step generates a candidate seeded from the
//! best tweet so far, scores it per category, and keeps it only on strict
//! improvement, stopping on patience exhaustion, an iteration cap, a stop
//! request, or an oracle failure.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): models, error taxonomy, and the oracle and
//!   persistence ports
//! - **Service Layer** (`services`): the rubric store and the optimization
//!   controller with its session facade
//! - **Infrastructure Layer** (`infrastructure`): OpenRouter-backed oracles,
//!   the file-backed rubric slot, and configuration loading
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use ascent::domain::models::Config;
//! use ascent::infrastructure::openrouter::oracles_from_env;
//! use ascent::infrastructure::persistence::FileRubricRepository;
//! use ascent::services::{OptimizerSession, RubricStore};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let oracles = oracles_from_env(&config.oracle)?;
//!     let rubric = Arc::new(RubricStore::new(Arc::new(
//!         FileRubricRepository::from_config(&config.rubric),
//!     )));
//!     let session = OptimizerSession::new(oracles, rubric);
//!     session.set_input_text("Rust is a systems language.").await;
//!     session.start().await?;
//!     println!("{}", session.snapshot().await.best_candidate);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::error::{ConfigError, OracleError, RubricStoreError};
pub use domain::models::{
    Category, CategoryScore, Config, RubricSet, RunState, ScoreSnapshot, StopCause,
};
pub use domain::ports::{Evaluator, Generator, OracleSet, RubricRepository};
pub use infrastructure::config::ConfigLoader;
pub use services::{OptimizerSession, RubricStore};
