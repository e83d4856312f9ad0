//! Port trait definitions (Hexagonal Architecture)
//!
//! Async trait interfaces that infrastructure adapters must implement:
//! - `Generator` / `Evaluator`: the generation and scoring oracles
//! - `RubricRepository`: durable storage for the rubric blob
//!
//! These contracts keep the optimization controller independent of the
//! OpenRouter transport and the on-disk rubric slot, and let tests inject
//! fakes for both.

pub mod oracle;
pub mod rubric_repository;

pub use oracle::{Evaluator, Generator, OracleSet};
pub use rubric_repository::RubricRepository;
