//! Domain models for the tweet optimizer.

pub mod config;
pub mod rubric;
pub mod run;
pub mod score;

pub use config::{Config, LoggingConfig, OptimizerConfig, OracleConfig, RubricConfig};
pub use rubric::{Category, RubricSet};
pub use run::{RunState, StopCause};
pub use score::{CategoryScore, ScoreSnapshot};
