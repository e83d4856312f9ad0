//! Domain layer for the Ascent tweet optimizer
//!
//! This module contains core business logic and domain models.

pub mod error;
pub mod models;
pub mod ports;

pub use error::{ConfigError, OracleError, RubricStoreError};
