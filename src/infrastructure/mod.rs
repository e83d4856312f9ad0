//! Infrastructure layer: adapters for external systems.

pub mod config;
pub mod openrouter;
pub mod persistence;
