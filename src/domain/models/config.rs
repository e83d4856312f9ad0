use serde::{Deserialize, Serialize};

/// Main configuration structure for Ascent
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Oracle (OpenRouter) configuration
    #[serde(default)]
    pub oracle: OracleConfig,

    /// Optimization loop configuration
    #[serde(default)]
    pub optimizer: OptimizerConfig,

    /// Rubric persistence configuration
    #[serde(default)]
    pub rubric: RubricConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration for the OpenRouter-backed oracles
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OracleConfig {
    /// Model identifier routed through OpenRouter
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL for the OpenRouter API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// HTTP-Referer header value required by OpenRouter attribution
    #[serde(default = "default_referer")]
    pub referer: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_model() -> String {
    "anthropic/claude-3.5-sonnet".to_string()
}

fn default_base_url() -> String {
    "https://openrouter.ai/api/v1".to_string()
}

fn default_referer() -> String {
    "http://localhost:3000".to_string()
}

const fn default_timeout_secs() -> u64 {
    300
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            referer: default_referer(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Configuration for the hill-climbing loop
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OptimizerConfig {
    /// Maximum post-bootstrap iterations per run (1-20)
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Consecutive non-improving iterations tolerated before stopping (1-20)
    #[serde(default = "default_patience")]
    pub patience: u32,
}

const fn default_max_iterations() -> u32 {
    10
}

const fn default_patience() -> u32 {
    3
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            patience: default_patience(),
        }
    }
}

/// Configuration for rubric persistence
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub struct RubricConfig {
    /// Path to the rubric slot file. Defaults to
    /// `<data dir>/ascent/categories.json` when unset.
    #[serde(default)]
    pub slot_path: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
