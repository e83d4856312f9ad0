use thiserror::Error;

/// Configuration errors surfaced when an oracle set or config is first built.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("OPENROUTER_API_KEY environment variable not set")]
    MissingApiKey,

    #[error("Invalid max_iterations: {0}. Must be between 1 and 20")]
    InvalidMaxIterations(u32),

    #[error("Invalid patience: {0}. Must be between 1 and 20")]
    InvalidPatience(u32),

    #[error("Invalid timeout: {0}s. Must be positive")]
    InvalidTimeout(u64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Failures from the generation or scoring oracle. Any variant aborts the
/// current optimization run; the controller performs no retries.
#[derive(Error, Debug)]
pub enum OracleError {
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Oracle API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Invalid API key")]
    Auth,

    #[error("Oracle returned an empty response")]
    EmptyResponse,

    #[error("Scoring oracle returned malformed scores: {0}")]
    MalformedScores(String),

    #[error("Oracle not configured: {0}")]
    NotConfigured(#[from] ConfigError),
}

/// Errors from rubric persistence.
///
/// Only the write path is loud: a corrupt persisted blob on load degrades to
/// the default rubric and is never surfaced past a warning log.
#[derive(Error, Debug)]
pub enum RubricStoreError {
    #[error("Failed to serialize rubric: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write rubric slot: {0}")]
    Write(#[from] std::io::Error),
}
