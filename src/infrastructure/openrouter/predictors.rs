//! OpenRouter-backed implementations of the oracle ports.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::domain::error::{ConfigError, OracleError};
use crate::domain::models::{CategoryScore, OracleConfig, ScoreSnapshot};
use crate::domain::ports::{Evaluator, Generator, OracleSet};

use super::client::OpenRouterClient;
use super::types::Message;

const GENERATOR_INSTRUCTIONS: &str = "Generate an engaging, concise, and well-structured tweet \
     from the input text. Respond with the tweet only: at most 280 characters, catchy, with \
     relevant hashtags.";

const EVALUATOR_INSTRUCTIONS: &str = "Evaluate the tweet against each of the given categories, \
     scoring each from 1 to 9. Respond with only a JSON list of objects, each with a 'category' \
     string and an integer 'score'.";

/// Tweet generation oracle backed by a chat completion.
pub struct TweetGenerator {
    client: Arc<OpenRouterClient>,
}

impl TweetGenerator {
    pub fn new(client: Arc<OpenRouterClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Generator for TweetGenerator {
    #[instrument(skip_all)]
    async fn generate(&self, source_text: &str) -> Result<String, OracleError> {
        let messages = vec![
            Message::system(GENERATOR_INSTRUCTIONS),
            Message::user(source_text),
        ];
        let content = self.client.complete(messages).await?;
        Ok(content.trim().to_string())
    }
}

/// Tweet scoring oracle backed by a chat completion.
pub struct TweetEvaluator {
    client: Arc<OpenRouterClient>,
}

impl TweetEvaluator {
    pub fn new(client: Arc<OpenRouterClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Evaluator for TweetEvaluator {
    #[instrument(skip_all)]
    async fn score(
        &self,
        candidate: &str,
        categories: &str,
    ) -> Result<ScoreSnapshot, OracleError> {
        let messages = vec![
            Message::system(EVALUATOR_INSTRUCTIONS),
            Message::user(format!("Tweet: {candidate}\n\nCategories: {categories}")),
        ];
        let content = self.client.complete(messages).await?;
        parse_scores(&content)
    }
}

/// Parse the scoring oracle's structured output.
///
/// The model often wraps the list in prose or a code fence, so parsing spans
/// the first `[` to the last `]`. A shape failure maps to
/// [`OracleError::MalformedScores`].
fn parse_scores(content: &str) -> Result<ScoreSnapshot, OracleError> {
    let start = content.find('[');
    let end = content.rfind(']');
    let json = match (start, end) {
        (Some(start), Some(end)) if start < end => &content[start..=end],
        _ => {
            return Err(OracleError::MalformedScores(format!(
                "no JSON list found in: {content}"
            )))
        }
    };

    let scores: Vec<CategoryScore> = serde_json::from_str(json)
        .map_err(|e| OracleError::MalformedScores(format!("{e}: {json}")))?;
    Ok(scores.into())
}

/// Build the oracle pair from config, reading `OPENROUTER_API_KEY` from the
/// environment. Both predictors share one HTTP client.
pub fn oracles_from_env(config: &OracleConfig) -> Result<OracleSet, ConfigError> {
    let client = Arc::new(OpenRouterClient::from_env(config)?);
    Ok(OracleSet::new(
        Arc::new(TweetGenerator::new(client.clone())),
        Arc::new(TweetEvaluator::new(client)),
    ))
}
