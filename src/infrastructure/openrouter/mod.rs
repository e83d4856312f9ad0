//! OpenRouter-backed oracle adapters.
//!
//! One shared HTTP client and two predictors (generation and scoring) built
//! on the chat-completions API. Constructed explicitly once per process and
//! injected into the session; there are no global handles.

pub mod client;
pub mod predictors;
pub mod types;

pub use client::OpenRouterClient;
pub use predictors::{oracles_from_env, TweetEvaluator, TweetGenerator};
