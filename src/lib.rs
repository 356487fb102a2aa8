//! # chorus
//!
//! Multi-channel web evidence fusion. Answers a natural-language query by
//! concurrently probing a small set of public web endpoints ("channels")
//! chosen for a topic domain, normalising each response to plain text,
//! scoring match × authority, and fusing the top results into a cited
//! [`AnswerPayload`].
//!
//! ## Design
//!
//! - Channel sets per domain (`general`, `flights`, `deals`, `sports`,
//!   `research`, `finance`); unknown domains fall back to `general`
//! - One bounded fetch per channel, all in flight together with a join
//!   barrier — a slow or failing channel never affects its siblings
//! - Static authority priors rank specialist sources above general ones
//! - Graceful degradation: total channel failure still yields an answer
//!   payload with the fallback summary and confidence 0
//!
//! ## Security
//!
//! - No API keys or secrets
//! - Queries are logged only at trace/debug level
//! - Snippets are normalised and length-capped before any scoring

pub mod authority;
pub mod config;
pub mod error;
pub mod fetch;
pub mod fusion;
pub mod registry;
pub mod server;
pub mod text;
pub mod types;

pub use authority::AuthorityTable;
pub use config::FusionConfig;
pub use error::{FusionError, Result};
pub use fusion::FusionEngine;
pub use registry::{ChannelDescriptor, ChannelRegistry};
pub use types::{AnswerPayload, ChannelResult, FetchOutcome, Finding};

/// Answer a query for a domain using the production channel tables.
///
/// # Errors
///
/// Returns [`FusionError::EmptyQuery`] for a missing/empty query,
/// [`FusionError::Config`] or [`FusionError::Http`] if the engine cannot
/// be constructed. Channel-level failures never surface here; they only
/// shrink the ranked set.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> chorus::Result<()> {
/// let answer = chorus::answer("general", "rust programming", &chorus::FusionConfig::default()).await?;
/// println!("{} (confidence {})", answer.executive_summary, answer.confidence);
/// # Ok(())
/// # }
/// ```
pub async fn answer(domain: &str, query: &str, config: &FusionConfig) -> Result<AnswerPayload> {
    let engine = FusionEngine::new(config.clone())?;
    engine.answer(domain, query).await
}

/// Answer with default configuration.
///
/// # Errors
///
/// Same as [`answer`].
pub async fn answer_default(domain: &str, query: &str) -> Result<AnswerPayload> {
    answer(domain, query, &FusionConfig::default()).await
}
