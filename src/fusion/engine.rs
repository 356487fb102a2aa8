//! Fusion engine: concurrent channel fan-out with a join barrier.
//!
//! One task per channel, all spawned together, every one awaited before
//! ranking begins — no early exit, no cross-channel cancellation. The only
//! per-channel deadline is the fetch timeout. A channel's failure (or its
//! task panicking) settles as an `ok:false` result for that channel and
//! cannot affect siblings or the join.

use std::sync::Arc;

use crate::authority::AuthorityTable;
use crate::config::FusionConfig;
use crate::error::FusionError;
use crate::fetch::Fetcher;
use crate::registry::ChannelRegistry;
use crate::text;
use crate::types::{AnswerPayload, ChannelResult};

use super::ranking;
use super::synthesis;

/// Orchestrates per-channel retrieval, scoring, ranking, and synthesis.
///
/// Registry and authority table are shared read-only; inject fixtures via
/// [`FusionEngine::with_tables`] for hermetic tests.
pub struct FusionEngine {
    registry: Arc<ChannelRegistry>,
    authority: Arc<AuthorityTable>,
    fetcher: Fetcher,
    config: FusionConfig,
}

impl FusionEngine {
    /// Engine with the production channel and authority tables.
    ///
    /// # Errors
    ///
    /// Returns [`FusionError::Config`] for an invalid config or
    /// [`FusionError::Http`] if the HTTP client cannot be built.
    pub fn new(config: FusionConfig) -> Result<Self, FusionError> {
        Self::with_tables(
            Arc::new(ChannelRegistry::default()),
            Arc::new(AuthorityTable::default()),
            config,
        )
    }

    /// Engine with injected tables.
    ///
    /// # Errors
    ///
    /// Same as [`FusionEngine::new`].
    pub fn with_tables(
        registry: Arc<ChannelRegistry>,
        authority: Arc<AuthorityTable>,
        config: FusionConfig,
    ) -> Result<Self, FusionError> {
        config.validate()?;
        let fetcher = Fetcher::new(&config)?;
        Ok(Self {
            registry,
            authority,
            fetcher,
            config,
        })
    }

    /// Answer a query for a domain.
    ///
    /// # Pipeline
    ///
    /// 1. Resolve the channel list (unknown domain → `general`)
    /// 2. Spawn one probe task per channel: build URL, bounded fetch,
    ///    normalise + cap snippet, match-score, authority lookup
    /// 3. Await every task (join barrier; panics become failed results)
    /// 4. Rank successes by `match_score × authority`, stable descending
    /// 5. Synthesize summary, findings, analysis, appendix, confidence
    ///
    /// # Errors
    ///
    /// Only [`FusionError::EmptyQuery`] for a missing/empty query. Every
    /// channel-level failure degrades into a smaller ranked set; total
    /// failure still returns a payload (fallback summary, confidence 0).
    pub async fn answer(&self, domain: &str, query: &str) -> Result<AnswerPayload, FusionError> {
        if query.trim().is_empty() {
            return Err(FusionError::EmptyQuery);
        }

        let resolved = self.registry.resolve_domain(domain);
        let channels = self.registry.channels_for(domain);
        tracing::debug!(
            domain = resolved,
            channels = channels.len(),
            "fanning out channel probes"
        );

        let needle = query.to_lowercase();
        let mut probes: Vec<(String, String)> = Vec::with_capacity(channels.len());
        let mut handles = Vec::with_capacity(channels.len());

        for channel in channels {
            let id = channel.id().to_owned();
            let url = channel.url_for(query);
            probes.push((id.clone(), url.clone()));

            let fetcher = self.fetcher.clone();
            let needle = needle.clone();
            let authority = self.authority.authority_of(channel.id());
            let snippet_chars = self.config.snippet_chars;
            handles.push(tokio::spawn(async move {
                probe_channel(&fetcher, id, url, &needle, authority, snippet_chars).await
            }));
        }

        // Join barrier: every probe settles before ranking begins. Awaiting
        // in channel order keeps the result order deterministic.
        let mut results = Vec::with_capacity(handles.len());
        for (handle, (id, url)) in handles.into_iter().zip(&probes) {
            match handle.await {
                Ok(result) => results.push(result),
                Err(join_error) => {
                    tracing::warn!(channel = %id, error = %join_error, "probe task aborted");
                    results.push(ChannelResult::failed(
                        id.clone(),
                        url.clone(),
                        format!("probe task aborted: {join_error}"),
                    ));
                }
            }
        }

        let attempted = results.len();
        let succeeded = results.iter().filter(|result| result.ok).count();
        tracing::debug!(succeeded, attempted, "channel probes settled");

        let probe = format!(
            "{resolved} -> [{}]",
            probes
                .iter()
                .map(|(id, _)| id.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        let ranked = ranking::rank_channels(results);
        let top = ranking::top_set(&ranked, self.config.top_results);

        Ok(AnswerPayload {
            executive_summary: synthesis::executive_summary(top),
            confidence: synthesis::confidence(top),
            key_findings: synthesis::key_findings(top, self.config.max_findings),
            detailed_analysis: synthesis::detailed_analysis(succeeded, attempted, top),
            appendix: synthesis::appendix(&ranked),
            probe,
        })
    }
}

/// Probe one channel end to end. Infallible: every failure settles into an
/// `ok:false` result for this channel alone.
async fn probe_channel(
    fetcher: &Fetcher,
    id: String,
    url: String,
    needle: &str,
    authority: f64,
    snippet_chars: usize,
) -> ChannelResult {
    let outcome = fetcher.fetch(&url).await;
    if !outcome.ok {
        let error = outcome.error.unwrap_or_else(|| "fetch failed".to_owned());
        tracing::warn!(channel = %id, error = %error, "channel probe failed");
        return ChannelResult::failed(id, url, error);
    }

    // Cap the snippet before any scoring happens.
    let body = outcome.body.unwrap_or_default();
    let snippet = text::truncate_chars(&text::normalise(&body), snippet_chars);
    let match_score = u8::from(snippet.to_lowercase().contains(needle));

    ChannelResult {
        id,
        url,
        ok: true,
        status: outcome.status,
        error: None,
        snippet,
        match_score,
        authority,
        rank: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ChannelDescriptor;
    use std::collections::HashMap;

    /// Registry whose every channel points at a loopback port that refuses
    /// connections, so probes settle quickly without a network.
    fn unroutable_registry() -> Arc<ChannelRegistry> {
        let mut domains = HashMap::new();
        domains.insert(
            "general",
            vec![
                ChannelDescriptor::new("duckduckgo", |q| format!("http://127.0.0.1:1/a?q={q}")),
                ChannelDescriptor::new("bing", |q| format!("http://127.0.0.1:1/b?q={q}")),
                ChannelDescriptor::new("wikipedia", |q| format!("http://127.0.0.1:1/c?q={q}")),
            ],
        );
        Arc::new(ChannelRegistry::new(domains))
    }

    fn test_engine() -> FusionEngine {
        let config = FusionConfig {
            timeout_ms: 500,
            ..Default::default()
        };
        FusionEngine::with_tables(
            unroutable_registry(),
            Arc::new(AuthorityTable::default()),
            config,
        )
        .expect("engine should build")
    }

    #[tokio::test]
    async fn empty_query_is_rejected() {
        let engine = test_engine();
        let err = engine.answer("general", "").await.unwrap_err();
        assert!(matches!(err, FusionError::EmptyQuery));
        let err = engine.answer("general", "   \t ").await.unwrap_err();
        assert!(matches!(err, FusionError::EmptyQuery));
    }

    #[tokio::test]
    async fn total_channel_failure_degrades_not_errors() {
        let engine = test_engine();
        let payload = engine
            .answer("general", "anything")
            .await
            .expect("degraded payload, not an error");
        assert_eq!(payload.executive_summary, synthesis::NO_EVIDENCE);
        assert_eq!(payload.confidence, 0);
        assert!(payload.appendix.is_empty());
        assert!(payload.key_findings.is_empty());
        assert!(payload.detailed_analysis.starts_with("0 of 3 channels"));
    }

    #[tokio::test]
    async fn probe_lists_all_attempted_channels() {
        let engine = test_engine();
        let payload = engine.answer("general", "anything").await.expect("payload");
        assert_eq!(payload.probe, "general -> [duckduckgo, bing, wikipedia]");
    }

    #[tokio::test]
    async fn unknown_domain_uses_general_channels() {
        let engine = test_engine();
        let payload = engine
            .answer("unknown_domain_xyz", "anything")
            .await
            .expect("payload");
        assert!(payload.probe.starts_with("general -> "));
    }

    #[tokio::test]
    async fn failed_channels_absent_from_appendix_and_findings() {
        let engine = test_engine();
        let payload = engine.answer("general", "anything").await.expect("payload");
        assert!(payload.appendix.is_empty());
        assert!(payload
            .key_findings
            .iter()
            .all(|finding| finding.cite.is_none()));
    }

    #[tokio::test]
    async fn invalid_config_rejected_at_construction() {
        let config = FusionConfig {
            timeout_ms: 0,
            ..Default::default()
        };
        let result = FusionEngine::new(config);
        assert!(matches!(result, Err(FusionError::Config(_))));
    }

    #[test]
    fn probe_channel_marks_match_case_insensitively() {
        // Direct scoring check without a fetch: mirrors probe_channel's
        // match computation on an already-normalised snippet.
        let snippet = "The Rust Programming Language";
        assert_eq!(u8::from(snippet.to_lowercase().contains("rust")), 1);
        assert_eq!(u8::from(snippet.to_lowercase().contains("python")), 0);
    }
}
