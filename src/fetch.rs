//! Bounded single-shot fetching with browser-like headers.
//!
//! [`Fetcher`] issues one outbound GET per call with a hard wall-clock
//! timeout and a rotating User-Agent. The call itself is infallible: every
//! transport failure (timeout, DNS, TLS, connection reset) settles into a
//! [`FetchOutcome`] with `ok: false`. HTTP error statuses are *not* fetch
//! failures — 4xx/5xx responses come back `ok: true` with their status,
//! and status evaluation is left to the caller.

use crate::config::FusionConfig;
use crate::error::FusionError;
use crate::types::FetchOutcome;
use rand::seq::SliceRandom;
use std::time::Duration;

/// Realistic browser User-Agent strings, rotated per request.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:133.0) Gecko/20100101 Firefox/133.0",
];

/// Browser-like Accept header to reduce trivial blocking by endpoints
/// expecting browser traffic.
const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Select a random User-Agent string from the rotation list.
pub fn random_user_agent() -> &'static str {
    let mut rng = rand::thread_rng();
    USER_AGENTS
        .choose(&mut rng)
        .copied()
        // USER_AGENTS is a non-empty const array; choose only returns None on empty slices
        .unwrap_or(USER_AGENTS[0])
}

/// Performs bounded single retrievals. Cheap to clone (the inner
/// `reqwest::Client` is reference-counted), so one instance is shared
/// across concurrently probed channels.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    timeout: Duration,
    user_agent: Option<String>,
}

impl Fetcher {
    /// Build a fetcher from config.
    ///
    /// The client has cookie support (consent pages), decompression, and a
    /// bounded redirect policy. The per-request timeout comes from
    /// `config.timeout_ms`.
    ///
    /// # Errors
    ///
    /// Returns [`FusionError::Http`] if the client cannot be constructed.
    pub fn new(config: &FusionConfig) -> Result<Self, FusionError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| FusionError::Http(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            timeout: Duration::from_millis(config.timeout_ms),
            user_agent: config.user_agent.clone(),
        })
    }

    /// Fetch one URL, settling into a [`FetchOutcome`] — never an error.
    ///
    /// The request is aborted once the configured timeout elapses; the
    /// abort is reported like any other transport failure.
    pub async fn fetch(&self, url: &str) -> FetchOutcome {
        let user_agent = match self.user_agent {
            Some(ref custom) => custom.clone(),
            None => random_user_agent().to_owned(),
        };

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .header(reqwest::header::USER_AGENT, user_agent)
            .header(reqwest::header::ACCEPT, ACCEPT)
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                return FetchOutcome::failure(format!(
                    "timed out after {}ms",
                    self.timeout.as_millis()
                ));
            }
            Err(e) => return FetchOutcome::failure(format!("request failed: {e}")),
        };

        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => {
                tracing::trace!(url, status, bytes = body.len(), "fetch settled");
                FetchOutcome::success(status, body)
            }
            Err(e) => FetchOutcome::failure(format!("body read failed: {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_user_agent_returns_valid_ua() {
        let ua = random_user_agent();
        assert!(USER_AGENTS.contains(&ua));
        assert!(ua.contains("Mozilla/5.0"));
    }

    #[test]
    fn user_agents_list_not_empty() {
        assert!(!USER_AGENTS.is_empty());
        assert_eq!(USER_AGENTS.len(), 5);
    }

    #[test]
    fn build_fetcher_with_default_config() {
        let config = FusionConfig::default();
        assert!(Fetcher::new(&config).is_ok());
    }

    #[test]
    fn build_fetcher_with_custom_ua() {
        let config = FusionConfig {
            user_agent: Some("TestBot/1.0".into()),
            ..Default::default()
        };
        let fetcher = Fetcher::new(&config).expect("client should build");
        assert_eq!(fetcher.user_agent.as_deref(), Some("TestBot/1.0"));
    }

    #[tokio::test]
    async fn unroutable_address_settles_as_failure() {
        // Port 1 on loopback refuses connections immediately.
        let config = FusionConfig {
            timeout_ms: 500,
            ..Default::default()
        };
        let fetcher = Fetcher::new(&config).expect("client should build");
        let outcome = fetcher.fetch("http://127.0.0.1:1/nothing").await;
        assert!(!outcome.ok);
        assert!(outcome.error.is_some());
        assert!(outcome.status.is_none());
    }

    #[tokio::test]
    async fn fetch_exceeding_timeout_settles_as_timeout_failure() {
        // A listener that accepts connections but never writes a response,
        // so the request can only end by hitting its deadline.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind loopback listener");
        let addr = listener.local_addr().expect("local addr");
        let server = tokio::spawn(async move {
            let mut open = Vec::new();
            loop {
                if let Ok((socket, _)) = listener.accept().await {
                    open.push(socket);
                }
            }
        });

        let config = FusionConfig {
            timeout_ms: 300,
            ..Default::default()
        };
        let fetcher = Fetcher::new(&config).expect("client should build");
        let outcome = fetcher.fetch(&format!("http://{addr}/slow")).await;

        assert!(!outcome.ok);
        assert!(outcome.status.is_none());
        assert!(
            outcome
                .error
                .as_deref()
                .expect("timeout must carry an error")
                .contains("timed out"),
            "expected a timeout error, got {:?}",
            outcome.error
        );
        server.abort();
    }

    #[tokio::test]
    async fn invalid_url_settles_as_failure() {
        let config = FusionConfig::default();
        let fetcher = Fetcher::new(&config).expect("client should build");
        let outcome = fetcher.fetch("not a url").await;
        assert!(!outcome.ok);
        assert!(outcome.error.is_some());
    }

    #[tokio::test]
    #[ignore] // Live test — run with `cargo test -- --ignored`
    async fn live_fetch_returns_ok_with_status() {
        let config = FusionConfig::default();
        let fetcher = Fetcher::new(&config).expect("client should build");
        let outcome = fetcher.fetch("https://example.com/").await;
        assert!(outcome.ok);
        assert_eq!(outcome.status, Some(200));
        assert!(outcome.body.is_some());
    }
}
