//! Core types for channel probing and answer synthesis.

use serde::{Deserialize, Serialize};

/// The settled result of one bounded fetch: success or failure, never both.
///
/// `ok` is `true` for *any* HTTP response, including 4xx/5xx — status
/// evaluation is left to the caller. Only transport-level failures
/// (timeout, DNS, TLS, connection reset) produce `ok: false`.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// Whether an HTTP response was received at all.
    pub ok: bool,
    /// HTTP status code, when a response was received.
    pub status: Option<u16>,
    /// Raw response body, when a response was received.
    pub body: Option<String>,
    /// Transport error description, when the fetch failed.
    pub error: Option<String>,
}

impl FetchOutcome {
    /// An HTTP response was received (any status code).
    pub fn success(status: u16, body: String) -> Self {
        Self {
            ok: true,
            status: Some(status),
            body: Some(body),
            error: None,
        }
    }

    /// The request failed at the transport level.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            status: None,
            body: None,
            error: Some(error.into()),
        }
    }
}

/// Per-channel probe result for one request.
///
/// One of these exists for every channel attempted, failed or not. Failed
/// results are excluded from ranking, findings, and the appendix.
#[derive(Debug, Clone)]
pub struct ChannelResult {
    /// Channel id within the domain's list.
    pub id: String,
    /// The concrete URL that was probed.
    pub url: String,
    /// Whether the fetch produced an HTTP response.
    pub ok: bool,
    /// HTTP status code, when available.
    pub status: Option<u16>,
    /// Transport error description, when the fetch failed.
    pub error: Option<String>,
    /// Normalized body text, capped before any scoring occurs.
    pub snippet: String,
    /// 1 if the query appears verbatim (case-insensitive) in the snippet.
    pub match_score: u8,
    /// Static trust weight for this channel, in [0, 1].
    pub authority: f64,
    /// Derived score: `match_score * authority`. Populated during ranking.
    pub rank: f64,
}

impl ChannelResult {
    /// A settled failure for a channel that produced no usable response.
    pub fn failed(id: impl Into<String>, url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            ok: false,
            status: None,
            error: Some(error.into()),
            snippet: String::new(),
            match_score: 0,
            authority: 0.0,
            rank: 0.0,
        }
    }
}

/// One extracted finding with its (positional) citation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// A trimmed sentence fragment from a top-ranked snippet.
    pub text: String,
    /// Citing channel id, assigned positionally across the top set.
    pub cite: Option<String>,
}

/// Appendix row for one successfully probed channel, in rank order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Citation {
    pub id: String,
    pub url: String,
    pub authority: f64,
    pub status: Option<u16>,
}

/// The fused answer — the sole externally visible output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerPayload {
    /// Concatenated leading slices of the top snippets, or the literal
    /// fallback `"No strong evidence found."` when nothing ranked.
    pub executive_summary: String,
    /// Rounded `min(100, avg(rank over top set) * 100)`, in [0, 100].
    pub confidence: u8,
    /// Up to `max_findings` sentence fragments with positional citations.
    pub key_findings: Vec<Finding>,
    /// One-line report: success count and top channel ids in rank order.
    pub detailed_analysis: String,
    /// Every ranked (successful) channel, in rank order.
    pub appendix: Vec<Citation>,
    /// Diagnostic: resolved domain and the full probed channel id list.
    pub probe: String,
}
