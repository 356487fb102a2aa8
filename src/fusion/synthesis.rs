//! Synthesis: fuse the ranked top set into the answer fields.
//!
//! Pure functions over an already-ranked slice, so every heuristic is
//! testable without a network. The findings citation is positional
//! (`top[i % top.len()]`), not semantic — an intentional approximation
//! kept for behaviour parity, pinned by tests below.

use crate::text::truncate_chars;
use crate::types::{ChannelResult, Citation, Finding};

/// Literal fallback summary when the top set is empty.
pub const NO_EVIDENCE: &str = "No strong evidence found.";

/// How many leading characters of each top snippet feed the summary.
const SUMMARY_SLICE_CHARS: usize = 300;

/// How many sentence fragments each top snippet may contribute.
const FINDINGS_PER_SNIPPET: usize = 2;

/// Concatenate the top snippets' leading slices, joined with `" ... "`.
pub fn executive_summary(top: &[ChannelResult]) -> String {
    if top.is_empty() {
        return NO_EVIDENCE.to_owned();
    }
    top.iter()
        .map(|result| truncate_chars(&result.snippet, SUMMARY_SLICE_CHARS))
        .collect::<Vec<_>>()
        .join(" ... ")
}

/// Split top snippets on `'.'`, keep up to two non-empty trimmed segments
/// per snippet, flatten in top-set order, cap at `max_findings`.
///
/// Citations are assigned by position in the flattened, capped list:
/// entry `i` cites `top[i % top.len()].id`.
pub fn key_findings(top: &[ChannelResult], max_findings: usize) -> Vec<Finding> {
    let fragments: Vec<String> = top
        .iter()
        .flat_map(|result| {
            result
                .snippet
                .split('.')
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .take(FINDINGS_PER_SNIPPET)
                .map(str::to_owned)
                .collect::<Vec<_>>()
        })
        .take(max_findings)
        .collect();

    fragments
        .into_iter()
        .enumerate()
        .map(|(i, text)| Finding {
            text,
            // Non-empty whenever fragments exist: fragments come from top.
            cite: Some(top[i % top.len()].id.clone()),
        })
        .collect()
}

/// One-line report: success count plus the top ids in rank order.
pub fn detailed_analysis(succeeded: usize, attempted: usize, top: &[ChannelResult]) -> String {
    let top_ids = if top.is_empty() {
        "none".to_owned()
    } else {
        top.iter()
            .map(|result| result.id.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!("{succeeded} of {attempted} channels succeeded; top sources in rank order: {top_ids}")
}

/// Appendix rows for every ranked (successful) result, in rank order.
pub fn appendix(ranked: &[ChannelResult]) -> Vec<Citation> {
    ranked
        .iter()
        .map(|result| Citation {
            id: result.id.clone(),
            url: result.url.clone(),
            authority: result.authority,
            status: result.status,
        })
        .collect()
}

/// `round(min(100, avg(rank over top) × 100))`; empty top set → 0.
pub fn confidence(top: &[ChannelResult]) -> u8 {
    let denominator = top.len().max(1) as f64;
    let average = top.iter().map(|result| result.rank).sum::<f64>() / denominator;
    (average * 100.0).min(100.0).round() as u8
}
