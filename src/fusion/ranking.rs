//! Ranking: `rank = match_score × authority`, stable descending order.
//!
//! Failed channel results are dropped here — they never enter ranking,
//! findings, or the appendix. Ties keep original channel-list order
//! (`sort_by` is stable), so ordering is deterministic for a given input.

use crate::types::ChannelResult;

/// Filter to successful outcomes, populate `rank`, sort descending.
pub fn rank_channels(results: Vec<ChannelResult>) -> Vec<ChannelResult> {
    let mut ranked: Vec<ChannelResult> = results.into_iter().filter(|r| r.ok).collect();
    for result in &mut ranked {
        result.rank = f64::from(result.match_score) * result.authority;
    }
    ranked.sort_by(|a, b| {
        b.rank
            .partial_cmp(&a.rank)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}

/// The leading slice of the ranked list used for synthesis.
pub fn top_set(ranked: &[ChannelResult], top_results: usize) -> &[ChannelResult] {
    &ranked[..ranked.len().min(top_results)]
}
