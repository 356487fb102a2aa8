//! Authority table — static trust priors per channel id.
//!
//! This encodes domain expertise, not a learned value: specialist and
//! academic sources outrank encyclopedic ones, which outrank general
//! search engines. Unknown ids get the default weight.

use std::collections::HashMap;

/// Trust weight for channel ids with no entry in the table, including
/// the general-purpose search engines.
pub const DEFAULT_AUTHORITY: f64 = 0.5;

/// Read-only lookup from channel id to a trust weight in [0, 1].
#[derive(Debug, Clone)]
pub struct AuthorityTable {
    weights: HashMap<&'static str, f64>,
}

impl AuthorityTable {
    /// Build a table from custom weights (test fixtures).
    pub fn new(weights: HashMap<&'static str, f64>) -> Self {
        Self { weights }
    }

    /// The trust weight for a channel id, defaulting to
    /// [`DEFAULT_AUTHORITY`] for unknown ids.
    pub fn authority_of(&self, channel_id: &str) -> f64 {
        self.weights
            .get(channel_id)
            .copied()
            .unwrap_or(DEFAULT_AUTHORITY)
    }
}

impl Default for AuthorityTable {
    fn default() -> Self {
        let mut weights = HashMap::new();
        // Specialist / academic sources.
        weights.insert("arxiv", 0.95);
        weights.insert("semantic_scholar", 0.95);
        weights.insert("espn", 0.95);
        weights.insert("flightaware", 0.95);
        weights.insert("kayak", 0.95);
        weights.insert("slickdeals", 0.95);
        // Encyclopedic sources.
        weights.insert("wikipedia", 0.9);
        // Finance specialists.
        weights.insert("yahoo_finance", 0.8);
        weights.insert("marketwatch", 0.8);
        Self { weights }
    }
}
