//! Channel registry — maps a topic domain to its ordered channel set.
//!
//! Each [`ChannelDescriptor`] pairs a channel id with a pure URL builder.
//! The builder is uniformly a function of the query string: it URL-encodes
//! the query and, for some channels, augments it with a bias keyword
//! (e.g. " flights", " best price"). The registry is immutable after
//! construction and shared into the engine by `Arc`, never a mutable
//! global; tests inject their own domain maps.

use std::collections::HashMap;

/// Percent/plus-encode a query for use in a URL query string.
fn encode(query: &str) -> String {
    url::form_urlencoded::byte_serialize(query.as_bytes()).collect()
}

/// One external source endpoint queried for a given domain.
///
/// Identity is the id within a domain's list; ids may repeat across
/// domains. The URL builder is a plain `fn` pointer since every builder is
/// a pure static function of the query.
#[derive(Debug, Clone, Copy)]
pub struct ChannelDescriptor {
    id: &'static str,
    build_url: fn(&str) -> String,
}

impl ChannelDescriptor {
    /// Create a descriptor from an id and a pure query → URL function.
    pub fn new(id: &'static str, build_url: fn(&str) -> String) -> Self {
        Self { id, build_url }
    }

    /// The channel id.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Build the concrete probe URL for a query.
    pub fn url_for(&self, query: &str) -> String {
        (self.build_url)(query)
    }
}

/// Read-only mapping from domain name to its ordered channel list.
#[derive(Debug, Clone)]
pub struct ChannelRegistry {
    domains: HashMap<&'static str, Vec<ChannelDescriptor>>,
}

/// The fallback domain used when the requested one is unknown.
pub const DEFAULT_DOMAIN: &str = "general";

impl ChannelRegistry {
    /// Build a registry from a custom domain map (test fixtures).
    ///
    /// The map should contain a `general` entry; it is the fallback for
    /// unknown domains. Without one, unknown domains resolve to an empty
    /// channel list.
    pub fn new(domains: HashMap<&'static str, Vec<ChannelDescriptor>>) -> Self {
        Self { domains }
    }

    /// The ordered channel list for a domain, falling back to `general`.
    pub fn channels_for(&self, domain: &str) -> &[ChannelDescriptor] {
        self.domains
            .get(domain)
            .or_else(|| self.domains.get(DEFAULT_DOMAIN))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The domain name a request actually resolves to.
    pub fn resolve_domain(&self, domain: &str) -> &'static str {
        self.domains
            .get_key_value(domain)
            .map(|(key, _)| *key)
            .unwrap_or(DEFAULT_DOMAIN)
    }

    /// All known domain names.
    pub fn domains(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.domains.keys().copied()
    }
}

impl Default for ChannelRegistry {
    /// The production channel table.
    ///
    /// Authority tiers (see `authority.rs`): specialist/academic sources
    /// carry 0.95, encyclopedic 0.9, finance specialists 0.8, general
    /// search engines the 0.5 default.
    fn default() -> Self {
        let mut domains: HashMap<&'static str, Vec<ChannelDescriptor>> = HashMap::new();

        domains.insert(
            "general",
            vec![
                ChannelDescriptor::new("duckduckgo", |q| {
                    format!("https://html.duckduckgo.com/html/?q={}", encode(q))
                }),
                ChannelDescriptor::new("bing", |q| {
                    format!("https://www.bing.com/search?q={}", encode(q))
                }),
                ChannelDescriptor::new("brave", |q| {
                    format!("https://search.brave.com/search?q={}", encode(q))
                }),
                ChannelDescriptor::new("wikipedia", |q| {
                    format!("https://en.wikipedia.org/w/index.php?search={}", encode(q))
                }),
            ],
        );

        domains.insert(
            "flights",
            vec![
                ChannelDescriptor::new("duckduckgo", |q| {
                    format!(
                        "https://html.duckduckgo.com/html/?q={}",
                        encode(&format!("{q} flights"))
                    )
                }),
                ChannelDescriptor::new("kayak", |q| {
                    format!("https://www.kayak.com/flights?search={}", encode(q))
                }),
                ChannelDescriptor::new("flightaware", |q| {
                    format!("https://www.flightaware.com/search/?q={}", encode(q))
                }),
            ],
        );

        domains.insert(
            "deals",
            vec![
                ChannelDescriptor::new("duckduckgo", |q| {
                    format!(
                        "https://html.duckduckgo.com/html/?q={}",
                        encode(&format!("{q} best price"))
                    )
                }),
                ChannelDescriptor::new("slickdeals", |q| {
                    format!("https://slickdeals.net/newsearch.php?q={}", encode(q))
                }),
                ChannelDescriptor::new("bing", |q| {
                    format!("https://www.bing.com/search?q={}", encode(q))
                }),
            ],
        );

        domains.insert(
            "sports",
            vec![
                ChannelDescriptor::new("espn", |q| {
                    format!("https://www.espn.com/search/_/q/{}", encode(q))
                }),
                ChannelDescriptor::new("bing", |q| {
                    format!("https://www.bing.com/search?q={}", encode(q))
                }),
                ChannelDescriptor::new("duckduckgo", |q| {
                    format!(
                        "https://html.duckduckgo.com/html/?q={}",
                        encode(&format!("{q} sports"))
                    )
                }),
            ],
        );

        domains.insert(
            "research",
            vec![
                ChannelDescriptor::new("arxiv", |q| {
                    format!(
                        "https://export.arxiv.org/api/query?search_query=all:{}",
                        encode(q)
                    )
                }),
                ChannelDescriptor::new("semantic_scholar", |q| {
                    format!("https://www.semanticscholar.org/search?q={}", encode(q))
                }),
                ChannelDescriptor::new("wikipedia", |q| {
                    format!("https://en.wikipedia.org/w/index.php?search={}", encode(q))
                }),
                ChannelDescriptor::new("duckduckgo", |q| {
                    format!("https://html.duckduckgo.com/html/?q={}", encode(q))
                }),
            ],
        );

        domains.insert(
            "finance",
            vec![
                ChannelDescriptor::new("yahoo_finance", |q| {
                    format!("https://finance.yahoo.com/lookup?s={}", encode(q))
                }),
                ChannelDescriptor::new("marketwatch", |q| {
                    format!("https://www.marketwatch.com/search?q={}", encode(q))
                }),
                ChannelDescriptor::new("duckduckgo", |q| {
                    format!(
                        "https://html.duckduckgo.com/html/?q={}",
                        encode(&format!("{q} stock"))
                    )
                }),
            ],
        );

        Self { domains }
    }
}
