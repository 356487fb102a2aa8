//! Error types for the chorus crate.
//!
//! Channel-level failures (timeouts, transport errors, unparseable HTML)
//! never appear here — they are absorbed into per-channel results. Only
//! request validation and startup failures surface as [`FusionError`].

/// Errors that can occur when answering a query.
#[derive(Debug, thiserror::Error)]
pub enum FusionError {
    /// The query was missing or empty. Maps to a 400 response at the
    /// transport boundary.
    #[error("query required")]
    EmptyQuery,

    /// The outbound HTTP client could not be constructed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Invalid fusion configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for chorus results.
pub type Result<T> = std::result::Result<T, FusionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_empty_query() {
        let err = FusionError::EmptyQuery;
        assert_eq!(err.to_string(), "query required");
    }

    #[test]
    fn display_http() {
        let err = FusionError::Http("client build failed".into());
        assert_eq!(err.to_string(), "HTTP error: client build failed");
    }

    #[test]
    fn display_config() {
        let err = FusionError::Config("timeout_ms must be > 0".into());
        assert_eq!(err.to_string(), "config error: timeout_ms must be > 0");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FusionError>();
    }
}
