//! Fusion configuration with sensible defaults.
//!
//! [`FusionConfig`] controls per-channel fetch timeouts, snippet bounds,
//! and synthesis limits. The defaults match the production pipeline;
//! tests override individual fields to exercise degraded paths quickly.

use crate::error::FusionError;

/// Configuration for the fusion pipeline.
///
/// Use [`Default::default()`] for production values, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct FusionConfig {
    /// Hard wall-clock timeout for each channel fetch, in milliseconds.
    pub timeout_ms: u64,
    /// Maximum snippet length in characters, enforced before scoring.
    pub snippet_chars: usize,
    /// How many ranked results form the top set used for synthesis.
    pub top_results: usize,
    /// Maximum number of key findings in the answer.
    pub max_findings: usize,
    /// Custom User-Agent string. If `None`, rotates through a built-in
    /// list of realistic browser User-Agents.
    pub user_agent: Option<String>,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 10_000,
            snippet_chars: 3_000,
            top_results: 5,
            max_findings: 6,
            user_agent: None,
        }
    }
}

impl FusionConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `timeout_ms` must be greater than 0
    /// - `snippet_chars` must be greater than 0
    /// - `top_results` must be greater than 0
    pub fn validate(&self) -> Result<(), FusionError> {
        if self.timeout_ms == 0 {
            return Err(FusionError::Config(
                "timeout_ms must be greater than 0".into(),
            ));
        }
        if self.snippet_chars == 0 {
            return Err(FusionError::Config(
                "snippet_chars must be greater than 0".into(),
            ));
        }
        if self.top_results == 0 {
            return Err(FusionError::Config(
                "top_results must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = FusionConfig::default();
        assert_eq!(config.timeout_ms, 10_000);
        assert_eq!(config.snippet_chars, 3_000);
        assert_eq!(config.top_results, 5);
        assert_eq!(config.max_findings, 6);
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn valid_config_passes_validation() {
        let config = FusionConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = FusionConfig {
            timeout_ms: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_ms"));
    }

    #[test]
    fn zero_snippet_chars_rejected() {
        let config = FusionConfig {
            snippet_chars: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("snippet_chars"));
    }

    #[test]
    fn zero_top_results_rejected() {
        let config = FusionConfig {
            top_results: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("top_results"));
    }

    #[test]
    fn custom_user_agent() {
        let config = FusionConfig {
            user_agent: Some("TestBot/1.0".into()),
            ..Default::default()
        };
        assert_eq!(config.user_agent.as_deref(), Some("TestBot/1.0"));
        assert!(config.validate().is_ok());
    }
}
