use crate::error::{RelayError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Runtime configuration for the relay.
///
/// Both webhook endpoints are injected here rather than baked in as
/// constants, so deployments (and tests) can point the relay anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Endpoint for the single-query evaluation workflow.
    #[serde(default = "default_query_evaluator_url")]
    pub query_evaluator_url: String,

    /// Endpoint for the two-system comparison workflow.
    #[serde(default = "default_llm_comparison_url")]
    pub llm_comparison_url: String,

    /// Upper bound on each outbound webhook call, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_bind_addr() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_query_evaluator_url() -> String {
    "http://127.0.0.1:5678/webhook/query-evaluator".to_string()
}

fn default_llm_comparison_url() -> String {
    "http://127.0.0.1:5678/webhook/llm-comparison".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            query_evaluator_url: default_query_evaluator_url(),
            llm_comparison_url: default_llm_comparison_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl RelayConfig {
    /// Load configuration from a TOML file. An absent file falls back to
    /// defaults; a file that exists but does not parse is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| RelayError::InvalidConfig(format!("{}: {}", path.display(), e)))
    }
}
