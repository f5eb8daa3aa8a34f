//! TOML-driven client configuration.
//!
//! `ClientConfig` carries the handful of knobs the client needs before a
//! backend exists: where the backend will live and how patient the call
//! policy should be. Load from a TOML string or file; every field has a
//! default, so an empty document is a valid configuration.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use ziovate_contracts::{ApiError, ApiResult};

use crate::policy::CallPolicy;

/// Client configuration, deserialized from TOML.
///
/// ```toml
/// backend_base_url = "https://api.ziovate.example"
/// request_timeout_ms = 3000
/// max_attempts = 3
/// backoff_base_ms = 200
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL the future networked client will talk to. The resource
    /// groups expected under it are `/auth/*`, `/patients/*`, `/doctors/*`,
    /// and `/reports/*`.
    pub backend_base_url: String,
    /// Per-attempt deadline in milliseconds.
    pub request_timeout_ms: u64,
    /// Total attempts per call, including the first.
    pub max_attempts: u32,
    /// Base backoff delay in milliseconds; doubles per retry.
    pub backoff_base_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_base_url: "https://api.ziovate.example".to_string(),
            request_timeout_ms: 3000,
            max_attempts: 3,
            backoff_base_ms: 200,
        }
    }
}

impl ClientConfig {
    /// Parse `s` as TOML.
    ///
    /// Returns `ApiError::Config` if the TOML is malformed or a field has
    /// the wrong type.
    pub fn from_toml_str(s: &str) -> ApiResult<Self> {
        let config: ClientConfig = toml::from_str(s).map_err(|e| ApiError::Config {
            reason: format!("failed to parse client config TOML: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read the file at `path` and parse it as TOML configuration.
    pub fn from_file(path: &Path) -> ApiResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ApiError::Config {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Build the `CallPolicy` these settings describe.
    pub fn call_policy(&self) -> CallPolicy {
        CallPolicy {
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            max_attempts: self.max_attempts,
            backoff_base: Duration::from_millis(self.backoff_base_ms),
        }
    }

    fn validate(&self) -> ApiResult<()> {
        if self.max_attempts == 0 {
            return Err(ApiError::Config {
                reason: "max_attempts must be at least 1".to_string(),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ApiError::Config {
                reason: "request_timeout_ms must be positive".to_string(),
            });
        }
        Ok(())
    }
}
