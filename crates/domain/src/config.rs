//! Client configuration structures
//!
//! The configuration only carries what a single client instance needs: the
//! service base URL, an optional bearer token, the resource CRN used by
//! convenience helpers, and transport tuning. Loading (environment variables,
//! credentials file) lives in the client crate.

use serde::{Deserialize, Serialize};

/// Default request timeout applied to every operation, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default total number of attempts (initial try + retries) for replayable
/// requests.
pub const DEFAULT_MAX_ATTEMPTS: usize = 4;

/// Configuration for a case-management client instance.
///
/// Each client instance carries its own configuration; nothing is held in
/// module-level state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseManagementConfig {
    /// Base URL of the case-management service (e.g. `https://support.example.com/case-management/v1`)
    pub base_url: String,

    /// Bearer token used by the default authenticator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,

    /// CRN of a cloud resource to attach to cases, when configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_crn: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Total attempts (initial try + retries) for replayable requests.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
}

impl CaseManagementConfig {
    /// Create a configuration with defaults for everything but the base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: None,
            resource_crn: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Set the bearer token used by the default authenticator.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Set the resource CRN used by convenience helpers.
    pub fn with_resource_crn(mut self, crn: impl Into<String>) -> Self {
        self.resource_crn = Some(crn.into());
        self
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_applies_transport_defaults() {
        let config = CaseManagementConfig::new("https://support.example.com");
        assert_eq!(config.base_url, "https://support.example.com");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert!(config.auth_token.is_none());
        assert!(config.resource_crn.is_none());
    }

    #[test]
    fn deserializes_with_missing_tuning_fields() {
        let json = r#"{ "base_url": "https://support.example.com", "auth_token": "secret" }"#;
        let config: CaseManagementConfig = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(config.auth_token.as_deref(), Some("secret"));
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn builder_setters_populate_optionals() {
        let config = CaseManagementConfig::new("https://support.example.com")
            .with_auth_token("token")
            .with_resource_crn("crn:v1:test::resource:instance");
        assert_eq!(config.auth_token.as_deref(), Some("token"));
        assert_eq!(config.resource_crn.as_deref(), Some("crn:v1:test::resource:instance"));
    }
}
