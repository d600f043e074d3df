//! Request authentication seam
//!
//! Token acquisition is deliberately behind a trait so tests and embedders
//! can supply their own source; the SDK never implements an auth flow itself.

use async_trait::async_trait;
use casedesk_domain::{CaseDeskError, Result};

/// Provides bearer tokens to authorize case-management API calls.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Retrieve a bearer token for the next request.
    async fn bearer_token(&self) -> Result<String>;
}

/// Authenticator that serves a fixed token taken from configuration.
#[derive(Debug, Clone)]
pub struct StaticTokenAuthenticator {
    token: String,
}

impl StaticTokenAuthenticator {
    /// Wrap a pre-acquired bearer token.
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

#[async_trait]
impl Authenticator for StaticTokenAuthenticator {
    async fn bearer_token(&self) -> Result<String> {
        if self.token.is_empty() {
            return Err(CaseDeskError::Auth("configured bearer token is empty".to_string()));
        }
        Ok(self.token.clone())
    }
}
