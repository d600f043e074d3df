//! Watchlist models
//!
//! A watchlist is the set of users subscribed to notifications on a case.

use serde::{Deserialize, Serialize};

/// A user identified by realm + user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Identity realm (e.g. "IBMid")
    pub realm: String,
    /// User identity within the realm
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    /// Create a user identity from realm and user id.
    pub fn new(realm: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self { name: None, realm: realm.into(), user_id: user_id.into(), email: None }
    }
}

/// Watchlist payload and remove-response shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Watchlist {
    #[serde(default)]
    pub watchlist: Vec<User>,
}

/// Response to a watchlist add.
///
/// Adding users is a partial-success operation: users the service could not
/// attach land in `failed` while the call itself still succeeds. Callers must
/// inspect `failed`; a non-empty list is not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WatchlistAddResponse {
    #[serde(default)]
    pub added: Vec<User>,
    #[serde(default)]
    pub failed: Vec<User>,
}
