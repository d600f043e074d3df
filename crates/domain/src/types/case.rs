//! Support case models

use serde::{Deserialize, Serialize};

use super::attachment::Attachment;
use super::resource::Resource;
use super::watchlist::User;

/// Offering type group for offerings identified by service CRN name.
pub const OFFERING_TYPE_GROUP_CRN_SERVICE_NAME: &str = "crn_service_name";

/// Offering type group for offerings identified by category.
pub const OFFERING_TYPE_GROUP_CATEGORY: &str = "category";

/// A support case as returned by the service.
///
/// The server is the sole source of truth; the case number is server-assigned
/// and identifies the case in every mutating operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Case {
    /// Server-assigned case identity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<User>,
    /// Server-side lifecycle status (e.g. "New", "In Progress", "Resolved")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Severity 1 (most severe) through 4 (least severe)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_tier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eu: Option<Eu>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watchlist: Option<Vec<User>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offering: Option<Offering>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<Resource>>,
    /// Comments ordered by creation time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,
}

/// A page of cases plus caller-driven pagination cursors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaseList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<PaginationUrl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PaginationUrl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<PaginationUrl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<PaginationUrl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cases: Option<Vec<Case>>,
}

/// A link to a page of results. The client never follows these on its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationUrl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// A single case comment. Comments are append-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Comment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_by: Option<User>,
}

/// Product/service a case is filed against; immutable reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offering {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: OfferingType,
}

impl Offering {
    /// Create an offering with the given display name and type.
    pub fn new(name: impl Into<String>, kind: OfferingType) -> Self {
        Self { name: name.into(), kind }
    }
}

/// Group + key pair identifying an offering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferingType {
    /// One of the `OFFERING_TYPE_GROUP_*` constants
    pub group: String,
    /// Offering key within the group (e.g. a service CRN name)
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl OfferingType {
    /// Create an offering type from a group constant and key.
    pub fn new(group: impl Into<String>, key: impl Into<String>) -> Self {
        Self { group: group.into(), key: key.into(), id: None }
    }
}

/// EU data-residency settings attached to a case.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Eu {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_center: Option<i64>,
}
