//! Per-operation option builders
//!
//! Required parameters go through the constructor, optional parameters
//! through fluent setters. Field-selection lists and other enumerated values
//! are deliberately plain strings: the server owns the allow-lists, and an
//! invalid value comes back as an error response rather than failing locally.

use casedesk_domain::{Eu, Offering, User};
use serde::Serialize;

use super::status::StatusPayload;
use super::upload::FileWithMetadata;

/// Field names recognized by the server for field filtering.
pub mod case_fields {
    pub const NUMBER: &str = "number";
    pub const SHORT_DESCRIPTION: &str = "short_description";
    pub const DESCRIPTION: &str = "description";
    pub const CREATED_AT: &str = "created_at";
    pub const CREATED_BY: &str = "created_by";
    pub const UPDATED_AT: &str = "updated_at";
    pub const UPDATED_BY: &str = "updated_by";
    pub const CONTACT: &str = "contact";
    pub const CONTACT_TYPE: &str = "contact_type";
    pub const STATUS: &str = "status";
    pub const SEVERITY: &str = "severity";
    pub const SUPPORT_TIER: &str = "support_tier";
    pub const RESOLUTION: &str = "resolution";
    pub const CLOSE_NOTES: &str = "close_notes";
    pub const EU: &str = "eu";
    pub const WATCHLIST: &str = "watchlist";
    pub const ATTACHMENTS: &str = "attachments";
    pub const OFFERING: &str = "offering";
    pub const RESOURCES: &str = "resources";
    pub const COMMENTS: &str = "comments";
}

/// A resource attached at case creation time.
#[derive(Debug, Clone, Serialize)]
pub struct ResourcePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ResourcePayload {
    /// Reference a resource by CRN.
    pub fn from_crn(crn: impl Into<String>) -> Self {
        Self { crn: Some(crn.into()), kind: None, note: None }
    }
}

/// Options for creating a case. Doubles as the JSON request payload.
#[derive(Debug, Clone, Serialize)]
pub struct CreateCaseOptions {
    #[serde(rename = "type")]
    pub case_type: String,
    pub subject: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eu: Option<Eu>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offering: Option<Offering>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<ResourcePayload>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watchlist: Option<Vec<User>>,
}

impl CreateCaseOptions {
    /// Create options for a new case of the given type.
    pub fn new(
        case_type: impl Into<String>,
        subject: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            case_type: case_type.into(),
            subject: subject.into(),
            description: description.into(),
            severity: None,
            eu: None,
            offering: None,
            resources: None,
            watchlist: None,
        }
    }

    /// Severity 1 (most severe) through 4 (least severe).
    pub fn severity(mut self, severity: i64) -> Self {
        self.severity = Some(severity);
        self
    }

    /// EU data-residency settings.
    pub fn eu(mut self, eu: Eu) -> Self {
        self.eu = Some(eu);
        self
    }

    /// Offering the case is filed against.
    pub fn offering(mut self, offering: Offering) -> Self {
        self.offering = Some(offering);
        self
    }

    /// Resources to attach at creation time.
    pub fn resources(mut self, resources: Vec<ResourcePayload>) -> Self {
        self.resources = Some(resources);
        self
    }

    /// Users to place on the watchlist at creation time.
    pub fn watchlist(mut self, watchlist: Vec<User>) -> Self {
        self.watchlist = Some(watchlist);
        self
    }
}

/// Options for listing cases. Pagination is caller-driven.
#[derive(Debug, Clone, Default)]
pub struct GetCasesOptions {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
    pub status: Option<Vec<String>>,
    pub fields: Option<Vec<String>>,
}

impl GetCasesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip this many cases from the start of the result set.
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Return at most this many cases.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Free-text search across case subjects and descriptions.
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Restrict results to cases in the given statuses.
    pub fn status(mut self, status: Vec<String>) -> Self {
        self.status = Some(status);
        self
    }

    /// Restrict response objects to the given fields (see [`case_fields`]).
    pub fn fields(mut self, fields: Vec<String>) -> Self {
        self.fields = Some(fields);
        self
    }

    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(offset) = self.offset {
            query.push(("offset", offset.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(search) = &self.search {
            query.push(("search", search.clone()));
        }
        if let Some(status) = &self.status {
            for value in status {
                query.push(("status", value.clone()));
            }
        }
        if let Some(fields) = &self.fields {
            query.push(("fields", fields.join(",")));
        }
        query
    }
}

/// Options for fetching a single case.
#[derive(Debug, Clone)]
pub struct GetCaseOptions {
    pub case_number: String,
    pub fields: Option<Vec<String>>,
}

impl GetCaseOptions {
    pub fn new(case_number: impl Into<String>) -> Self {
        Self { case_number: case_number.into(), fields: None }
    }

    /// Restrict the response object to the given fields (see [`case_fields`]).
    pub fn fields(mut self, fields: Vec<String>) -> Self {
        self.fields = Some(fields);
        self
    }

    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        match &self.fields {
            Some(fields) => vec![("fields", fields.join(","))],
            None => Vec::new(),
        }
    }
}

/// Options for appending a comment to a case.
#[derive(Debug, Clone)]
pub struct AddCommentOptions {
    pub case_number: String,
    pub comment: String,
}

impl AddCommentOptions {
    pub fn new(case_number: impl Into<String>, comment: impl Into<String>) -> Self {
        Self { case_number: case_number.into(), comment: comment.into() }
    }
}

/// Options for adding users to a case watchlist.
#[derive(Debug, Clone)]
pub struct AddWatchlistOptions {
    pub case_number: String,
    pub watchlist: Vec<User>,
}

impl AddWatchlistOptions {
    pub fn new(case_number: impl Into<String>) -> Self {
        Self { case_number: case_number.into(), watchlist: Vec::new() }
    }

    pub fn watchlist(mut self, watchlist: Vec<User>) -> Self {
        self.watchlist = watchlist;
        self
    }
}

/// Options for removing users from a case watchlist.
#[derive(Debug, Clone)]
pub struct RemoveWatchlistOptions {
    pub case_number: String,
    pub watchlist: Vec<User>,
}

impl RemoveWatchlistOptions {
    pub fn new(case_number: impl Into<String>) -> Self {
        Self { case_number: case_number.into(), watchlist: Vec::new() }
    }

    pub fn watchlist(mut self, watchlist: Vec<User>) -> Self {
        self.watchlist = watchlist;
        self
    }
}

/// Options for requesting a status transition.
#[derive(Debug, Clone)]
pub struct UpdateCaseStatusOptions {
    pub case_number: String,
    pub payload: StatusPayload,
}

impl UpdateCaseStatusOptions {
    pub fn new(case_number: impl Into<String>, payload: StatusPayload) -> Self {
        Self { case_number: case_number.into(), payload }
    }
}

/// Options for uploading file attachments.
#[derive(Debug)]
pub struct UploadFileOptions {
    pub case_number: String,
    pub files: Vec<FileWithMetadata>,
}

impl UploadFileOptions {
    pub fn new(case_number: impl Into<String>, files: Vec<FileWithMetadata>) -> Self {
        Self { case_number: case_number.into(), files }
    }
}

/// Options for deleting a file attachment.
#[derive(Debug, Clone)]
pub struct DeleteFileOptions {
    pub case_number: String,
    pub file_id: String,
}

impl DeleteFileOptions {
    pub fn new(case_number: impl Into<String>, file_id: impl Into<String>) -> Self {
        Self { case_number: case_number.into(), file_id: file_id.into() }
    }
}

/// Options for linking a cloud resource to a case.
#[derive(Debug, Clone, Default)]
pub struct AddResourceOptions {
    pub case_number: String,
    pub crn: Option<String>,
    pub note: Option<String>,
}

impl AddResourceOptions {
    pub fn new(case_number: impl Into<String>) -> Self {
        Self { case_number: case_number.into(), crn: None, note: None }
    }

    /// CRN of the resource to link.
    pub fn crn(mut self, crn: impl Into<String>) -> Self {
        self.crn = Some(crn.into());
        self
    }

    /// Free-text note stored with the link.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use casedesk_domain::{OfferingType, OFFERING_TYPE_GROUP_CRN_SERVICE_NAME};

    use super::*;

    #[test]
    fn create_case_options_serialize_as_request_payload() {
        let options = CreateCaseOptions::new("technical", "Subject", "Description")
            .severity(4)
            .offering(Offering::new(
                "Cloud Object Storage",
                OfferingType::new(OFFERING_TYPE_GROUP_CRN_SERVICE_NAME, "cloud-object-storage"),
            ));

        let json = serde_json::to_value(&options).expect("should serialize");
        assert_eq!(json["type"], "technical");
        assert_eq!(json["subject"], "Subject");
        assert_eq!(json["severity"], 4);
        assert_eq!(json["offering"]["type"]["key"], "cloud-object-storage");
        // Unset optionals are omitted from the payload entirely.
        assert!(json.get("eu").is_none());
        assert!(json.get("watchlist").is_none());
    }

    #[test]
    fn get_cases_query_includes_only_set_params() {
        let options = GetCasesOptions::new().offset(10).limit(20);
        let query = options.query();
        assert_eq!(
            query,
            vec![("offset", "10".to_string()), ("limit", "20".to_string())]
        );
    }

    #[test]
    fn get_cases_query_joins_fields_with_commas() {
        let options = GetCasesOptions::new().fields(vec![
            case_fields::NUMBER.to_string(),
            case_fields::COMMENTS.to_string(),
            case_fields::CREATED_AT.to_string(),
        ]);
        let query = options.query();
        assert_eq!(query, vec![("fields", "number,comments,created_at".to_string())]);
    }

    #[test]
    fn get_cases_query_repeats_status_filter() {
        let options =
            GetCasesOptions::new().status(vec!["New".to_string(), "In Progress".to_string()]);
        let query = options.query();
        assert_eq!(
            query,
            vec![("status", "New".to_string()), ("status", "In Progress".to_string())]
        );
    }

    #[test]
    fn get_case_query_is_empty_without_fields() {
        let options = GetCaseOptions::new("CS0001234");
        assert!(options.query().is_empty());
    }

    #[test]
    fn invalid_field_names_pass_through_untouched() {
        // The server owns the allow-list; no local validation happens.
        let options = GetCaseOptions::new("CS0001234").fields(vec!["invalid_field".to_string()]);
        assert_eq!(options.query(), vec![("fields", "invalid_field".to_string())]);
    }
}
