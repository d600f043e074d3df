/// Case-management operation client
use std::sync::Arc;
use std::time::Duration;

use casedesk_domain::{
    Attachment, AttachmentList, Case, CaseDeskError, CaseList, CaseManagementConfig, Comment,
    Resource, Result, User, Watchlist, WatchlistAddResponse,
};
use reqwest::multipart::Form;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::config;
use crate::http::HttpClient;

use super::auth::{Authenticator, StaticTokenAuthenticator};
use super::options::{
    AddCommentOptions, AddResourceOptions, AddWatchlistOptions, CreateCaseOptions,
    DeleteFileOptions, GetCaseOptions, GetCasesOptions, RemoveWatchlistOptions,
    UpdateCaseStatusOptions, UploadFileOptions,
};

/// Client for the case-management REST API.
///
/// Each instance carries only its own configuration (base URL, authenticator,
/// transport tuning); operations are independent, stateless request/response
/// calls and the server is the sole source of truth between them. Dropping an
/// operation future cancels the request.
pub struct CaseManagementClient {
    base_url: String,
    http_client: HttpClient,
    authenticator: Arc<dyn Authenticator>,
    resource_crn: Option<String>,
}

impl CaseManagementClient {
    /// Create a client from configuration and an authenticator.
    ///
    /// # Errors
    /// Returns `CaseDeskError::Config` if the base URL is empty.
    pub fn new(
        config: &CaseManagementConfig,
        authenticator: Arc<dyn Authenticator>,
    ) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(CaseDeskError::Config("service base URL must not be empty".to_string()));
        }

        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .max_attempts(config.max_attempts)
            .build()?;

        Ok(Self {
            base_url,
            http_client,
            authenticator,
            resource_crn: config.resource_crn.clone(),
        })
    }

    /// Create a client from configuration, authenticating with its token.
    ///
    /// # Errors
    /// Returns `CaseDeskError::Config` if no auth token is configured.
    pub fn from_config(config: CaseManagementConfig) -> Result<Self> {
        let token = config.auth_token.clone().ok_or_else(|| {
            CaseDeskError::Config(
                "auth token is required when no authenticator is supplied".to_string(),
            )
        })?;

        Self::new(&config, Arc::new(StaticTokenAuthenticator::new(token)))
    }

    /// Create a client from the process environment (or credentials file).
    pub fn from_env() -> Result<Self> {
        Self::from_config(config::load()?)
    }

    /// CRN of the configured default resource, if any.
    pub fn resource_crn(&self) -> Option<&str> {
        self.resource_crn.as_deref()
    }

    /// Create a support case.
    ///
    /// Echoes back subject, description and severity; the case number in the
    /// result is server-assigned.
    pub async fn create_case(&self, options: &CreateCaseOptions) -> Result<Case> {
        require("case type", &options.case_type)?;
        require("subject", &options.subject)?;
        require("description", &options.description)?;

        let url = format!("{}/cases", self.base_url);
        let case: Case =
            self.send_json(Method::POST, &url, &[], Some(options), "create_case").await?;

        if let Some(number) = &case.number {
            info!(case_number = %number, "created support case");
        }
        Ok(case)
    }

    /// List cases, with caller-driven pagination and field filtering.
    ///
    /// The result carries total count and first/next/previous/last links; the
    /// client never follows them on its own.
    pub async fn get_cases(&self, options: &GetCasesOptions) -> Result<CaseList> {
        let url = format!("{}/cases", self.base_url);
        let query = options.query();
        self.send_json::<(), _>(Method::GET, &url, &query, None, "get_cases").await
    }

    /// Fetch a single case by number.
    pub async fn get_case(&self, options: &GetCaseOptions) -> Result<Case> {
        require("case number", &options.case_number)?;

        let url = self.case_url(&options.case_number, "");
        let query = options.query();
        self.send_json::<(), _>(Method::GET, &url, &query, None, "get_case").await
    }

    /// Append a comment to a case.
    pub async fn add_comment(&self, options: &AddCommentOptions) -> Result<Comment> {
        require("case number", &options.case_number)?;
        require("comment", &options.comment)?;

        let url = self.case_url(&options.case_number, "/comments");
        let payload = CommentPayload { comment: &options.comment };
        self.send_json(Method::PUT, &url, &[], Some(&payload), "add_comment").await
    }

    /// Add users to a case watchlist.
    ///
    /// Partial success is an expected outcome: users the service could not
    /// attach are reported in the result's `failed` list while the call still
    /// returns `Ok`.
    pub async fn add_watchlist(
        &self,
        options: &AddWatchlistOptions,
    ) -> Result<WatchlistAddResponse> {
        require("case number", &options.case_number)?;

        let url = self.case_url(&options.case_number, "/watchlist");
        let payload = WatchlistPayload { watchlist: &options.watchlist };
        let response: WatchlistAddResponse =
            self.send_json(Method::PUT, &url, &[], Some(&payload), "add_watchlist").await?;

        if !response.failed.is_empty() {
            debug!(
                failed = response.failed.len(),
                added = response.added.len(),
                "some watchlist users were not added"
            );
        }
        Ok(response)
    }

    /// Remove users from a case watchlist.
    pub async fn remove_watchlist(&self, options: &RemoveWatchlistOptions) -> Result<Watchlist> {
        require("case number", &options.case_number)?;

        let url = self.case_url(&options.case_number, "/watchlist");
        let payload = WatchlistPayload { watchlist: &options.watchlist };
        self.send_json(Method::DELETE, &url, &[], Some(&payload), "remove_watchlist").await
    }

    /// Request a status transition (resolve or unresolve).
    ///
    /// The client does not inspect the case's current status; an illegal
    /// transition comes back as a server error.
    pub async fn update_case_status(&self, options: &UpdateCaseStatusOptions) -> Result<Case> {
        require("case number", &options.case_number)?;

        let url = self.case_url(&options.case_number, "/status");
        let case: Case = self
            .send_json(Method::PUT, &url, &[], Some(&options.payload), "update_case_status")
            .await?;

        if let Some(status) = &case.status {
            info!(case_number = %options.case_number, %status, "case status updated");
        }
        Ok(case)
    }

    /// Upload file attachments to a case.
    ///
    /// Consumes the options because file content sources move into the
    /// request body; they are closed on every exit path. Uploads are sent in
    /// a single attempt — a streamed body cannot be replayed for a retry.
    pub async fn upload_file(&self, options: UploadFileOptions) -> Result<Attachment> {
        require("case number", &options.case_number)?;
        if options.files.is_empty() {
            return Err(CaseDeskError::InvalidInput(
                "at least one file is required".to_string(),
            ));
        }

        let url = self.case_url(&options.case_number, "/attachments");
        let token = self.authenticator.bearer_token().await?;

        let mut form = Form::new();
        for file in options.files {
            form = form.part("file", file.into_part()?);
        }

        let builder =
            self.http_client.request(Method::PUT, &url).bearer_auth(token).multipart(form);
        let response = self.http_client.send_once(builder).await?;
        let attachment: Attachment = decode(response, "upload_file").await?;

        if let Some(id) = &attachment.id {
            info!(case_number = %options.case_number, file_id = %id, "uploaded attachment");
        }
        Ok(attachment)
    }

    /// Delete a file attachment by id.
    ///
    /// Returns the attachments remaining on the case.
    pub async fn delete_file(&self, options: &DeleteFileOptions) -> Result<AttachmentList> {
        require("case number", &options.case_number)?;
        require("file id", &options.file_id)?;

        let url = self.case_url(
            &options.case_number,
            &format!("/attachments/{}", urlencoding::encode(&options.file_id)),
        );
        self.send_json::<(), _>(Method::DELETE, &url, &[], None, "delete_file").await
    }

    /// Link a cloud resource to a case by CRN.
    pub async fn add_resource(&self, options: &AddResourceOptions) -> Result<Resource> {
        require("case number", &options.case_number)?;
        let crn = options.crn.as_deref().unwrap_or_default();
        require("resource CRN", crn)?;

        let url = self.case_url(&options.case_number, "/resource");
        let payload = ResourceLinkPayload { crn, note: options.note.as_deref() };
        self.send_json(Method::PUT, &url, &[], Some(&payload), "add_resource").await
    }

    fn case_url(&self, case_number: &str, suffix: &str) -> String {
        format!("{}/cases/{}{}", self.base_url, urlencoding::encode(case_number), suffix)
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        query: &[(&str, String)],
        body: Option<&B>,
        operation: &'static str,
    ) -> Result<T> {
        let token = self.authenticator.bearer_token().await?;
        let mut builder = self.http_client.request(method, url).bearer_auth(token);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = self.http_client.send(builder).await?;
        decode(response, operation).await
    }
}

/// Fail fast when a structurally-required field is empty.
fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CaseDeskError::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(())
}

/// Decode a response: 2xx becomes the typed model, anything else carries the
/// raw error envelope back to the caller.
async fn decode<T: DeserializeOwned>(
    response: reqwest::Response,
    operation: &'static str,
) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
        debug!(operation, status = status.as_u16(), "case-management API returned an error");
        return Err(CaseDeskError::Api { status: status.as_u16(), body });
    }

    response.json::<T>().await.map_err(|e| {
        CaseDeskError::Internal(format!("Failed to parse {} response: {}", operation, e))
    })
}

// =============================================================================
// Request payloads
// =============================================================================

#[derive(Debug, Serialize)]
struct CommentPayload<'a> {
    comment: &'a str,
}

#[derive(Debug, Serialize)]
struct WatchlistPayload<'a> {
    watchlist: &'a [User],
}

#[derive(Debug, Serialize)]
struct ResourceLinkPayload<'a> {
    crn: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<&'a str>,
}
