//! Case-management API integration
//!
//! One method per REST operation, each composing a request from an options
//! type and decoding a typed result.
//!
//! # Architecture
//!
//! - **Client**: `CaseManagementClient` - operation client over the retrying `HttpClient`
//! - **Options**: per-operation builders with required constructor parameters
//!   and fluent optional setters
//! - **Auth**: `Authenticator` trait seam; `StaticTokenAuthenticator` covers
//!   the configured-token case
//!
//! # Usage
//!
//! ```no_run
//! use casedesk_client::cases::{CaseManagementClient, CreateCaseOptions};
//! use casedesk_domain::{Offering, OfferingType, OFFERING_TYPE_GROUP_CRN_SERVICE_NAME};
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CaseManagementClient::from_env()?;
//!
//! let options = CreateCaseOptions::new("technical", "Bucket unreachable", "Requests time out")
//!     .severity(4)
//!     .offering(Offering::new(
//!         "Cloud Object Storage",
//!         OfferingType::new(OFFERING_TYPE_GROUP_CRN_SERVICE_NAME, "cloud-object-storage"),
//!     ));
//!
//! let case = client.create_case(&options).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - **Local errors**: structurally missing required fields fail fast with
//!   `CaseDeskError::InvalidInput` before anything touches the wire
//! - **Remote errors**: any non-2xx status is returned as
//!   `CaseDeskError::Api` carrying the raw error envelope
//! - **Transient failures**: retried by `HttpClient` (except streaming
//!   uploads, which are single-attempt)

pub mod auth;
pub mod client;
pub mod options;
pub mod status;
pub mod upload;

pub use auth::{Authenticator, StaticTokenAuthenticator};
pub use client::CaseManagementClient;
pub use options::{
    case_fields, AddCommentOptions, AddResourceOptions, AddWatchlistOptions, CreateCaseOptions,
    DeleteFileOptions, GetCaseOptions, GetCasesOptions, RemoveWatchlistOptions, ResourcePayload,
    UpdateCaseStatusOptions, UploadFileOptions,
};
pub use status::StatusPayload;
pub use upload::{AttachmentBody, FileWithMetadata};
