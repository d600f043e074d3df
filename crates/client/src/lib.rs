//! # CaseDesk Client
//!
//! Client-side infrastructure for the case-management REST API.
//!
//! This crate contains:
//! - HTTP client with retry and timeout support
//! - Configuration loading (environment variables, credentials file)
//! - The case-management operation client and its option builders
//!
//! ## Architecture
//! - Depends on `casedesk-domain` for models and errors
//! - Contains all "impure" code (I/O, environment access)

pub mod cases;
pub mod config;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use cases::{
    AddCommentOptions, AddResourceOptions, AddWatchlistOptions, Authenticator,
    CaseManagementClient, CreateCaseOptions, DeleteFileOptions, FileWithMetadata, GetCaseOptions,
    GetCasesOptions, RemoveWatchlistOptions, StaticTokenAuthenticator, StatusPayload,
    UpdateCaseStatusOptions, UploadFileOptions,
};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
