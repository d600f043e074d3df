//! HTTP transport
//!
//! Retrying HTTP client shared by every case-management operation.

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
