//! Configuration loading and management
//!
//! This module provides utilities for loading client configuration from
//! environment variables and dotenv-style credentials files.

pub mod loader;

// Re-export commonly used items
pub use loader::{load, load_from_credentials_file, load_from_env, probe_credentials_paths};
