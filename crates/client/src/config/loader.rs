//! Configuration loader
//!
//! Loads client configuration from environment variables or a credentials
//! file.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the base URL is missing, falls back to a credentials file
//! 3. The credentials file is dotenv-format; its location comes from
//!    `CASEDESK_CREDENTIALS_FILE` or from probing standard paths
//!
//! ## Environment Variables
//! - `CASEDESK_URL`: Service base URL (required)
//! - `CASEDESK_AUTH_TOKEN`: Bearer token for the default authenticator
//! - `CASEDESK_RESOURCE_CRN`: CRN of a resource to attach to cases
//! - `CASEDESK_TIMEOUT_SECS`: Per-request timeout in seconds
//! - `CASEDESK_MAX_ATTEMPTS`: Total attempts for replayable requests
//! - `CASEDESK_CREDENTIALS_FILE`: Path to a credentials file with the same
//!   keys
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./casedesk.env` (current working directory)
//! 2. `../casedesk.env` and `../../casedesk.env`
//! 3. `casedesk.env` next to the executable
//!
//! The credentials file is parsed without mutating the process environment.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use casedesk_domain::{CaseDeskError, CaseManagementConfig, Result};
use url::Url;

const ENV_URL: &str = "CASEDESK_URL";
const ENV_AUTH_TOKEN: &str = "CASEDESK_AUTH_TOKEN";
const ENV_RESOURCE_CRN: &str = "CASEDESK_RESOURCE_CRN";
const ENV_TIMEOUT_SECS: &str = "CASEDESK_TIMEOUT_SECS";
const ENV_MAX_ATTEMPTS: &str = "CASEDESK_MAX_ATTEMPTS";
const ENV_CREDENTIALS_FILE: &str = "CASEDESK_CREDENTIALS_FILE";

const CREDENTIALS_FILE_NAME: &str = "casedesk.env";

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the base URL is not
/// set, falls back to loading from a credentials file.
///
/// # Errors
/// Returns `CaseDeskError::Config` if configuration cannot be loaded from
/// either source.
pub fn load() -> Result<CaseManagementConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying credentials file");
            load_from_credentials_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// `CASEDESK_URL` must be present; the remaining variables are optional.
///
/// # Errors
/// Returns `CaseDeskError::Config` if the URL is missing or any value is
/// invalid.
pub fn load_from_env() -> Result<CaseManagementConfig> {
    build_config(|key| std::env::var(key).ok())
}

/// Load configuration from a credentials file
///
/// If `path` is `None`, uses `CASEDESK_CREDENTIALS_FILE` when set, otherwise
/// probes standard locations via [`probe_credentials_paths`]. The file is
/// dotenv-format and is parsed without touching the process environment.
///
/// # Errors
/// Returns `CaseDeskError::Config` if:
/// - No credentials file can be located
/// - The file cannot be parsed
/// - Required keys are missing or invalid
pub fn load_from_credentials_file(path: Option<PathBuf>) -> Result<CaseManagementConfig> {
    let credentials_path = resolve_credentials_path(path)?;

    tracing::info!(path = %credentials_path.display(), "Loading configuration from credentials file");

    let entries = read_credentials(&credentials_path)?;
    build_config(|key| entries.get(key).cloned())
}

/// Probe standard paths for a credentials file
///
/// # Returns
/// The first `casedesk.env` found, or `None` if no file exists.
pub fn probe_credentials_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join(CREDENTIALS_FILE_NAME));
        candidates.push(cwd.join("..").join(CREDENTIALS_FILE_NAME));
        candidates.push(cwd.join("../..").join(CREDENTIALS_FILE_NAME));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.push(exe_dir.join(CREDENTIALS_FILE_NAME));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn resolve_credentials_path(path: Option<PathBuf>) -> Result<PathBuf> {
    let resolved = match path {
        Some(p) => p,
        None => match std::env::var(ENV_CREDENTIALS_FILE) {
            Ok(configured) => PathBuf::from(configured),
            Err(_) => probe_credentials_paths().ok_or_else(|| {
                CaseDeskError::Config(
                    "No credentials file found in any of the standard locations".to_string(),
                )
            })?,
        },
    };

    if !resolved.exists() {
        return Err(CaseDeskError::Config(format!(
            "Credentials file not found: {}",
            resolved.display()
        )));
    }

    Ok(resolved)
}

fn read_credentials(path: &Path) -> Result<HashMap<String, String>> {
    let iter = dotenvy::from_path_iter(path).map_err(|e| {
        CaseDeskError::Config(format!("Failed to read credentials file: {}", e))
    })?;

    let mut entries = HashMap::new();
    for item in iter {
        let (key, value) = item.map_err(|e| {
            CaseDeskError::Config(format!("Invalid credentials file entry: {}", e))
        })?;
        entries.insert(key, value);
    }

    Ok(entries)
}

/// Assemble a config from a key lookup (environment or credentials file).
fn build_config(get: impl Fn(&str) -> Option<String>) -> Result<CaseManagementConfig> {
    let base_url = get(ENV_URL)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| CaseDeskError::Config(format!("Missing required property: {}", ENV_URL)))?;

    Url::parse(&base_url)
        .map_err(|e| CaseDeskError::Config(format!("Invalid service URL: {}", e)))?;

    let mut config = CaseManagementConfig::new(base_url);
    config.auth_token = get(ENV_AUTH_TOKEN).filter(|v| !v.is_empty());
    config.resource_crn = get(ENV_RESOURCE_CRN).filter(|v| !v.is_empty());

    if let Some(timeout) = parse_optional(&get, ENV_TIMEOUT_SECS)? {
        config.timeout_secs = timeout;
    }
    if let Some(attempts) = parse_optional(&get, ENV_MAX_ATTEMPTS)? {
        config.max_attempts = attempts;
    }

    Ok(config)
}

fn parse_optional<T: FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>>
where
    T::Err: std::fmt::Display,
{
    match get(key) {
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|e| CaseDeskError::Config(format!("Invalid value for {}: {}", key, e))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    fn clear_env() {
        for key in
            [ENV_URL, ENV_AUTH_TOKEN, ENV_RESOURCE_CRN, ENV_TIMEOUT_SECS, ENV_MAX_ATTEMPTS]
        {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn loads_from_env_with_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_URL, "https://support.test.example.com/case-management/v1");
        std::env::set_var(ENV_AUTH_TOKEN, "secret-token");
        std::env::set_var(ENV_RESOURCE_CRN, "crn:v1:staging:public:cos:global:a/1::");
        std::env::set_var(ENV_TIMEOUT_SECS, "60");
        std::env::set_var(ENV_MAX_ATTEMPTS, "2");

        let config = load_from_env().expect("should load from env");
        assert_eq!(config.base_url, "https://support.test.example.com/case-management/v1");
        assert_eq!(config.auth_token.as_deref(), Some("secret-token"));
        assert_eq!(config.resource_crn.as_deref(), Some("crn:v1:staging:public:cos:global:a/1::"));
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.max_attempts, 2);

        clear_env();
    }

    #[test]
    fn missing_url_is_a_config_error() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let result = load_from_env();
        assert!(matches!(result, Err(CaseDeskError::Config(_))));
    }

    #[test]
    fn rejects_unparseable_url() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_URL, "not a url");
        let result = load_from_env();
        assert!(matches!(result, Err(CaseDeskError::Config(_))));

        clear_env();
    }

    #[test]
    fn rejects_invalid_timeout() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_URL, "https://support.test.example.com");
        std::env::set_var(ENV_TIMEOUT_SECS, "not-a-number");
        let result = load_from_env();
        assert!(matches!(result, Err(CaseDeskError::Config(_))));

        clear_env();
    }

    #[test]
    fn loads_from_credentials_file() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "CASEDESK_URL=https://support.test.example.com/case-management/v1")
            .expect("write");
        writeln!(file, "CASEDESK_AUTH_TOKEN=file-token").expect("write");
        writeln!(file, "CASEDESK_TIMEOUT_SECS=30").expect("write");

        let config = load_from_credentials_file(Some(file.path().to_path_buf()))
            .expect("should load from file");
        assert_eq!(config.auth_token.as_deref(), Some("file-token"));
        assert_eq!(config.timeout_secs, 30);
        // Keys absent from the file keep their defaults.
        assert_eq!(config.max_attempts, casedesk_domain::DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn credentials_file_not_found_is_a_config_error() {
        let result =
            load_from_credentials_file(Some(PathBuf::from("/nonexistent/casedesk.env")));
        assert!(matches!(result, Err(CaseDeskError::Config(_))));
    }

    #[test]
    fn credentials_file_does_not_leak_into_process_env() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "CASEDESK_URL=https://support.test.example.com").expect("write");
        writeln!(file, "CASEDESK_AUTH_TOKEN=file-token").expect("write");

        load_from_credentials_file(Some(file.path().to_path_buf())).expect("should load");
        assert!(std::env::var(ENV_AUTH_TOKEN).is_err());
    }
}
