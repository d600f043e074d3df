//! Conversions from transport errors into domain errors.

use casedesk_domain::CaseDeskError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub CaseDeskError);

impl From<InfraError> for CaseDeskError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<CaseDeskError> for InfraError {
    fn from(value: CaseDeskError) -> Self {
        InfraError(value)
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(classify_http_error(&value))
    }
}

/// Map a reqwest error onto the domain error taxonomy.
///
/// Status-bearing errors only appear when `error_for_status` was used; the
/// operation client normally inspects statuses itself and carries the raw
/// error envelope instead.
fn classify_http_error(err: &HttpError) -> CaseDeskError {
    if err.is_timeout() {
        return CaseDeskError::Network("HTTP request timed out".into());
    }

    #[cfg(not(target_arch = "wasm32"))]
    if err.is_connect() {
        return CaseDeskError::Network("HTTP connection failure".into());
    }

    if let Some(status) = err.status() {
        let code = status.as_u16();
        let message =
            format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

        return match code {
            401 | 403 => CaseDeskError::Auth(message),
            404 => CaseDeskError::NotFound(message),
            429 => CaseDeskError::Network(message),
            400..=499 => CaseDeskError::InvalidInput(message),
            _ => CaseDeskError::Network(message),
        };
    }

    CaseDeskError::Network(err.to_string())
}
