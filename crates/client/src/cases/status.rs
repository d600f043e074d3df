//! Status transition payloads
//!
//! The status endpoint accepts exactly one of two actions. Modeling the
//! payload as a tagged enum makes a request carrying both (or neither)
//! unrepresentable; whether the transition is legal for the case's current
//! status is the server's decision alone.

use serde::Serialize;

/// Requested status transition for a case.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum StatusPayload {
    /// Close out the case with a resolution code.
    Resolve {
        resolution_code: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
    /// Reopen a resolved case with an explanatory comment.
    Unresolve { comment: String },
}

impl StatusPayload {
    /// Resolve without a closing comment.
    pub fn resolve(resolution_code: i64) -> Self {
        Self::Resolve { resolution_code, comment: None }
    }

    /// Resolve with a closing comment.
    pub fn resolve_with_comment(resolution_code: i64, comment: impl Into<String>) -> Self {
        Self::Resolve { resolution_code, comment: Some(comment.into()) }
    }

    /// Reopen with a comment explaining why.
    pub fn unresolve(comment: impl Into<String>) -> Self {
        Self::Unresolve { comment: comment.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_serializes_action_tag() {
        let payload = StatusPayload::resolve(1);
        let json = serde_json::to_value(&payload).expect("should serialize");
        assert_eq!(json, serde_json::json!({ "action": "resolve", "resolution_code": 1 }));
    }

    #[test]
    fn resolve_with_comment_includes_comment() {
        let payload = StatusPayload::resolve_with_comment(2, "duplicate of CS0000001");
        let json = serde_json::to_value(&payload).expect("should serialize");
        assert_eq!(json["action"], "resolve");
        assert_eq!(json["comment"], "duplicate of CS0000001");
    }

    #[test]
    fn unresolve_serializes_action_tag() {
        let payload = StatusPayload::unresolve("issue reappeared");
        let json = serde_json::to_value(&payload).expect("should serialize");
        assert_eq!(
            json,
            serde_json::json!({ "action": "unresolve", "comment": "issue reappeared" })
        );
    }
}
