//! Response bodies returned by the gateway

use serde::{Deserialize, Serialize};

use super::RequestId;
use crate::errors::RemoteError;

/// Body of `GET`/`PATCH /api/v1/token`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    /// RFC 3339 timestamp
    pub expiration_date: String,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("token", &"<redacted>")
            .field("expiration_date", &self.expiration_date)
            .finish()
    }
}

/// Body of `GET /api/v1/queue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueueStatus {
    pub requests_in_queue: u64,
}

/// Body of `DELETE /api/v1/queue`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClearQueueResult {
    pub status: String,
}

/// Error detail nested in request/device status and in error payloads.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorDetail {
    pub code: i64,
    pub description: String,
}

impl ErrorDetail {
    /// The gateway reports "no error" as a zeroed detail.
    pub fn is_empty(&self) -> bool {
        self.code == 0 && self.description.is_empty()
    }
}

impl From<ErrorDetail> for RemoteError {
    fn from(detail: ErrorDetail) -> Self {
        Self { code: detail.code, description: detail.description }
    }
}

/// Error body: `{"exception": {"code": .., "description": ..}}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub exception: ErrorDetail,
}

impl From<ErrorPayload> for RemoteError {
    fn from(payload: ErrorPayload) -> Self {
        payload.exception.into()
    }
}

/// Request-level status of a submitted document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestStatus {
    pub status: String,
    pub id: RequestId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e_document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jpkid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

impl RequestStatus {
    /// Error reported for this request, ignoring the zeroed placeholder.
    pub fn failure(&self) -> Option<&ErrorDetail> {
        self.error.as_ref().filter(|e| !e.is_empty())
    }
}

/// Status of the fiscal device behind the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

/// Body of `POST /api/v1/{type}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub request: RequestStatus,
}

impl SubmissionResult {
    pub fn request_id(&self) -> &RequestId {
        &self.request.id
    }
}

/// Body of `PUT /api/v1/{type}/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfirmResult {
    pub request: RequestStatus,
}

/// Body of `GET /api/v1/{type}/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusResult {
    pub device: DeviceStatus,
    pub request: RequestStatus,
}

/// Body of `DELETE /api/v1/{type}/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteResult {
    pub request: RequestStatus,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn status_result_parses_device_and_request() {
        let body = json!({
            "device": {"status": "ok", "error": {"code": 0, "description": ""}},
            "request": {
                "status": "DONE",
                "id": "42",
                "jpkid": "7",
                "error": {"code": 0, "description": ""}
            }
        });

        let parsed: StatusResult = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.device.status, "ok");
        assert_eq!(parsed.request.id.as_str(), "42");
        assert_eq!(parsed.request.jpkid.as_deref(), Some("7"));
        assert!(parsed.request.failure().is_none());
    }

    #[test]
    fn request_failure_reported_when_populated() {
        let body = json!({"request": {"status": "ERROR", "id": "9", "error": {"code": 12, "description": "paper"}}});
        let parsed: SubmissionResult = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.request.failure().map(|e| e.code), Some(12));
    }

    #[test]
    fn error_payload_converts_to_remote_error() {
        let payload: ErrorPayload = serde_json::from_value(
            json!({"exception": {"code": 3, "description": "token expired"}}),
        )
        .unwrap();
        let remote: RemoteError = payload.into();
        assert_eq!(remote, RemoteError { code: 3, description: "token expired".into() });
    }

    #[test]
    fn token_response_debug_hides_token() {
        let response = TokenResponse {
            token: "secret".into(),
            expiration_date: "2030-01-01T00:00:00Z".into(),
        };
        assert!(!format!("{response:?}").contains("secret"));
    }
}
