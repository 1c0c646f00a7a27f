//! Port interfaces for talking to the gateway
//!
//! The core never builds HTTP requests itself. It describes them as
//! [`GatewayRequest`] values and hands them to a [`GatewayTransport`]
//! implementation supplied by the infrastructure layer.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use novitus_domain::{RemoteError, TransportError};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// HTTP verbs used by the gateway API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One request against the gateway, relative to its host.
#[derive(Clone, PartialEq)]
pub struct GatewayRequest {
    pub method: HttpMethod,
    /// Absolute path, e.g. `/api/v1/receipt/42`
    pub path: String,
    pub bearer_token: Option<String>,
    pub body: Option<Value>,
}

impl GatewayRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), bearer_token: None, body: None }
    }

    #[must_use]
    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

impl fmt::Debug for GatewayRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayRequest")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("bearer_token", &self.bearer_token.as_ref().map(|_| "<redacted>"))
            .field("body", &self.body)
            .finish()
    }
}

/// What the gateway answered, once the bytes made it back.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayResponse {
    /// 2xx with its decoded JSON body (`Value::Null` when empty)
    Success(Value),
    /// Non-2xx, decoded from the error payload or synthesized from the
    /// HTTP status and raw body
    Failure(RemoteError),
}

/// Per-call deadline and cancellation signal.
///
/// Cloning shares the cancellation token, so cancelling a clone cancels
/// every call made with the original.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    pub timeout: Option<Duration>,
    pub cancellation: CancellationToken,
}

impl CallContext {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_cancellation(mut self, cancellation: CancellationToken) -> Self {
        self.cancellation = cancellation;
        self
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }
}

/// Trait for sending requests to the gateway
#[async_trait]
pub trait GatewayTransport: Send + Sync {
    /// Perform exactly one request.
    ///
    /// # Errors
    /// Returns `TransportError` when no gateway answer could be obtained:
    /// connection failure, timeout, cancellation or an unreadable body.
    async fn send(
        &self,
        request: GatewayRequest,
        ctx: &CallContext,
    ) -> Result<GatewayResponse, TransportError>;
}

/// Decode a success body into `T`. An empty body decodes as `{}`.
///
/// # Errors
/// Returns `TransportError::Decode` if the body does not match `T`.
pub fn decode_body<T: DeserializeOwned>(body: Value) -> Result<T, TransportError> {
    let body = if body.is_null() { Value::Object(serde_json::Map::new()) } else { body };
    serde_json::from_value(body).map_err(|e| TransportError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use novitus_domain::{ClearQueueResult, QueueStatus};
    use serde_json::json;

    use super::*;

    #[test]
    fn null_body_decodes_as_empty_object() {
        let result: ClearQueueResult = decode_body(Value::Null).unwrap();
        assert_eq!(result.status, "");
    }

    #[test]
    fn mismatched_body_is_decode_error() {
        let err = decode_body::<QueueStatus>(json!({"requests_in_queue": "many"})).unwrap_err();
        assert!(matches!(err, TransportError::Decode(_)));
    }

    #[test]
    fn request_debug_hides_bearer() {
        let request = GatewayRequest::new(HttpMethod::Patch, "/api/v1/token").with_bearer("abc123");
        let rendered = format!("{request:?}");
        assert!(!rendered.contains("abc123"));
        assert!(rendered.contains("Patch"));
    }

    #[test]
    fn cloned_context_shares_cancellation() {
        let ctx = CallContext::new().with_timeout(Duration::from_secs(1));
        let clone = ctx.clone();
        ctx.cancellation.cancel();
        assert!(clone.is_cancelled());
    }
}
