//! Gateway transport over HTTP

use std::time::Duration;

use async_trait::async_trait;
use novitus_core::ports::{
    CallContext, GatewayRequest, GatewayResponse, GatewayTransport, HttpMethod,
};
use novitus_domain::{ErrorPayload, GatewayConfig, NovitusError, RemoteError, TransportError};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use super::client::HttpClient;

/// [`GatewayTransport`] backed by reqwest.
///
/// Each call is raced against its deadline and its cancellation token;
/// whichever finishes first decides the outcome and the losing request
/// future is dropped.
#[derive(Clone)]
pub struct HttpTransport {
    client: HttpClient,
    base_url: String,
    default_timeout: Duration,
}

impl HttpTransport {
    /// `base_url` is the gateway host without a trailing slash.
    pub fn new(client: HttpClient, base_url: impl Into<String>, default_timeout: Duration) -> Self {
        Self { client, base_url: base_url.into(), default_timeout }
    }

    /// Build a transport from validated gateway settings.
    ///
    /// # Errors
    /// Returns `NovitusError::Config` if the host is invalid or the HTTP
    /// client cannot be created.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, NovitusError> {
        let base_url = config.base_url()?;
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let mut builder = HttpClient::builder()
            .connect_timeout(config.timeout())
            .default_headers(headers)
            .accept_invalid_certs(config.accept_invalid_certs);
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        let client = builder
            .build()
            .map_err(|e| NovitusError::Config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self::new(client, base_url, config.timeout()))
    }

    async fn exchange(&self, request: GatewayRequest) -> Result<GatewayResponse, TransportError> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = self.client.request(reqwest_method(request.method), &url);
        if let Some(token) = &request.bearer_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = self.client.send(builder).await?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::Decode(format!("failed to read response body: {e}")))?;

        if status.is_success() {
            return decode_success(&bytes).map(GatewayResponse::Success);
        }

        let error = decode_failure(status, &bytes);
        debug!(%status, code = error.code, "gateway returned an error");
        Ok(GatewayResponse::Failure(error))
    }
}

#[async_trait]
impl GatewayTransport for HttpTransport {
    async fn send(
        &self,
        request: GatewayRequest,
        ctx: &CallContext,
    ) -> Result<GatewayResponse, TransportError> {
        if ctx.is_cancelled() {
            return Err(TransportError::Cancelled);
        }

        let timeout = ctx.timeout.unwrap_or(self.default_timeout);
        let path = request.path.clone();

        tokio::select! {
            biased;
            () = ctx.cancellation.cancelled() => {
                warn!(%path, "gateway request cancelled");
                Err(TransportError::Cancelled)
            }
            outcome = tokio::time::timeout(timeout, self.exchange(request)) => {
                outcome.unwrap_or_else(|_| {
                    warn!(%path, ?timeout, "gateway request timed out");
                    Err(TransportError::Timeout(timeout))
                })
            }
        }
    }
}

fn reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

fn decode_success(bytes: &[u8]) -> Result<Value, TransportError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(bytes)
        .map_err(|e| TransportError::Decode(format!("invalid JSON in response body: {e}")))
}

/// Structured error payload when present, otherwise HTTP status and raw body.
fn decode_failure(status: StatusCode, bytes: &[u8]) -> RemoteError {
    match serde_json::from_slice::<ErrorPayload>(bytes) {
        Ok(payload) if !payload.exception.is_empty() => payload.into(),
        _ => RemoteError {
            code: i64::from(status.as_u16()),
            description: String::from_utf8_lossy(bytes).trim().to_string(),
        },
    }
}
