//! Scripted gateway transport
//!
//! Responses are queued up front and handed out in order. Every request is
//! recorded so tests can check the call sequence afterwards.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use novitus_core::clock::MockClock;
use novitus_core::ports::{
    CallContext, GatewayRequest, GatewayResponse, GatewayTransport, HttpMethod,
};
use novitus_core::TokenManager;
use novitus_domain::{Credential, RemoteError, TransportError};
use serde_json::{json, Value};

/// One request as the transport saw it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: HttpMethod,
    pub path: String,
    pub bearer_token: Option<String>,
    pub body: Option<Value>,
}

impl RecordedCall {
    /// `"METHOD /path"`, handy for sequence assertions.
    pub fn line(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}

/// In-memory `GatewayTransport` driven by a queue of canned responses.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<GatewayResponse, TransportError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, response: Result<GatewayResponse, TransportError>) -> &Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn ok(&self, body: Value) -> &Self {
        self.push(Ok(GatewayResponse::Success(body)))
    }

    pub fn remote(&self, code: i64, description: &str) -> &Self {
        self.push(Ok(GatewayResponse::Failure(RemoteError {
            code,
            description: description.to_string(),
        })))
    }

    pub fn fail(&self, error: TransportError) -> &Self {
        self.push(Err(error))
    }

    /// Queue a successful token response.
    pub fn token(&self, token: &str, expires_at: DateTime<Utc>) -> &Self {
        self.ok(token_body(token, expires_at))
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn lines(&self) -> Vec<String> {
        self.calls().iter().map(RecordedCall::line).collect()
    }

    pub fn remaining(&self) -> usize {
        self.responses.lock().unwrap().len()
    }
}

#[async_trait]
impl GatewayTransport for ScriptedTransport {
    async fn send(
        &self,
        request: GatewayRequest,
        _ctx: &CallContext,
    ) -> Result<GatewayResponse, TransportError> {
        let call = RecordedCall {
            method: request.method,
            path: request.path,
            bearer_token: request.bearer_token,
            body: request.body,
        };
        let line = call.line();
        self.calls.lock().unwrap().push(call);

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Request(format!("unscripted call: {line}"))))
    }
}

pub fn token_body(token: &str, expires_at: DateTime<Utc>) -> Value {
    json!({ "token": token, "expiration_date": expires_at.to_rfc3339() })
}

/// Token manager over `transport`, optionally holding `credential`.
pub fn token_manager(
    transport: &Arc<ScriptedTransport>,
    clock: &MockClock,
    credential: Option<Credential>,
) -> TokenManager {
    let manager = TokenManager::new(transport.clone(), Arc::new(clock.clone()));
    match credential {
        Some(credential) => manager.with_credential(credential),
        None => manager,
    }
}
