//! Bearer token lifecycle
//!
//! [`TokenManager`] owns the single credential of a client instance and
//! decides, before every authenticated call, whether it can be used as is,
//! must be refreshed, or must be replaced by a freshly acquired one:
//!
//! 1. No credential held: acquire.
//! 2. Credential expired (or expiry unknown): refresh, and if that fails
//!    acquire once.
//! 3. Less than five minutes left: refresh. A failure here is returned to
//!    the caller without falling back to acquire.
//! 4. Otherwise: reuse the held token, no network call.
//!
//! The check and the overwrite happen under one async mutex, so concurrent
//! callers sharing a manager never refresh twice.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use novitus_domain::constants::{TOKEN_PATH, TOKEN_REFRESH_THRESHOLD_SECS};
use novitus_domain::{AuthError, Credential, TokenResponse, TokenStep};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::clock::Clock;
use crate::ports::{
    decode_body, CallContext, GatewayRequest, GatewayResponse, GatewayTransport, HttpMethod,
};

/// What `ensure_valid` decided to do with the held credential.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Renewal {
    Acquire,
    RefreshOrAcquire,
    Refresh,
    Reuse(String),
}

/// Token manager for one gateway host
pub struct TokenManager {
    transport: Arc<dyn GatewayTransport>,
    clock: Arc<dyn Clock>,
    credential: Mutex<Option<Credential>>,
    refresh_threshold: Duration,
}

impl TokenManager {
    /// Create a manager holding no credential.
    pub fn new(transport: Arc<dyn GatewayTransport>, clock: Arc<dyn Clock>) -> Self {
        Self {
            transport,
            clock,
            credential: Mutex::new(None),
            refresh_threshold: Duration::seconds(TOKEN_REFRESH_THRESHOLD_SECS),
        }
    }

    /// Start from an existing credential instead of an empty slot.
    #[must_use]
    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credential = Mutex::new(Some(credential));
        self
    }

    /// Snapshot of the held credential.
    pub async fn credential(&self) -> Option<Credential> {
        self.credential.lock().await.clone()
    }

    /// Obtain a brand new token (`GET /api/v1/token`) and hold it.
    ///
    /// # Errors
    /// Returns `AuthError` if the gateway cannot be reached, rejects the
    /// request or reports an unparseable expiration. The held credential is
    /// left untouched on failure.
    #[instrument(skip(self, ctx))]
    pub async fn acquire(&self, ctx: &CallContext) -> Result<Credential, AuthError> {
        let mut slot = self.credential.lock().await;
        self.acquire_locked(&mut slot, ctx).await
    }

    /// Exchange the held token for a new one (`PATCH /api/v1/token`).
    ///
    /// # Errors
    /// Returns `AuthError::NoToken` when nothing is held, otherwise the same
    /// failures as [`acquire`](Self::acquire).
    #[instrument(skip(self, ctx))]
    pub async fn refresh(&self, ctx: &CallContext) -> Result<Credential, AuthError> {
        let mut slot = self.credential.lock().await;
        self.refresh_locked(&mut slot, ctx).await
    }

    /// Return a token that can be presented on the next call, renewing it
    /// first when the policy requires.
    ///
    /// # Errors
    /// Returns the `AuthError` of the renewal step that decided the outcome.
    #[instrument(skip(self, ctx))]
    pub async fn ensure_valid(&self, ctx: &CallContext) -> Result<String, AuthError> {
        let mut slot = self.credential.lock().await;
        let renewal = self.decide(slot.as_ref(), self.clock.now());
        debug!(renewal = renewal_label(&renewal), "token check");

        match renewal {
            Renewal::Reuse(token) => Ok(token),
            Renewal::Acquire => self.acquire_locked(&mut slot, ctx).await.map(|c| c.token),
            Renewal::Refresh => self.refresh_locked(&mut slot, ctx).await.map(|c| c.token),
            Renewal::RefreshOrAcquire => match self.refresh_locked(&mut slot, ctx).await {
                Ok(credential) => Ok(credential.token),
                Err(error) => {
                    warn!(%error, "expired token could not be refreshed, acquiring a new one");
                    self.acquire_locked(&mut slot, ctx).await.map(|c| c.token)
                }
            },
        }
    }

    fn decide(&self, held: Option<&Credential>, now: DateTime<Utc>) -> Renewal {
        let Some(credential) = held else {
            return Renewal::Acquire;
        };
        if credential.is_expired_at(now) {
            return Renewal::RefreshOrAcquire;
        }
        match credential.remaining_at(now) {
            Some(remaining) if remaining < self.refresh_threshold => Renewal::Refresh,
            _ => Renewal::Reuse(credential.token.clone()),
        }
    }

    async fn acquire_locked(
        &self,
        slot: &mut Option<Credential>,
        ctx: &CallContext,
    ) -> Result<Credential, AuthError> {
        let request = GatewayRequest::new(HttpMethod::Get, TOKEN_PATH);
        let credential = self.exchange(TokenStep::Acquire, request, ctx).await?;
        info!(expires_at = ?credential.expires_at, "acquired gateway token");
        *slot = Some(credential.clone());
        Ok(credential)
    }

    async fn refresh_locked(
        &self,
        slot: &mut Option<Credential>,
        ctx: &CallContext,
    ) -> Result<Credential, AuthError> {
        let current = slot.as_ref().map(|c| c.token.clone()).ok_or(AuthError::NoToken)?;
        let request = GatewayRequest::new(HttpMethod::Patch, TOKEN_PATH).with_bearer(current);
        let credential = self.exchange(TokenStep::Refresh, request, ctx).await?;
        info!(expires_at = ?credential.expires_at, "refreshed gateway token");
        *slot = Some(credential.clone());
        Ok(credential)
    }

    async fn exchange(
        &self,
        step: TokenStep,
        request: GatewayRequest,
        ctx: &CallContext,
    ) -> Result<Credential, AuthError> {
        let response = self
            .transport
            .send(request, ctx)
            .await
            .map_err(|source| AuthError::Transport { step, source })?;

        let body = match response {
            GatewayResponse::Success(body) => body,
            GatewayResponse::Failure(error) => return Err(AuthError::Rejected { step, error }),
        };

        let parsed: TokenResponse =
            decode_body(body).map_err(|source| AuthError::Transport { step, source })?;
        let expires_at = DateTime::parse_from_rfc3339(&parsed.expiration_date)
            .map_err(|_| AuthError::InvalidExpiration {
                step,
                value: parsed.expiration_date.clone(),
            })?
            .with_timezone(&Utc);

        Ok(Credential::new(parsed.token, expires_at))
    }
}

fn renewal_label(renewal: &Renewal) -> &'static str {
    match renewal {
        Renewal::Acquire => "acquire",
        Renewal::RefreshOrAcquire => "refresh_or_acquire",
        Renewal::Refresh => "refresh",
        Renewal::Reuse(_) => "reuse",
    }
}
