//! Bearer credential held by the token manager

use std::fmt;

use chrono::{DateTime, Duration, Utc};

/// Bearer token plus the instant the gateway says it stops being valid.
///
/// `expires_at` is `None` only for a token supplied from configuration, whose
/// lifetime the client never learned. Such a credential is treated as
/// already expired, so the first authenticated call refreshes it.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub token: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Credential {
    pub fn new(token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self { token: token.into(), expires_at: Some(expires_at) }
    }

    /// Credential from a pre-existing token of unknown lifetime.
    pub fn seeded(token: impl Into<String>) -> Self {
        Self { token: token.into(), expires_at: None }
    }

    /// `true` once `now` has reached the expiration instant.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map_or(true, |expires_at| now >= expires_at)
    }

    /// Time left before expiration, negative when already expired.
    #[must_use]
    pub fn remaining_at(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.expires_at.map(|expires_at| expires_at - now)
    }
}

// Keep the token out of logs and panic messages.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
