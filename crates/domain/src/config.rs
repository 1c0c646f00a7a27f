//! Configuration management

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::DEFAULT_TIMEOUT_SECS;
use crate::errors::{NovitusError, Result};

/// Connection settings for one gateway.
#[derive(Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Base URL, e.g. `https://fiscal.local:8888`
    pub host: String,
    /// Pre-existing token; when absent a new one is acquired on connect.
    #[serde(default, skip_serializing)]
    pub token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Trust self-signed TLS certificates presented by the gateway.
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl GatewayConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            accept_invalid_certs: false,
        }
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Host as a URL with any trailing slash removed.
    ///
    /// # Errors
    /// Returns `NovitusError::Config` if the host is not an http(s) URL.
    pub fn base_url(&self) -> Result<String> {
        let url = Url::parse(&self.host)
            .map_err(|e| NovitusError::Config(format!("Invalid host '{}': {}", self.host, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(NovitusError::Config(format!(
                "Unsupported host scheme '{}': expected http or https",
                url.scheme()
            )));
        }
        Ok(self.host.trim_end_matches('/').to_string())
    }

    /// # Errors
    /// Returns `NovitusError::Config` for a malformed host or a zero timeout.
    pub fn validate(&self) -> Result<()> {
        self.base_url()?;
        if self.timeout_secs == 0 {
            return Err(NovitusError::Config("timeout_secs must be positive".to_string()));
        }
        Ok(())
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("host", &self.host)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}
