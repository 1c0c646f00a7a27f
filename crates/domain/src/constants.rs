//! Gateway constants
//!
//! Centralized location for paths and timing values shared by the core and
//! infrastructure crates.

// Endpoints
pub const API_PREFIX: &str = "/api/v1";
pub const TOKEN_PATH: &str = "/api/v1/token";
pub const QUEUE_PATH: &str = "/api/v1/queue";

// Token lifecycle
pub const TOKEN_REFRESH_THRESHOLD_SECS: i64 = 300; // refresh when less than 5 minutes remain

// Transport defaults
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("novitus-client-rust/", env!("CARGO_PKG_VERSION"));
