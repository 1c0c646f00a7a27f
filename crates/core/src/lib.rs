//! # Novitus Core
//!
//! Token lifecycle and document workflow for the Novitus gateway client.
//!
//! This crate contains:
//! - Port interfaces for the gateway transport and the clock
//! - The token manager deciding when to acquire or refresh
//! - The document service orchestrating submit, confirm and status calls
//!
//! ## Architecture Principles
//! - Only depends on `novitus-domain`
//! - No HTTP code; requests go through [`ports::GatewayTransport`]
//! - Time comes from [`clock::Clock`] so the token policy is testable

pub mod clock;
pub mod ports;
pub mod token;
pub mod workflow;

pub use clock::{Clock, MockClock, SystemClock};
pub use ports::{CallContext, GatewayRequest, GatewayResponse, GatewayTransport, HttpMethod};
pub use token::TokenManager;
pub use workflow::{DocumentService, SendStage};
