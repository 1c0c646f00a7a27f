//! # Novitus Domain
//!
//! Fiscal documents, gateway responses and error types for the Novitus
//! gateway client.
//!
//! This crate contains:
//! - Document models (Receipt, Invoice, Printout) and their validation
//! - Gateway request identifiers, credentials and response shapes
//! - The error taxonomy and Result definition
//! - Gateway configuration
//!
//! ## Architecture
//! - No dependencies on other novitus crates
//! - No I/O; pure data and validation

pub mod config;
pub mod constants;
pub mod document;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::GatewayConfig;
pub use document::{Document, Invoice, Printout, Receipt, Validate};
pub use errors::*;
pub use types::*;
