//! # Novitus Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The reqwest-backed gateway transport
//! - Configuration loading from environment and files
//! - The [`NovitusClient`] facade wiring everything together
//!
//! ## Architecture
//! - Implements traits defined in `novitus-core`
//! - Contains all "impure" code (network, filesystem, environment)

pub mod client;
pub mod config;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use client::NovitusClient;
pub use http::{HttpClient, HttpTransport};
