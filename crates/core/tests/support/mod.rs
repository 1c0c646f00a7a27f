//! Shared test helpers for `novitus-core` integration tests.
//!
//! A scripted in-memory transport stands in for the gateway so tests can
//! assert exactly which requests were made and in what order.

#![allow(dead_code)]

pub mod documents;
pub mod transport;
