//! HTTP transport module
//!
//! Provides the transport capability the exporter talks through.
//!
//! # Features
//!
//! - **Transport trait**: "given a request, return a response or an error"
//! - **TLS toggle**: certificate verification bypass per client, not per process
//! - **Authentication**: Integration with auth module
//!
//! There is no retry, backoff or rate limiting: the first failure ends the run.

mod client;

pub use client::{ensure_success, HttpClient, HttpClientConfig, Transport};

#[cfg(test)]
mod tests;
