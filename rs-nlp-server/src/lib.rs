//! HTTP backend of the rs-nlp tool.
//!
//! Exposes every analysis of `rs-nlp-core` as a JSON endpoint under `/v1`.
//! The analyzer, and with it the analysis cache, is shared by all workers
//! behind a `Mutex`.

/// Command-line and environment configuration.
pub mod config;

/// Error type mapped to HTTP responses.
pub mod errors;

/// Page download and paragraph extraction.
pub mod fetch;

/// Endpoint handlers and shared state.
pub mod handlers;
