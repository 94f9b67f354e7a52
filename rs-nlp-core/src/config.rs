//! Defaults shared by the library, the server and the UI.
//!
//! Runtime overrides for the server are handled by its own CLI arguments
//! and environment variables.

/// Minimum number of occurrences for an n-gram to be reported.
pub const MIN_NGRAM_OCCURRENCES: usize = 2;

/// Default number of tokens shown by a preview.
pub const DEFAULT_PREVIEW_LENGTH: usize = 50;

/// Largest accepted preview length, in tokens.
pub const MAX_PREVIEW_LENGTH: usize = 300;

/// Number of distinct texts kept by the analysis cache.
/// A capacity of 0 disables caching.
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Default HTTP server host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default HTTP server port.
pub const DEFAULT_PORT: u16 = 5000;

/// Timeout applied when fetching a page to analyse.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// User agent sent when fetching pages.
pub const USER_AGENT: &str = concat!("rs-nlp/", env!("CARGO_PKG_VERSION"));

/// Message shown when no usable input was provided.
pub const NO_INPUT_MESSAGE: &str = "No valid input detected.";
