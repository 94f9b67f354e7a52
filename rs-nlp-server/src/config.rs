use std::time::Duration;

use clap::Parser;
use rs_nlp_core::config::{DEFAULT_CACHE_CAPACITY, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_HOST, DEFAULT_PORT};

/// Runtime configuration of the server.
///
/// Every option can also be set through its environment variable.
#[derive(Parser, Debug, Clone)]
#[command(name = "rs-nlp-server")]
#[command(version)]
#[command(about = "HTTP backend of the rs-nlp text analysis tool", long_about = None)]
pub struct ServerConfig {
	/// Address to bind
	#[arg(long, env = "RS_NLP_HOST", default_value = DEFAULT_HOST)]
	pub host: String,

	/// Port to bind
	#[arg(short, long, env = "RS_NLP_PORT", default_value_t = DEFAULT_PORT)]
	pub port: u16,

	/// Number of distinct texts kept in the analysis cache (0 disables it)
	#[arg(long, env = "RS_NLP_CACHE_CAPACITY", default_value_t = DEFAULT_CACHE_CAPACITY)]
	pub cache_capacity: usize,

	/// Timeout in seconds when fetching a page to analyse
	#[arg(long, env = "RS_NLP_FETCH_TIMEOUT_SECS", default_value_t = DEFAULT_FETCH_TIMEOUT_SECS)]
	pub fetch_timeout_secs: u64,

	/// Origin allowed by CORS; any origin is allowed when unset
	#[arg(long, env = "RS_NLP_ALLOWED_ORIGIN")]
	pub allowed_origin: Option<String>,
}

impl ServerConfig {
	pub fn fetch_timeout(&self) -> Duration {
		Duration::from_secs(self.fetch_timeout_secs)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_the_core_constants() {
		let config = ServerConfig::parse_from(["rs-nlp-server"]);
		assert_eq!(config.host, DEFAULT_HOST);
		assert_eq!(config.port, DEFAULT_PORT);
		assert_eq!(config.cache_capacity, DEFAULT_CACHE_CAPACITY);
		assert_eq!(config.fetch_timeout(), Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS));
		assert_eq!(config.allowed_origin, None);
	}

	#[test]
	fn flags_override_defaults() {
		let config = ServerConfig::parse_from([
			"rs-nlp-server",
			"--port",
			"8080",
			"--cache-capacity",
			"0",
			"--allowed-origin",
			"http://localhost:3000",
		]);
		assert_eq!(config.port, 8080);
		assert_eq!(config.cache_capacity, 0);
		assert_eq!(config.allowed_origin.as_deref(), Some("http://localhost:3000"));
	}
}
