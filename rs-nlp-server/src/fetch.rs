use std::time::Duration;

use log::info;
use reqwest::Client;
use rs_nlp_core::config::USER_AGENT;
use rs_nlp_core::web::extract_paragraphs;

use crate::errors::ApiError;

/// Downloads pages and keeps their paragraph text.
///
/// Holds a single reusable client; cloning is cheap.
#[derive(Clone, Debug)]
pub struct PageFetcher {
	client: Client,
}

impl PageFetcher {
	pub fn new(timeout: Duration) -> reqwest::Result<Self> {
		let client = Client::builder()
			.timeout(timeout)
			.user_agent(USER_AGENT)
			.build()?;
		Ok(Self { client })
	}

	/// Fetches `url` and returns the text of its `<p>` elements.
	///
	/// The URL must already be validated.
	pub async fn fetch_text(&self, url: &str) -> Result<String, ApiError> {
		info!("Fetching {url}");
		let html = self.client
			.get(url)
			.send()
			.await?
			.error_for_status()?
			.text()
			.await?;
		Ok(extract_paragraphs(&html))
	}
}
