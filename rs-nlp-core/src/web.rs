use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::error::NlpError;

/// Accepts http(s) and ftp(s) URLs on a domain, `localhost` or an IPv4
/// address, with an optional port and path.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(concat!(
		r"(?i)^(?:http|ftp)s?://",
		r"(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+(?:[A-Z]{2,6}\.?|[A-Z0-9-]{2,}\.?)|",
		r"localhost|",
		r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})",
		r"(?::\d+)?",
		r"(?:/?|[/?]\S+)$",
	))
	.expect("URL pattern is valid")
});

pub fn is_valid_url(url: &str) -> bool {
	URL_PATTERN.is_match(url)
}

/// Returns the trimmed URL if it is valid.
///
/// # Errors
/// Returns `NlpError::InvalidUrl` otherwise.
pub fn validate_url(url: &str) -> Result<&str, NlpError> {
	let url = url.trim();
	if is_valid_url(url) {
		Ok(url)
	} else {
		Err(NlpError::InvalidUrl(url.to_owned()))
	}
}

/// Joins the text of every `<p>` element of an HTML page with single spaces.
///
/// The page is parsed as a browser would, so implicitly closed paragraphs,
/// comments and script bodies are handled. Nested markup is dropped and
/// character entities are decoded. A page without paragraphs gives an empty
/// string.
pub fn extract_paragraphs(html: &str) -> String {
	let document = Html::parse_document(html);
	let Ok(paragraph) = Selector::parse("p") else {
		return String::new();
	};
	document
		.select(&paragraph)
		.map(|element| element.text().collect::<String>())
		.collect::<Vec<_>>()
		.join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accepts_common_urls() {
		for url in [
			"http://example.com",
			"https://www.example.co.uk/path/page.html?q=1",
			"HTTPS://EXAMPLE.COM/",
			"ftp://files.example.org:2121/pub",
			"http://localhost:8080/",
			"http://192.168.0.1",
		] {
			assert!(is_valid_url(url), "{url} should be valid");
		}
	}

	#[test]
	fn rejects_malformed_urls() {
		for url in ["Type here...", "example.com", "http://", "mailto:me@example.com", "https://exa mple.com"] {
			assert!(!is_valid_url(url), "{url} should be invalid");
		}
		assert_eq!(validate_url("nope"), Err(NlpError::InvalidUrl("nope".to_owned())));
		assert_eq!(validate_url("  http://example.com "), Ok("http://example.com"));
	}

	#[test]
	fn extracts_paragraph_text() {
		let html = r#"<html><head><title>T</title></head><body>
			<h1>Heading</h1>
			<p>First <b>bold</b> paragraph.</p>
			<div><P class="x">Fish &amp; chips &#38; &#x41;</P></div>
			<p>Last</p>
		</body></html>"#;
		assert_eq!(extract_paragraphs(html), "First bold paragraph. Fish & chips & A Last");
	}

	#[test]
	fn does_not_match_other_p_tags() {
		assert_eq!(extract_paragraphs("<pre>code</pre><param>x</param>"), "");
	}

	#[test]
	fn implicitly_closed_paragraphs_stay_apart() {
		assert_eq!(extract_paragraphs("<p>one<p>two</p>"), "one two");
	}

	#[test]
	fn unclosed_paragraphs_keep_their_text() {
		let text = extract_paragraphs("<p>alpha\n<p>beta\n<div>x</div>");
		assert_eq!(text.split_whitespace().collect::<Vec<_>>(), vec!["alpha", "beta"]);
	}

	#[test]
	fn comments_and_scripts_are_not_paragraphs() {
		assert_eq!(extract_paragraphs("<!-- <p>hidden</p> --><p>shown</p>"), "shown");
		assert_eq!(extract_paragraphs("<script>var s = '<p>x</p>';</script><p>y</p>"), "y");
	}

	#[test]
	fn page_without_paragraphs_is_empty() {
		assert_eq!(extract_paragraphs("<html><body><div>no paragraph</div></body></html>"), "");
	}
}
