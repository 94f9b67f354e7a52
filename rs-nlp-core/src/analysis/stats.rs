use serde::{Deserialize, Serialize};

use crate::config::MAX_PREVIEW_LENGTH;
use crate::error::NlpError;
use crate::tokenize::{Tokenizer, WhitespaceTokenizer};

/// Size of a text.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TextStats {
	/// Number of whitespace-separated tokens.
	pub words: usize,
	/// Number of Unicode scalar values, whitespace included.
	pub characters: usize,
}

impl TextStats {
	pub fn of(text: &str) -> Self {
		Self {
			words: text.split_whitespace().count(),
			characters: text.chars().count(),
		}
	}

	pub fn summary(&self) -> String {
		format!(
			"There are {} words and {} characters in the entire text.",
			self.words, self.characters
		)
	}
}

/// Returns the first `length` tokens of `text`, joined by single spaces.
///
/// # Errors
/// Returns `NlpError::InvalidPreviewLength` when `length` exceeds
/// [`MAX_PREVIEW_LENGTH`].
pub fn preview(text: &str, length: usize) -> Result<String, NlpError> {
	if length > MAX_PREVIEW_LENGTH {
		return Err(NlpError::InvalidPreviewLength { length, max: MAX_PREVIEW_LENGTH });
	}
	let tokens = WhitespaceTokenizer.tokenize(text);
	Ok(tokens.iter().take(length).map(String::as_str).collect::<Vec<_>>().join(" "))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn counts_words_and_characters() {
		let stats = TextStats::of("Ana are  mere.\n");
		assert_eq!(stats, TextStats { words: 3, characters: 15 });
		assert_eq!(stats.summary(), "There are 3 words and 15 characters in the entire text.");
	}

	#[test]
	fn characters_are_not_bytes() {
		assert_eq!(TextStats::of("Tița").characters, 4);
	}

	#[test]
	fn preview_truncates_and_normalises_spacing() {
		assert_eq!(preview("one  two\tthree four", 3).unwrap(), "one two three");
		assert_eq!(preview("one two", 50).unwrap(), "one two");
		assert_eq!(preview("one two", 0).unwrap(), "");
	}

	#[test]
	fn preview_rejects_oversized_length() {
		assert_eq!(
			preview("text", MAX_PREVIEW_LENGTH + 1),
			Err(NlpError::InvalidPreviewLength { length: MAX_PREVIEW_LENGTH + 1, max: MAX_PREVIEW_LENGTH })
		);
	}
}
