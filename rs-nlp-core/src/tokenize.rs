/// Splits text into tokens.
pub trait Tokenizer {
	fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Splits on Unicode whitespace only.
///
/// Punctuation stays attached to words and case is preserved, so
/// `"Hello, world!"` yields `["Hello,", "world!"]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
	fn tokenize(&self, text: &str) -> Vec<String> {
		text.split_whitespace().map(str::to_owned).collect()
	}
}

/// Splits text into words and punctuation marks.
///
/// A word is a run of alphanumeric characters, possibly joined by a single
/// apostrophe, hyphen, period or comma (`don't`, `well-known`, `3.14`,
/// `1,000`). Every other non-whitespace character becomes its own token.
/// Used by the part-of-speech tagger, which needs punctuation separated.
#[derive(Clone, Copy, Debug, Default)]
pub struct WordPunctTokenizer;

impl WordPunctTokenizer {
	fn is_joiner(c: char) -> bool {
		matches!(c, '\'' | '\u{2019}' | '-' | '.' | ',')
	}
}

impl Tokenizer for WordPunctTokenizer {
	fn tokenize(&self, text: &str) -> Vec<String> {
		let chars: Vec<char> = text.chars().collect();
		let mut tokens = Vec::new();
		let mut current = String::new();

		for (i, &c) in chars.iter().enumerate() {
			if c.is_alphanumeric() {
				current.push(c);
				continue;
			}

			// A joiner only stays inside a word when a word character follows it
			let next_is_word = chars.get(i + 1).is_some_and(|n| n.is_alphanumeric());
			if Self::is_joiner(c) && !current.is_empty() && next_is_word {
				current.push(c);
				continue;
			}

			if !current.is_empty() {
				tokens.push(std::mem::take(&mut current));
			}
			if !c.is_whitespace() {
				tokens.push(c.to_string());
			}
		}

		if !current.is_empty() {
			tokens.push(current);
		}
		tokens
	}
}
