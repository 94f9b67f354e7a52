use std::fmt;

use serde::{Deserialize, Serialize};

use super::lexicon;
use crate::tokenize::{Tokenizer, WordPunctTokenizer};

/// Universal part-of-speech tags.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
	Adj,
	Adp,
	Adv,
	Aux,
	Cconj,
	Det,
	Intj,
	Noun,
	Num,
	Part,
	Pron,
	Propn,
	Punct,
	Sconj,
	Sym,
	Verb,
	X,
}

impl PosTag {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Adj => "ADJ",
			Self::Adp => "ADP",
			Self::Adv => "ADV",
			Self::Aux => "AUX",
			Self::Cconj => "CCONJ",
			Self::Det => "DET",
			Self::Intj => "INTJ",
			Self::Noun => "NOUN",
			Self::Num => "NUM",
			Self::Part => "PART",
			Self::Pron => "PRON",
			Self::Propn => "PROPN",
			Self::Punct => "PUNCT",
			Self::Sconj => "SCONJ",
			Self::Sym => "SYM",
			Self::Verb => "VERB",
			Self::X => "X",
		}
	}
}

impl fmt::Display for PosTag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Assigns a part-of-speech tag to every token of a text.
pub trait PosTagger {
	fn tag(&self, text: &str) -> Vec<(String, PosTag)>;
}

/// Rule-based tagger backed by closed-class word lists.
///
/// Tokens are produced by [`WordPunctTokenizer`], so punctuation gets its
/// own `PUNCT` tag. Open-class words are resolved by, in order: capitalisation
/// inside a sentence, the word lists, common suffixes, and the previous tag.
/// Anything left is a `NOUN`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LexiconTagger;

const SYMBOLS: &[char] = &[
	'$', '%', '&', '+', '=', '<', '>', '@', '#', '*', '/', '\\', '^', '~', '|', '€', '£', '¥', '°',
];

const ADJECTIVE_SUFFIXES: &[&str] = &[
	"ous", "ful", "ive", "able", "ible", "al", "ic", "less", "ish", "ary", "est",
];

const VERB_SUFFIXES: &[&str] = &["ing", "ed", "ize", "ise", "ify", "ate"];

impl LexiconTagger {
	fn is_numeric(token: &str) -> bool {
		token.chars().any(|c| c.is_ascii_digit())
			&& token.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | ':'))
	}

	fn is_capitalized(token: &str) -> bool {
		token.chars().next().is_some_and(char::is_uppercase)
	}

	fn is_all_caps(token: &str) -> bool {
		token.chars().filter(|c| c.is_alphabetic()).count() > 1
			&& token.chars().all(|c| !c.is_alphabetic() || c.is_uppercase())
	}

	fn from_lexicon(lower: &str) -> Option<PosTag> {
		let table: [(&[&str], PosTag); 11] = [
			(lexicon::AUXILIARIES, PosTag::Aux),
			(lexicon::PARTICLES, PosTag::Part),
			(lexicon::PRONOUNS, PosTag::Pron),
			(lexicon::DETERMINERS, PosTag::Det),
			(lexicon::COORDINATING_CONJUNCTIONS, PosTag::Cconj),
			(lexicon::ADPOSITIONS, PosTag::Adp),
			(lexicon::SUBORDINATING_CONJUNCTIONS, PosTag::Sconj),
			(lexicon::INTERJECTIONS, PosTag::Intj),
			(lexicon::ADVERBS, PosTag::Adv),
			(lexicon::ADJECTIVES, PosTag::Adj),
			(lexicon::VERBS, PosTag::Verb),
		];
		table
			.iter()
			.find(|(list, _)| list.contains(&lower))
			.map(|(_, tag)| *tag)
	}

	fn from_suffix(lower: &str) -> Option<PosTag> {
		// Very short words rarely carry a meaningful suffix
		if lower.chars().count() < 5 {
			return None;
		}
		if lower.ends_with("ly") {
			Some(PosTag::Adv)
		} else if VERB_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
			Some(PosTag::Verb)
		} else if ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
			Some(PosTag::Adj)
		} else {
			None
		}
	}

	fn tag_token(token: &str, previous: Option<PosTag>, sentence_start: bool) -> PosTag {
		if !token.chars().any(char::is_alphanumeric) {
			return if token.chars().all(|c| SYMBOLS.contains(&c)) { PosTag::Sym } else { PosTag::Punct };
		}

		let lower = token.to_lowercase();
		if Self::is_numeric(token) || lexicon::NUMBER_WORDS.contains(&lower.as_str()) {
			return PosTag::Num;
		}
		if lower == "i" || lower.starts_with("i'") {
			return PosTag::Pron;
		}
		if Self::is_all_caps(token) || (Self::is_capitalized(token) && !sentence_start) {
			return PosTag::Propn;
		}
		if let Some(tag) = Self::from_lexicon(&lower) {
			return tag;
		}
		if let Some(tag) = Self::from_suffix(&lower) {
			return tag;
		}
		if Self::is_capitalized(token) {
			return PosTag::Propn;
		}
		if previous == Some(PosTag::Pron) {
			return PosTag::Verb;
		}
		if token.chars().all(|c| c.is_alphabetic() || matches!(c, '\'' | '\u{2019}' | '-')) {
			PosTag::Noun
		} else {
			PosTag::X
		}
	}
}

impl PosTagger for LexiconTagger {
	fn tag(&self, text: &str) -> Vec<(String, PosTag)> {
		let mut tagged: Vec<(String, PosTag)> = Vec::new();
		let mut sentence_start = true;

		for token in WordPunctTokenizer.tokenize(text) {
			let previous = tagged.last().map(|(_, tag)| *tag);
			let tag = Self::tag_token(&token, previous, sentence_start);

			// "to" directly before a verb is the infinitive marker
			if tag == PosTag::Verb {
				if let Some((word, last)) = tagged.last_mut() {
					if word.eq_ignore_ascii_case("to") {
						*last = PosTag::Part;
					}
				}
			}

			sentence_start = match tag {
				PosTag::Punct => sentence_start || matches!(token.as_str(), "." | "!" | "?"),
				_ => false,
			};
			tagged.push((token, tag));
		}

		tagged
	}
}

/// Occurrences of a single tag.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagCount {
	pub tag: PosTag,
	pub count: usize,
}

/// Tag frequencies of a text, in order of first appearance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PosFrequency {
	counts: Vec<TagCount>,
}

impl PosFrequency {
	/// Counts tags, keeping the order in which each tag first appears.
	pub fn from_tags(tags: impl IntoIterator<Item = PosTag>) -> Self {
		let mut counts: Vec<TagCount> = Vec::new();
		for tag in tags {
			match counts.iter_mut().find(|entry| entry.tag == tag) {
				Some(entry) => entry.count += 1,
				None => counts.push(TagCount { tag, count: 1 }),
			}
		}
		Self { counts }
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = &TagCount> {
		self.counts.iter()
	}

	pub fn count(&self, tag: PosTag) -> usize {
		self.counts.iter().find(|entry| entry.tag == tag).map_or(0, |entry| entry.count)
	}

	/// Total number of tagged tokens.
	pub fn total(&self) -> usize {
		self.counts.iter().map(|entry| entry.count).sum()
	}

	/// The most frequent tag. On ties, the tag seen first wins.
	pub fn most_common(&self) -> Option<TagCount> {
		self.counts.iter().fold(None, |best: Option<TagCount>, entry| match best {
			Some(b) if b.count >= entry.count => Some(b),
			_ => Some(*entry),
		})
	}

	/// Percentage of tokens carrying `tag`, in `[0, 100]`.
	pub fn share(&self, tag: PosTag) -> f64 {
		let total = self.total();
		if total == 0 {
			return 0.0;
		}
		self.count(tag) as f64 * 100.0 / total as f64
	}
}

/// Tags `text` and counts the tags.
pub fn pos_frequency(tagger: &dyn PosTagger, text: &str) -> PosFrequency {
	PosFrequency::from_tags(tagger.tag(text).into_iter().map(|(_, tag)| tag))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tags(text: &str) -> Vec<PosTag> {
		LexiconTagger.tag(text).into_iter().map(|(_, tag)| tag).collect()
	}

	#[test]
	fn tags_a_simple_sentence() {
		use PosTag::*;
		assert_eq!(
			tags("The quick brown fox jumps over the lazy dog."),
			vec![Det, Adj, Adj, Noun, Verb, Adp, Det, Adj, Noun, Punct]
		);
	}

	#[test]
	fn proper_nouns_numbers_and_symbols() {
		use PosTag::*;
		assert_eq!(tags("She paid $20 to Maria"), vec![Pron, Verb, Sym, Num, Adp, Propn]);
	}

	#[test]
	fn to_before_verb_is_a_particle() {
		use PosTag::*;
		assert_eq!(tags("I want to go"), vec![Pron, Verb, Part, Verb]);
	}

	#[test]
	fn sentence_start_capitals_use_the_lexicon() {
		let tagged = tags("It rained. They left quickly.");
		assert_eq!(tagged[0], PosTag::Pron);
		assert_eq!(tagged[1], PosTag::Verb);
		assert_eq!(tagged[3], PosTag::Pron);
		assert_eq!(tagged[5], PosTag::Adv);
	}

	#[test]
	fn frequency_keeps_first_seen_order() {
		use PosTag::*;
		let frequency = PosFrequency::from_tags([Noun, Verb, Noun, Det, Verb]);
		let order: Vec<PosTag> = frequency.iter().map(|entry| entry.tag).collect();
		assert_eq!(order, vec![Noun, Verb, Det]);
		assert_eq!(frequency.total(), 5);
		assert_eq!(frequency.count(Noun), 2);
		assert!((frequency.share(Det) - 20.0).abs() < 1e-9);
	}

	#[test]
	fn most_common_prefers_first_on_ties() {
		use PosTag::*;
		let frequency = PosFrequency::from_tags([Verb, Noun, Noun, Verb]);
		assert_eq!(frequency.most_common(), Some(TagCount { tag: Verb, count: 2 }));
	}

	#[test]
	fn empty_text_has_no_tags() {
		let frequency = pos_frequency(&LexiconTagger, "   ");
		assert!(frequency.is_empty());
		assert_eq!(frequency.most_common(), None);
		assert_eq!(frequency.share(PosTag::Noun), 0.0);
	}
}
