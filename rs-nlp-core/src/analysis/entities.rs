use std::fmt;

use serde::{Deserialize, Serialize};

use super::lexicon;

/// Category of a named entity.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
	Person,
	Org,
	Gpe,
	Date,
	Money,
	Percent,
	Cardinal,
}

impl EntityLabel {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Person => "PERSON",
			Self::Org => "ORG",
			Self::Gpe => "GPE",
			Self::Date => "DATE",
			Self::Money => "MONEY",
			Self::Percent => "PERCENT",
			Self::Cardinal => "CARDINAL",
		}
	}
}

impl fmt::Display for EntityLabel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A span of text recognised as a named entity.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Entity {
	pub text: String,
	pub label: EntityLabel,
}

impl Entity {
	fn new(words: &[&str], label: EntityLabel) -> Self {
		Self { text: words.join(" "), label }
	}
}

/// Extracts named entities from a text, in order of appearance.
pub trait EntityRecognizer {
	fn recognize(&self, text: &str) -> Vec<Entity>;
}

/// Rule-based recogniser.
///
/// Recognises amounts (`$5 million`, `20 dollars`), percentages, dates
/// (month names, weekdays, years), cardinal numbers, and runs of capitalised
/// words. Capitalised runs become `GPE` when listed as a place, `ORG` when
/// they contain an organisation marker (`Corp`, `University`, ...) or are an
/// acronym, and `PERSON` otherwise. A lone capitalised word opening a
/// sentence is ignored unless one of the gazetteers knows it.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicRecognizer;

const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£', '¥'];
const CURRENCY_WORDS: &[&str] = &["dollar", "dollars", "euro", "euros", "pound", "pounds", "cents"];
const MAGNITUDES: &[&str] = &["thousand", "million", "billion", "trillion"];
const PERCENT_WORDS: &[&str] = &["percent", "per-cent"];
const CONNECTORS: &[&str] = &["of", "and", "the", "de", "du", "van", "von", "&"];

/// A whitespace token with its surrounding punctuation removed.
struct Word<'a> {
	core: &'a str,
	sentence_start: bool,
	breaks_after: bool,
}

fn split_words(text: &str) -> Vec<Word<'_>> {
	let mut words: Vec<Word<'_>> = Vec::new();
	let mut sentence_start = true;

	for raw in text.split_whitespace() {
		let head = raw.trim_end_matches(|c: char| !(c.is_alphanumeric() || c == '%'));
		let trailing = &raw[head.len()..];
		let core = head.trim_start_matches(|c: char| !(c.is_alphanumeric() || CURRENCY_SYMBOLS.contains(&c)));
		if core.is_empty() {
			continue;
		}

		// "Mr." and friends neither end a sentence nor split a name
		let is_title = lexicon::contains(lexicon::PERSON_TITLES, core);
		let ends_sentence = !is_title && trailing.contains(['.', '!', '?']);
		let breaks_after = !is_title && trailing.contains([',', ';', ':', '.', '!', '?', ')', '"']);

		words.push(Word { core, sentence_start, breaks_after });
		sentence_start = ends_sentence;
	}

	words
}

fn is_number(word: &str) -> bool {
	word.chars().any(|c| c.is_ascii_digit()) && word.chars().all(|c| c.is_ascii_digit() || c == ',' || c == '.')
}

fn is_number_word(word: &str) -> bool {
	lexicon::contains(lexicon::NUMBER_WORDS, word)
}

fn is_capitalized(word: &str) -> bool {
	word.chars().next().is_some_and(char::is_uppercase)
}

fn is_acronym(word: &str) -> bool {
	let letters = word.chars().filter(|c| c.is_alphabetic()).count();
	(2..=5).contains(&letters) && word.chars().all(|c| !c.is_alphabetic() || c.is_uppercase())
}

fn is_year(word: &str) -> bool {
	word.len() == 4 && word.parse::<u32>().is_ok_and(|year| (1000..=2100).contains(&year))
}

fn is_day(word: &str) -> bool {
	let digits = word.trim_end_matches(|c: char| c.is_alphabetic());
	let suffix = &word[digits.len()..];
	matches!(suffix, "" | "st" | "nd" | "rd" | "th") && digits.parse::<u32>().is_ok_and(|day| (1..=31).contains(&day))
}

fn is_month(word: &Word<'_>, next: Option<&Word<'_>>) -> bool {
	if !is_capitalized(word.core) || !lexicon::contains(lexicon::MONTHS, word.core) {
		return false;
	}
	// "May" is far more often a verb than a month
	!word.core.eq_ignore_ascii_case("may") || next.is_some_and(|n| is_day(n.core) || is_year(n.core))
}

impl HeuristicRecognizer {
	/// Tries every numeric and date rule at `i`; returns the entity and the
	/// number of words it spans.
	fn numeric_entity(words: &[Word<'_>], i: usize) -> Option<(EntityLabel, usize)> {
		let word = &words[i];
		let next = words.get(i + 1).filter(|_| !word.breaks_after);
		let next_is = |list: &[&str]| next.is_some_and(|n| lexicon::contains(list, n.core));

		let mut symbol = word.core.chars();
		if symbol.next().is_some_and(|c| CURRENCY_SYMBOLS.contains(&c)) && is_number(symbol.as_str()) {
			let span = if next_is(MAGNITUDES) { 2 } else { 1 };
			return Some((EntityLabel::Money, span));
		}

		if let Some(amount) = word.core.strip_suffix('%') {
			if is_number(amount) {
				return Some((EntityLabel::Percent, 1));
			}
		}

		if is_number(word.core) || is_number_word(word.core) {
			if next_is(CURRENCY_WORDS) {
				return Some((EntityLabel::Money, 2));
			}
			if next_is(PERCENT_WORDS) {
				return Some((EntityLabel::Percent, 2));
			}
		}

		if is_month(word, words.get(i + 1)) {
			let mut span = 1;
			if let Some(day) = words.get(i + span).filter(|w| is_day(w.core)) {
				span += 1;
				if !day.breaks_after || day.core.len() <= 2 {
					// "March 5, 2021" keeps the year despite the comma
					if words.get(i + span).is_some_and(|w| is_year(w.core)) {
						span += 1;
					}
				}
			} else if words.get(i + span).is_some_and(|w| is_year(w.core)) && !word.breaks_after {
				span += 1;
			}
			return Some((EntityLabel::Date, span));
		}

		if is_capitalized(word.core) && lexicon::contains(lexicon::WEEKDAYS, word.core) {
			return Some((EntityLabel::Date, 1));
		}

		if is_year(word.core) {
			return Some((EntityLabel::Date, 1));
		}

		if is_number(word.core) || is_number_word(word.core) {
			let mut span = 1;
			while !words[i + span - 1].breaks_after
				&& words.get(i + span).is_some_and(|w| is_number_word(w.core))
			{
				span += 1;
			}
			return Some((EntityLabel::Cardinal, span));
		}

		None
	}

	/// Collects a run of capitalised words starting at `i`.
	fn capitalized_run<'a>(words: &[Word<'a>], i: usize) -> Vec<&'a str> {
		let mut run: Vec<&'a str> = Vec::new();
		let mut j = i;

		while let Some(word) = words.get(j) {
			let joins_next = !word.breaks_after && words.get(j + 1).is_some_and(|n| is_capitalized(n.core));
			if is_capitalized(word.core) {
				run.push(word.core);
			} else if !run.is_empty() && CONNECTORS.contains(&word.core) && joins_next {
				run.push(word.core);
			} else {
				break;
			}
			if word.breaks_after {
				break;
			}
			j += 1;
		}

		run
	}

	fn classify(names: &[&str], titled: bool, sentence_start: bool) -> Option<EntityLabel> {
		let text = names.join(" ");
		if lexicon::contains(lexicon::PLACES, &text) {
			return Some(EntityLabel::Gpe);
		}
		if names.iter().any(|name| lexicon::contains(lexicon::ORG_MARKERS, name)) {
			return Some(EntityLabel::Org);
		}
		if titled {
			return Some(EntityLabel::Person);
		}
		if let [single] = names {
			if is_acronym(single) {
				return Some(EntityLabel::Org);
			}
			if sentence_start || lexicon::is_function_word(single) {
				return None;
			}
		}
		Some(EntityLabel::Person)
	}
}

impl EntityRecognizer for HeuristicRecognizer {
	fn recognize(&self, text: &str) -> Vec<Entity> {
		let words = split_words(text);
		let mut entities = Vec::new();
		let mut i = 0;

		while i < words.len() {
			if let Some((label, span)) = Self::numeric_entity(&words, i) {
				let cores: Vec<&str> = words[i..i + span].iter().map(|w| w.core).collect();
				entities.push(Entity::new(&cores, label));
				i += span;
				continue;
			}

			if !is_capitalized(words[i].core) {
				i += 1;
				continue;
			}

			let run = Self::capitalized_run(&words, i);
			let span = run.len();

			// Leading function words ("The", "In") and a title are not part of the name
			let mut dropped = run.iter().take_while(|w| lexicon::is_function_word(w)).count();
			let titled = run.get(dropped).is_some_and(|w| lexicon::contains(lexicon::PERSON_TITLES, w));
			if titled {
				dropped += 1;
			}

			let names = &run[dropped..];
			if !names.is_empty() {
				let sentence_start = words[i + dropped].sentence_start;
				if let Some(label) = Self::classify(names, titled, sentence_start) {
					entities.push(Entity::new(names, label));
				}
			}
			i += span.max(1);
		}

		entities
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn recognize(text: &str) -> Vec<(String, EntityLabel)> {
		HeuristicRecognizer
			.recognize(text)
			.into_iter()
			.map(|entity| (entity.text, entity.label))
			.collect()
	}

	fn entity(text: &str, label: EntityLabel) -> (String, EntityLabel) {
		(text.to_owned(), label)
	}

	#[test]
	fn recognises_mixed_entities() {
		let found = recognize(
			"Barack Obama visited Paris in March 2015 and paid $5 million to Acme Corp, about 20% of the budget.",
		);
		assert_eq!(
			found,
			vec![
				entity("Barack Obama", EntityLabel::Person),
				entity("Paris", EntityLabel::Gpe),
				entity("March 2015", EntityLabel::Date),
				entity("$5 million", EntityLabel::Money),
				entity("Acme Corp", EntityLabel::Org),
				entity("20%", EntityLabel::Percent),
			]
		);
	}

	#[test]
	fn titles_and_connectors() {
		let found = recognize("Dr. Jane Smith joined the University of Oxford on Monday.");
		assert_eq!(
			found,
			vec![
				entity("Jane Smith", EntityLabel::Person),
				entity("University of Oxford", EntityLabel::Org),
				entity("Monday", EntityLabel::Date),
			]
		);
	}

	#[test]
	fn sentence_initial_words_are_not_entities() {
		assert!(recognize("The weather is nice. It rained all day.").is_empty());
	}

	#[test]
	fn cardinals_and_written_amounts() {
		let found = recognize("We sold two hundred books for 40 dollars.");
		assert_eq!(
			found,
			vec![entity("two hundred", EntityLabel::Cardinal), entity("40 dollars", EntityLabel::Money)]
		);
	}

	#[test]
	fn may_is_only_a_month_before_a_date() {
		assert!(recognize("May I come in?").is_empty());
		assert_eq!(recognize("It opened on May 4"), vec![entity("May 4", EntityLabel::Date)]);
	}

	#[test]
	fn comma_separates_places() {
		let found = recognize("She moved from Paris, France to NASA.");
		assert_eq!(
			found,
			vec![
				entity("Paris", EntityLabel::Gpe),
				entity("France", EntityLabel::Gpe),
				entity("NASA", EntityLabel::Org),
			]
		);
	}
}
