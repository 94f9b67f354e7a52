//! Serializable reports handed to presentation layers.
//!
//! Every analysis is wrapped in an [`AnalysisReport`] envelope whose
//! `status` tells absent input, empty results and ready results apart.

use serde::{Deserialize, Serialize};

use crate::analysis::ngram::{NGramOrder, NGramRanking, RankedNGrams};
use crate::analysis::pos::{PosFrequency, PosTag, TagCount};
use crate::analysis::sentiment::{Mood, Sentiment};
use crate::config::NO_INPUT_MESSAGE;
use crate::input::AnalysisState;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
	Ok,
	Empty,
	NoInput,
}

/// Envelope around an analysis result.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AnalysisReport<T> {
	pub status: ReportStatus,
	pub message: Option<String>,
	pub data: Option<T>,
}

impl<T> AnalysisReport<T> {
	pub fn ok(data: T) -> Self {
		Self { status: ReportStatus::Ok, message: None, data: Some(data) }
	}

	pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
		Self { status: ReportStatus::Ok, message: Some(message.into()), data: Some(data) }
	}

	pub fn empty(message: impl Into<String>) -> Self {
		Self { status: ReportStatus::Empty, message: Some(message.into()), data: None }
	}

	pub fn no_input() -> Self {
		Self { status: ReportStatus::NoInput, message: Some(NO_INPUT_MESSAGE.to_owned()), data: None }
	}

	/// Builds a report from an analysis state.
	///
	/// `empty_message` is only used for `AnalysisState::Empty`.
	pub fn from_state<S>(state: AnalysisState<S>, empty_message: &str, convert: impl FnOnce(S) -> T) -> Self {
		match state {
			AnalysisState::NoInput => Self::no_input(),
			AnalysisState::Empty => Self::empty(empty_message),
			AnalysisState::Ready(value) => Self::ok(convert(value)),
		}
	}
}

/// One repeating n-gram as shown to users.
///
/// The field names are part of the wire format.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NGramRecord {
	pub occurrences: usize,
	pub succesive_tokens: Vec<String>,
}

/// Converts ranked n-grams to records, keeping their order.
pub fn ngram_records(ranked: &RankedNGrams) -> Vec<NGramRecord> {
	ranked
		.iter()
		.map(|entry| NGramRecord { occurrences: entry.count, succesive_tokens: entry.ngram.clone() })
		.collect()
}

/// Records for every order, keyed `"1"`, `"2"`, `"3"`.
pub fn ranking_records(ranking: &NGramRanking) -> std::collections::BTreeMap<String, Vec<NGramRecord>> {
	ranking
		.iter()
		.map(|(order, ranked)| (order.size().to_string(), ngram_records(ranked)))
		.collect()
}

/// Message shown when an order has no repeating n-gram.
pub fn no_repeats_message(order: NGramOrder) -> String {
	format!("There are no repeating {} in this text.", order.plural())
}

pub const NO_REPEATS_MESSAGE: &str = "There are no repeating n-grams in this text.";
pub const NO_POS_TAGS_MESSAGE: &str = "There are no recognised POS tags in this text.";
pub const NO_ENTITIES_MESSAGE: &str = "There are no recognised entities in this text.";

/// A tag with its count and percentage of all tagged tokens.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PosShare {
	pub tag: PosTag,
	pub count: usize,
	pub share: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PosReport {
	pub tags: Vec<PosShare>,
	pub most_common: Option<TagCount>,
}

impl PosReport {
	pub fn summary(&self) -> Option<String> {
		self.most_common.map(|best| {
			format!(
				"The most common POS tag is: {} with an occurrence count of {}",
				best.tag, best.count
			)
		})
	}
}

impl From<&PosFrequency> for PosReport {
	fn from(frequency: &PosFrequency) -> Self {
		Self {
			tags: frequency
				.iter()
				.map(|entry| PosShare { tag: entry.tag, count: entry.count, share: frequency.share(entry.tag) })
				.collect(),
			most_common: frequency.most_common(),
		}
	}
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SentimentReport {
	pub polarity: f64,
	pub subjectivity: f64,
	pub mood: Mood,
	pub summary: String,
}

impl From<Sentiment> for SentimentReport {
	fn from(sentiment: Sentiment) -> Self {
		Self {
			polarity: sentiment.polarity,
			subjectivity: sentiment.subjectivity,
			mood: sentiment.mood(),
			summary: sentiment.summary(),
		}
	}
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PreviewReport {
	pub preview: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FetchReport {
	pub text: String,
}

/// Body of every error response.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ErrorReport {
	pub error: String,
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::analysis::ngram::rank_ngrams;
	use serde_json::json;

	#[test]
	fn ngram_records_use_the_wire_names() {
		let ranking = rank_ngrams(&["the", "cat", "sat", "the", "cat", "ran"]);
		let records = ngram_records(ranking.get(NGramOrder::Bigram));
		assert_eq!(
			serde_json::to_value(&records).unwrap(),
			json!([{ "occurrences": 2, "succesive_tokens": ["the", "cat"] }])
		);
	}

	#[test]
	fn ranking_records_are_keyed_by_size() {
		let ranking = rank_ngrams(&["a", "a", "a"]);
		let value = serde_json::to_value(ranking_records(&ranking)).unwrap();
		assert_eq!(
			value,
			json!({
				"1": [{ "occurrences": 3, "succesive_tokens": ["a"] }],
				"2": [{ "occurrences": 2, "succesive_tokens": ["a", "a"] }],
				"3": []
			})
		);
	}

	#[test]
	fn states_map_to_statuses() {
		let no_input: AnalysisReport<usize> = AnalysisReport::from_state(AnalysisState::NoInput, "nothing", |v| v);
		assert_eq!(no_input.status, ReportStatus::NoInput);
		assert_eq!(no_input.message.as_deref(), Some(NO_INPUT_MESSAGE));

		let empty: AnalysisReport<usize> = AnalysisReport::from_state(AnalysisState::Empty, "nothing", |v| v);
		assert_eq!(empty.status, ReportStatus::Empty);
		assert_eq!(empty.message.as_deref(), Some("nothing"));

		let ready = AnalysisReport::from_state(AnalysisState::Ready(2usize), "nothing", |v| v * 2);
		assert_eq!(ready, AnalysisReport::ok(4));
		assert_eq!(serde_json::to_value(&ready).unwrap()["status"], json!("ok"));
	}

	#[test]
	fn pos_report_summary() {
		let frequency = PosFrequency::from_tags([PosTag::Noun, PosTag::Noun, PosTag::Verb]);
		let report = PosReport::from(&frequency);
		assert_eq!(
			report.summary().as_deref(),
			Some("The most common POS tag is: NOUN with an occurrence count of 2")
		);
		assert_eq!(report.tags.len(), 2);
	}

	#[test]
	fn no_repeats_message_names_the_order() {
		assert_eq!(no_repeats_message(NGramOrder::Trigram), "There are no repeating trigrams in this text.");
	}
}
