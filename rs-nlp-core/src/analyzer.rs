use log::warn;

use crate::analysis::entities::{Entity, EntityRecognizer, HeuristicRecognizer};
use crate::analysis::ngram::{rank_ngrams, NGramOrder, NGramRanking, RankedNGrams};
use crate::analysis::pos::{pos_frequency, LexiconTagger, PosFrequency, PosTagger};
use crate::analysis::sentiment::{LexiconScorer, Sentiment, SentimentScorer};
use crate::analysis::stats::{self, TextStats};
use crate::cache::AnalysisCache;
use crate::error::NlpError;
use crate::input::{AnalysisState, TextInput};
use crate::tokenize::{Tokenizer, WhitespaceTokenizer};

/// High-level analysis interface.
///
/// # Responsibilities
/// - Turn a [`TextInput`] into an [`AnalysisState`] for every analysis
/// - Own the collaborators (tagger, recogniser, scorer)
/// - Own the [`AnalysisCache`] and route every analysis through it
///
/// Absent input always yields `AnalysisState::NoInput`; a present text with
/// nothing to report yields `AnalysisState::Empty`.
pub struct Analyzer {
	tokenizer: WhitespaceTokenizer,
	tagger: Box<dyn PosTagger + Send>,
	recognizer: Box<dyn EntityRecognizer + Send>,
	scorer: Box<dyn SentimentScorer + Send>,
	cache: AnalysisCache,
}

impl Analyzer {
	/// Creates an analyzer with the lexicon-based collaborators.
	pub fn new(cache_capacity: usize) -> Self {
		Self::with_collaborators(
			Box::new(LexiconTagger),
			Box::new(HeuristicRecognizer),
			Box::new(LexiconScorer),
			AnalysisCache::new(cache_capacity),
		)
	}

	/// Creates an analyzer with custom collaborators.
	pub fn with_collaborators(
		tagger: Box<dyn PosTagger + Send>,
		recognizer: Box<dyn EntityRecognizer + Send>,
		scorer: Box<dyn SentimentScorer + Send>,
		cache: AnalysisCache,
	) -> Self {
		Self {
			tokenizer: WhitespaceTokenizer,
			tagger,
			recognizer,
			scorer,
			cache,
		}
	}

	pub fn cache(&self) -> &AnalysisCache {
		&self.cache
	}

	pub fn clear_cache(&mut self) {
		self.cache.clear();
	}

	/// Ranks the repeating n-grams of every order.
	///
	/// `Empty` when no order has a repeating n-gram.
	pub fn ngram_ranking(&mut self, input: &TextInput) -> AnalysisState<NGramRanking> {
		let Some(text) = input.as_text() else {
			return AnalysisState::NoInput;
		};
		let tokenizer = self.tokenizer;
		let ranking = self.cache.ngrams(text, || rank_ngrams(&tokenizer.tokenize(text)));
		AnalysisState::from_value(ranking, NGramRanking::is_empty)
	}

	/// Ranks the repeating n-grams of a single order.
	pub fn ngrams(&mut self, input: &TextInput, order: NGramOrder) -> AnalysisState<RankedNGrams> {
		match self.ngram_ranking(input) {
			AnalysisState::NoInput => AnalysisState::NoInput,
			AnalysisState::Empty => AnalysisState::Empty,
			AnalysisState::Ready(ranking) => {
				AnalysisState::from_value(ranking.get(order).clone(), RankedNGrams::is_empty)
			}
		}
	}

	/// Counts part-of-speech tags. `Empty` when no token could be tagged.
	pub fn pos(&mut self, input: &TextInput) -> AnalysisState<PosFrequency> {
		let Some(text) = input.as_text() else {
			return AnalysisState::NoInput;
		};
		let tagger = self.tagger.as_ref();
		let frequency = self.cache.pos(text, || pos_frequency(tagger, text));
		AnalysisState::from_value(frequency, PosFrequency::is_empty)
	}

	/// Extracts named entities. `Empty` when none were recognised.
	pub fn entities(&mut self, input: &TextInput) -> AnalysisState<Vec<Entity>> {
		let Some(text) = input.as_text() else {
			return AnalysisState::NoInput;
		};
		let recognizer = self.recognizer.as_ref();
		let entities = self.cache.entities(text, || recognizer.recognize(text));
		AnalysisState::from_value(entities, Vec::is_empty)
	}

	/// Scores sentiment. Never `Empty`: a text without opinion words is neutral.
	pub fn sentiment(&mut self, input: &TextInput) -> AnalysisState<Sentiment> {
		let Some(text) = input.as_text() else {
			return AnalysisState::NoInput;
		};
		let scorer = self.scorer.as_ref();
		AnalysisState::Ready(self.cache.sentiment(text, || scorer.score(text)))
	}

	/// Counts words and characters.
	pub fn stats(&self, input: &TextInput) -> AnalysisState<TextStats> {
		match input.as_text() {
			Some(text) => AnalysisState::Ready(TextStats::of(text)),
			None => AnalysisState::NoInput,
		}
	}

	/// Returns the first `length` tokens of the input.
	///
	/// # Errors
	/// Returns `NlpError::InvalidPreviewLength` for lengths above the maximum.
	pub fn preview(&self, input: &TextInput, length: usize) -> Result<AnalysisState<String>, NlpError> {
		let Some(text) = input.as_text() else {
			return Ok(AnalysisState::NoInput);
		};
		let preview = stats::preview(text, length).inspect_err(|e| warn!("Rejected preview request: {e}"))?;
		Ok(AnalysisState::from_value(preview, String::is_empty))
	}
}

impl Default for Analyzer {
	fn default() -> Self {
		Self::new(crate::config::DEFAULT_CACHE_CAPACITY)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::analysis::pos::PosTag;
	use std::sync::Arc;
	use std::sync::atomic::{AtomicUsize, Ordering};

	/// Tags every token as a noun and counts how often it is asked to.
	struct CountingTagger(Arc<AtomicUsize>);

	impl PosTagger for CountingTagger {
		fn tag(&self, text: &str) -> Vec<(String, PosTag)> {
			self.0.fetch_add(1, Ordering::SeqCst);
			text.split_whitespace().map(|t| (t.to_owned(), PosTag::Noun)).collect()
		}
	}

	#[test]
	fn absent_input_is_not_an_empty_result() {
		let mut analyzer = Analyzer::default();
		assert_eq!(analyzer.ngram_ranking(&TextInput::Absent), AnalysisState::NoInput);
		assert_eq!(analyzer.pos(&TextInput::Absent), AnalysisState::NoInput);
		assert_eq!(analyzer.entities(&TextInput::Absent), AnalysisState::NoInput);
		assert_eq!(analyzer.sentiment(&TextInput::Absent), AnalysisState::NoInput);
		assert_eq!(analyzer.stats(&TextInput::Absent), AnalysisState::NoInput);
		assert_eq!(analyzer.preview(&TextInput::Absent, 5), Ok(AnalysisState::NoInput));

		let input = TextInput::from("no word repeats here");
		assert_eq!(analyzer.ngram_ranking(&input), AnalysisState::Empty);
		assert_eq!(analyzer.ngrams(&input, NGramOrder::Unigram), AnalysisState::Empty);
	}

	#[test]
	fn single_order_can_be_empty_while_others_are_not() {
		let mut analyzer = Analyzer::default();
		let input = TextInput::from("the cat sat the cat ran");

		let bigrams = analyzer.ngrams(&input, NGramOrder::Bigram);
		assert_eq!(bigrams.ready().and_then(|ranked| ranked.get(&["the", "cat"])), Some(2));
		assert_eq!(analyzer.ngrams(&input, NGramOrder::Trigram), AnalysisState::Empty);
	}

	#[test]
	fn repeated_requests_hit_the_cache() {
		let calls = Arc::new(AtomicUsize::new(0));
		let mut analyzer = Analyzer::with_collaborators(
			Box::new(CountingTagger(calls.clone())),
			Box::new(HeuristicRecognizer),
			Box::new(LexiconScorer),
			AnalysisCache::new(8),
		);
		let input = TextInput::from("apples and pears");

		let first = analyzer.pos(&input);
		let second = analyzer.pos(&input);
		assert_eq!(first, second);
		assert_eq!(calls.load(Ordering::SeqCst), 1);
		assert_eq!(first.ready().map(|f| f.count(PosTag::Noun)), Some(3));

		analyzer.clear_cache();
		analyzer.pos(&input);
		assert_eq!(calls.load(Ordering::SeqCst), 2);
	}

	#[test]
	fn sentiment_and_stats_are_ready_for_any_text() {
		let mut analyzer = Analyzer::default();
		let input = TextInput::from("plain words");
		assert_eq!(analyzer.sentiment(&input), AnalysisState::Ready(Sentiment::default()));
		assert_eq!(
			analyzer.stats(&input),
			AnalysisState::Ready(TextStats { words: 2, characters: 11 })
		);
		assert_eq!(analyzer.preview(&input, 1), Ok(AnalysisState::Ready("plain".to_owned())));
		assert_eq!(analyzer.preview(&input, 0), Ok(AnalysisState::Empty));
	}
}
