use std::collections::{HashMap, VecDeque};
use std::hash::Hasher;

use fnv::FnvHasher;
use log::debug;

use crate::analysis::entities::Entity;
use crate::analysis::ngram::NGramRanking;
use crate::analysis::pos::PosFrequency;
use crate::analysis::sentiment::Sentiment;

/// FNV-1a hash of an input text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextKey(u64);

impl TextKey {
	pub fn of(text: &str) -> Self {
		let mut hasher = FnvHasher::default();
		hasher.write(text.as_bytes());
		Self(hasher.finish())
	}

	pub fn value(self) -> u64 {
		self.0
	}
}

/// Results already computed for one text.
///
/// The text is kept so that a hash collision is detected instead of
/// returning another text's results.
#[derive(Debug)]
struct CachedAnalysis {
	text: String,
	ngrams: Option<NGramRanking>,
	pos: Option<PosFrequency>,
	entities: Option<Vec<Entity>>,
	sentiment: Option<Sentiment>,
}

impl CachedAnalysis {
	fn new(text: &str) -> Self {
		Self {
			text: text.to_owned(),
			ngrams: None,
			pos: None,
			entities: None,
			sentiment: None,
		}
	}
}

/// Memoizes analysis results per input text.
///
/// Entries are keyed by [`TextKey`]; each entry fills lazily as analyses are
/// requested. When `capacity` distinct texts are held, the oldest one is
/// evicted. A capacity of 0 disables caching entirely.
///
/// The cache only stores what it is handed: computing is always delegated
/// to the caller's closure, so the analyses themselves stay stateless.
#[derive(Debug)]
pub struct AnalysisCache {
	capacity: usize,
	entries: HashMap<TextKey, CachedAnalysis>,
	order: VecDeque<TextKey>,
}

impl AnalysisCache {
	pub fn new(capacity: usize) -> Self {
		Self {
			capacity,
			entries: HashMap::new(),
			order: VecDeque::new(),
		}
	}

	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// Number of texts currently held.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn clear(&mut self) {
		self.entries.clear();
		self.order.clear();
	}

	pub fn ngrams(&mut self, text: &str, compute: impl FnOnce() -> NGramRanking) -> NGramRanking {
		self.get_or_compute(text, |entry| &mut entry.ngrams, compute)
	}

	pub fn pos(&mut self, text: &str, compute: impl FnOnce() -> PosFrequency) -> PosFrequency {
		self.get_or_compute(text, |entry| &mut entry.pos, compute)
	}

	pub fn entities(&mut self, text: &str, compute: impl FnOnce() -> Vec<Entity>) -> Vec<Entity> {
		self.get_or_compute(text, |entry| &mut entry.entities, compute)
	}

	pub fn sentiment(&mut self, text: &str, compute: impl FnOnce() -> Sentiment) -> Sentiment {
		self.get_or_compute(text, |entry| &mut entry.sentiment, compute)
	}

	fn get_or_compute<T: Clone>(
		&mut self,
		text: &str,
		field: fn(&mut CachedAnalysis) -> &mut Option<T>,
		compute: impl FnOnce() -> T,
	) -> T {
		if self.capacity == 0 {
			return compute();
		}

		let key = TextKey::of(text);
		let slot = field(self.entry(key, text));
		if let Some(value) = slot.as_ref() {
			debug!("Analysis cache hit for text {:016x}", key.value());
			return value.clone();
		}

		let value = compute();
		*slot = Some(value.clone());
		value
	}

	/// Returns the entry for `text`, creating it (and evicting) if needed.
	fn entry(&mut self, key: TextKey, text: &str) -> &mut CachedAnalysis {
		if self.entries.get(&key).is_some_and(|entry| entry.text != text) {
			debug!("Analysis cache collision for {:016x}, replacing entry", key.value());
			self.entries.remove(&key);
			self.order.retain(|k| *k != key);
		}

		if !self.entries.contains_key(&key) {
			while self.entries.len() >= self.capacity {
				match self.order.pop_front() {
					Some(oldest) => {
						self.entries.remove(&oldest);
					}
					None => break,
				}
			}
			self.order.push_back(key);
		}

		self.entries.entry(key).or_insert_with(|| CachedAnalysis::new(text))
	}
}

impl Default for AnalysisCache {
	fn default() -> Self {
		Self::new(crate::config::DEFAULT_CACHE_CAPACITY)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::analysis::ngram::rank_ngrams;
	use crate::analysis::sentiment::Sentiment;

	fn ranking(text: &str) -> NGramRanking {
		rank_ngrams(&text.split_whitespace().collect::<Vec<_>>())
	}

	#[test]
	fn same_text_is_computed_once() {
		let mut cache = AnalysisCache::new(4);
		let mut calls = 0;

		let first = cache.ngrams("a a b", || {
			calls += 1;
			ranking("a a b")
		});
		let second = cache.ngrams("a a b", || {
			calls += 1;
			ranking("a a b")
		});

		assert_eq!(calls, 1);
		assert_eq!(first, second);
		assert_eq!(cache.len(), 1);
	}

	#[test]
	fn analyses_of_one_text_share_an_entry() {
		let mut cache = AnalysisCache::new(4);
		cache.ngrams("text", || ranking("text"));
		cache.sentiment("text", Sentiment::default);
		assert_eq!(cache.len(), 1);
	}

	#[test]
	fn oldest_text_is_evicted() {
		let mut cache = AnalysisCache::new(2);
		cache.sentiment("one", Sentiment::default);
		cache.sentiment("two", Sentiment::default);
		cache.sentiment("three", Sentiment::default);
		assert_eq!(cache.len(), 2);

		let mut recomputed = false;
		cache.sentiment("one", || {
			recomputed = true;
			Sentiment::default()
		});
		assert!(recomputed);
		assert_eq!(cache.len(), 2);
	}

	#[test]
	fn zero_capacity_never_stores() {
		let mut cache = AnalysisCache::new(0);
		let mut calls = 0;
		for _ in 0..3 {
			cache.sentiment("text", || {
				calls += 1;
				Sentiment::default()
			});
		}
		assert_eq!(calls, 3);
		assert!(cache.is_empty());
	}

	#[test]
	fn clear_drops_everything() {
		let mut cache = AnalysisCache::new(2);
		cache.sentiment("text", Sentiment::default);
		cache.clear();
		assert!(cache.is_empty());
	}

	#[test]
	fn key_is_stable() {
		assert_eq!(TextKey::of("hello"), TextKey::of("hello"));
		assert_ne!(TextKey::of("hello"), TextKey::of("hello "));
	}
}
