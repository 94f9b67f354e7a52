use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::MIN_NGRAM_OCCURRENCES;
use crate::error::{InvalidInputError, NlpError};

/// An ordered tuple of consecutive tokens.
pub type NGram = Vec<String>;

/// Size of the n-grams being counted.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NGramOrder {
	Unigram,
	Bigram,
	Trigram,
}

impl NGramOrder {
	/// Every order produced by [`rank_ngrams`], smallest first.
	pub const ALL: [NGramOrder; 3] = [NGramOrder::Unigram, NGramOrder::Bigram, NGramOrder::Trigram];

	/// Number of tokens in an n-gram of this order.
	pub fn size(self) -> usize {
		match self {
			Self::Unigram => 1,
			Self::Bigram => 2,
			Self::Trigram => 3,
		}
	}

	/// Maps a window size back to its order.
	///
	/// # Errors
	/// Returns `NlpError::InvalidOrder` for sizes other than 1, 2 or 3.
	pub fn from_size(size: usize) -> Result<Self, NlpError> {
		match size {
			1 => Ok(Self::Unigram),
			2 => Ok(Self::Bigram),
			3 => Ok(Self::Trigram),
			_ => Err(NlpError::InvalidOrder(size)),
		}
	}

	/// Label used by selectors, e.g. `"2nd Order (Bigrams)"`.
	pub fn label(self) -> &'static str {
		match self {
			Self::Unigram => "1st Order (Unigrams)",
			Self::Bigram => "2nd Order (Bigrams)",
			Self::Trigram => "3rd Order (Trigrams)",
		}
	}

	/// Lowercase plural name, e.g. `"bigrams"`.
	pub fn plural(self) -> &'static str {
		match self {
			Self::Unigram => "unigrams",
			Self::Bigram => "bigrams",
			Self::Trigram => "trigrams",
		}
	}
}

/// An n-gram with its number of occurrences.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NGramCount {
	pub ngram: NGram,
	pub count: usize,
}

/// Repeating n-grams of a single order, most frequent first.
///
/// ## Invariants
/// - Every entry has a count of at least [`MIN_NGRAM_OCCURRENCES`]
/// - Entries are sorted by count, descending
/// - Entries with equal counts keep the order in which they first appeared
/// - N-grams are unique
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RankedNGrams {
	entries: Vec<NGramCount>,
}

impl RankedNGrams {
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &NGramCount> {
		self.entries.iter()
	}

	/// Returns the count of an n-gram, if it repeats.
	pub fn get<S: AsRef<str>>(&self, ngram: &[S]) -> Option<usize> {
		self.entries
			.iter()
			.find(|entry| entry.ngram.iter().map(String::as_str).eq(ngram.iter().map(AsRef::as_ref)))
			.map(|entry| entry.count)
	}

	/// Returns the top entry, if any.
	pub fn most_common(&self) -> Option<&NGramCount> {
		self.entries.first()
	}

	pub fn as_slice(&self) -> &[NGramCount] {
		&self.entries
	}
}

impl IntoIterator for RankedNGrams {
	type Item = NGramCount;
	type IntoIter = std::vec::IntoIter<NGramCount>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

/// Ranked repeating n-grams for every order in [`NGramOrder::ALL`].
///
/// Always holds exactly one (possibly empty) [`RankedNGrams`] per order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NGramRanking {
	orders: BTreeMap<NGramOrder, RankedNGrams>,
}

impl NGramRanking {
	/// Returns the ranked n-grams of one order.
	pub fn get(&self, order: NGramOrder) -> &RankedNGrams {
		// Every order is inserted by `rank_ngrams`
		&self.orders[&order]
	}

	/// Returns the orders held by the ranking, smallest first.
	pub fn orders(&self) -> impl Iterator<Item = NGramOrder> + '_ {
		self.orders.keys().copied()
	}

	pub fn iter(&self) -> impl Iterator<Item = (NGramOrder, &RankedNGrams)> {
		self.orders.iter().map(|(order, ranked)| (*order, ranked))
	}

	/// True when no order has a repeating n-gram.
	pub fn is_empty(&self) -> bool {
		self.orders.values().all(RankedNGrams::is_empty)
	}
}

/// Counts every window of `n` consecutive tokens.
///
/// Windows are listed in order of first appearance. A sequence shorter than
/// `n` (or `n == 0`) yields an empty table.
pub fn frequency_table<S: AsRef<str>>(tokens: &[S], n: usize) -> Vec<NGramCount> {
	let mut table: Vec<NGramCount> = Vec::new();
	if n == 0 || tokens.len() < n {
		return table;
	}

	let mut positions: HashMap<Vec<&str>, usize> = HashMap::new();
	for window in tokens.windows(n) {
		let key: Vec<&str> = window.iter().map(AsRef::as_ref).collect();
		let slot = *positions.entry(key).or_insert_with(|| {
			table.push(NGramCount {
				ngram: window.iter().map(|token| token.as_ref().to_owned()).collect(),
				count: 0,
			});
			table.len() - 1
		});
		table[slot].count += 1;
	}

	table
}

/// Keeps the repeating n-grams of one order and sorts them.
fn rank_order<S: AsRef<str>>(tokens: &[S], order: NGramOrder) -> RankedNGrams {
	let mut entries: Vec<NGramCount> = frequency_table(tokens, order.size())
		.into_iter()
		.filter(|entry| entry.count >= MIN_NGRAM_OCCURRENCES)
		.collect();

	// `sort_by` is stable: ties keep first-seen order
	entries.sort_by(|a, b| b.count.cmp(&a.count));

	RankedNGrams { entries }
}

/// Ranks the repeating unigrams, bigrams and trigrams of a token sequence.
///
/// For each order, every window of that size is counted, windows seen fewer
/// than twice are dropped, and the rest are sorted by count (descending,
/// stable). Empty input or input without repeats gives empty results; this
/// is never an error.
///
/// # Example
/// ```
/// use rs_nlp_core::analysis::ngram::{rank_ngrams, NGramOrder};
///
/// let ranking = rank_ngrams(&["a", "a", "a"]);
/// assert_eq!(ranking.get(NGramOrder::Unigram).get(&["a"]), Some(3));
/// assert_eq!(ranking.get(NGramOrder::Bigram).get(&["a", "a"]), Some(2));
/// assert!(ranking.get(NGramOrder::Trigram).is_empty());
/// ```
pub fn rank_ngrams<S: AsRef<str>>(tokens: &[S]) -> NGramRanking {
	let orders = NGramOrder::ALL
		.into_iter()
		.map(|order| (order, rank_order(tokens, order)))
		.collect();
	NGramRanking { orders }
}

/// Ranks n-grams from an untyped JSON token array.
///
/// # Errors
/// Fails with [`InvalidInputError`] when `value` is not an array or when any
/// element is not a string. Elements are never coerced.
pub fn rank_json_tokens(value: &Value) -> Result<NGramRanking, InvalidInputError> {
	let items = value.as_array().ok_or(InvalidInputError::NotASequence { found: json_type(value) })?;

	let tokens = items
		.iter()
		.enumerate()
		.map(|(index, item)| {
			item.as_str().ok_or(InvalidInputError::NonStringToken { index, found: json_type(item) })
		})
		.collect::<Result<Vec<&str>, _>>()?;

	Ok(rank_ngrams(&tokens))
}

fn json_type(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn tokens(text: &str) -> Vec<String> {
		text.split_whitespace().map(str::to_owned).collect()
	}

	#[test]
	fn empty_input_gives_three_empty_orders() {
		let ranking = rank_ngrams::<String>(&[]);
		let orders: Vec<usize> = ranking.orders().map(NGramOrder::size).collect();
		assert_eq!(orders, vec![1, 2, 3]);
		assert!(ranking.iter().all(|(_, ranked)| ranked.is_empty()));
		assert!(ranking.is_empty());
	}

	#[test]
	fn single_repeated_token() {
		let ranking = rank_ngrams(&["a", "a", "a"]);

		let unigrams = ranking.get(NGramOrder::Unigram);
		assert_eq!(unigrams.len(), 1);
		assert_eq!(unigrams.get(&["a"]), Some(3));

		let bigrams = ranking.get(NGramOrder::Bigram);
		assert_eq!(bigrams.len(), 1);
		assert_eq!(bigrams.get(&["a", "a"]), Some(2));

		assert!(ranking.get(NGramOrder::Trigram).is_empty());
	}

	#[test]
	fn repeated_phrase() {
		let ranking = rank_ngrams(&tokens("the cat sat the cat ran"));

		let bigrams = ranking.get(NGramOrder::Bigram);
		assert_eq!(bigrams.as_slice(), &[NGramCount { ngram: tokens("the cat"), count: 2 }]);
		assert!(ranking.get(NGramOrder::Trigram).is_empty());

		let unigrams = ranking.get(NGramOrder::Unigram);
		assert_eq!(unigrams.get(&["the"]), Some(2));
		assert_eq!(unigrams.get(&["cat"]), Some(2));
		assert_eq!(unigrams.get(&["sat"]), None);
	}

	#[test]
	fn most_common_is_the_top_ranked_entry() {
		let ranking = rank_ngrams(&tokens("b c d b c d d"));
		let top = ranking.get(NGramOrder::Unigram).most_common().unwrap();
		assert_eq!(top, &NGramCount { ngram: tokens("d"), count: 3 });

		assert_eq!(ranking.get(NGramOrder::Trigram).most_common(), None);
	}

	#[test]
	fn ties_keep_first_seen_order() {
		// "b" and "c" both appear twice, "b" first; "d" appears three times
		let ranking = rank_ngrams(&tokens("b c d b c d d"));
		let unigrams: Vec<(&str, usize)> = ranking
			.get(NGramOrder::Unigram)
			.iter()
			.map(|entry| (entry.ngram[0].as_str(), entry.count))
			.collect();
		assert_eq!(unigrams, vec![("d", 3), ("b", 2), ("c", 2)]);
	}

	#[test]
	fn tokens_are_case_and_punctuation_sensitive() {
		let ranking = rank_ngrams(&tokens("Cat cat cat. cat"));
		assert_eq!(ranking.get(NGramOrder::Unigram).get(&["cat"]), Some(2));
		assert_eq!(ranking.get(NGramOrder::Unigram).get(&["Cat"]), None);
	}

	#[test]
	fn frequency_table_lists_windows_in_first_seen_order() {
		let table = frequency_table(&tokens("x y x y z"), 2);
		let windows: Vec<(String, usize)> = table.iter().map(|e| (e.ngram.join(" "), e.count)).collect();
		assert_eq!(
			windows,
			vec![("x y".to_owned(), 2), ("y x".to_owned(), 1), ("y z".to_owned(), 1)]
		);
		assert!(frequency_table(&tokens("x y"), 3).is_empty());
		assert!(frequency_table(&tokens("x y"), 0).is_empty());
	}

	#[test]
	fn ranking_is_idempotent() {
		let input = tokens("to be or not to be that is to be");
		assert_eq!(rank_ngrams(&input), rank_ngrams(&input));
	}

	#[test]
	fn json_tokens_are_ranked() {
		let ranking = rank_json_tokens(&json!(["the", "cat", "sat", "the", "cat", "ran"])).unwrap();
		assert_eq!(ranking.get(NGramOrder::Bigram).get(&["the", "cat"]), Some(2));
	}

	#[test]
	fn json_non_string_token_is_rejected() {
		let err = rank_json_tokens(&json!(["a", 1, "a"])).unwrap_err();
		assert_eq!(err, InvalidInputError::NonStringToken { index: 1, found: "number" });

		let err = rank_json_tokens(&json!(["a", null])).unwrap_err();
		assert_eq!(err, InvalidInputError::NonStringToken { index: 1, found: "null" });
	}

	#[test]
	fn json_non_array_is_rejected() {
		let err = rank_json_tokens(&json!("the cat")).unwrap_err();
		assert_eq!(err, InvalidInputError::NotASequence { found: "string" });
	}

	#[test]
	fn order_round_trips_through_size() {
		for order in NGramOrder::ALL {
			assert_eq!(NGramOrder::from_size(order.size()), Ok(order));
		}
		assert_eq!(NGramOrder::from_size(4), Err(NlpError::InvalidOrder(4)));
	}
}
