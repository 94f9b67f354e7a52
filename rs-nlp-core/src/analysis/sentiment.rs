use serde::{Deserialize, Serialize};

use super::lexicon;

/// Polarity and subjectivity of a text.
///
/// - `polarity` lies in `[-1.0, 1.0]`, negative to positive
/// - `subjectivity` lies in `[0.0, 1.0]`, objective to subjective
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct Sentiment {
	pub polarity: f64,
	pub subjectivity: f64,
}

/// Overall tone derived from the sign of the polarity.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
	Positive,
	Negative,
	Neutral,
}

impl Mood {
	pub fn emoji(self) -> &'static str {
		match self {
			Self::Positive => "😄",
			Self::Negative => "😞",
			Self::Neutral => "😑",
		}
	}
}

fn round2(value: f64) -> f64 {
	(value * 100.0).round() / 100.0
}

impl Sentiment {
	pub fn mood(&self) -> Mood {
		if self.polarity > 0.0 {
			Mood::Positive
		} else if self.polarity < 0.0 {
			Mood::Negative
		} else {
			Mood::Neutral
		}
	}

	/// Subjectivity as a whole percentage.
	pub fn subjectivity_percent(&self) -> u32 {
		(round2(self.subjectivity) * 100.0).round() as u32
	}

	/// One-line description, e.g.
	/// `This text has a polarity score of 0.50 (ranges from -1 to 1) and it's 60% subjective 😄`.
	pub fn summary(&self) -> String {
		format!(
			"This text has a polarity score of {:.2} (ranges from -1 to 1) and it's {}% subjective {}",
			self.polarity,
			self.subjectivity_percent(),
			self.mood().emoji()
		)
	}
}

/// Scores the sentiment of a text.
pub trait SentimentScorer {
	fn score(&self, text: &str) -> Sentiment;
}

/// Averages per-word scores from an opinion lexicon.
///
/// An intensifier ("very", "extremely") scales the next opinion word, and a
/// negation ("not", "never", "n't") flips its polarity at half strength.
/// Determiners between a modifier and its opinion word are skipped. Texts
/// without any opinion word score zero on both axes.
#[derive(Clone, Copy, Debug, Default)]
pub struct LexiconScorer;

/// (word, polarity, subjectivity)
const OPINION_WORDS: &[(&str, f64, f64)] = &[
	("good", 0.7, 0.6),
	("great", 0.8, 0.75),
	("excellent", 1.0, 1.0),
	("amazing", 0.6, 0.9),
	("awesome", 1.0, 1.0),
	("wonderful", 1.0, 1.0),
	("fantastic", 0.4, 0.9),
	("nice", 0.6, 1.0),
	("love", 0.5, 0.6),
	("lovely", 0.5, 0.75),
	("happy", 0.8, 1.0),
	("glad", 0.5, 1.0),
	("best", 1.0, 0.3),
	("better", 0.5, 0.5),
	("beautiful", 0.85, 1.0),
	("perfect", 1.0, 1.0),
	("pleasant", 0.73, 0.97),
	("brilliant", 0.9, 1.0),
	("enjoyable", 0.4, 0.5),
	("interesting", 0.5, 0.5),
	("positive", 0.23, 0.55),
	("fun", 0.3, 0.2),
	("important", 0.4, 1.0),
	("bad", -0.7, 0.67),
	("terrible", -1.0, 1.0),
	("awful", -1.0, 1.0),
	("horrible", -1.0, 1.0),
	("worst", -1.0, 1.0),
	("worse", -0.4, 0.6),
	("poor", -0.4, 0.6),
	("sad", -0.5, 1.0),
	("angry", -0.5, 1.0),
	("hate", -0.8, 0.9),
	("ugly", -0.7, 1.0),
	("boring", -1.0, 1.0),
	("disappointing", -0.6, 0.7),
	("negative", -0.3, 0.4),
	("wrong", -0.5, 0.9),
	("stupid", -0.8, 1.0),
	("dull", -0.3, 0.6),
	("annoying", -0.8, 0.9),
	("failed", -0.5, 0.3),
];

const INTENSIFIERS: &[(&str, f64)] = &[
	("very", 1.3),
	("really", 1.2),
	("so", 1.2),
	("extremely", 1.5),
	("incredibly", 1.5),
	("absolutely", 1.5),
	("highly", 1.4),
	("totally", 1.3),
	("quite", 1.1),
];

const NEGATIONS: &[&str] = &["not", "never", "no", "n't"];

const NEGATION_FACTOR: f64 = -0.5;

impl SentimentScorer for LexiconScorer {
	fn score(&self, text: &str) -> Sentiment {
		let mut assessments: Vec<(f64, f64)> = Vec::new();
		let mut intensity = 1.0;
		let mut negated = false;

		for raw in text.split_whitespace() {
			let word = raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'').to_lowercase();
			if word.is_empty() {
				continue;
			}

			if NEGATIONS.contains(&word.as_str()) || word.ends_with("n't") {
				negated = true;
				continue;
			}
			if let Some((_, factor)) = INTENSIFIERS.iter().find(|(w, _)| *w == word) {
				intensity *= factor;
				continue;
			}
			if let Some((_, polarity, subjectivity)) = OPINION_WORDS.iter().find(|(w, _, _)| *w == word) {
				let mut polarity = polarity * intensity;
				if negated {
					polarity *= NEGATION_FACTOR;
				}
				assessments.push((polarity.clamp(-1.0, 1.0), (subjectivity * intensity).clamp(0.0, 1.0)));
			} else if lexicon::DETERMINERS.contains(&word.as_str()) {
				continue;
			}

			intensity = 1.0;
			negated = false;
		}

		if assessments.is_empty() {
			return Sentiment::default();
		}

		let n = assessments.len() as f64;
		let polarity = assessments.iter().map(|(p, _)| p).sum::<f64>() / n;
		let subjectivity = assessments.iter().map(|(_, s)| s).sum::<f64>() / n;
		Sentiment {
			polarity: polarity.clamp(-1.0, 1.0),
			subjectivity: subjectivity.clamp(0.0, 1.0),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn close(a: f64, b: f64) -> bool {
		(a - b).abs() < 1e-9
	}

	#[test]
	fn objective_text_is_neutral() {
		let sentiment = LexiconScorer.score("The table is made of wood.");
		assert_eq!(sentiment, Sentiment::default());
		assert_eq!(sentiment.mood(), Mood::Neutral);
		assert_eq!(
			sentiment.summary(),
			"This text has a polarity score of 0.00 (ranges from -1 to 1) and it's 0% subjective 😑"
		);
	}

	#[test]
	fn intensifier_scales_the_next_word() {
		let sentiment = LexiconScorer.score("This movie is very good!");
		assert!(close(sentiment.polarity, 0.91));
		assert!(close(sentiment.subjectivity, 0.78));
		assert_eq!(sentiment.mood(), Mood::Positive);
		assert_eq!(sentiment.subjectivity_percent(), 78);
	}

	#[test]
	fn negation_flips_at_half_strength() {
		let sentiment = LexiconScorer.score("It was not a good day");
		assert!(close(sentiment.polarity, -0.35));
		assert!(close(sentiment.subjectivity, 0.6));
		assert_eq!(sentiment.mood(), Mood::Negative);

		let contracted = LexiconScorer.score("It wasn't good");
		assert!(close(contracted.polarity, -0.35));
	}

	#[test]
	fn scores_are_averaged_and_bounded() {
		let sentiment = LexiconScorer.score("great food, terrible service, absolutely perfect view");
		// (0.8 - 1.0 + 1.0) / 3, perfect is clamped to 1.0
		assert!(close(sentiment.polarity, 0.8 / 3.0));
		assert!(sentiment.subjectivity <= 1.0);
	}

	#[test]
	fn summary_reports_rounded_values() {
		let sentiment = Sentiment { polarity: 0.456, subjectivity: 0.6 };
		assert_eq!(
			sentiment.summary(),
			"This text has a polarity score of 0.46 (ranges from -1 to 1) and it's 60% subjective 😄"
		);
		let negative = Sentiment { polarity: -0.5, subjectivity: 0.25 };
		assert_eq!(
			negative.summary(),
			"This text has a polarity score of -0.50 (ranges from -1 to 1) and it's 25% subjective 😞"
		);
	}
}
