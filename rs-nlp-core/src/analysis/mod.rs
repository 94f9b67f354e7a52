//! Text analyses.
//!
//! Each analysis is a pure function of its input. The n-gram ranker works on
//! an already tokenized sequence; the others work on raw text through a
//! collaborator trait (`PosTagger`, `EntityRecognizer`, `SentimentScorer`)
//! with a lexicon-based default implementation.

/// Repeating n-gram extraction and ranking.
pub mod ngram;

/// Part-of-speech tagging and tag frequency.
pub mod pos;

/// Named entity recognition.
pub mod entities;

/// Polarity and subjectivity scoring.
pub mod sentiment;

/// Word and character counts, previews.
pub mod stats;

/// Static word lists shared by the taggers.
mod lexicon;
