//! Text analysis library behind the rs-nlp tool.
//!
//! This crate provides the analysis side of a single-page NLP explorer:
//! - Whitespace tokenization
//! - Repeating n-gram extraction and ranking (uni-, bi- and trigrams)
//! - Part-of-speech frequency, named entities and sentiment scoring
//! - URL validation and paragraph scraping from fetched HTML
//! - An explicit, externally owned analysis cache
//!
//! The ranker and the analyzers are pure functions of their input. Caching
//! lives in [`cache::AnalysisCache`] and is driven by [`analyzer::Analyzer`].

/// Compile-time defaults and limits.
pub mod config;

/// Error types returned by the library.
pub mod error;

/// Typed input and result states (absent input, empty result, ready).
pub mod input;

/// Tokenizers feeding the analyses.
pub mod tokenize;

/// Individual analyses: n-grams, POS tags, entities, sentiment, statistics.
pub mod analysis;

/// Result cache keyed by a hash of the input text.
pub mod cache;

/// High-level entry point combining the analyses with the cache.
pub mod analyzer;

/// Serializable report types exchanged with presentation layers.
pub mod report;

/// URL validation and HTML paragraph extraction.
pub mod web;

/// File helpers for loading sample texts.
pub mod io;
