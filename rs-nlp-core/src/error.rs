use thiserror::Error;

/// Raised when untyped token input does not hold a sequence of strings.
///
/// Token sequences arriving as JSON are never coerced: a number, `null`,
/// or nested array in place of a token rejects the whole input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
	#[error("expected an array of string tokens, got {found}")]
	NotASequence { found: &'static str },
	#[error("token at index {index} must be a string, got {found}")]
	NonStringToken { index: usize, found: &'static str },
}

/// Errors returned by the library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NlpError {
	#[error(transparent)]
	InvalidInput(#[from] InvalidInputError),
	#[error("Invalid URL.")]
	InvalidUrl(String),
	#[error("n-gram order must be 1, 2 or 3, got {0}")]
	InvalidOrder(usize),
	#[error("preview length must be between 0 and {max}, got {length}")]
	InvalidPreviewLength { length: usize, max: usize },
}
