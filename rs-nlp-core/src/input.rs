/// Text supplied by the user, or the lack of it.
///
/// Blank text (empty or whitespace only) is treated as absent, so callers
/// never have to distinguish "nothing typed" from "only spaces typed".
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum TextInput {
	#[default]
	Absent,
	Present(String),
}

impl TextInput {
	/// Builds an input from raw text, mapping blank text to `Absent`.
	pub fn new(text: impl Into<String>) -> Self {
		let text = text.into();
		if text.trim().is_empty() {
			Self::Absent
		} else {
			Self::Present(text)
		}
	}

	/// Returns the text if present.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Absent => None,
			Self::Present(text) => Some(text),
		}
	}
}

impl From<String> for TextInput {
	fn from(text: String) -> Self {
		Self::new(text)
	}
}

impl From<&str> for TextInput {
	fn from(text: &str) -> Self {
		Self::new(text)
	}
}

impl From<Option<String>> for TextInput {
	fn from(text: Option<String>) -> Self {
		text.map_or(Self::Absent, Self::new)
	}
}

/// Outcome of an analysis over a [`TextInput`].
///
/// # Variants
/// - `NoInput`: there was no text to analyse.
/// - `Empty`: the text was analysed but produced nothing to show.
/// - `Ready(T)`: the analysis produced a result.
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisState<T> {
	NoInput,
	Empty,
	Ready(T),
}

impl<T> AnalysisState<T> {
	/// Wraps a computed value, reporting `Empty` when `is_empty` holds for it.
	pub fn from_value(value: T, is_empty: impl FnOnce(&T) -> bool) -> Self {
		if is_empty(&value) {
			Self::Empty
		} else {
			Self::Ready(value)
		}
	}

	pub fn ready(&self) -> Option<&T> {
		match self {
			Self::Ready(value) => Some(value),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn blank_text_is_absent() {
		assert_eq!(TextInput::new(""), TextInput::Absent);
		assert_eq!(TextInput::new("  \n\t "), TextInput::Absent);
		assert_eq!(TextInput::from(None), TextInput::Absent);
	}

	#[test]
	fn present_text_is_kept_verbatim() {
		let input = TextInput::from(Some(" hello ".to_owned()));
		assert_eq!(input.as_text(), Some(" hello "));
	}

	#[test]
	fn state_from_value_distinguishes_empty() {
		let empty: AnalysisState<Vec<u8>> = AnalysisState::from_value(Vec::new(), Vec::is_empty);
		assert_eq!(empty, AnalysisState::Empty);

		let ready = AnalysisState::from_value(vec![1u8], Vec::is_empty);
		assert_eq!(ready.ready(), Some(&vec![1u8]));
	}
}
