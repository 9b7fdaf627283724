// ---------------------------------------------------------------------------
// Tokenizer
// ---------------------------------------------------------------------------
//
// Splits tag strings into lowercase word tokens. A token is a run of two or
// more Unicode word characters; single characters ("J." initials, "A")
// never become features. Stop words are removed after lowercasing.
// ---------------------------------------------------------------------------

use std::sync::LazyLock;

use regex::Regex;

use crate::stopwords::is_stop_word;

static TOKEN_PATTERN: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is a valid regex"));

/// Lowercase `text` and return its word tokens in order of appearance,
/// including repeats. Stop words are kept.
pub fn raw_tokens(text: &str) -> Vec<String> {
	let lower = text.to_lowercase();
	TOKEN_PATTERN
		.find_iter(&lower)
		.map(|m| m.as_str().to_string())
		.collect()
}

/// Tokens used as vectorizer features: [`raw_tokens`] minus stop words.
pub fn tokenize(text: &str) -> Vec<String> {
	raw_tokens(text)
		.into_iter()
		.filter(|t| !is_stop_word(t))
		.collect()
}
