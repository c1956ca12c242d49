//! Input tokenization.
//!
//! Splits a raw line into words. Case is preserved because capitalization
//! is how the grammar recognizes names. Apostrophes are delimiters, so
//! "Bob's" becomes `["Bob", "s"]` and the lone `s` acts as the possessive.

/// Characters that separate words.
pub const DELIMITERS: &[char] = &['\t', ' ', ',', '?', '.', ':', ';', '\'', '-', '\r', '\n'];

/// A classified input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputLine {
    /// Nothing but whitespace.
    Blank,
    /// A `#` comment, with the marker stripped.
    Comment(String),
    /// Words to feed the grammar.
    Words(Vec<String>),
}

/// Tokenizes input lines.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Classifies a line and splits it into words.
    #[must_use]
    pub fn tokenize(line: &str) -> InputLine {
        let trimmed = line.trim_start();
        if let Some(comment) = trimmed.strip_prefix('#') {
            return InputLine::Comment(comment.trim().to_string());
        }

        let words = Self::split(line);
        if words.is_empty() {
            InputLine::Blank
        } else {
            InputLine::Words(words)
        }
    }

    /// Splits text into words on [`DELIMITERS`], dropping empty runs.
    #[must_use]
    pub fn split(text: &str) -> Vec<String> {
        text.split(DELIMITERS)
            .filter(|word| !word.is_empty())
            .map(ToString::to_string)
            .collect()
    }
}
