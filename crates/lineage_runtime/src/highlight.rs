//! Syntax highlighting for the REPL.
//!
//! Words are colored by the same classification the parser uses, so what
//! the user sees highlighted is exactly what the grammar will recognize.

use std::borrow::Cow;

use lineage_parser::tokenizer::DELIMITERS;
use lineage_parser::{TokenKind, Vocabulary};

/// Highlighter for kinship sentences.
#[derive(Clone, Debug)]
pub struct LineageHighlighter {
    vocabulary: Vocabulary,
}

impl LineageHighlighter {
    /// Creates a highlighter over `vocabulary`.
    #[must_use]
    pub const fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Highlight a line of input.
    #[must_use]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim_start().starts_with('#') {
            return Cow::Owned(format!("\x1b[2;3m{line}\x1b[0m")); // dim italic
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut command_seen = false;
        let mut rest = line;

        while !rest.is_empty() {
            let end = rest.find(DELIMITERS).unwrap_or(rest.len());
            let (word, tail) = rest.split_at(end);

            if !word.is_empty() {
                let kind = self.vocabulary.classify(word, command_seen).kind();
                command_seen |= kind == TokenKind::Command;
                match color(kind) {
                    Some(color) => {
                        result.push_str(color);
                        result.push_str(word);
                        result.push_str("\x1b[0m");
                    }
                    None => result.push_str(word),
                }
            }

            // Copy the delimiter run as-is.
            let delimiters = tail
                .find(|c: char| !DELIMITERS.contains(&c))
                .unwrap_or(tail.len());
            result.push_str(&tail[..delimiters]);
            rest = &tail[delimiters..];
        }

        Cow::Owned(result)
    }
}

impl Default for LineageHighlighter {
    fn default() -> Self {
        Self::new(Vocabulary::standard())
    }
}

fn color(kind: TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::Command => Some("\x1b[1;32m"),                     // bold green
        TokenKind::Relation => Some("\x1b[36m"),                      // cyan
        TokenKind::Modifier => Some("\x1b[33m"),                      // yellow
        TokenKind::Name => Some("\x1b[1m"),                           // bold
        TokenKind::Date => Some("\x1b[35m"),                          // magenta
        TokenKind::Possessive | TokenKind::Projective => Some("\x1b[34m"), // blue
        TokenKind::Filler => None,
    }
}
