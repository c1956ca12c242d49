//! The word-at-a-time grammar.
//!
//! [`QueryParser`] consumes one word at a time. Each word is classified by
//! the [`Vocabulary`], checked against the expectation table, and then
//! routed into one of three relation queues:
//!
//! - **subject**: the chain after a possessive or "of" ("Bob's sibling")
//! - **object**: relations named after the command ("who are the *children*")
//! - **unassigned**: relations seen before either was established
//!
//! Rejected words are recorded as diagnostics and the line keeps parsing.
//! [`QueryParser::finish`] hands the queues to the normalizer.

use std::collections::VecDeque;
use std::mem;

use lineage_foundation::{
    Command, Error, ErrorContext, ErrorKind, Modifiers, RelationStep, Result,
};
use tracing::{debug, trace};

use crate::query::{self, Query};
use crate::token::{Token, TokenKind, TokenSet};
use crate::tokenizer::{InputLine, InputTokenizer};
use crate::vocabulary::Vocabulary;

/// In-flight grammar state for one line.
#[derive(Clone, Debug, Default)]
pub(crate) struct ParseState {
    pub(crate) command: Option<Command>,
    pub(crate) subject: Vec<RelationStep>,
    pub(crate) object: Vec<RelationStep>,
    pub(crate) unassigned: Vec<RelationStep>,
    pub(crate) names: VecDeque<String>,
    pub(crate) dates: Vec<i32>,
    pub(crate) diagnostics: Vec<Error>,
    modifiers: Modifiers,
    last: Option<TokenKind>,
    has_name: bool,
    in_subject: bool,
    in_object: bool,
    position: usize,
}

impl ParseState {
    fn route(&mut self, step: RelationStep) {
        if self.in_subject {
            self.subject.push(step);
        } else if self.in_object {
            self.object.push(step);
        } else {
            self.unassigned.push(step);
        }
    }
}

/// Incremental parser for kinship sentences.
#[derive(Clone, Debug)]
pub struct QueryParser {
    vocabulary: Vocabulary,
    state: ParseState,
}

impl Default for QueryParser {
    fn default() -> Self {
        Self::new(Vocabulary::standard())
    }
}

impl QueryParser {
    /// Creates a parser over the given vocabulary.
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            state: ParseState::default(),
        }
    }

    /// The vocabulary in use.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Discards any partially parsed line.
    pub fn reset(&mut self) {
        self.state = ParseState::default();
    }

    /// Parses a whole line.
    ///
    /// Returns `None` for blank and comment lines.
    pub fn parse(&mut self, line: &str) -> Option<Query> {
        match InputTokenizer::tokenize(line) {
            InputLine::Blank | InputLine::Comment(_) => None,
            InputLine::Words(words) => Some(self.parse_words(&words)),
        }
    }

    /// Parses an already tokenized line.
    pub fn parse_words<S: AsRef<str>>(&mut self, words: &[S]) -> Query {
        self.reset();
        for word in words {
            self.feed(word.as_ref());
        }
        self.finish()
    }

    /// Feeds the next word of the current line.
    pub fn feed(&mut self, word: &str) {
        let position = self.state.position;
        self.state.position += 1;

        let token = self
            .vocabulary
            .classify(word, self.state.command.is_some());
        let kind = token.kind();
        trace!(word, kind = kind.name(), position, "classified");

        if kind == TokenKind::Filler {
            return;
        }

        let expected = TokenSet::expected_after(self.state.last);
        let outcome = if expected.contains(kind) {
            self.accept(word, token)
        } else {
            Err(Error::unexpected_token(word, kind.name()))
        };

        match outcome {
            Ok(()) => self.state.last = Some(kind),
            Err(error) => {
                debug!(word, position, %error, "rejected word");
                self.state
                    .diagnostics
                    .push(error.with_context(ErrorContext::new().with_word(position)));
            }
        }
    }

    /// Ends the current line and returns the normalized query.
    pub fn finish(&mut self) -> Query {
        let state = mem::take(&mut self.state);
        let query = query::normalize(state);
        debug!(
            command = %query.command,
            steps = query.steps.len(),
            names = query.names.len(),
            diagnostics = query.diagnostics.len(),
            "parsed query"
        );
        query
    }

    fn accept(&mut self, word: &str, token: Token) -> Result<()> {
        let state = &mut self.state;
        match token {
            Token::Filler => {}
            Token::Possessive => match state.last {
                Some(TokenKind::Name) => {
                    if !state.in_subject {
                        if let Some(name) = state.names.pop_back() {
                            state.subject.push(RelationStep::anchor(name));
                        }
                        state.in_subject = true;
                    }
                }
                Some(TokenKind::Relation) => state.in_subject = true,
                _ => return Err(Error::unexpected_token(word, TokenKind::Possessive.name())),
            },
            Token::Projective => {
                if state.has_name {
                    return Err(Error::new(ErrorKind::MisplacedProjective));
                }
                let pending = mem::take(&mut state.unassigned);
                state.object.extend(pending);
                state.in_object = false;
                state.in_subject = true;
            }
            Token::Name(name) => {
                if state.in_subject {
                    state.subject.push(RelationStep::anchor(name));
                } else {
                    state.names.push_back(name);
                }
                state.has_name = true;
            }
            Token::Command(command) => {
                if state.names.len() > 1 {
                    let pending: Vec<String> = state.names.iter().cloned().collect();
                    let context = ErrorContext::new().with_word(state.position.saturating_sub(1));
                    state.diagnostics.push(
                        Error::new(ErrorKind::AmbiguousSubject(pending)).with_context(context),
                    );
                } else {
                    let names = state.names.drain(..).map(RelationStep::anchor);
                    state.subject.extend(names);
                    let pending = mem::take(&mut state.unassigned);
                    state.subject.extend(pending);
                }
                state.command = Some(command);
                state.in_subject = false;
                state.in_object = true;
            }
            Token::Modifier(modifier) => state.modifiers |= modifier,
            Token::Date(text) => {
                let Ok(date) = text.parse::<i32>() else {
                    return Err(Error::new(ErrorKind::InvalidDate(text)));
                };
                state.dates.push(date);
            }
            Token::Relation(relation) => {
                let modifiers = mem::take(&mut state.modifiers);
                state.route(RelationStep::new(relation, modifiers));
            }
        }
        Ok(())
    }
}
