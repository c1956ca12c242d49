//! Error types for the Lineage system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Every error is scoped to a single input line: the parser and the engine
//! collect them as diagnostics instead of aborting the session.

use std::fmt;

use thiserror::Error;

use crate::person::PersonId;

/// The main error type for Lineage operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Records the input line this error came from, keeping any word position.
    #[must_use]
    pub fn at_line(mut self, line: usize) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_line(line));
        self
    }

    /// Creates an unexpected token error.
    #[must_use]
    pub fn unexpected_token(word: impl Into<String>, found: &'static str) -> Self {
        Self::new(ErrorKind::UnexpectedToken {
            word: word.into(),
            found,
        })
    }

    /// Creates a no-subject error for the given name.
    #[must_use]
    pub fn no_subject(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoSubject(name.into()))
    }

    /// Creates a name/date count mismatch error.
    #[must_use]
    pub fn date_mismatch(names: usize, dates: usize) -> Self {
        Self::new(ErrorKind::DateMismatch { names, dates })
    }

    /// Creates a person not found error.
    #[must_use]
    pub fn person_not_found(id: PersonId) -> Self {
        Self::new(ErrorKind::PersonNotFound(id))
    }

    /// Creates a stale person reference error.
    #[must_use]
    pub fn stale_person(id: PersonId) -> Self {
        Self::new(ErrorKind::StalePerson(id))
    }

    /// Returns the taxonomy bucket of this error.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A word was recognized but the grammar did not expect it here.
    #[error("unexpected {found} '{word}'")]
    UnexpectedToken {
        /// The offending word.
        word: String,
        /// The token kind it was classified as.
        found: &'static str,
    },

    /// A digit-leading word that is not a valid year.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A command word arrived while several bare names were pending.
    #[error("ambiguous subject: {}", .0.join(", "))]
    AmbiguousSubject(Vec<String>),

    /// "of" appeared after a name had already been given.
    #[error("'of' must precede every name")]
    MisplacedProjective,

    /// A referenced person is not in the forest, or no subject was given.
    #[error("no such subject: '{0}'")]
    NoSubject(String),

    /// Births need exactly one date per name.
    #[error("name / date quantity mismatch: {names} names, {dates} dates")]
    DateMismatch {
        /// Number of names given.
        names: usize,
        /// Number of dates given.
        dates: usize,
    },

    /// A registration named nobody to register.
    #[error("no objects to register")]
    NoObjects,

    /// Handle does not point into the arena.
    #[error("person not found: {0:?}")]
    PersonNotFound(PersonId),

    /// Handle points at a slot that has since been recycled.
    #[error("stale person reference: {0:?}")]
    StalePerson(PersonId),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ErrorKind {
    /// Maps this kind onto the coarse error taxonomy.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnexpectedToken { .. }
            | Self::InvalidDate(_)
            | Self::AmbiguousSubject(_)
            | Self::MisplacedProjective => ErrorCategory::Grammar,
            Self::NoSubject(_) => ErrorCategory::NoSubject,
            Self::DateMismatch { .. } => ErrorCategory::DateMismatch,
            Self::NoObjects => ErrorCategory::NoObjects,
            Self::PersonNotFound(_) | Self::StalePerson(_) | Self::Internal(_) => {
                ErrorCategory::Internal
            }
        }
    }
}

/// Coarse error taxonomy, one bucket per user-facing failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Word rejected by the grammar; the rest of the line still parses.
    Grammar,
    /// Unknown or missing person.
    NoSubject,
    /// Names and dates do not pair up.
    DateMismatch,
    /// Registration with nobody to register.
    NoObjects,
    /// Arena bookkeeping failure.
    Internal,
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Input line number (1-indexed).
    pub line: Option<usize>,
    /// Word position within the line (0-indexed).
    pub word: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Sets the word position.
    #[must_use]
    pub fn with_word(mut self, word: usize) -> Self {
        self.word = Some(word);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.line, self.word) {
            (Some(line), Some(word)) => write!(f, "at line {line}, word {word}"),
            (Some(line), None) => write!(f, "at line {line}"),
            (None, Some(word)) => write!(f, "at word {word}"),
            (None, None) => Ok(()),
        }
    }
}

/// Result type alias using Lineage's Error.
pub type Result<T> = std::result::Result<T, Error>;
