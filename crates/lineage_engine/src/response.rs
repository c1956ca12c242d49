//! Structured command results.
//!
//! The engine never formats text. Every line produces a [`Response`]: a
//! coarse [`ResultCode`], a typed [`Payload`], and the diagnostics gathered
//! while parsing and executing.

use lineage_foundation::{Command, Error};
use lineage_storage::{ForestStats, PedigreeEntry, Registration};

/// Outcome of one line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResultCode {
    /// The command ran and produced something.
    #[default]
    Ok,
    /// Resolution ended with nobody.
    NoResults,
    /// At least one diagnostic was raised.
    BadQuery,
}

/// Typed result of a command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Payload {
    /// Nothing to report.
    #[default]
    None,
    /// The forest was cleared; number of people removed.
    Cleared(usize),
    /// A new family was started.
    Started {
        /// First founder of the new forest.
        founder: String,
        /// The founder's birth value.
        born: i32,
        /// Full registration outcome.
        registration: Registration,
    },
    /// Births were registered under an existing person.
    Registered(Registration),
    /// Resolved names, in pipeline order.
    Names(Vec<String>),
    /// Each resolved person followed by their descendants.
    Pedigree(Vec<PedigreeEntry>),
    /// Number of resolved names.
    Count(usize),
    /// Forest summary.
    Stats(ForestStats),
    /// Whether the comparison held.
    Verdict(bool),
}

/// Everything the engine has to say about one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    /// The command that ran.
    pub command: Command,
    /// Coarse outcome.
    pub code: ResultCode,
    /// Typed result.
    pub payload: Payload,
    /// Parse and execution errors, in the order they were raised.
    pub diagnostics: Vec<Error>,
}

impl Response {
    /// Builds a response, deriving the code from the diagnostics.
    #[must_use]
    pub fn new(command: Command, payload: Payload, diagnostics: Vec<Error>) -> Self {
        let code = if diagnostics.is_empty() {
            ResultCode::Ok
        } else {
            ResultCode::BadQuery
        };
        Self {
            command,
            code,
            payload,
            diagnostics,
        }
    }

    /// A response with no payload for a line that failed.
    #[must_use]
    pub fn rejected(command: Command, diagnostics: Vec<Error>) -> Self {
        Self::new(command, Payload::None, diagnostics)
    }

    /// Marks an otherwise clean response as having found nobody.
    #[must_use]
    pub fn no_results(mut self) -> Self {
        if self.code == ResultCode::Ok {
            self.code = ResultCode::NoResults;
        }
        self
    }

    /// Returns true if the line ran cleanly.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code == ResultCode::Ok
    }

    /// The resolved names, if this response carries them.
    #[must_use]
    pub fn names(&self) -> Option<&[String]> {
        match &self.payload {
            Payload::Names(names) => Some(names),
            _ => None,
        }
    }
}
