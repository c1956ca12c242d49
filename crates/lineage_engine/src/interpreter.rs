//! Line interpreter.
//!
//! Owns one forest and one parser and runs the full
//! parse → normalize → resolve → dispatch cycle for each line.

use lineage_parser::{Query, QueryParser, Vocabulary};
use lineage_storage::Forest;

use crate::dispatch::dispatch;
use crate::response::Response;

/// A forest with a parser attached.
#[derive(Clone, Debug, Default)]
pub struct Interpreter {
    forest: Forest,
    parser: QueryParser,
}

impl Interpreter {
    /// Creates an interpreter with an empty forest and the standard vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an interpreter with a custom vocabulary.
    #[must_use]
    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        Self {
            forest: Forest::new(),
            parser: QueryParser::new(vocabulary),
        }
    }

    /// The forest.
    #[must_use]
    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    /// The vocabulary the parser uses.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        self.parser.vocabulary()
    }

    /// Parses a line without running it.
    ///
    /// Returns `None` for blank and comment lines.
    pub fn parse(&mut self, line: &str) -> Option<Query> {
        self.parser.parse(line)
    }

    /// Runs an already parsed query.
    pub fn execute(&mut self, query: &Query) -> Response {
        dispatch(&mut self.forest, query)
    }

    /// Parses and runs a line.
    ///
    /// Returns `None` for blank and comment lines.
    pub fn evaluate(&mut self, line: &str) -> Option<Response> {
        let query = self.parse(line)?;
        Some(self.execute(&query))
    }
}
