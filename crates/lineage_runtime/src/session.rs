//! Session state.
//!
//! A session owns the interpreter and the line counter, and turns each
//! input line into the output lines to show for it. Line numbers count
//! every line read, including blanks and comments, so echoed numbers match
//! the source file.

use lineage_engine::{Interpreter, Response, ResultCode};
use tracing::{debug, warn};

use crate::config::RuntimeConfig;
use crate::format;

/// One running session.
#[derive(Clone, Debug, Default)]
pub struct Session {
    interpreter: Interpreter,
    config: RuntimeConfig,
    line: usize,
}

impl Session {
    /// Creates a session with an empty forest.
    #[must_use]
    pub fn new(config: RuntimeConfig) -> Self {
        Self {
            interpreter: Interpreter::new(),
            config,
            line: 0,
        }
    }

    /// Replaces the interpreter, keeping the line counter.
    #[must_use]
    pub fn with_interpreter(mut self, interpreter: Interpreter) -> Self {
        self.interpreter = interpreter;
        self
    }

    /// The interpreter.
    #[must_use]
    pub const fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// The configuration.
    #[must_use]
    pub const fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Mutable access to the configuration.
    pub fn config_mut(&mut self) -> &mut RuntimeConfig {
        &mut self.config
    }

    /// Number of lines processed so far.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        self.line
    }

    /// Restarts line numbering, for a new file.
    pub fn restart_numbering(&mut self) {
        self.line = 0;
    }

    /// Processes one input line and returns what to print for it.
    pub fn process(&mut self, text: &str) -> Vec<String> {
        self.line += 1;
        let mut output = Vec::new();
        if self.config.echo {
            output.push(format::echo(self.line, &self.config.prompt, text));
        }

        let Some(query) = self.interpreter.parse(text) else {
            return output;
        };
        if self.config.parse_dump {
            output.extend(query.to_string().lines().map(ToString::to_string));
        }

        let response = self.interpreter.execute(&query);
        let response = self.attach_line(response);
        debug!(line = self.line, command = %response.command, code = ?response.code, "line evaluated");
        if response.code == ResultCode::BadQuery {
            warn!(line = self.line, diagnostics = response.diagnostics.len(), "bad query");
        }

        output.extend(format::response(&response));
        output
    }

    /// Processes every line of `source`.
    pub fn process_source(&mut self, source: &str) -> Vec<String> {
        source.lines().flat_map(|line| self.process(line)).collect()
    }

    fn attach_line(&self, mut response: Response) -> Response {
        response.diagnostics = response
            .diagnostics
            .into_iter()
            .map(|error| error.at_line(self.line))
            .collect();
        response
    }
}
