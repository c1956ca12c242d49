//! The main REPL implementation.

use crate::config::RuntimeConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;
use lineage_foundation::{Error, ErrorKind, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (interpreter, line counter, configuration).
    session: Session,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(config: RuntimeConfig) -> Result<Self> {
        let session = Session::new(config);
        let editor = RustylineEditor::new(session.interpreter().vocabulary())?;
        Ok(Self { editor, session })
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E, config: RuntimeConfig) -> Self {
        Self {
            editor,
            session: Session::new(config),
        }
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop until end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.session.config().banner {
            print_banner();
        }

        while let Some(lines) = self.read_eval()? {
            for line in lines {
                println!("{line}");
            }
        }

        println!();
        Ok(())
    }

    /// Reads and evaluates one line.
    ///
    /// Returns `None` at end of input.
    fn read_eval(&mut self) -> Result<Option<Vec<String>>> {
        let prompt = self.session.config().prompt.clone();
        match self.editor.read_line(&prompt)? {
            ReadResult::Line(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history(&line);
                }
                let output = self.session.process(&line);
                self.refresh_keywords();
                Ok(Some(output))
            }
            ReadResult::Interrupted => Ok(Some(Vec::new())),
            ReadResult::Eof => Ok(None),
        }
    }

    /// Offers vocabulary words and every known name for completion.
    fn refresh_keywords(&mut self) {
        let interpreter = self.session.interpreter();
        let mut keywords: Vec<String> = interpreter
            .vocabulary()
            .words()
            .into_iter()
            .map(String::from)
            .collect();
        keywords.extend(interpreter.forest().names().map(String::from));
        keywords.sort_unstable();
        self.editor.set_keywords(keywords);
    }

    /// Evaluates every line of a file, printing the output as it goes.
    ///
    /// Line numbering restarts for each file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn eval_file(&mut self, path: &Path) -> Result<usize> {
        let source = fs::read_to_string(path).map_err(|e| {
            Error::new(ErrorKind::Internal(format!(
                "failed to read {}: {e}",
                path.display()
            )))
        })?;

        info!(path = %path.display(), "evaluating file");
        self.session.restart_numbering();
        for line in self.session.process_source(&source) {
            println!("{line}");
        }
        self.refresh_keywords();
        Ok(self.session.line_number())
    }
}

fn print_banner() {
    println!("\x1b[1mLineage\x1b[0m {}", env!("CARGO_PKG_VERSION"));
    println!("Ask about a family: start Alice 1900, Alice had Bob 1920, who are Alice's children?");
    println!("Ctrl+D to exit.\n");
}
