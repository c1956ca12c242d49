//! The normalized query.
//!
//! A [`Query`] is the parser's output: one command, one linear relation
//! pipeline, and the literal names and dates the command operates on.
//! Grammar problems travel along as diagnostics rather than aborting.

use std::collections::VecDeque;
use std::fmt;

use lineage_foundation::{Command, Error, RelationStep};

use crate::parser::ParseState;

/// A parsed and normalized command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    /// What to do.
    pub command: Command,
    /// Relation pipeline, anchored by a literal name at index 0.
    pub steps: Vec<RelationStep>,
    /// Literal names: births for add/new, comparison objects for test.
    pub names: Vec<String>,
    /// Birth values, paired with `names` by position.
    pub dates: Vec<i32>,
    /// Everything that went wrong while parsing.
    pub diagnostics: Vec<Error>,
}

impl Query {
    /// Returns true if parsing produced no diagnostics.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// The literal name anchoring the pipeline, if any.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.steps.first().and_then(RelationStep::anchor_name)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "command:     {}", self.command)?;
        write!(f, "steps:      ")?;
        for step in &self.steps {
            write!(f, " {step}")?;
        }
        writeln!(f)?;
        writeln!(f, "names:       {}", self.names.join(", "))?;
        let dates: Vec<String> = self.dates.iter().map(ToString::to_string).collect();
        write!(f, "dates:       {}", dates.join(", "))?;
        for error in &self.diagnostics {
            write!(f, "\ndiagnostic:  {error}")?;
            if let Some(context) = &error.context {
                write!(f, " ({context})")?;
            }
        }
        Ok(())
    }
}

/// Turns the parser's queues into a single pipeline.
///
/// 1. A pipeline with no subject takes the first bare name as its anchor.
/// 2. Object relations, then unassigned relations, follow the subject.
/// 3. A line without a command prints.
/// 4. For add and new, literal names inside the pipeline are births.
/// 5. For new, the founder's name becomes the first birth.
/// 6. Births need one date per name; tests compare names instead.
pub(crate) fn normalize(state: ParseState) -> Query {
    let ParseState {
        command,
        mut subject,
        object,
        unassigned,
        mut names,
        dates,
        mut diagnostics,
        ..
    } = state;

    if subject.is_empty() {
        if let Some(name) = names.pop_front() {
            subject.push(RelationStep::anchor(name));
        }
    }
    subject.extend(object);
    subject.extend(unassigned);

    let command = command.unwrap_or_default();

    if matches!(command, Command::Add | Command::New) {
        let mut steps = Vec::with_capacity(subject.len());
        let mut births = Vec::new();
        for (index, step) in subject.into_iter().enumerate() {
            match step.anchor_name() {
                Some(name) if index > 0 => births.push(name.to_string()),
                _ => steps.push(step),
            }
        }
        subject = steps;
        names = births.into_iter().chain(names).collect::<VecDeque<_>>();
    }

    if command == Command::New {
        match subject.first().and_then(RelationStep::anchor_name) {
            Some(founder) => {
                names.push_front(founder.to_string());
                subject[0] = RelationStep::identity();
            }
            None => diagnostics.push(Error::no_subject(String::new())),
        }
    }

    if command != Command::Test && names.len() != dates.len() {
        diagnostics.push(Error::date_mismatch(names.len(), dates.len()));
    }

    Query {
        command,
        steps: subject,
        names: names.into(),
        dates,
        diagnostics,
    }
}
