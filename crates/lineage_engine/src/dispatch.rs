//! Command dispatch.
//!
//! Maps a normalized [`Query`] onto the forest. Mutating commands skip
//! resolution: their pipeline names a parent, not a question. Read commands
//! resolve the pipeline and shape the names into a [`Payload`].

use lineage_foundation::{Command, Error, ErrorKind, Result};
use lineage_parser::Query;
use lineage_storage::{Forest, PedigreeEntry};
use tracing::{debug, info};

use crate::resolve::Resolver;
use crate::response::{Payload, Response};

/// Applies `query` to `forest`.
///
/// A mutating command is refused without touching the forest if the query
/// already carries diagnostics. Read commands always run and report any
/// diagnostics alongside their result.
pub fn dispatch(forest: &mut Forest, query: &Query) -> Response {
    let command = query.command;
    let mut diagnostics = query.diagnostics.clone();

    if command.mutates() && !diagnostics.is_empty() {
        debug!(%command, diagnostics = diagnostics.len(), "refusing malformed mutation");
        return Response::rejected(command, diagnostics);
    }

    let outcome = match command {
        Command::Clear => Ok(Payload::Cleared(forest.clear())),
        Command::New => start(forest, query),
        Command::Add => add(forest, query),
        Command::Stats => Ok(Payload::Stats(forest.stats())),
        Command::Query | Command::Print | Command::Count | Command::Test => {
            return read(forest, query, diagnostics);
        }
    };

    match outcome {
        Ok(payload) => Response::new(command, payload, diagnostics),
        Err(error) => {
            diagnostics.push(error);
            Response::rejected(command, diagnostics)
        }
    }
}

/// Replaces the whole forest with a new family.
///
/// The replacement is built on a snapshot and only swapped in once every
/// birth has been registered.
fn start(forest: &mut Forest, query: &Query) -> Result<Payload> {
    let mut next = forest.clone();
    next.clear();
    let registration = next.register("", &query.names, &query.dates)?;

    let (founder, born) = query
        .names
        .iter()
        .zip(&query.dates)
        .next()
        .map(|(name, &born)| (name.clone(), born))
        .ok_or_else(|| Error::new(ErrorKind::NoObjects))?;

    *forest = next;
    info!(founder = %founder, born, "started new family");
    Ok(Payload::Started {
        founder,
        born,
        registration,
    })
}

/// Registers births under the query's subject.
fn add(forest: &mut Forest, query: &Query) -> Result<Payload> {
    let parent = query.subject().ok_or_else(|| Error::no_subject(""))?;
    let registration = forest.register(parent, &query.names, &query.dates)?;
    Ok(Payload::Registered(registration))
}

fn read(forest: &Forest, query: &Query, mut diagnostics: Vec<Error>) -> Response {
    let command = query.command;

    if command == Command::Print && query.steps.is_empty() {
        return match everyone(forest) {
            Ok(entries) => {
                let empty = entries.is_empty();
                finish(command, Payload::Pedigree(entries), diagnostics, empty)
            }
            Err(error) => {
                diagnostics.push(error);
                Response::rejected(command, diagnostics)
            }
        };
    }

    let resolved = match Resolver::new(forest).resolve(&query.steps) {
        Ok(resolved) => resolved,
        Err(error) => {
            diagnostics.push(error);
            return Response::rejected(command, diagnostics);
        }
    };
    let empty = resolved.is_empty();

    let payload = match command {
        Command::Count => Ok(Payload::Count(resolved.len())),
        Command::Test => Ok(Payload::Verdict(verdict(&resolved, &query.names))),
        Command::Print => pedigree(forest, &resolved).map(Payload::Pedigree),
        _ => Ok(Payload::Names(resolved)),
    };

    match payload {
        Ok(payload) => finish(command, payload, diagnostics, empty),
        Err(error) => {
            diagnostics.push(error);
            Response::rejected(command, diagnostics)
        }
    }
}

fn finish(command: Command, payload: Payload, diagnostics: Vec<Error>, empty: bool) -> Response {
    let response = Response::new(command, payload, diagnostics);
    if empty { response.no_results() } else { response }
}

/// With comparison names, every one must be in the result; without, the
/// result must be non-empty.
fn verdict(resolved: &[String], expected: &[String]) -> bool {
    if expected.is_empty() {
        !resolved.is_empty()
    } else {
        expected.iter().all(|name| resolved.contains(name))
    }
}

fn pedigree(forest: &Forest, names: &[String]) -> Result<Vec<PedigreeEntry>> {
    let mut entries = Vec::new();
    for name in names {
        let id = forest
            .lookup(name)
            .ok_or_else(|| Error::no_subject(name.as_str()))?;
        entries.extend(forest.pedigree(id)?);
    }
    Ok(entries)
}

fn everyone(forest: &Forest) -> Result<Vec<PedigreeEntry>> {
    let mut entries = Vec::new();
    for founder in forest.children(forest.root()) {
        entries.extend(forest.pedigree(founder)?);
    }
    Ok(entries)
}
