//! The resolution pipeline.
//!
//! A query's relation steps are applied front to back to a frontier of
//! names. A literal anchor pushes its name onto the frontier; every other
//! step expands each frontier name into its kin and the results become the
//! next frontier. Each stage keeps only the first occurrence of a name.
//!
//! ```text
//! steps:    { Bob }      { youngest sibling }      { child }
//! frontier: [Bob]   ──►  [Ida]               ──►   [Jay, Kit]
//! ```

use std::collections::{HashSet, VecDeque};
use std::mem;

use lineage_foundation::{Error, RelationStep, Result};
use lineage_storage::Forest;
use tracing::debug;

/// Applies relation pipelines to a forest.
#[derive(Clone, Copy, Debug)]
pub struct Resolver<'f> {
    forest: &'f Forest,
}

impl<'f> Resolver<'f> {
    /// Creates a resolver over `forest`.
    #[must_use]
    pub const fn new(forest: &'f Forest) -> Self {
        Self { forest }
    }

    /// Runs the pipeline and returns the final frontier.
    ///
    /// An empty result is not an error; callers decide what "nobody" means.
    ///
    /// # Errors
    ///
    /// Returns `NoSubject` if the pipeline is empty or names someone who is
    /// not in the forest.
    pub fn resolve(&self, steps: &[RelationStep]) -> Result<Vec<String>> {
        if steps.is_empty() {
            return Err(Error::no_subject(""));
        }

        let mut frontier: VecDeque<String> = VecDeque::new();
        let mut buffer: VecDeque<String> = VecDeque::new();

        for (stage, step) in steps.iter().enumerate() {
            if let Some(name) = step.anchor_name() {
                if name.is_empty() || !self.forest.contains(name) {
                    debug!(stage, name, "unknown anchor");
                    return Err(Error::no_subject(name));
                }
                frontier.push_back(name.to_string());
            } else {
                while let Some(name) = frontier.pop_front() {
                    let id = self
                        .forest
                        .lookup(&name)
                        .ok_or_else(|| Error::no_subject(name.as_str()))?;
                    for kin in self.forest.kin(id, step)? {
                        buffer.push_back(self.forest.name_of(kin)?.to_string());
                    }
                }
                mem::swap(&mut frontier, &mut buffer);
            }

            dedupe(&mut frontier);
            debug!(stage, step = %step, frontier = frontier.len(), "resolved stage");
        }

        Ok(frontier.into())
    }
}

/// Drops repeated names, keeping first occurrences in order.
fn dedupe(names: &mut VecDeque<String>) {
    let mut seen = HashSet::with_capacity(names.len());
    names.retain(|name| seen.insert(name.clone()));
}
