//! The family forest.
//!
//! A `Forest` is a first-child/next-sibling tree of people hanging off a
//! nameless root sentinel, plus an index from name to handle. Names are the
//! primary key: two unrelated people cannot share a name, and queries rely on
//! that to move between the index and the tree.
//!
//! Both the arena and the index are persistent collections, so cloning a
//! forest is cheap. Callers that need all-or-nothing updates can mutate a
//! clone and swap it in on success.

use lineage_foundation::{Error, ErrorKind, PersonId, Result};
use tracing::{info, warn};

use crate::person::{Person, PersonStore};

/// Outcome of a birth registration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registration {
    /// Name of the parent the births were registered under.
    pub parent: String,
    /// Names newly added, in registration order.
    pub created: Vec<String>,
    /// Names skipped because they were already in the forest.
    pub skipped: Vec<String>,
}

/// Summary figures for a forest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ForestStats {
    /// Number of people, excluding the root sentinel.
    pub people: usize,
    /// Number of founders (children of the root).
    pub families: usize,
    /// Depth of the deepest family, founders counting as generation one.
    pub generations: usize,
}

/// One line of a pedigree listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PedigreeEntry {
    /// Generations below the listed person (0 for the person itself).
    pub depth: usize,
    /// Person name.
    pub name: String,
    /// Birth-order value.
    pub born: i32,
}

/// A forest of families rooted at a nameless sentinel.
#[derive(Clone, Debug)]
pub struct Forest {
    people: PersonStore,
    index: im::HashMap<String, PersonId>,
    root: PersonId,
}

impl Default for Forest {
    fn default() -> Self {
        Self::new()
    }
}

impl Forest {
    /// Creates an empty forest holding only the root sentinel.
    #[must_use]
    pub fn new() -> Self {
        let mut people = PersonStore::new();
        let root = people.spawn(Person::new("", 0));
        let mut index = im::HashMap::new();
        index.insert(String::new(), root);
        Self {
            people,
            index,
            root,
        }
    }

    /// Handle of the root sentinel.
    #[must_use]
    pub const fn root(&self) -> PersonId {
        self.root
    }

    /// Looks up a person by name. The root is indexed under the empty name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<PersonId> {
        self.index.get(name).copied()
    }

    /// Returns true if the name is indexed.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Gets a live person.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is stale or never existed.
    pub fn person(&self, id: PersonId) -> Result<&Person> {
        self.people.get(id)
    }

    /// Gets the name of a live person.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is stale or never existed.
    pub fn name_of(&self, id: PersonId) -> Result<&str> {
        self.people.get(id).map(Person::name)
    }

    /// Number of people, excluding the root sentinel.
    #[must_use]
    pub fn len(&self) -> usize {
        self.people.len().saturating_sub(1)
    }

    /// Returns true if nobody has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over every registered name, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.index
            .keys()
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Iterates over the children of a person in birth order as linked.
    #[must_use]
    pub fn children(&self, id: PersonId) -> Children<'_> {
        let next = self.people.get(id).ok().and_then(Person::first_child);
        Children {
            people: &self.people,
            next,
        }
    }

    /// Registers births under `parent`.
    ///
    /// Each name is paired with the date at the same position. Names already
    /// in the forest are skipped. All preconditions are checked before any
    /// person is created, so a failed registration leaves the forest as it
    /// was.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent is not indexed, if names and dates do
    /// not pair up, or if there is nobody to register.
    pub fn register(
        &mut self,
        parent: &str,
        names: &[String],
        dates: &[i32],
    ) -> Result<Registration> {
        let Some(parent_id) = self.lookup(parent) else {
            warn!(parent, "registration under unknown parent");
            return Err(Error::no_subject(parent));
        };
        if names.len() != dates.len() {
            warn!(
                names = names.len(),
                dates = dates.len(),
                "registration with mismatched dates"
            );
            return Err(Error::date_mismatch(names.len(), dates.len()));
        }
        if names.is_empty() {
            return Err(Error::new(ErrorKind::NoObjects));
        }

        let mut registration = Registration {
            parent: parent.to_string(),
            ..Registration::default()
        };
        for (name, &born) in names.iter().zip(dates) {
            if self.index.contains_key(name) {
                registration.skipped.push(name.clone());
                continue;
            }
            let child = self.add_child(parent_id, name, born)?;
            self.index.insert(name.clone(), child);
            registration.created.push(name.clone());
        }

        info!(
            parent,
            created = registration.created.len(),
            skipped = registration.skipped.len(),
            "registered births"
        );
        Ok(registration)
    }

    /// Links a new person as the last child of `parent`.
    fn add_child(&mut self, parent: PersonId, name: &str, born: i32) -> Result<PersonId> {
        let last = self.children(parent).last();

        let mut person = Person::new(name, born);
        person.set_parent(Some(parent));
        let child = self.people.spawn(person);

        match last {
            Some(last) => self.people.get_mut(last)?.set_next_sibling(Some(child)),
            None => self.people.get_mut(parent)?.set_first_child(Some(child)),
        }
        Ok(child)
    }

    /// Discards every family and starts over with a fresh root.
    ///
    /// The tree is torn down iteratively; handles into the old forest become
    /// stale. Returns the number of people removed, excluding the root.
    pub fn clear(&mut self) -> usize {
        let mut removed: usize = 0;
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            stack.extend(self.children(id));
            match self.people.destroy(id) {
                Ok(_) => removed += 1,
                Err(e) => warn!(error = %e, "person vanished while clearing"),
            }
        }

        self.index = im::HashMap::new();
        self.root = self.people.spawn(Person::new("", 0));
        self.index.insert(String::new(), self.root);

        let removed = removed.saturating_sub(1);
        info!(removed, "forest cleared");
        removed
    }

    /// The parent of a person, treating the root sentinel as no parent.
    pub(crate) fn parent_of(&self, id: PersonId) -> Option<PersonId> {
        self.people
            .get(id)
            .ok()
            .and_then(Person::parent)
            .filter(|&parent| parent != self.root)
    }

    /// Walks `generations` parent links up from a person.
    pub(crate) fn ancestor_at(&self, id: PersonId, generations: usize) -> Option<PersonId> {
        (0..generations).try_fold(id, |current, _| self.parent_of(current))
    }

    /// Every person below `id`, in pre-order.
    pub(crate) fn descendants(&self, id: PersonId) -> Vec<PersonId> {
        let mut found = Vec::new();
        let mut stack: Vec<PersonId> = self.children(id).collect();
        stack.reverse();
        while let Some(next) = stack.pop() {
            found.push(next);
            let first = stack.len();
            stack.extend(self.children(next));
            stack[first..].reverse();
        }
        found
    }

    /// Lists a person followed by all their descendants, depth-first.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is stale or never existed.
    pub fn pedigree(&self, id: PersonId) -> Result<Vec<PedigreeEntry>> {
        let mut entries = Vec::new();
        let mut stack = vec![(id, 0)];
        while let Some((next, depth)) = stack.pop() {
            let person = self.people.get(next)?;
            entries.push(PedigreeEntry {
                depth,
                name: person.name().to_string(),
                born: person.born(),
            });
            let first = stack.len();
            stack.extend(self.children(next).map(|child| (child, depth + 1)));
            stack[first..].reverse();
        }
        Ok(entries)
    }

    /// Computes summary figures.
    #[must_use]
    pub fn stats(&self) -> ForestStats {
        let mut generations = 0;
        let mut stack: Vec<(PersonId, usize)> =
            self.children(self.root).map(|founder| (founder, 1)).collect();
        let families = stack.len();
        while let Some((id, depth)) = stack.pop() {
            generations = generations.max(depth);
            stack.extend(self.children(id).map(|child| (child, depth + 1)));
        }
        ForestStats {
            people: self.len(),
            families,
            generations,
        }
    }
}

/// Iterator over the children of one person.
pub struct Children<'a> {
    people: &'a PersonStore,
    next: Option<PersonId>,
}

impl Iterator for Children<'_> {
    type Item = PersonId;

    fn next(&mut self) -> Option<PersonId> {
        let current = self.next?;
        self.next = self.people.get(current).ok().and_then(Person::next_sibling);
        Some(current)
    }
}
