//! Person records and their generational arena.
//!
//! The `PersonStore` owns every person in the forest. Tree links are stored
//! as [`PersonId`] handles instead of owning pointers, so a whole family can
//! be torn down by walking it iteratively and freeing slots one at a time.

// Allow u64 to usize casts - we target 64-bit systems
#![allow(clippy::cast_possible_truncation)]

use lineage_foundation::{Error, PersonId, Result};

/// A person in the family forest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    name: String,
    born: i32,
    parent: Option<PersonId>,
    first_child: Option<PersonId>,
    next_sibling: Option<PersonId>,
}

impl Person {
    /// Creates an unlinked person.
    #[must_use]
    pub fn new(name: impl Into<String>, born: i32) -> Self {
        Self {
            name: name.into(),
            born,
            parent: None,
            first_child: None,
            next_sibling: None,
        }
    }

    /// Unique name of this person.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Birth-order value; lower is older.
    #[must_use]
    pub const fn born(&self) -> i32 {
        self.born
    }

    /// The parent, if linked.
    #[must_use]
    pub const fn parent(&self) -> Option<PersonId> {
        self.parent
    }

    /// The eldest linked child.
    #[must_use]
    pub const fn first_child(&self) -> Option<PersonId> {
        self.first_child
    }

    /// The next child of the same parent.
    #[must_use]
    pub const fn next_sibling(&self) -> Option<PersonId> {
        self.next_sibling
    }

    pub(crate) fn set_parent(&mut self, parent: Option<PersonId>) {
        self.parent = parent;
    }

    pub(crate) fn set_first_child(&mut self, child: Option<PersonId>) {
        self.first_child = child;
    }

    pub(crate) fn set_next_sibling(&mut self, sibling: Option<PersonId>) {
        self.next_sibling = sibling;
    }
}

#[derive(Clone, Debug)]
struct Slot {
    /// Even generations are free, odd generations are alive.
    generation: u32,
    person: Option<Person>,
}

/// Generational arena of person records.
///
/// Slots are allocated from a free list when available, otherwise new
/// indices are appended. Freeing a slot increments its generation so that
/// handles to the old occupant are reported as stale.
///
/// Backed by persistent vectors, so cloning a store is O(1) and clones
/// share structure until one of them is modified.
#[derive(Clone, Debug, Default)]
pub struct PersonStore {
    slots: im::Vector<Slot>,
    free_list: im::Vector<u64>,
    live_count: usize,
}

impl PersonStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a person, returns its handle.
    ///
    /// Reuses indices from the free list when available.
    pub fn spawn(&mut self, person: Person) -> PersonId {
        self.live_count += 1;

        if let Some(index) = self.free_list.pop_back() {
            let slot = &mut self.slots[index as usize];
            // Was even/free, now odd/alive
            slot.generation += 1;
            slot.person = Some(person);
            PersonId::new(index, slot.generation)
        } else {
            let index = self.slots.len() as u64;
            self.slots.push_back(Slot {
                generation: 1,
                person: Some(person),
            });
            PersonId::new(index, 1)
        }
    }

    /// Frees a slot and returns the person it held.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is stale or never existed.
    pub fn destroy(&mut self, id: PersonId) -> Result<Person> {
        self.validate(id)?;

        let slot = &mut self.slots[id.index as usize];
        // Was odd/alive, now even/free
        slot.generation += 1;
        let person = slot
            .person
            .take()
            .ok_or_else(|| Error::person_not_found(id))?;
        self.free_list.push_back(id.index);
        self.live_count -= 1;

        Ok(person)
    }

    /// Checks if a handle points at a live person.
    #[must_use]
    pub fn exists(&self, id: PersonId) -> bool {
        self.validate(id).is_ok()
    }

    /// Validates that a handle is live.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is stale or never existed.
    pub fn validate(&self, id: PersonId) -> Result<()> {
        let Some(slot) = self.slots.get(id.index as usize) else {
            return Err(Error::person_not_found(id));
        };

        if slot.generation != id.generation {
            return Err(Error::stale_person(id));
        }

        if slot.generation % 2 == 0 {
            return Err(Error::person_not_found(id));
        }

        Ok(())
    }

    /// Gets a live person.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is stale or never existed.
    pub fn get(&self, id: PersonId) -> Result<&Person> {
        self.validate(id)?;
        self.slots[id.index as usize]
            .person
            .as_ref()
            .ok_or_else(|| Error::person_not_found(id))
    }

    /// Gets a live person for modification.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is stale or never existed.
    pub fn get_mut(&mut self, id: PersonId) -> Result<&mut Person> {
        self.validate(id)?;
        self.slots[id.index as usize]
            .person
            .as_mut()
            .ok_or_else(|| Error::person_not_found(id))
    }

    /// Returns the number of live people.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live_count
    }

    /// Returns true if there are no live people.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live_count == 0
    }

    /// Iterates over all live handles.
    pub fn iter(&self) -> impl Iterator<Item = PersonId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.generation % 2 == 1)
            .map(|(idx, slot)| PersonId::new(idx as u64, slot.generation))
    }

    /// Returns the current generation for an index, if it exists.
    #[must_use]
    pub fn generation(&self, index: u64) -> Option<u32> {
        self.slots.get(index as usize).map(|slot| slot.generation)
    }
}
