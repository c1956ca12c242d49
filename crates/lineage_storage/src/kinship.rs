//! Relation lookup and birth-order filtering.
//!
//! [`Forest::relatives`] maps a person and a [`RelationStep`] to the
//! unfiltered candidates; [`Forest::narrow`] then applies the age modifiers
//! relative to that same person. The root sentinel never appears in a
//! result: parent links that reach it are treated as missing.

use lineage_foundation::{Modifiers, PersonId, Relation, RelationStep, Result};

use crate::forest::Forest;

impl Forest {
    /// Collects the unfiltered candidates for one relation step.
    ///
    /// Results follow link order: children in birth order as registered,
    /// ancestors nearest first, descendants depth-first.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is stale or never existed.
    pub fn relatives(&self, id: PersonId, step: &RelationStep) -> Result<Vec<PersonId>> {
        self.person(id)?;
        let great = step.modifiers.contains(Modifiers::GREAT);

        let found = match step.relation {
            Relation::Identity => vec![id],
            Relation::Parent => self.parent_of(id).into_iter().collect(),
            Relation::Child => self.children(id).collect(),
            Relation::Sibling => match self.parent_of(id) {
                Some(parent) => self.children(parent).filter(|&c| c != id).collect(),
                None => Vec::new(),
            },
            Relation::Grandparent => {
                let up = if great { 3 } else { 2 };
                self.ancestor_at(id, up).into_iter().collect()
            }
            Relation::AuntOrUncle => {
                // The pivot is the ancestor whose siblings we want.
                let up = if great { 2 } else { 1 };
                match (self.ancestor_at(id, up), self.ancestor_at(id, up + 1)) {
                    (Some(pivot), Some(grand)) => {
                        self.children(grand).filter(|&c| c != pivot).collect()
                    }
                    _ => Vec::new(),
                }
            }
            Relation::Cousin => match (self.ancestor_at(id, 1), self.ancestor_at(id, 2)) {
                (Some(parent), Some(grand)) => self
                    .children(grand)
                    .filter(|&c| c != parent)
                    .flat_map(|aunt| self.descendants(aunt))
                    .collect(),
                _ => Vec::new(),
            },
            // Unresolved: always empty.
            Relation::NieceOrNephew => Vec::new(),
            Relation::Grandchild => self
                .children(id)
                .flat_map(|child| self.children(child))
                .collect(),
            Relation::Ancestor => {
                std::iter::successors(self.parent_of(id), |&p| self.parent_of(p)).collect()
            }
            Relation::Descendant => self.descendants(id),
            Relation::Relative => {
                let founder = std::iter::successors(Some(id), |&p| self.parent_of(p))
                    .last()
                    .unwrap_or(id);
                std::iter::once(founder)
                    .chain(self.descendants(founder))
                    .filter(|&p| p != id)
                    .collect()
            }
        };

        Ok(found.into_iter().filter(|&p| p != self.root()).collect())
    }

    /// Applies the age modifiers to `candidates`, relative to `pivot`.
    ///
    /// Candidates are sorted oldest first. `older`/`younger` keep only those
    /// born strictly before/after the pivot; `oldest`/`youngest` then collapse
    /// what remains to a single person. Without age modifiers the candidates
    /// are left untouched.
    ///
    /// `oldest` keeps the smallest birth value and `youngest` the largest.
    ///
    /// # Errors
    ///
    /// Returns an error if any handle is stale or never existed.
    pub fn narrow(
        &self,
        pivot: PersonId,
        candidates: &mut Vec<PersonId>,
        modifiers: Modifiers,
    ) -> Result<()> {
        if !modifiers.intersects(Modifiers::AGE) {
            return Ok(());
        }

        let pivot_born = self.person(pivot)?.born();
        let mut dated = candidates
            .iter()
            .map(|&id| Ok((self.person(id)?.born(), id)))
            .collect::<Result<Vec<_>>>()?;
        dated.sort_by_key(|&(born, _)| born);

        if modifiers.contains(Modifiers::OLDER) {
            dated.retain(|&(born, _)| born < pivot_born);
        }
        if modifiers.contains(Modifiers::YOUNGER) {
            dated.retain(|&(born, _)| born > pivot_born);
        }
        if modifiers.contains(Modifiers::OLDEST) {
            dated.truncate(1);
        } else if modifiers.contains(Modifiers::YOUNGEST) {
            let keep = dated.len().saturating_sub(1);
            dated.drain(..keep);
        }

        *candidates = dated.into_iter().map(|(_, id)| id).collect();
        Ok(())
    }

    /// Relatives of `id` for `step`, narrowed by the step's modifiers.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is stale or never existed.
    pub fn kin(&self, id: PersonId, step: &RelationStep) -> Result<Vec<PersonId>> {
        let mut found = self.relatives(id, step)?;
        self.narrow(id, &mut found, step.modifiers)?;
        Ok(found)
    }
}
