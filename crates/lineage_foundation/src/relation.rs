//! Relation kinds, modifier sets, and relation steps.
//!
//! A query such as "Bob's youngest sibling's children" is a pipeline of
//! [`RelationStep`]s: an anchor (`Bob`), then `youngest sibling`, then
//! `child`. Each step names one [`Relation`] and carries the [`Modifiers`]
//! that narrow its candidates.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// The kind of kinship hop a step performs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    /// The self-relation: anchors a literal name, or passes a person through.
    Identity,
    /// Mother or father.
    Parent,
    /// Parent's parent (or one generation further with `great`).
    Grandparent,
    /// Direct children.
    Child,
    /// Other children of the same parent.
    Sibling,
    /// Siblings of the parent (or of the grandparent with `great`).
    AuntOrUncle,
    /// Descendants of the parent's siblings.
    Cousin,
    /// Children of siblings. Not resolved yet; always empty.
    NieceOrNephew,
    /// Children of children.
    Grandchild,
    /// Everyone below the person.
    Descendant,
    /// Everyone above the person.
    Ancestor,
    /// Everyone in the same family tree.
    Relative,
}

impl Relation {
    /// Human-readable relation name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Identity => "self",
            Self::Parent => "parent",
            Self::Grandparent => "grandparent",
            Self::Child => "child",
            Self::Sibling => "sibling",
            Self::AuntOrUncle => "aunt/uncle",
            Self::Cousin => "cousin",
            Self::NieceOrNephew => "niece/nephew",
            Self::Grandchild => "grandchild",
            Self::Descendant => "descendant",
            Self::Ancestor => "ancestor",
            Self::Relative => "relative",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of relation modifiers.
///
/// Modifiers compose freely. The age modifiers narrow a candidate set:
/// `older`/`younger` keep candidates relative to the pivot, then
/// `oldest`/`youngest` collapse what is left to a single person.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u16);

impl Modifiers {
    /// No modifiers.
    pub const NONE: Self = Self(0);
    /// Collapse to the most recently born.
    pub const YOUNGEST: Self = Self(1);
    /// Keep those born after the pivot.
    pub const YOUNGER: Self = Self(1 << 1);
    /// Keep those born before the pivot.
    pub const OLDER: Self = Self(1 << 2);
    /// Collapse to the earliest born.
    pub const OLDEST: Self = Self(1 << 3);
    /// Shift the relation one generation up.
    pub const GREAT: Self = Self(1 << 4);
    /// Accepted by the grammar; no vital records to filter on.
    pub const LIVING: Self = Self(1 << 5);
    /// Accepted by the grammar; no vital records to filter on.
    pub const DEAD: Self = Self(1 << 6);
    /// Accepted by the grammar; reserved for common-ancestor queries.
    pub const COMMON: Self = Self(1 << 7);
    /// Every modifier that filters by birth order.
    pub const AGE: Self = Self(1 | 1 << 1 | 1 << 2 | 1 << 3);

    const NAMED: [(Self, &'static str); 8] = [
        (Self::YOUNGEST, "youngest"),
        (Self::YOUNGER, "younger"),
        (Self::OLDER, "older"),
        (Self::OLDEST, "oldest"),
        (Self::GREAT, "great"),
        (Self::LIVING, "living"),
        (Self::DEAD, "dead"),
        (Self::COMMON, "common"),
    ];

    /// Returns the empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self::NONE
    }

    /// Returns true if no modifier is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if every modifier in `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true if any modifier in `other` is set.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Set union.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Set intersection.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Iterates over the names of the set modifiers, mildest first.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMED
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
    }
}

impl BitOr for Modifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for Modifiers {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.names().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

/// One hop of a kinship query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationStep {
    /// Which relation to follow.
    pub relation: Relation,
    /// Modifiers narrowing the candidates.
    pub modifiers: Modifiers,
    /// Literal name, only meaningful for the self-relation.
    pub name: Option<String>,
}

impl RelationStep {
    /// Creates a step following `relation` with the given modifiers.
    #[must_use]
    pub fn new(relation: Relation, modifiers: Modifiers) -> Self {
        Self {
            relation,
            modifiers,
            name: None,
        }
    }

    /// Creates a self-relation anchoring a literal name.
    #[must_use]
    pub fn anchor(name: impl Into<String>) -> Self {
        Self {
            relation: Relation::Identity,
            modifiers: Modifiers::NONE,
            name: Some(name.into()),
        }
    }

    /// Creates an empty self-relation placeholder.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(Relation::Identity, Modifiers::NONE)
    }

    /// Returns the literal name if this step is an anchor.
    #[must_use]
    pub fn anchor_name(&self) -> Option<&str> {
        match self.relation {
            Relation::Identity => self.name.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for RelationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        if let Some(name) = self.anchor_name() {
            f.write_str(name)?;
        } else {
            if !self.modifiers.is_empty() {
                write!(f, "{} ", self.modifiers)?;
            }
            f.write_str(self.relation.name())?;
        }
        f.write_str(" }")
    }
}
