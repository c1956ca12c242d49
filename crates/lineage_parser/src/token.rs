//! Token kinds and the grammar's expectation table.
//!
//! Every word is classified into exactly one [`TokenKind`]. The grammar is a
//! small state machine whose state is the kind of the last accepted token;
//! [`TokenSet::expected_after`] says which kinds may follow it.

use lineage_foundation::{Command, Modifiers, Relation};
use std::fmt;

/// The grammatical role of a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Unrecognized word, always ignored.
    Filler,
    /// Command verb such as "who" or "beget".
    Command,
    /// Ordinal or qualifier such as "youngest".
    Modifier,
    /// Kinship noun such as "sibling".
    Relation,
    /// Capitalized person name.
    Name,
    /// Digit-leading birth date.
    Date,
    /// The `s` left behind by an apostrophe.
    Possessive,
    /// The word "of".
    Projective,
}

impl TokenKind {
    /// All kinds, in bit order.
    pub const ALL: [TokenKind; 8] = [
        TokenKind::Filler,
        TokenKind::Command,
        TokenKind::Modifier,
        TokenKind::Relation,
        TokenKind::Name,
        TokenKind::Date,
        TokenKind::Possessive,
        TokenKind::Projective,
    ];

    /// Lowercase name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Filler => "filler",
            TokenKind::Command => "command",
            TokenKind::Modifier => "modifier",
            TokenKind::Relation => "relation",
            TokenKind::Name => "name",
            TokenKind::Date => "date",
            TokenKind::Possessive => "possessive",
            TokenKind::Projective => "projective",
        }
    }

    const fn bit(self) -> u16 {
        match self {
            TokenKind::Filler => 1,
            TokenKind::Command => 1 << 1,
            TokenKind::Modifier => 1 << 2,
            TokenKind::Relation => 1 << 3,
            TokenKind::Name => 1 << 4,
            TokenKind::Date => 1 << 5,
            TokenKind::Possessive => 1 << 6,
            TokenKind::Projective => 1 << 7,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of token kinds.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TokenSet(u16);

impl TokenSet {
    /// No kinds.
    pub const EMPTY: TokenSet = TokenSet(0);
    /// Words that qualify or name a relation.
    pub const OPERATOR: TokenSet = TokenSet(TokenKind::Modifier.bit() | TokenKind::Relation.bit());
    /// Words that supply a value.
    pub const OPERAND: TokenSet = TokenSet(TokenKind::Name.bit() | TokenKind::Date.bit());
    /// Anything but a command.
    pub const NONCOMMAND: TokenSet = TokenSet::OPERATOR.union(TokenSet::OPERAND);
    /// Commands and everything they take.
    pub const ANY: TokenSet = TokenSet(TokenKind::Command.bit()).union(TokenSet::NONCOMMAND);
    /// Every kind the grammar accepts after a name or relation.
    pub const ALL: TokenSet = TokenSet::ANY.union(TokenSet(
        TokenKind::Possessive.bit() | TokenKind::Projective.bit(),
    ));

    /// Set with a single kind.
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        TokenSet(kind.bit())
    }

    /// Kinds in either set.
    #[must_use]
    pub const fn union(self, other: TokenSet) -> Self {
        TokenSet(self.0 | other.0)
    }

    /// Kinds in both sets.
    #[must_use]
    pub const fn intersection(self, other: TokenSet) -> Self {
        TokenSet(self.0 & other.0)
    }

    /// Returns true if the set holds `kind`.
    #[must_use]
    pub const fn contains(self, kind: TokenKind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// Returns true if the set holds nothing.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Which kinds may follow the last accepted kind.
    ///
    /// `None` is the start of a line, where only a name or a command may
    /// appear.
    #[must_use]
    pub const fn expected_after(last: Option<TokenKind>) -> TokenSet {
        match last {
            None => TokenSet::of(TokenKind::Name).union(TokenSet::of(TokenKind::Command)),
            Some(TokenKind::Name | TokenKind::Relation) => TokenSet::ALL,
            Some(TokenKind::Command) => TokenSet::NONCOMMAND,
            Some(TokenKind::Modifier) => TokenSet::OPERATOR,
            Some(TokenKind::Projective) => TokenSet::of(TokenKind::Name),
            Some(TokenKind::Possessive) => TokenSet::of(TokenKind::Name).union(TokenSet::OPERATOR),
            Some(TokenKind::Date) => TokenSet::ANY,
            // Filler is never accepted, so it never becomes the state.
            Some(TokenKind::Filler) => TokenSet::EMPTY,
        }
    }

    /// Iterates over the kinds in the set.
    pub fn kinds(self) -> impl Iterator<Item = TokenKind> {
        TokenKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(*kind))
    }
}

impl fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.kinds()).finish()
    }
}

/// A classified word with its typed payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// Ignored word.
    Filler,
    /// Command verb.
    Command(Command),
    /// Modifier bits.
    Modifier(Modifiers),
    /// Kinship noun.
    Relation(Relation),
    /// Person name.
    Name(String),
    /// Unparsed date text.
    Date(String),
    /// Possessive marker.
    Possessive,
    /// The word "of".
    Projective,
}

impl Token {
    /// The kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Token::Filler => TokenKind::Filler,
            Token::Command(_) => TokenKind::Command,
            Token::Modifier(_) => TokenKind::Modifier,
            Token::Relation(_) => TokenKind::Relation,
            Token::Name(_) => TokenKind::Name,
            Token::Date(_) => TokenKind::Date,
            Token::Possessive => TokenKind::Possessive,
            Token::Projective => TokenKind::Projective,
        }
    }
}
