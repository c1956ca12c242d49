//! Vocabulary registry for the kinship grammar.
//!
//! Stores the relation, modifier, and command words at runtime and
//! classifies incoming words into [`Token`]s. All lookups are
//! case-sensitive: lowercase words are vocabulary, capitalized words are
//! names.

use std::collections::HashMap;

use lineage_foundation::{Command, Modifiers, Relation};

use crate::stdlib;
use crate::token::Token;

/// The possessive marker left behind by "Bob's".
pub const POSSESSIVE: &str = "s";

/// The projective marker.
pub const PROJECTIVE: &str = "of";

/// Registry of all grammar words.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    relations: HashMap<String, Relation>,
    modifiers: HashMap<String, Modifiers>,
    commands: HashMap<String, Command>,
}

impl Vocabulary {
    /// Creates an empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a vocabulary loaded with the standard English words.
    #[must_use]
    pub fn standard() -> Self {
        let mut vocab = Self::new();
        for (word, relation) in stdlib::RELATIONS {
            vocab.register_relation(*word, *relation);
        }
        for (word, modifier) in stdlib::MODIFIERS {
            vocab.register_modifier(*word, *modifier);
        }
        for (word, command) in stdlib::COMMANDS {
            vocab.register_command(*word, *command);
        }
        vocab
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Registers a relation word.
    pub fn register_relation(&mut self, word: impl Into<String>, relation: Relation) {
        self.relations.insert(word.into(), relation);
    }

    /// Registers a modifier word.
    pub fn register_modifier(&mut self, word: impl Into<String>, modifier: Modifiers) {
        self.modifiers.insert(word.into(), modifier);
    }

    /// Registers a command word.
    pub fn register_command(&mut self, word: impl Into<String>, command: Command) {
        self.commands.insert(word.into(), command);
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Looks up a relation, stripping a trailing plural `s` first.
    #[must_use]
    pub fn lookup_relation(&self, word: &str) -> Option<Relation> {
        word.strip_suffix('s')
            .and_then(|stem| self.relations.get(stem))
            .or_else(|| self.relations.get(word))
            .copied()
    }

    /// Looks up a modifier word.
    #[must_use]
    pub fn lookup_modifier(&self, word: &str) -> Option<Modifiers> {
        self.modifiers.get(word).copied()
    }

    /// Looks up a command word.
    #[must_use]
    pub fn lookup_command(&self, word: &str) -> Option<Command> {
        self.commands.get(word).copied()
    }

    /// Returns true if `word` is a relation, modifier, or command.
    #[must_use]
    pub fn is_known(&self, word: &str) -> bool {
        self.lookup_relation(word).is_some()
            || self.lookup_modifier(word).is_some()
            || self.lookup_command(word).is_some()
    }

    /// Classifies a word.
    ///
    /// Checks run in a fixed order: possessive, projective, name, command,
    /// modifier, date, relation. Command words are only recognized until a
    /// command has been seen; after that they fall through to the later
    /// checks and usually end up as filler ("who *are* ...").
    #[must_use]
    pub fn classify(&self, word: &str, command_seen: bool) -> Token {
        if word == POSSESSIVE {
            return Token::Possessive;
        }
        if word == PROJECTIVE {
            return Token::Projective;
        }

        let Some(first) = word.chars().next() else {
            return Token::Filler;
        };

        if first.is_uppercase() {
            return Token::Name(word.to_string());
        }
        if !command_seen {
            if let Some(command) = self.lookup_command(word) {
                return Token::Command(command);
            }
        }
        if let Some(modifier) = self.lookup_modifier(word) {
            return Token::Modifier(modifier);
        }
        if first.is_ascii_digit() {
            return Token::Date(word.to_string());
        }
        if let Some(relation) = self.lookup_relation(word) {
            return Token::Relation(relation);
        }
        Token::Filler
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Iterates over every relation word.
    pub fn relation_words(&self) -> impl Iterator<Item = &str> {
        self.relations.keys().map(String::as_str)
    }

    /// Iterates over every modifier word.
    pub fn modifier_words(&self) -> impl Iterator<Item = &str> {
        self.modifiers.keys().map(String::as_str)
    }

    /// Iterates over every command word.
    pub fn command_words(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    /// Every registered word, sorted and deduplicated.
    #[must_use]
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self
            .relation_words()
            .chain(self.modifier_words())
            .chain(self.command_words())
            .chain([PROJECTIVE])
            .collect();
        words.sort_unstable();
        words.dedup();
        words
    }
}
