//! Command kinds.

use std::fmt;

/// What a sentence asks the engine to do.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Command {
    /// Discard the whole forest.
    Clear,
    /// Discard the forest and start a new family.
    New,
    /// Register births under an existing person.
    Add,
    /// List the resolved names.
    Query,
    /// Show the resolved people with their descendants.
    #[default]
    Print,
    /// Check a relationship.
    Test,
    /// Count the resolved names.
    Count,
    /// Summarize the forest.
    Stats,
}

impl Command {
    /// Returns true if this command changes the forest.
    #[must_use]
    pub const fn mutates(self) -> bool {
        matches!(self, Self::Clear | Self::New | Self::Add)
    }

    /// Returns true if this command runs the resolution pipeline.
    #[must_use]
    pub const fn resolves(self) -> bool {
        matches!(self, Self::Query | Self::Print | Self::Test | Self::Count)
    }

    /// Upper-case label used in query dumps.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Clear => "CLEAR",
            Self::New => "NEW",
            Self::Add => "ADD",
            Self::Query => "QUERY",
            Self::Print => "PRINT",
            Self::Test => "TEST",
            Self::Count => "COUNT",
            Self::Stats => "STATS",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
