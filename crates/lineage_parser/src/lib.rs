//! Kinship sentence grammar for Lineage.
//!
//! This crate turns loosely structured sentences such as
//! "who are the children of Bob's youngest sibling?" into a [`Query`]: a
//! command plus a linear pipeline of relation steps.
//!
//! # Architecture
//!
//! ```text
//! "who are Bob's youngest sibling's children?"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["who", "are", "Bob", "s", "youngest", "sibling", "s", "children"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ VOCABULARY      │  → [Command(query), Filler, Name, Possessive, Modifier, Relation, ...]
//! │ LOOKUP          │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ GRAMMAR STATE   │  → subject: [{ Bob } { youngest sibling } { child }]
//! │ MACHINE         │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ NORMALIZER      │  → Query { command: QUERY, steps: [...], names, dates }
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Split raw lines into words, skip comments and blanks
//! - [`vocabulary`] - Word tables for relations, modifiers, and commands
//! - [`stdlib`] - The standard English kinship vocabulary
//! - [`token`] - Token kinds and the grammar's expectation table
//! - [`parser`] - The word-at-a-time grammar state machine
//! - [`query`] - The normalized query and the normalizer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod parser;
pub mod query;
pub mod stdlib;
pub mod token;
pub mod tokenizer;
pub mod vocabulary;

pub use parser::QueryParser;
pub use query::Query;
pub use token::{Token, TokenKind, TokenSet};
pub use tokenizer::{InputLine, InputTokenizer};
pub use vocabulary::Vocabulary;
