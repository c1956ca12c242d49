//! Core types, relation vocabulary, and errors for Lineage.
//!
//! This crate provides:
//! - [`PersonId`] - Generational handles into the family forest arena
//! - [`Relation`], [`Modifiers`], [`RelationStep`] - One hop of a kinship query
//! - [`Command`] - What a sentence asks the engine to do
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod error;
pub mod person;
pub mod relation;

pub use command::Command;
pub use error::{Error, ErrorCategory, ErrorContext, ErrorKind, Result};
pub use person::PersonId;
pub use relation::{Modifiers, Relation, RelationStep};
