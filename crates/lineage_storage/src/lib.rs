//! Family forest storage, name index, and kinship lookup for Lineage.
//!
//! This crate provides:
//! - [`PersonStore`] - Generational arena of person records
//! - [`Forest`] - First-child/next-sibling family forest with a name index
//! - Relation lookup ([`Forest::relatives`]) and age filtering ([`Forest::narrow`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod forest;
mod kinship;
pub mod person;

pub use forest::{Children, Forest, ForestStats, PedigreeEntry, Registration};
pub use person::{Person, PersonStore};
