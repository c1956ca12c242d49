//! Lineage - Natural-language kinship queries
//!
//! This crate re-exports all layers of the Lineage system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: lineage_runtime    - REPL, CLI, response formatting
//! Layer 3: lineage_engine     - Resolution pipeline, command dispatch
//! Layer 2: lineage_parser     - Tokenizer, vocabulary, bitmask grammar
//! Layer 1: lineage_storage    - Person arena, family forest, kinship
//! Layer 0: lineage_foundation - Core types (Relation, Command, Error)
//! ```

pub use lineage_engine as engine;
pub use lineage_foundation as foundation;
pub use lineage_parser as parser;
pub use lineage_runtime as runtime;
pub use lineage_storage as storage;
