//! REPL, batch runner, and CLI for Lineage.
//!
//! This crate provides:
//! - [`Repl`] - Interactive read-eval-print loop and batch file evaluation
//! - [`Session`] - Line numbering, echo, and response formatting
//! - [`RuntimeConfig`] - Prompt, echo, banner, and debug dump settings
//! - The `lineage` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod format;
pub mod highlight;
pub mod repl;
pub mod session;

pub use config::RuntimeConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
pub use session::Session;
