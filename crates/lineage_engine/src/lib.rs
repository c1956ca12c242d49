//! Resolution pipeline and command dispatch for Lineage.
//!
//! This crate provides:
//! - [`Resolver`] - Walks a relation pipeline over the family forest
//! - [`dispatch`] - Applies a normalized query to the forest
//! - [`Response`] - Structured result code, payload, and diagnostics
//! - [`Interpreter`] - One forest plus one parser, line in, response out

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dispatch;
pub mod interpreter;
pub mod resolve;
pub mod response;

pub use dispatch::dispatch;
pub use interpreter::Interpreter;
pub use resolve::Resolver;
pub use response::{Payload, Response, ResultCode};
