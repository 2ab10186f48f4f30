//! # barebones
//!
//! barebones is an interpreter for Bare Bones, a minimal imperative language
//! with five statements (`clear`, `incr`, `decr`, `while ... not ... do` and
//! `end`) operating on non-negative integer variables.
//!
//! A run has two phases. The segmenter splits the program text into
//! semicolon-terminated statements and decodes each one, then the executor
//! walks the statements against a variable store, re-running loop bodies
//! until their control variable reaches its target.
//!
//! Tracing output is emitted through [`tracing`]; enable it with
//! `RUST_LOG=barebones=debug` (loop entry and exit) or
//! `RUST_LOG=barebones=trace` (every statement).

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::Error, interpreter::store::Store};

/// Defines the structure of segmented code.
///
/// This module declares the `Statement` record and the `Instruction` enum
/// that every statement is decoded into. The segmenter builds these values
/// once and the executor only reads them.
///
/// # Responsibilities
/// - Defines the closed set of statement kinds.
/// - Attaches source text and line numbers to statements for error
///   reporting.
/// - Keeps shape errors attached to the statement until it is executed.
pub mod ast;
/// Provides unified error types for segmenting and executing.
///
/// This module defines all errors that can abort a run. Every error carries
/// the line number and the source line it originates from.
///
/// # Responsibilities
/// - Defines syntax errors for malformed program shape.
/// - Defines runtime errors for failed statements.
/// - Renders human-readable diagnostics.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together the lexer, segmenter, executor and variable
/// store, and exposes the [`Program`](interpreter::program::Program) type
/// used to run source code.
///
/// # Responsibilities
/// - Coordinates the lexer, segmenter and executor.
/// - Owns the variable store representation.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use interpreter::program::Program;

/// Segments `source` into a [`Program`] without running it.
///
/// # Errors
/// Returns an error if a line does not end with `;` or holds an empty
/// statement.
///
/// # Examples
/// ```
/// let program = barebones::parse("clear a;\nincr a;").unwrap();
/// assert_eq!(program.statements().len(), 2);
///
/// assert!(barebones::parse("clear a").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, Error> {
    Ok(Program::parse(source)?)
}

/// Runs `source` on an empty store and returns the final store.
///
/// # Errors
/// Returns the first syntax or runtime error of the run. No store is
/// returned for a failed run.
///
/// # Examples
/// ```
/// use barebones::run_source;
///
/// let store = run_source("clear a; incr a; incr a; incr a;").unwrap();
/// assert_eq!(store.get("a"), Some(3));
///
/// // `b` was never cleared.
/// let res = run_source("clear a;\nincr b;");
/// assert_eq!(res.unwrap_err().line(), 2);
/// ```
pub fn run_source(source: &str) -> Result<Store, Error> {
    let (store, _) = parse(source)?.run()?;
    Ok(store)
}
