//! # truthtable
//!
//! truthtable is a truth table generator for propositional logic written in
//! Rust. It parses expressions written with LaTeX operators (`\land`, `\lor`,
//! `\lnot`, `\rightarrow`, `\leftrightarrow`), evaluates them under every
//! assignment of their free variables, and renders the result as a table.

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

use crate::{
    error::Error,
    interpreter::table::{core::TruthTable, generator::Generator},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the operator enums and the postfix symbol types that
/// represent an expression once it has been parsed. The postfix form is built
/// by the parser and consumed by the evaluator.
///
/// # Responsibilities
/// - Defines the unary and binary connectives with their notation, keyword
///   and precedence.
/// - Defines the postfix symbol sequence shared by every table row.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing or
/// evaluating an expression. It standardizes error reporting and carries
/// detailed information about failures, such as the offending token position
/// or variable name.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Attaches token positions and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the generation of a truth table.
///
/// This module ties together lexing, parsing, evaluation and table assembly
/// to provide the complete pipeline from expression text to rows. It exposes
/// the entry points used by the binary and by library callers.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator and table.
/// - Provides entry points for generating and rendering tables.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for row counting and bit extraction.
///
/// This module provides reusable helpers used when sizing a table and when
/// turning a row index into an assignment.
pub mod util;

/// Generates the truth table of an expression with the default settings.
///
/// # Errors
/// Returns an error if the expression has no variables, too many variables,
/// unbalanced parentheses, or cannot be evaluated.
///
/// # Examples
/// ```
/// use truthtable::generate;
///
/// let table = generate("p \\land q").unwrap();
/// assert_eq!(table.variables(), ["p", "q"]);
/// assert_eq!(table.results(), vec![false, false, false, true]);
///
/// // Example with an intentional error (no variables).
/// assert!(generate("\\lnot").is_err());
/// ```
pub fn generate(source: &str) -> Result<TruthTable, Error> {
    Generator::new().generate(source)
}

/// Generates a truth table and renders it as an ASCII table.
///
/// # Errors
/// Returns the same errors as [`generate`].
///
/// # Examples
/// ```
/// use truthtable::render;
///
/// let table = render("p \\lor q").unwrap();
/// assert!(table.starts_with("+----+----+"));
/// assert_eq!(table.lines().count(), 8);
/// ```
pub fn render(source: &str) -> Result<String, Error> {
    Ok(generate(source)?.to_string())
}
