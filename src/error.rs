use thiserror::Error;

/// Parsing errors.
///
/// Defines all error types that can occur while normalizing, lexing and
/// parsing an expression, and while validating it before any row is
/// evaluated. Parse errors include unbalanced parentheses, expressions without
/// free variables and expressions too large to tabulate.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a postfix
/// expression against an assignment: unknown variables and stack shape
/// violations.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while generating a truth table.
///
/// Each phase reports its own error type; this enum lets `?` carry either one
/// up to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The expression could not be lexed, validated or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
