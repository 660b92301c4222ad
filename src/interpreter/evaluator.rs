/// Core evaluation logic.
///
/// Contains the postfix stack machine, the `Assignment` type and error
/// propagation for stack shape violations.
pub mod core;

/// Connective semantics.
///
/// Implements the truth functions of every unary and binary operator.
pub mod logic;
