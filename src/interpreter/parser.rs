/// Core parsing logic.
///
/// Contains the shunting-yard conversion from infix tokens to postfix order
/// and the `ParseResult` alias shared by all parsing phases.
pub mod core;

/// Free variable extraction.
///
/// Collects the sorted set of single-letter variables that label the columns
/// of a truth table.
pub mod variables;
