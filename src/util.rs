/// Counting and bit helpers for assignment enumeration.
///
/// This module provides checked helpers used by the truth table driver to
/// size a table and to read individual variable values out of a row counter.
/// Use these helpers whenever a row index is turned into an assignment, so
/// that the canonical ordering is computed in a single place.
///
/// Functions that can overflow return a `Result`, which is `Ok` if the value
/// fits in a `usize`, or the caller's error otherwise.
pub mod num;
