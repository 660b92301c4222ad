/// Truth table data types.
///
/// Declares the header, row and table types returned by the generator.
pub mod core;

/// Truth table generation.
///
/// Drives normalization, variable extraction, parsing and evaluation over
/// every assignment, and holds the generator configuration.
pub mod generator;

/// ASCII rendering.
///
/// Renders a truth table as a bordered, fixed-width text table.
pub mod format;
