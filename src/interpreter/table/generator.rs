use tracing::{debug, trace, warn};

use crate::{
    error::{Error, ParseError},
    interpreter::{
        evaluator::core::{Assignment, evaluate},
        lexer::{normalize, tokenize},
        parser::{core::to_postfix, variables::extract_variables},
        table::core::{Header, Row, TruthTable},
    },
    util::num::{bit_is_set, pow2_checked},
};

/// Default cap on the number of free variables, `2^16` rows.
pub const DEFAULT_MAX_VARIABLES: usize = 16;

/// Generates truth tables.
///
/// The generator holds no state between calls; every call to
/// [`Generator::generate`] builds its table from scratch. It only carries
/// configuration.
///
/// ## Usage
///
/// ```
/// use truthtable::interpreter::table::generator::Generator;
///
/// let generator = Generator::with_max_variables(2);
/// assert!(generator.generate("p \\land q").is_ok());
/// assert!(generator.generate("p \\land q \\land r").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generator {
    /// Expressions with more free variables than this are rejected before any
    /// row is evaluated, since the table grows as `2^n`.
    pub max_variables: usize,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Creates a generator with the default variable cap.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_variables: DEFAULT_MAX_VARIABLES }
    }

    /// Creates a generator accepting at most `max_variables` free variables.
    #[must_use]
    pub const fn with_max_variables(max_variables: usize) -> Self {
        Self { max_variables }
    }

    /// Builds the truth table of an expression.
    ///
    /// The source is normalized and lexed, its free variables are extracted
    /// and it is converted to postfix once. The postfix form is then evaluated
    /// for each of the `2^n` assignments, enumerated as a binary counter with
    /// the first variable as the most significant bit and `false` before
    /// `true`. For `[p, q]` the rows are `(F, F)`, `(F, T)`, `(T, F)`,
    /// `(T, T)`.
    ///
    /// # Parameters
    /// - `source`: The expression in LaTeX notation.
    ///
    /// # Returns
    /// The table, headed by the variables and the unmodified `source`.
    ///
    /// # Errors
    /// - `ParseError::EmptyExpression` if there are no free variables.
    /// - `ParseError::TooManyVariables` if there are more than
    ///   `max_variables`.
    /// - `ParseError::UnbalancedParens` for mismatched parentheses.
    /// - `RuntimeError::UnknownVariable` or
    ///   `RuntimeError::MalformedExpression` if evaluation fails.
    ///
    /// # Example
    /// ```
    /// use truthtable::interpreter::table::generator::Generator;
    ///
    /// let table = Generator::new().generate("p \\rightarrow q").unwrap();
    /// assert_eq!(table.variables(), ["p", "q"]);
    /// assert_eq!(table.results(), vec![true, true, false, true]);
    /// ```
    pub fn generate(&self, source: &str) -> Result<TruthTable, Error> {
        let normalized = normalize(source);
        debug!(%normalized, "normalized expression");

        let tokens = tokenize(&normalized)?;
        let variables = extract_variables(&tokens)?;
        let width = variables.len();
        if width > self.max_variables {
            warn!(count = width, max = self.max_variables, "too many variables");
            return Err(ParseError::TooManyVariables { count: width,
                                                      max:   self.max_variables, }.into());
        }
        let row_count = pow2_checked(width,
                                     ParseError::TooManyVariables { count: width,
                                                                    max:   self.max_variables, })?;

        let postfix = to_postfix(&tokens)?;
        debug!(?variables, %postfix, row_count, "parsed expression");

        let mut assignment = Assignment::with_capacity(width);
        let mut rows = Vec::with_capacity(row_count);
        for row in 0..row_count {
            let values: Vec<bool> = (0..width).map(|column| bit_is_set(row, width, column))
                                              .collect();
            for (name, value) in variables.iter().zip(&values) {
                assignment.insert(name.clone(), *value);
            }

            let result = evaluate(&postfix, &assignment)?;
            trace!(row, ?values, result, "evaluated row");
            rows.push(Row { values, result });
        }

        Ok(TruthTable { header: Header { variables,
                                         expression: source.to_string() },
                        rows })
    }
}
