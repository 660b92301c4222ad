use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// A variable symbol has no value in the current assignment.
    #[error("Unknown variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// The postfix expression does not reduce to exactly one value.
    #[error("Malformed expression: {details}.")]
    MalformedExpression {
        /// Details describing the stack shape violation.
        details: String,
    },
}
