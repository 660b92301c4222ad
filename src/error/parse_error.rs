use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing, validation or parsing.
pub enum ParseError {
    /// No free variables were found, so there is no table to build.
    #[error("No variables found in expression.")]
    EmptyExpression,
    /// A parenthesis has no partner.
    #[error("Unbalanced parentheses: unmatched '{paren}' at token {position}.")]
    UnbalancedParens {
        /// The unmatched parenthesis, `(` or `)`.
        paren:    char,
        /// The 1-based position of the parenthesis in the token stream.
        position: usize,
    },
    /// The lexer found text it cannot classify.
    #[error("Unexpected token '{token}' at token {position}.")]
    UnexpectedToken {
        /// The offending text.
        token:    String,
        /// The 1-based position of the token in the token stream.
        position: usize,
    },
    /// The expression has more free variables than the generator allows.
    #[error("Expression has {count} variables, but at most {max} are allowed.")]
    TooManyVariables {
        /// The number of distinct variables found.
        count: usize,
        /// The configured limit.
        max:   usize,
    },
}
