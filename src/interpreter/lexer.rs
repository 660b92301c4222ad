use logos::Logos;

use crate::{
    ast::{BinaryOperator, Operator, UnaryOperator},
    error::ParseError,
    interpreter::parser::core::ParseResult,
};

/// Represents a lexical token in normalized expression text.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Operator keywords and parentheses are recognized; every other run of
/// non-blank characters is a variable candidate.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Operator keywords: `not`, `and`, `or`, `implies`, `iff`.
    #[token("not", |_| Operator::Unary(UnaryOperator::Not))]
    #[token("and", |_| Operator::Binary(BinaryOperator::And))]
    #[token("or", |_| Operator::Binary(BinaryOperator::Or))]
    #[token("implies", |_| Operator::Binary(BinaryOperator::Implies))]
    #[token("iff", |_| Operator::Binary(BinaryOperator::Iff))]
    Operator(Operator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Variable tokens such as `p`. Anything else that is not blank or a
    /// parenthesis also lands here and is rejected later.
    #[regex(r"[^ \t\r\n\f()]+", |lex| lex.slice().to_string())]
    Variable(String),
}

/// Rewrites raw LaTeX-like source into whitespace separated keyword text.
///
/// Whitespace is collapsed, every operator notation is replaced by its
/// keyword padded with spaces, parentheses are padded with spaces and
/// whitespace is collapsed again. No notation is a substring of another, so
/// the order of replacement does not matter. Unrecognized characters are left
/// untouched.
///
/// # Parameters
/// - `source`: The expression as typed by the user.
///
/// # Returns
/// The normalized text.
///
/// # Example
/// ```
/// use truthtable::interpreter::lexer::normalize;
///
/// assert_eq!(normalize("(p\\land q)\\rightarrow   \\lnot r"),
///            "( p and q ) implies not r");
/// ```
#[must_use]
pub fn normalize(source: &str) -> String {
    let mut text = collapse_whitespace(source);
    for op in Operator::ALL {
        text = text.replace(op.notation(), &format!(" {} ", op.keyword()));
    }
    text = text.replace('(', " ( ").replace(')', " ) ");
    collapse_whitespace(&text)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits normalized text into tokens.
///
/// Each token is paired with its 1-based position in the stream, which error
/// messages use to point at the offending token.
///
/// # Parameters
/// - `normalized`: Text produced by [`normalize`].
///
/// # Returns
/// The tokens in source order.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` if the lexer cannot classify part of
/// the input.
///
/// # Example
/// ```
/// use truthtable::{
///     ast::{BinaryOperator, Operator},
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("p or ( q )").unwrap();
/// assert_eq!(tokens[1], (Token::Operator(Operator::Binary(BinaryOperator::Or)), 2));
/// assert_eq!(tokens[2], (Token::LParen, 3));
/// ```
pub fn tokenize(normalized: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(normalized);

    while let Some(token) = lexer.next() {
        let position = tokens.len() + 1;
        if let Ok(tok) = token {
            tokens.push((tok, position));
        } else {
            return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                     position });
        }
    }

    Ok(tokens)
}
