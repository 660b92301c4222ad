use std::collections::BTreeSet;

use crate::{
    ast::Operator,
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Collects the free variables of an expression.
///
/// A variable is a standalone token made of a single lowercase ASCII letter.
/// Operator keywords never qualify. The result is sorted and free of
/// duplicates, which fixes the column order of the truth table.
///
/// # Parameters
/// - `tokens`: Tokens with their positions, as produced by the lexer.
///
/// # Returns
/// The variable names in lexicographic order.
///
/// # Errors
/// Returns `ParseError::EmptyExpression` if no variable is found.
///
/// # Example
/// ```
/// use truthtable::interpreter::{lexer::tokenize, parser::variables::extract_variables};
///
/// let tokens = tokenize("r or ( q and r )").unwrap();
/// assert_eq!(extract_variables(&tokens).unwrap(), vec!["q", "r"]);
/// ```
pub fn extract_variables(tokens: &[(Token, usize)]) -> ParseResult<Vec<String>> {
    let names: BTreeSet<&str> = tokens.iter()
                                      .filter_map(|(token, _)| match token {
                                          Token::Variable(name) if is_variable_name(name) => {
                                              Some(name.as_str())
                                          },
                                          _ => None,
                                      })
                                      .collect();

    if names.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    Ok(names.into_iter().map(str::to_owned).collect())
}

/// Returns `true` if `name` can label a truth table column.
///
/// # Example
/// ```
/// use truthtable::interpreter::parser::variables::is_variable_name;
///
/// assert!(is_variable_name("p"));
/// assert!(!is_variable_name("P"));
/// assert!(!is_variable_name("pq"));
/// ```
#[must_use]
pub fn is_variable_name(name: &str) -> bool {
    let mut chars = name.chars();
    let single_lowercase = matches!((chars.next(), chars.next()),
                                    (Some(c), None) if c.is_ascii_lowercase());

    single_lowercase && Operator::from_keyword(name).is_none()
}
