use crate::{
    ast::{Operator, Postfix, Symbol},
    error::ParseError,
    interpreter::lexer::Token,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// An entry waiting on the operator stack.
#[derive(Debug, Clone, Copy)]
enum Pending {
    Operator(Operator),
    /// An open group, with the position of its `(` for error reporting.
    LParen(usize),
}

/// Converts infix tokens to postfix order with the shunting-yard algorithm.
///
/// Variables go straight to the output. A binary operator first pops every
/// stacked operator of greater or equal precedence, so operators of the same
/// rank associate to the left. A unary operator is pushed without popping,
/// which makes `not` right-associative: `not not p` is `not (not p)`. A `)`
/// pops operators until its `(` and discards both parentheses. Operators left
/// on the stack at the end are emitted in pop order.
///
/// Grammar is not validated here; a missing operand surfaces during
/// evaluation as a malformed expression.
///
/// # Parameters
/// - `tokens`: Tokens with their positions, as produced by the lexer.
///
/// # Returns
/// The expression in postfix order.
///
/// # Errors
/// - `UnbalancedParens` if a `)` has no matching `(`.
/// - `UnbalancedParens` if a `(` is never closed.
///
/// # Example
/// ```
/// use truthtable::interpreter::{lexer::tokenize, parser::core::to_postfix};
///
/// let tokens = tokenize("( p and q ) or not r").unwrap();
/// assert_eq!(to_postfix(&tokens).unwrap().to_string(), "p q and r not or");
/// ```
pub fn to_postfix(tokens: &[(Token, usize)]) -> ParseResult<Postfix> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending> = Vec::new();

    for (token, position) in tokens {
        match token {
            Token::Operator(op) => {
                if let Operator::Binary(_) = op {
                    while let Some(Pending::Operator(top)) = stack.last()
                          && top.precedence() >= op.precedence()
                    {
                        output.push(Symbol::Operator(*top));
                        stack.pop();
                    }
                }
                stack.push(Pending::Operator(*op));
            },
            Token::LParen => stack.push(Pending::LParen(*position)),
            Token::RParen => close_group(&mut stack, &mut output, *position)?,
            Token::Variable(name) => output.push(Symbol::Variable(name.clone())),
        }
    }

    while let Some(entry) = stack.pop() {
        match entry {
            Pending::Operator(op) => output.push(Symbol::Operator(op)),
            Pending::LParen(position) => {
                return Err(ParseError::UnbalancedParens { paren: '(',
                                                          position });
            },
        }
    }

    Ok(Postfix::from(output))
}

/// Pops operators into the output until the matching `(` is found.
fn close_group(stack: &mut Vec<Pending>,
               output: &mut Vec<Symbol>,
               position: usize)
               -> ParseResult<()> {
    loop {
        match stack.pop() {
            Some(Pending::Operator(op)) => output.push(Symbol::Operator(op)),
            Some(Pending::LParen(_)) => return Ok(()),
            None => {
                return Err(ParseError::UnbalancedParens { paren: ')',
                                                          position });
            },
        }
    }
}
