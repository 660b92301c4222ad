use std::collections::HashMap;

use crate::{
    ast::{Operator, Postfix, Symbol},
    error::RuntimeError,
    interpreter::evaluator::logic::{eval_binary, eval_unary},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A truth value for every free variable of an expression.
pub type Assignment = HashMap<String, bool>;

/// Evaluates a postfix expression under one assignment.
///
/// Symbols are consumed left to right with a stack of booleans. A variable
/// pushes its assigned value. `not` pops one value and pushes its negation.
/// A binary operator pops the right operand, then the left one, and pushes
/// the combined value. Exactly one value must remain at the end.
///
/// # Parameters
/// - `postfix`: The expression, as produced by the parser.
/// - `assignment`: Values for the expression's variables.
///
/// # Returns
/// The truth value of the expression.
///
/// # Errors
/// - `UnknownVariable` if a variable has no value in `assignment`.
/// - `MalformedExpression` if an operator is short of operands, or if the
///   stack does not end with exactly one value.
///
/// # Example
/// ```
/// use truthtable::interpreter::{
///     evaluator::core::{Assignment, evaluate},
///     lexer::tokenize,
///     parser::core::to_postfix,
/// };
///
/// let postfix = to_postfix(&tokenize("p implies q").unwrap()).unwrap();
/// let assignment = Assignment::from([("p".to_string(), true), ("q".to_string(), false)]);
/// assert!(!evaluate(&postfix, &assignment).unwrap());
/// ```
pub fn evaluate(postfix: &Postfix, assignment: &Assignment) -> EvalResult<bool> {
    let mut stack: Vec<bool> = Vec::with_capacity(postfix.len());

    for symbol in postfix.symbols() {
        match symbol {
            Symbol::Variable(name) => {
                let value = assignment.get(name)
                                      .copied()
                                      .ok_or_else(|| RuntimeError::UnknownVariable { name:
                                                                                         name.clone() })?;
                stack.push(value);
            },
            Symbol::Operator(op @ Operator::Unary(unary)) => {
                let value = pop_operand(&mut stack, *op)?;
                stack.push(eval_unary(*unary, value));
            },
            Symbol::Operator(op @ Operator::Binary(binary)) => {
                let right = pop_operand(&mut stack, *op)?;
                let left = pop_operand(&mut stack, *op)?;
                stack.push(eval_binary(*binary, left, right));
            },
        }
    }

    match stack.as_slice() {
        [result] => Ok(*result),
        [] => Err(RuntimeError::MalformedExpression { details: "expression produced no value".to_string() }),
        values => Err(RuntimeError::MalformedExpression { details: format!("{} values left without an operator to combine them",
                                                                           values.len()) }),
    }
}

fn pop_operand(stack: &mut Vec<bool>, op: Operator) -> EvalResult<bool> {
    stack.pop()
         .ok_or_else(|| RuntimeError::MalformedExpression { details: format!("'{op}' is missing an operand") })
}
