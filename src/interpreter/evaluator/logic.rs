use crate::ast::{BinaryOperator, UnaryOperator};

/// Applies a unary connective to a truth value.
///
/// # Example
/// ```
/// use truthtable::{ast::UnaryOperator, interpreter::evaluator::logic::eval_unary};
///
/// assert!(eval_unary(UnaryOperator::Not, false));
/// ```
#[must_use]
pub const fn eval_unary(op: UnaryOperator, value: bool) -> bool {
    match op {
        UnaryOperator::Not => !value,
    }
}

/// Applies a binary connective to two truth values.
///
/// `left` is the operand pushed first, `right` the one pushed second.
/// Implication is `!left || right`; the biconditional is equality.
///
/// # Parameters
/// - `op`: The logical operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Example
/// ```
/// use truthtable::{ast::BinaryOperator, interpreter::evaluator::logic::eval_binary};
///
/// assert!(!eval_binary(BinaryOperator::Implies, true, false));
/// assert!(eval_binary(BinaryOperator::Implies, false, false));
/// assert!(eval_binary(BinaryOperator::Iff, false, false));
/// ```
#[must_use]
pub const fn eval_binary(op: BinaryOperator, left: bool, right: bool) -> bool {
    use BinaryOperator::{And, Iff, Implies, Or};

    match op {
        And => left && right,
        Or => left || right,
        Implies => !left || right,
        Iff => left == right,
    }
}
