use truthtable::{
    ast::{BinaryOperator, Operator, Postfix, Symbol, UnaryOperator},
    error::RuntimeError,
    interpreter::evaluator::{
        core::{Assignment, evaluate},
        logic::{eval_binary, eval_unary},
    },
};

fn var(name: &str) -> Symbol {
    Symbol::Variable(name.to_string())
}

fn op(op: BinaryOperator) -> Symbol {
    Symbol::Operator(Operator::Binary(op))
}

fn not() -> Symbol {
    Symbol::Operator(Operator::Unary(UnaryOperator::Not))
}

fn assignment(values: &[(&str, bool)]) -> Assignment {
    values.iter()
          .map(|(name, value)| ((*name).to_string(), *value))
          .collect()
}

#[test]
fn binary_connectives_match_their_truth_tables() {
    use BinaryOperator::{And, Iff, Implies, Or};

    let pairs = [(false, false), (false, true), (true, false), (true, true)];
    let expected = [(And, [false, false, false, true]),
                    (Or, [false, true, true, true]),
                    (Implies, [true, true, false, true]),
                    (Iff, [true, false, false, true])];

    for (operator, column) in expected {
        for ((left, right), result) in pairs.into_iter().zip(column) {
            assert_eq!(eval_binary(operator, left, right),
                       result,
                       "{left} {operator:?} {right}");
        }
    }
}

#[test]
fn negation() {
    assert!(eval_unary(UnaryOperator::Not, false));
    assert!(!eval_unary(UnaryOperator::Not, true));
}

#[test]
fn right_operand_is_popped_first() {
    // p implies q, with p = true and q = false, is false; the reverse is true.
    let postfix = Postfix::from(vec![var("p"), var("q"), op(BinaryOperator::Implies)]);
    assert!(!evaluate(&postfix, &assignment(&[("p", true), ("q", false)])).unwrap());
    assert!(evaluate(&postfix, &assignment(&[("p", false), ("q", true)])).unwrap());
}

#[test]
fn nested_expression() {
    // (p and q) or not r
    let postfix = Postfix::from(vec![var("p"),
                                     var("q"),
                                     op(BinaryOperator::And),
                                     var("r"),
                                     not(),
                                     op(BinaryOperator::Or)]);
    assert!(evaluate(&postfix, &assignment(&[("p", true), ("q", true), ("r", true)])).unwrap());
    assert!(!evaluate(&postfix, &assignment(&[("p", false), ("q", true), ("r", true)])).unwrap());
    assert!(evaluate(&postfix, &assignment(&[("p", false), ("q", false), ("r", false)])).unwrap());
}

#[test]
fn unknown_variable_is_error() {
    let postfix = Postfix::from(vec![var("p"), var("s"), op(BinaryOperator::Or)]);
    assert_eq!(evaluate(&postfix, &assignment(&[("p", true)])),
               Err(RuntimeError::UnknownVariable { name: "s".to_string() }));
}

#[test]
fn stack_underflow_is_error() {
    let postfix = Postfix::from(vec![var("p"), op(BinaryOperator::And)]);
    assert!(matches!(evaluate(&postfix, &assignment(&[("p", true)])),
                     Err(RuntimeError::MalformedExpression { .. })));

    let postfix = Postfix::from(vec![not()]);
    assert!(matches!(evaluate(&postfix, &Assignment::new()),
                     Err(RuntimeError::MalformedExpression { .. })));
}

#[test]
fn leftover_values_are_error() {
    let postfix = Postfix::from(vec![var("p"), var("q")]);
    let err = evaluate(&postfix, &assignment(&[("p", true), ("q", true)])).unwrap_err();
    assert_eq!(err.to_string(),
               "Malformed expression: 2 values left without an operator to combine them.");
}

#[test]
fn empty_expression_has_no_value() {
    assert!(matches!(evaluate(&Postfix::default(), &Assignment::new()),
                     Err(RuntimeError::MalformedExpression { .. })));
}
