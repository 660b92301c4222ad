use truthtable::{
    ast::{BinaryOperator, Operator, Symbol, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, normalize, tokenize},
        parser::{
            core::to_postfix,
            variables::{extract_variables, is_variable_name},
        },
    },
};

fn postfix_of(src: &str) -> String {
    let tokens = tokenize(&normalize(src)).unwrap_or_else(|e| panic!("Lexing {src} failed: {e}"));
    to_postfix(&tokens).unwrap_or_else(|e| panic!("Parsing {src} failed: {e}"))
                       .to_string()
}

fn variables_of(src: &str) -> Result<Vec<String>, ParseError> {
    let tokens = tokenize(&normalize(src)).unwrap_or_else(|e| panic!("Lexing {src} failed: {e}"));
    extract_variables(&tokens)
}

#[test]
fn normalize_rewrites_notation_and_spacing() {
    assert_eq!(normalize("  p   \\land q "), "p and q");
    assert_eq!(normalize("\\lnot(p)"), "not ( p )");
    assert_eq!(normalize("p\\rightarrow(q\\leftrightarrow r)"),
               "p implies ( q iff r )");
    assert_eq!(normalize("p\t\\lor\nq"), "p or q");
}

#[test]
fn normalize_leaves_unknown_text_alone() {
    assert_eq!(normalize("p & q"), "p & q");
    assert_eq!(normalize("\\oplus p"), "\\oplus p");
    assert_eq!(normalize(""), "");
}

#[test]
fn tokenize_classifies_keywords_parens_and_words() {
    let tokens = tokenize("( not p ) iff orange").unwrap();
    let kinds: Vec<Token> = tokens.iter().map(|(token, _)| token.clone()).collect();
    assert_eq!(kinds,
               vec![Token::LParen,
                    Token::Operator(Operator::Unary(UnaryOperator::Not)),
                    Token::Variable("p".to_string()),
                    Token::RParen,
                    Token::Operator(Operator::Binary(BinaryOperator::Iff)),
                    Token::Variable("orange".to_string())]);

    let positions: Vec<usize> = tokens.iter().map(|(_, position)| *position).collect();
    assert_eq!(positions, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn operator_table_is_consistent() {
    for op in Operator::ALL {
        assert_eq!(Operator::from_keyword(op.keyword()), Some(op));
        assert_eq!(normalize(op.notation()), op.keyword());
    }

    let ranks: Vec<u8> = Operator::ALL.iter().map(|op| op.precedence()).collect();
    assert_eq!(ranks, vec![4, 3, 2, 1, 0]);
    assert_eq!(Operator::Unary(UnaryOperator::Not).arity(), 1);
    assert_eq!(Operator::Binary(BinaryOperator::Iff).arity(), 2);
}

#[test]
fn postfix_follows_precedence() {
    assert_eq!(postfix_of("p \\lor q \\land r"), "p q r and or");
    assert_eq!(postfix_of("p \\land q \\lor r"), "p q and r or");
    assert_eq!(postfix_of("p \\leftrightarrow q \\rightarrow r"), "p q r implies iff");
    assert_eq!(postfix_of("\\lnot p \\land q"), "p not q and");
    assert_eq!(postfix_of("p \\land \\lnot q"), "p q not and");
}

#[test]
fn postfix_binary_operators_associate_left() {
    assert_eq!(postfix_of("p \\rightarrow q \\rightarrow r"), "p q implies r implies");
    assert_eq!(postfix_of("p \\land q \\land r"), "p q and r and");
}

#[test]
fn postfix_negation_associates_right() {
    assert_eq!(postfix_of("\\lnot \\lnot p"), "p not not");
    assert_eq!(postfix_of("\\lnot \\lnot p \\lor q"), "p not not q or");
}

#[test]
fn postfix_drops_parentheses() {
    assert_eq!(postfix_of("(p \\land q) \\lor \\lnot r"), "p q and r not or");
    assert_eq!(postfix_of("p \\land (q \\lor r)"), "p q r or and");
    assert_eq!(postfix_of("((p))"), "p");

    let tokens = tokenize("( p )").unwrap();
    assert_eq!(to_postfix(&tokens).unwrap().symbols(),
               [Symbol::Variable("p".to_string())]);
}

#[test]
fn postfix_reports_unbalanced_parentheses() {
    let tokens = tokenize("p ) and ( q").unwrap();
    assert_eq!(to_postfix(&tokens),
               Err(ParseError::UnbalancedParens { paren:    ')',
                                                  position: 2, }));

    let tokens = tokenize("( p and ( q )").unwrap();
    assert_eq!(to_postfix(&tokens),
               Err(ParseError::UnbalancedParens { paren:    '(',
                                                  position: 1, }));
}

#[test]
fn variables_are_sorted_and_unique() {
    assert_eq!(variables_of("r \\lor q \\land (p \\rightarrow r)").unwrap(),
               vec!["p", "q", "r"]);
    assert_eq!(variables_of("z \\lor a").unwrap(), vec!["a", "z"]);
}

#[test]
fn variables_are_single_lowercase_letters() {
    assert_eq!(variables_of("p \\land Q \\land xy \\land r1").unwrap(), vec!["p"]);
    assert_eq!(variables_of("\\lnot \\lnot"), Err(ParseError::EmptyExpression));
    assert!(is_variable_name("a"));
    assert!(!is_variable_name(""));
    assert!(!is_variable_name("é"));
    assert!(!is_variable_name("or"));
}
