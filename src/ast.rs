/// Represents a unary operator.
///
/// Propositional logic has a single unary connective, negation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Logical NOT (`\lnot`).
    Not,
}

/// Represents a binary operator.
///
/// Binary operators are the connectives combining two propositions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Logical and (`\land`)
    And,
    /// Logical or (`\lor`)
    Or,
    /// Material implication (`\rightarrow`)
    Implies,
    /// Biconditional (`\leftrightarrow`)
    Iff,
}

/// A logical connective, tagged with its arity.
///
/// Each operator has a LaTeX notation accepted in source text, a keyword used
/// in normalized text and a precedence rank. Higher ranks bind tighter:
///
/// | operator | notation          | keyword   | precedence |
/// |----------|-------------------|-----------|------------|
/// | NOT      | `\lnot`           | `not`     | 4          |
/// | AND      | `\land`           | `and`     | 3          |
/// | OR       | `\lor`            | `or`      | 2          |
/// | IMPLIES  | `\rightarrow`     | `implies` | 1          |
/// | IFF      | `\leftrightarrow` | `iff`     | 0          |
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// An operator taking one operand.
    Unary(UnaryOperator),
    /// An operator taking two operands.
    Binary(BinaryOperator),
}

impl Operator {
    /// Every supported operator, from tightest to loosest binding.
    pub const ALL: [Self; 5] = [Self::Unary(UnaryOperator::Not),
                                Self::Binary(BinaryOperator::And),
                                Self::Binary(BinaryOperator::Or),
                                Self::Binary(BinaryOperator::Implies),
                                Self::Binary(BinaryOperator::Iff)];

    /// Returns the LaTeX notation recognized in source text.
    ///
    /// ## Example
    /// ```
    /// use truthtable::ast::{BinaryOperator, Operator};
    ///
    /// assert_eq!(Operator::Binary(BinaryOperator::Implies).notation(), "\\rightarrow");
    /// ```
    #[must_use]
    pub const fn notation(self) -> &'static str {
        match self {
            Self::Unary(UnaryOperator::Not) => "\\lnot",
            Self::Binary(BinaryOperator::And) => "\\land",
            Self::Binary(BinaryOperator::Or) => "\\lor",
            Self::Binary(BinaryOperator::Implies) => "\\rightarrow",
            Self::Binary(BinaryOperator::Iff) => "\\leftrightarrow",
        }
    }

    /// Returns the keyword the notation is rewritten to during normalization.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Unary(UnaryOperator::Not) => "not",
            Self::Binary(BinaryOperator::And) => "and",
            Self::Binary(BinaryOperator::Or) => "or",
            Self::Binary(BinaryOperator::Implies) => "implies",
            Self::Binary(BinaryOperator::Iff) => "iff",
        }
    }

    /// Returns the precedence rank. Higher binds tighter.
    ///
    /// ## Example
    /// ```
    /// use truthtable::ast::{BinaryOperator, Operator, UnaryOperator};
    ///
    /// let not = Operator::Unary(UnaryOperator::Not);
    /// let and = Operator::Binary(BinaryOperator::And);
    /// assert!(not.precedence() > and.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Unary(UnaryOperator::Not) => 4,
            Self::Binary(BinaryOperator::And) => 3,
            Self::Binary(BinaryOperator::Or) => 2,
            Self::Binary(BinaryOperator::Implies) => 1,
            Self::Binary(BinaryOperator::Iff) => 0,
        }
    }

    /// Returns the number of operands the operator consumes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(_) => 2,
        }
    }

    /// Looks an operator up by its normalized keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.keyword() == keyword)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// One element of an expression in postfix (Reverse Polish) order.
///
/// Parentheses have no representation here: once an expression has been
/// converted to postfix, grouping is encoded purely by symbol order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    /// A propositional variable, looked up in the assignment.
    Variable(String),
    /// A connective applied to the values on top of the stack.
    Operator(Operator),
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable(name) => write!(f, "{name}"),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// An expression in postfix order, produced once by the parser and shared by
/// every row of a truth table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Postfix {
    /// The symbols in evaluation order.
    pub symbols: Vec<Symbol>,
}

impl Postfix {
    /// Returns the symbols in evaluation order.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Returns the number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the expression holds no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl From<Vec<Symbol>> for Postfix {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }
}

/// Space separated, e.g. `p q and r not or`.
impl std::fmt::Display for Postfix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
