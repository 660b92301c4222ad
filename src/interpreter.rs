/// The evaluator module computes the truth value of a postfix expression.
///
/// The evaluator walks the postfix symbols with a stack of booleans, looks up
/// variables in an assignment and applies each connective to the values on
/// top of the stack. It is the core execution engine of the generator.
///
/// # Responsibilities
/// - Evaluates postfix symbols, performing all supported connectives.
/// - Resolves variables against an assignment.
/// - Reports runtime errors such as unknown variables or a malformed stack.
pub mod evaluator;
/// The lexer module normalizes and tokenizes expression text.
///
/// The lexer rewrites the LaTeX operator notation into plain keywords, pads
/// parentheses, and produces a stream of tokens, each corresponding to an
/// operator, a parenthesis or a variable candidate. This is the first stage
/// of generation.
///
/// # Responsibilities
/// - Converts raw notation into whitespace separated keyword text.
/// - Converts that text into tokens with their positions.
/// - Reports lexical errors for input it cannot classify.
pub mod lexer;
/// The parser module turns tokens into postfix expressions.
///
/// The parser processes the token stream produced by the lexer, collects the
/// free variables and reorders the tokens into postfix (Reverse Polish)
/// notation with the shunting-yard algorithm, following operator precedence
/// and associativity.
///
/// # Responsibilities
/// - Extracts the sorted set of free variables.
/// - Converts infix tokens into postfix symbols.
/// - Validates parenthesis balance, reporting errors with token positions.
pub mod parser;
/// The table module builds and renders truth tables.
///
/// This module ties the lexer, parser and evaluator together: it enumerates
/// every assignment of the free variables in canonical order, evaluates the
/// shared postfix form for each, and collects the rows. It also renders the
/// result as a bordered ASCII table.
///
/// # Responsibilities
/// - Defines the `TruthTable`, `Header` and `Row` types.
/// - Holds the generator configuration, such as the variable cap.
/// - Formats tables for display.
pub mod table;
