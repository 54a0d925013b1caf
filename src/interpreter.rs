/// The converter module reorders lexemes from infix to postfix order.
///
/// It implements the shunting-yard algorithm on top of the scanner's output
/// and is where parenthesis balance is enforced.
///
/// # Responsibilities
/// - Applies operator precedence and left-associativity.
/// - Removes parentheses, which postfix order does not need.
/// - Reports unbalanced parentheses.
pub mod converter;
/// The evaluator module computes the value of a postfix stream.
///
/// A single value stack is enough, since postfix order already encodes
/// precedence and grouping.
pub mod evaluator;
/// The scanner module tokenizes expression text.
///
/// The scanner reads the raw text one character at a time and drives an
/// explicit finite-state machine that decides which characters may follow the
/// previous token. This is the first stage of solving an expression.
///
/// # Responsibilities
/// - Converts the input characters into lexemes.
/// - Accumulates digits into integer literals.
/// - Rejects misplaced characters with their position.
pub mod scanner;
/// Variable substitution.
///
/// Replaces variable lexemes with constants taken from caller-supplied
/// bindings.
pub mod substituter;
