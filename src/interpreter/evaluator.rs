use crate::{error::RuntimeError, lexeme::Lexeme};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Computes the value of a postfix lexeme stream.
///
/// Constants are pushed onto a value stack. An operator pops its right
/// operand first, then its left one, and pushes `left op right`. The stream
/// must leave exactly one value behind. Division follows IEEE semantics, so
/// dividing by zero yields an infinity rather than an error.
///
/// # Errors
/// - `UnresolvedVariable` if a variable was never substituted.
/// - `MissingOperand` if an operator finds fewer than two values.
/// - `MissingOperator` if more or fewer than one value remains at the end.
/// - `UnexpectedLexeme` if the stream still contains parentheses.
///
/// # Example
/// ```
/// use rpnsolve::{
///     error::RuntimeError,
///     interpreter::{converter::to_postfix, evaluator::evaluate_postfix, scanner::scan},
/// };
///
/// let postfix = to_postfix(&scan("8 / 4 / 2").unwrap()).unwrap();
/// assert_eq!(evaluate_postfix(&postfix).unwrap(), 1.0);
///
/// let postfix = to_postfix(&scan("y + 1").unwrap()).unwrap();
/// assert_eq!(evaluate_postfix(&postfix),
///            Err(RuntimeError::UnresolvedVariable { name: 'y' }));
/// ```
pub fn evaluate_postfix(postfix: &[Lexeme]) -> EvalResult<f64> {
    let mut values: Vec<f64> = Vec::new();

    for lexeme in postfix {
        match lexeme {
            Lexeme::Constant(value) => values.push(*value),

            Lexeme::Variable(name) => {
                return Err(RuntimeError::UnresolvedVariable { name: *name });
            },

            Lexeme::Operator(op) => {
                let (Some(right), Some(left)) = (values.pop(), values.pop()) else {
                    return Err(RuntimeError::MissingOperand { sign: op.sign });
                };
                let result = op.apply(left, right);
                log::trace!("{left} {op} {right} = {result}");
                values.push(result);
            },

            Lexeme::OpeningParenthesis | Lexeme::ClosingParenthesis => {
                return Err(RuntimeError::UnexpectedLexeme { lexeme: lexeme.to_string() });
            },
        }
    }

    match values.as_slice() {
        [result] => Ok(*result),
        rest => Err(RuntimeError::MissingOperator { remaining: rest.len() }),
    }
}
