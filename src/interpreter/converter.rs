use crate::{
    error::ParseError,
    interpreter::scanner::ParseResult,
    lexeme::{Lexeme, Operator},
};

/// Reorders an infix lexeme stream into postfix (Reverse Polish) order.
///
/// This is the shunting-yard algorithm with a single auxiliary stack that
/// only ever holds operators and opening parentheses. Operands go straight
/// to the output.
///
/// An incoming operator first pops every stacked operator whose precedence is
/// greater than **or equal to** its own. Popping on equality is what makes
/// `+`/`-` and `*`/`/` left-associative: `2 - 3 - 1` becomes `2 3 - 1 -`.
///
/// # Errors
/// `UnbalancedParentheses` if a `)` has no matching `(`, or a `(` is never
/// closed.
///
/// # Example
/// ```
/// use rpnsolve::interpreter::{
///     converter::{to_postfix, to_postfix_string},
///     scanner::scan,
/// };
///
/// let postfix = to_postfix(&scan("2 - 3 - 1").unwrap()).unwrap();
/// assert_eq!(to_postfix_string(&postfix), "2 3 - 1 -");
///
/// let postfix = to_postfix(&scan("(2 + 3) * 4").unwrap()).unwrap();
/// assert_eq!(to_postfix_string(&postfix), "2 3 + 4 *");
/// ```
pub fn to_postfix(lexemes: &[Lexeme]) -> ParseResult<Vec<Lexeme>> {
    let mut stack: Vec<Lexeme> = Vec::new();
    let mut output = Vec::with_capacity(lexemes.len());

    for lexeme in lexemes {
        match lexeme {
            Lexeme::Constant(_) | Lexeme::Variable(_) => output.push(*lexeme),

            Lexeme::OpeningParenthesis => stack.push(*lexeme),

            Lexeme::Operator(op) => {
                pop_binding_operators(&mut stack, &mut output, op);
                stack.push(*lexeme);
            },

            Lexeme::ClosingParenthesis => {
                let mut found_opening = false;
                while let Some(top) = stack.pop() {
                    if top == Lexeme::OpeningParenthesis {
                        found_opening = true;
                        break;
                    }
                    output.push(top);
                }
                if !found_opening {
                    log::debug!("closing parenthesis without an opening one");
                    return Err(ParseError::UnbalancedParentheses);
                }
            },
        }
    }

    while let Some(top) = stack.pop() {
        if top.operator().is_none() {
            log::debug!("opening parenthesis is never closed");
            return Err(ParseError::UnbalancedParentheses);
        }
        output.push(top);
    }

    log::debug!("converted {} infix lexemes into {} postfix lexemes",
                lexemes.len(),
                output.len());

    Ok(output)
}

/// Moves stacked operators that bind at least as tightly as `incoming` to the
/// output. Stops at an opening parenthesis or a weaker operator.
fn pop_binding_operators(stack: &mut Vec<Lexeme>, output: &mut Vec<Lexeme>, incoming: &Operator) {
    while let Some(top) = stack.last().and_then(Lexeme::operator) {
        if top.precedence < incoming.precedence {
            break;
        }
        log::trace!("'{top}' binds before '{incoming}'");
        output.push(Lexeme::Operator(top));
        stack.pop();
    }
}

/// Renders a lexeme sequence as space-separated text.
///
/// Meant for postfix streams, which need no parentheses, but works for any
/// sequence.
///
/// # Example
/// ```
/// use rpnsolve::{
///     interpreter::converter::to_postfix_string,
///     lexeme::{Lexeme, lookup_operator},
/// };
///
/// let postfix = [Lexeme::Variable('x'),
///                Lexeme::Constant(1.0),
///                Lexeme::Operator(lookup_operator('+').unwrap())];
/// assert_eq!(to_postfix_string(&postfix), "x 1 +");
/// ```
#[must_use]
pub fn to_postfix_string(lexemes: &[Lexeme]) -> String {
    lexemes.iter()
           .map(ToString::to_string)
           .collect::<Vec<_>>()
           .join(" ")
}
