//! # rpnsolve
//!
//! rpnsolve evaluates simple arithmetic expressions over single-letter
//! variables. Expressions are scanned by an explicit state machine, reordered
//! into postfix notation with the shunting-yard algorithm, and then evaluated
//! on a value stack.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::cargo_common_metadata)]

use crate::{
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        converter::{to_postfix, to_postfix_string},
        evaluator::evaluate_postfix,
        scanner::scan,
        substituter::{Binding, substitute},
    },
};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while scanning,
/// converting, or evaluating an expression. It standardizes error reporting
/// and carries the information needed to point at the failure, such as the
/// offending character and its position.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (scanner, converter, evaluator).
/// - Wraps phase errors into a single [`Error`](error::Error).
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the stages of solving an expression.
///
/// This module ties together scanning, substitution, postfix conversion and
/// evaluation.
pub mod interpreter;
/// Defines the lexemes flowing between the stages and the operator registry.
///
/// # Responsibilities
/// - Declares the `Lexeme` enum shared by infix and postfix streams.
/// - Holds the four shared operator descriptors and their precedences.
pub mod lexeme;
/// General utilities for character classification and numeric conversion.
pub mod util;

/// Solves an expression for a given value of `x`.
///
/// The expression is scanned, `x` is substituted, the lexemes are converted to
/// postfix order and the result is evaluated. Both arguments accept either a
/// plain value or an `Option`, so a missing argument can be passed as `None`.
/// `0.0` is a valid value for `x`.
///
/// # Errors
/// - `RuntimeError::InvalidArgument` if the expression is `None` or empty, or
///   if `x` is `None`.
/// - Any `ParseError` raised while scanning or converting.
/// - Any `RuntimeError` raised during evaluation, for example
///   `UnresolvedVariable` when the expression uses a variable other than `x`.
///
/// # Examples
/// ```
/// use rpnsolve::{
///     error::{Error, RuntimeError},
///     solve,
/// };
///
/// assert_eq!(solve("2 * ( x - 1 )", 5.0).unwrap(), 8.0);
/// assert_eq!(solve("1", 0.0).unwrap(), 1.0);
///
/// let missing = solve("1", None::<f64>);
/// assert!(matches!(missing, Err(Error::Runtime(RuntimeError::InvalidArgument { .. }))));
/// ```
pub fn solve<'a>(expression: impl Into<Option<&'a str>>,
                 x: impl Into<Option<f64>>)
                 -> Result<f64, Error> {
    let expression = match expression.into() {
        Some(text) if !text.is_empty() => text,
        _ => {
            let details = "expression expected".to_string();
            return Err(RuntimeError::InvalidArgument { details }.into());
        },
    };
    let Some(x) = x.into() else {
        let details = "value for 'x' expected".to_string();
        return Err(RuntimeError::InvalidArgument { details }.into());
    };

    evaluate(expression, &[('x', x)])
}

/// Evaluates an expression with any number of bound variables.
///
/// Each binding pairs a variable name with its value. If a name is bound more
/// than once, the first binding is used.
///
/// # Errors
/// - `ParseError::EmptyExpression` if the expression is empty.
/// - Any other `ParseError` raised while scanning or converting.
/// - Any `RuntimeError` raised during evaluation.
///
/// # Examples
/// ```
/// use rpnsolve::evaluate;
///
/// assert_eq!(evaluate("(a - b) * c", &[('a', 7.0), ('b', 2.0), ('c', 3.0)]).unwrap(), 15.0);
/// assert_eq!(evaluate("2 + 3 * 4", &[]).unwrap(), 14.0);
/// ```
pub fn evaluate(expression: &str, bindings: &[Binding]) -> Result<f64, Error> {
    let infix = scan(expression)?;
    let resolved = substitute(&infix, bindings);
    let postfix = to_postfix(&resolved)?;
    let result = evaluate_postfix(&postfix)?;

    log::debug!("{expression:?} evaluated to {result}");

    Ok(result)
}

/// Converts an expression to its postfix form without evaluating it.
///
/// Variables are kept by name, which makes this useful for inspecting how an
/// expression is grouped.
///
/// # Errors
/// - `ParseError::EmptyExpression` if the text is empty or only whitespace.
/// - Any other `ParseError` raised while scanning or converting.
///
/// # Examples
/// ```
/// use rpnsolve::{error::ParseError, postfix};
///
/// assert_eq!(postfix("2 + x * 4").unwrap(), "2 x 4 * +");
/// assert_eq!(postfix("   "), Err(ParseError::EmptyExpression));
/// ```
pub fn postfix(expression: &str) -> Result<String, ParseError> {
    let infix = scan(expression)?;
    if infix.is_empty() {
        return Err(ParseError::EmptyExpression);
    }
    let lexemes = to_postfix(&infix)?;
    Ok(to_postfix_string(&lexemes))
}
