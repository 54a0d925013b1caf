use crate::lexeme::OPERATORS;

/// Returns `true` if `c` is the sign of a registered operator.
///
/// # Example
/// ```
/// use rpnsolve::util::classify::is_operator_sign;
///
/// assert!(is_operator_sign('+'));
/// assert!(is_operator_sign('/'));
/// assert!(!is_operator_sign(' '));
/// assert!(!is_operator_sign('^'));
/// ```
#[must_use]
pub fn is_operator_sign(c: char) -> bool {
    OPERATORS.iter().any(|op| op.sign == c)
}

/// Returns `true` if `c` is a single ASCII decimal digit.
///
/// # Example
/// ```
/// use rpnsolve::util::classify::is_digit_char;
///
/// assert!(is_digit_char('0'));
/// assert!(!is_digit_char(' '));
/// assert!(!is_digit_char('٣'));
/// ```
#[must_use]
pub const fn is_digit_char(c: char) -> bool {
    c.is_ascii_digit()
}

/// Returns `true` if `c` can name a variable (`a` through `z`).
///
/// # Example
/// ```
/// use rpnsolve::util::classify::is_variable_char;
///
/// assert!(is_variable_char('x'));
/// assert!(!is_variable_char('X'));
/// assert!(!is_variable_char('é'));
/// ```
#[must_use]
pub const fn is_variable_char(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// Returns `true` for the whitespace the scanner skips between tokens.
#[must_use]
pub const fn is_whitespace_char(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}
