use crate::{error::ParseError, interpreter::scanner::ParseResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts a `u64` to `f64` if and only if it is exactly representable.
///
/// ## Errors
/// Returns an error if the value exceeds `MAX_SAFE_U64_INT`.
///
/// ## Parameters
/// - `value`: The unsigned integer to convert.
/// - `position`: Character position of the literal, for error reporting.
///
/// ## Example
/// ```
/// use rpnsolve::{
///     error::ParseError,
///     util::num::{MAX_SAFE_U64_INT, u64_to_f64_checked},
/// };
///
/// assert_eq!(u64_to_f64_checked(1234, 0).unwrap(), 1234.0);
///
/// let err = u64_to_f64_checked(MAX_SAFE_U64_INT + 1, 42).unwrap_err();
/// assert!(matches!(err, ParseError::LiteralTooLarge { position: 42 }));
/// ```
#[allow(clippy::cast_precision_loss)]
pub const fn u64_to_f64_checked(value: u64, position: usize) -> ParseResult<f64> {
    if value > MAX_SAFE_U64_INT {
        return Err(ParseError::LiteralTooLarge { position });
    }

    Ok(value as f64)
}

/// Parses a run of ASCII digits as a non-negative integer literal.
///
/// Leading zeros are accepted. The digits must already be validated by the
/// caller; anything that does not fit into a `u64` is reported as too large.
///
/// ## Errors
/// Returns `ParseError::LiteralTooLarge` if the literal is not exactly
/// representable as an `f64`.
///
/// ## Example
/// ```
/// use rpnsolve::{error::ParseError, util::num::parse_literal};
///
/// assert_eq!(parse_literal("007", 0).unwrap(), 7.0);
/// assert!(matches!(parse_literal("99999999999999999999", 3),
///                  Err(ParseError::LiteralTooLarge { position: 3 })));
/// ```
pub fn parse_literal(digits: &str, position: usize) -> ParseResult<f64> {
    let value = digits.parse::<u64>()
                      .map_err(|_| ParseError::LiteralTooLarge { position })?;
    u64_to_f64_checked(value, position)
}
