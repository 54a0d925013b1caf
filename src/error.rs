use std::fmt;

/// Parsing errors.
///
/// Defines all error types that can occur while scanning source text or
/// converting the lexeme stream to postfix order. Parse errors include empty
/// input, characters that are not allowed at their position, unbalanced
/// parentheses, and literals that cannot be represented.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised by the public entry points and
/// during postfix evaluation, such as missing arguments or variables that were
/// never bound.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of a full solve run.
///
/// Wraps the error of whichever phase stopped the pipeline. Both phase errors
/// convert into it, so `?` can be used across phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Scanning or postfix conversion failed.
    Parse(ParseError),
    /// Argument validation or evaluation failed.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
