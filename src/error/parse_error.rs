#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during scanning or postfix
/// conversion.
pub enum ParseError {
    /// The expression text was empty.
    EmptyExpression,
    /// A character is not allowed after the previous token.
    InvalidExpression {
        /// The offending character.
        character: char,
        /// Zero-based character position in the source text.
        position:  usize,
    },
    /// A closing parenthesis has no opening partner, or an opening one is
    /// never closed.
    UnbalancedParentheses,
    /// A literal value was too large to be represented safely.
    LiteralTooLarge {
        /// Zero-based character position of the literal's first digit.
        position: usize,
    },
}

impl ParseError {
    /// Returns `true` if the error means the text is not a well-formed
    /// expression, either because of a misplaced character or because of
    /// unbalanced parentheses.
    ///
    /// # Example
    /// ```
    /// use rpnsolve::error::ParseError;
    ///
    /// assert!(ParseError::UnbalancedParentheses.is_invalid_expression());
    /// assert!(!ParseError::EmptyExpression.is_invalid_expression());
    /// ```
    #[must_use]
    pub const fn is_invalid_expression(&self) -> bool {
        matches!(self, Self::InvalidExpression { .. } | Self::UnbalancedParentheses)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Error: Expression expected."),

            Self::InvalidExpression { character, position } => write!(f,
                                                                      "Error at position {position}: Invalid expression, unexpected character '{character}'."),

            Self::UnbalancedParentheses => {
                write!(f, "Error: Invalid expression, parentheses are not balanced.")
            },

            Self::LiteralTooLarge { position } => {
                write!(f, "Error at position {position}: Literal is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
