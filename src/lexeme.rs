use std::fmt;

/// Describes one of the four binary arithmetic operators.
///
/// Exactly four instances exist, all stored in [`OPERATORS`]. Lexemes refer to
/// them by `&'static` reference, so two operator occurrences are the same
/// operator iff they point at the same registry entry.
#[derive(Debug)]
pub struct Operator {
    /// The character that spells the operator in source text.
    pub sign:       char,
    /// The arithmetic applied to `(left, right)`.
    pub operation:  fn(f64, f64) -> f64,
    /// Binding strength. Higher binds tighter.
    pub precedence: u8,
}

impl Operator {
    /// Applies the operator to its operands in source order.
    ///
    /// # Example
    /// ```
    /// use rpnsolve::lexeme::lookup_operator;
    ///
    /// let minus = lookup_operator('-').unwrap();
    /// assert_eq!(minus.apply(5.0, 3.0), 2.0);
    /// ```
    #[must_use]
    pub fn apply(&self, left: f64, right: f64) -> f64 {
        (self.operation)(left, right)
    }
}

impl PartialEq for Operator {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sign)
    }
}

/// Precedence shared by `+` and `-`.
pub const ADDITIVE_PRECEDENCE: u8 = 13;
/// Precedence shared by `*` and `/`.
pub const MULTIPLICATIVE_PRECEDENCE: u8 = 14;

/// The operator registry.
///
/// Read-only for the lifetime of the process.
pub static OPERATORS: [Operator; 4] = [Operator { sign:       '+',
                                                  operation:  |a, b| a + b,
                                                  precedence: ADDITIVE_PRECEDENCE, },
                                       Operator { sign:       '-',
                                                  operation:  |a, b| a - b,
                                                  precedence: ADDITIVE_PRECEDENCE, },
                                       Operator { sign:       '*',
                                                  operation:  |a, b| a * b,
                                                  precedence: MULTIPLICATIVE_PRECEDENCE, },
                                       Operator { sign:       '/',
                                                  operation:  |a, b| a / b,
                                                  precedence: MULTIPLICATIVE_PRECEDENCE, }];

/// Returns the registry entry spelled by `c`, or `None` if `c` is not an
/// operator sign.
///
/// # Example
/// ```
/// use rpnsolve::lexeme::{OPERATORS, lookup_operator};
///
/// assert!(std::ptr::eq(lookup_operator('*').unwrap(), &OPERATORS[2]));
/// assert!(lookup_operator(' ').is_none());
/// ```
#[must_use]
pub fn lookup_operator(c: char) -> Option<&'static Operator> {
    OPERATORS.iter().find(|op| op.sign == c)
}

/// One classified unit of an expression.
///
/// The same type is used for the infix stream produced by the scanner and the
/// postfix stream produced by the converter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lexeme {
    /// A numeric value. Literals from the scanner are non-negative integers;
    /// substituted variables may carry any value.
    Constant(f64),
    /// A free variable that has not been bound yet.
    Variable(char),
    /// A binary operator occurrence.
    Operator(&'static Operator),
    /// `(`
    OpeningParenthesis,
    /// `)`
    ClosingParenthesis,
}

impl Lexeme {
    /// Returns the operator behind an `Operator` lexeme.
    #[must_use]
    pub const fn operator(&self) -> Option<&'static Operator> {
        match self {
            Self::Operator(op) => Some(*op),
            _ => None,
        }
    }

    /// Returns `true` for `Constant` lexemes.
    #[must_use]
    pub const fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }

    /// Returns `true` for `Variable` lexemes.
    #[must_use]
    pub const fn is_variable(&self) -> bool {
        matches!(self, Self::Variable(_))
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{value}"),
            Self::Variable(name) => write!(f, "{name}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::OpeningParenthesis => write!(f, "("),
            Self::ClosingParenthesis => write!(f, ")"),
        }
    }
}
