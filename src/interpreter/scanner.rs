use crate::{
    error::ParseError,
    lexeme::{Lexeme, lookup_operator},
    util::{
        classify::{is_digit_char, is_variable_char, is_whitespace_char},
        num::parse_literal,
    },
};

/// Result type used by the scanner and the converter.
///
/// All parsing functions return either a value of type `T` or a `ParseError`
/// describing why the text is not a valid expression.
pub type ParseResult<T> = Result<T, ParseError>;

/// The state of the scanner, named after the last token it produced.
///
/// `Start`, `AfterOpeningParen` and `AfterOperator` accept exactly the same
/// characters, as do `AfterVariable` and `AfterClosingParen`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScannerState {
    /// Nothing has been read yet.
    Start,
    /// The last token was `(`.
    AfterOpeningParen,
    /// The last token was `)`.
    AfterClosingParen,
    /// The last character read was part of a numeric literal.
    AfterDigit,
    /// The last token was a variable.
    AfterVariable,
    /// The last token was an operator.
    AfterOperator,
}

/// Walks the source text one character at a time.
///
/// Digits are collected into `literal` until something else ends the number;
/// every other token is emitted as soon as its character is accepted.
struct Scanner {
    state:         ScannerState,
    lexemes:       Vec<Lexeme>,
    literal:       String,
    literal_start: usize,
}

impl Scanner {
    fn new() -> Self {
        Self { state:         ScannerState::Start,
               lexemes:       Vec::new(),
               literal:       String::new(),
               literal_start: 0, }
    }

    fn flush_literal(&mut self) -> ParseResult<()> {
        if self.literal.is_empty() {
            return Ok(());
        }
        let value = parse_literal(&self.literal, self.literal_start)?;
        log::trace!("scanned constant {value} at position {}", self.literal_start);
        self.lexemes.push(Lexeme::Constant(value));
        self.literal.clear();
        Ok(())
    }

    fn try_whitespace(&mut self, c: char) -> ParseResult<bool> {
        if !is_whitespace_char(c) {
            return Ok(false);
        }
        self.flush_literal()?;
        Ok(true)
    }

    fn try_digit(&mut self, c: char, position: usize) -> bool {
        if !is_digit_char(c) {
            return false;
        }
        if self.literal.is_empty() {
            self.literal_start = position;
        }
        self.literal.push(c);
        self.state = ScannerState::AfterDigit;
        true
    }

    fn try_variable(&mut self, c: char) -> bool {
        if !is_variable_char(c) {
            return false;
        }
        self.lexemes.push(Lexeme::Variable(c));
        self.state = ScannerState::AfterVariable;
        true
    }

    fn try_operator(&mut self, c: char) -> ParseResult<bool> {
        let Some(op) = lookup_operator(c) else {
            return Ok(false);
        };
        self.flush_literal()?;
        self.lexemes.push(Lexeme::Operator(op));
        self.state = ScannerState::AfterOperator;
        Ok(true)
    }

    fn try_opening_paren(&mut self, c: char) -> bool {
        if c != '(' {
            return false;
        }
        self.lexemes.push(Lexeme::OpeningParenthesis);
        self.state = ScannerState::AfterOpeningParen;
        true
    }

    fn try_closing_paren(&mut self, c: char) -> ParseResult<bool> {
        if c != ')' {
            return Ok(false);
        }
        self.flush_literal()?;
        self.lexemes.push(Lexeme::ClosingParenthesis);
        self.state = ScannerState::AfterClosingParen;
        Ok(true)
    }

    /// Feeds one character through the transition table.
    ///
    /// Returns `Ok(false)` when the current state has no transition for `c`.
    fn step(&mut self, c: char, position: usize) -> ParseResult<bool> {
        use ScannerState::{
            AfterClosingParen, AfterDigit, AfterOpeningParen, AfterOperator, AfterVariable, Start,
        };

        let accepted = match self.state {
            Start | AfterOpeningParen | AfterOperator => {
                self.try_whitespace(c)?
                || self.try_digit(c, position)
                || self.try_variable(c)
                || self.try_opening_paren(c)
            },
            AfterDigit => {
                self.try_whitespace(c)?
                || self.try_digit(c, position)
                || self.try_operator(c)?
                || self.try_closing_paren(c)?
            },
            AfterVariable | AfterClosingParen => {
                self.try_whitespace(c)? || self.try_operator(c)? || self.try_closing_paren(c)?
            },
        };

        Ok(accepted)
    }
}

/// Splits an expression into lexemes.
///
/// The scanner is a finite-state machine over [`ScannerState`]. Each state
/// accepts a fixed set of characters; anything else is rejected immediately
/// with the character and its position. Parenthesis balance is not checked
/// here, that is left to [`to_postfix`](crate::interpreter::converter::to_postfix).
///
/// # Errors
/// - `EmptyExpression` if `text` is empty.
/// - `InvalidExpression` for a character that cannot follow the previous
///   token (for example a leading `-`, or a letter right after a digit).
/// - `LiteralTooLarge` for a numeric literal above `2^53 - 1`.
///
/// # Example
/// ```
/// use rpnsolve::{
///     error::ParseError,
///     interpreter::scanner::scan,
///     lexeme::{Lexeme, lookup_operator},
/// };
///
/// let lexemes = scan("10 + x").unwrap();
/// assert_eq!(lexemes,
///            vec![Lexeme::Constant(10.0),
///                 Lexeme::Operator(lookup_operator('+').unwrap()),
///                 Lexeme::Variable('x')]);
///
/// assert!(matches!(scan("1x"),
///                  Err(ParseError::InvalidExpression { character: 'x', position: 1 })));
/// ```
pub fn scan(text: &str) -> ParseResult<Vec<Lexeme>> {
    if text.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut scanner = Scanner::new();

    for (position, c) in text.chars().enumerate() {
        if !scanner.step(c, position)? {
            log::debug!("rejected '{c}' at position {position} in state {:?}", scanner.state);
            return Err(ParseError::InvalidExpression { character: c,
                                                       position });
        }
    }

    scanner.flush_literal()?;

    log::debug!("scanned {} lexemes from {} characters",
                scanner.lexemes.len(),
                text.chars().count());

    Ok(scanner.lexemes)
}
