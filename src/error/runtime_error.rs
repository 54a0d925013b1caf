#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during argument validation and
/// evaluation.
pub enum RuntimeError {
    /// A required argument was missing or empty.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
    },
    /// A variable was still unbound when evaluation reached it.
    UnresolvedVariable {
        /// The name of the variable.
        name: char,
    },
    /// An operator found fewer than two values on the stack.
    MissingOperand {
        /// The sign of the starving operator.
        sign: char,
    },
    /// Evaluation finished with a number of values other than one.
    MissingOperator {
        /// How many values were left on the stack.
        remaining: usize,
    },
    /// A parenthesis appeared in a postfix stream.
    UnexpectedLexeme {
        /// The lexeme as it would be written in source text.
        lexeme: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument { details } => {
                write!(f, "Error: Invalid argument: {details}.")
            },
            Self::UnresolvedVariable { name } => {
                write!(f, "Error: Variable '{name}' has no value.")
            },
            Self::MissingOperand { sign } => {
                write!(f, "Error: Operator '{sign}' is missing an operand.")
            },
            Self::MissingOperator { remaining } => write!(f,
                                                          "Error: Expected exactly one result, but {remaining} values remain."),
            Self::UnexpectedLexeme { lexeme } => {
                write!(f, "Error: Unexpected '{lexeme}' in postfix expression.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
