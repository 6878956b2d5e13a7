use crate::{ast::UnaryFunction, error::LexError, interpreter::lexer::Token};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while building an expression tree.
pub enum ParseError {
    /// The expression could not be tokenized.
    Lex(LexError),
    /// An operator had no operand to its left, or nothing after it.
    InsufficientOperands,
    /// A `(` has no matching `)`.
    UnbalancedParentheses,
    /// A function that needs a parenthesized argument was not followed by `(`.
    MissingParenAfterFunction {
        /// The function whose argument is missing.
        function: UnaryFunction,
    },
    /// Found a token that cannot appear at this point.
    UnexpectedToken {
        /// The token encountered.
        token: Token,
    },
    /// The tokens did not reduce to exactly one tree.
    IncompleteExpression,
    /// Groups and function arguments were nested too deeply, or operator
    /// chains built a tree taller than the builder accepts.
    NestingTooDeep {
        /// The maximum nesting depth accepted by the builder.
        limit: usize,
    },
}

impl From<LexError> for ParseError {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::InsufficientOperands => write!(f, "Error: Not enough operands for operator."),
            Self::UnbalancedParentheses => write!(f, "Error: Parentheses are not balanced."),
            Self::MissingParenAfterFunction { function } => {
                write!(f, "Error: Expected '(' after function '{function}'.")
            },
            Self::UnexpectedToken { token } => write!(f, "Error: Unexpected token: {token}."),
            Self::IncompleteExpression => {
                write!(f, "Error: Expression does not reduce to a single value.")
            },
            Self::NestingTooDeep { limit } => {
                write!(f, "Error: Expression is nested deeper than {limit} levels.")
            },
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            _ => None,
        }
    }
}
