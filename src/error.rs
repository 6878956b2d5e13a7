/// Lexing errors.
///
/// Defines the errors raised while turning raw expression text into tokens:
/// characters outside the recognized vocabulary and numeric literals that do
/// not form a valid `f64`.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building an expression tree
/// from tokens, such as missing operands, unbalanced parentheses and
/// unexpected tokens. Lexing failures are wrapped so that [`crate::parse`] has
/// a single error type.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the domain errors raised while evaluating a tree: division by
/// zero, undefined cotangent, square roots of negative numbers and negative
/// factorials.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

#[derive(Debug, Clone, PartialEq)]
/// Any failure of the one-shot [`crate::evaluate`] entry point.
pub enum Error {
    /// The expression could not be tokenized or turned into a tree.
    Parse(ParseError),
    /// The tree was built but evaluating it failed.
    Eval(EvalError),
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Parse(ParseError::Lex(error))
    }
}

impl From<EvalError> for Error {
    fn from(error: EvalError) -> Self {
        Self::Eval(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
