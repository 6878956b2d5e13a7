#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing an expression.
pub enum LexError {
    /// Found a character that does not start any known token.
    UnknownCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the expression.
        position:  usize,
    },
    /// A run of digits and dots that is not a valid number, such as `1.2.3`.
    MalformedNumber {
        /// The literal text as written.
        literal:  String,
        /// Byte offset of the literal in the expression.
        position: usize,
    },
    /// A numeric literal too large to be represented as a finite `f64`.
    LiteralTooLarge {
        /// The literal text as written.
        literal:  String,
        /// Byte offset of the literal in the expression.
        position: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCharacter { character, position } => {
                write!(f, "Error at {position}: Unknown character '{character}'.")
            },
            Self::MalformedNumber { literal, position } => {
                write!(f, "Error at {position}: Malformed number '{literal}'.")
            },
            Self::LiteralTooLarge { literal, position } => {
                write!(f, "Error at {position}: Literal '{literal}' is too large.")
            },
        }
    }
}

impl std::error::Error for LexError {}
