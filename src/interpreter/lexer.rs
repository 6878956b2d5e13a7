use std::ops::Range;

use logos::Logos;
use tracing::trace;

use crate::{
    ast::{BinaryOperator, UnaryFunction},
    error::LexError,
};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Represents a lexical token of an arithmetic expression.
///
/// Tokens carry no position; their order in the token sequence is the only
/// context the tree builder relies on. A unary minus has no token of its own:
/// [`tokenize`] folds it into the numeric literal that follows it.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5`, `2.` or (after
    /// tokenizing) `-5`.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// One of `+ - * / ^`.
    #[token("+", |_| BinaryOperator::Add)]
    #[token("-", |_| BinaryOperator::Sub)]
    #[token("*", |_| BinaryOperator::Mul)]
    #[token("/", |_| BinaryOperator::Div)]
    #[token("^", |_| BinaryOperator::Pow)]
    Operator(BinaryOperator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// A named function such as `sin` or `sqrt`. Hyperbolic names win over
    /// their trigonometric prefixes by longest match.
    #[token("sin", |_| UnaryFunction::Sin)]
    #[token("cos", |_| UnaryFunction::Cos)]
    #[token("tan", |_| UnaryFunction::Tan)]
    #[token("cot", |_| UnaryFunction::Cot)]
    #[token("ln", |_| UnaryFunction::Ln)]
    #[token("log", |_| UnaryFunction::Log)]
    #[token("sqrt", |_| UnaryFunction::Sqrt)]
    #[token("sinh", |_| UnaryFunction::Sinh)]
    #[token("cosh", |_| UnaryFunction::Cosh)]
    #[token("tanh", |_| UnaryFunction::Tanh)]
    #[token("coth", |_| UnaryFunction::Coth)]
    #[token("sech", |_| UnaryFunction::Sech)]
    #[token("csch", |_| UnaryFunction::Csch)]
    Function(UnaryFunction),
    /// `!`
    #[token("!")]
    Bang,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Function(function) => write!(f, "{function}"),
            Self::Bang => write!(f, "!"),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// Returns `None` for runs of digits and dots that are not a finite `f64`;
/// [`tokenize`] turns those into a [`LexError`].
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok().filter(|value: &f64| value.is_finite())
}

/// Converts an expression into its token sequence.
///
/// The scan is a single left-to-right pass. On top of the raw tokens it
/// applies two rules:
/// - A `-` that starts the expression, or follows an operator or `(`, and is
///   immediately followed by a numeric literal is folded into that literal.
///   A `-` right after a number, `)` or `!` is always the binary operator.
/// - `ln`, `log` and `sqrt` are only function names when more input follows
///   them; at the very end of the expression they are unknown characters.
///
/// # Errors
/// - `UnknownCharacter` for anything outside the vocabulary.
/// - `MalformedNumber` for digit runs such as `1.2.3` or a lone `.`.
/// - `LiteralTooLarge` for literals that overflow `f64`.
///
/// # Example
/// ```
/// use treecalc::{
///     ast::BinaryOperator,
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("3 - -2").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(3.0),
///                 Token::Operator(BinaryOperator::Sub),
///                 Token::Number(-2.0)]);
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut lexemes = scan(source)?.into_iter().peekable();

    while let Some((token, span)) = lexemes.next() {
        match token {
            Token::Function(function)
                if function.accepts_bare_operand() && span.end == source.len() =>
            {
                return Err(unknown_character(source, span.start));
            },
            Token::Operator(BinaryOperator::Sub) if starts_operand(tokens.last()) => {
                let negated = match lexemes.peek() {
                    Some((Token::Number(value), next)) if next.start == span.end => Some(-*value),
                    _ => None,
                };
                if let Some(value) = negated {
                    lexemes.next();
                    tokens.push(Token::Number(value));
                } else {
                    tokens.push(token);
                }
            },
            _ => tokens.push(token),
        }
    }

    trace!(count = tokens.len(), "tokenized expression");
    Ok(tokens)
}

/// Whether a token following `previous` begins a new operand, which makes a
/// `-` in that position a sign rather than a subtraction.
const fn starts_operand(previous: Option<&Token>) -> bool {
    matches!(previous, None | Some(Token::Operator(_) | Token::LParen))
}

/// Runs the raw `logos` scan and attaches the span of every token.
fn scan(source: &str) -> LexResult<Vec<(Token, Range<usize>)>> {
    Token::lexer(source).spanned()
                        .map(|(result, span)| match result {
                            Ok(token) => Ok((token, span)),
                            Err(()) => Err(classify_error(source, span)),
                        })
                        .collect()
}

/// Decides which [`LexError`] a span rejected by the scanner stands for.
fn classify_error(source: &str, span: Range<usize>) -> LexError {
    let slice = source.get(span.clone()).unwrap_or_default();
    let starts_number = slice.starts_with(|c: char| c.is_ascii_digit() || c == '.');

    if !starts_number {
        return unknown_character(source, span.start);
    }

    let literal = slice.to_string();
    if slice.parse::<f64>().is_ok() {
        LexError::LiteralTooLarge { literal,
                                    position: span.start }
    } else {
        LexError::MalformedNumber { literal,
                                    position: span.start }
    }
}

fn unknown_character(source: &str, position: usize) -> LexError {
    let character = source.get(position..)
                          .and_then(|rest| rest.chars().next())
                          .unwrap_or_default();
    LexError::UnknownCharacter { character, position }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(value: f64) -> Token {
        Token::Number(value)
    }

    fn op(op: BinaryOperator) -> Token {
        Token::Operator(op)
    }

    #[test]
    fn splits_numbers_operators_and_parens() {
        let tokens = tokenize("(3.5 + 3.2) * 2").unwrap();
        assert_eq!(tokens,
                   vec![Token::LParen,
                        number(3.5),
                        op(BinaryOperator::Add),
                        number(3.2),
                        Token::RParen,
                        op(BinaryOperator::Mul),
                        number(2.0)]);
    }

    #[test]
    fn folds_leading_minus_into_number() {
        assert_eq!(tokenize("-5 + 2").unwrap(),
                   vec![number(-5.0), op(BinaryOperator::Add), number(2.0)]);
        assert_eq!(tokenize("  -5").unwrap(), vec![number(-5.0)]);
    }

    #[test]
    fn folds_minus_after_operator_or_open_paren() {
        assert_eq!(tokenize("2^-0.5").unwrap(),
                   vec![number(2.0), op(BinaryOperator::Pow), number(-0.5)]);
        assert_eq!(tokenize("(-1)").unwrap(),
                   vec![Token::LParen, number(-1.0), Token::RParen]);
        assert_eq!(tokenize("1+2-3").unwrap(),
                   vec![number(1.0),
                        op(BinaryOperator::Add),
                        number(2.0),
                        op(BinaryOperator::Sub),
                        number(3.0)]);
    }

    #[test]
    fn keeps_minus_after_operand_binary() {
        assert_eq!(tokenize("5-3").unwrap(),
                   vec![number(5.0), op(BinaryOperator::Sub), number(3.0)]);
        assert_eq!(tokenize("3!-2").unwrap(),
                   vec![number(3.0), Token::Bang, op(BinaryOperator::Sub), number(2.0)]);
        assert_eq!(tokenize("(1)-2").unwrap(),
                   vec![Token::LParen,
                        number(1.0),
                        Token::RParen,
                        op(BinaryOperator::Sub),
                        number(2.0)]);
    }

    #[test]
    fn detached_sign_stays_an_operator() {
        assert_eq!(tokenize("- 5").unwrap(), vec![op(BinaryOperator::Sub), number(5.0)]);
        assert_eq!(tokenize("-(1)").unwrap(),
                   vec![op(BinaryOperator::Sub), Token::LParen, number(1.0), Token::RParen]);
    }

    #[test]
    fn prefers_hyperbolic_names() {
        assert_eq!(tokenize("sinh(1)").unwrap(),
                   vec![Token::Function(UnaryFunction::Sinh),
                        Token::LParen,
                        number(1.0),
                        Token::RParen]);
        assert_eq!(tokenize("cot coth csch").unwrap(),
                   vec![Token::Function(UnaryFunction::Cot),
                        Token::Function(UnaryFunction::Coth),
                        Token::Function(UnaryFunction::Csch)]);
    }

    #[test]
    fn bare_log_functions_need_trailing_input() {
        assert_eq!(tokenize("ln5").unwrap(),
                   vec![Token::Function(UnaryFunction::Ln), number(5.0)]);
        assert_eq!(tokenize("1 + ln"),
                   Err(LexError::UnknownCharacter { character: 'l',
                                                    position:  4, }));
        assert_eq!(tokenize("sqrt"),
                   Err(LexError::UnknownCharacter { character: 's',
                                                    position:  0, }));
        assert_eq!(tokenize("log ").unwrap(), vec![Token::Function(UnaryFunction::Log)]);
    }

    #[test]
    fn factorial_mark_ends_a_number() {
        assert_eq!(tokenize("5!").unwrap(), vec![number(5.0), Token::Bang]);
    }

    #[test]
    fn rejects_unknown_characters() {
        assert_eq!(tokenize("2 % 3"),
                   Err(LexError::UnknownCharacter { character: '%',
                                                    position:  2, }));
        assert!(matches!(tokenize("x + 1"),
                         Err(LexError::UnknownCharacter { character: 'x',
                                                          position:  0, })));
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert_eq!(tokenize("1.2.3"),
                   Err(LexError::MalformedNumber { literal:  "1.2.3".to_string(),
                                                   position: 0, }));
        assert!(matches!(tokenize("1 + ."), Err(LexError::MalformedNumber { position: 4, .. })));
    }

    #[test]
    fn rejects_literals_beyond_f64() {
        let huge = "9".repeat(400);
        assert!(matches!(tokenize(&huge), Err(LexError::LiteralTooLarge { position: 0, .. })));
    }

    #[test]
    fn whitespace_produces_no_tokens() {
        assert!(tokenize(" \t\n ").unwrap().is_empty());
        assert_eq!(tokenize("1 2").unwrap(), vec![number(1.0), number(2.0)]);
    }
}
