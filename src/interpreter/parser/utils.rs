use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Finds the `)` that closes the `(` at index `open`.
///
/// A running balance counter is kept over the tokens after `open`: every `(`
/// raises it and every `)` lowers it. The first index at which it returns to
/// zero is the match.
///
/// # Parameters
/// - `tokens`: The token window being built.
/// - `open`: Index of a `(` within `tokens`.
///
/// # Returns
/// The index of the matching `)`.
///
/// # Errors
/// `UnbalancedParentheses` if the window ends before the balance reaches
/// zero.
///
/// # Example
/// ```
/// use treecalc::interpreter::{lexer::tokenize, parser::utils::matching_paren};
///
/// let tokens = tokenize("((1) + 2) * 3").unwrap();
/// assert_eq!(matching_paren(&tokens, 0).unwrap(), 6);
/// assert_eq!(matching_paren(&tokens, 1).unwrap(), 3);
/// assert!(matching_paren(&tokens[..6], 0).is_err());
/// ```
pub fn matching_paren(tokens: &[Token], open: usize) -> ParseResult<usize> {
    let mut balance = 1_usize;

    for (index, token) in tokens.iter().enumerate().skip(open + 1) {
        match token {
            Token::LParen => balance += 1,
            Token::RParen => {
                balance -= 1;
                if balance == 0 {
                    return Ok(index);
                }
            },
            _ => {},
        }
    }

    Err(ParseError::UnbalancedParentheses)
}
