use crate::{
    ast::BinaryOperator,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Operand, ParseResult, TreeBuilder},
    },
};

impl TreeBuilder<'_> {
    /// Handles a binary operator at the cursor.
    ///
    /// All five operators share one path: the operand on top of the stack is
    /// the left side and the operand immediately after the operator is the
    /// right side. For `^` this means the exponent may be a literal
    /// (including a negative one, which the lexer has already folded) or a
    /// parenthesized group.
    ///
    /// # Errors
    /// - `InsufficientOperands` if the stack is empty or the operator is the
    ///   last token.
    /// - `NestingTooDeep` when the combined tree grows too tall.
    /// - Any error from [`Self::right_operand`].
    pub(in crate::interpreter::parser) fn binary(&mut self, op: BinaryOperator) -> ParseResult<()> {
        let next = self.cursor + 1;
        if next >= self.tokens.len() {
            return Err(ParseError::InsufficientOperands);
        }
        let left = self.pop()?;

        let (right, after) = self.right_operand(next)?;
        self.push(Operand::binary(op, left, right))?;
        self.cursor = after;
        Ok(())
    }

    /// Resolves the right-hand operand that starts at `index`.
    ///
    /// Only a number or a parenthesized group may follow a binary operator;
    /// function calls and further operators are rejected rather than parsed.
    ///
    /// # Returns
    /// The operand and the index of the first token after it.
    ///
    /// # Errors
    /// - `UnexpectedToken` when the token at `index` cannot start an operand.
    /// - `UnbalancedParentheses` when the group is never closed.
    fn right_operand(&self, index: usize) -> ParseResult<(Operand, usize)> {
        match self.tokens.get(index) {
            Some(Token::Number(value)) => Ok((Operand::constant(*value), index + 1)),
            Some(Token::LParen) => {
                let (group, close) = self.group(index)?;
                Ok((group, close + 1))
            },
            Some(&token) => Err(ParseError::UnexpectedToken { token }),
            None => Err(ParseError::InsufficientOperands),
        }
    }
}
