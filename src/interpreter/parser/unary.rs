use std::slice;

use crate::{
    ast::UnaryFunction,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Operand, ParseResult, TreeBuilder},
    },
};

impl TreeBuilder<'_> {
    /// Handles a named function at the cursor.
    ///
    /// A `(` after the name makes the whole group the operand. Without one,
    /// `ln`, `log` and `sqrt` take the single next token as their operand,
    /// built on its own (`ln5`, `sqrt 16`); every other function requires the
    /// parenthesis.
    ///
    /// Grammar:
    /// ```text
    ///     function := name "(" tokens ")"
    ///               | ("ln" | "log" | "sqrt") token
    /// ```
    ///
    /// # Errors
    /// - `MissingParenAfterFunction` for a trigonometric or hyperbolic name not
    ///   followed by `(`.
    /// - `InsufficientOperands` for `ln`, `log` or `sqrt` with nothing after
    ///   them.
    /// - Any error from building the operand.
    pub(in crate::interpreter::parser) fn function(&mut self,
                                                   function: UnaryFunction)
                                                   -> ParseResult<()> {
        let next = self.cursor + 1;

        let (operand, after) = match self.tokens.get(next) {
            Some(Token::LParen) => {
                let (group, close) = self.group(next)?;
                (group, close + 1)
            },
            Some(token) if function.accepts_bare_operand() => {
                (self.nested(slice::from_ref(token))?, next + 1)
            },
            None if function.accepts_bare_operand() => {
                return Err(ParseError::InsufficientOperands);
            },
            _ => return Err(ParseError::MissingParenAfterFunction { function }),
        };

        self.push(Operand::unary(function, operand))?;
        self.cursor = after;
        Ok(())
    }

    /// Applies the postfix factorial to the operand on top of the stack.
    ///
    /// # Errors
    /// `InsufficientOperands` when the stack is empty, as in `!3`.
    pub(in crate::interpreter::parser) fn factorial(&mut self) -> ParseResult<()> {
        let operand = self.pop()?;
        self.push(Operand::unary(UnaryFunction::Factorial, operand))?;
        self.cursor += 1;
        Ok(())
    }
}
