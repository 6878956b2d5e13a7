use tracing::{debug, trace};

use crate::{
    ast::{BinaryOperator, Node, UnaryFunction},
    error::ParseError,
    interpreter::{lexer::Token, lexer::tokenize, parser::utils::matching_paren},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum depth of nested groups and function operands.
///
/// Every parenthesized group and every function operand is built by a
/// recursive builder; the limit keeps hostile input from exhausting the
/// stack.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Maximum height of a built tree, as measured by [`Node::height`].
///
/// Each fold stacks one node on top of the operand to its left, so a flat
/// chain such as `1 + 1 + ... + 1` or `0!!!...!` grows the tree by one level
/// per operator. Evaluating, printing and dropping a tree all recurse over
/// its height, so taller trees are rejected while building.
pub const MAX_TREE_HEIGHT: usize = 512;

/// Parses an expression string into a tree.
///
/// This is the entry point for parsing: it tokenizes `source` and builds the
/// token sequence into a single rooted [`Node`].
///
/// # Errors
/// Returns `ParseError::Lex` when tokenizing fails and any other
/// [`ParseError`] raised by [`build`].
///
/// # Example
/// ```
/// use treecalc::interpreter::parser::core::parse;
///
/// let tree = parse("(3.5 + 3.2) * 2").unwrap();
/// assert_eq!(tree.to_string(), "((3.5 + 3.2) * 2)");
/// ```
pub fn parse(source: &str) -> ParseResult<Node> {
    let tokens = tokenize(source)?;
    debug!(source, tokens = tokens.len(), "parsing expression");
    let tree = build(&tokens)?;
    debug!(height = tree.height(), "built tree");
    Ok(tree)
}

/// Builds a token sequence into a single rooted tree.
///
/// The tokens are consumed strictly left to right. Operands are pushed onto a
/// stack; a binary operator pops the one operand to its left and combines it
/// with the operand immediately to its right. There is no precedence
/// climbing, so `1 + 2 * 3` is `(1 + 2) * 3`.
///
/// # Errors
/// The first structural problem aborts the build:
/// - `InsufficientOperands` when an operator has nothing to work on.
/// - `UnbalancedParentheses` when a `(` is never closed.
/// - `MissingParenAfterFunction` when a function requiring `(` lacks it.
/// - `UnexpectedToken` for tokens that cannot appear where they are.
/// - `IncompleteExpression` when the stack does not end with one tree.
/// - `NestingTooDeep` past [`MAX_NESTING_DEPTH`] nested groups, or when the
///   tree would grow taller than [`MAX_TREE_HEIGHT`].
pub fn build(tokens: &[Token]) -> ParseResult<Node> {
    Ok(TreeBuilder::new(tokens, 0)?.build()?.node)
}

/// A built sub-tree together with its height.
///
/// Heights are combined as the tree is folded, following the definition of
/// [`Node::height`], so no fold has to walk the sub-trees it combines.
#[derive(Debug)]
pub(in crate::interpreter::parser) struct Operand {
    pub(in crate::interpreter::parser) node:   Node,
    pub(in crate::interpreter::parser) height: usize,
}

impl Operand {
    pub(in crate::interpreter::parser) const fn constant(value: f64) -> Self {
        Self { node:   Node::Constant(value),
               height: 1, }
    }

    pub(in crate::interpreter::parser) fn binary(op: BinaryOperator,
                                                 left: Self,
                                                 right: Self)
                                                 -> Self {
        Self { height: 1 + left.height.max(right.height),
               node:   Node::binary(op, left.node, right.node), }
    }

    pub(in crate::interpreter::parser) fn unary(function: UnaryFunction, operand: Self) -> Self {
        Self { height: 1 + operand.height,
               node:   Node::unary(function, operand.node), }
    }
}

/// Operand-stack state for building one token window.
///
/// Sub-expressions (groups, function operands) get a builder of their own
/// over the slice of tokens they span, one level deeper.
pub(in crate::interpreter::parser) struct TreeBuilder<'a> {
    pub(in crate::interpreter::parser) tokens:   &'a [Token],
    /// Index of the next token to consume.
    pub(in crate::interpreter::parser) cursor:   usize,
    pub(in crate::interpreter::parser) operands: Vec<Operand>,
    pub(in crate::interpreter::parser) depth:    usize,
}

impl<'a> TreeBuilder<'a> {
    pub(in crate::interpreter::parser) fn new(tokens: &'a [Token],
                                              depth: usize)
                                              -> ParseResult<Self> {
        if depth > MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH });
        }

        Ok(Self { tokens,
                  cursor: 0,
                  operands: Vec::new(),
                  depth })
    }

    /// Consumes every token of the window and returns the single tree left on
    /// the operand stack.
    pub(in crate::interpreter::parser) fn build(mut self) -> ParseResult<Operand> {
        while let Some(&token) = self.tokens.get(self.cursor) {
            debug!(%token, position = self.cursor, depth = self.depth, "consuming token");

            match token {
                Token::Number(value) => {
                    self.push(Operand::constant(value))?;
                    self.cursor += 1;
                },
                Token::LParen => {
                    let (group, close) = self.group(self.cursor)?;
                    self.push(group)?;
                    self.cursor = close + 1;
                },
                Token::Operator(op) => self.binary(op)?,
                Token::Function(function) => self.function(function)?,
                Token::Bang => self.factorial()?,
                Token::RParen => return Err(ParseError::UnexpectedToken { token }),
            }

            trace!(operands = self.operands.len(), "operand stack");
        }

        if self.operands.len() != 1 {
            return Err(ParseError::IncompleteExpression);
        }
        self.operands.pop().ok_or(ParseError::IncompleteExpression)
    }

    /// Pushes an operand, rejecting it if it is taller than
    /// [`MAX_TREE_HEIGHT`].
    pub(in crate::interpreter::parser) fn push(&mut self, operand: Operand) -> ParseResult<()> {
        if operand.height > MAX_TREE_HEIGHT {
            return Err(ParseError::NestingTooDeep { limit: MAX_TREE_HEIGHT });
        }
        self.operands.push(operand);
        Ok(())
    }

    /// Pops the operand to the left of the current token.
    pub(in crate::interpreter::parser) fn pop(&mut self) -> ParseResult<Operand> {
        self.operands
            .pop()
            .ok_or(ParseError::InsufficientOperands)
    }

    /// Builds the group opened by the `(` at `open` and returns it together
    /// with the index of its closing `)`.
    pub(in crate::interpreter::parser) fn group(&self,
                                                open: usize)
                                                -> ParseResult<(Operand, usize)> {
        let close = matching_paren(self.tokens, open)?;
        let operand = self.nested(&self.tokens[open + 1..close])?;
        Ok((operand, close))
    }

    /// Builds a sub-window one nesting level deeper.
    pub(in crate::interpreter::parser) fn nested(&self, tokens: &[Token]) -> ParseResult<Operand> {
        TreeBuilder::new(tokens, self.depth + 1)?.build()
    }
}
