/// The evaluator module computes the value of an expression tree.
///
/// Evaluation is a single post-order traversal: children are evaluated first,
/// then the node's operator or function is applied to their values. Domain
/// violations such as division by zero are reported as typed errors.
///
/// # Responsibilities
/// - Evaluates every node variant to an `f64`.
/// - Implements the arithmetic, trigonometric, hyperbolic, logarithmic,
///   square root and factorial semantics.
/// - Reports evaluation errors without producing partial results.
pub mod evaluator;
/// The lexer module tokenizes expression text for further parsing.
///
/// The lexer reads the raw expression and produces a flat sequence of tokens:
/// numbers, operators, parentheses, function names and the factorial mark.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input characters into tokens.
/// - Folds a unary minus into the numeric literal it precedes.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The tree builder consumes the token sequence left to right with an explicit
/// operand stack, recursively resolving parenthesized groups and function
/// arguments into sub-trees.
///
/// # Responsibilities
/// - Converts tokens into a single rooted [`crate::ast::Node`].
/// - Matches parentheses and slices out sub-expressions.
/// - Reports structural errors such as missing operands.
pub mod parser;
