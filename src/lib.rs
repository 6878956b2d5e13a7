//! # treecalc
//!
//! treecalc is a small arithmetic expression evaluator written in Rust.
//! It tokenizes an expression, builds it into an explicit expression tree and
//! evaluates the tree to an `f64`, with support for the four arithmetic
//! operators, exponentiation, trigonometric, hyperbolic and logarithmic
//! functions, square roots and factorials.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Node` enum together with the operator and
/// function vocabularies. A tree is built by the parser, traversed by the
/// evaluator and can be printed back in fully parenthesized form.
///
/// # Responsibilities
/// - Defines the closed set of node kinds: constants, binary operations and
///   unary function applications.
/// - Gives every node exclusive ownership of its children.
/// - Renders trees for diagnostics.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Every failure is a typed value carrying enough detail for a readable
/// message; nothing in the library panics on bad input.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches source positions to lexical errors.
/// - Supports integration with the standard error traits.
pub mod error;
/// Orchestrates the pipeline from text to value.
///
/// This module ties together the lexer, the tree builder and the evaluator.
///
/// # Responsibilities
/// - Coordinates the three stages.
/// - Exposes each stage for callers that need intermediate results.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert `f64` operands to `u64` counts without silent data loss.
pub mod util;

pub use crate::{
    ast::Node,
    error::Error,
    interpreter::{lexer::tokenize, parser::core::parse},
};

/// Evaluates an expression string in one step.
///
/// This is shorthand for [`parse`] followed by [`Node::evaluate`]. Both
/// failure kinds are folded into [`Error`].
///
/// # Errors
/// `Error::Parse` when the text cannot be tokenized or built into a tree and
/// `Error::Eval` when evaluating the tree fails.
///
/// # Examples
/// ```
/// use treecalc::{Error, error::EvalError, evaluate};
///
/// assert_eq!(evaluate("-5 + 2"), Ok(-3.0));
/// assert_eq!(evaluate("5!"), Ok(120.0));
///
/// // Strictly left to right: this is (1 + 2) * 3.
/// assert_eq!(evaluate("1 + 2 * 3"), Ok(9.0));
///
/// assert_eq!(evaluate("sqrt(-1)"), Err(Error::Eval(EvalError::NegativeSqrt)));
/// assert!(matches!(evaluate("(1 + 2"), Err(Error::Parse(_))));
/// ```
pub fn evaluate(source: &str) -> Result<f64, Error> {
    Ok(parse(source)?.evaluate()?)
}
