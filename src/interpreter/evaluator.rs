/// Core evaluation logic.
///
/// Contains the post-order traversal that evaluates a tree and the result
/// type shared by every evaluation routine.
pub mod core;

/// Unary operator evaluation.
///
/// Implements the postfix factorial.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements the arithmetic operators, including division by zero checks
/// and exponentiation.
pub mod binary;

/// Function evaluation.
///
/// Implements the named trigonometric, hyperbolic, logarithmic and square
/// root functions.
pub mod function;
