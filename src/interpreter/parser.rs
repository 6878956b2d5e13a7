/// Core tree-building logic.
///
/// Contains the entry points [`core::parse`] and [`core::build`], the
/// operand-stack driven builder and the nesting limit.
pub mod core;

/// Binary operator handling.
///
/// Pops the left operand, resolves the immediate right operand and combines
/// them for `+`, `-`, `*`, `/` and `^`.
pub mod binary;

/// Function and factorial handling.
///
/// Resolves the operand of named functions and applies the postfix
/// factorial to the operand on top of the stack.
pub mod unary;

/// Parser utilities.
///
/// Parenthesis matching shared by groups, right operands and function
/// arguments.
pub mod utils;
