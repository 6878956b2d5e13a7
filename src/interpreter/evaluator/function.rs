/// Built-in function implementations.
///
/// Thin wrappers over the `f64` trigonometric, hyperbolic and logarithmic
/// functions that cannot fail.
pub mod builtin;
/// Reciprocal function implementations.
///
/// `cot`, `coth`, `sech` and `csch`, each the reciprocal of a builtin, with
/// their handling of a zero denominator.
pub mod reciprocal;
/// The `sqrt` (square root) function implementation.
///
/// Computes the square root of non-negative values.
pub mod sqrt;

/// Dispatch of named functions and the factorial.
pub mod core;
