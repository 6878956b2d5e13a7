/// Dispatch of binary operators.
///
/// Routes each operator to its arithmetic implementation.
pub mod core;
/// Exponentiation.
///
/// Real-valued power with the usual `powf` semantics.
pub mod power;
/// Scalar division.
///
/// Division with its explicit zero-divisor check.
pub mod scalar;
