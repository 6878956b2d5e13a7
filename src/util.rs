/// Numeric conversion helpers.
///
/// This module provides safe functions for converting floating-point values
/// to integers without risking silent data loss or rounding errors.
/// Use these helpers whenever an `f64` operand has to be treated as an integer
/// count, as the factorial does.
///
/// All functions return a `Result`, which is `Ok` if the conversion is lossless
/// and valid, or the caller-supplied error otherwise.
pub mod num;
