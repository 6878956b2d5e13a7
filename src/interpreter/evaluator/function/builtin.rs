/// Defines a one-argument builtin that forwards to an `f64` method.
///
/// The generated functions cannot fail: out-of-domain input produces the NaN
/// or infinity that the `f64` method defines (`ln(-1)` is NaN, `ln(0)` is
/// negative infinity).
///
/// # Example
/// ```
/// use treecalc::interpreter::evaluator::function::builtin::{cos, log, sin};
///
/// assert_eq!(sin(0.0), 0.0);
/// assert_eq!(cos(0.0), 1.0);
/// assert_eq!(log(100.0), 2.0);
/// ```
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident, $doc:literal) => {
        #[doc = $doc]
        #[must_use]
        pub fn $fname(x: f64) -> f64 {
            x.$real_fn()
        }
    };
}

real_builtin!(sin, sin, "Sine of `x` radians.");
real_builtin!(cos, cos, "Cosine of `x` radians.");
real_builtin!(tan, tan, "Tangent of `x` radians.");
real_builtin!(ln, ln, "Natural logarithm of `x`.");
real_builtin!(log, log10, "Base-10 logarithm of `x`.");
real_builtin!(sinh, sinh, "Hyperbolic sine of `x`.");
real_builtin!(cosh, cosh, "Hyperbolic cosine of `x`.");
real_builtin!(tanh, tanh, "Hyperbolic tangent of `x`.");
