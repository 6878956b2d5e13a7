use crate::ast::Node;

impl Node {
    /// Evaluates an exponentiation operation.
    ///
    /// Uses `powf` for every operand pair, so fractional and negative
    /// exponents work and a negative base with a fractional exponent yields
    /// NaN rather than an error.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    ///
    /// # Returns
    /// The result of `base ^ exponent`.
    ///
    /// # Example
    /// ```
    /// use treecalc::ast::Node;
    ///
    /// assert_eq!(Node::eval_pow(2.0, 3.0), 8.0);
    /// assert!((Node::eval_pow(2.0, -0.5) - 0.707_106_781).abs() < 1e-9);
    /// assert!(Node::eval_pow(-8.0, 1.0 / 3.0).is_nan());
    /// ```
    #[must_use]
    pub fn eval_pow(base: f64, exponent: f64) -> f64 {
        base.powf(exponent)
    }
}
