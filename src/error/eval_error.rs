#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression tree.
pub enum EvalError {
    /// The right operand of a division evaluated to zero.
    DivisionByZero,
    /// The cotangent is undefined because `tan(x)` is zero.
    CotUndefined,
    /// Tried to take the square root of a negative number.
    NegativeSqrt,
    /// Tried to take the factorial of a negative number.
    NegativeFactorial,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Error: Division by zero."),
            Self::CotUndefined => write!(f, "Error: Cotangent is undefined where tan is zero."),
            Self::NegativeSqrt => {
                write!(f, "Error: The square root of a negative number cannot be taken.")
            },
            Self::NegativeFactorial => {
                write!(f, "Error: Factorial is not defined for negative numbers.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
