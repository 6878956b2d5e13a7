use crate::{
    ast::{Node, UnaryFunction},
    interpreter::evaluator::{
        core::EvalResult,
        function::{builtin, reciprocal, sqrt},
    },
};

/// Applies a function to an already evaluated operand.
///
/// The match is exhaustive over [`UnaryFunction`], so adding a function to
/// the AST without giving it semantics does not compile.
///
/// # Parameters
/// - `function`: The function to apply.
/// - `x`: The operand value.
///
/// # Errors
/// - `CotUndefined` from `cot`.
/// - `NegativeSqrt` from `sqrt`.
/// - `NegativeFactorial` from the factorial.
///
/// # Example
/// ```
/// use treecalc::{ast::UnaryFunction, interpreter::evaluator::function::core::apply};
///
/// assert_eq!(apply(UnaryFunction::Sqrt, 16.0), Ok(4.0));
/// assert_eq!(apply(UnaryFunction::Factorial, 4.0), Ok(24.0));
/// ```
pub fn apply(function: UnaryFunction, x: f64) -> EvalResult<f64> {
    use UnaryFunction::{
        Cos, Cosh, Cot, Coth, Csch, Factorial, Ln, Log, Sech, Sin, Sinh, Sqrt, Tan, Tanh,
    };

    Ok(match function {
        Sin => builtin::sin(x),
        Cos => builtin::cos(x),
        Tan => builtin::tan(x),
        Cot => reciprocal::cot(x)?,
        Ln => builtin::ln(x),
        Log => builtin::log(x),
        Sqrt => sqrt::sqrt(x)?,
        Sinh => builtin::sinh(x),
        Cosh => builtin::cosh(x),
        Tanh => builtin::tanh(x),
        Coth => reciprocal::coth(x),
        Sech => reciprocal::sech(x),
        Csch => reciprocal::csch(x),
        Factorial => Node::eval_factorial(x)?,
    })
}
