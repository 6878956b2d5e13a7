/// Represents a binary operator.
///
/// All binary operators are arithmetic and operate on `f64` values.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

/// Represents a function applied to a single operand.
///
/// Every named function of the expression language is listed here, together
/// with the postfix factorial, which shares the one-operand node shape.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryFunction {
    /// Sine, in radians (`sin`)
    Sin,
    /// Cosine, in radians (`cos`)
    Cos,
    /// Tangent, in radians (`tan`)
    Tan,
    /// Cotangent, in radians (`cot`)
    Cot,
    /// Natural logarithm (`ln`)
    Ln,
    /// Base-10 logarithm (`log`)
    Log,
    /// Square root (`sqrt`)
    Sqrt,
    /// Hyperbolic sine (`sinh`)
    Sinh,
    /// Hyperbolic cosine (`cosh`)
    Cosh,
    /// Hyperbolic tangent (`tanh`)
    Tanh,
    /// Hyperbolic cotangent (`coth`)
    Coth,
    /// Hyperbolic secant (`sech`)
    Sech,
    /// Hyperbolic cosecant (`csch`)
    Csch,
    /// Postfix factorial (`!`)
    Factorial,
}

impl UnaryFunction {
    /// Returns the spelling of the function in source text.
    ///
    /// # Example
    /// ```
    /// use treecalc::ast::UnaryFunction;
    ///
    /// assert_eq!(UnaryFunction::Sqrt.name(), "sqrt");
    /// assert_eq!(UnaryFunction::Factorial.name(), "!");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Cot => "cot",
            Self::Ln => "ln",
            Self::Log => "log",
            Self::Sqrt => "sqrt",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Coth => "coth",
            Self::Sech => "sech",
            Self::Csch => "csch",
            Self::Factorial => "!",
        }
    }

    /// Whether the function may take a single bare token as its operand.
    ///
    /// `ln`, `log` and `sqrt` accept `ln5` as well as `ln(5)`; the
    /// trigonometric and hyperbolic functions always require parentheses.
    #[must_use]
    pub const fn accepts_bare_operand(self) -> bool {
        matches!(self, Self::Ln | Self::Log | Self::Sqrt)
    }
}

/// A node of an expression tree.
///
/// Each node exclusively owns its children, so a tree has exactly one root
/// and no sharing. Trees are produced by [`crate::parse`] and are immutable
/// afterwards; [`Node::evaluate`] computes their value.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A numeric constant.
    Constant(f64),
    /// A binary arithmetic operation.
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// A function applied to one operand, including the factorial.
    Unary {
        /// The function to apply.
        function: UnaryFunction,
        /// The operand expression.
        operand:  Box<Self>,
    },
}

impl Node {
    /// Creates a binary node owning both operands.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::Binary { op,
                       left: Box::new(left),
                       right: Box::new(right) }
    }

    /// Creates a unary node owning its operand.
    #[must_use]
    pub fn unary(function: UnaryFunction, operand: Self) -> Self {
        Self::Unary { function,
                      operand: Box::new(operand) }
    }

    /// Returns the number of nodes on the longest path from `self` to a leaf,
    /// counting both ends.
    ///
    /// ## Example
    /// ```
    /// use treecalc::ast::{BinaryOperator, Node};
    ///
    /// let tree = Node::binary(BinaryOperator::Add, Node::Constant(1.0), Node::Constant(2.0));
    ///
    /// assert_eq!(tree.height(), 2);
    /// assert_eq!(Node::Constant(1.0).height(), 1);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        match self {
            Self::Constant(_) => 1,
            Self::Binary { left, right, .. } => 1 + left.height().max(right.height()),
            Self::Unary { operand, .. } => 1 + operand.height(),
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Renders the tree in fully parenthesized infix form, so the grouping the
/// builder chose is visible: `(1 + 2) * 3` is shown as `((1 + 2) * 3)`.
impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{value}"),
            Self::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
            Self::Unary { function: UnaryFunction::Factorial,
                          operand, } => write!(f, "({operand})!"),
            Self::Unary { function, operand } => match operand.as_ref() {
                Self::Binary { .. } => write!(f, "{function}{operand}"),
                _ => write!(f, "{function}({operand})"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_fully_parenthesized() {
        let tree = Node::binary(BinaryOperator::Mul,
                                Node::binary(BinaryOperator::Add,
                                             Node::Constant(3.5),
                                             Node::Constant(3.2)),
                                Node::Constant(2.0));

        assert_eq!(tree.to_string(), "((3.5 + 3.2) * 2)");
    }

    #[test]
    fn displays_functions_and_factorial() {
        let sine = Node::unary(UnaryFunction::Sin, Node::Constant(0.0));
        assert_eq!(sine.to_string(), "sin(0)");

        let grouped = Node::unary(UnaryFunction::Sqrt,
                                  Node::binary(BinaryOperator::Sub,
                                               Node::Constant(9.0),
                                               Node::Constant(-7.0)));
        assert_eq!(grouped.to_string(), "sqrt(9 - -7)");

        let factorial = Node::unary(UnaryFunction::Factorial, Node::Constant(5.0));
        assert_eq!(factorial.to_string(), "(5)!");
    }

    #[test]
    fn only_log_functions_accept_bare_operands() {
        assert!(UnaryFunction::Ln.accepts_bare_operand());
        assert!(UnaryFunction::Log.accepts_bare_operand());
        assert!(UnaryFunction::Sqrt.accepts_bare_operand());
        assert!(!UnaryFunction::Sin.accepts_bare_operand());
        assert!(!UnaryFunction::Csch.accepts_bare_operand());
        assert!(!UnaryFunction::Factorial.accepts_bare_operand());
    }
}
