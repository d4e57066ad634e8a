/// The root of a parsed piece of source text.
///
/// A program is a flat sequence of expressions. Evaluating it evaluates every
/// expression in order and yields the value of the last one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The top-level expressions in source order.
    pub body: Vec<Expr>,
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Every variant records the source line it starts on for error reporting.
/// Children are owned by their parent node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `42`.
    NumericLiteral {
        /// The literal value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// The `nil` literal.
    NilLiteral {
        /// Line number in the source code.
        line: usize,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        symbol: String,
        /// Line number in the source code.
        line:   usize,
    },
    /// A binary operation such as `a + b`.
    BinaryExpression {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use gune::ast::Expr;
    ///
    /// let expr = Expr::Identifier { symbol: "x".to_string(),
    ///                               line:   5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::NumericLiteral { line, .. }
            | Self::NilLiteral { line }
            | Self::Identifier { line, .. }
            | Self::BinaryExpression { line, .. } => *line,
        }
    }
}

/// Represents a binary operator.
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
    /// Ampersand (`&`). Parsed at multiplicative precedence, but numbers give
    /// it no meaning.
    Ampersand,
}

impl BinaryOperator {
    /// Maps an operator symbol to its operator.
    ///
    /// # Example
    /// ```
    /// use gune::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol("/"), Some(BinaryOperator::Div));
    /// assert_eq!(BinaryOperator::from_symbol("%"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "&" => Some(Self::Ampersand),
            _ => None,
        }
    }

    /// Returns `true` for the operators parsed at additive precedence.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }

    /// Returns `true` for the operators parsed at multiplicative precedence.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div | Self::Ampersand)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Ampersand => "&",
        };
        write!(f, "{operator}")
    }
}
