use crate::{
    ast::{Expr, Program},
    error::RuntimeError,
    interpreter::{
        environment::{Environment, FrameId},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// A context pairs an [`Environment`] with the frame that name lookups start
/// from. Evaluation never changes the environment, so the same context can
/// evaluate any number of trees.
///
/// ## Usage
///
/// ```
/// use gune::{
///     interpreter::{
///         environment::Environment, evaluator::core::Context, lexer::tokenize,
///         parser::core::parse, value::core::Value,
///     },
/// };
///
/// let mut environment = Environment::new();
/// let root = environment.root();
/// environment.declare(root, "x", Value::Float(2.0)).unwrap();
///
/// let program = parse(&tokenize("(x + 3) * 4").unwrap()).unwrap();
/// let context = Context::new(&environment, root);
///
/// assert_eq!(context.eval_program(&program), Ok(Value::Float(20.0)));
/// ```
pub struct Context<'env> {
    environment: &'env Environment,
    frame:       FrameId,
}

impl<'env> Context<'env> {
    /// Creates a context that resolves names starting at `frame`.
    #[must_use]
    pub const fn new(environment: &'env Environment, frame: FrameId) -> Self {
        Self { environment,
               frame }
    }

    /// Evaluates every expression of a program in order.
    ///
    /// The result is the value of the last expression, or `Nil` for an empty
    /// program. The first failure aborts the remaining expressions.
    pub fn eval_program(&self, program: &Program) -> EvalResult<Value> {
        program.body
               .iter()
               .try_fold(Value::Nil, |_, expr| self.eval(expr))
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Binary
    /// operands are evaluated left first, then right, both in full, before
    /// they are combined.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::NumericLiteral { value, .. } => Ok(Value::from(*value)),
            Expr::NilLiteral { .. } => Ok(Value::Nil),
            Expr::Identifier { symbol, line } => self.eval_identifier(symbol, *line),
            Expr::BinaryExpression { left,
                                     op,
                                     right,
                                     line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right, *line)
            },
        }
    }

    /// Looks up a variable by name, starting at the context's frame.
    fn eval_identifier(&self, symbol: &str, line: usize) -> EvalResult<Value> {
        self.environment
            .lookup(self.frame, symbol)
            .map_err(|e| e.at_line(line))
    }
}
