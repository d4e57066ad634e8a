use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates an arithmetic operation on two floats.
    ///
    /// Division checks the divisor for zero explicitly and fails instead of
    /// producing an infinity or NaN. `&` has no numeric meaning.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use gune::{
    ///     ast::BinaryOperator,
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_float_op(BinaryOperator::Mul, 1.5, 2.0, 1);
    /// assert_eq!(result, Ok(Value::Float(3.0)));
    ///
    /// let result = Context::eval_float_op(BinaryOperator::Div, 5.0, 0.0, 1);
    /// assert_eq!(result, Err(RuntimeError::DivisionByZero { line: 1 }));
    /// ```
    pub fn eval_float_op(op: BinaryOperator,
                         left: f64,
                         right: f64,
                         line: usize)
                         -> EvalResult<Value> {
        use BinaryOperator::{Add, Ampersand, Div, Mul, Sub};

        Ok(Value::Float(match op {
                            Add => left + right,
                            Sub => left - right,
                            Mul => left * right,
                            Div => {
                                if right == 0.0 {
                                    return Err(RuntimeError::DivisionByZero { line });
                                }
                                left / right
                            },
                            Ampersand => {
                                return Err(RuntimeError::UnsupportedOperator { op, line });
                            },
                        }))
    }
}
