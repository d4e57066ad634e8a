use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// Two floats are handed to [`Context::eval_float_op`]. Two `nil`s yield
    /// `nil` without applying the operator. A float paired with `nil` is a
    /// type mismatch; there is no implicit coercion.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use gune::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, Value::Float(3.0), Value::Float(4.0), 1);
    /// assert_eq!(result, Ok(Value::Float(7.0)));
    ///
    /// let result = Context::eval_binary(BinaryOperator::Ampersand, Value::Nil, Value::Nil, 1);
    /// assert_eq!(result, Ok(Value::Nil));
    ///
    /// assert!(Context::eval_binary(BinaryOperator::Add, Value::Float(1.0), Value::Nil, 1).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: Value,
                       right: Value,
                       line: usize)
                       -> EvalResult<Value> {
        match (left, right) {
            (Value::Float(l), Value::Float(r)) => Self::eval_float_op(op, l, r, line),
            (Value::Nil, Value::Nil) => Ok(Value::Nil),
            (Value::Float(_), Value::Nil) | (Value::Nil, Value::Float(_)) => {
                Err(RuntimeError::TypeMismatch { op,
                                                 left: left.kind(),
                                                 right: right.kind(),
                                                 line })
            },
        }
    }
}
