use std::io::Write;

use crate::{
    ast::UnaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates a unary operation on a value.
    ///
    /// - `-x` negates a number.
    /// - `!x` returns the negated truthiness of any value.
    ///
    /// # Parameters
    /// - `op`: The unary operator.
    /// - `value`: The operand, already evaluated.
    /// - `line`: Line of the operator, used in errors.
    ///
    /// # Errors
    /// Returns "Operand must be a number." when `-` is applied to a
    /// non-number.
    ///
    /// # Example
    /// ```
    /// use lox::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let negated = Interpreter::<Vec<u8>>::eval_unary(UnaryOperator::Negate,
    ///                                                  &Value::Number(3.0),
    ///                                                  1).unwrap();
    /// assert_eq!(negated, Value::Number(-3.0));
    ///
    /// let not = Interpreter::<Vec<u8>>::eval_unary(UnaryOperator::Not, &Value::Nil, 1).unwrap();
    /// assert_eq!(not, Value::Bool(true));
    ///
    /// assert!(Interpreter::<Vec<u8>>::eval_unary(UnaryOperator::Negate,
    ///                                            &Value::from("x"),
    ///                                            1).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => {
                let n = value.as_number("Operand must be a number.", line)?;
                Ok(Value::Number(-n))
            },
            UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
        }
    }
}
