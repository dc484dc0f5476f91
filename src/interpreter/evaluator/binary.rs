use std::io::Write;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

const NUMBERS_REQUIRED: &str = "Operands must be numbers.";
const NUMBERS_OR_STRINGS_REQUIRED: &str = "Operands must be two numbers or two strings.";

impl<W: Write> Interpreter<W> {
    /// Evaluates a binary operation on two values.
    ///
    /// Supports:
    /// - Arithmetic on numbers (`-`, `*`, `/`) and addition (`+`).
    /// - String concatenation with `+` when both operands are strings.
    /// - Numeric comparisons (`<`, `<=`, `>`, `>=`), producing booleans.
    /// - Equality (`==`, `!=`) on any pair of values; values of different
    ///   types are never equal.
    ///
    /// # Parameters
    /// - `op`: The binary operator.
    /// - `left`: Left operand, already evaluated.
    /// - `right`: Right operand, already evaluated.
    /// - `line`: Line of the operator, used in errors.
    ///
    /// # Returns
    /// The resulting value.
    ///
    /// # Errors
    /// - `TypeMismatch` when the operand types do not fit the operator.
    /// - `DivisionByZero` when dividing by `0`.
    ///
    /// # Example
    /// ```
    /// use lox::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// type Eval = Interpreter<Vec<u8>>;
    ///
    /// let sum = Eval::eval_binary(BinaryOperator::Add, &1.0.into(), &2.0.into(), 1).unwrap();
    /// assert_eq!(sum, Value::Number(3.0));
    ///
    /// let eq = Eval::eval_binary(BinaryOperator::Equal, &1.0.into(), &"1".into(), 1).unwrap();
    /// assert_eq!(eq, Value::Bool(false));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };

        match op {
            Add => Self::eval_add(left, right, line),
            Sub | Mul | Div => {
                let (l, r) = Self::number_operands(left, right, line)?;
                match op {
                    Sub => Ok(Value::Number(l - r)),
                    Mul => Ok(Value::Number(l * r)),
                    _ => {
                        if r == 0.0 {
                            return Err(RuntimeError::DivisionByZero { line });
                        }
                        Ok(Value::Number(l / r))
                    },
                }
            },
            Less | Greater | LessEqual | GreaterEqual => {
                let (l, r) = Self::number_operands(left, right, line)?;
                let result = match op {
                    Less => l < r,
                    Greater => l > r,
                    LessEqual => l <= r,
                    _ => l >= r,
                };
                Ok(Value::Bool(result))
            },
            Equal => Ok(Value::Bool(left == right)),
            NotEqual => Ok(Value::Bool(left != right)),
        }
    }

    fn eval_add(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        match (left, right) {
            (Value::Number(l), Value::Number(r)) => Ok(Value::Number(l + r)),
            (Value::String(l), Value::String(r)) => Ok(Value::String(format!("{l}{r}"))),
            _ => Err(RuntimeError::type_mismatch(NUMBERS_OR_STRINGS_REQUIRED, line)),
        }
    }

    /// Extracts both operands as numbers.
    fn number_operands(left: &Value, right: &Value, line: usize) -> EvalResult<(f64, f64)> {
        Ok((left.as_number(NUMBERS_REQUIRED, line)?, right.as_number(NUMBERS_REQUIRED, line)?))
    }
}
