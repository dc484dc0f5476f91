use std::io::Write;

use tracing::trace;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{environment::Environment, value::core::Value},
};

pub type EvalResult<T> = Result<T, RuntimeError>;

/// The state of a running program.
///
/// Owns the innermost environment (which in turn owns every enclosing one)
/// and the sink that `print` writes to.
pub struct Interpreter<W: Write> {
    pub environment: Environment,
    output:          W,
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter with an empty global scope.
    ///
    /// # Parameters
    /// - `output`: Where `print` statements write their lines.
    #[must_use]
    pub fn new(output: W) -> Self {
        Self { environment: Environment::new(),
               output }
    }

    /// Consumes the interpreter and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    pub(in crate::interpreter::evaluator) fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Evaluates an expression to a value.
    ///
    /// Operands are evaluated left to right before any operator checks them.
    /// An assignment updates the environment and evaluates to the assigned
    /// value.
    ///
    /// # Parameters
    /// - `expr`: The expression to evaluate.
    ///
    /// # Returns
    /// The resulting value.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised while evaluating `expr`.
    ///
    /// # Example
    /// ```
    /// use lox::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let mut interpreter = Interpreter::new(Vec::new());
    /// let expr = Expr::BinaryOp { left:  Box::new(Expr::Literal { value: "foo".into(),
    ///                                                             line:  1, }),
    ///                             op:    BinaryOperator::Add,
    ///                             right: Box::new(Expr::Literal { value: "bar".into(),
    ///                                                             line:  1, }),
    ///                             line:  1, };
    ///
    /// assert_eq!(interpreter.evaluate(&expr).unwrap(), Value::from("foobar"));
    /// ```
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Grouping { expr, .. } => self.evaluate(expr),
            Expr::UnaryOp { op, expr, line } => {
                let operand = self.evaluate(expr)?;
                Self::eval_unary(*op, &operand, *line)
            },
            Expr::BinaryOp { left, op, right, line } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
            Expr::Variable { name, line } => self.environment.get(name, *line),
            Expr::Assign { name, value, line } => {
                let value = self.evaluate(value)?;
                trace!(name, value = %value, "assign");
                self.environment.assign(name, value.clone(), *line)?;
                Ok(value)
            },
        }
    }
}
