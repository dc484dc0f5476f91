use std::{io::Write, mem};

use tracing::{debug, trace};

use crate::{
    ast::Statement,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Executes a program.
    ///
    /// Statements run in order. Execution stops at the first runtime error;
    /// output written before the error stays written.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised by any statement.
    ///
    /// # Example
    /// ```
    /// use lox::interpreter::{
    ///     evaluator::core::Interpreter,
    ///     lexer::scan,
    ///     parser::core::parse_program,
    /// };
    ///
    /// let (tokens, _) = scan("var a = 1; { var a = 2; print a; } print a;");
    /// let (program, _) = parse_program(&tokens);
    ///
    /// let mut interpreter = Interpreter::new(Vec::new());
    /// interpreter.run(&program).unwrap();
    ///
    /// assert_eq!(String::from_utf8(interpreter.into_output()).unwrap(), "2\n1\n");
    /// ```
    pub fn run(&mut self, statements: &[Statement]) -> EvalResult<()> {
        debug!(statements = statements.len(), "run started");
        statements.iter().try_for_each(|statement| self.execute(statement))
    }

    /// Executes a single statement.
    ///
    /// # Errors
    /// Returns a `RuntimeError` raised while evaluating the statement's
    /// expressions, or `RuntimeError::Output` when `print` cannot write.
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::Print { expr, line } => {
                let value = self.evaluate(expr)?;
                trace!(line, "print");
                writeln!(self.output(), "{value}")?;
            },
            Statement::Expression { expr, line } => {
                trace!(line, "expression statement");
                self.evaluate(expr)?;
            },
            Statement::VariableDeclaration { name,
                                             initializer,
                                             line, } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                trace!(name, line, kind = value.type_name(), "define");
                self.environment.define(name, value);
            },
            Statement::Block { statements, .. } => self.execute_block(statements)?,
        }
        Ok(())
    }

    /// Executes statements in a new scope nested in the current one.
    ///
    /// The enclosing scope is restored afterwards, also when a statement
    /// fails.
    fn execute_block(&mut self, statements: &[Statement]) -> EvalResult<()> {
        let enclosing = mem::take(&mut self.environment);
        self.environment = Environment::with_enclosing(enclosing);
        trace!(depth = self.environment.depth(), "scope entered");

        let result = statements.iter().try_for_each(|statement| self.execute(statement));

        self.environment = mem::take(&mut self.environment).into_enclosing();
        trace!(depth = self.environment.depth(), "scope left");

        result
    }
}
