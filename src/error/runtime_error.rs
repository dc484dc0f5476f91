use thiserror::Error;

/// Represents all errors that can occur during evaluation and execution.
///
/// Runtime errors render as the message followed by the source line on its
/// own row, e.g. `Operand must be a number.\n[line 1]`.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// An operator was applied to operands of the wrong type.
    #[error("{message}\n[line {line}]")]
    TypeMismatch {
        /// Which operand types the operator needed.
        message: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Attempted division by zero.
    #[error("Division by zero.\n[line {line}]")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Read or assigned a variable that no enclosing scope defines.
    #[error("Undefined variable '{name}'.\n[line {line}]")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing `print` output failed.
    #[error("Could not write program output: {source}")]
    Output {
        /// The underlying I/O failure.
        #[from]
        source: std::io::Error,
    },
}

impl RuntimeError {
    /// Builds a [`RuntimeError::TypeMismatch`].
    pub(crate) fn type_mismatch(message: &str, line: usize) -> Self {
        Self::TypeMismatch { message: message.to_string(),
                             line }
    }

    /// Gets the line number from `self`, if the error is tied to source code.
    ///
    /// # Example
    /// ```
    /// use lox::error::RuntimeError;
    ///
    /// let error = RuntimeError::DivisionByZero { line: 4 };
    /// assert_eq!(error.line(), Some(4));
    /// ```
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::TypeMismatch { line, .. }
            | Self::DivisionByZero { line }
            | Self::UndefinedVariable { line, .. } => Some(*line),
            Self::Output { .. } => None,
        }
    }
}
