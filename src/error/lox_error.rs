use std::io;

use thiserror::Error;

use crate::error::{ParseError, RuntimeError, ScanError};

/// Exit status when the driver could not write its own output.
pub const EXIT_OUTPUT: i32 = 1;
/// Exit status for programs rejected before execution.
pub const EXIT_SYNTAX: i32 = 65;
/// Exit status for programs that failed while running.
pub const EXIT_RUNTIME: i32 = 70;

/// An error found before execution: while scanning or while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// The lexer rejected part of the source.
    #[error(transparent)]
    Scan(#[from] ScanError),
    /// The parser rejected part of the token stream.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl SyntaxError {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Scan(error) => error.line(),
            Self::Parse(error) => error.line,
        }
    }
}

/// Everything that can stop a source string from producing its result.
#[derive(Debug, Error)]
pub enum Error {
    /// One or more scan or parse errors; nothing was executed.
    #[error("{}", render_all(.0))]
    Syntax(Vec<SyntaxError>),
    /// Execution stopped at the first runtime error.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// Tokens, trees or values could not be written out.
    #[error("Could not write output: {0}")]
    Output(#[from] io::Error),
}

impl Error {
    /// Collects scan and parse errors into a [`Error::Syntax`], scan errors
    /// first. Returns `None` when both lists are empty.
    #[must_use]
    pub fn from_phases(scan_errors: Vec<ScanError>, parse_errors: Vec<ParseError>) -> Option<Self> {
        let errors: Vec<SyntaxError> = scan_errors.into_iter()
                                                  .map(SyntaxError::from)
                                                  .chain(parse_errors.into_iter()
                                                                     .map(SyntaxError::from))
                                                  .collect();

        if errors.is_empty() {
            None
        } else {
            Some(Self::Syntax(errors))
        }
    }

    /// Returns the process exit status a driver should report.
    ///
    /// Failing to write output is not the program's fault, so it maps to the
    /// generic failure status even when `print` hit it mid-run.
    ///
    /// # Example
    /// ```
    /// use lox::error::{Error, RuntimeError};
    ///
    /// let error = Error::from(RuntimeError::DivisionByZero { line: 1 });
    /// assert_eq!(error.exit_code(), 70);
    ///
    /// let error = Error::from(std::io::Error::other("closed"));
    /// assert_eq!(error.exit_code(), 1);
    /// ```
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Syntax(_) => EXIT_SYNTAX,
            Self::Runtime(RuntimeError::Output { .. }) | Self::Output(_) => EXIT_OUTPUT,
            Self::Runtime(_) => EXIT_RUNTIME,
        }
    }

    /// Gets the source line of the first error, if it points at source code.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Syntax(errors) => errors.first().map(SyntaxError::line),
            Self::Runtime(error) => error.line(),
            Self::Output(_) => None,
        }
    }
}

fn render_all(errors: &[SyntaxError]) -> String {
    errors.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join("\n")
}
