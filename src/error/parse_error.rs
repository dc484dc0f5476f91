use std::fmt;

use thiserror::Error;

use crate::interpreter::lexer::{Token, TokenKind};

/// Where in the token stream a parse error was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorLocation {
    /// At a concrete token, identified by its lexeme.
    AtToken(String),
    /// At the end of input (the `EOF` token).
    AtEnd,
}

impl fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AtToken(lexeme) => write!(f, " at '{lexeme}'"),
            Self::AtEnd => write!(f, " at end"),
        }
    }
}

/// Represents an error raised when tokens do not match the grammar.
///
/// Parse errors are reported as `[line N] Error at '<lexeme>': <message>`, or
/// `[line N] Error at end: <message>` when the parser ran into `EOF`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[line {line}] Error{location}: {message}")]
pub struct ParseError {
    /// What the parser expected.
    pub message:  String,
    /// The token the parser was looking at.
    pub location: ErrorLocation,
    /// The source line where the error occurred.
    pub line:     usize,
}

impl ParseError {
    /// Creates a parse error anchored at `token`.
    ///
    /// # Example
    /// ```
    /// use lox::{error::ParseError, interpreter::lexer::scan};
    ///
    /// let (tokens, _) = scan(")");
    /// let error = ParseError::at(&tokens[0], "Expect expression.");
    ///
    /// assert_eq!(error.to_string(), "[line 1] Error at ')': Expect expression.");
    /// ```
    #[must_use]
    pub fn at(token: &Token, message: &str) -> Self {
        let location = if token.kind == TokenKind::Eof {
            ErrorLocation::AtEnd
        } else {
            ErrorLocation::AtToken(token.lexeme.clone())
        };

        Self { message: message.to_string(),
               location,
               line: token.line }
    }
}
