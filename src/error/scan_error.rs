use thiserror::Error;

/// Represents all errors that can occur while scanning source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A character that cannot begin any token.
    #[error("[line {line}] Error: Unexpected character: {character}")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A string literal whose closing quote is missing.
    #[error("[line {line}] Error: Unterminated string.")]
    UnterminatedString {
        /// The line on which scanning ran out of input.
        line: usize,
    },
}

impl ScanError {
    /// Gets the line number from `self`.
    ///
    /// # Example
    /// ```
    /// use lox::error::ScanError;
    ///
    /// let error = ScanError::UnterminatedString { line: 3 };
    /// assert_eq!(error.line(), 3);
    /// ```
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. } | Self::UnterminatedString { line } => *line,
        }
    }
}
