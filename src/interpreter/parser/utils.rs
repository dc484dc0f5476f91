use std::iter::Peekable;

use crate::{
    error::{ErrorLocation, ParseError},
    interpreter::lexer::{Token, TokenKind},
};

/// Returns the next token without consuming it.
///
/// The token stream produced by the lexer always ends with `EOF`, so `None`
/// only shows up for hand-built streams that lack one.
pub(in crate::interpreter::parser) fn peek<'a, I>(tokens: &mut Peekable<I>) -> Option<&'a Token>
    where I: Iterator<Item = &'a Token> + Clone
{
    tokens.peek().copied()
}

/// Returns `true` once the stream is exhausted or positioned at `EOF`.
pub(in crate::interpreter::parser) fn is_at_end<'a, I>(tokens: &mut Peekable<I>) -> bool
    where I: Iterator<Item = &'a Token> + Clone
{
    peek(tokens).is_none_or(|token| token.kind == TokenKind::Eof)
}

/// Consumes the next token if it has the given kind.
///
/// # Returns
/// The consumed token, or `None` when the next token is of another kind. In
/// that case nothing is consumed.
pub(in crate::interpreter::parser) fn match_kind<'a, I>(tokens: &mut Peekable<I>,
                                                         kind: TokenKind)
                                                         -> Option<&'a Token>
    where I: Iterator<Item = &'a Token> + Clone
{
    tokens.next_if(|token| token.kind == kind)
}

/// Consumes a token of the expected kind or fails with `message`.
///
/// The error is reported at the token that was found instead, which is left
/// in the stream.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `kind`: The kind the next token must have.
/// - `message`: The message of the error raised on mismatch.
///
/// # Returns
/// The consumed token.
///
/// # Errors
/// Returns a `ParseError` located at the unexpected token, or at the end of
/// input.
pub(in crate::interpreter::parser) fn consume<'a, I>(tokens: &mut Peekable<I>,
                                                      kind: TokenKind,
                                                      message: &str)
                                                      -> Result<&'a Token, ParseError>
    where I: Iterator<Item = &'a Token> + Clone
{
    match_kind(tokens, kind).ok_or_else(|| error_at_next(tokens, message))
}

/// Builds an error located at the next token without consuming it.
pub(in crate::interpreter::parser) fn error_at_next<'a, I>(tokens: &mut Peekable<I>,
                                                            message: &str)
                                                            -> ParseError
    where I: Iterator<Item = &'a Token> + Clone
{
    match peek(tokens) {
        Some(token) => ParseError::at(token, message),
        None => ParseError { message:  message.to_string(),
                             location: ErrorLocation::AtEnd,
                             line:     0, },
    }
}
