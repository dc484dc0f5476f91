use std::iter::Peekable;

use tracing::trace;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{consume, is_at_end, match_kind, peek},
        },
    },
};

/// Parses declarations until `EOF` or until the `closing` token kind.
///
/// The closing token itself is not consumed. A declaration that fails is
/// recorded in `errors` and skipped with [`synchronize`].
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `errors`: Receives every error found.
/// - `closing`: The token kind that ends the sequence, `None` for a whole
///   program.
///
/// # Returns
/// The declarations that parsed successfully.
pub(in crate::interpreter::parser) fn parse_declarations<'a, I>(tokens: &mut Peekable<I>,
                                                                 errors: &mut Vec<ParseError>,
                                                                 closing: Option<TokenKind>)
                                                                 -> Vec<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut statements = Vec::new();

    while !is_at_end(tokens)
          && closing.is_none_or(|kind| peek(tokens).is_none_or(|token| token.kind != kind))
    {
        match parse_declaration(tokens, errors) {
            Ok(statement) => statements.push(statement),
            Err(error) => {
                trace!(%error, "recovering from parse error");
                errors.push(error);
                synchronize(tokens, closing);
            },
        }
    }

    statements
}

/// Parses a declaration: a `var` declaration or any other statement.
///
/// Grammar: `declaration := varDecl | statement`
///
/// # Errors
/// Returns the first error of this declaration. Errors inside a nested block
/// are recorded in `errors` instead.
pub fn parse_declaration<'a, I>(tokens: &mut Peekable<I>,
                                errors: &mut Vec<ParseError>)
                                -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(keyword) = match_kind(tokens, TokenKind::Var) {
        trace!(line = keyword.line, "variable declaration");
        return parse_var_declaration(tokens);
    }
    parse_statement(tokens, errors)
}

/// Parses the rest of a variable declaration after `var`.
///
/// Grammar: `varDecl := "var" IDENTIFIER ( "=" expression )? ";"`
fn parse_var_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let name = consume(tokens, TokenKind::Identifier, "Expect variable name.")?;

    let initializer = if match_kind(tokens, TokenKind::Equal).is_some() {
        Some(parse_expression(tokens)?)
    } else {
        None
    };

    consume(tokens, TokenKind::Semicolon, "Expect ';' after variable declaration.")?;

    Ok(Statement::VariableDeclaration { name: name.lexeme.clone(),
                                        initializer,
                                        line: name.line, })
}

/// Parses a single statement.
///
/// Grammar: `statement := printStmt | block | exprStmt`
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>,
                              errors: &mut Vec<ParseError>)
                              -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(keyword) = match_kind(tokens, TokenKind::Print) {
        let expr = parse_expression(tokens)?;
        consume(tokens, TokenKind::Semicolon, "Expect ';' after value.")?;

        return Ok(Statement::Print { expr,
                                     line: keyword.line });
    }

    if let Some(brace) = match_kind(tokens, TokenKind::LeftBrace) {
        let statements = parse_declarations(tokens, errors, Some(TokenKind::RightBrace));
        consume(tokens, TokenKind::RightBrace, "Expect '}' after block.")?;

        return Ok(Statement::Block { statements,
                                     line: brace.line });
    }

    let line = peek(tokens).map_or(0, |token| token.line);
    let expr = parse_expression(tokens)?;
    consume(tokens, TokenKind::Semicolon, "Expect ';' after expression.")?;

    Ok(Statement::Expression { expr, line })
}

/// Discards tokens until a likely statement boundary.
///
/// The token that caused the error is discarded, then tokens are skipped
/// until just after a `;` or until the next token starts a statement. `EOF`
/// and the `closing` token of the enclosing block are never consumed, so the
/// block can still be closed.
pub fn synchronize<'a, I>(tokens: &mut Peekable<I>, closing: Option<TokenKind>)
    where I: Iterator<Item = &'a Token> + Clone
{
    let is_boundary = |token: &Token| {
        token.kind == TokenKind::Eof
        || token.kind.starts_statement()
        || closing.is_some_and(|kind| token.kind == kind)
    };

    match peek(tokens) {
        Some(token) if token.kind == TokenKind::Eof || Some(token.kind) == closing => return,
        None => return,
        Some(_) => {},
    }
    if tokens.next().is_some_and(|token| token.kind == TokenKind::Semicolon) {
        return;
    }

    while let Some(token) = peek(tokens) {
        if is_boundary(token) {
            return;
        }
        tokens.next();
        if token.kind == TokenKind::Semicolon {
            return;
        }
    }
}
