use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Literal, Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{consume, error_at_next, peek},
        },
    },
};

/// Parses a unary expression.
///
/// Handles prefix negation (`-x`) and logical NOT (`!x`). Unary operators are
/// right-associative, so `!!x` is `!(!x)`.
///
/// Grammar: `unary := ("!" | "-") unary | primary`
///
/// # Parameters
/// - `tokens`: Token iterator.
///
/// # Returns
/// An `Expr::UnaryOp`, or the primary expression when no operator is present.
///
/// # Example
/// ```
/// use lox::interpreter::{lexer::scan, parser::core::parse_standalone_expression};
///
/// let (tokens, _) = scan("!!-1");
/// let expr = parse_standalone_expression(&tokens).unwrap();
///
/// assert_eq!(expr.to_string(), "(! (! (- 1.0)))");
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let op = match peek(tokens).map(|token| token.kind) {
        Some(TokenKind::Minus) => UnaryOperator::Negate,
        Some(TokenKind::Bang) => UnaryOperator::Not,
        _ => return parse_primary(tokens),
    };

    let line = tokens.next().map_or(0, |token| token.line);
    let expr = parse_unary(tokens)?;

    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       line })
}

/// Parses a primary expression.
///
/// Grammar:
/// ```text
/// primary := NUMBER | STRING | "true" | "false" | "nil"
///          | IDENTIFIER | "(" expression ")"
/// ```
///
/// # Errors
/// Returns "Expect expression." at the next token when it cannot start an
/// expression. The token is not consumed.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = peek(tokens) else {
        return Err(error_at_next(tokens, "Expect expression."));
    };

    match token.kind {
        TokenKind::Number | TokenKind::String | TokenKind::True | TokenKind::False | TokenKind::Nil => {
            tokens.next();
            Ok(parse_literal(token))
        },
        TokenKind::Identifier => {
            tokens.next();
            Ok(Expr::Variable { name: token.lexeme.clone(),
                                line: token.line, })
        },
        TokenKind::LeftParen => parse_grouping(tokens),
        _ => Err(ParseError::at(token, "Expect expression.")),
    }
}

/// Converts an already consumed literal token into an `Expr::Literal`.
fn parse_literal(token: &Token) -> Expr {
    let value = match (&token.literal, token.kind) {
        (Some(Literal::Number(n)), _) => LiteralValue::Number(*n),
        (Some(Literal::String(s)), _) => LiteralValue::String(s.clone()),
        (_, TokenKind::True) => LiteralValue::Bool(true),
        (_, TokenKind::False) => LiteralValue::Bool(false),
        _ => LiteralValue::Nil,
    };

    Expr::Literal { value,
                    line: token.line }
}

/// Parses a parenthesized expression.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Errors
/// Returns "Expect ')' after expression." when the closing parenthesis is
/// missing.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let open = consume(tokens, TokenKind::LeftParen, "Expect '('.")?;
    let expr = parse_expression(tokens)?;
    consume(tokens, TokenKind::RightParen, "Expect ')' after expression.")?;

    Ok(Expr::Grouping { expr: Box::new(expr),
                        line: open.line, })
}
