use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_equality,
            statement::parse_declarations,
            utils::{error_at_next, is_at_end, match_kind},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program.
///
/// Declarations are parsed until `EOF`. A declaration that fails to parse is
/// dropped, its error recorded, and parsing resumes at the next statement
/// boundary, so a single call reports every independent syntax error.
///
/// Grammar: `program := declaration* EOF`
///
/// # Parameters
/// - `tokens`: The token stream produced by the lexer, ending with `EOF`.
///
/// # Returns
/// The statements that parsed successfully and the errors found, both in
/// source order.
///
/// # Example
/// ```
/// use lox::interpreter::{lexer::scan, parser::core::parse_program};
///
/// let (tokens, _) = scan("print 1; print; var x = 2;");
/// let (statements, errors) = parse_program(&tokens);
///
/// assert_eq!(statements.len(), 2);
/// assert_eq!(errors[0].to_string(), "[line 1] Error at ';': Expect expression.");
/// ```
#[must_use]
pub fn parse_program(tokens: &[Token]) -> (Vec<Statement>, Vec<ParseError>) {
    let mut tokens = tokens.iter().peekable();
    let mut errors = Vec::new();

    let statements = parse_declarations(&mut tokens, &mut errors, None);

    debug!(statements = statements.len(), errors = errors.len(), "parse finished");

    (statements, errors)
}

/// Parses a token stream that must hold exactly one expression.
///
/// Used by the `parse` and `evaluate` modes. Tokens left over after the
/// expression are an error.
///
/// # Errors
/// Returns the first `ParseError` found; there is no recovery in expression
/// mode.
///
/// # Example
/// ```
/// use lox::interpreter::{lexer::scan, parser::core::parse_standalone_expression};
///
/// let (tokens, _) = scan("(1 + 2) * 3");
/// let expr = parse_standalone_expression(&tokens).unwrap();
///
/// assert_eq!(expr.to_string(), "(* (group (+ 1.0 2.0)) 3.0)");
/// ```
pub fn parse_standalone_expression(tokens: &[Token]) -> ParseResult<Expr> {
    let mut tokens = tokens.iter().peekable();
    let expr = parse_expression(&mut tokens)?;

    if !is_at_end(&mut tokens) {
        return Err(error_at_next(&mut tokens, "Expect end of expression."));
    }

    debug!(%expr, line = expr.line_number(), "expression parsed");

    Ok(expr)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It starts at assignment,
/// the lowest precedence level, and descends through the operator
/// hierarchy.
///
/// Grammar: `expression := assignment`
///
/// # Parameters
/// - `tokens`: Token iterator.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_assignment(tokens)
}

/// Parses an assignment, or falls through to equality.
///
/// The left-hand side is parsed as an ordinary expression first; only when an
/// `=` follows is it checked to be a variable. Assignment is
/// right-associative: `a = b = 1` assigns `1` to `b`, then to `a`.
///
/// Grammar: `assignment := IDENTIFIER "=" assignment | equality`
///
/// # Errors
/// Returns "Invalid assignment target." located at the `=` token when the
/// left-hand side is not a variable.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let target = parse_equality(tokens)?;

    let Some(equals) = match_kind(tokens, TokenKind::Equal) else {
        return Ok(target);
    };

    let value = parse_assignment(tokens)?;

    match target {
        Expr::Variable { name, line } => Ok(Expr::Assign { name,
                                                           value: Box::new(value),
                                                           line }),
        _ => Err(ParseError::at(equals, "Invalid assignment target.")),
    }
}
