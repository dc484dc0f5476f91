use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_unary, utils::peek},
    },
};

/// Parses equality expressions (`==`, `!=`).
///
/// Grammar: `equality := comparison ( ("==" | "!=") comparison )*`
///
/// # Parameters
/// - `tokens`: Token iterator.
///
/// # Returns
/// A left-associated chain of `Expr::BinaryOp` nodes, or the comparison
/// expression itself when no operator follows.
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_comparison(tokens)?;

    while let Some(token) = peek(tokens) {
        let op = match token_to_binary_operator(token.kind) {
            Some(op @ (BinaryOperator::Equal | BinaryOperator::NotEqual)) => op,
            _ => break,
        };
        tokens.next();

        let right = parse_comparison(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line: token.line };
    }

    Ok(left)
}

/// Parses comparison expressions (`<`, `<=`, `>`, `>=`).
///
/// Grammar: `comparison := term ( ("<" | "<=" | ">" | ">=") term )*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_term(tokens)?;

    while let Some(token) = peek(tokens) {
        let op = match token_to_binary_operator(token.kind) {
            Some(op) if is_comparison_op(op) => op,
            _ => break,
        };
        tokens.next();

        let right = parse_term(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line: token.line };
    }

    Ok(left)
}

/// Parses additive expressions (`+`, `-`).
///
/// Grammar: `term := factor ( ("+" | "-") factor )*`
///
/// # Example
/// ```
/// use lox::interpreter::{lexer::scan, parser::core::parse_standalone_expression};
///
/// let (tokens, _) = scan("1 - 2 - 3");
/// let expr = parse_standalone_expression(&tokens).unwrap();
///
/// assert_eq!(expr.to_string(), "(- (- 1.0 2.0) 3.0)");
/// ```
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_factor(tokens)?;
    loop {
        if let Some(token) = peek(tokens)
           && let Some(op) = token_to_binary_operator(token.kind)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_factor(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line: token.line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplicative expressions (`*`, `/`).
///
/// Grammar: `factor := unary ( ("*" | "/") unary )*`
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_unary(tokens)?;
    loop {
        if let Some(token) = peek(tokens)
           && let Some(op) = token_to_binary_operator(token.kind)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            tokens.next();
            let right = parse_unary(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line: token.line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token kind to its binary operator, if it is one.
///
/// # Example
/// ```
/// use lox::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::BangEqual),
///            Some(BinaryOperator::NotEqual));
/// assert_eq!(token_to_binary_operator(TokenKind::Bang), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    use BinaryOperator::{
        Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
    };
    match kind {
        TokenKind::Plus => Some(Add),
        TokenKind::Minus => Some(Sub),
        TokenKind::Star => Some(Mul),
        TokenKind::Slash => Some(Div),
        TokenKind::Less => Some(Less),
        TokenKind::Greater => Some(Greater),
        TokenKind::LessEqual => Some(LessEqual),
        TokenKind::GreaterEqual => Some(GreaterEqual),
        TokenKind::EqualEqual => Some(Equal),
        TokenKind::BangEqual => Some(NotEqual),
        _ => None,
    }
}

const fn is_comparison_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Less
             | BinaryOperator::LessEqual
             | BinaryOperator::Greater
             | BinaryOperator::GreaterEqual)
}
