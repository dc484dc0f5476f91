//! # lox
//!
//! lox is a tree-walking interpreter for a small dynamically typed scripting
//! language in the Lox family. Source text goes through three stages:
//!
//! 1. the [lexer](interpreter::lexer) turns it into tokens,
//! 2. the [parser](interpreter::parser) builds an abstract syntax tree,
//! 3. the [evaluator](interpreter::evaluator) walks the tree against a chain
//!    of [environments](interpreter::environment).
//!
//! The functions at the crate root run the stages one after another for a
//! whole source string and fold every failure into a single [`Error`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use tracing::debug;

use crate::{
    ast::Expr,
    interpreter::{
        evaluator::core::Interpreter,
        lexer::{Token, scan},
        parser::core::{parse_program, parse_standalone_expression},
        value::core::Value,
    },
};
pub use crate::error::Error;
use crate::error::ScanError;

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and the operator
/// types that represent the syntactic structure of source code as a tree.
/// The AST is built by the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Prints expressions in parenthesized prefix form.
pub mod ast;
/// Provides unified error types for scanning, parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing
/// or running code, each with the source line it refers to, plus the
/// crate-level [`Error`] that the entry points return.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Renders every error in the format users see on the terminal.
/// - Maps failures to process exit statuses.
pub mod error;
/// Orchestrates the stages of code execution.
///
/// This module ties together lexing, parsing, the environment, values and
/// evaluation.
pub mod interpreter;
/// General helpers that are not specific to one stage.
pub mod util;

/// Scans `source` into tokens.
///
/// Scanning never stops at an error, so the tokens are always complete and
/// end with `EOF`; errors are returned next to them.
///
/// # Example
/// ```
/// let (tokens, errors) = lox::tokenize("(42)");
/// let lines: Vec<String> = tokens.iter().map(ToString::to_string).collect();
///
/// assert_eq!(lines, ["LEFT_PAREN ( null", "NUMBER 42 42.0", "RIGHT_PAREN ) null", "EOF  null"]);
/// assert!(errors.is_empty());
/// ```
#[must_use]
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<ScanError>) {
    scan(source)
}

/// Parses `source` as a single expression.
///
/// # Errors
/// Returns [`Error::Syntax`] with every scan error followed by the parse
/// error, if any.
///
/// # Example
/// ```
/// let expr = lox::parse("1 + 2 * 3").unwrap();
/// assert_eq!(expr.to_string(), "(+ 1.0 (* 2.0 3.0))");
///
/// let error = lox::parse("(1 + 2").unwrap_err();
/// assert_eq!(error.to_string(), "[line 1] Error at end: Expect ')' after expression.");
/// ```
pub fn parse(source: &str) -> Result<Expr, Error> {
    let (tokens, scan_errors) = scan(source);
    let parsed = parse_standalone_expression(&tokens);

    let parse_errors = parsed.as_ref().err().cloned().into_iter().collect();
    if let Some(error) = Error::from_phases(scan_errors, parse_errors) {
        return Err(error);
    }

    parsed.map_err(|error| Error::Syntax(vec![error.into()]))
}

/// Parses `source` as a single expression and evaluates it.
///
/// The expression runs against an empty global scope.
///
/// # Errors
/// Returns [`Error::Syntax`] when the source does not parse, or
/// [`Error::Runtime`] when evaluation fails.
///
/// # Example
/// ```
/// use lox::interpreter::value::core::Value;
///
/// assert_eq!(lox::evaluate("(10 - 4) / 4").unwrap(), Value::Number(1.5));
/// assert_eq!(lox::evaluate("\"ab\" + \"cd\"").unwrap().to_string(), "abcd");
///
/// let error = lox::evaluate("-\"muffin\"").unwrap_err();
/// assert_eq!(error.to_string(), "Operand must be a number.\n[line 1]");
/// assert_eq!(error.exit_code(), 70);
/// ```
pub fn evaluate(source: &str) -> Result<Value, Error> {
    let expr = parse(source)?;
    let mut interpreter = Interpreter::new(std::io::sink());

    let value = interpreter.evaluate(&expr)?;
    debug!(value = %value, "expression evaluated");

    Ok(value)
}

/// Parses and runs `source` as a program, writing `print` output to `out`.
///
/// Nothing runs if any scan or parse error is found. Once running, the
/// program stops at its first runtime error; output written before it stays
/// in `out`.
///
/// # Errors
/// Returns [`Error::Syntax`] with all scan and parse errors, or
/// [`Error::Runtime`] with the runtime error that stopped the program.
///
/// # Example
/// ```
/// let mut out = Vec::new();
/// lox::run("var greeting = \"hi\"; print greeting + \" there\";", &mut out).unwrap();
/// assert_eq!(out, b"hi there\n");
///
/// let mut out = Vec::new();
/// let error = lox::run("print 1; print x;", &mut out).unwrap_err();
/// assert_eq!(out, b"1\n");
/// assert_eq!(error.to_string(), "Undefined variable 'x'.\n[line 1]");
/// ```
pub fn run<W: Write>(source: &str, out: W) -> Result<(), Error> {
    let (tokens, scan_errors) = scan(source);
    let (program, parse_errors) = parse_program(&tokens);

    if let Some(error) = Error::from_phases(scan_errors, parse_errors) {
        return Err(error);
    }

    let mut interpreter = Interpreter::new(out);
    interpreter.run(&program)?;

    Ok(())
}
