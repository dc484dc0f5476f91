/// Entry points of the parser and the expression root.
///
/// Defines [`ParseResult`](core::ParseResult), the program and expression
/// entry points, and the assignment level that sits on top of the operator
/// hierarchy.
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence level, from equality down to multiplication.
/// Every level is left-associative.
pub mod binary;

/// Unary operators and primary expressions.
///
/// Handles prefix `!` and `-`, literals, variable references and
/// parenthesized groups.
pub mod unary;

/// Statement parsing and error recovery.
///
/// Declarations, `print`, blocks and expression statements, plus the
/// resynchronization that lets parsing continue after an error.
pub mod statement;

/// Small token stream helpers shared by the other parser modules.
pub mod utils;
