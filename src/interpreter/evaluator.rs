/// Core evaluation logic and the interpreter state.
///
/// Defines the [`Interpreter`](core::Interpreter), which owns the current
/// environment and the output sink, and dispatches expressions to the
/// operator modules.
pub mod core;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation, comparisons and equality.
pub mod binary;

/// Statement execution.
///
/// Runs `print`, expression statements, variable declarations and blocks,
/// including the scope handling blocks need.
pub mod statement;
