/// Scanning errors.
///
/// Raised by the lexer for characters that cannot start any token and for
/// string literals that never see their closing quote. Scanning carries on
/// past them, so one run may produce many.
pub mod scan_error;
/// Parsing errors.
///
/// Defines the error raised when the token stream does not match the
/// grammar. Every parse error remembers the offending token (or the end of
/// input) so it can be reported the way users expect.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and
/// execution: type mismatches, division by zero, undefined variables and
/// failures of the output sink.
pub mod runtime_error;
/// Pipeline errors.
///
/// Folds the three phases' errors into the single type returned by the
/// crate-level entry points, together with the exit status a command line
/// driver should use for it.
pub mod lox_error;

pub use lox_error::{EXIT_OUTPUT, EXIT_RUNTIME, EXIT_SYNTAX, Error, SyntaxError};
pub use parse_error::{ErrorLocation, ParseError};
pub use runtime_error::RuntimeError;
pub use scan_error::ScanError;
