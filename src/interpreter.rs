/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, evaluates expressions, executes statements
/// and writes `print` output to its sink. It is the execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates expressions, applying operator semantics and type checks.
/// - Executes statements, opening a nested scope for every block.
/// - Reports runtime errors such as type mismatches, division by zero and
///   undefined variables.
pub mod evaluator;
/// The environment module stores variable bindings.
///
/// An environment maps names to values and owns the environment that
/// encloses it, so nested blocks form a chain that lookups walk outward.
pub mod environment;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens,
/// each corresponding to a meaningful language element such as a number, a
/// string, an identifier, an operator or a keyword. This is the first stage
/// of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, lexeme,
///   decoded literal and source line.
/// - Skips whitespace and `//` comments while keeping the line count.
/// - Reports lexical errors without stopping the scan.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer with a
/// recursive descent over the operator precedence grammar, and builds
/// expressions and statements.
///
/// # Responsibilities
/// - Converts tokens into AST nodes.
/// - Reports syntax errors at the offending token.
/// - Recovers at statement boundaries so one pass reports every error.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Numbers, strings, booleans and `nil`, along with truthiness and the text
/// a value prints as.
pub mod value;
