use std::fmt;

use crate::util::num::format_literal;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constants that can appear directly in source
/// code: numbers, strings, booleans and `nil`.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A double precision number literal such as `3.14`.
    Number(f64),
    /// A string literal, stored without its quotes.
    String(String),
    /// `true` or `false`.
    Bool(bool),
    /// `nil`
    Nil,
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every non-leaf node owns its children. Each variant records the line of
/// the token it was built from so runtime errors can point back at the
/// source.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, boolean or `nil`).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// A parenthesized expression.
    Grouping {
        /// The expression inside the parentheses.
        expr: Box<Self>,
        /// Line number of the opening parenthesis.
        line: usize,
    },
    /// A prefix operation such as `-x` or `!done`.
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number of the operator token.
        line: usize,
    },
    /// A binary operation (arithmetic, comparison or equality).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the operator token.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Assignment to an existing variable, e.g. `x = x + 1`.
    Assign {
        /// Name of the variable being assigned.
        name:  String,
        /// The new value.
        value: Box<Self>,
        /// Line number of the variable name.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    ///
    /// ## Example
    /// ```
    /// use lox::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Grouping { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Variable { line, .. }
            | Self::Assign { line, .. } => *line,
        }
    }
}

/// Prints the expression in fully parenthesized prefix form.
///
/// Numbers keep at least one fractional digit and strings are printed
/// without quotes.
///
/// ## Example
/// ```
/// use lox::ast::{BinaryOperator, Expr};
///
/// let expr = Expr::BinaryOp { left:  Box::new(Expr::Literal { value: 1.0.into(),
///                                                             line:  1, }),
///                             op:    BinaryOperator::Add,
///                             right: Box::new(Expr::Literal { value: 2.5.into(),
///                                                             line:  1, }),
///                             line:  1, };
///
/// assert_eq!(expr.to_string(), "(+ 1.0 2.5)");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Grouping { expr, .. } => write!(f, "(group {expr})"),
            Self::UnaryOp { op, expr, .. } => write!(f, "({op} {expr})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({op} {left} {right})"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::Assign { name, value, .. } => write!(f, "(= {name} {value})"),
        }
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_literal(*n)),
            Self::String(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Nil => write!(f, "nil"),
        }
    }
}

/// Represents a statement.
///
/// A program is an ordered list of statements, executed in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `print <expr>;`
    Print {
        /// The expression whose value is printed.
        expr: Expr,
        /// Line number of the `print` keyword.
        line: usize,
    },
    /// A standalone expression evaluated for its side effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A variable declaration using `var`.
    VariableDeclaration {
        /// The name of the variable.
        name:        String,
        /// The initial value; `nil` when absent.
        initializer: Option<Expr>,
        /// Line number of the variable name.
        line:        usize,
    },
    /// A `{ ... }` block with its own scope.
    Block {
        /// Statements inside the block.
        statements: Vec<Self>,
        /// Line number of the opening brace.
        line:       usize,
    },
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}
