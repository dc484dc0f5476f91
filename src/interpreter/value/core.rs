use std::fmt;

use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::format_number,
};

/// A value produced by evaluating an expression.
///
/// Values are immutable; every operation produces a new one. Two values are
/// equal only when they have the same variant and equal payloads, so `1 ==
/// "1"` is `false` and `NaN` is not equal to itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A double precision number.
    Number(f64),
    /// A string of text.
    String(String),
    /// `true` or `false`.
    Bool(bool),
    /// The absence of a value.
    Nil,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::String(s) => Self::String(s.clone()),
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Nil => Self::Nil,
        }
    }
}

impl Value {
    /// Returns the truthiness of the value.
    ///
    /// `nil` and `false` are falsy; everything else, including `0` and the
    /// empty string, is truthy.
    ///
    /// # Example
    /// ```
    /// use lox::interpreter::value::core::Value;
    ///
    /// assert!(Value::Number(0.0).is_truthy());
    /// assert!(Value::from("").is_truthy());
    /// assert!(!Value::Nil.is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Bool(false))
    }

    /// Extracts the number or fails with a type mismatch carrying `message`.
    ///
    /// # Errors
    /// Returns `RuntimeError::TypeMismatch` when the value is not a number.
    pub fn as_number(&self, message: &str, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(RuntimeError::type_mismatch(message, line)),
        }
    }

    /// Returns the name of the value's type, used in log output.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Bool(_) => "boolean",
            Self::Nil => "nil",
        }
    }
}

/// Formats the value the way `print` and the `evaluate` mode show it.
///
/// Integral numbers have no fractional part and strings appear without
/// quotes.
///
/// # Example
/// ```
/// use lox::interpreter::value::core::Value;
///
/// assert_eq!(Value::Number(7.0).to_string(), "7");
/// assert_eq!(Value::Number(-0.5).to_string(), "-0.5");
/// assert_eq!(Value::from("hi").to_string(), "hi");
/// assert_eq!(Value::Nil.to_string(), "nil");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::String(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Nil => write!(f, "nil"),
        }
    }
}
