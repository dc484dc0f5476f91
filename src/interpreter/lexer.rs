use std::fmt;

use logos::Logos;
use tracing::debug;

use crate::{error::ScanError, util::num::format_literal};

/// The kind of a lexical token.
///
/// Each variant is one entry in the language's token vocabulary. The
/// [`Display`](fmt::Display) form is the upper snake case name printed by the
/// `tokenize` mode, e.g. `LEFT_PAREN` or `EQUAL_EQUAL`.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[logos(extras = LexerExtras)]
#[logos(error = LexFailure)]
#[logos(skip r"[ \t\r]+")]
#[logos(skip(r"//[^\n]*", allow_greedy = true))]
#[logos(skip(r"\n", newline))]
pub enum TokenKind {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// Variable names such as `x` or `_count`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// String literals such as `"hello"`; they may span several lines.
    #[regex(r#""[^"]*""#, string)]
    #[regex(r#""[^"]*"#, unterminated_string)]
    String,
    /// Number literals such as `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,
    /// `and`
    #[token("and")]
    And,
    /// `class`
    #[token("class")]
    Class,
    /// `else`
    #[token("else")]
    Else,
    /// `false`
    #[token("false")]
    False,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `for`
    #[token("for")]
    For,
    /// `if`
    #[token("if")]
    If,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `or`
    #[token("or")]
    Or,
    /// `print`
    #[token("print")]
    Print,
    /// `return`
    #[token("return")]
    Return,
    /// `super`
    #[token("super")]
    Super,
    /// `this`
    #[token("this")]
    This,
    /// `true`
    #[token("true")]
    True,
    /// `var`
    #[token("var")]
    Var,
    /// `while`
    #[token("while")]
    While,
    /// End of input. Never produced by the automaton, appended by [`scan`].
    Eof,
}

impl TokenKind {
    /// Returns `true` for keywords that begin a statement.
    ///
    /// The parser stops discarding tokens at these when it recovers from an
    /// error.
    #[must_use]
    pub const fn starts_statement(self) -> bool {
        matches!(self,
                 Self::Class
                 | Self::Fun
                 | Self::Var
                 | Self::For
                 | Self::If
                 | Self::While
                 | Self::Print
                 | Self::Return)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Minus => "MINUS",
            Self::Plus => "PLUS",
            Self::Semicolon => "SEMICOLON",
            Self::Slash => "SLASH",
            Self::Star => "STAR",
            Self::Bang => "BANG",
            Self::BangEqual => "BANG_EQUAL",
            Self::Equal => "EQUAL",
            Self::EqualEqual => "EQUAL_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::Identifier => "IDENTIFIER",
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::And => "AND",
            Self::Class => "CLASS",
            Self::Else => "ELSE",
            Self::False => "FALSE",
            Self::Fun => "FUN",
            Self::For => "FOR",
            Self::If => "IF",
            Self::Nil => "NIL",
            Self::Or => "OR",
            Self::Print => "PRINT",
            Self::Return => "RETURN",
            Self::Super => "SUPER",
            Self::This => "THIS",
            Self::True => "TRUE",
            Self::Var => "VAR",
            Self::While => "WHILE",
            Self::Eof => "EOF",
        };
        write!(f, "{name}")
    }
}

/// The decoded value of a literal token.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Contents of a string literal, without the quotes.
    String(String),
    /// Value of a number literal.
    Number(f64),
}

/// A classified unit of source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:    TokenKind,
    /// The exact source text of the token.
    pub lexeme:  String,
    /// The decoded value for `STRING` and `NUMBER` tokens.
    pub literal: Option<Literal>,
    /// The 1-based line the token ends on.
    pub line:    usize,
}

impl fmt::Display for Token {
    /// Formats the token the way the `tokenize` mode prints it:
    /// `<KIND> <lexeme> <literal>`, with `null` for tokens without a literal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.kind, self.lexeme)?;
        match &self.literal {
            Some(Literal::String(s)) => write!(f, "{s}"),
            Some(Literal::Number(n)) => write!(f, "{}", format_literal(*n)),
            None => write!(f, "null"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for tokens and error reporting. Starts at
/// 1 and is advanced by newlines, including those inside string literals.
#[derive(Debug)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Failure reported by the token automaton.
///
/// Converted into a [`ScanError`] by [`scan`], which knows the line and the
/// offending slice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexFailure {
    /// No pattern matches the input at this position.
    #[default]
    UnexpectedCharacter,
    /// A string literal ran into the end of input.
    UnterminatedString,
}

fn newline(lex: &mut logos::Lexer<TokenKind>) {
    lex.extras.line += 1;
}

/// Counts the newlines inside a string literal so the token lands on the line
/// where the literal ends.
fn string(lex: &mut logos::Lexer<TokenKind>) {
    lex.extras.line += lex.slice().matches('\n').count();
}

fn unterminated_string(lex: &mut logos::Lexer<TokenKind>) -> Result<(), LexFailure> {
    lex.extras.line += lex.slice().matches('\n').count();
    Err(LexFailure::UnterminatedString)
}

/// Scans source text into tokens.
///
/// The whole input is consumed in a single left-to-right pass. Errors do not
/// stop the scan: they are collected and returned next to the tokens that
/// could be recognized. The token list always ends with exactly one `EOF`
/// token carrying the last line scanned.
///
/// # Example
/// ```
/// use lox::{error::ScanError, interpreter::lexer::{TokenKind, scan}};
///
/// let (tokens, errors) = scan("var x = 1; @");
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Var,
///             TokenKind::Identifier,
///             TokenKind::Equal,
///             TokenKind::Number,
///             TokenKind::Semicolon,
///             TokenKind::Eof]);
/// assert_eq!(errors,
///            [ScanError::UnexpectedCharacter { character: '@',
///                                              line:      1, }]);
/// ```
#[must_use]
pub fn scan(source: &str) -> (Vec<Token>, Vec<ScanError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras::default());

    while let Some(result) = lexer.next() {
        let line = lexer.extras.line;
        let lexeme = lexer.slice();

        match result {
            Ok(kind) => tokens.push(Token { kind,
                                            lexeme: lexeme.to_string(),
                                            literal: decode_literal(kind, lexeme),
                                            line }),
            Err(LexFailure::UnterminatedString) => {
                errors.push(ScanError::UnterminatedString { line });
            },
            Err(LexFailure::UnexpectedCharacter) => {
                for character in lexeme.chars() {
                    errors.push(ScanError::UnexpectedCharacter { character, line });
                }
            },
        }
    }

    tokens.push(Token { kind:    TokenKind::Eof,
                        lexeme:  String::new(),
                        literal: None,
                        line:    lexer.extras.line, });

    debug!(tokens = tokens.len(), errors = errors.len(), "scan finished");

    (tokens, errors)
}

/// Decodes the literal value of `STRING` and `NUMBER` lexemes.
fn decode_literal(kind: TokenKind, lexeme: &str) -> Option<Literal> {
    match kind {
        TokenKind::String => {
            let contents = &lexeme[1..lexeme.len() - 1];
            Some(Literal::String(contents.to_string()))
        },
        TokenKind::Number => lexeme.parse().ok().map(Literal::Number),
        _ => None,
    }
}
