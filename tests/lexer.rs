use lox::{
    error::ScanError,
    interpreter::lexer::{Literal, TokenKind, scan},
    tokenize,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    scan(source).0.iter().map(|token| token.kind).collect()
}

fn rendered(source: &str) -> Vec<String> {
    tokenize(source).0.iter().map(ToString::to_string).collect()
}

#[test]
fn empty_source_is_just_eof() {
    let (tokens, errors) = scan("");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
    assert_eq!(tokens[0].line, 1);
    assert!(errors.is_empty());
    assert_eq!(rendered(""), ["EOF  null"]);
}

#[test]
fn single_character_punctuation() {
    let cases = [("(", TokenKind::LeftParen),
                 (")", TokenKind::RightParen),
                 ("{", TokenKind::LeftBrace),
                 ("}", TokenKind::RightBrace),
                 (",", TokenKind::Comma),
                 (".", TokenKind::Dot),
                 ("-", TokenKind::Minus),
                 ("+", TokenKind::Plus),
                 (";", TokenKind::Semicolon),
                 ("*", TokenKind::Star),
                 ("/", TokenKind::Slash)];

    for (source, kind) in cases {
        let (tokens, errors) = scan(source);
        assert!(errors.is_empty(), "{source}");
        assert_eq!(tokens.len(), 2, "{source}");
        assert_eq!(tokens[0].kind, kind);
        assert_eq!(tokens[0].lexeme, source);
        assert_eq!(tokens[1].kind, TokenKind::Eof);
    }
}

#[test]
fn two_character_operators_win() {
    assert_eq!(kinds("== != <= >= = ! < >"),
               [TokenKind::EqualEqual,
                TokenKind::BangEqual,
                TokenKind::LessEqual,
                TokenKind::GreaterEqual,
                TokenKind::Equal,
                TokenKind::Bang,
                TokenKind::Less,
                TokenKind::Greater,
                TokenKind::Eof]);
    assert_eq!(kinds("==="), [TokenKind::EqualEqual, TokenKind::Equal, TokenKind::Eof]);
}

#[test]
fn comments_and_whitespace_are_skipped() {
    let (tokens, errors) = scan("// a comment\n\t(  ) // trailing\r\n");

    assert!(errors.is_empty());
    assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
               [TokenKind::LeftParen, TokenKind::RightParen, TokenKind::Eof]);
    assert_eq!(tokens[0].line, 2);
    assert_eq!(tokens[2].line, 3);
}

#[test]
fn slash_alone_is_division() {
    assert_eq!(kinds("6 / 3"), [TokenKind::Number, TokenKind::Slash, TokenKind::Number, TokenKind::Eof]);
}

#[test]
fn string_literals() {
    let (tokens, errors) = scan("\"hello world\"");

    assert!(errors.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, "\"hello world\"");
    assert_eq!(tokens[0].literal, Some(Literal::String("hello world".to_string())));
    assert_eq!(rendered("\"hi\""), ["STRING \"hi\" hi", "EOF  null"]);
}

#[test]
fn multi_line_string_ends_on_its_last_line() {
    let (tokens, errors) = scan("\"one\ntwo\" x");

    assert!(errors.is_empty());
    assert_eq!(tokens[0].line, 2);
    assert_eq!(tokens[0].literal, Some(Literal::String("one\ntwo".to_string())));
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn unterminated_string_is_an_error_without_token() {
    let (tokens, errors) = scan("\"abc");

    assert_eq!(errors, [ScanError::UnterminatedString { line: 1 }]);
    assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(), [TokenKind::Eof]);
    assert_eq!(errors[0].to_string(), "[line 1] Error: Unterminated string.");
}

#[test]
fn unterminated_string_reports_the_last_line() {
    let (_, errors) = scan("\"a\nb\nc");

    assert_eq!(errors, [ScanError::UnterminatedString { line: 3 }]);
}

#[test]
fn number_literals() {
    assert_eq!(rendered("42"), ["NUMBER 42 42.0", "EOF  null"]);
    assert_eq!(rendered("1234.1200"), ["NUMBER 1234.1200 1234.12", "EOF  null"]);
    assert_eq!(rendered("3.14"), ["NUMBER 3.14 3.14", "EOF  null"]);
}

#[test]
fn dots_around_numbers() {
    assert_eq!(kinds("1."), [TokenKind::Number, TokenKind::Dot, TokenKind::Eof]);
    assert_eq!(kinds(".5"), [TokenKind::Dot, TokenKind::Number, TokenKind::Eof]);
    assert_eq!(scan("1.").0[0].literal, Some(Literal::Number(1.0)));
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(kinds("and class else false fun for if nil or print return super this true var while"),
               [TokenKind::And,
                TokenKind::Class,
                TokenKind::Else,
                TokenKind::False,
                TokenKind::Fun,
                TokenKind::For,
                TokenKind::If,
                TokenKind::Nil,
                TokenKind::Or,
                TokenKind::Print,
                TokenKind::Return,
                TokenKind::Super,
                TokenKind::This,
                TokenKind::True,
                TokenKind::Var,
                TokenKind::While,
                TokenKind::Eof]);

    assert_eq!(kinds("orchid _var var_ classy x1"),
               [TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Eof]);
    assert_eq!(rendered("foo"), ["IDENTIFIER foo null", "EOF  null"]);
}

#[test]
fn unexpected_characters_do_not_stop_the_scan() {
    let (tokens, errors) = scan(",.$(#\n@");

    assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
               [TokenKind::Comma, TokenKind::Dot, TokenKind::LeftParen, TokenKind::Eof]);
    assert_eq!(errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
               ["[line 1] Error: Unexpected character: $",
                "[line 1] Error: Unexpected character: #",
                "[line 2] Error: Unexpected character: @"]);
}

#[test]
fn lines_never_decrease() {
    let (tokens, _) = scan("var a = 1;\n\n\"x\ny\"\n// c\nprint a;");

    assert!(tokens.windows(2).all(|pair| pair[0].line <= pair[1].line));
    assert_eq!(tokens.last().map(|t| t.line), Some(6));
}
