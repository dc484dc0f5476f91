use lox::{
    Error,
    ast::{Expr, LiteralValue, Statement},
    error::{ErrorLocation, ParseError, SyntaxError},
    interpreter::{lexer::scan, parser::core::parse_program},
    parse,
};

fn printed(source: &str) -> String {
    match parse(source) {
        Ok(expr) => expr.to_string(),
        Err(e) => panic!("{source:?} failed to parse: {e}"),
    }
}

fn parse_error(source: &str) -> String {
    match parse(source) {
        Ok(expr) => panic!("{source:?} parsed as {expr}"),
        Err(e) => e.to_string(),
    }
}

fn program(source: &str) -> (Vec<Statement>, Vec<String>) {
    let (tokens, scan_errors) = scan(source);
    assert!(scan_errors.is_empty(), "{scan_errors:?}");

    let (statements, errors) = parse_program(&tokens);
    (statements, errors.iter().map(ToString::to_string).collect())
}

#[test]
fn literals() {
    assert_eq!(printed("42"), "42.0");
    assert_eq!(printed("0.5"), "0.5");
    assert_eq!(printed("\"hello\""), "hello");
    assert_eq!(printed("true"), "true");
    assert_eq!(printed("false"), "false");
    assert_eq!(printed("nil"), "nil");
}

#[test]
fn precedence_and_grouping() {
    assert_eq!(printed("1 + 2 * 3"), "(+ 1.0 (* 2.0 3.0))");
    assert_eq!(printed("(1 + 2) * 3"), "(* (group (+ 1.0 2.0)) 3.0)");
    assert_eq!(printed("1 < 2 == 3 >= 4"), "(== (< 1.0 2.0) (>= 3.0 4.0))");
    assert_eq!(printed("\"a\" != nil"), "(!= a nil)");
    assert_eq!(printed("((1))"), "(group (group 1.0))");
}

#[test]
fn binary_operators_are_left_associative() {
    assert_eq!(printed("8 / 4 / 2"), "(/ (/ 8.0 4.0) 2.0)");
    assert_eq!(printed("1 < 2 <= 3"), "(<= (< 1.0 2.0) 3.0)");
    assert_eq!(printed("1 == 1 == true"), "(== (== 1.0 1.0) true)");
}

#[test]
fn unary_and_assignment_are_right_associative() {
    assert_eq!(printed("-!-x"), "(- (! (- x)))");
    assert_eq!(printed("a = b = 1"), "(= a (= b 1.0))");
}

#[test]
fn expression_errors() {
    assert_eq!(parse_error("(1 + 2"), "[line 1] Error at end: Expect ')' after expression.");
    assert_eq!(parse_error("1 +"), "[line 1] Error at end: Expect expression.");
    assert_eq!(parse_error(")"), "[line 1] Error at ')': Expect expression.");
    assert_eq!(parse_error("1 2"), "[line 1] Error at '2': Expect end of expression.");
    assert_eq!(parse_error("1 = 2"), "[line 1] Error at '=': Invalid assignment target.");
    assert_eq!(parse_error("\n\n(foo"), "[line 3] Error at end: Expect ')' after expression.");
}

#[test]
fn scan_errors_come_before_parse_errors() {
    let Err(Error::Syntax(errors)) = parse("1 + @") else {
        panic!("expected syntax errors");
    };

    assert_eq!(errors.len(), 2);
    assert!(matches!(errors[0], SyntaxError::Scan(_)));
    assert_eq!(errors[1],
               SyntaxError::Parse(ParseError { message:  "Expect expression.".to_string(),
                                               location: ErrorLocation::AtEnd,
                                               line:     1, }));
}

#[test]
fn statements() {
    let (statements, errors) = program("var a;\nvar b = 1;\nprint b;\nb = 2;\n{ print a; }");

    assert!(errors.is_empty());
    assert_eq!(statements.len(), 5);
    assert_eq!(statements[0],
               Statement::VariableDeclaration { name:        "a".to_string(),
                                                initializer: None,
                                                line:        1, });
    assert_eq!(statements[1],
               Statement::VariableDeclaration { name:        "b".to_string(),
                                                initializer: Some(Expr::Literal { value: LiteralValue::Number(1.0),
                                                                                  line:  2, }),
                                                line:        2, });
    assert!(matches!(&statements[2], Statement::Print { line: 3, .. }));
    assert!(matches!(&statements[3],
                     Statement::Expression { expr: Expr::Assign { .. }, .. }));
    assert!(matches!(&statements[4], Statement::Block { statements, line: 5 } if statements.len() == 1));
}

#[test]
fn missing_terminators() {
    assert_eq!(program("print 1").1, ["[line 1] Error at end: Expect ';' after value."]);
    assert_eq!(program("var x = 1").1,
               ["[line 1] Error at end: Expect ';' after variable declaration."]);
    assert_eq!(program("1 + 2").1, ["[line 1] Error at end: Expect ';' after expression."]);
    assert_eq!(program("var 1;").1, ["[line 1] Error at '1': Expect variable name."]);
    assert_eq!(program("{ print 1;").1, ["[line 1] Error at end: Expect '}' after block."]);
}

#[test]
fn recovery_reports_every_error() {
    let (statements, errors) = program("var = 1;\nprint (;\nprint 3;");

    assert_eq!(errors,
               ["[line 1] Error at '=': Expect variable name.",
                "[line 2] Error at ';': Expect expression."]);
    assert_eq!(statements.len(), 1);
}

#[test]
fn recovery_stops_at_statement_keywords() {
    let (statements, errors) = program("if (true) print 1;");

    assert_eq!(errors, ["[line 1] Error at 'if': Expect expression."]);
    assert!(matches!(&statements[..], [Statement::Print { .. }]));
}

#[test]
fn errors_inside_blocks_recover_inside_the_block() {
    let (statements, errors) = program("{ print; print 1; }\nprint 2;");

    assert_eq!(errors, ["[line 1] Error at ';': Expect expression."]);
    assert_eq!(statements.len(), 2);
    assert!(matches!(&statements[0], Statement::Block { statements, .. } if statements.len() == 1));
}

#[test]
fn invalid_assignment_target_in_statement() {
    let (statements, errors) = program("1 + 2 = 3;\nprint 4;");

    assert_eq!(errors, ["[line 1] Error at '=': Invalid assignment target."]);
    assert_eq!(statements.len(), 1);
}

#[test]
fn malformed_statement_does_not_hide_the_next_one() {
    let (statements, errors) = program("1 +; print 2;");

    assert_eq!(errors, ["[line 1] Error at ';': Expect expression."]);
    assert!(matches!(&statements[..], [Statement::Print { .. }]));
}

#[test]
fn error_at_closing_brace_keeps_the_block_closed() {
    let (statements, errors) = program("{ print 1 } print 2;");

    assert_eq!(errors, ["[line 1] Error at '}': Expect ';' after value."]);
    assert!(matches!(&statements[..], [Statement::Block { .. }, Statement::Print { .. }]));
}

#[test]
fn recovery_inside_a_block_stops_before_its_closing_brace() {
    let (statements, errors) = program("{ var = 1 }\n{ { print } }\nprint 3;");

    assert_eq!(errors,
               ["[line 1] Error at '=': Expect variable name.",
                "[line 2] Error at '}': Expect expression."]);
    assert_eq!(statements.len(), 3);
}

#[test]
fn stray_closing_brace_at_top_level_is_skipped() {
    let (statements, errors) = program("} print 1;");

    assert_eq!(errors, ["[line 1] Error at '}': Expect expression."]);
    assert!(matches!(&statements[..], [Statement::Print { .. }]));
}
