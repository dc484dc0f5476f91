use lox::{
    Error,
    error::{RuntimeError, SyntaxError},
    evaluate,
    interpreter::{
        environment::Environment,
        evaluator::core::Interpreter,
        lexer::scan,
        parser::core::parse_program,
        value::core::Value,
    },
    run,
};

fn value_of(source: &str) -> String {
    match evaluate(source) {
        Ok(value) => value.to_string(),
        Err(e) => panic!("{source:?} failed: {e}"),
    }
}

fn runtime_error(source: &str) -> RuntimeError {
    match evaluate(source) {
        Err(Error::Runtime(e)) => e,
        other => panic!("{source:?} did not fail at runtime: {other:?}"),
    }
}

fn output_of(source: &str) -> (String, Result<(), Error>) {
    let mut out = Vec::new();
    let result = run(source, &mut out);
    (String::from_utf8(out).expect("output is UTF-8"), result)
}

#[test]
fn arithmetic() {
    assert_eq!(value_of("1 + 2 * 3"), "7");
    assert_eq!(value_of("(1 + 2) * 3"), "9");
    assert_eq!(value_of("10 / 4"), "2.5");
    assert_eq!(value_of("-(3 - 5)"), "2");
    assert_eq!(value_of("1.5 * 2"), "3");
    assert_eq!(value_of("0.1 + 0.2"), "0.30000000000000004");
}

#[test]
fn display_forms() {
    assert_eq!(value_of("42"), "42");
    assert_eq!(value_of("3.14"), "3.14");
    assert_eq!(value_of("\"quoted\""), "quoted");
    assert_eq!(value_of("true"), "true");
    assert_eq!(value_of("nil"), "nil");
}

#[test]
fn string_concatenation() {
    assert_eq!(value_of("\"foo\" + \"bar\""), "foobar");
    assert_eq!(value_of("\"\" + \"\""), "");
}

#[test]
fn comparisons_and_equality() {
    assert_eq!(value_of("1 < 2"), "true");
    assert_eq!(value_of("2 <= 1"), "false");
    assert_eq!(value_of("3 > 3"), "false");
    assert_eq!(value_of("3 >= 3"), "true");
    assert_eq!(value_of("1 == 1"), "true");
    assert_eq!(value_of("1 == \"1\""), "false");
    assert_eq!(value_of("nil == nil"), "true");
    assert_eq!(value_of("nil == false"), "false");
    assert_eq!(value_of("\"a\" != \"b\""), "true");
    assert_eq!(value_of("true == !nil"), "true");
}

#[test]
fn truthiness() {
    assert_eq!(value_of("!nil"), "true");
    assert_eq!(value_of("!false"), "true");
    assert_eq!(value_of("!0"), "false");
    assert_eq!(value_of("!\"\""), "false");
    assert_eq!(value_of("!!true"), "true");
}

#[test]
fn type_errors() {
    assert_eq!(runtime_error("-\"a\"").to_string(), "Operand must be a number.\n[line 1]");
    assert_eq!(runtime_error("1 + true").to_string(),
               "Operands must be two numbers or two strings.\n[line 1]");
    assert_eq!(runtime_error("\"a\" + 1").to_string(),
               "Operands must be two numbers or two strings.\n[line 1]");
    assert_eq!(runtime_error("\"a\" * 2").to_string(), "Operands must be numbers.\n[line 1]");
    assert_eq!(runtime_error("nil < 1").to_string(), "Operands must be numbers.\n[line 1]");
    assert_eq!(runtime_error("1 -\n\n\"x\"").line(), Some(1));
}

#[test]
fn division_by_zero() {
    assert!(matches!(runtime_error("10 / 0"), RuntimeError::DivisionByZero { line: 1 }));
    assert_eq!(runtime_error("1 / (2 - 2)").to_string(), "Division by zero.\n[line 1]");
}

#[test]
fn runtime_errors_exit_70() {
    let error = evaluate("-true").unwrap_err();
    assert_eq!(error.exit_code(), 70);

    let error = evaluate("(").unwrap_err();
    assert_eq!(error.exit_code(), 65);
}

#[test]
fn undefined_variable_in_expression_mode() {
    assert_eq!(runtime_error("x").to_string(), "Undefined variable 'x'.\n[line 1]");
}

#[test]
fn print_and_variables() {
    let (out, result) = output_of("var a = 1;\nvar b = a + 2;\nprint b;\nprint \"done\";");

    assert!(result.is_ok());
    assert_eq!(out, "3\ndone\n");
}

#[test]
fn uninitialized_variable_is_nil() {
    assert_eq!(output_of("var a; print a;").0, "nil\n");
}

#[test]
fn assignment_updates_nearest_scope() {
    let (out, result) = output_of("var a = 1; { var a = 2; a = 3; print a; } print a; { a = 4; } print a;");

    assert!(result.is_ok());
    assert_eq!(out, "3\n1\n4\n");
}

#[test]
fn assignment_never_creates_a_variable() {
    let (out, result) = output_of("print 1;\nundeclared = 2;\nprint 3;");

    assert_eq!(out, "1\n");
    let Err(Error::Runtime(e)) = result else {
        panic!("expected a runtime error");
    };
    assert_eq!(e.to_string(), "Undefined variable 'undeclared'.\n[line 2]");
}

#[test]
fn block_scope_is_left_after_an_error() {
    let (out, result) = output_of("var a = \"outer\";\n{ var a = \"inner\"; print a; print -a; }");

    assert_eq!(out, "inner\n");
    assert!(matches!(result, Err(Error::Runtime(RuntimeError::TypeMismatch { line: 2, .. }))));
}

#[test]
fn operands_are_evaluated_before_the_type_check() {
    assert!(matches!(runtime_error("\"x\" - missing"),
                     RuntimeError::UndefinedVariable { .. }));
}

#[test]
fn interpreter_restores_the_outer_scope_after_a_failed_block() {
    let (tokens, _) = scan("var a = \"outer\"; { var a = \"inner\"; a = -a; }");
    let (program, errors) = parse_program(&tokens);
    assert!(errors.is_empty());

    let mut interpreter = Interpreter::new(Vec::new());
    assert!(interpreter.run(&program).is_err());

    assert_eq!(interpreter.environment.depth(), 0);
    assert_eq!(interpreter.environment.get("a", 1).unwrap(), Value::from("outer"));
}

#[test]
fn syntax_errors_prevent_execution() {
    let (out, result) = output_of("print \"side effect\";\nprint (;");

    assert!(out.is_empty());
    let Err(error) = result else {
        panic!("expected syntax errors");
    };
    assert_eq!(error.exit_code(), 65);
    assert_eq!(error.to_string(), "[line 2] Error at ';': Expect expression.");
}

#[test]
fn all_syntax_errors_are_reported() {
    let (_, result) = output_of("print 1 $;\nvar = 2;\n");

    let Err(Error::Syntax(errors)) = result else {
        panic!("expected syntax errors");
    };
    assert_eq!(errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
               ["[line 1] Error: Unexpected character: $",
                "[line 2] Error at '=': Expect variable name."]);
}

#[test]
fn environment_chain() {
    let mut globals = Environment::new();
    globals.define("a", Value::Number(1.0));

    let mut block = Environment::with_enclosing(globals);
    block.define("b", Value::Bool(true));
    block.assign("a", Value::from("changed"), 1).unwrap();

    assert_eq!(block.get("b", 1).unwrap(), Value::Bool(true));
    assert!(matches!(block.assign("c", Value::Nil, 7),
                     Err(RuntimeError::UndefinedVariable { line: 7, .. })));

    let globals = block.into_enclosing();
    assert_eq!(globals.get("a", 1).unwrap(), Value::from("changed"));
    assert!(globals.get("b", 1).is_err());
}

struct ClosedOutput;

impl std::io::Write for ClosedOutput {
    fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn failed_output_is_not_a_program_error() {
    let error = run("print 1;", ClosedOutput).unwrap_err();

    assert!(matches!(error, Error::Runtime(RuntimeError::Output { .. })));
    assert_eq!(error.exit_code(), 1);
    assert_eq!(error.line(), None);

    let error = Error::from(std::io::Error::other("closed"));
    assert_eq!(error.exit_code(), 1);
}

#[test]
fn errors_point_at_their_first_line() {
    let (_, result) = output_of("print 1;\nprint -\"a\";");
    assert_eq!(result.unwrap_err().line(), Some(2));

    let (_, result) = output_of("print 1;\n\n@\nvar = 1;");
    let error = result.unwrap_err();
    assert_eq!(error.line(), Some(3));
    let Error::Syntax(errors) = error else {
        panic!("expected syntax errors");
    };
    assert_eq!(errors.iter().map(SyntaxError::line).collect::<Vec<_>>(), [3, 4]);
}
