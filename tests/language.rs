use std::fs;

use gune::{
    error::{Error, LexError, ParseError, RuntimeError, ScopeError},
    get_result,
    interpreter::{
        environment::Environment, evaluator::core::Context, lexer::tokenize, parser::core::parse,
        value::core::Value,
    },
    prelude, run,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_dsl_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = get_result(&code) {
                panic!("DSL example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No DSL examples found in book/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```gune") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_value(src: &str, expected: Value) {
    match get_result(src) {
        Ok(value) => assert_eq!(value, expected, "Script {src:?} gave the wrong value"),
        Err(e) => panic!("Script {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match get_result(src) {
        Ok(value) => panic!("Script {src:?} succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", Value::Float(3.0));
    assert_value("7 * 9", Value::Float(63.0));
    assert_value("8 - 5", Value::Float(3.0));
    assert_value("10 / 4", Value::Float(2.5));
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_value("2+3*4", Value::Float(14.0));
    assert_value("2*3+4", Value::Float(10.0));
}

#[test]
fn operators_fold_to_the_left() {
    assert_value("8-3-2", Value::Float(3.0));
    assert_value("16/4/2", Value::Float(2.0));
    assert_value("2-3+4", Value::Float(3.0));
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(2+3)*4", Value::Float(20.0));
    assert_value("8-(3-2)", Value::Float(7.0));
    assert_value("((((1))))", Value::Float(1.0));
}

#[test]
fn program_yields_last_expression() {
    assert_value("1 2 3", Value::Float(3.0));
    assert_value("1 + 1\n2 * 5", Value::Float(10.0));
    assert_value("", Value::Nil);
    assert_value("  \n\t ", Value::Nil);
}

#[test]
fn nil_combines_only_with_nil() {
    assert_value("nil", Value::Nil);
    assert_value("nil + nil", Value::Nil);
    assert_value("nil / nil", Value::Nil);
    assert_value("nil & nil", Value::Nil);

    for src in ["1 + nil", "nil * 2", "nil - (1 + 1)"] {
        assert!(matches!(assert_failure(src),
                         Error::Runtime(RuntimeError::TypeMismatch { .. })),
                "{src:?} should be a type mismatch");
    }
}

#[test]
fn division_by_zero_is_error() {
    assert!(matches!(assert_failure("5/0"),
                     Error::Runtime(RuntimeError::DivisionByZero { line: 1 })));
    assert!(matches!(assert_failure("1 / (2 - 2)"),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
    assert!(matches!(assert_failure("0 / 0"),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
}

#[test]
fn ampersand_parses_but_does_not_evaluate() {
    assert!(matches!(assert_failure("1 & 2"),
                     Error::Runtime(RuntimeError::UnsupportedOperator { .. })));
}

#[test]
fn unknown_variable_is_error() {
    let error = assert_failure("y");
    assert_eq!(error.to_string(), "Error on line 1: Unknown variable 'y'.");
    assert!(matches!(error,
                     Error::Runtime(RuntimeError::Scope { source:
                                                              ScopeError::UndefinedVariable { .. },
                                                          line: 1, })));
}

#[test]
fn let_is_rejected_by_the_parser() {
    assert!(matches!(assert_failure("let x = 1"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
}

#[test]
fn unknown_character_is_error() {
    assert_eq!(assert_failure("1 + #"),
               Error::Lex(LexError::UnexpectedCharacter { character: '#',
                                                          line:      1,
                                                          column:    5, }));
}

#[test]
fn failures_stop_the_whole_input() {
    let environment = prelude();

    assert!(run("1 + 1\n2 / 0\n3", &environment).is_err());
    assert_eq!(run("1 + 1", &environment).unwrap(), Value::Float(2.0));
}

#[test]
fn prelude_declares_pi() {
    assert_value("pi", Value::Float(std::f64::consts::PI));
    assert_value("pi * 2", Value::Float(std::f64::consts::PI * 2.0));
}

#[test]
fn caller_supplied_bindings_are_visible() {
    let environment: Environment = [("answer".to_string(), Value::Float(42.0)),
                                    ("none".to_string(), Value::Nil)].into_iter()
                                                                     .collect();

    assert_eq!(run("answer / 2", &environment).unwrap(), Value::Float(21.0));
    assert_eq!(run("none + nil", &environment).unwrap(), Value::Nil);
    assert!(run("pi", &environment).is_err());
}

#[test]
fn evaluation_is_deterministic() {
    let environment = prelude();
    let program = parse(&tokenize("(pi + 1) * 3 - 4 / 8").unwrap()).unwrap();
    let context = Context::new(&environment, environment.root());

    let first = context.eval_program(&program);
    let second = context.eval_program(&program);

    assert!(first.is_ok());
    assert_eq!(first, second);
}

#[test]
fn names_resolve_from_the_context_frame() {
    let mut environment = Environment::new();
    let root = environment.root();
    environment.declare(root, "x", Value::Float(5.0)).unwrap();
    let child = environment.push_frame(root).unwrap();
    environment.declare(child, "x", Value::Float(9.0)).unwrap();

    let program = parse(&tokenize("x * 2").unwrap()).unwrap();

    assert_eq!(Context::new(&environment, child).eval_program(&program),
               Ok(Value::Float(18.0)));
    assert_eq!(Context::new(&environment, root).eval_program(&program),
               Ok(Value::Float(10.0)));
}

#[test]
fn values_render_minimally() {
    assert_eq!(get_result("2+3*4").unwrap().to_string(), "14");
    assert_eq!(get_result("1/4").unwrap().to_string(), "0.25");
    assert_eq!(get_result("0-7").unwrap().to_string(), "-7");
    assert_eq!(get_result("nil").unwrap().to_string(), "nil");
}

#[test]
fn large_magnitudes_render_without_exponent() {
    let huge = "9".repeat(300);

    assert_eq!(get_result("1000000000000000000000").unwrap().to_string(),
               "1000000000000000000000");
    assert_eq!(get_result(&format!("{huge} * {huge}")).unwrap().to_string(), "inf");
    assert_eq!(get_result(&format!("0 - {huge} * {huge}")).unwrap().to_string(), "-inf");
}

#[test]
fn long_operator_chains_are_rejected() {
    let source = vec!["1"; 200_000].join("+");

    assert_eq!(assert_failure(&source), Error::Parse(ParseError::TooDeep { line: 1 }));
}

#[test]
fn deep_parentheses_are_rejected() {
    let source = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));

    assert_eq!(assert_failure(&source), Error::Parse(ParseError::TooDeep { line: 1 }));
}

#[test]
fn moderately_deep_expressions_still_evaluate() {
    assert_value(&vec!["1"; 1000].join("+"), Value::Float(1000.0));
    assert_value(&vec!["3"; 1000].join("*"), Value::Float(f64::INFINITY));
    assert_value(&vec!["nil"; 1000].join("-"), Value::Nil);
    assert_value(&format!("{}1{}", "(".repeat(200), ")".repeat(200)),
                 Value::Float(1.0));
}

#[test]
fn errors_report_their_line() {
    let error = assert_failure("1\n2\n3 / 0");
    assert_eq!(error.to_string(), "Error on line 3: Division by zero.");
}
