use std::io::{Cursor, ErrorKind};

use gune::{prelude, repl};

fn session(input: &[u8]) -> (std::io::Result<()>, String, String) {
    let mut output = Vec::new();
    let mut errors = Vec::new();
    let result = repl(Cursor::new(input.to_vec()), &mut output, &mut errors, &prelude());

    (result,
     String::from_utf8(output).expect("output should be UTF-8"),
     String::from_utf8(errors).expect("errors should be UTF-8"))
}

#[test]
fn failing_lines_are_reported_and_the_session_goes_on() {
    let (result, output, errors) = session(b"1 + 2\n5 / 0\n\n  2 * pi - pi  \nexit\n9\n");

    assert!(result.is_ok());
    assert!(output.contains("> 3\n"), "{output:?}");
    assert!(output.contains(&format!("> {}\n", std::f64::consts::PI)), "{output:?}");
    assert!(!output.contains("> 9"), "{output:?}");
    assert_eq!(errors, "Error on line 1: Division by zero.\n");
}

#[test]
fn every_line_gets_a_prompt() {
    let (result, output, _) = session(b"1\n2\n");

    assert!(result.is_ok());
    assert_eq!(output.matches("# ").count(), 3);
}

#[test]
fn overlong_lines_do_not_end_the_session() {
    let mut input = vec!["1"; 200_000].join("+").into_bytes();
    input.extend_from_slice(b"\n2 + 2\n");

    let (result, output, errors) = session(&input);

    assert!(result.is_ok());
    assert_eq!(errors, "Error on line 1: Expression is nested too deeply.\n");
    assert!(output.contains("> 4\n"), "{output:?}");
}

#[test]
fn unreadable_input_is_returned_as_an_error() {
    let (result, output, _) = session(b"1 + 1\n\xff\xfe\n2 + 2\n");

    let error = result.expect_err("invalid UTF-8 should stop the session");
    assert_eq!(error.kind(), ErrorKind::InvalidData);
    assert!(output.contains("> 2\n"), "{output:?}");
    assert!(!output.contains("> 4"), "{output:?}");
}
