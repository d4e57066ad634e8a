//! # gune
//!
//! gune is a small expression language. Source text is tokenized, parsed by a
//! recursive-descent parser into an abstract syntax tree, and executed by a
//! tree-walking evaluator against a chain of lexical scopes.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, BufRead, Write};

use crate::{
    error::Error,
    interpreter::{
        environment::Environment, evaluator::core::Context, lexer::tokenize,
        parser::core::parse, value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program` root, the `Expr` enum and the
/// `BinaryOperator` set that represent the syntactic structure of source code
/// as a tree. The AST is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines a node type for every language construct.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running code. It
/// standardizes error reporting and carries the source location of every
/// failure.
///
/// # Responsibilities
/// - Defines one error enum per phase (lexer, parser, scope, evaluator).
/// - Combines them into a single `Error` for the library entry points.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, scoping, evaluation and value
/// representations to provide a complete runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, environment, evaluator
///   and value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Creates an environment whose root frame already declares `pi`.
///
/// # Example
/// ```
/// use gune::{interpreter::value::core::Value, prelude};
///
/// let environment = prelude();
/// let pi = environment.lookup(environment.root(), "pi").unwrap();
///
/// assert_eq!(pi, Value::Float(std::f64::consts::PI));
/// ```
#[must_use]
pub fn prelude() -> Environment {
    [("pi".to_string(), Value::Float(std::f64::consts::PI))].into_iter()
                                                             .collect()
}

/// Runs source text against an environment and returns the value of its last
/// expression.
///
/// Names are resolved starting at the environment's root frame. The first
/// failure of any phase stops the run; the environment stays usable for the
/// next input.
///
/// # Errors
/// Returns an error if tokenizing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use gune::{interpreter::value::core::Value, prelude, run};
///
/// let environment = prelude();
///
/// assert_eq!(run("8 - 3 - 2", &environment).unwrap(), Value::Float(3.0));
/// assert_eq!(run("nil", &environment).unwrap(), Value::Nil);
/// assert!(run("5 / 0", &environment).is_err());
/// ```
pub fn run(source: &str, environment: &Environment) -> Result<Value, Error> {
    let tokens = tokenize(source)?;
    let program = parse(&tokens)?;
    let context = Context::new(environment, environment.root());

    Ok(context.eval_program(&program)?)
}

/// Returns the final evaluation result after execution.
///
/// This function runs the provided source string against a fresh
/// [`prelude`] environment.
///
/// # Errors
/// Returns an error if parsing or evaluation fails, or if any runtime error
/// occurs.
///
/// # Examples
/// ```
/// use gune::get_result;
///
/// // Simple expression: the result will be calculated and no error should occur.
/// let res = get_result("2 + 3 * 4");
/// assert_eq!(res.unwrap().to_string(), "14");
///
/// // Example with an intentional error (unknown variable).
/// let res = get_result("x + 1");
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str) -> Result<Value, Error> {
    run(source, &prelude())
}

/// Runs an interactive session: reads one line at a time, evaluates it and
/// writes the result.
///
/// Every line runs against the same `environment`. Results go to `output`
/// prefixed with `> `, and a failing line is reported on `errors` before the
/// loop moves on to the next one. Blank lines are skipped. The session ends on
/// `exit` or at the end of input.
///
/// # Errors
/// Returns the I/O error if a line cannot be read (for example because it is
/// not valid UTF-8) or if writing to `output` or `errors` fails.
///
/// # Example
/// ```
/// use gune::{prelude, repl};
///
/// let mut output = Vec::new();
/// let mut errors = Vec::new();
/// repl("2 * 3\nexit\n".as_bytes(), &mut output, &mut errors, &prelude()).unwrap();
///
/// assert!(String::from_utf8(output).unwrap().contains("> 6"));
/// assert!(errors.is_empty());
/// ```
pub fn repl<R, W, E>(input: R,
                     output: &mut W,
                     errors: &mut E,
                     environment: &Environment)
                     -> io::Result<()>
    where R: BufRead,
          W: Write,
          E: Write
{
    writeln!(output)?;
    writeln!(output, "gune repl v{}", env!("CARGO_PKG_VERSION"))?;

    let mut lines = input.lines();

    loop {
        write!(output, "# ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };

        match line?.trim() {
            "exit" => return Ok(()),
            "" => {},
            source => match run(source, environment) {
                Ok(value) => writeln!(output, "> {value}")?,
                Err(e) => writeln!(errors, "{e}")?,
            },
        }
    }
}
