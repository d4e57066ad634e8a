use std::{fs, io};

use clap::Parser;
use gune::{prelude, repl, run};

/// gune evaluates small arithmetic expressions over numbers and `nil`.
///
/// Without any contents, gune starts an interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells gune to look at a file instead of a script.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// The script to evaluate, or its path when `--file` is set.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        if let Err(e) = repl(io::stdin().lock(), &mut io::stdout(), &mut io::stderr(), &prelude()) {
            eprintln!("Failed to read from standard input: {e}");
            std::process::exit(1);
        }
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
                                         eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                                         std::process::exit(1);
                                     })
    } else {
        contents
    };

    match run(&script, &prelude()) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
