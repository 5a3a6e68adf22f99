use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    process,
};

use clap::Parser;
use rpni::interpreter::{evaluator::evaluate, lexer::tokenize};

/// rpni is a stack-based interpreter for Reverse Polish Notation
/// arithmetic.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Run the given source file.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Start a REPL-style interactive session.
    #[arg(short = 's', long)]
    interactive: bool,

    /// Dump the token list after lexing and the remaining stack after
    /// evaluation.
    #[arg(long)]
    trace: bool,
}

fn main() {
    let args = Args::parse();

    if let Some(path) = &args.input {
        let source = fs::read_to_string(path).unwrap_or_else(|_| {
                         eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                   path.display());
                         process::exit(1);
                     });

        if let Err(e) = run_unit(&source, args.trace) {
            eprintln!("{e}");
            process::exit(1);
        }
    } else if args.interactive {
        if let Err(e) = repl(args.trace) {
            eprintln!("{e}");
            process::exit(1);
        }
    } else {
        eprintln!("Nothing to do: pass --input <FILE> or --interactive. See --help.");
        process::exit(2);
    }
}

/// Runs one full tokenize-then-evaluate pass over a source unit, writing
/// `print` output to stdout. With `trace` enabled, the token list and the
/// remaining stack are dumped around the evaluation.
fn run_unit(source: &str, trace: bool) -> Result<(), Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    if trace {
        for token in &tokens {
            println!("[INFO] {token}");
        }
    }

    let mut stdout = io::stdout();
    let stack = evaluate(&tokens, &mut stdout)?;
    if trace {
        stack.dump(&mut stdout)?;
    }
    Ok(())
}

/// The interactive line loop. Every line is a fresh pass with its own token
/// sequence and operand stack; errors are reported and the loop continues.
/// An empty line or end of input ends the session.
fn repl(trace: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("repl> ");
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        if line.is_empty() {
            break;
        }

        if let Err(e) = run_unit(&line, trace) {
            eprintln!("{e}");
        }

        print!("repl> ");
        stdout.flush()?;
    }
    Ok(())
}
