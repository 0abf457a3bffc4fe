mod logger;

use clap::Parser;
use frontend::{
    format_error,
    repl::{evaluate_line, Mode, Outcome, PROMPT},
};
use log::LevelFilter;
use rustyline::{error::ReadlineError, DefaultEditor};

/// Reads lines of source and prints how they parse.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Print the parser's BEGIN/END call trace to stderr
    #[arg(long)]
    trace: bool,

    /// Print the token stream instead of the parsed program
    #[arg(long)]
    tokens: bool,
}

fn main() -> rustyline::Result<()> {
    let cli = Cli::parse();

    let level = if cli.trace {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    };
    if let Err(error) = logger::init(level) {
        eprintln!("failed to install logger: {}", error);
    }

    let mode = if cli.tokens { Mode::Tokens } else { Mode::Parse };
    let mut editor = DefaultEditor::new()?;

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }

                editor.add_history_entry(line.as_str())?;
                print_outcome(evaluate_line(&line, mode, cli.trace), &line);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(error) => {
                log::error!("failed to read line: {}", error);
                return Err(error);
            }
        }
    }

    Ok(())
}

fn print_outcome(outcome: Outcome, line: &str) {
    match outcome {
        Outcome::Program(rendered) => println!("{}", rendered),
        Outcome::Tokens(tokens) => {
            for token in tokens {
                println!("{}", token);
            }
        }
        Outcome::Diagnostics(errors) => {
            for error in &errors {
                println!("\t{}", error);
            }

            for error in &errors {
                eprintln!("{}", format_error(error, line));
            }

            println!("{} error(s) found", errors.len());
        }
        Outcome::Fault(message) => {
            println!("internal parser fault: {}", message);
        }
    }
}
