//! Per-line evaluation for the interactive read-loop.
//!
//! The loop itself lives in the binary; this module turns one input line
//! into an [`Outcome`] and is where parser faults are contained. A panic
//! inside the lexer or parser is caught here and reported as
//! [`Outcome::Fault`], so the session can carry on with fresh state.

use std::panic::{self, UnwindSafe};

use crate::{
    errors::errors::Error,
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::Token,
    },
    parser::parser::Parser,
};

pub const PROMPT: &str = ">> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Parse,
    Tokens,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Canonical rendering of a cleanly parsed line.
    Program(String),
    Tokens(Vec<Token>),
    /// The line was rejected; one error per problem found.
    Diagnostics(Vec<Error>),
    /// The parser hit an internal fault. Carries the panic message.
    Fault(String),
}

pub fn evaluate_line(line: &str, mode: Mode, trace: bool) -> Outcome {
    let source = line.to_string();

    run_guarded(move || match mode {
        Mode::Tokens => Outcome::Tokens(tokenize(source)),
        Mode::Parse => {
            let mut parser = Parser::new(Lexer::new(source)).with_tracing(trace);
            let program = parser.parse_program();

            if parser.errors().is_empty() {
                Outcome::Program(program.to_string())
            } else {
                Outcome::Diagnostics(parser.errors().to_vec())
            }
        }
    })
}

/// Runs `f`, turning a panic into [`Outcome::Fault`].
pub fn run_guarded<F>(f: F) -> Outcome
where
    F: FnOnce() -> Outcome + UnwindSafe,
{
    panic::catch_unwind(f).unwrap_or_else(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| message.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| String::from("unknown fault"));

        log::error!("parser fault: {}", message);
        Outcome::Fault(message)
    })
}
