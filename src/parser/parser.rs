//! Parser implementation for building the syntax tree.
//!
//! This module contains the main Parser struct and the program-level parse
//! loop. Expressions use a Pratt parser with NUD/LED handlers; statements are
//! dispatched on their leading token.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::{collections::HashMap, mem};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        source::TokenSource,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
    trace::Tracer,
};

/// How many expression and block levels may nest before parsing gives up
/// with [`ErrorImpl::NestingTooDeep`]. Parse functions recurse once per level,
/// and so do rendering and dropping the tree.
pub const MAX_NESTING_DEPTH: usize = 128;

/// The main parser structure that maintains parsing state.
///
/// The parser pulls tokens from its source on demand and never holds more
/// than the current token and one token of lookahead. Syntax errors are
/// collected rather than returned, so a single pass reports every problem it
/// can find.
pub struct Parser {
    /// Where tokens come from
    source: Box<dyn TokenSource>,
    /// The next token to be consumed
    current: Token,
    /// The token after `current`
    peek: Token,
    /// Errors recorded so far, in detection order
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for infix binding powers (precedence)
    binding_power_lookup: BPLookup,
    tracer: Tracer,
    /// Nesting levels entered so far, bounded by [`MAX_NESTING_DEPTH`]
    depth: usize,
}

impl Parser {
    /// Creates a parser over `source` with all handlers registered.
    pub fn new(source: impl TokenSource + 'static) -> Self {
        let mut source: Box<dyn TokenSource> = Box::new(source);
        let current = source.next_token();
        let peek = source.next_token();

        let mut parser = Parser {
            source,
            current,
            peek,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            tracer: Tracer::default(),
            depth: 0,
        };

        create_token_lookups(&mut parser);
        parser
    }

    /// Turns the BEGIN/END call trace on or off.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.tracer = Tracer::new(enabled);
        self
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the kind of the token after the current one.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Advances to the next token and returns the previous one.
    pub fn advance(&mut self) -> Token {
        let next = self.source.next_token();
        let peek = mem::replace(&mut self.peek, next);
        mem::replace(&mut self.current, peek)
    }

    /// Consumes the current token if it is of `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.current.kind == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expects a token of the specified kind and consumes it.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an
    /// `UnexpectedToken` error naming both kinds. Nothing is consumed on
    /// failure.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current.kind != expected_kind {
            return Err(self.error(ErrorImpl::UnexpectedToken {
                expected: expected_kind,
                found: self.current.kind,
            }));
        }

        Ok(self.advance())
    }

    /// Builds an error located at the current token.
    pub fn error(&self, error_impl: ErrorImpl) -> Error {
        Error::new(error_impl, self.get_position())
    }

    /// Records `error` and skips the offending token.
    pub fn recover(&mut self, error: Error) {
        log::debug!("recovering from `{}` at {:?}", error, self.current);
        self.errors.push(error);
        self.advance();
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current.kind != TokenKind::EOF
    }

    /// Binding power of the current token as an infix operator.
    pub fn current_binding_power(&self) -> BindingPower {
        self.binding_power_lookup
            .get(&self.current.kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Runs `f` between BEGIN and END trace lines for `label`.
    pub fn traced<T>(&mut self, label: &str, f: impl FnOnce(&mut Parser) -> T) -> T {
        self.tracer.begin(label);
        let result = f(self);
        self.tracer.end(label);
        result
    }

    /// Runs `f` one nesting level deeper. Levels taken with
    /// [`Parser::deepen`] inside `f` are released when it returns.
    pub fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let saved = self.depth;

        let result = match self.deepen() {
            Ok(()) => f(self),
            Err(error) => Err(error),
        };

        self.depth = saved;
        result
    }

    /// Takes one more nesting level, failing once the limit is reached.
    pub fn deepen(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(ErrorImpl::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            }));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn tracer(&self) -> &Tracer {
        &self.tracer
    }

    /// Returns the source offset of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start
    }

    /// Errors recorded so far, in detection order.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// The recorded errors as diagnostic strings.
    pub fn diagnostics(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// Parses statements until end of input.
    ///
    /// Always returns a program. A statement that fails to parse is dropped:
    /// its error is recorded and the offending token skipped, then parsing
    /// resumes. A non-empty [`Parser::errors`] means the tree is incomplete.
    pub fn parse_program(&mut self) -> Program {
        let mut body = vec![];

        while self.has_tokens() {
            match parse_stmt(self) {
                Ok(stmt) => body.push(stmt),
                Err(error) => self.recover(error),
            }
        }

        log::debug!(
            "parsed {} statement(s) with {} error(s)",
            body.len(),
            self.errors.len()
        );

        Program { body }
    }
}

/// Parses everything `source` yields into a program.
///
/// This is the main entry point for parsing.
///
/// # Returns
///
/// A tuple containing:
/// - The program, possibly missing statements that failed to parse
/// - The diagnostics, in the order they were found
pub fn parse(source: impl TokenSource + 'static) -> (Program, Vec<String>) {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();

    (program, parser.diagnostics())
}
