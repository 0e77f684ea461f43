use crate::token::{Token, Type};

/// Error state shared by the scanner, the parser and the interpreter.
/// The driver owns one of these, consults the flags to decide whether to
/// keep going, and resets them between prompt lines.
#[derive(Debug, Default)]
pub struct Diagnostics {
    pub had_error: bool,
    pub had_runtime_error: bool,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics::default()
    }

    /// Resets both flags so an error on one prompt line does not poison
    /// the next one.
    pub fn reset(&mut self) {
        self.had_error = false;
        self.had_runtime_error = false;
    }

    /// Reports a lexical error that is not tied to a token.
    pub fn scan_error(&mut self, line: usize, message: &str) {
        self.report(line, "", message);
    }

    /// Reports a syntax error at the offending token.
    pub fn parse_error(&mut self, error: &ParseError) {
        if error.token.r#type == Type::EOF {
            self.report(error.token.line, "at end", &error.message);
        } else {
            let location = format!("at '{}'", error.token.lexeme);
            self.report(error.token.line, &location, &error.message);
        }
    }

    /// Reports a runtime error and marks the run as failed.
    pub fn runtime_error(&mut self, error: &RuntimeError) {
        eprintln!("{}\n[line {}]", error.message, error.token.line);
        self.had_runtime_error = true;
    }

    fn report(&mut self, line: usize, location: &str, message: &str) {
        eprintln!("[line {line}] Error {location}: {message}");
        self.had_error = true;
    }
}

/// Represents an error that occurs during parsing.
/// The declaration loop catches these and recovers by synchronizing.
#[derive(Debug)]
pub struct ParseError {
    pub token: Token,
    pub message: String,
}

/// Represents an error that occurs during runtime. It carries the token
/// that triggered it so the report can name the offending line.
#[derive(Debug)]
pub struct RuntimeError {
    pub token: Token,
    pub message: String,
}
