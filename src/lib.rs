//! GSC is a small, dynamically typed scripting language with lexical
//! scoping, implemented in Rust as a tree-walk interpreter with a
//! hand-written recursive descent parser.
//!
//! ## Scanning
//! The first step in the interpreter is scanning. Scanning is the process of
//! converting a string of characters into a list of tokens. A token is a
//! single unit of the language. For example, the string `1 + 2` would be
//! converted into the following tokens:
//! ```text
//! [Number(1), Plus, Number(2)]
//! ```
//! The scanner is implemented in the [`scanner`](scanner) module over a
//! peekable iterator of the characters in the source code. Trivial problems
//! like an unterminated string literal or an unexpected character are
//! reported as soon as they are encountered, and the scanner keeps going.
//! This is useful because it allows the user to fix multiple syntax errors
//! at once.
//!
//! ## Parsing
//! The second step in the interpreter is parsing. Parsing is the process of
//! converting a list of tokens into an abstract syntax tree. The parser is
//! implemented in the [`parser`](parser) module as a recursive descent
//! parser. The parser transforms the list of tokens into expressions and
//! statements. [`Expressions`](expr::Expr) are pieces of code that produce a
//! [`Value`](value::Value). [`Statements`](stmt::Stmt) are pieces of code
//! that do not produce a value but instead perform some action, like a
//! variable declaration or an if clause. Syntactic sugar is rewritten away
//! here as well: a `for` loop never reaches the tree, it is desugared into
//! an equivalent `while` loop during parsing.
//!
//! The parser reports syntax errors as [`ParseError`](error::ParseError)s.
//! Unlike the scanner, the parser catches errors that span multiple tokens.
//! Much like the scanner though, it continues parsing after an error using a
//! technique called synchronization, skipping ahead to the next plausible
//! statement boundary.
//!
//! ## Interpreting
//! The final step is interpreting, the process of evaluating the tree. The
//! interpreter is implemented in the [`interpreter`](interpreter) module as
//! a tree-walk over the statements. Most errors in a dynamically typed
//! language can only be caught at this point. For example, the following
//! program is valid GSC syntax but fails at runtime because it tries to add
//! a string and a number:
//! ```text
//! var a = "123";
//! var b = a + 123;
//! ```
//! Such failures are reported as [`RuntimeError`](error::RuntimeError)s and
//! abandon the rest of the program. The interpreter also manages the
//! [`environment`](environment) chain, a stack of hash maps in which each
//! map represents a scope; this is what gives the language lexical scoping.

use std::fs;
use std::io::Write;
use std::process;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

pub mod ast;
pub mod environment;
pub mod error;
pub mod expr;
pub mod interpreter;
pub mod literal;
pub mod parser;
pub mod scanner;
pub mod stmt;
pub mod token;
pub mod value;

use error::Diagnostics;
use interpreter::Interpreter;
use parser::Parser;
use scanner::Scanner;

#[allow(non_camel_case_types)]
pub struct gsc<'a> {
    interpreter: Interpreter<'a>,
    diagnostics: Diagnostics,
}

impl<'a> gsc<'a> {
    /// Creates a new interpreter session that prints to the given writer.
    pub fn new(out: &'a mut dyn Write) -> Self {
        gsc {
            interpreter: Interpreter::new(out),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Runs a script file and exits the process with a non-zero status if
    /// the file cannot be read, does not parse, or fails at runtime.
    pub fn run_file(&mut self, path: String) {
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(error) => {
                eprintln!("Could not open file {path}: {error}");
                process::exit(66);
            },
        };

        self.run(&contents);

        if self.diagnostics.had_error {
            process::exit(65);
        }
        if self.diagnostics.had_runtime_error {
            process::exit(70);
        }
    }

    /// Runs the interactive prompt. Each line is interpreted as a complete
    /// program and errors do not end the session; both error flags are
    /// reset before the next prompt.
    pub fn run_prompt(&mut self) {
        let mut editor = match DefaultEditor::new() {
            Ok(editor) => editor,
            Err(error) => {
                eprintln!("Could not start the prompt: {error}");
                process::exit(74);
            },
        };

        // History is best-effort; a missing or unwritable file is fine.
        let history = home::home_dir().map(|dir| dir.join(".gsc_history"));
        if let Some(path) = &history {
            let _ = editor.load_history(path);
        }

        loop {
            match editor.readline(">> ") {
                Ok(line) => {
                    let _ = editor.add_history_entry(line.as_str());
                    self.run(&line);
                    self.diagnostics.reset();
                },
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(error) => {
                    eprintln!("Could not read the prompt: {error}");
                    process::exit(74);
                },
            }
        }

        if let Some(path) = &history {
            let _ = editor.save_history(path);
        }
    }

    fn run(&mut self, source: &str) {
        let tokens = Scanner::new(source, &mut self.diagnostics).scan_tokens();

        if self.diagnostics.had_error {
            return;
        }

        let statements = Parser::new(tokens, &mut self.diagnostics).parse();

        if self.diagnostics.had_error {
            return;
        }

        self.interpreter.interpret(&statements, &mut self.diagnostics);
    }
}
