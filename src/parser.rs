mod base;
mod interface;
mod printer;

pub use self::base::ParseError;

use std::env;

use crate::argument::Argument;
use crate::constant::PROGRAM_UNKNOWN;
use crate::registry::{LookupError, Registry};
use crate::value::CanonicalValue;
use self::base::Action;
use self::interface::{Console, UserInterface};
use self::printer::Printer;

/// The declare-then-retrieve argument parser.
///
/// Declare parameters up front, [`parse`](ArgumentParser::parse) the token vector once, then
/// query typed values back out with [`get`](ArgumentParser::get).
pub struct ArgumentParser {
    program: String,
    registry: Registry,
    positionals: Vec<String>,
    user_interface: Box<dyn UserInterface>,
}

impl std::fmt::Debug for ArgumentParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgumentParser")
            .field("program", &self.program)
            .finish()
    }
}

impl Default for ArgumentParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ArgumentParser {
    pub fn new() -> Self {
        Self::with_interface(Box::new(Console::default()))
    }

    fn with_interface(user_interface: Box<dyn UserInterface>) -> Self {
        Self {
            program: PROGRAM_UNKNOWN.to_string(),
            registry: Registry::default(),
            positionals: Vec::default(),
            user_interface,
        }
    }

    /// Declare a parameter with the given default value.
    ///
    /// A name beginning with `-` declares an option; any other name declares a positional.
    /// Declaring the same name twice replaces the prior declaration.
    pub fn declare<T: CanonicalValue>(
        &mut self,
        name: impl Into<String>,
        help: impl Into<String>,
        default: T,
    ) {
        self.registry.declare(name, help, default, T::default());
    }

    /// Declare a parameter with a store value.
    ///
    /// When `store` differs from the zero value of `T` (and the name is not positional), the
    /// parameter becomes a flag: its presence on the command line assigns `store` without
    /// consuming a following token.
    pub fn declare_store<T: CanonicalValue>(
        &mut self,
        name: impl Into<String>,
        help: impl Into<String>,
        default: T,
        store: T,
    ) {
        self.registry.declare(name, help, default, store);
    }

    /// Run the single-pass token consumption over `tokens`.
    ///
    /// Token 0 is recorded as the program name, not parsed. Encountering `--help`/`-h`
    /// renders the help text and returns immediately; no further tokens are processed.
    ///
    /// Parsing mutates the declared parameters in place, so calling this twice without
    /// re-declaring compounds the two invocations.
    pub fn parse(&mut self, tokens: &[&str]) -> Result<(), ParseError> {
        let rest = match tokens {
            [program, rest @ ..] => {
                self.program = program.to_string();
                rest
            }
            [] => tokens,
        };

        match base::consume(&mut self.registry, rest)? {
            Action::Continue { positionals } => {
                for positional in positionals.iter().rev() {
                    self.user_interface
                        .print(format!("Got positional '{positional}'."));
                }

                self.positionals = positionals;
                Ok(())
            }
            Action::PrintHelp => {
                self.render_help();
                Ok(())
            }
        }
    }

    /// [`parse`](ArgumentParser::parse) over this process's invocation arguments.
    pub fn parse_env(&mut self) -> Result<(), ParseError> {
        let tokens: Vec<String> = env::args().collect();
        self.parse(
            tokens
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        )
    }

    /// Retrieve the value declared under `name`, decoded at type `T`.
    ///
    /// `T` must match the declared type precisely; no implicit conversion is performed.
    pub fn get<T: CanonicalValue>(&self, name: &str) -> Result<T, LookupError> {
        self.registry.get(name)
    }

    /// Render the usage summary and per-option help.
    pub fn render_help(&self) {
        Printer::snapshot(&self.registry).print_help(self.program.clone(), &*self.user_interface);
    }

    /// Render each declared parameter with its current value.
    pub fn render_values(&self) {
        printer::print_values(&self.registry, &*self.user_interface);
    }

    /// Enumerate the declared parameters, in declaration order.
    pub fn list(&self) -> impl Iterator<Item = &Argument> {
        self.registry.iter()
    }

    /// The positional tokens collected by the last [`parse`](ArgumentParser::parse), in
    /// reverse encounter order.
    ///
    /// Positional tokens are recorded for diagnostics only; they are never bound to declared
    /// positional parameters.
    pub fn positionals(&self) -> impl Iterator<Item = &str> {
        self.positionals.iter().rev().map(String::as_str)
    }
}
