//! `clarg` is a small typed command line argument parser.
//!
//! Parameters are declared up front with a primitive type ([`ValueType`]), a help string, and
//! a default value; the parser then consumes the token vector in a single pass and the caller
//! retrieves typed values back out.
//! Internally every value is held as a canonical string and decoded on demand, so a retrieval
//! at the wrong type is an error, never a coercion.
//!
//! # Usage
//! ```
//! use clarg::ArgumentParser;
//!
//! let mut parser = ArgumentParser::new();
//! parser.declare("--output", "Output file path", "/dev/stdout".to_string());
//! parser.declare("--integer", "Integer value only", 0_i64);
//! parser.declare_store("--verbose", "Enable verbose output", false, true);
//!
//! parser
//!     .parse(&["demo", "--output", "result.txt", "--verbose"])
//!     .unwrap();
//!
//! assert_eq!(parser.get::<String>("--output").unwrap(), "result.txt");
//! assert_eq!(parser.get::<i64>("--integer").unwrap(), 0);
//! assert_eq!(parser.get::<bool>("--verbose").unwrap(), true);
//! ```
//!
//! `--help`/`-h` is always recognized and renders the declared parameters:
//! ```console
//! $ demo -h
//! usage: demo [-h]
//!
//! options:
//!  -h, --help  Show this help message and exit.
//!  --verbose   Enable verbose output
//!  --integer   Integer value only
//!  --output    Output file path
//! ```
//!
//! # Semantics
//! * A name beginning with `-` declares an option; any other name declares a positional.
//! * An option whose store value differs from the type's zero value is a *flag*: its presence
//!   assigns the store value and consumes no following token. Any other option consumes the
//!   following token as its value.
//! * Option tokens that match no declaration are skipped, not rejected.
//! * Positional tokens are collected for diagnostics only; they are not bound to declared
//!   positional parameters.
//!
//! # Features
//! * `tracing_debug`: emit `tracing` debug events from the token-consumption loop.
mod argument;
mod constant;
mod parser;
mod registry;
mod value;

pub use argument::Argument;
pub use parser::{ArgumentParser, ParseError};
pub use registry::LookupError;
pub use value::{CanonicalValue, ConversionError, ValueType};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
