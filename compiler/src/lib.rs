//! Provides for the compilation of a restricted regular expression into an
//! automaton evaluatable by the `thompson_runtime` crate.
//!
//! Compilation runs in three steps. The expression is lexed into tokens,
//! rewritten from infix into postfix order, and the postfix sequence is
//! assembled into an automaton with Thompson's construction.
//!
//! # Syntax
//!
//! | symbol | meaning                        |
//! |--------|--------------------------------|
//! | `.`    | concatenation, written out     |
//! | `\|`   | alternation                    |
//! | `*`    | zero or more                   |
//! | `+`    | one or more                    |
//! | `?`    | zero or one                    |
//! | `( )`  | grouping                       |
//! | `\`    | the next character is literal  |
//!
//! Every other character matches itself.
//!
//! # Example
//!
//! ```rust
//! // Compilation of an expression into an automaton is accomplished by a
//! // single function exposed in the `thompson_compiler` crate.
//! use thompson_compiler::compile;
//!
//! // Evaluating a given input against an automaton is accomplished via a
//! // single exposed function in the `thompson_runtime` crate.
//! use thompson_runtime::matches;
//!
//! let automaton = compile("(a.b)*").expect("failed to compile");
//!
//! // The whole input has to be consumed for a match.
//! assert!(matches(&automaton, "abab"));
//! assert!(!matches(&automaton, "aba"));
//! ```

#[macro_use]
mod macros;

pub mod builder;
pub mod compiler;
pub mod parser;
pub mod postfix;
mod precedence;
pub mod token;

pub use compiler::{compile, CompileError};
pub use postfix::Postfix;
