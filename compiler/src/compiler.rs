//! Provides the single entry point that takes an expression from source
//! text to a runnable automaton.
//!
//! # Example
//!
//! ```
//! use thompson_compiler::{compile, CompileError};
//! use thompson_runtime::matches;
//!
//! // strings of 0s and 1s beginning with two zeros.
//! let automaton = compile("0.0.(0|1)*").unwrap();
//!
//! assert!(matches(&automaton, "001110"));
//! assert!(!matches(&automaton, "01110"));
//!
//! assert_eq!(Err(CompileError::EmptyExpression), compile("   "));
//! ```

use thompson_runtime::Automaton;

use crate::builder::{build, BuildErr};
use crate::parser::{parse, ParseErr};
use crate::postfix::to_postfix;

/// Represents the ways an expression can fail to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileError {
    /// Nothing remained to compile once surrounding whitespace was trimmed.
    EmptyExpression,
    /// The operators and operands of the expression do not reduce to a
    /// single automaton.
    MalformedExpression,
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::EmptyExpression => write!(f, "empty expression"),
            CompileError::MalformedExpression => write!(f, "malformed expression"),
        }
    }
}

impl std::error::Error for CompileError {}

impl From<BuildErr> for CompileError {
    fn from(_: BuildErr) -> Self {
        CompileError::MalformedExpression
    }
}

impl From<ParseErr> for CompileError {
    fn from(_: ParseErr) -> Self {
        CompileError::MalformedExpression
    }
}

/// Compiles an expression into an automaton.
///
/// Leading and trailing whitespace is trimmed before compiling. No partial
/// automaton is ever returned for a failed compilation.
pub fn compile(expression: &str) -> Result<Automaton, CompileError> {
    let expression = expression.trim();
    if expression.is_empty() {
        return Err(CompileError::EmptyExpression);
    }

    let tokens = parse(expression).map_err(|err| {
        debug!("failed to lex {:?}: {}", expression, err);
        CompileError::from(err)
    })?;

    let postfix = to_postfix(&tokens);
    debug!("postfix form of {:?}: {}", expression, postfix);

    let automaton = build(&postfix).map_err(|err| {
        debug!("failed to build {:?} from {}: {}", expression, postfix, err);
        CompileError::from(err)
    })?;
    debug!("compiled {:?} into {} nodes", expression, automaton.len());

    Ok(automaton)
}
