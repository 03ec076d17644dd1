//! Rewrites an infix token sequence into postfix order with a shunting-yard
//! pass.
//!
//! # Known limitations
//!
//! Concatenation is never inserted implicitly, `a.b` has to be written out
//! for `ab`. Adjacent literals without an operator between them are emitted
//! as separate operands and fail to reduce at build time.
//!
//! Unbalanced groups are tolerated rather than rejected. An unmatched `)`
//! flushes every pending operator and an unmatched `(` is dropped.

use std::fmt::Display;
use std::str::FromStr;

use crate::parser::{parse, ParseErr};
use crate::precedence::precedence;
use crate::token::Token;

/// A token sequence in postfix order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Postfix(Vec<Token>);

impl Postfix {
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[Token]> for Postfix {
    fn as_ref(&self) -> &[Token] {
        &self.0
    }
}

impl Display for Postfix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for token in self.0.iter() {
            write!(f, "{}", token)?
        }

        Ok(())
    }
}

impl FromStr for Postfix {
    type Err = ParseErr;

    /// Reads a postfix text, such as `ab.*`, without reordering it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(Self)
    }
}

/// Converts an infix token sequence into postfix order.
///
/// # Example
///
/// ```
/// use thompson_compiler::parser::parse;
/// use thompson_compiler::postfix::to_postfix;
///
/// let tokens = parse("0.0.(0|1)*").unwrap();
///
/// assert_eq!("00.01|*.", to_postfix(&tokens).to_string());
/// ```
pub fn to_postfix(tokens: &[Token]) -> Postfix {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = vec![];

    for &token in tokens {
        match token {
            Token::GroupOpen => stack.push(token),
            Token::GroupClose => {
                // the matching open group is discarded, if there is one.
                while let Some(top) = stack.pop() {
                    if top == Token::GroupOpen {
                        break;
                    }
                    output.push(top);
                }
            }
            Token::Literal(_) | Token::Operator(_) => {
                while let Some(&top) = stack.last() {
                    if precedence(top) < precedence(token) {
                        break;
                    }
                    output.push(top);
                    stack.pop();
                }
                stack.push(token);
            }
        }
    }

    output.extend(
        stack
            .into_iter()
            .rev()
            .filter(|token| *token != Token::GroupOpen),
    );

    Postfix(output)
}
