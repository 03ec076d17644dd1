//! Operator precedence for the infix to postfix conversion.

use crate::token::Token;

/// Binding strength of each operator symbol. An open group binds weakest of
/// all so that nothing is ever popped past it.
const PRECEDENCE_TABLE: [(char, u8); 6] = [
    // one or more
    ('+', 3),
    // zero or more
    ('*', 3),
    // zero or one
    ('?', 3),
    // concatenate
    ('.', 2),
    // alternate
    ('|', 1),
    ('(', 0),
];

/// Anything missing from the table outranks every operator.
pub const LITERAL_PRECEDENCE: u8 = PRECEDENCE_TABLE.len() as u8 + 1;

fn lookup(symbol: char) -> Option<u8> {
    PRECEDENCE_TABLE
        .iter()
        .find(|(operator, _)| *operator == symbol)
        .map(|&(_, precedence)| precedence)
}

/// Returns the precedence of a token.
///
/// Literals never consult the table, so an escaped operator symbol ranks as
/// a literal.
pub fn precedence(token: Token) -> u8 {
    match token {
        Token::Literal(_) => LITERAL_PRECEDENCE,
        other => lookup(other.as_char()).unwrap_or(LITERAL_PRECEDENCE),
    }
}
