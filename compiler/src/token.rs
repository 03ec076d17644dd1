use std::fmt::Display;

/// The escape marker, forcing the following character to be read as a
/// literal.
pub const ESCAPE: char = '\\';

/// The operators of the expression language, in their postfix form each
/// consumes one or two fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `.`
    Concatenate,
    /// `|`
    Alternate,
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
    /// `?`
    ZeroOrOne,
}

impl Operator {
    pub const fn as_char(self) -> char {
        match self {
            Operator::Concatenate => '.',
            Operator::Alternate => '|',
            Operator::ZeroOrMore => '*',
            Operator::OneOrMore => '+',
            Operator::ZeroOrOne => '?',
        }
    }

    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Operator::Concatenate),
            '|' => Some(Operator::Alternate),
            '*' => Some(Operator::ZeroOrMore),
            '+' => Some(Operator::OneOrMore),
            '?' => Some(Operator::ZeroOrOne),
            _ => None,
        }
    }

    /// Returns the number of fragments the operator consumes.
    pub const fn arity(self) -> usize {
        match self {
            Operator::Concatenate | Operator::Alternate => 2,
            Operator::ZeroOrMore | Operator::OneOrMore | Operator::ZeroOrOne => 1,
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single lexed unit of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Literal(char),
    Operator(Operator),
    GroupOpen,
    GroupClose,
}

impl Token {
    /// Returns the character the token is written as, ignoring any escape
    /// marker.
    pub const fn as_char(self) -> char {
        match self {
            Token::Literal(c) => c,
            Token::Operator(op) => op.as_char(),
            Token::GroupOpen => '(',
            Token::GroupClose => ')',
        }
    }
}

impl From<Operator> for Token {
    fn from(src: Operator) -> Self {
        Self::Operator(src)
    }
}

/// Returns `true` if `c` has to be escaped to be read as a literal.
pub const fn is_reserved(c: char) -> bool {
    matches!(c, '(' | ')' | ESCAPE) || Operator::from_char(c).is_some()
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Literal(c) if is_reserved(*c) => write!(f, "{}{}", ESCAPE, c),
            other => write!(f, "{}", other.as_char()),
        }
    }
}
