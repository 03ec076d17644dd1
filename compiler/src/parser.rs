use parcel::parsers::character::expect_character;
use parcel::prelude::v1::*;

use crate::token::{Operator, Token, ESCAPE};

#[derive(PartialEq)]
pub enum ParseErr {
    InvalidExpression,
    Undefined(String),
}

impl std::fmt::Debug for ParseErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Undefined(err) => write!(f, "undefined parse error: {}", err),
            Self::InvalidExpression => write!(f, "provided expression is invalid",),
        }
    }
}

impl std::fmt::Display for ParseErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// Lexes an expression, in either infix or postfix order, into its tokens.
///
/// An escape marker makes the character following it a literal, whatever
/// it is. A trailing escape marker with nothing to escape is dropped.
pub fn parse(input: &str) -> Result<Vec<Token>, ParseErr> {
    let input = input.chars().enumerate().collect::<Vec<(usize, char)>>();
    let res = tokens().parse(input.as_slice());

    res.map_err(|err| ParseErr::Undefined(format!("unspecified parse error occured: {}", err)))
        .and_then(|ms| match ms {
            MatchStatus::Match {
                remainder, inner, ..
            } if remainder.is_empty() => Ok(inner),
            MatchStatus::Match { .. } | MatchStatus::NoMatch(..) => {
                Err(ParseErr::InvalidExpression)
            }
        })
}

fn tokens<'a>() -> impl Parser<'a, &'a [(usize, char)], Vec<Token>> {
    parcel::left(parcel::join(
        parcel::zero_or_more(token()),
        parcel::optional(dangling_escape()),
    ))
}

fn token<'a>() -> impl Parser<'a, &'a [(usize, char)], Token> {
    parcel::or(escaped_literal(), || {
        parcel::or(group(), || {
            parcel::or(operator().map(Token::Operator), || literal())
        })
    })
}

// Literals

fn escaped_literal<'a>() -> impl Parser<'a, &'a [(usize, char)], Token> {
    parcel::right(parcel::join(expect_character(ESCAPE), symbol())).map(Token::Literal)
}

fn dangling_escape<'a>() -> impl Parser<'a, &'a [(usize, char)], char> {
    expect_character(ESCAPE)
}

fn literal<'a>() -> impl Parser<'a, &'a [(usize, char)], Token> {
    symbol().predicate(|c| *c != ESCAPE).map(Token::Literal)
}

// Grouping

fn group<'a>() -> impl Parser<'a, &'a [(usize, char)], Token> {
    parcel::or(expect_character('(').map(|_| Token::GroupOpen), || {
        expect_character(')').map(|_| Token::GroupClose)
    })
}

// Operators

fn operator<'a>() -> impl Parser<'a, &'a [(usize, char)], Operator> {
    parcel::or(concatenate(), || {
        parcel::or(alternate(), || {
            parcel::or(zero_or_more(), || {
                parcel::or(one_or_more(), || zero_or_one())
            })
        })
    })
}

fn concatenate<'a>() -> impl Parser<'a, &'a [(usize, char)], Operator> {
    expect_character('.').map(|_| Operator::Concatenate)
}

fn alternate<'a>() -> impl Parser<'a, &'a [(usize, char)], Operator> {
    expect_character('|').map(|_| Operator::Alternate)
}

fn zero_or_more<'a>() -> impl Parser<'a, &'a [(usize, char)], Operator> {
    expect_character('*').map(|_| Operator::ZeroOrMore)
}

fn one_or_more<'a>() -> impl Parser<'a, &'a [(usize, char)], Operator> {
    expect_character('+').map(|_| Operator::OneOrMore)
}

fn zero_or_one<'a>() -> impl Parser<'a, &'a [(usize, char)], Operator> {
    expect_character('?').map(|_| Operator::ZeroOrOne)
}

// Terminals

fn symbol<'a>() -> impl Parser<'a, &'a [(usize, char)], char> {
    move |input: &'a [(usize, char)]| match input.first() {
        Some(&(pos, next)) => Ok(MatchStatus::Match {
            span: pos..pos + 1,
            remainder: &input[1..],
            inner: next,
        }),
        None => Ok(MatchStatus::NoMatch(input)),
    }
}
