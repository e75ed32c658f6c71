use std::str::FromStr;

use thiserror::Error;

use crate::{Monomial, Polynomial};

/// Errors that can occur when parsing a polynomial from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty polynomial expression")]
    Empty,

    #[error("unexpected character '{found}' at position {position}")]
    UnexpectedChar { found: char, position: usize },

    #[error("expected a term at position {position}")]
    MissingTerm { position: usize },

    #[error("invalid coefficient '{text}'")]
    InvalidCoefficient { text: String },

    #[error("invalid exponent at position {position}")]
    InvalidExponent { position: usize },
}

/// Parses a sum of monomials in `x`, such as `x^6 - 3x - 1` or `2.5*x^2 + x`.
///
/// Each term is an optional coefficient, an optional `*`, and an optional
/// `x` with an optional `^n`; at least one of coefficient or `x` is required.
/// Terms are kept in the order written.
impl FromStr for Polynomial {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cursor = Cursor::new(s);
        cursor.skip_whitespace();
        if cursor.is_done() {
            return Err(ParseError::Empty);
        }

        let mut polynomial = Polynomial::new();
        let mut first = true;

        while !cursor.is_done() {
            let negative = match cursor.sign() {
                Some(negative) => negative,
                None if first => false,
                None => return Err(cursor.unexpected()),
            };
            cursor.skip_whitespace();

            let term = cursor.term()?;
            polynomial.add_monomial(if negative { term.negated() } else { term });

            cursor.skip_whitespace();
            first = false;
        }

        Ok(polynomial)
    }
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn is_done(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let (src, start) = (self.src, self.pos);
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
        &src[start..self.pos]
    }

    fn skip_whitespace(&mut self) {
        self.eat_while(char::is_whitespace);
    }

    fn unexpected(&self) -> ParseError {
        match self.peek() {
            Some(found) => ParseError::UnexpectedChar {
                found,
                position: self.pos,
            },
            None => ParseError::MissingTerm { position: self.pos },
        }
    }

    /// Consumes a leading `+` or `-`, returning whether it was negative.
    fn sign(&mut self) -> Option<bool> {
        if self.eat('+') {
            Some(false)
        } else if self.eat('-') {
            Some(true)
        } else {
            None
        }
    }

    fn term(&mut self) -> Result<Monomial, ParseError> {
        let coefficient = self.coefficient()?;
        self.skip_whitespace();

        let has_star = self.eat('*');
        if has_star {
            self.skip_whitespace();
        }

        if !self.eat('x') {
            return match coefficient {
                Some(c) if !has_star => Ok(Monomial::constant(c)),
                _ if self.is_done() => Err(ParseError::MissingTerm { position: self.pos }),
                _ => Err(self.unexpected()),
            };
        }

        let exponent = self.exponent()?;
        Ok(Monomial::new(coefficient.unwrap_or(1.0), exponent))
    }

    fn coefficient(&mut self) -> Result<Option<f64>, ParseError> {
        let start = self.pos;
        self.eat_while(|c| c.is_ascii_digit());
        if self.eat('.') {
            self.eat_while(|c| c.is_ascii_digit());
        }
        if self.pos > start && matches!(self.peek(), Some('e' | 'E')) {
            self.bump();
            if !self.eat('+') {
                self.eat('-');
            }
            self.eat_while(|c| c.is_ascii_digit());
        }

        let text = &self.src[start..self.pos];
        if text.is_empty() {
            return Ok(None);
        }
        text.parse::<f64>()
            .map(Some)
            .map_err(|_| ParseError::InvalidCoefficient {
                text: text.to_owned(),
            })
    }

    fn exponent(&mut self) -> Result<u32, ParseError> {
        self.skip_whitespace();
        if !self.eat('^') {
            return Ok(1);
        }
        self.skip_whitespace();

        let position = self.pos;
        let digits = self.eat_while(|c| c.is_ascii_digit());
        digits
            .parse::<u32>()
            .map_err(|_| ParseError::InvalidExponent { position })
    }
}
