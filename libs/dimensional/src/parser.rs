//! Parser for textual unit specifications.
//!
//! ```text
//! spec  := "1" | "1" "/" terms | terms ( "/" terms )?
//! terms := term ( sep term )*
//! sep   := whitespace | "." | "*" | "·"
//! term  := symbol ( "^" exponent )?
//! exponent := integer | "{" integer "}"
//! ```
//!
//! Everything after the `/` belongs to the denominator, so `kg/m s` reads as
//! kg m⁻¹ s⁻¹.

use crate::ast::{UnitSpec, UnitTerm};
use crate::error::{Error, Result};

pub fn parse_unit_spec(input: &str) -> Result<UnitSpec> {
    Parser { input, pos: 0 }.parse()
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn parse(mut self) -> Result<UnitSpec> {
        let mut spec = UnitSpec::one();
        self.skip_whitespace();
        if self.peek().is_none() {
            return Ok(spec);
        }

        let mut in_denominator = false;
        if self.peek() == Some('1') {
            self.bump();
            self.skip_whitespace();
            match self.peek() {
                None => return Ok(spec),
                Some('/') => {}
                Some(_) => return Err(self.error("expected '/' after '1'")),
            }
        } else {
            spec.numerator.push(self.term()?);
        }

        loop {
            let spaced = self.skip_whitespace();
            match self.peek() {
                None => return Ok(spec),
                Some('/') => {
                    if in_denominator {
                        return Err(self.error("only one '/' is allowed"));
                    }
                    self.bump();
                    in_denominator = true;
                    self.skip_whitespace();
                }
                Some('.' | '*' | '·') => {
                    self.bump();
                    self.skip_whitespace();
                }
                Some(_) if spaced => {}
                Some(_) => return Err(self.error("expected a separator between unit terms")),
            }

            let term = self.term()?;
            if in_denominator {
                spec.denominator.push(term);
            } else {
                spec.numerator.push(term);
            }
        }
    }

    fn term(&mut self) -> Result<UnitTerm> {
        let start = self.pos;
        if self.peek() == Some('\\') {
            self.bump();
        }
        while matches!(self.peek(), Some(c) if c.is_alphabetic() || c == '_') {
            self.bump();
        }
        let symbol = &self.input[start..self.pos];
        if symbol.is_empty() || symbol == "\\" {
            return Err(Error::Syntax {
                pos: start,
                message: "expected a unit symbol",
            });
        }

        let exponent = if self.peek() == Some('^') {
            self.bump();
            self.exponent()?
        } else {
            1
        };

        Ok(UnitTerm {
            symbol: symbol.to_string(),
            exponent,
        })
    }

    fn exponent(&mut self) -> Result<i32> {
        let braced = self.peek() == Some('{');
        if braced {
            self.bump();
        }

        let start = self.pos;
        if matches!(self.peek(), Some('-' | '+')) {
            self.bump();
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.bump();
        }
        let exponent = self.input[start..self.pos]
            .parse::<i32>()
            .map_err(|_| Error::Syntax {
                pos: start,
                message: "expected an integer exponent",
            })?;

        if braced {
            if self.peek() != Some('}') {
                return Err(self.error("expected '}'"));
            }
            self.bump();
        }
        Ok(exponent)
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
        self.pos > start
    }

    fn error(&self, message: &'static str) -> Error {
        Error::Syntax {
            pos: self.pos,
            message,
        }
    }
}
