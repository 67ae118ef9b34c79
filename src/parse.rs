//! The textual mini-language for credibility objects.
//!
//! ```text
//! (A1, A2, F1), (A2, A4, B)
//! ```
//!
//! A comma-separated sequence of parenthesized `(source, target, reporter)`
//! triples. Whitespace around tokens is ignored and the empty string is the
//! empty sequence. Values are converted with [`FromStr`], so the same syntax
//! serves string, integer and float knowledge bases.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::graph::{CredibilityGraph, CredibilityObject, Label, Vertex};

/// Parse `text` into triples, in left-to-right textual order.
pub fn parse_objects<N, L>(text: &str) -> Result<Vec<CredibilityObject<N, L>>, ParseError>
where
    N: FromStr,
    N::Err: fmt::Display,
    L: FromStr,
    L::Err: fmt::Display,
{
    let mut cursor = Cursor { text, pos: 0 };
    let mut objects = Vec::new();

    cursor.skip_whitespace();
    if cursor.at_end() {
        return Ok(objects);
    }

    loop {
        cursor.expect('(')?;
        let source = cursor.atom::<N>()?;
        cursor.expect(',')?;
        let target = cursor.atom::<N>()?;
        cursor.expect(',')?;
        let reporter = cursor.atom::<L>()?;
        cursor.expect(')')?;
        objects.push(CredibilityObject::new(source, target, reporter));

        cursor.skip_whitespace();
        if cursor.at_end() {
            return Ok(objects);
        }
        cursor.expect(',')?;
    }
}

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek().filter(|c| c.is_whitespace()) {
            self.pos += c.len_utf8();
        }
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(c) => ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found: c.to_string(),
                offset: self.pos,
            },
            None => ParseError::UnexpectedEnd {
                expected: expected.to_string(),
            },
        }
    }

    fn expect(&mut self, want: char) -> Result<(), ParseError> {
        self.skip_whitespace();
        if self.peek() == Some(want) {
            self.pos += want.len_utf8();
            Ok(())
        } else {
            Err(self.unexpected(&format!("'{want}'")))
        }
    }

    /// Read up to the next delimiter and convert the trimmed token.
    fn atom<T>(&mut self) -> Result<T, ParseError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.skip_whitespace();
        let start = self.pos;
        while let Some(c) = self.peek().filter(|c| !matches!(*c, '(' | ')' | ',')) {
            self.pos += c.len_utf8();
        }
        let raw = self.text[start..self.pos].trim_end();
        if raw.is_empty() {
            return Err(self.unexpected("a value"));
        }
        raw.parse().map_err(|e: T::Err| ParseError::InvalidAtom {
            atom: raw.to_string(),
            offset: start,
            message: e.to_string(),
        })
    }
}

/// Renders the edge set back into the mini-language, in insertion order.
/// Isolated vertices have no textual form and are omitted.
impl<N, L> fmt::Display for CredibilityGraph<N, L>
where
    N: Vertex + fmt::Display,
    L: Label + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, obj) in self.edges().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "({},{},{})", obj.source, obj.target, obj.reporter)?;
        }
        Ok(())
    }
}
