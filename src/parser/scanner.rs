//! Token-level reading primitives over the geometry text.
//!
//! The scanner moves strictly forward. Apart from [`Scanner::peek_char`]
//! (one character of lookahead) every primitive either consumes what it
//! recognised or fails with a [`ScanError`] that the calling section turns
//! into a typed error.

use crate::base::Position;

/// A token or keyword mismatch at a byte offset of the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanError {
    pub offset: usize,
    pub expected: String,
    pub found: String,
}

impl ScanError {
    /// Human-readable description, without location.
    pub fn message(&self) -> String {
        format!("expected {}, found {}", self.expected, self.found)
    }
}

pub type ScanResult<T> = Result<T, ScanError>;

/// Forward cursor over `text[pos..end]`.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    text: &'a str,
    pos: usize,
    end: usize,
    comment: char,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str, comment: char) -> Self {
        Self {
            text,
            pos: 0,
            end: text.len(),
            comment,
        }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..self.end]
    }

    /// Byte offset of the cursor in the full text.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Line/column of the cursor.
    pub fn position(&self) -> Position {
        Position::from_offset(self.text, self.pos)
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.end
    }

    /// Error located at the next non-blank character.
    fn error(&self, expected: impl Into<String>) -> ScanError {
        let rest = self.rest();
        let found = match rest.split_whitespace().next() {
            Some(word) => format!("'{word}'"),
            None => "end of input".to_string(),
        };
        ScanError {
            offset: self.pos + (rest.len() - rest.trim_start().len()),
            expected: expected.into(),
            found,
        }
    }

    fn advance(&mut self, bytes: usize) {
        self.pos = (self.pos + bytes).min(self.end);
    }

    pub fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.advance(rest.len() - rest.trim_start().len());
    }

    /// Skip spaces and tabs without leaving the current line.
    pub fn skip_inline_whitespace(&mut self) {
        let rest = self.rest();
        self.advance(rest.len() - rest.trim_start_matches([' ', '\t']).len());
    }

    /// Skip whitespace and every whole line starting with the comment marker.
    pub fn skip_comments(&mut self) {
        loop {
            self.skip_whitespace();
            if !self.rest().starts_with(self.comment) {
                break;
            }
            self.rest_of_line();
        }
    }

    /// Next character, without skipping whitespace or consuming it.
    pub fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume `literal` after optional whitespace, or fail.
    pub fn expect(&mut self, literal: &str) -> ScanResult<()> {
        if self.eat(literal) {
            Ok(())
        } else {
            Err(self.error(format!("'{}'", literal.trim_end())))
        }
    }

    /// Consume `literal` after optional whitespace if it is there.
    ///
    /// Whitespace is only consumed when the literal matches.
    pub fn eat(&mut self, literal: &str) -> bool {
        let rest = self.rest();
        let trimmed = rest.trim_start();
        if trimmed.starts_with(literal) {
            self.advance(rest.len() - trimmed.len() + literal.len());
            true
        } else {
            false
        }
    }

    /// Like [`Scanner::eat`], but never looks past the end of the current line.
    pub fn eat_on_line(&mut self, literal: &str) -> bool {
        let rest = self.rest();
        let trimmed = rest.trim_start_matches([' ', '\t']);
        if trimmed.starts_with(literal) {
            self.advance(rest.len() - trimmed.len() + literal.len());
            true
        } else {
            false
        }
    }

    /// Consume the first of `literals` present, returning its index.
    pub fn eat_any(&mut self, literals: &[&str]) -> Option<usize> {
        literals.iter().position(|literal| self.eat(literal))
    }

    /// Read an unsigned decimal number after optional whitespace.
    pub fn unsigned(&mut self) -> ScanResult<u32> {
        self.skip_whitespace();
        let rest = self.rest();
        let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        let value = rest[..digits]
            .parse()
            .map_err(|_| self.error("an unsigned number"))?;
        self.advance(digits);
        Ok(value)
    }

    /// Read up to `delimiter` (consumed, not returned); the token is trimmed.
    ///
    /// Fails if the delimiter does not occur on the current line.
    pub fn token(&mut self, delimiter: char) -> ScanResult<&'a str> {
        self.skip_inline_whitespace();
        let rest = self.rest();
        let line = rest.split('\n').next().unwrap_or("");
        match line.find(delimiter) {
            Some(at) => {
                self.advance(at + delimiter.len_utf8());
                Ok(line[..at].trim())
            }
            None => Err(self.error(format!("a name followed by '{delimiter}'"))),
        }
    }

    /// Like [`Scanner::token`], but an empty name is an error.
    pub fn name(&mut self, delimiter: char) -> ScanResult<&'a str> {
        let start = self.clone();
        let name = self.token(delimiter)?;
        if name.is_empty() {
            return Err(start.error(format!("a name before '{delimiter}'")));
        }
        Ok(name)
    }

    /// Read a whitespace-delimited word.
    pub fn word(&mut self) -> ScanResult<&'a str> {
        self.skip_whitespace();
        let rest = self.rest();
        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        if len == 0 {
            return Err(self.error("a word"));
        }
        self.advance(len);
        Ok(&rest[..len])
    }

    /// Read a file name, bare or between `quote` characters.
    ///
    /// A bare name ends at the first whitespace; it is refused when
    /// `quotes_required` is set.
    pub fn filename(&mut self, quote: char, quotes_required: bool) -> ScanResult<&'a str> {
        self.skip_whitespace();
        let rest = self.rest();
        if let Some(inner) = rest.strip_prefix(quote) {
            let line = inner.split('\n').next().unwrap_or("");
            return match line.find(quote) {
                Some(close) => {
                    self.advance(quote.len_utf8() * 2 + close);
                    Ok(&inner[..close])
                }
                None => Err(self.error(format!("a closing {quote}"))),
            };
        }
        if quotes_required {
            return Err(self.error(format!("a file name between {quote}")));
        }
        self.word().map_err(|_| self.error("a file name"))
    }

    /// Consume the remainder of the current line, including its newline.
    ///
    /// The returned text excludes the newline and any trailing `\r`.
    pub fn rest_of_line(&mut self) -> &'a str {
        let rest = self.rest();
        let (line, consumed) = match rest.find('\n') {
            Some(at) => (&rest[..at], at + 1),
            None => (rest, rest.len()),
        };
        self.advance(consumed);
        line.strip_suffix('\r').unwrap_or(line)
    }

    /// Split off the current line as its own scanner and move past it.
    ///
    /// Positions reported by the returned scanner stay relative to the full text.
    pub fn line(&mut self) -> Scanner<'a> {
        let start = self.pos;
        let line = self.rest_of_line();
        Scanner {
            text: self.text,
            pos: start,
            end: start + line.len(),
            comment: self.comment,
        }
    }
}
