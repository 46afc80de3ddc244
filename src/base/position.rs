use std::fmt;

use super::LineIndex;

/// A position in a geometry file (1-indexed, as printed in error messages)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Compute the position of a byte offset within `text`.
    ///
    /// Builds a throwaway [`LineIndex`]; keep an index around for repeated lookups.
    pub fn from_offset(text: &str, offset: usize) -> Self {
        LineIndex::new(text).position(text, offset)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
