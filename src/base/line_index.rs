use text_size::TextSize;

use super::Position;

/// Line start offsets of a text, for offset to line/column conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Offset of the first byte of every line; the first entry is always 0.
    line_starts: Vec<TextSize>,
    len: TextSize,
}

/// Offsets beyond `u32::MAX` saturate.
fn text_size(offset: usize) -> TextSize {
    TextSize::try_from(offset).unwrap_or(TextSize::from(u32::MAX))
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        line_starts.extend(
            text.match_indices('\n')
                .map(|(at, _)| text_size(at + 1)),
        );
        Self {
            line_starts,
            len: text_size(text.len()),
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Position of byte `offset` in `text`, the text this index was built from.
    ///
    /// Offsets past the end clamp to the end of the text. Columns count characters.
    pub fn position(&self, text: &str, offset: usize) -> Position {
        let offset = text_size(offset).min(self.len);
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let start = usize::from(self.line_starts[line - 1]);
        let column = text
            .get(start..usize::from(offset))
            .map_or(0, |before| before.chars().count());
        Position::new(line, column + 1)
    }
}
