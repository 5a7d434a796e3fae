//! Document Buffer
//!
//! The single text buffer owned by an editor session, addressed by
//! character offsets.

use std::ops::Range;

/// A line/column position, both 0-based, columns counted in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A mutable text buffer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    text: String,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the whole buffer
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    /// Number of lines; an empty buffer has one empty line
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    /// Line contents without the trailing newline
    pub fn line(&self, index: usize) -> Option<&str> {
        self.text.split('\n').nth(index)
    }

    /// Character offset of the first character of a line
    pub fn line_start(&self, index: usize) -> Option<usize> {
        if index == 0 {
            return Some(0);
        }

        self.text
            .chars()
            .enumerate()
            .filter(|(_, ch)| *ch == '\n')
            .nth(index - 1)
            .map(|(offset, _)| offset + 1)
    }

    /// Line and column of a character offset, clamped to the buffer end
    pub fn position_of(&self, offset: usize) -> Position {
        let mut position = Position::default();

        for ch in self.text.chars().take(offset) {
            if ch == '\n' {
                position.line += 1;
                position.column = 0;
            } else {
                position.column += 1;
            }
        }

        position
    }

    /// Character offset of a position, clamped to the line and buffer end
    pub fn offset_of(&self, position: Position) -> usize {
        let Some(start) = self.line_start(position.line) else {
            return self.len_chars();
        };
        let line_len = self
            .line(position.line)
            .map(|line| line.chars().count())
            .unwrap_or(0);

        start + position.column.min(line_len)
    }

    /// Insert text at a character offset (clamped to the buffer end)
    pub fn insert(&mut self, offset: usize, text: &str) {
        let byte = self.byte_index(offset);
        self.text.insert_str(byte, text);
    }

    /// Remove a character range (clamped to the buffer end)
    pub fn remove(&mut self, range: Range<usize>) {
        let start = self.byte_index(range.start);
        let end = self.byte_index(range.end).max(start);
        self.text.replace_range(start..end, "");
    }

    /// Byte index of a character offset, clamped to the buffer end
    pub fn byte_index(&self, offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(offset)
            .map(|(byte, _)| byte)
            .unwrap_or(self.text.len())
    }
}
