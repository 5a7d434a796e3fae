//! Status Line

use std::fmt;

/// Name shown for a buffer that has never been saved
pub const UNTITLED: &str = "untitled";

/// Caret position and file name, as shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    /// 1-based caret line
    pub line: usize,
    /// 1-based caret column
    pub column: usize,
    pub file_name: String,
    pub modified: bool,
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ln {}, Col {} | {}{}",
            self.line,
            self.column,
            self.file_name,
            if self.modified { " *" } else { "" }
        )
    }
}
