//! Editor Session
//!
//! All per-window editor state: the document, the file it came from, the
//! caret and the current highlight spans. Owned by the top-level component.

use anyhow::{bail, Context, Result};
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::config::{EditorConfig, DEFAULT_EXTENSION};
use crate::editor::document::{Document, Position};
use crate::editor::indent::{indent_unit, leading_whitespace, newline_indent};
use crate::editor::search::{find_all, replace_all};
use crate::editor::status::{StatusLine, UNTITLED};
use crate::highlight::{HighlightSpan, Highlighter};

/// Application name shown in the window title
pub const APP_NAME: &str = "pyscribe";

/// State of one editor window
#[derive(Debug, Clone)]
pub struct EditorSession {
    document: Document,
    path: Option<PathBuf>,
    /// Caret as a character offset
    caret: usize,
    modified: bool,
    config: EditorConfig,
    highlighter: Highlighter,
    spans: Vec<HighlightSpan>,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorSession {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            document: Document::new(),
            path: None,
            caret: 0,
            modified: false,
            config,
            highlighter: Highlighter::default(),
            spans: Vec::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn text(&self) -> &str {
        self.document.text()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Spans from the last highlight pass
    pub fn spans(&self) -> &[HighlightSpan] {
        &self.spans
    }

    /// Re-scan the whole buffer; called after every edit
    pub fn rehighlight(&mut self) -> &[HighlightSpan] {
        self.spans = self.highlighter.highlight(self.document.text());
        &self.spans
    }

    /// Load a file into the buffer. On error the session is left unchanged.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not open {}", path.display()))?;

        self.document.set_text(text);
        self.path = Some(path.to_path_buf());
        self.caret = 0;
        self.modified = false;
        self.rehighlight();

        log::info!("opened {} ({} lines)", path.display(), self.document.line_count());
        Ok(())
    }

    /// Save to the current path
    pub fn save(&mut self) -> Result<PathBuf> {
        let Some(path) = self.path.clone() else {
            bail!("The file has no name yet; use Save As");
        };
        self.write_to(&path)?;
        Ok(path)
    }

    /// Save to a new path, adding the default extension if it has none
    pub fn save_as(&mut self, path: &Path) -> Result<PathBuf> {
        let path = with_default_extension(path);
        self.write_to(&path)?;
        self.path = Some(path.clone());
        Ok(path)
    }

    fn write_to(&mut self, path: &Path) -> Result<()> {
        fs::write(path, self.document.text())
            .with_context(|| format!("Could not save {}", path.display()))?;
        self.modified = false;

        log::info!("saved {}", path.display());
        Ok(())
    }

    /// Launch the interpreter on the saved file and return its process id.
    ///
    /// The child is not waited on and its output is not captured.
    pub fn run(&self) -> Result<u32> {
        let Some(path) = self.path.as_deref() else {
            bail!("Save the file before running it");
        };

        let child = Command::new(&self.config.interpreter)
            .arg(path)
            .stdin(Stdio::null())
            .spawn()
            .with_context(|| {
                format!(
                    "Could not start '{}' for {}",
                    self.config.interpreter,
                    path.display()
                )
            })?;

        log::info!(
            "started {} {} (pid {})",
            self.config.interpreter,
            path.display(),
            child.id()
        );
        Ok(child.id())
    }

    /// Move the caret, clamped to the buffer
    pub fn set_caret(&mut self, offset: usize) {
        self.caret = offset.min(self.document.len_chars());
    }

    pub fn set_caret_position(&mut self, position: Position) {
        self.caret = self.document.offset_of(position);
    }

    pub fn caret_position(&self) -> Position {
        self.document.position_of(self.caret)
    }

    /// Insert typed text at the caret
    pub fn insert_text(&mut self, text: &str) {
        self.document.insert(self.caret, text);
        self.caret += text.chars().count();
        self.modified = true;
        self.rehighlight();
    }

    /// Split the line at the caret, indenting the new line from the text
    /// before the caret
    pub fn insert_newline(&mut self) {
        let Position { line, column } = self.caret_position();
        let current = self.document.line(line).unwrap_or("");
        let split = current
            .char_indices()
            .nth(column)
            .map_or(current.len(), |(byte, _)| byte);
        let (before, after) = current.split_at(split);
        let indent = newline_indent(before, &indent_unit(self.config.indent_width));

        // Whitespace moved down after code is replaced by the new indent
        let carried = if before.trim().is_empty() {
            0
        } else {
            leading_whitespace(after).chars().count()
        };
        if carried > 0 {
            self.document.remove(self.caret..self.caret + carried);
        }

        self.insert_text(&format!("\n{indent}"));
    }

    /// Case-insensitive matches of `query`
    pub fn find(&self, query: &str) -> Result<Vec<Range<usize>>> {
        find_all(self.document.text(), query)
    }

    /// Replace every occurrence of `query`; returns the replacement count
    pub fn replace_all(&mut self, query: &str, replacement: &str) -> usize {
        let (text, count) = replace_all(self.document.text(), query, replacement);
        if count > 0 {
            self.document.set_text(text);
            self.modified = true;
            self.set_caret(self.caret);
            self.rehighlight();
        }
        count
    }

    /// File name shown in the title and status bar
    pub fn file_name(&self) -> String {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| UNTITLED.to_string())
    }

    pub fn title(&self) -> String {
        format!("{} - {}", APP_NAME, self.file_name())
    }

    pub fn status_line(&self) -> StatusLine {
        let position = self.caret_position();
        StatusLine {
            line: position.line + 1,
            column: position.column + 1,
            file_name: self.file_name(),
            modified: self.modified,
        }
    }
}

/// Append the default extension to a path that has none
pub fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(DEFAULT_EXTENSION)
    }
}
