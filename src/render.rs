//! Terminal rendering of a highlighted viewport with its gutter.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use crate::editor::Document;
use crate::gutter::{FixedLineView, Gutter, TextGutter};
use crate::highlight::{Category, HighlightSpan};
use crate::theme::Theme;

const RESET: &str = "\x1b[0m";

/// Rows per line in the terminal view model
const ROW_HEIGHT: f32 = 1.0;

/// JSON report of a highlight pass
#[derive(Debug, Serialize)]
pub struct HighlightReport<'a> {
    pub file: String,
    pub lines: usize,
    pub spans: &'a [HighlightSpan],
}

/// Print `height` lines starting at `top_line`, each prefixed by its
/// line number and coloured by `spans`.
pub fn render_viewport(
    out: &mut impl Write,
    document: &Document,
    spans: &[HighlightSpan],
    theme: &Theme,
    top_line: usize,
    height: usize,
) -> Result<()> {
    let mut view = FixedLineView::new(document.line_count(), ROW_HEIGHT, height as f32);
    view.scroll_to_line(top_line);

    let mut gutter = Gutter::new();
    let mut canvas = TextGutter::new();
    gutter.redraw(&view, &mut canvas);

    let width = gutter.width();
    let first_line = gutter
        .labels()
        .first()
        .map(|label| label.number - 1)
        .unwrap_or(0);
    let mut line_start = document.line_start(first_line).unwrap_or(0);

    for (index, label) in canvas.padded(width).iter().enumerate() {
        let line = document.line(first_line + index).unwrap_or("");
        write!(
            out,
            "{}{} {}{}",
            theme.gutter.ansi_fg(),
            label,
            RESET,
            theme.foreground.ansi_fg()
        )?;
        // CRLF files: the carriage return still counts towards offsets
        let shown = line.strip_suffix('\r').unwrap_or(line);
        write_line(out, shown, line_start, spans, theme)?;
        writeln!(out, "{RESET}")?;
        line_start += line.chars().count() + 1;
    }

    Ok(())
}

/// Write one line, switching colour at span boundaries
fn write_line(
    out: &mut impl Write,
    line: &str,
    line_start: usize,
    spans: &[HighlightSpan],
    theme: &Theme,
) -> Result<()> {
    // Spans are sorted and disjoint; skip those ending before this line
    let first = spans.partition_point(|span| span.end <= line_start);
    let mut spans = spans[first..].iter().peekable();
    let mut current: Option<Category> = None;

    for (column, ch) in line.chars().enumerate() {
        let offset = line_start + column;
        while spans.next_if(|span| span.end <= offset).is_some() {}

        let category = spans
            .peek()
            .filter(|span| span.start <= offset)
            .map(|span| span.category);

        if category != current {
            match category {
                Some(category) => write!(out, "{}", theme.color(category).ansi_fg())?,
                None => write!(out, "{}", theme.foreground.ansi_fg())?,
            }
            current = category;
        }
        write!(out, "{ch}")?;
    }

    Ok(())
}

/// Spans as pretty JSON
pub fn spans_to_json(file: &str, document: &Document, spans: &[HighlightSpan]) -> Result<String> {
    let report = HighlightReport {
        file: file.to_string(),
        lines: document.line_count(),
        spans,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
