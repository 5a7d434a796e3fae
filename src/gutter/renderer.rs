//! Gutter Renderer
//!
//! Line number labels kept aligned with the rendered text lines.

use super::view::{TextView, ViewportLineRange};

/// One line number label and where to draw it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineLabel {
    /// 1-based line number
    pub number: usize,
    /// Vertical offset of the labelled line's top
    pub y: f32,
}

/// Drawing surface for the gutter, as provided by the host toolkit
pub trait GutterCanvas {
    fn clear(&mut self);
    fn draw_label(&mut self, y: f32, text: &str);
}

/// Compute one label per currently rendered text line.
///
/// Walks forward from the first visible line and stops at the first line
/// the view reports no geometry for.
pub fn compute_line_number_labels(view: &impl TextView) -> Vec<LineLabel> {
    let mut labels = Vec::new();
    let mut line = view.first_visible_line();

    while let Some(geometry) = view.line_geometry(line) {
        labels.push(LineLabel {
            number: line + 1,
            y: geometry.y,
        });
        line += 1;
    }

    labels
}

/// Visible line range of a view, or `None` if nothing is rendered
pub fn viewport_range(view: &impl TextView) -> Option<ViewportLineRange> {
    let labels = compute_line_number_labels(view);
    let first = labels.first()?;
    let last = labels.last()?;
    Some(ViewportLineRange {
        first_visible_line: first.number - 1,
        last_visible_line: last.number - 1,
    })
}

/// Gutter state between redraws
#[derive(Debug, Clone, Default)]
pub struct Gutter {
    labels: Vec<LineLabel>,
}

impl Gutter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the canvas and draw a label for every rendered line.
    ///
    /// Called on scroll, resize and every keystroke.
    pub fn redraw(&mut self, view: &impl TextView, canvas: &mut impl GutterCanvas) {
        self.labels = compute_line_number_labels(view);

        canvas.clear();
        for label in &self.labels {
            canvas.draw_label(label.y, &label.number.to_string());
        }

        log::trace!("gutter redrawn with {} labels", self.labels.len());
    }

    /// Labels drawn by the last redraw
    pub fn labels(&self) -> &[LineLabel] {
        &self.labels
    }

    /// Width in characters needed for the widest label drawn
    pub fn width(&self) -> usize {
        self.labels
            .last()
            .map(|label| label.number.to_string().len())
            .unwrap_or(1)
    }
}

/// Gutter canvas that records labels as right-aligned text rows
#[derive(Debug, Clone, Default)]
pub struct TextGutter {
    pub rows: Vec<(f32, String)>,
}

impl TextGutter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels right-aligned to `width` columns, one per row
    pub fn padded(&self, width: usize) -> Vec<String> {
        self.rows
            .iter()
            .map(|(_, text)| format!("{text:>width$}"))
            .collect()
    }
}

impl GutterCanvas for TextGutter {
    fn clear(&mut self) {
        self.rows.clear();
    }

    fn draw_label(&mut self, y: f32, text: &str) {
        self.rows.push((y, text.to_string()));
    }
}
