//! Text View Geometry
//!
//! What the gutter needs to know about the scrollable text view.

/// Vertical placement of one rendered text line, in view pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineGeometry {
    /// Top of the line relative to the top of the viewport
    pub y: f32,
    pub height: f32,
}

/// First and last visible document lines (0-based), both inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportLineRange {
    pub first_visible_line: usize,
    pub last_visible_line: usize,
}

impl ViewportLineRange {
    pub fn line_count(&self) -> usize {
        self.last_visible_line - self.first_visible_line + 1
    }

    pub fn contains(&self, line: usize) -> bool {
        (self.first_visible_line..=self.last_visible_line).contains(&line)
    }
}

/// A scrollable text view, as provided by the host toolkit
pub trait TextView {
    /// Document line shown at pixel row 0 of the viewport
    fn first_visible_line(&self) -> usize;

    /// Geometry of a document line, or `None` if it is not rendered
    /// (scrolled out of the viewport or past the end of the document)
    fn line_geometry(&self, line: usize) -> Option<LineGeometry>;
}

/// Monospace, non-wrapping view model
///
/// Every line has the same height; a line is visible when any part of it
/// falls inside the viewport. A document always has at least one line.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedLineView {
    line_count: usize,
    line_height: f32,
    scroll_y: f32,
    viewport_height: f32,
}

impl FixedLineView {
    pub fn new(line_count: usize, line_height: f32, viewport_height: f32) -> Self {
        Self {
            line_count: line_count.max(1),
            line_height: line_height.max(1.0),
            scroll_y: 0.0,
            viewport_height: viewport_height.max(0.0),
        }
    }

    /// View over `text`, counting lines the way the text widget does
    pub fn for_text(text: &str, line_height: f32, viewport_height: f32) -> Self {
        Self::new(text.split('\n').count(), line_height, viewport_height)
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    /// Scroll to a pixel offset, clamped to the document
    pub fn scroll_to(&mut self, y: f32) {
        let max = (self.line_count - 1) as f32 * self.line_height;
        self.scroll_y = y.clamp(0.0, max);
    }

    /// Scroll so that `line` sits at the top of the viewport
    pub fn scroll_to_line(&mut self, line: usize) {
        self.scroll_to(line as f32 * self.line_height);
    }

    pub fn resize(&mut self, viewport_height: f32) {
        self.viewport_height = viewport_height.max(0.0);
    }

    pub fn set_line_count(&mut self, line_count: usize) {
        self.line_count = line_count.max(1);
        self.scroll_to(self.scroll_y);
    }
}

impl TextView for FixedLineView {
    fn first_visible_line(&self) -> usize {
        ((self.scroll_y / self.line_height).floor() as usize).min(self.line_count - 1)
    }

    fn line_geometry(&self, line: usize) -> Option<LineGeometry> {
        if line >= self.line_count {
            return None;
        }

        let y = line as f32 * self.line_height - self.scroll_y;
        let visible = y + self.line_height > 0.0 && y < self.viewport_height;
        visible.then_some(LineGeometry {
            y,
            height: self.line_height,
        })
    }
}
