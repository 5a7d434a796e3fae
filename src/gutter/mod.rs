//! Line Number Gutter
//!
//! Keeps the line number panel aligned with the text view's rendered lines.

pub mod renderer;
pub mod view;

pub use renderer::{
    compute_line_number_labels, viewport_range, Gutter, GutterCanvas, LineLabel, TextGutter,
};
pub use view::{FixedLineView, LineGeometry, TextView, ViewportLineRange};
