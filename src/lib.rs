//! pyscribe
//!
//! The core of a small Python source editor.
//!
//! This library provides:
//! - Regex-based syntax highlighting with deterministic overlap resolution
//! - Line number gutter layout kept in sync with a scrollable text view
//! - Editor session glue: auto-indent, find/replace, status line, file I/O, run
//! - Menu command dispatch against a host GUI toolkit
//! - Colour themes and a terminal renderer

pub mod commands;
pub mod config;
pub mod editor;
pub mod gutter;
pub mod highlight;
pub mod render;
pub mod theme;

// Re-exports for clean public API
pub use commands::{dispatch, Command, Flow, Host};
pub use config::Config;
pub use editor::{Document, EditorSession};
pub use gutter::{compute_line_number_labels, Gutter, LineLabel, TextView};
pub use highlight::{highlight, Category, HighlightSpan, Highlighter};
pub use theme::Theme;
