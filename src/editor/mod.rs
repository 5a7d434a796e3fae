//! Editor Glue
//!
//! Session state and the small behaviours around the highlighter and
//! gutter: auto-indent, find/replace, status line, file I/O and run.

pub mod document;
pub mod indent;
pub mod search;
pub mod session;
pub mod status;

pub use document::{Document, Position};
pub use session::{with_default_extension, EditorSession, APP_NAME};
pub use status::StatusLine;
