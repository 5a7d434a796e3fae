//! Menu Commands
//!
//! The editor's command set and its dispatch against a host toolkit.
//! Every I/O or process failure is caught here and shown to the user;
//! the session keeps running.

use std::ops::Range;
use std::path::PathBuf;

use crate::config::DEFAULT_EXTENSION;
use crate::editor::{EditorSession, StatusLine};
use crate::highlight::HighlightSpan;

/// Text of the About dialog
pub const ABOUT_TEXT: &str = "\
A small code editor for Python.

Syntax highlighting for keywords, built-ins, numbers,
strings and comments, a line number gutter, find and
replace, auto-indent, and one-key running of the
current file.";

/// A menu command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Open,
    Save,
    SaveAs,
    Exit,
    Find,
    Replace,
    Run,
    About,
}

impl Command {
    /// Commands in menu order
    pub const ALL: [Command; 8] = [
        Command::Open,
        Command::Save,
        Command::SaveAs,
        Command::Exit,
        Command::Find,
        Command::Replace,
        Command::Run,
        Command::About,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Command::Open => "Open",
            Command::Save => "Save",
            Command::SaveAs => "Save As",
            Command::Exit => "Exit",
            Command::Find => "Find",
            Command::Replace => "Replace",
            Command::Run => "Run",
            Command::About => "About",
        }
    }

    /// Keyboard accelerator, if the command has one
    pub fn accelerator(self) -> Option<&'static str> {
        match self {
            Command::Open => Some("Ctrl+O"),
            Command::Save => Some("Ctrl+S"),
            Command::Find => Some("Ctrl+F"),
            Command::Replace => Some("Ctrl+H"),
            Command::Run => Some("F5"),
            Command::SaveAs | Command::Exit | Command::About => None,
        }
    }

    /// Command bound to an accelerator such as `ctrl+o`
    pub fn from_accelerator(keys: &str) -> Option<Command> {
        let wanted = keys.replace(' ', "");
        Self::ALL.into_iter().find(|command| {
            command
                .accelerator()
                .is_some_and(|accel| accel.eq_ignore_ascii_case(&wanted))
        })
    }
}

/// What the event loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Services the host GUI toolkit provides to the editor
pub trait Host {
    /// Ask for a file to open; `None` if cancelled
    fn pick_open_path(&mut self) -> Option<PathBuf>;

    /// Ask for a file to save to; `None` if cancelled
    fn pick_save_path(&mut self, default_extension: &str) -> Option<PathBuf>;

    /// Ask for a search query; `None` if cancelled
    fn prompt_find(&mut self) -> Option<String>;

    /// Ask for a search query and its replacement; `None` if cancelled
    fn prompt_replace(&mut self) -> Option<(String, String)>;

    fn show_message(&mut self, title: &str, body: &str);

    /// Clear every previous highlight tag and apply these spans
    fn apply_highlights(&mut self, spans: &[HighlightSpan]);

    /// Mark find results, clearing previous marks
    fn mark_matches(&mut self, matches: &[Range<usize>]);

    fn set_title(&mut self, title: &str);

    fn set_status(&mut self, status: &StatusLine);

    /// Show a failure as a modal message
    fn show_error(&mut self, title: &str, error: &anyhow::Error) {
        self.show_message(title, &format!("{:#}", error));
    }
}

/// Push the session's current highlights, title and status to the host.
///
/// Hosts call this on every key release.
pub fn refresh(session: &mut EditorSession, host: &mut impl Host) {
    session.rehighlight();
    host.apply_highlights(session.spans());
    host.set_title(&session.title());
    host.set_status(&session.status_line());
}

/// Execute a command
pub fn dispatch(session: &mut EditorSession, host: &mut impl Host, command: Command) -> Flow {
    log::debug!("dispatching {:?}", command);

    match command {
        Command::Open => {
            if let Some(path) = host.pick_open_path() {
                match session.open(&path) {
                    Ok(()) => refresh(session, host),
                    Err(e) => host.show_error("Open", &e),
                }
            }
        }
        Command::Save => {
            if session.path().is_none() {
                return dispatch(session, host, Command::SaveAs);
            }
            match session.save() {
                Ok(_) => host.set_status(&session.status_line()),
                Err(e) => host.show_error("Save", &e),
            }
        }
        Command::SaveAs => {
            if let Some(path) = host.pick_save_path(DEFAULT_EXTENSION) {
                match session.save_as(&path) {
                    Ok(_) => {
                        host.set_title(&session.title());
                        host.set_status(&session.status_line());
                    }
                    Err(e) => host.show_error("Save", &e),
                }
            }
        }
        Command::Exit => return Flow::Exit,
        Command::Find => {
            if let Some(query) = host.prompt_find() {
                match session.find(&query) {
                    Ok(matches) => {
                        host.mark_matches(&matches);
                        if matches.is_empty() {
                            host.show_message("Find", &format!("'{}' not found", query));
                        }
                    }
                    Err(e) => host.show_error("Find", &e),
                }
            }
        }
        Command::Replace => {
            if let Some((query, replacement)) = host.prompt_replace() {
                let count = session.replace_all(&query, &replacement);
                if count > 0 {
                    refresh(session, host);
                }
                host.show_message("Replace", &format!("{} occurrence(s) replaced", count));
            }
        }
        Command::Run => {
            if let Err(e) = session.run() {
                host.show_error("Run", &e);
            }
        }
        Command::About => host.show_message("About", ABOUT_TEXT),
    }

    Flow::Continue
}
