use std::collections::VecDeque;
use std::fs;
use std::ops::Range;
use std::path::PathBuf;

use pyscribe::commands::{dispatch, refresh, Command, Flow, Host, ABOUT_TEXT};
use pyscribe::editor::{EditorSession, StatusLine};
use pyscribe::highlight::HighlightSpan;
use tempfile::tempdir;

/// Scripted host: answers prompts from queues and records what it was told
#[derive(Default)]
struct ScriptedHost {
    open_paths: VecDeque<PathBuf>,
    save_paths: VecDeque<PathBuf>,
    finds: VecDeque<String>,
    replaces: VecDeque<(String, String)>,
    messages: Vec<(String, String)>,
    highlights: Vec<Vec<HighlightSpan>>,
    matches: Vec<Range<usize>>,
    title: String,
    status: Option<StatusLine>,
}

impl Host for ScriptedHost {
    fn pick_open_path(&mut self) -> Option<PathBuf> {
        self.open_paths.pop_front()
    }

    fn pick_save_path(&mut self, default_extension: &str) -> Option<PathBuf> {
        assert_eq!(default_extension, "py");
        self.save_paths.pop_front()
    }

    fn prompt_find(&mut self) -> Option<String> {
        self.finds.pop_front()
    }

    fn prompt_replace(&mut self) -> Option<(String, String)> {
        self.replaces.pop_front()
    }

    fn show_message(&mut self, title: &str, body: &str) {
        self.messages.push((title.to_string(), body.to_string()));
    }

    fn apply_highlights(&mut self, spans: &[HighlightSpan]) {
        self.highlights.push(spans.to_vec());
    }

    fn mark_matches(&mut self, matches: &[Range<usize>]) {
        self.matches = matches.to_vec();
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_status(&mut self, status: &StatusLine) {
        self.status = Some(status.clone());
    }
}

#[test]
fn test_open_command_loads_and_highlights() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("app.py");
    fs::write(&path, "def main():\n    pass\n").expect("write");

    let mut session = EditorSession::default();
    let mut host = ScriptedHost::default();
    host.open_paths.push_back(path);

    assert_eq!(dispatch(&mut session, &mut host, Command::Open), Flow::Continue);
    assert_eq!(host.title, "pyscribe - app.py");
    assert_eq!(host.highlights.len(), 1);
    assert_eq!(host.highlights[0].len(), 2);
    assert!(host.messages.is_empty());
}

#[test]
fn test_open_failure_is_reported_and_session_continues() {
    let dir = tempdir().expect("create temp dir");
    let mut session = EditorSession::default();
    session.insert_text("unsaved work");

    let mut host = ScriptedHost::default();
    host.open_paths.push_back(dir.path().join("gone.py"));

    assert_eq!(dispatch(&mut session, &mut host, Command::Open), Flow::Continue);
    assert_eq!(host.messages.len(), 1);
    assert_eq!(host.messages[0].0, "Open");
    assert!(host.messages[0].1.contains("gone.py"));
    assert_eq!(session.text(), "unsaved work");
}

#[test]
fn test_cancelled_open_does_nothing() {
    let mut session = EditorSession::default();
    let mut host = ScriptedHost::default();
    dispatch(&mut session, &mut host, Command::Open);
    assert!(host.messages.is_empty());
    assert!(host.highlights.is_empty());
}

#[test]
fn test_save_without_path_falls_back_to_save_as() {
    let dir = tempdir().expect("create temp dir");
    let mut session = EditorSession::default();
    session.insert_text("x = 1\n");

    let mut host = ScriptedHost::default();
    host.save_paths.push_back(dir.path().join("first"));

    dispatch(&mut session, &mut host, Command::Save);
    let saved = dir.path().join("first.py");
    assert_eq!(fs::read_to_string(&saved).expect("saved file"), "x = 1\n");
    assert_eq!(host.title, "pyscribe - first.py");

    // Second save writes in place without prompting
    session.insert_text("y = 2\n");
    dispatch(&mut session, &mut host, Command::Save);
    assert_eq!(
        fs::read_to_string(&saved).expect("saved file"),
        "x = 1\ny = 2\n"
    );
    assert!(!host.status.expect("status").modified);
}

#[test]
fn test_find_marks_matches_case_insensitively() {
    let mut session = EditorSession::default();
    session.insert_text("Value = value + VALUE");

    let mut host = ScriptedHost::default();
    host.finds.push_back("value".to_string());
    dispatch(&mut session, &mut host, Command::Find);
    assert_eq!(host.matches, vec![0..5, 8..13, 16..21]);

    host.finds.push_back("missing".to_string());
    dispatch(&mut session, &mut host, Command::Find);
    assert!(host.matches.is_empty());
    assert_eq!(host.messages.last().map(|m| m.0.as_str()), Some("Find"));
}

#[test]
fn test_replace_rewrites_buffer_and_rehighlights() {
    let mut session = EditorSession::default();
    session.insert_text("old = old + 1");

    let mut host = ScriptedHost::default();
    host.replaces
        .push_back(("old".to_string(), "new".to_string()));
    dispatch(&mut session, &mut host, Command::Replace);

    assert_eq!(session.text(), "new = new + 1");
    assert_eq!(host.highlights.len(), 1);
    assert_eq!(host.messages[0].1, "2 occurrence(s) replaced");
}

#[test]
fn test_run_unsaved_buffer_reports_error() {
    let mut session = EditorSession::default();
    session.insert_text("print(1)");

    let mut host = ScriptedHost::default();
    dispatch(&mut session, &mut host, Command::Run);
    assert_eq!(host.messages.len(), 1);
    assert_eq!(host.messages[0].0, "Run");
}

#[test]
fn test_about_and_exit() {
    let mut session = EditorSession::default();
    let mut host = ScriptedHost::default();

    assert_eq!(dispatch(&mut session, &mut host, Command::About), Flow::Continue);
    assert_eq!(host.messages[0].1, ABOUT_TEXT);
    assert_eq!(dispatch(&mut session, &mut host, Command::Exit), Flow::Exit);
}

#[test]
fn test_refresh_pushes_status() {
    let mut session = EditorSession::default();
    session.insert_text("if x:");
    session.insert_newline();

    let mut host = ScriptedHost::default();
    refresh(&mut session, &mut host);
    let status = host.status.expect("status");
    assert_eq!((status.line, status.column), (2, 5));
    assert_eq!(host.title, "pyscribe - untitled");
}
