//! Auto-indent
//!
//! Leading whitespace for the line opened by a newline.

/// One indent unit of `width` spaces
pub fn indent_unit(width: usize) -> String {
    " ".repeat(width)
}

/// Leading whitespace of a line, verbatim
pub fn leading_whitespace(line: &str) -> &str {
    let end = line
        .find(|c: char| !c.is_whitespace())
        .unwrap_or(line.len());
    &line[..end]
}

/// Indentation for a new line opened after `line`, the text before the
/// caret: the same leading whitespace, plus one unit if it ends with a colon.
pub fn newline_indent(line: &str, unit: &str) -> String {
    let mut indent = leading_whitespace(line).to_string();
    if line.trim().ends_with(':') {
        indent.push_str(unit);
    }
    indent
}
