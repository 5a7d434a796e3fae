//! Find and Replace
//!
//! Find is case-insensitive and literal. Replace is a case-sensitive literal
//! substitution over the whole buffer.

use anyhow::{Context, Result};
use regex::RegexBuilder;
use std::ops::Range;

/// Every case-insensitive occurrence of `query`, as character ranges.
///
/// Matches do not overlap; an empty query finds nothing.
pub fn find_all(text: &str, query: &str) -> Result<Vec<Range<usize>>> {
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let re = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .with_context(|| format!("building search for '{}'", query))?;

    let mut matches = Vec::new();
    // Walk forward once, counting characters between matches
    let mut byte_pos = 0;
    let mut char_pos = 0;

    for m in re.find_iter(text) {
        char_pos += text[byte_pos..m.start()].chars().count();
        let len = m.as_str().chars().count();
        matches.push(char_pos..char_pos + len);
        char_pos += len;
        byte_pos = m.end();
    }

    Ok(matches)
}

/// Replace every occurrence of `query` with `replacement`.
///
/// Returns the new text and the number of replacements made.
pub fn replace_all(text: &str, query: &str, replacement: &str) -> (String, usize) {
    if query.is_empty() {
        return (text.to_string(), 0);
    }

    let count = text.matches(query).count();
    if count == 0 {
        return (text.to_string(), 0);
    }

    (text.replace(query, replacement), count)
}
