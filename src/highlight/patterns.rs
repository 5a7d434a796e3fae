//! Highlight Patterns
//!
//! The fixed, ordered list of regular expressions applied to a document.

use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;

/// Python reserved words
pub const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

/// Commonly used Python built-in functions
pub const PYTHON_BUILTINS: &[&str] = &[
    "abs", "all", "any", "bool", "bytes", "callable", "chr", "dict", "dir", "enumerate",
    "filter", "float", "format", "getattr", "hasattr", "hash", "help", "id", "input", "int",
    "isinstance", "issubclass", "iter", "len", "list", "map", "max", "min", "next", "object",
    "open", "ord", "print", "range", "repr", "reversed", "round", "set", "setattr", "sorted",
    "str", "sum", "super", "tuple", "type", "vars", "zip",
];

/// The reserved receiver identifier
pub const SELF_IDENT: &str = "self";

/// Highlight category of a span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Keyword,
    SelfIdent,
    Number,
    Builtin,
    String,
    Comment,
}

impl Category {
    /// All categories in pattern application order
    pub const ALL: [Category; 6] = [
        Category::Keyword,
        Category::SelfIdent,
        Category::Number,
        Category::Builtin,
        Category::String,
        Category::Comment,
    ];

    /// Overlap priority; a higher value claims the text
    pub fn priority(self) -> u8 {
        match self {
            Category::Comment => 5,
            Category::String => 4,
            Category::Keyword => 3,
            Category::SelfIdent => 2,
            Category::Builtin => 1,
            Category::Number => 0,
        }
    }

    /// Tag name used by hosts and themes
    pub fn name(self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::SelfIdent => "self_ident",
            Category::Number => "number",
            Category::Builtin => "builtin",
            Category::String => "string",
            Category::Comment => "comment",
        }
    }

    /// Inverse of [`Category::name`]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

const NUMBER_PATTERN: &str = r"\b\d+(?:\.\d+)?\b";

// Triple quotes come first so leftmost-first alternation prefers them.
const STRING_PATTERN: &str = r#"(?s)"""(?:\\.|[^\\])*?"""|'''(?:\\.|[^\\])*?'''|"(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*'"#;

const COMMENT_PATTERN: &str = r"#[^\r\n]*";

/// Compiled pattern list for one language
#[derive(Debug, Clone)]
pub struct PatternSet {
    keyword: Regex,
    self_ident: Regex,
    number: Regex,
    builtin: Regex,
    string: Regex,
    comment: Regex,
    /// Strings and comments in one scan, so whichever starts first wins
    literal: Regex,
}

impl PatternSet {
    /// Build a pattern set from word lists
    pub fn new(keywords: &[&str], builtins: &[&str], self_ident: &str) -> Result<Self> {
        Ok(Self {
            keyword: word_alternation(keywords).context("compiling keyword pattern")?,
            self_ident: word_alternation(&[self_ident]).context("compiling self pattern")?,
            number: Regex::new(NUMBER_PATTERN)?,
            builtin: word_alternation(builtins).context("compiling builtin pattern")?,
            string: Regex::new(STRING_PATTERN)?,
            comment: Regex::new(COMMENT_PATTERN)?,
            literal: Regex::new(&format!(
                "(?P<string>{STRING_PATTERN})|(?P<comment>{COMMENT_PATTERN})"
            ))?,
        })
    }

    /// The built-in Python pattern set
    pub fn python() -> Result<Self> {
        Self::new(PYTHON_KEYWORDS, PYTHON_BUILTINS, SELF_IDENT)
    }

    /// Regex applied for a category
    pub fn regex(&self, category: Category) -> &Regex {
        match category {
            Category::Keyword => &self.keyword,
            Category::SelfIdent => &self.self_ident,
            Category::Number => &self.number,
            Category::Builtin => &self.builtin,
            Category::String => &self.string,
            Category::Comment => &self.comment,
        }
    }

    /// Combined string-or-comment pattern
    pub fn literal(&self) -> &Regex {
        &self.literal
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::python().expect("built-in Python patterns compile")
    }
}

/// Whole-word alternation of escaped literal words
fn word_alternation(words: &[&str]) -> Result<Regex> {
    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Ok(Regex::new(&format!(r"\b(?:{alternation})\b"))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(re: &Regex, text: &str) -> Vec<String> {
        re.find_iter(text).map(|m| m.as_str().to_string()).collect()
    }

    #[test]
    fn test_keywords_are_whole_word() {
        let set = PatternSet::python().unwrap();
        let re = set.regex(Category::Keyword);
        assert_eq!(matches(re, "if iffy: define def"), vec!["if", "def"]);
    }

    #[test]
    fn test_self_ident() {
        let set = PatternSet::default();
        let re = set.regex(Category::SelfIdent);
        assert_eq!(matches(re, "self.x = myself"), vec!["self"]);
    }

    #[test]
    fn test_number_pattern() {
        let set = PatternSet::default();
        let re = set.regex(Category::Number);
        assert_eq!(matches(re, "x = 10 + 3.25 - y2"), vec!["10", "3.25"]);
    }

    #[test]
    fn test_builtin_pattern() {
        let set = PatternSet::default();
        let re = set.regex(Category::Builtin);
        assert_eq!(matches(re, "print(len(x)) printer"), vec!["print", "len"]);
    }

    #[test]
    fn test_string_pattern_prefers_triple_quotes() {
        let set = PatternSet::default();
        let re = set.regex(Category::String);
        let text = "a = \"\"\"one\ntwo\"\"\" + 'x'";
        assert_eq!(matches(re, text), vec!["\"\"\"one\ntwo\"\"\"", "'x'"]);
    }

    #[test]
    fn test_string_pattern_skips_escaped_quote() {
        let set = PatternSet::default();
        let re = set.regex(Category::String);
        assert_eq!(matches(re, r#"s = "a\"b" "#), vec![r#""a\"b""#]);
    }

    #[test]
    fn test_comment_stops_at_newline() {
        let set = PatternSet::default();
        let re = set.regex(Category::Comment);
        assert_eq!(matches(re, "x # one\r\n# two\n"), vec!["# one", "# two"]);
    }

    #[test]
    fn test_category_names_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.name()), Some(category));
        }
        assert_eq!(Category::from_name("operator"), None);
    }

    #[test]
    fn test_priority_order() {
        assert!(Category::Comment.priority() > Category::String.priority());
        assert!(Category::String.priority() > Category::Keyword.priority());
        assert!(Category::Builtin.priority() > Category::Number.priority());
    }
}
