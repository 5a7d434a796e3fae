//! Syntax Highlighter
//!
//! Surface pattern matching for cosmetic colouring of Python source.
//! No lexer and no AST: a fixed list of regular expressions is re-run
//! over the whole buffer after every edit.

pub mod patterns;
pub mod resolve;

use std::sync::LazyLock;

use serde::Serialize;

pub use patterns::{Category, PatternSet};
pub use resolve::resolve_overlaps;

/// A contiguous character range tagged with a highlight category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HighlightSpan {
    pub category: Category,
    /// Character offset from document start (inclusive)
    pub start: usize,
    /// Character offset from document start (exclusive)
    pub end: usize,
}

impl HighlightSpan {
    pub fn new(category: Category, start: usize, end: usize) -> Self {
        Self {
            category,
            start,
            end,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn overlaps(&self, other: &HighlightSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Applies a [`PatternSet`] to document text
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    patterns: PatternSet,
}

impl Highlighter {
    pub fn new(patterns: PatternSet) -> Self {
        Self { patterns }
    }

    /// Every match of every pattern, in pattern application order.
    ///
    /// Spans may overlap. A host that composites tags by application order
    /// ("last tag wins") gets exactly the classic behaviour from this list,
    /// including a `#` inside a string being painted as comment.
    pub fn raw_spans(&self, text: &str) -> Vec<HighlightSpan> {
        let mut offsets = OffsetCursor::new(text);
        let mut spans = Vec::new();

        for category in Category::ALL {
            offsets.rewind();
            for m in self.patterns.regex(category).find_iter(text) {
                spans.push(offsets.span(category, m.start(), m.end()));
            }
        }

        spans
    }

    /// Non-overlapping spans sorted by start offset.
    ///
    /// Strings and comments come from one left-to-right scan; the word and
    /// number patterns then fill in whatever text those did not claim.
    /// Remaining conflicts are settled by [`Category::priority`].
    pub fn highlight(&self, text: &str) -> Vec<HighlightSpan> {
        let mut offsets = OffsetCursor::new(text);
        let mut candidates = Vec::new();

        for caps in self.patterns.literal().captures_iter(text) {
            let (category, m) = match (caps.name("string"), caps.name("comment")) {
                (Some(m), _) => (Category::String, m),
                (None, Some(m)) => (Category::Comment, m),
                (None, None) => continue,
            };
            candidates.push(offsets.span(category, m.start(), m.end()));
        }

        for category in [
            Category::Keyword,
            Category::SelfIdent,
            Category::Number,
            Category::Builtin,
        ] {
            offsets.rewind();
            for m in self.patterns.regex(category).find_iter(text) {
                candidates.push(offsets.span(category, m.start(), m.end()));
            }
        }

        let spans = resolve_overlaps(candidates);
        log::debug!(
            "highlighted {} bytes into {} spans",
            text.len(),
            spans.len()
        );
        spans
    }
}

static DEFAULT_HIGHLIGHTER: LazyLock<Highlighter> = LazyLock::new(Highlighter::default);

/// Highlight Python source with the built-in pattern set
pub fn highlight(text: &str) -> Vec<HighlightSpan> {
    DEFAULT_HIGHLIGHTER.highlight(text)
}

/// Byte offset to character offset conversion, counted incrementally.
///
/// Within one pass offsets must not decrease; call [`OffsetCursor::rewind`]
/// before starting the next regex over the same text.
struct OffsetCursor<'t> {
    text: &'t str,
    ascii: bool,
    byte: usize,
    chars: usize,
}

impl<'t> OffsetCursor<'t> {
    fn new(text: &'t str) -> Self {
        Self {
            text,
            ascii: text.is_ascii(),
            byte: 0,
            chars: 0,
        }
    }

    fn rewind(&mut self) {
        self.byte = 0;
        self.chars = 0;
    }

    fn char_offset(&mut self, byte: usize) -> usize {
        if self.ascii {
            return byte;
        }

        debug_assert!(byte >= self.byte, "offsets requested out of order");
        self.chars += self.text[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }

    fn span(&mut self, category: Category, start: usize, end: usize) -> HighlightSpan {
        let start = self.char_offset(start);
        let end = self.char_offset(end);
        HighlightSpan::new(category, start, end)
    }
}
