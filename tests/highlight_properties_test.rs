use pyscribe::highlight::{highlight, Category, HighlightSpan, Highlighter};

const SAMPLE: &str = r#"import os

class Greeter:
    """Says hello.

    # not a comment
    """

    def greet(self, name):
        # say it twice
        for i in range(2):
            print("hi #%d" % i, name)  # trailing
        return len(name) * 1.5
"#;

#[test]
fn test_highlight_is_idempotent() {
    assert_eq!(highlight(SAMPLE), highlight(SAMPLE));
}

#[test]
fn test_spans_are_sorted_and_disjoint() {
    let spans = highlight(SAMPLE);
    for pair in spans.windows(2) {
        assert!(pair[0].end <= pair[1].start, "{:?} overlaps {:?}", pair[0], pair[1]);
    }
}

#[test]
fn test_spans_stay_within_document() {
    let len = SAMPLE.chars().count();
    for span in highlight(SAMPLE) {
        assert!(span.start < span.end && span.end <= len);
    }
}

#[test]
fn test_comments_never_cross_newlines() {
    let chars: Vec<char> = SAMPLE.chars().collect();
    let comments: Vec<HighlightSpan> = highlight(SAMPLE)
        .into_iter()
        .filter(|s| s.category == Category::Comment)
        .collect();

    assert_eq!(comments.len(), 2);
    for span in comments {
        assert_eq!(chars[span.start], '#');
        assert!(!chars[span.start..span.end].contains(&'\n'));
        // Runs to end of line
        assert!(span.end == chars.len() || chars[span.end] == '\n');
    }
}

#[test]
fn test_triple_quoted_docstring_is_one_span() {
    let text = "x = \"\"\"line one\nline two\nline three\"\"\"\n";
    let strings: Vec<HighlightSpan> = highlight(text)
        .into_iter()
        .filter(|s| s.category == Category::String)
        .collect();

    assert_eq!(strings.len(), 1);
    let covered: String = text
        .chars()
        .skip(strings[0].start)
        .take(strings[0].len())
        .collect();
    assert_eq!(covered.lines().count(), 3);
    assert!(covered.starts_with("\"\"\"") && covered.ends_with("\"\"\""));
}

#[test]
fn test_docstring_hash_is_not_a_comment() {
    let spans = highlight(SAMPLE);
    let start = SAMPLE.find("# not").unwrap();
    let inside = spans
        .iter()
        .find(|s| s.start <= start && start < s.end)
        .expect("docstring span");
    assert_eq!(inside.category, Category::String);
}

#[test]
fn test_scenario_comment_then_number() {
    assert_eq!(
        highlight("# hi\nx = 1\n"),
        vec![
            HighlightSpan::new(Category::Comment, 0, 4),
            HighlightSpan::new(Category::Number, 9, 10),
        ]
    );
}

#[test]
fn test_scenario_empty_document() {
    assert!(highlight("").is_empty());
}

#[test]
fn test_every_category_appears() {
    let spans = highlight(SAMPLE);
    for category in Category::ALL {
        assert!(
            spans.iter().any(|s| s.category == category),
            "missing {:?}",
            category
        );
    }
}

#[test]
fn test_raw_spans_reproduce_classic_overlap() {
    // Application-order tags paint the '#' inside the string as comment
    let text = "print(\"a # b\")";
    let raw = Highlighter::default().raw_spans(text);
    let last_comment = raw
        .iter()
        .rev()
        .find(|s| s.category == Category::Comment)
        .expect("comment match");
    assert_eq!(last_comment.start, 9);

    // The resolved pass keeps it a string
    assert!(highlight(text).iter().all(|s| s.category != Category::Comment));
}
