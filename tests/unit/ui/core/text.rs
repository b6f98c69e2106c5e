use super::*;

#[test]
fn display_width_counts_wide_glyphs() {
    assert_eq!(display_width("abc"), 3);
    assert_eq!(display_width("中文"), 4);
    assert_eq!(display_width(""), 0);
}

#[test]
fn truncate_keeps_short_text() {
    assert_eq!(truncate("hello", 5), "hello");
    assert_eq!(truncate("hello", 10), "hello");
}

#[test]
fn truncate_adds_ellipsis() {
    assert_eq!(truncate("hello world", 6), "hello…");
    assert_eq!(truncate("hello", 0), "");
    assert_eq!(truncate("中文字", 4), "中…");
}

#[test]
fn wrap_breaks_on_words() {
    let lines = wrap("the quick brown fox jumps", 10);
    assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    for line in &lines {
        assert!(display_width(line) <= 10);
    }
}

#[test]
fn wrap_collapses_whitespace_and_keeps_paragraphs() {
    let lines = wrap("a   b\n\nc", 10);
    assert_eq!(lines, vec!["a b", "", "c"]);
}

#[test]
fn wrap_splits_overlong_words() {
    let lines = wrap("abcdefgh ij", 3);
    assert_eq!(lines, vec!["abc", "def", "gh", "ij"]);
}

#[test]
fn wrap_zero_width_is_empty() {
    assert!(wrap("anything", 0).is_empty());
}
