use super::*;

#[test]
fn grapheme_length_and_iteration() {
    let seg = Segmenter::new("a\u{0308}b", Unit::Grapheme);
    assert_eq!(seg.length(), 2);
    let spans: Vec<&str> = seg.iter_spans().collect();
    assert_eq!(spans, &["a\u{0308}", "b"]);
}

#[test]
fn substring_negative_indices() {
    let seg = Segmenter::new("hello", Unit::Grapheme);
    assert_eq!(seg.substring(0, None).unwrap(), "hello");
    assert_eq!(seg.substring(-3, None).unwrap(), "llo");
    assert_eq!(seg.substring(0, Some(-2)).unwrap(), "hel");
    assert_eq!(seg.substring(-100, Some(2)).unwrap(), "he");
}

#[test]
fn width_counts_wide_clusters_twice() {
    let ascii = Segmenter::new("ab", Unit::Grapheme);
    assert_eq!(ascii.width(), 2);
    let wide = Segmenter::new("中", Unit::Grapheme);
    assert_eq!(wide.width(), 2);
}

#[test]
fn word_filter_skips_non_matching_spans() {
    let seg = Segmenter::with_word_filter("hello world 123", WordFilter::LETTER);
    let spans: Vec<&str> = seg.iter_spans().collect();
    assert_eq!(spans, &["hello", "world"]);
}

#[test]
fn next_span_out_of_range_offset_errors() {
    let seg = Segmenter::new("abc", Unit::Grapheme);
    assert!(seg.next_span(100).is_err());
}

#[test]
fn casefold_facade_matches_unicode_module() {
    assert_eq!(casefold("STRASSE".to_lowercase().as_str()), "strasse");
}
