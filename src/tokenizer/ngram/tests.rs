use super::{parse_ngram_sizes, NGram, NGramConfig};
use crate::tokenizer::types::{Reason, Tokenizer};

#[test]
fn parses_single_size() {
    assert_eq!(parse_ngram_sizes("3").unwrap(), vec![3]);
}

#[test]
fn parses_comma_list() {
    assert_eq!(parse_ngram_sizes("3,5").unwrap(), vec![3, 5]);
}

#[test]
fn parses_range() {
    assert_eq!(parse_ngram_sizes("3-7").unwrap(), vec![3, 4, 5, 6, 7]);
}

#[test]
fn descending_range_is_empty_and_rejected() {
    // "7-3" names no sizes; since a config needs at least one size, this
    // is a config error rather than a silently empty tokenizer.
    assert!(parse_ngram_sizes("7-3").is_err());
}

#[test]
fn overlapping_ranges_dedupe_and_sort() {
    assert_eq!(parse_ngram_sizes("2-3,3-9").unwrap(), vec![2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn document_reason_emits_every_ngram_ascending_by_size() {
    let ngram = NGram::new(NGramConfig { sizes: vec![2, 3], include_categories: None });
    let tokens = ngram.tokenize("abcd", Reason::Document).unwrap();
    let primaries: Vec<&str> = tokens.iter().map(|t| t.primary.as_str()).collect();
    // size 2 first (3 grams), then size 3 (2 grams): non-increasing counts.
    assert_eq!(primaries, vec!["ab", "bc", "cd", "abc", "bcd"]);
}

#[test]
fn query_reason_emits_longest_fit_per_start() {
    let ngram = NGram::new(NGramConfig { sizes: vec![2, 3], include_categories: None });
    let tokens = ngram.tokenize("abcd", Reason::Query).unwrap();
    let primaries: Vec<&str> = tokens.iter().map(|t| t.primary.as_str()).collect();
    // start 0: abc (3 fits), start 1: bcd (3 fits), start 2: cd (only 2 fits), start 3: nothing fits.
    assert_eq!(primaries, vec!["abc", "bcd", "cd"]);
}

#[test]
fn shorter_than_smallest_size_yields_one_whole_token() {
    let ngram = NGram::new(NGramConfig { sizes: vec![3], include_categories: None });
    let tokens = ngram.tokenize("ab", Reason::Document).unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].primary, "ab");
    assert_eq!((tokens[0].start, tokens[0].end), (0, 2));
}

#[test]
fn include_categories_matching_nothing_yields_one_whole_token() {
    use crate::tokenizer::category_expr::CategorySet;
    let ngram = NGram::new(NGramConfig { sizes: vec![3], include_categories: Some(CategorySet::parse("N*").unwrap()) });
    // no digits in "hello": the matched subsequence is empty, below the
    // smallest configured size, so this falls back to one whole-input token.
    let tokens = ngram.tokenize("hello", Reason::Document).unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].primary, "hello");
    assert_eq!((tokens[0].start, tokens[0].end), (0, 5));
}

#[test]
fn include_categories_restricts_to_subsequence_and_widens_span() {
    use crate::tokenizer::category_expr::CategorySet;
    let ngram = NGram::new(NGramConfig { sizes: vec![2], include_categories: Some(CategorySet::parse("L*").unwrap()) });
    // digits are skipped from the n-gram subsequence but still occupy bytes.
    let tokens = ngram.tokenize("a1b", Reason::Document).unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].primary, "ab");
    assert_eq!((tokens[0].start, tokens[0].end), (0, 3));
}
