use super::{UnicodeTokenizer, UnicodeTokenizerConfig};
use crate::tokenizer::category_expr::CategorySet;
use crate::tokenizer::types::{Reason, Tokenizer};

fn primaries(text: &str, tokenizer: &UnicodeTokenizer) -> Vec<String> {
    tokenizer.tokenize(text, Reason::Document).unwrap().into_iter().map(|t| t.primary).collect()
}

#[test]
fn splits_on_default_categories() {
    let tokenizer = UnicodeTokenizer::new(UnicodeTokenizerConfig::default_categories());
    assert_eq!(primaries("hello, world! 123", &tokenizer), vec!["hello", "world", "123"]);
}

#[test]
fn token_spans_are_byte_offsets() {
    let tokenizer = UnicodeTokenizer::new(UnicodeTokenizerConfig::default_categories());
    let tokens = tokenizer.tokenize("café bar", Reason::Document).unwrap();
    assert_eq!(tokens[0].start, 0);
    assert_eq!(tokens[0].end, "café".len());
    assert_eq!(tokens[0].primary, "café");
}

#[test]
fn separators_override_category_continuation() {
    let mut config = UnicodeTokenizerConfig::default_categories();
    config.separators.insert('_');
    let tokenizer = UnicodeTokenizer::new(config);
    assert_eq!(primaries("foo_bar", &tokenizer), vec!["foo", "bar"]);
}

#[test]
fn tokenchars_extend_a_token_past_its_category() {
    let mut config = UnicodeTokenizerConfig::default_categories();
    config.tokenchars.insert('_');
    let tokenizer = UnicodeTokenizer::new(config);
    assert_eq!(primaries("foo_bar", &tokenizer), vec!["foo_bar"]);
}

#[test]
fn single_token_categories_isolate_matched_codepoints() {
    let mut config = UnicodeTokenizerConfig::default_categories();
    config.single_token_categories = CategorySet::parse("P*").unwrap();
    let tokenizer = UnicodeTokenizer::new(config);
    assert_eq!(primaries("a.b", &tokenizer), vec!["a", ".", "b"]);
}
