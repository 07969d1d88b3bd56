use std::rc::Rc;

use super::{CaseMode, Simplify, SimplifyConfig};
use crate::tokenizer::types::{Reason, Tokenizer};
use crate::tokenizer::unicode_tokenizer::{UnicodeTokenizer, UnicodeTokenizerConfig};

fn unicode_tokenizer() -> Rc<dyn Tokenizer> {
    Rc::new(UnicodeTokenizer::new(UnicodeTokenizerConfig::default_categories()))
}

#[test]
fn lowercases_tokens() {
    let simplify = Simplify::new(
        SimplifyConfig { case: Some(CaseMode::Lower), ..Default::default() },
        unicode_tokenizer(),
    );
    let tokens = simplify.tokenize("Hello WORLD", Reason::Document).unwrap();
    assert_eq!(tokens.iter().map(|t| t.primary.as_str()).collect::<Vec<_>>(), vec!["hello", "world"]);
}

#[test]
fn casefold_handles_sharp_s() {
    let simplify = Simplify::new(
        SimplifyConfig { case: Some(CaseMode::Casefold), ..Default::default() },
        unicode_tokenizer(),
    );
    let tokens = simplify.tokenize("Straße", Reason::Document).unwrap();
    assert_eq!(tokens[0].primary, "strasse");
}

#[test]
fn offsets_still_point_into_original_text() {
    let simplify = Simplify::new(
        SimplifyConfig { case: Some(CaseMode::Upper), ..Default::default() },
        unicode_tokenizer(),
    );
    let tokens = simplify.tokenize("hello world", Reason::Document).unwrap();
    assert_eq!(tokens[1].start, 6);
    assert_eq!(tokens[1].end, 11);
    assert_eq!(tokens[1].primary, "WORLD");
}
