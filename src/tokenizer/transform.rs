//! Transform wrapper (C9): consults a user function per token; it may
//! replace the primary text, supply multiple colocated variants, or
//! delete the token entirely.

use std::rc::Rc;

use crate::error::TokenizerContract;

use super::types::{Reason, TokenRecord, Tokenizer};

/// What a transform function returns for one token's primary text.
pub enum Transformed {
    /// Replace the primary text.
    Replace(String),
    /// Replace the token with these colocated variants (none primary).
    Variants(Vec<String>),
    /// Drop the token.
    Delete,
}

pub struct Transform {
    pub inner: Rc<dyn Tokenizer>,
    pub transform: Box<dyn Fn(&str) -> Transformed>,
}

impl Transform {
    pub fn new(inner: Rc<dyn Tokenizer>, transform: impl Fn(&str) -> Transformed + 'static) -> Self {
        Self { inner, transform: Box::new(transform) }
    }
}

impl Tokenizer for Transform {
    fn tokenize(&self, text: &str, reason: Reason) -> Result<Vec<TokenRecord>, TokenizerContract> {
        let mut out = Vec::new();
        for record in self.inner.tokenize(text, reason)? {
            match (self.transform)(&record.primary) {
                Transformed::Replace(primary) => {
                    out.push(TokenRecord { primary, ..record });
                }
                Transformed::Variants(variants) => {
                    if let Some((primary, rest)) = variants.split_first() {
                        out.push(TokenRecord {
                            primary: primary.clone(),
                            colocated: rest.to_vec(),
                            ..record
                        });
                    }
                }
                Transformed::Delete => {}
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::{Transform, Transformed};
    use crate::tokenizer::types::{Reason, Tokenizer};
    use crate::tokenizer::unicode_tokenizer::{UnicodeTokenizer, UnicodeTokenizerConfig};

    #[test]
    fn replace_changes_primary_text() {
        let inner = Rc::new(UnicodeTokenizer::new(UnicodeTokenizerConfig::default_categories()));
        let transform = Transform::new(inner, |text| Transformed::Replace(text.to_uppercase()));
        let tokens = transform.tokenize("hi there", Reason::Document).unwrap();
        assert_eq!(tokens[0].primary, "HI");
        assert_eq!(tokens[1].primary, "THERE");
    }

    #[test]
    fn delete_drops_the_token() {
        let inner = Rc::new(UnicodeTokenizer::new(UnicodeTokenizerConfig::default_categories()));
        let transform = Transform::new(inner, |text| if text == "the" { Transformed::Delete } else { Transformed::Replace(text.to_string()) });
        let tokens = transform.tokenize("the cat sat", Reason::Document).unwrap();
        assert_eq!(tokens.iter().map(|t| t.primary.as_str()).collect::<Vec<_>>(), vec!["cat", "sat"]);
    }

    #[test]
    fn variants_split_primary_and_colocated() {
        let inner = Rc::new(UnicodeTokenizer::new(UnicodeTokenizerConfig::default_categories()));
        let transform = Transform::new(inner, |text| {
            if text == "run" {
                Transformed::Variants(vec!["run".to_string(), "running".to_string(), "ran".to_string()])
            } else {
                Transformed::Replace(text.to_string())
            }
        });
        let tokens = transform.tokenize("run fast", Reason::Document).unwrap();
        assert_eq!(tokens[0].primary, "run");
        assert_eq!(tokens[0].colocated, vec!["running", "ran"]);
    }
}
