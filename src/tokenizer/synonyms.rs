//! Synonyms wrapper (C9): for each token, consults a user function and
//! appends any returned variants as colocated entries. Never touches
//! `start`/`end`.

use std::rc::Rc;

use crate::error::TokenizerContract;

use super::types::{Reason, TokenRecord, Tokenizer};

pub struct Synonyms {
    pub inner: Rc<dyn Tokenizer>,
    pub lookup: Box<dyn Fn(&str) -> Vec<String>>,
}

impl Synonyms {
    /// `lookup` returns the colocated variants for a token's primary text
    /// (empty if none); a one-element return is the common "single
    /// synonym" case.
    pub fn new(inner: Rc<dyn Tokenizer>, lookup: impl Fn(&str) -> Vec<String> + 'static) -> Self {
        Self { inner, lookup: Box::new(lookup) }
    }
}

impl Tokenizer for Synonyms {
    fn tokenize(&self, text: &str, reason: Reason) -> Result<Vec<TokenRecord>, TokenizerContract> {
        let mut records = self.inner.tokenize(text, reason)?;
        for record in &mut records {
            record.colocated.extend((self.lookup)(&record.primary));
        }
        Ok(records)
    }
}
