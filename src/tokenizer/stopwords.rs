//! Stopwords wrapper (C9): drops tokens whose primary text matches a
//! user-supplied predicate.

use std::rc::Rc;

use crate::error::TokenizerContract;

use super::types::{Reason, TokenRecord, Tokenizer};

pub struct Stopwords {
    pub inner: Rc<dyn Tokenizer>,
    pub is_stopword: Box<dyn Fn(&str) -> bool>,
}

impl Stopwords {
    pub fn new(inner: Rc<dyn Tokenizer>, is_stopword: impl Fn(&str) -> bool + 'static) -> Self {
        Self { inner, is_stopword: Box::new(is_stopword) }
    }
}

impl Tokenizer for Stopwords {
    fn tokenize(&self, text: &str, reason: Reason) -> Result<Vec<TokenRecord>, TokenizerContract> {
        Ok(self
            .inner
            .tokenize(text, reason)?
            .into_iter()
            .filter(|record| !(self.is_stopword)(&record.primary))
            .collect())
    }
}
