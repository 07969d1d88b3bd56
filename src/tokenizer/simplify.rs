//! Simplify wrapper (C9): optional Unicode normalization, case folding,
//! and category-based codepoint removal around an inner tokenizer.

use std::rc::Rc;

use unicode_normalization::UnicodeNormalization;

use crate::error::TokenizerContract;
use crate::unicode::{casefold, category_of};

use super::category_expr::CategorySet;
use super::types::{Reason, TokenRecord, Tokenizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationForm {
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
}

impl NormalizationForm {
    fn apply(self, text: &str) -> String {
        match self {
            Self::Nfc => text.nfc().collect(),
            Self::Nfd => text.nfd().collect(),
            Self::Nfkc => text.nfkc().collect(),
            Self::Nfkd => text.nfkd().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    Upper,
    Lower,
    Casefold,
    Title,
}

impl CaseMode {
    fn apply(self, text: &str) -> String {
        match self {
            Self::Upper => text.to_uppercase(),
            Self::Lower => text.to_lowercase(),
            Self::Casefold => casefold(text),
            Self::Title => title_case(text),
        }
    }
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

#[derive(Default)]
pub struct SimplifyConfig {
    pub pre_normalize: Option<NormalizationForm>,
    pub case: Option<CaseMode>,
    pub remove_categories: Option<CategorySet>,
    pub post_normalize: Option<NormalizationForm>,
}

pub struct Simplify {
    pub config: SimplifyConfig,
    pub inner: Rc<dyn Tokenizer>,
}

impl Simplify {
    pub fn new(config: SimplifyConfig, inner: Rc<dyn Tokenizer>) -> Self {
        Self { config, inner }
    }

    fn simplify_text(&self, text: &str) -> String {
        let mut text = match self.config.pre_normalize {
            Some(form) => form.apply(text),
            None => text.to_string(),
        };
        if let Some(case) = self.config.case {
            text = case.apply(&text);
        }
        if let Some(remove) = &self.config.remove_categories {
            text = text.chars().filter(|c| !remove.matches(category_of(*c))).collect();
        }
        if let Some(form) = self.config.post_normalize {
            text = form.apply(&text);
        }
        text
    }
}

impl Tokenizer for Simplify {
    fn tokenize(&self, text: &str, reason: Reason) -> Result<Vec<TokenRecord>, TokenizerContract> {
        let records = self.inner.tokenize(text, reason)?;
        let mut out = Vec::with_capacity(records.len());
        for record in records {
            let primary = self.simplify_text(&record.primary);
            if primary.is_empty() {
                continue;
            }
            let colocated = record
                .colocated
                .into_iter()
                .map(|variant| self.simplify_text(&variant))
                .filter(|variant| !variant.is_empty())
                .collect();
            out.push(TokenRecord { start: record.start, end: record.end, primary, colocated });
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests;
