//! Unicode tokenizer (C9): splits text by codepoint category, with
//! `tokenchars`/`separators` overrides and `single_token_categories`
//! codepoints that always form their own token.

use std::collections::HashSet;

use crate::error::TokenizerContract;
use crate::unicode::category_of;

use super::category_expr::CategorySet;
use super::types::{Reason, TokenRecord, Tokenizer};

/// Configuration for [`UnicodeTokenizer`]; see `spec` §4.9.
pub struct UnicodeTokenizerConfig {
    pub categories: CategorySet,
    pub tokenchars: HashSet<char>,
    pub separators: HashSet<char>,
    pub single_token_categories: CategorySet,
}

impl UnicodeTokenizerConfig {
    /// `unicode61`'s usual default: letters and numbers continue a token,
    /// nothing is single-token, no extra token/separator characters.
    pub fn default_categories() -> Self {
        Self {
            categories: CategorySet::parse("L* N*").expect("built-in expression is well-formed"),
            tokenchars: HashSet::new(),
            separators: HashSet::new(),
            single_token_categories: CategorySet::parse("!*").expect("built-in expression is well-formed"),
        }
    }
}

pub struct UnicodeTokenizer {
    pub config: UnicodeTokenizerConfig,
}

impl UnicodeTokenizer {
    pub fn new(config: UnicodeTokenizerConfig) -> Self {
        Self { config }
    }
}

impl Tokenizer for UnicodeTokenizer {
    fn tokenize(&self, text: &str, _reason: Reason) -> Result<Vec<TokenRecord>, TokenizerContract> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut tokens = Vec::new();
        let mut run_start: Option<usize> = None;

        for (i, &(pos, c)) in chars.iter().enumerate() {
            let next_pos = chars.get(i + 1).map(|&(p, _)| p).unwrap_or(text.len());
            let category = category_of(c);

            if self.config.single_token_categories.matches(category) {
                if let Some(start) = run_start.take() {
                    tokens.push(TokenRecord::new(start, pos, &text[start..pos]));
                }
                tokens.push(TokenRecord::new(pos, next_pos, &text[pos..next_pos]));
                continue;
            }

            let is_separator = self.config.separators.contains(&c);
            let is_tokenchar = self.config.tokenchars.contains(&c);
            let continues = !is_separator && (is_tokenchar || self.config.categories.matches(category));

            if continues {
                run_start.get_or_insert(pos);
            } else if let Some(start) = run_start.take() {
                tokens.push(TokenRecord::new(start, pos, &text[start..pos]));
            }
        }

        if let Some(start) = run_start.take() {
            tokens.push(TokenRecord::new(start, text.len(), &text[start..]));
        }

        Ok(tokens)
    }
}

#[cfg(test)]
mod tests;
