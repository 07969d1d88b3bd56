//! N-gram tokenizer (C9): slides one or more configured window sizes over
//! the input's codepoints (or a category-filtered subsequence of them).

use crate::error::{ConfigError, TokenizerContract};
use crate::unicode::category_of;

use super::category_expr::CategorySet;
use super::types::{Reason, TokenRecord, Tokenizer};

/// Parses a size spec like `"3"`, `"3,5"`, `"3-7"`, `"2-3,3-9"` into the
/// ascending, deduplicated set of sizes it names. A descending range
/// (`"7-3"`) contributes nothing, matching the spec's "empty" rule.
pub fn parse_ngram_sizes(spec: &str) -> Result<Vec<usize>, ConfigError> {
    parse_ngram_sizes_inner(spec).inspect_err(|e| log::warn!("rejecting n-gram size spec: {e}"))
}

fn parse_ngram_sizes_inner(spec: &str) -> Result<Vec<usize>, ConfigError> {
    let mut sizes = std::collections::BTreeSet::new();

    for part in spec.split(',') {
        let part = part.trim();
        if part.is_empty() {
            return Err(ConfigError { field: spec.to_string(), reason: "empty size term".to_string() });
        }
        match part.split_once('-') {
            Some((lo, hi)) => {
                let lo: usize = lo
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError { field: spec.to_string(), reason: format!("invalid range start '{lo}'") })?;
                let hi: usize = hi
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError { field: spec.to_string(), reason: format!("invalid range end '{hi}'") })?;
                for n in lo..=hi {
                    sizes.insert(n);
                }
            }
            None => {
                let n: usize = part
                    .parse()
                    .map_err(|_| ConfigError { field: spec.to_string(), reason: format!("invalid size '{part}'") })?;
                sizes.insert(n);
            }
        }
    }

    if sizes.is_empty() || sizes.contains(&0) {
        return Err(ConfigError { field: spec.to_string(), reason: "n-gram sizes must be positive".to_string() });
    }

    Ok(sizes.into_iter().collect())
}

pub struct NGramConfig {
    pub sizes: Vec<usize>,
    pub include_categories: Option<CategorySet>,
}

pub struct NGram {
    pub config: NGramConfig,
}

impl NGram {
    pub fn new(config: NGramConfig) -> Self {
        Self { config }
    }

    fn matched_indices(&self, chars: &[(usize, char)]) -> Vec<usize> {
        match &self.config.include_categories {
            None => (0..chars.len()).collect(),
            Some(set) => chars
                .iter()
                .enumerate()
                .filter(|&(_, &(_, c))| set.matches(category_of(c)))
                .map(|(i, _)| i)
                .collect(),
        }
    }

    fn make_token(&self, text: &str, chars: &[(usize, char)], idxs: &[usize]) -> TokenRecord {
        if idxs.is_empty() {
            return TokenRecord::new(0, text.len(), text.to_string());
        }
        let start = chars[idxs[0]].0;
        let end = chars.get(idxs[idxs.len() - 1] + 1).map(|&(p, _)| p).unwrap_or(text.len());
        let primary: String = idxs.iter().map(|&i| chars[i].1).collect();
        TokenRecord::new(start, end, primary)
    }
}

impl Tokenizer for NGram {
    fn tokenize(&self, text: &str, reason: Reason) -> Result<Vec<TokenRecord>, TokenizerContract> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        if chars.is_empty() {
            return Ok(Vec::new());
        }

        let matched = self.matched_indices(&chars);
        let m = matched.len();
        let smallest = *self.config.sizes.iter().min().unwrap_or(&1);

        if m < smallest {
            return Ok(vec![self.make_token(text, &chars, &matched)]);
        }

        let mut tokens = Vec::new();

        match reason {
            Reason::Query | Reason::QueryPrefix => {
                for start in 0..m {
                    if let Some(&size) = self.config.sizes.iter().rev().find(|&&size| start + size <= m) {
                        tokens.push(self.make_token(text, &chars, &matched[start..start + size]));
                    }
                }
            }
            Reason::Document | Reason::Aux => {
                for &size in &self.config.sizes {
                    if size > m {
                        continue;
                    }
                    for start in 0..=(m - size) {
                        tokens.push(self.make_token(text, &chars, &matched[start..start + size]));
                    }
                }
            }
        }

        Ok(tokens)
    }
}

#[cfg(test)]
mod tests;
