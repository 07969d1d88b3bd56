//! Category-set-expression parser for the `categories` /
//! `single_token_categories` / `include_categories` tokenizer arguments:
//! `"*"`, `"L* !Lu"`, `"[CLMNS]*"`.
//!
//! Grounded on the [`crate::unicode::category::UnicodeCategory`] bitfield
//! built for C1: every clause resolves to a mask tested with
//! [`UnicodeCategory::has`], so the evaluation rule is the same "later
//! clause wins" one a `unicode61`-style category filter uses.

use crate::error::ConfigError;
use crate::unicode::UnicodeCategory;

/// `None` acts as a wildcard mask (`"*"`): every category has it.
const WILDCARD: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Clause {
    include: bool,
    mask: u32,
}

/// A parsed category-set expression. Clauses are evaluated left to right;
/// the last clause whose mask matches a codepoint's category decides
/// whether it's included, defaulting to excluded if none match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet {
    clauses: Vec<Clause>,
}

fn major_mask(letter: char) -> Option<u32> {
    Some(match letter {
        'L' => UnicodeCategory::LETTER,
        'M' => UnicodeCategory::MARK,
        'N' => UnicodeCategory::NUMBER,
        'P' => UnicodeCategory::PUNCTUATION,
        'Z' => UnicodeCategory::SEPARATOR,
        'S' => UnicodeCategory::SYMBOL,
        'C' => UnicodeCategory::OTHER,
        _ => return None,
    })
}

fn minor_mask(code: &str) -> Option<u32> {
    Some(match code {
        "Lu" => UnicodeCategory::UPPERCASE_LETTER,
        "Ll" => UnicodeCategory::LOWERCASE_LETTER,
        "Lt" => UnicodeCategory::TITLECASE_LETTER,
        "Lm" => UnicodeCategory::MODIFIER_LETTER,
        "Lo" => UnicodeCategory::OTHER_LETTER,
        "Mn" => UnicodeCategory::NONSPACING_MARK,
        "Mc" => UnicodeCategory::SPACING_MARK,
        "Me" => UnicodeCategory::ENCLOSING_MARK,
        "Nd" => UnicodeCategory::DECIMAL_NUMBER,
        "Nl" => UnicodeCategory::LETTER_NUMBER,
        "No" => UnicodeCategory::OTHER_NUMBER,
        "Cc" => UnicodeCategory::CONTROL,
        "Cf" => UnicodeCategory::FORMAT,
        "Cs" => UnicodeCategory::SURROGATE,
        "Co" => UnicodeCategory::PRIVATE_USE,
        "Cn" => UnicodeCategory::UNASSIGNED,
        _ => return None,
    })
}

fn parse_code(code: &str, expr: &str) -> Result<u32, ConfigError> {
    let mut chars = code.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(m), None, None) => major_mask(m)
            .ok_or_else(|| ConfigError { field: expr.to_string(), reason: format!("unknown category '{code}'") }),
        (Some(_), Some(_), None) => minor_mask(code)
            .ok_or_else(|| ConfigError { field: expr.to_string(), reason: format!("unknown category '{code}'") }),
        _ => Err(ConfigError { field: expr.to_string(), reason: format!("malformed category clause '{code}'") }),
    }
}

fn parse_clause(clause: &str, expr: &str) -> Result<Clause, ConfigError> {
    let (include, body) = match clause.strip_prefix('!') {
        Some(rest) => (false, rest),
        None => (true, clause),
    };

    if body == "*" {
        return Ok(Clause { include, mask: WILDCARD });
    }

    if let Some(inner) = body.strip_prefix('[').and_then(|s| s.strip_suffix("]*")) {
        // A bracket group is shorthand for several single-major clauses
        // OR-ed together; since masks combine with bitwise OR and `has`
        // tests for containment, we merge them into one clause mask.
        let mut mask = 0u32;
        for letter in inner.chars() {
            mask |= major_mask(letter)
                .ok_or_else(|| ConfigError { field: expr.to_string(), reason: format!("unknown major category '{letter}'") })?;
        }
        return Ok(Clause { include, mask });
    }

    if let Some(major) = body.strip_suffix('*') {
        let mut chars = major.chars();
        let (Some(m), None) = (chars.next(), chars.next()) else {
            return Err(ConfigError { field: expr.to_string(), reason: format!("malformed category clause '{body}'") });
        };
        let mask = major_mask(m)
            .ok_or_else(|| ConfigError { field: expr.to_string(), reason: format!("unknown category '{body}'") })?;
        return Ok(Clause { include, mask });
    }

    Ok(Clause { include, mask: parse_code(body, expr)? })
}

impl CategorySet {
    /// Parses a whitespace-separated category-set expression.
    pub fn parse(expr: &str) -> Result<Self, ConfigError> {
        let mut clauses = Vec::new();
        for clause in expr.split_ascii_whitespace() {
            clauses.push(parse_clause(clause, expr)?);
        }
        if clauses.is_empty() {
            let err = ConfigError { field: expr.to_string(), reason: "empty category expression".to_string() };
            log::warn!("rejecting category expression: {err}");
            return Err(err);
        }
        Ok(Self { clauses })
    }

    /// Evaluates the set against a codepoint's category: the last clause
    /// whose mask matches decides inclusion, defaulting to excluded.
    pub fn matches(&self, category: UnicodeCategory) -> bool {
        let mut result = false;
        for clause in &self.clauses {
            if clause.mask == WILDCARD || category.has(clause.mask) {
                result = clause.include;
            }
        }
        result
    }
}
