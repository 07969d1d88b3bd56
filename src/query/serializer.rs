//! AST -> canonical query string (C8), grounded in `to_query_string`/`quote`
//! in `examples/original_source/apsw/fts5query.py`.

use super::ast::{ColumnFilterKind, Phrase, Phrases, Query};

fn priority(query: &Query) -> i32 {
    match query {
        Query::Or(_) => 10,
        Query::And(_) => 20,
        Query::Not { .. } => 30,
        Query::ColumnFilter { .. } => 50,
        Query::Near { .. } => 60,
        Query::Phrases(_) => 70,
    }
}

fn needs_parens(parent: &Query, child: &Query) -> bool {
    priority(child) < priority(parent)
}

/// Quotes `text` if it contains any ASCII character outside
/// `[0-9A-Za-z_]`, doubling embedded `"`. Non-ASCII characters never force
/// quoting on their own (`spec` §4.8, matching the original's byte-range
/// check).
pub fn quote(text: &str) -> String {
    if text.is_empty() {
        return "\"\"".to_string();
    }
    let needs_quoting = text
        .chars()
        .any(|c| (c as u32) < 0x80 && !(c.is_ascii_alphanumeric() || c == '_'));
    if needs_quoting {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

fn phrase_to_string(phrase: &Phrase) -> String {
    let mut out = String::new();
    if phrase.initial {
        out.push_str("^ ");
    }
    if phrase.sequence {
        out.push_str("+ ");
    }
    out.push_str(&quote(&phrase.text));
    if phrase.prefix {
        out.push_str(" *");
    }
    out
}

fn phrases_to_string(phrases: &Phrases) -> String {
    phrases.phrases.iter().map(phrase_to_string).collect::<Vec<_>>().join(" ")
}

/// Renders `query` as FTS5-compatible query text, parenthesizing children
/// only when their priority is lower than the parent's.
pub fn to_query_string(query: &Query) -> String {
    match query {
        Query::Phrases(phrases) => phrases_to_string(phrases),

        Query::And(children) | Query::Or(children) => {
            let sep = if matches!(query, Query::And(_)) { " AND " } else { " OR " };
            let mut out = String::new();
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    out.push_str(sep);
                }
                let parens = needs_parens(query, child);
                if parens {
                    out.push('(');
                }
                out.push_str(&to_query_string(child));
                if parens {
                    out.push(')');
                }
            }
            out
        }

        Query::Not { r#match, no_match } => {
            let mut out = String::new();
            let match_parens = needs_parens(query, r#match);
            if match_parens {
                out.push('(');
            }
            out.push_str(&to_query_string(r#match));
            if match_parens {
                out.push(')');
            }
            out.push_str(" NOT ");
            let no_match_parens = needs_parens(query, no_match);
            if no_match_parens {
                out.push('(');
            }
            out.push_str(&to_query_string(no_match));
            if no_match_parens {
                out.push(')');
            }
            out
        }

        Query::Near { phrases, distance } => {
            let mut out = format!("NEAR({}", phrases_to_string(phrases));
            if *distance != super::ast::DEFAULT_NEAR_DISTANCE {
                out.push_str(&format!(", {distance}"));
            }
            out.push(')');
            out
        }

        Query::ColumnFilter { columns, filter, query: inner } => {
            let mut out = String::new();
            if *filter == ColumnFilterKind::Exclude {
                out.push('-');
            }
            let braced = columns.len() > 1;
            if braced {
                out.push('{');
            }
            for (i, column) in columns.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push_str(&quote(column));
            }
            if braced {
                out.push('}');
            }
            out.push_str(": ");
            if matches!(**inner, Query::Phrases(_) | Query::Near { .. }) {
                out.push_str(&to_query_string(inner));
            } else {
                out.push('(');
                out.push_str(&to_query_string(inner));
                out.push(')');
            }
            out
        }
    }
}

#[cfg(test)]
mod tests;
