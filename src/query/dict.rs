//! AST <-> tagged-dictionary codec (C7), grounded in `to_dict`/`from_dict`
//! and their `_from_dict_as_phrase`/`_from_dict_as_phrases` helpers in
//! `examples/original_source/apsw/fts5query.py`. The dict form uses an `@`
//! discriminant key and omits fields at their default value, so it round
//! trips through JSON/logging cleanly.

use serde_json::{json, Map, Value};

use crate::error::SchemaError;

use super::ast::{ColumnFilterKind, Phrase, Phrases, Query, DEFAULT_NEAR_DISTANCE};

fn phrase_to_value(phrase: &Phrase) -> Value {
    let mut map = Map::new();
    map.insert("@".into(), json!("PHRASE"));
    map.insert("phrase".into(), json!(phrase.text));
    if phrase.prefix {
        map.insert("prefix".into(), json!(true));
    }
    if phrase.sequence {
        map.insert("sequence".into(), json!(true));
    }
    if phrase.initial {
        map.insert("initial".into(), json!(true));
    }
    Value::Object(map)
}

fn phrases_to_value(phrases: &Phrases) -> Value {
    json!({
        "@": "PHRASES",
        "phrases": phrases.phrases.iter().map(phrase_to_value).collect::<Vec<_>>(),
    })
}

/// Converts a [`Query`] into its tagged-dictionary form. Infallible: every
/// well-formed AST has a well-formed dict.
pub fn to_dict(query: &Query) -> Value {
    match query {
        Query::Phrases(phrases) => phrases_to_value(phrases),
        Query::And(queries) => json!({ "@": "AND", "queries": queries.iter().map(to_dict).collect::<Vec<_>>() }),
        Query::Or(queries) => json!({ "@": "OR", "queries": queries.iter().map(to_dict).collect::<Vec<_>>() }),
        Query::Not { r#match, no_match } => {
            json!({ "@": "NOT", "match": to_dict(r#match), "no_match": to_dict(no_match) })
        }
        Query::Near { phrases, distance } => {
            let mut map = Map::new();
            map.insert("@".into(), json!("NEAR"));
            map.insert("phrases".into(), phrases_to_value(phrases));
            if *distance != DEFAULT_NEAR_DISTANCE {
                map.insert("distance".into(), json!(distance));
            }
            Value::Object(map)
        }
        Query::ColumnFilter { columns, filter, query } => {
            let filter = match filter {
                ColumnFilterKind::Include => "include",
                ColumnFilterKind::Exclude => "exclude",
            };
            json!({ "@": "COLUMNFILTER", "query": to_dict(query), "columns": columns, "filter": filter })
        }
    }
}

fn err(reason: impl Into<String>, path: &str) -> SchemaError {
    SchemaError { path: path.to_string(), reason: reason.into() }
}

fn as_bool_field(map: &Map<String, Value>, field: &str, path: &str) -> Result<bool, SchemaError> {
    match map.get(field) {
        None => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(err(format!("'{field}' must be a bool"), path)),
    }
}

fn phrase_from_value(item: &Value, first: bool, path: &str) -> Result<Phrase, SchemaError> {
    if let Value::String(s) = item {
        return Ok(Phrase::new(s.clone()));
    }

    let Value::Object(map) = item else {
        return Err(err("must be a string or a PHRASE dict", path));
    };

    if map.get("@").and_then(Value::as_str) != Some("PHRASE") {
        return Err(err("needs to be a dict with '@': 'PHRASE'", path));
    }

    let text = match map.get("phrase") {
        Some(Value::String(s)) => s.clone(),
        Some(_) => return Err(err("'phrase' must be a string", path)),
        None => return Err(err("must have a 'phrase' member", path)),
    };

    let mut phrase = Phrase::new(text);
    phrase.initial = as_bool_field(map, "initial", path)?;
    phrase.prefix = as_bool_field(map, "prefix", path)?;
    phrase.sequence = as_bool_field(map, "sequence", path)?;

    if phrase.sequence && first {
        return Err(err("first phrase can't have sequence (+) set", path));
    }
    if phrase.sequence && phrase.initial {
        return Err(err("can't have both sequence (+) and initial (^) set on the same phrase", path));
    }

    Ok(phrase)
}

fn phrases_from_value(item: &Value, path: &str) -> Result<Phrases, SchemaError> {
    match item {
        Value::String(s) => Ok(Phrases { phrases: vec![Phrase::new(s.clone())] }),
        Value::Array(members) => {
            if members.is_empty() {
                return Err(err("no phrase found in empty sequence", path));
            }
            let mut phrases = Vec::with_capacity(members.len());
            for member in members {
                phrases.push(phrase_from_value(member, phrases.is_empty(), path)?);
            }
            Ok(Phrases { phrases })
        }
        Value::Object(map) => match map.get("@").and_then(Value::as_str) {
            Some("PHRASE") => Ok(Phrases { phrases: vec![phrase_from_value(item, true, path)?] }),
            Some("PHRASES") => {
                let members = match map.get("phrases") {
                    Some(Value::Array(members)) => members,
                    _ => return Err(err("'phrases' must be a sequence", path)),
                };
                if members.is_empty() {
                    return Err(err("'phrases' must contain at least one member", path));
                }
                let mut phrases = Vec::with_capacity(members.len());
                for member in members {
                    phrases.push(phrase_from_value(member, phrases.is_empty(), path)?);
                }
                Ok(Phrases { phrases })
            }
            _ => Err(err("expected '@' key with value of PHRASE or PHRASES", path)),
        },
        _ => Err(err("can't be turned into phrases", path)),
    }
}

/// Converts a tagged-dictionary `Value` back into a [`Query`], applying the
/// same relaxations as the original: a bare string or array anywhere a
/// `PHRASES`/`PHRASE` is expected, and a single-element `AND`/`OR`
/// `queries` list collapsing to that one member.
pub fn from_dict(value: &Value) -> Result<Query, SchemaError> {
    from_dict_at(value, "$")
}

fn from_dict_at(value: &Value, path: &str) -> Result<Query, SchemaError> {
    if matches!(value, Value::String(_) | Value::Array(_)) {
        return Ok(Query::Phrases(phrases_from_value(value, path)?));
    }

    let Value::Object(map) = value else {
        return Err(err("expected a dict, string, or sequence", path));
    };

    let tag = map
        .get("@")
        .and_then(Value::as_str)
        .ok_or_else(|| err("expected key '@' in dict", path))?;

    match tag {
        "PHRASE" | "PHRASES" => Ok(Query::Phrases(phrases_from_value(value, path)?)),

        "AND" | "OR" => {
            let queries = match map.get("queries") {
                Some(Value::Array(q)) if !q.is_empty() => q,
                _ => return Err(err("'queries' must be a sequence of at least 1 item", path)),
            };
            let mut parsed = Vec::with_capacity(queries.len());
            for q in queries {
                parsed.push(from_dict_at(q, path)?);
            }
            if parsed.len() == 1 {
                return Ok(parsed.into_iter().next().unwrap());
            }
            Ok(if tag == "AND" { Query::And(parsed) } else { Query::Or(parsed) })
        }

        "NEAR" => {
            let phrases_value = map.get("phrases").ok_or_else(|| err("must have 'phrases' key", path))?;
            let phrases = phrases_from_value(phrases_value, path)?;
            if phrases.phrases.len() < 2 {
                return Err(err("NEAR requires at least 2 phrases", path));
            }
            let distance = match map.get("distance") {
                None => DEFAULT_NEAR_DISTANCE,
                Some(Value::Number(n)) => n
                    .as_u64()
                    .ok_or_else(|| err("'distance' must be a non-negative integer", path))? as u32,
                Some(_) => return Err(err("'distance' must be an integer", path)),
            };
            if distance < 1 {
                return Err(err("NEAR distance must be at least one", path));
            }
            Ok(Query::Near { phrases, distance })
        }

        "NOT" => {
            let r#match = map.get("match").ok_or_else(|| err("must have a 'match' key", path))?;
            let no_match = map.get("no_match").ok_or_else(|| err("must have a 'no_match' key", path))?;
            Ok(Query::Not {
                r#match: Box::new(from_dict_at(r#match, path)?),
                no_match: Box::new(from_dict_at(no_match, path)?),
            })
        }

        "COLUMNFILTER" => {
            let columns: Vec<String> = match map.get("columns") {
                Some(Value::Array(cols)) if !cols.is_empty() => {
                    let mut out = Vec::with_capacity(cols.len());
                    for c in cols {
                        match c {
                            Value::String(s) => out.push(s.clone()),
                            _ => return Err(err("'columns' members must all be strings", path)),
                        }
                    }
                    out
                }
                _ => return Err(err("must have 'columns' key with at least one string member", path)),
            };

            let filter = match map.get("filter").and_then(Value::as_str) {
                Some("include") => ColumnFilterKind::Include,
                Some("exclude") => ColumnFilterKind::Exclude,
                _ => return Err(err("must have 'filter' key with value of 'include' or 'exclude'", path)),
            };

            let query = map.get("query").ok_or_else(|| err("must have a 'query' value", path))?;

            Ok(Query::ColumnFilter { columns, filter, query: Box::new(from_dict_at(query, path)?) })
        }

        other => Err(err(format!("\"{other}\" is not a known query type"), path)),
    }
}
