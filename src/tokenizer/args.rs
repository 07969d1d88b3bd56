//! Tokenizer-args parser (C10): `name value name value ...` lists against
//! a declared schema, with typed/default/choice fields and a `"+"`
//! sentinel for "remaining args are a nested tokenizer".

use std::collections::HashMap;

use crate::error::ConfigError;

/// A parsed argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

/// A field's declared shape in an [`ArgsSchema`].
pub enum FieldSpec {
    /// A plain default; any value is accepted as-is (as a string).
    Default(ArgValue),
    /// A typed field with an optional converter, default, and choice list.
    Typed { convertor: Option<fn(&str) -> Result<ArgValue, String>>, default: Option<ArgValue>, choices: Option<Vec<String>> },
    /// The `"+"` sentinel: remaining args name a nested tokenizer.
    NestedTokenizer,
}

pub struct ArgsSchema {
    pub fields: HashMap<String, FieldSpec>,
}

/// The result of parsing an argument list against a schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedArgs {
    pub values: HashMap<String, ArgValue>,
    pub nested: Option<(String, Vec<String>)>,
}

/// Parses `args` against `schema`.
///
/// # Errors
/// Returns [`ConfigError`] on an unknown name, a name with no following
/// value, a converter rejection, a value outside the declared choices, or
/// a declared `"+"` field with no nested tokenizer supplied.
pub fn parse_args(schema: &ArgsSchema, args: &[&str]) -> Result<ParsedArgs, ConfigError> {
    parse_args_inner(schema, args).inspect_err(|e| log::warn!("rejecting tokenizer arguments: {e}"))
}

fn parse_args_inner(schema: &ArgsSchema, args: &[&str]) -> Result<ParsedArgs, ConfigError> {
    let mut values = HashMap::new();
    for (name, spec) in &schema.fields {
        let default = match spec {
            FieldSpec::Default(v) => Some(v.clone()),
            FieldSpec::Typed { default, .. } => default.clone(),
            FieldSpec::NestedTokenizer => None,
        };
        if let Some(v) = default {
            values.insert(name.clone(), v);
        }
    }

    let mut nested = None;
    let mut i = 0;
    while i < args.len() {
        let name = args[i];
        let spec = schema
            .fields
            .get(name)
            .ok_or_else(|| ConfigError { field: name.to_string(), reason: "unknown argument".to_string() })?;

        if matches!(spec, FieldSpec::NestedTokenizer) {
            if i + 1 >= args.len() {
                return Err(ConfigError { field: name.to_string(), reason: "expected a nested tokenizer name".to_string() });
            }
            let tokenizer_name = args[i + 1].to_string();
            let rest = args[i + 2..].iter().map(|s| s.to_string()).collect();
            nested = Some((tokenizer_name, rest));
            i = args.len();
            continue;
        }

        i += 1;
        let raw = args
            .get(i)
            .ok_or_else(|| ConfigError { field: name.to_string(), reason: "missing value".to_string() })?;
        i += 1;

        let value = match spec {
            FieldSpec::Default(_) => ArgValue::Str(raw.to_string()),
            FieldSpec::Typed { convertor, choices, .. } => {
                if let Some(choices) = choices {
                    if !choices.iter().any(|c| c == raw) {
                        return Err(ConfigError {
                            field: name.to_string(),
                            reason: format!("{raw:?} is not one of the declared choices"),
                        });
                    }
                }
                match convertor {
                    Some(convert) => convert(raw).map_err(|reason| ConfigError { field: name.to_string(), reason })?,
                    None => ArgValue::Str(raw.to_string()),
                }
            }
            FieldSpec::NestedTokenizer => unreachable!("handled above"),
        };
        values.insert(name.to_string(), value);
    }

    for (name, spec) in &schema.fields {
        if matches!(spec, FieldSpec::NestedTokenizer) && nested.is_none() {
            return Err(ConfigError { field: name.clone(), reason: "nested tokenizer required but not supplied".to_string() });
        }
    }

    Ok(ParsedArgs { values, nested })
}

#[cfg(test)]
mod tests;
