use std::collections::HashMap;

use super::{parse_args, ArgValue, ArgsSchema, FieldSpec};

fn int_convertor(raw: &str) -> Result<ArgValue, String> {
    raw.parse::<i64>().map(ArgValue::Int).map_err(|_| format!("{raw:?} is not an integer"))
}

#[test]
fn applies_declared_defaults_when_absent() {
    let mut fields = HashMap::new();
    fields.insert("case".to_string(), FieldSpec::Default(ArgValue::Str("none".to_string())));
    let schema = ArgsSchema { fields };

    let parsed = parse_args(&schema, &[]).unwrap();
    assert_eq!(parsed.values.get("case"), Some(&ArgValue::Str("none".to_string())));
}

#[test]
fn overrides_default_when_supplied() {
    let mut fields = HashMap::new();
    fields.insert("case".to_string(), FieldSpec::Default(ArgValue::Str("none".to_string())));
    let schema = ArgsSchema { fields };

    let parsed = parse_args(&schema, &["case", "lower"]).unwrap();
    assert_eq!(parsed.values.get("case"), Some(&ArgValue::Str("lower".to_string())));
}

#[test]
fn unknown_argument_name_errors() {
    let schema = ArgsSchema { fields: HashMap::new() };
    let err = parse_args(&schema, &["bogus", "1"]).unwrap_err();
    assert_eq!(err.field, "bogus");
}

#[test]
fn name_with_no_value_errors() {
    let mut fields = HashMap::new();
    fields.insert("n".to_string(), FieldSpec::Typed { convertor: Some(int_convertor), default: None, choices: None });
    let schema = ArgsSchema { fields };
    let err = parse_args(&schema, &["n"]).unwrap_err();
    assert_eq!(err.reason, "missing value");
}

#[test]
fn convertor_rejection_is_config_error() {
    let mut fields = HashMap::new();
    fields.insert("n".to_string(), FieldSpec::Typed { convertor: Some(int_convertor), default: None, choices: None });
    let schema = ArgsSchema { fields };
    let err = parse_args(&schema, &["n", "not-a-number"]).unwrap_err();
    assert!(err.reason.contains("not an integer"));
}

#[test]
fn value_outside_choices_is_config_error() {
    let mut fields = HashMap::new();
    fields.insert(
        "mode".to_string(),
        FieldSpec::Typed { convertor: None, default: None, choices: Some(vec!["a".to_string(), "b".to_string()]) },
    );
    let schema = ArgsSchema { fields };
    let err = parse_args(&schema, &["mode", "c"]).unwrap_err();
    assert!(err.reason.contains("not one of"));
}

#[test]
fn plus_sentinel_captures_nested_tokenizer_and_its_args() {
    let mut fields = HashMap::new();
    fields.insert("+".to_string(), FieldSpec::NestedTokenizer);
    let schema = ArgsSchema { fields };
    let parsed = parse_args(&schema, &["+", "unicode61", "categories", "L*"]).unwrap();
    assert_eq!(parsed.nested, Some(("unicode61".to_string(), vec!["categories".to_string(), "L*".to_string()])));
}

#[test]
fn plus_declared_but_missing_is_config_error() {
    let mut fields = HashMap::new();
    fields.insert("+".to_string(), FieldSpec::NestedTokenizer);
    let schema = ArgsSchema { fields };
    let err = parse_args(&schema, &[]).unwrap_err();
    assert!(err.reason.contains("nested tokenizer"));
}
