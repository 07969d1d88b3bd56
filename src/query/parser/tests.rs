use super::super::ast::{ColumnFilterKind, Query};
use super::parse;

fn phrase_text(query: &Query) -> Vec<&str> {
    match query {
        Query::Phrases(p) => p.phrases.iter().map(|ph| ph.text.as_str()).collect(),
        _ => panic!("not a Phrases node: {:?}", query),
    }
}

#[test]
fn bareword_sequence_is_one_phrases_node() {
    let query = parse("hello world").unwrap();
    assert_eq!(phrase_text(&query), vec!["hello", "world"]);
}

#[test]
fn and_or_not_precedence() {
    // NOT (infix `match NOT no_match`) binds tightest, then AND, then OR:
    // "a OR b AND x NOT c" == a OR (b AND (x NOT c))
    let query = parse("a OR b AND x NOT c").unwrap();
    match query {
        Query::Or(children) => {
            assert_eq!(children.len(), 2);
            assert_eq!(phrase_text(&children[0]), vec!["a"]);
            match &children[1] {
                Query::And(inner) => {
                    assert_eq!(inner.len(), 2);
                    assert_eq!(phrase_text(&inner[0]), vec!["b"]);
                    match &inner[1] {
                        Query::Not { .. } => {}
                        other => panic!("expected Not, got {:?}", other),
                    }
                }
                other => panic!("expected And, got {:?}", other),
            }
        }
        other => panic!("expected Or, got {:?}", other),
    }
}

#[test]
fn parenthesized_group_overrides_precedence() {
    let query = parse("(a OR b) AND c").unwrap();
    match query {
        Query::And(children) => {
            assert_eq!(children.len(), 2);
            match &children[0] {
                Query::Or(_) => {}
                other => panic!("expected Or inside parens, got {:?}", other),
            }
        }
        other => panic!("expected And, got {:?}", other),
    }
}

#[test]
fn near_with_explicit_distance() {
    let query = parse("NEAR(a b, 5)").unwrap();
    match query {
        Query::Near { phrases, distance } => {
            assert_eq!(phrases.phrases.len(), 2);
            assert_eq!(distance, 5);
        }
        other => panic!("expected Near, got {:?}", other),
    }
}

#[test]
fn near_without_distance_uses_default() {
    let query = parse("NEAR(c d)").unwrap();
    match query {
        Query::Near { distance, .. } => assert_eq!(distance, 10),
        other => panic!("expected Near, got {:?}", other),
    }
}

#[test]
fn column_filter_single_and_braced() {
    let query = parse("title:^\"big world\"").unwrap();
    match query {
        Query::ColumnFilter { columns, filter, query } => {
            assert_eq!(columns, vec!["title".to_string()]);
            assert_eq!(filter, ColumnFilterKind::Include);
            match *query {
                Query::Phrases(p) => {
                    assert_eq!(p.phrases.len(), 1);
                    assert!(p.phrases[0].initial);
                    assert_eq!(p.phrases[0].text, "big world");
                }
                other => panic!("expected Phrases, got {:?}", other),
            }
        }
        other => panic!("expected ColumnFilter, got {:?}", other),
    }

    let query = parse("-{a b}:term").unwrap();
    match query {
        Query::ColumnFilter { columns, filter, .. } => {
            assert_eq!(columns, vec!["a".to_string(), "b".to_string()]);
            assert_eq!(filter, ColumnFilterKind::Exclude);
        }
        other => panic!("expected ColumnFilter, got {:?}", other),
    }
}

#[test]
fn full_example_round_trip_shape() {
    let query = parse(r#"love AND (title:^"big world" NOT summary:"sunset cruise")"#).unwrap();
    match query {
        Query::And(children) => {
            assert_eq!(children.len(), 2);
            assert_eq!(phrase_text(&children[0]), vec!["love"]);
            match &children[1] {
                Query::Not { r#match, no_match } => {
                    assert!(matches!(**r#match, Query::ColumnFilter { .. }));
                    assert!(matches!(**no_match, Query::ColumnFilter { .. }));
                }
                other => panic!("expected Not, got {:?}", other),
            }
        }
        other => panic!("expected And, got {:?}", other),
    }
}

#[test]
fn unclosed_paren_is_parse_error() {
    let err = parse("(a AND b").unwrap_err();
    assert_eq!(err.message, "unclosed (");
}

#[test]
fn near_requires_at_least_two_phrases() {
    let err = parse("NEAR(a)").unwrap_err();
    assert!(err.message.contains("two phrases"));
}

#[test]
fn trailing_garbage_after_valid_query_errors() {
    let err = parse("a )").unwrap_err();
    assert_eq!(err.message, "unexpected trailing input");
}
