use super::super::ast::{ColumnFilterKind, Phrase, Phrases, Query};
use super::{quote, to_query_string};

#[test]
fn quote_empty_string() {
    assert_eq!(quote(""), "\"\"");
}

#[test]
fn quote_plain_word_is_unquoted() {
    assert_eq!(quote("hello"), "hello");
}

#[test]
fn quote_spaced_phrase_is_quoted() {
    assert_eq!(quote("one two"), "\"one two\"");
}

#[test]
fn quote_embedded_quote_is_doubled() {
    assert_eq!(quote("one\"two"), "\"one\"\"two\"");
}

#[test]
fn quote_non_ascii_alone_does_not_force_quoting() {
    assert_eq!(quote("café"), "café");
}

#[test]
fn phrases_join_with_spaces() {
    let query = Query::Phrases(Phrases { phrases: vec![Phrase::new("hello"), Phrase::new("world")] });
    assert_eq!(to_query_string(&query), "hello world");
}

#[test]
fn near_omits_default_distance() {
    let query = Query::Near {
        phrases: Phrases { phrases: vec![Phrase::new("a"), Phrase::new("b")] },
        distance: 10,
    };
    assert_eq!(to_query_string(&query), "NEAR(a b)");

    let query = Query::Near {
        phrases: Phrases { phrases: vec![Phrase::new("a"), Phrase::new("b")] },
        distance: 5,
    };
    assert_eq!(to_query_string(&query), "NEAR(a b, 5)");
}

#[test]
fn column_filter_braces_only_with_multiple_columns() {
    let query = Query::ColumnFilter {
        columns: vec!["title".into()],
        filter: ColumnFilterKind::Include,
        query: Box::new(Query::Phrases(Phrases { phrases: vec![Phrase::new("x")] })),
    };
    assert_eq!(to_query_string(&query), "title: x");

    let query = Query::ColumnFilter {
        columns: vec!["a".into(), "b".into()],
        filter: ColumnFilterKind::Exclude,
        query: Box::new(Query::Phrases(Phrases { phrases: vec![Phrase::new("x")] })),
    };
    assert_eq!(to_query_string(&query), "-{a b}: x");
}

#[test]
fn column_filter_wraps_non_phrases_non_near_query_in_parens() {
    let inner = Query::Or(vec![
        Query::Phrases(Phrases { phrases: vec![Phrase::new("x")] }),
        Query::Phrases(Phrases { phrases: vec![Phrase::new("y")] }),
    ]);
    let query = Query::ColumnFilter { columns: vec!["title".into()], filter: ColumnFilterKind::Include, query: Box::new(inner) };
    assert_eq!(to_query_string(&query), "title: (x OR y)");
}

#[test]
fn or_inside_and_gets_parenthesized_but_not_vice_versa() {
    let or = Query::Or(vec![
        Query::Phrases(Phrases { phrases: vec![Phrase::new("a")] }),
        Query::Phrases(Phrases { phrases: vec![Phrase::new("b")] }),
    ]);
    let and_wrapping_or = Query::And(vec![or, Query::Phrases(Phrases { phrases: vec![Phrase::new("c")] })]);
    assert_eq!(to_query_string(&and_wrapping_or), "(a OR b) AND c");

    let and = Query::And(vec![
        Query::Phrases(Phrases { phrases: vec![Phrase::new("a")] }),
        Query::Phrases(Phrases { phrases: vec![Phrase::new("b")] }),
    ]);
    let or_wrapping_and = Query::Or(vec![and, Query::Phrases(Phrases { phrases: vec![Phrase::new("c")] })]);
    assert_eq!(to_query_string(&or_wrapping_and), "a AND b OR c");
}

#[test]
fn full_example_serializes_to_expected_string() {
    let mut big_world = Phrase::new("big world");
    big_world.initial = true;
    let title_filter = Query::ColumnFilter {
        columns: vec!["title".into()],
        filter: ColumnFilterKind::Include,
        query: Box::new(Query::Phrases(Phrases { phrases: vec![big_world] })),
    };
    let summary_filter = Query::ColumnFilter {
        columns: vec!["summary".into()],
        filter: ColumnFilterKind::Include,
        query: Box::new(Query::Phrases(Phrases { phrases: vec![Phrase::new("sunset cruise")] })),
    };
    let not_query = Query::Not { r#match: Box::new(title_filter), no_match: Box::new(summary_filter) };
    let query = Query::And(vec![Query::Phrases(Phrases { phrases: vec![Phrase::new("love")] }), not_query]);

    assert_eq!(
        to_query_string(&query),
        r#"love AND title: ^ "big world" NOT summary: "sunset cruise""#
    );
}
