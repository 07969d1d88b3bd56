//! Query AST types (C6's data model), grounded in the `PHRASE`/`PHRASES`/
//! `NEAR`/`COLUMNFILTER`/`AND`/`OR`/`NOT` dataclasses in
//! `examples/original_source/apsw/fts5query.py`. Ownership is strictly
//! tree-shaped: no sharing, no cycles (`spec` §3).

/// One phrase term: `^` sets `initial`, `+` sets `sequence`, trailing `*`
/// sets `prefix`. `initial ∧ sequence` is forbidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    pub text: String,
    pub initial: bool,
    pub prefix: bool,
    pub sequence: bool,
}

impl Phrase {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), initial: false, prefix: false, sequence: false }
    }
}

/// A run of one or more [`Phrase`]s, implicitly AND-ed together. The first
/// phrase never has `sequence = true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrases {
    pub phrases: Vec<Phrase>,
}

/// `filter ∈ {include, exclude}` for [`Query::ColumnFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnFilterKind {
    Include,
    Exclude,
}

/// A query AST node. `spec` §3's `QUERY` sum type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Phrases(Phrases),
    Near { phrases: Phrases, distance: u32 },
    ColumnFilter { columns: Vec<String>, filter: ColumnFilterKind, query: Box<Query> },
    And(Vec<Query>),
    Or(Vec<Query>),
    Not { r#match: Box<Query>, no_match: Box<Query> },
}

/// Default NEAR distance when none is given (`spec` §3).
pub const DEFAULT_NEAR_DISTANCE: u32 = 10;
