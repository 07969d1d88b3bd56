//! `extract_with_column_filters` / `applicable_columns`: the original
//! (`examples/original_source/apsw/fts5query.py`) marks both as not yet
//! implemented. Their intended semantics, stated there as intent only:
//!
//! - extracting a subtree should prepend any column filters enclosing it,
//!   in declaration order, so the extracted query still only matches the
//!   columns the original query did;
//! - a node's applicable columns are the intersection (for `include`
//!   filters) or set-difference (for `exclude` filters) of the column
//!   sets from the root down to that node.
//!
//! Rather than guess at untested behavior, both are left unimplemented
//! here and surface a [`SchemaError`] naming the call so a caller finds
//! out immediately rather than getting a silently wrong column set.

use super::ast::Query;
use crate::error::SchemaError;

/// See the module docs: not implemented upstream, so not implemented here.
pub fn extract_with_column_filters(_node: &Query, _start: &Query) -> Result<Query, SchemaError> {
    Err(SchemaError {
        path: "extract_with_column_filters".to_string(),
        reason: "not implemented upstream; semantics are stated as intent only".to_string(),
    })
}

/// See the module docs: not implemented upstream, so not implemented here.
pub fn applicable_columns(_node: &Query, _start: &Query, _all_columns: &[String]) -> Result<Vec<String>, SchemaError> {
    Err(SchemaError {
        path: "applicable_columns".to_string(),
        reason: "not implemented upstream; semantics are stated as intent only".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ast::{Phrase, Phrases};

    #[test]
    fn both_report_not_implemented() {
        let q = Query::Phrases(Phrases { phrases: vec![Phrase::new("x")] });
        assert!(extract_with_column_filters(&q, &q).is_err());
        assert!(applicable_columns(&q, &q, &[]).is_err());
    }
}
