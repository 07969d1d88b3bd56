//! FTS5-compatible query parsing (C5-C8): lexer, AST, recursive-descent
//! parser, tagged-dictionary codec, and canonical-string serializer.

pub mod ast;
pub mod column_filters;
pub mod dict;
pub mod lexer;
pub mod parser;
pub mod serializer;
pub mod token;

pub use ast::{ColumnFilterKind, Phrase, Phrases, Query, DEFAULT_NEAR_DISTANCE};
pub use column_filters::{applicable_columns, extract_with_column_filters};
pub use dict::{from_dict, to_dict};
pub use parser::parse;
pub use serializer::{quote, to_query_string};
