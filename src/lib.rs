//! Unicode text segmentation ([UAX #29](https://www.unicode.org/reports/tr29/))
//! and an FTS5-compatible query grammar, bundled as the shared core behind
//! a full-text indexing engine.
//!
//! The crate has four parts:
//!
//! - [`unicode`] — codepoint property tables (general category, grapheme/
//!   word/sentence break properties, casefolding) generated against
//!   Unicode UCD [`unicode::UNICODE_VERSION`].
//! - [`segmentation`] — the grapheme, word, and sentence break engines
//!   built on those tables, plus the [`segmentation::Segmenter`] facade
//!   used to walk a string span by span.
//! - [`query`] — the FTS5 query grammar: a lexer, an AST, a recursive-
//!   descent parser, a tagged-dictionary codec, and a canonical-string
//!   serializer.
//! - [`tokenizer`] — configurable tokenizer pipelines (Unicode, Simplify,
//!   N-gram, Stopwords, Synonyms, Transform) and the shared argument
//!   parser used to configure them.
//!
//! Every fallible operation here returns one of the tagged error types in
//! [`error`] rather than panicking; the only panics in this crate are the
//! startup assertion in [`unicode::assert_table_version_matches_engine`]
//! that pairs the compiled-in tables with the engine that interprets them.

pub mod error;
pub mod query;
pub mod segmentation;
pub mod tokenizer;
pub mod unicode;
