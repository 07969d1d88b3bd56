//! Unicode property table (C1): generated codepoint-property data and the
//! general/grapheme/word/sentence category lookups built on top of it.

mod casefold;
mod category;
mod grapheme_props;
mod sentence_props;
mod table;
mod version;
mod word_props;

pub use casefold::casefold;
pub use category::{category_of, UnicodeCategory};
pub use grapheme_props::{CharProperties, GCBProperty, InCBProperty};
pub use sentence_props::SBProperty;
pub use table::{lookup_range_table, Range};
pub use version::{assert_table_version_matches_engine, UNICODE_VERSION};
pub use word_props::WBProperty;
