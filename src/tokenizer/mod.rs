//! Tokenizer pipeline (C9) and its shared argument parser (C10).

pub mod args;
pub mod category_expr;
pub mod ngram;
pub mod simplify;
pub mod stopwords;
pub mod synonyms;
pub mod transform;
pub mod types;
pub mod unicode_tokenizer;

pub use args::{parse_args, ArgValue, ArgsSchema, FieldSpec, ParsedArgs};
pub use category_expr::CategorySet;
pub use ngram::{parse_ngram_sizes, NGram, NGramConfig};
pub use simplify::{CaseMode, NormalizationForm, Simplify, SimplifyConfig};
pub use stopwords::Stopwords;
pub use synonyms::Synonyms;
pub use transform::{Transform, Transformed};
pub use types::{Reason, TokenRecord, Tokenizer};
pub use unicode_tokenizer::{UnicodeTokenizer, UnicodeTokenizerConfig};
