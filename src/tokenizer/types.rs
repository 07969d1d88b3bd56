//! Tokenizer pipeline data model (C9): the `(start, end, primary,
//! colocated*)` record the spec calls a stream entry, and the `reason`
//! flag threaded unchanged through every wrapper.

/// Why a tokenizer invocation is happening, propagated unchanged through a
/// wrapper chain to its innermost tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    Document,
    Query,
    QueryPrefix,
    Aux,
}

/// One token emitted by a tokenizer. `start`/`end` are UTF-8 byte offsets
/// into the input that produced it; `colocated` entries share the same
/// `(start, end)` span as `primary` (synonyms, n-gram variants, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRecord {
    pub start: usize,
    pub end: usize,
    pub primary: String,
    pub colocated: Vec<String>,
}

impl TokenRecord {
    pub fn new(start: usize, end: usize, primary: impl Into<String>) -> Self {
        Self { start, end, primary: primary.into(), colocated: Vec::new() }
    }
}

/// A tokenizer: a factory's runtime behavior, producing a token stream for
/// one input. Implementations are expected to be cheap to construct so a
/// wrapper can own its inner tokenizer by value or by `Rc`.
pub trait Tokenizer {
    /// Tokenizes `text`, propagating `reason` to any inner tokenizer.
    ///
    /// The returned vector stands in for the spec's lazy stream: nothing
    /// in this crate's invariants (ordering, span containment) depends on
    /// true laziness, only on tokens appearing in non-decreasing `start`
    /// order, which every tokenizer here already produces by construction.
    fn tokenize(&self, text: &str, reason: Reason) -> Result<Vec<TokenRecord>, crate::error::TokenizerContract>;
}
