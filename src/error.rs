//! Crate-wide error kinds.
//!
//! Each kind is a tagged variant rather than an exception class, matching
//! the taxonomy used by each component: the query lexer and parser, the
//! dictionary codec, segmentation preconditions, and the tokenizer pipeline
//! each raise their own narrow error type instead of everyone sharing one
//! grab-bag enum.

use thiserror::Error;

/// Raised by the query lexer ([`crate::query::lexer`]) on an unrecognized
/// input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unexpected character {character:?} at position {position}")]
pub struct LexError {
    pub position: usize,
    pub character: char,
}

/// Raised by the query parser ([`crate::query::parser`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at position {position}")]
pub struct ParseError {
    pub position: usize,
    pub message: String,
}

/// Raised by the AST/dictionary codec ([`crate::query::dict`]) when a
/// dictionary violates one of the AST invariants from the data model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason} (at {path})")]
pub struct SchemaError {
    pub path: String,
    pub reason: String,
}

/// Raised by segmentation helpers ([`crate::segmentation`]) on a
/// precondition failure, such as an offset outside `[0, len]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid argument: {argument}")]
pub struct DomainError {
    pub argument: &'static str,
}

/// Raised by the tokenizer pipeline and its argument parser
/// ([`crate::tokenizer`]) on a malformed configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct ConfigError {
    pub field: String,
    pub reason: String,
}

/// Raised when a user-supplied tokenizer callback emits a malformed tuple
/// (bad offsets, non-UTF-8 boundaries, wrong field count).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("tokenizer emitted malformed token #{index}: {reason}")]
pub struct TokenizerContract {
    pub index: usize,
    pub reason: String,
}
