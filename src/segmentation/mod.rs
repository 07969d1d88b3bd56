//! Segmentation: the grapheme (C2), word & sentence (C3) break engines, and
//! the facade (C4) built on top of them.

pub mod grapheme;
pub mod sentence;
pub mod word;

mod facade;

pub use facade::{casefold, Segmenter, Unit, WordFilter};
