//! Segmentation facade (C4): length, substring, span iteration, width, and
//! casefold on top of the break engines, matching `grapheme_length`,
//! `grapheme_substr`, `grapheme_iter_with_offsets`, and `grapheme_width` in
//! `examples/original_source/apsw/unicode.py`.

use crate::error::DomainError;
use crate::unicode::{casefold as unicode_casefold, category_of};

use super::{grapheme, sentence, word};

/// Which break engine a [`Segmenter`] drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Grapheme,
    Word,
    Sentence,
}

/// Bitmask selecting which word spans `Segmenter::iter_spans` should
/// surface when `unit` is [`Unit::Word`] (`spec` §4.3's word filter masks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WordFilter(u8);

impl WordFilter {
    pub const LETTER: WordFilter = WordFilter(1 << 0);
    pub const NUMBER: WordFilter = WordFilter(1 << 1);
    pub const EXTENDED_PICTOGRAPHIC: WordFilter = WordFilter(1 << 2);
    pub const REGIONAL_INDICATOR: WordFilter = WordFilter(1 << 3);

    pub const fn none() -> Self {
        WordFilter(0)
    }
    pub const fn all() -> Self {
        WordFilter(0b1111)
    }
    pub const fn contains(self, other: WordFilter) -> bool {
        self.0 & other.0 == other.0
    }
    pub const fn union(self, other: WordFilter) -> Self {
        WordFilter(self.0 | other.0)
    }

    fn span_matches(self, span: &str) -> bool {
        if self.0 == 0 {
            return true;
        }
        span.chars().any(|c| {
            let cat = category_of(c);
            (self.contains(Self::LETTER) && cat.is_letter())
                || (self.contains(Self::NUMBER) && cat.is_number())
                || (self.contains(Self::EXTENDED_PICTOGRAPHIC) && cat.is_extended_pictographic())
                || (self.contains(Self::REGIONAL_INDICATOR) && cat.is_regional_indicator())
        })
    }
}

fn engine_next_break(unit: Unit, text: &str, offset: usize) -> Result<usize, DomainError> {
    match unit {
        Unit::Grapheme => grapheme::next_break(text, offset),
        Unit::Word => word::next_break(text, offset),
        Unit::Sentence => sentence::next_break(text, offset),
    }
}

/// A cursor-free facade over one of the break engines for a borrowed text
/// buffer, exposing the operations `spec` §4.4 names.
#[derive(Debug, Clone, Copy)]
pub struct Segmenter<'t> {
    text: &'t str,
    unit: Unit,
    filter: WordFilter,
}

impl<'t> Segmenter<'t> {
    pub fn new(text: &'t str, unit: Unit) -> Self {
        Self { text, unit, filter: WordFilter::none() }
    }

    pub fn with_word_filter(text: &'t str, filter: WordFilter) -> Self {
        Self { text, unit: Unit::Word, filter }
    }

    /// Returns the end of the next span after `offset` (exclusive), or an
    /// error if `offset` is out of bounds.
    pub fn next_span(&self, offset: usize) -> Result<(usize, usize), DomainError> {
        if offset > self.text.len() || !self.text.is_char_boundary(offset) {
            return Err(DomainError { argument: "offset" });
        }
        let mut start = offset;
        loop {
            if start >= self.text.len() {
                return Ok((start, start));
            }
            let end = engine_next_break(self.unit, self.text, start)?;
            if self.filter.span_matches(&self.text[start..end]) || self.unit != Unit::Word {
                return Ok((start, end));
            }
            start = end;
        }
    }

    /// Iterates every span from the start of the text, filtered per
    /// `WordFilter` when segmenting words.
    pub fn iter_spans(&self) -> impl Iterator<Item = &'t str> + '_ {
        self.iter_with_offsets().map(|(_, _, s)| s)
    }

    /// Iterates `(start, end, text)` for every span.
    pub fn iter_with_offsets(&self) -> impl Iterator<Item = (usize, usize, &'t str)> + '_ {
        let mut pos = 0usize;
        std::iter::from_fn(move || {
            if pos >= self.text.len() {
                return None;
            }
            let (start, end) = self.next_span(pos).ok()?;
            pos = end;
            Some((start, end, &self.text[start..end]))
        })
    }

    /// Count of spans (clusters/words/sentences) in the text.
    pub fn length(&self) -> usize {
        self.iter_spans().count()
    }

    /// Returns the substring from span index `start` (inclusive) to `stop`
    /// (exclusive), in span units, with Python-style negative-index
    /// semantics resolved against a forward offset table built once.
    pub fn substring(&self, start: isize, stop: Option<isize>) -> Result<&'t str, DomainError> {
        let offsets: Vec<usize> = std::iter::once(0)
            .chain(self.iter_with_offsets().map(|(_, end, _)| end))
            .collect();
        let n = offsets.len() as isize - 1;

        let resolve = |idx: isize| -> usize {
            let clamped = if idx < 0 { (n + idx).max(0) } else { idx.min(n) };
            clamped.max(0).min(n) as usize
        };

        let start_idx = resolve(start);
        let stop_idx = match stop {
            Some(s) => resolve(s),
            None => n as usize,
        };
        if stop_idx <= start_idx {
            return Ok("");
        }
        let byte_start = offsets[start_idx];
        let byte_end = offsets[stop_idx];
        Ok(&self.text[byte_start..byte_end])
    }

    /// Display width: each span counts once, twice if it contains a Wide
    /// codepoint.
    pub fn width(&self) -> usize {
        self.iter_spans()
            .map(|span| if span.chars().any(|c| category_of(c).is_wide()) { 2 } else { 1 })
            .sum()
    }
}

/// Applies the Unicode simple+full casefold mapping, as `spec` §4.4.
pub fn casefold(text: &str) -> String {
    unicode_casefold(text)
}

#[cfg(test)]
mod tests;
