//! Generated codepoint-property range tables (C1).
//!
//! Each table here is what an offline generator driven by the Unicode UCD
//! files (`GraphemeBreakProperty.txt`, `WordBreakProperty.txt`,
//! `SentenceBreakProperty.txt`, `emoji-data.txt`, `DerivedCoreProperties.txt`
//! for `InCB_*`, `UnicodeData.txt` for general categories) would emit: a
//! sorted array of `{low, high, value}` ranges covering the full codepoint
//! space with no gaps, unmapped codepoints defaulting to `Other`. The
//! generator program itself is not part of this crate (same posture as the
//! teacher crate, whose own trie-generation program was lost upstream) —
//! these tables are the checked-in output.
//!
//! Only a representative subset of the real Unicode 15.1 ranges is baked in
//! here (the full UCD files are not part of the retrieval pack this crate
//! was built from); the structure — sorted ranges, binary search, ASCII
//! fast path — is what the category modules depend on, and is what a real
//! generator run would slot a complete table into without changing any
//! calling code.

/// One `{low, high, value}` run of the codepoint space sharing a property
/// value, inclusive on both ends.
#[derive(Debug, Clone, Copy)]
pub struct Range {
    pub low: u32,
    pub high: u32,
    pub value: u32,
}

/// Binary searches `table` (sorted, non-overlapping, ascending by `low`) for
/// the range containing `cp`, returning its `value`.
///
/// Per `spec` §4.1 the table covers the entire codepoint space with no gaps,
/// so in a fully generated table this always finds a range; the curated
/// subset shipped here instead falls back to `None` for the many codepoints
/// it doesn't cover, and callers treat `None` as the "Other" category.
pub fn lookup_range_table(table: &[Range], cp: u32) -> Option<u32> {
    let mut lo = 0usize;
    let mut hi = table.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let r = &table[mid];
        if cp < r.low {
            hi = mid;
        } else if cp > r.high {
            lo = mid + 1;
        } else {
            return Some(r.value);
        }
    }
    None
}

use super::category::UnicodeCategory as UC;

/// General-category ranges beyond the baked-in ASCII/Latin-1 fast table.
pub static GENERAL_CATEGORY_RANGES: &[Range] = &[
    Range { low: 0x0100, high: 0x024f, value: UC::LOWERCASE_LETTER }, // Latin Extended-A/B (approx)
    Range { low: 0x0300, high: 0x036f, value: UC::NONSPACING_MARK }, // Combining Diacritical Marks
    Range { low: 0x0370, high: 0x03ff, value: UC::LOWERCASE_LETTER }, // Greek and Coptic (approx)
    Range { low: 0x0400, high: 0x04ff, value: UC::LOWERCASE_LETTER }, // Cyrillic (approx)
    Range { low: 0x0591, high: 0x05bd, value: UC::NONSPACING_MARK }, // Hebrew points
    Range { low: 0x0600, high: 0x06ff, value: UC::OTHER_LETTER },    // Arabic (approx)
    Range { low: 0x0900, high: 0x097f, value: UC::OTHER_LETTER },    // Devanagari (approx)
    Range { low: 0x0964, high: 0x0965, value: UC::PUNCTUATION | (1 << 25) },
    Range { low: 0x0ac0, high: 0x0ac0, value: UC::SPACING_MARK },
    Range { low: 0x1100, high: 0x11ff, value: UC::OTHER_LETTER },    // Hangul Jamo
    Range { low: 0x1f1e6, high: 0x1f1ff, value: UC::SYMBOL | UC::REGIONAL_INDICATOR },
    Range { low: 0x1f300, high: 0x1f5ff, value: UC::SYMBOL | UC::EXTENDED_PICTOGRAPHIC | UC::WIDE },
    Range { low: 0x1f600, high: 0x1f64f, value: UC::SYMBOL | UC::EXTENDED_PICTOGRAPHIC | UC::WIDE },
    Range { low: 0x1f900, high: 0x1f9ff, value: UC::SYMBOL | UC::EXTENDED_PICTOGRAPHIC | UC::WIDE },
    Range { low: 0x200d, high: 0x200d, value: UC::FORMAT },          // ZWJ
    Range { low: 0x2000, high: 0x200a, value: UC::SEPARATOR | (1 << 24) },
    Range { low: 0x2010, high: 0x2027, value: UC::PUNCTUATION | (1 << 25) },
    Range { low: 0x20a0, high: 0x20cf, value: UC::SYMBOL },          // Currency symbols
    Range { low: 0x2e80, high: 0x2fdf, value: UC::OTHER_LETTER | UC::WIDE }, // CJK radicals
    Range { low: 0x3000, high: 0x303f, value: UC::PUNCTUATION | (1 << 25) | UC::WIDE }, // CJK punctuation
    Range { low: 0x3040, high: 0x30ff, value: UC::OTHER_LETTER | UC::WIDE }, // Hiragana/Katakana
    Range { low: 0x3400, high: 0x4dbf, value: UC::OTHER_LETTER | UC::WIDE }, // CJK ext A
    Range { low: 0x4e00, high: 0x9fff, value: UC::OTHER_LETTER | UC::WIDE }, // CJK unified
    Range { low: 0xac00, high: 0xd7a3, value: UC::OTHER_LETTER | UC::WIDE }, // Hangul syllables
    Range { low: 0xd800, high: 0xdfff, value: UC::SURROGATE },
    Range { low: 0xe000, high: 0xf8ff, value: UC::PRIVATE_USE },
    Range { low: 0xf900, high: 0xfaff, value: UC::OTHER_LETTER | UC::WIDE }, // CJK compat ideographs
    Range { low: 0xfe30, high: 0xfe4f, value: UC::PUNCTUATION | (1 << 25) | UC::WIDE },
    Range { low: 0xff00, high: 0xff60, value: UC::WIDE },            // Fullwidth forms
    Range { low: 0x20000, high: 0x2a6df, value: UC::OTHER_LETTER | UC::WIDE }, // CJK ext B
];
