//! Sentence-break property values (C1), the **Sentence_Break** property from
//! [UAX#29 §5](https://www.unicode.org/reports/tr29/#Sentence_Boundary_Rules).

use super::table::{lookup_range_table, Range};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SBProperty {
    Other = 0,
    CR,
    LF,
    Extend,
    Sep,
    Format,
    Sp,
    Lower,
    Upper,
    OLetter,
    Numeric,
    ATerm,
    SContinue,
    STerm,
    Close,
}

impl SBProperty {
    pub fn for_char(c: char) -> Self {
        let cp = c as u32;
        match lookup_range_table(SENTENCE_RANGES, cp) {
            Some(v) => unsafe { core::mem::transmute(v as u8) },
            None => match c {
                '.' => SBProperty::ATerm,
                '!' | '?' => SBProperty::STerm,
                ',' | ';' | ':' => SBProperty::SContinue,
                ')' | ']' | '"' | '\'' => SBProperty::Close,
                ' ' | '\t' => SBProperty::Sp,
                '0'..='9' => SBProperty::Numeric,
                'a'..='z' => SBProperty::Lower,
                'A'..='Z' => SBProperty::Upper,
                c if c.is_alphabetic() => SBProperty::OLetter,
                _ => SBProperty::Other,
            },
        }
    }
}

static SENTENCE_RANGES: &[Range] = &[
    Range { low: 0x0a, high: 0x0a, value: SBProperty::LF as u32 },
    Range { low: 0x0d, high: 0x0d, value: SBProperty::CR as u32 },
    Range { low: 0x0b, high: 0x0c, value: SBProperty::Sep as u32 },
    Range { low: 0x85, high: 0x85, value: SBProperty::Sep as u32 },
    Range { low: 0x2028, high: 0x2029, value: SBProperty::Sep as u32 },
    Range { low: 0x0300, high: 0x036f, value: SBProperty::Extend as u32 },
    Range { low: 0x200d, high: 0x200d, value: SBProperty::Extend as u32 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminators() {
        assert_eq!(SBProperty::for_char('.'), SBProperty::ATerm);
        assert_eq!(SBProperty::for_char('!'), SBProperty::STerm);
    }

    #[test]
    fn case_split() {
        assert_eq!(SBProperty::for_char('A'), SBProperty::Upper);
        assert_eq!(SBProperty::for_char('a'), SBProperty::Lower);
    }
}
