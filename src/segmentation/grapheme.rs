//! Grapheme-cluster break engine (C2), ported from the state machine in
//! `examples/apparentlymart-rust-grapheme-machine/src/state.rs`, generalized
//! from a streaming per-character API to the batch `next_break(text, offset)`
//! entry point `spec` §4.2 calls for.

use crate::error::DomainError;
use crate::unicode::{assert_table_version_matches_engine, CharProperties, GCBProperty, InCBProperty};

/// Internal state summarizing enough history (RI parity, InCB run, emoji
/// ZWJ run) to evaluate GB9c/GB11/GB12-13 using only this one value, exactly
/// as in the teacher's `state::State`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Base,
    AwaitEmojiFlag,
    GB11BeforeZWJ,
    GB11AfterZWJ,
    GB9cConsonant,
    GB9cLinker,
}

impl State {
    fn transition(self, prev: CharProperties, next: CharProperties) -> (bool, State) {
        use GCBProperty::*;

        let next_state = self.next_state(next);

        macro_rules! pair_matches {
            ($prev:pat, $next:pat) => {
                matches!(prev.gcb_property(), $prev) && matches!(next.gcb_property(), $next)
            };
        }
        macro_rules! one_matches {
            ($which:expr, $pat:pat) => {
                matches!($which.gcb_property(), $pat)
            };
        }

        // GB3
        if pair_matches!(CR, LF) {
            return (false, next_state);
        }
        // GB4/GB5
        if prev.is_any_control() || next.is_any_control() {
            return (true, next_state);
        }
        // GB6
        if pair_matches!(L, L | V | LV | LVT) {
            return (false, next_state);
        }
        // GB7
        if pair_matches!(LV | V, V | T) {
            return (false, next_state);
        }
        // GB8
        if pair_matches!(LVT | T, T) {
            return (false, next_state);
        }
        // GB9
        if one_matches!(next, Extend | ZWJ) || matches!(next.incb_property(), InCBProperty::Extend | InCBProperty::Linker) {
            return (false, next_state);
        }
        // GB9a
        if one_matches!(next, SpacingMark) {
            return (false, next_state);
        }
        // GB9b
        if one_matches!(prev, Prepend) {
            return (false, next_state);
        }
        // GB9c
        if self.gb9c_active()
            && matches!(prev.incb_property(), InCBProperty::Linker | InCBProperty::Extend)
            && matches!(next.incb_property(), InCBProperty::Consonant)
        {
            return (false, next_state);
        }
        // GB11
        if self.gb11_active() && pair_matches!(ZWJ, ExtendedPictographic) {
            return (false, next_state);
        }
        // GB12/GB13
        if self.gb13_active() && pair_matches!(RegionalIndicator, RegionalIndicator) {
            return (false, next_state);
        }

        // GB999
        (true, next_state)
    }

    fn next_state(self, next: CharProperties) -> Self {
        use GCBProperty::*;
        use State::*;

        if matches!(next.gcb_property(), ExtendedPictographic) {
            return GB11BeforeZWJ;
        }
        if matches!(next.incb_property(), InCBProperty::Consonant) {
            return GB9cConsonant;
        }
        let gc_prop = next.gcb_property();
        let incb_prop = next.incb_property();
        match self {
            Base => match gc_prop {
                RegionalIndicator => AwaitEmojiFlag,
                _ => Base,
            },
            AwaitEmojiFlag => Base,
            GB11BeforeZWJ => match gc_prop {
                ZWJ => GB11AfterZWJ,
                Extend => GB11BeforeZWJ,
                _ => Base,
            },
            GB11AfterZWJ => Base,
            GB9cConsonant => match incb_prop {
                InCBProperty::Linker => GB9cLinker,
                InCBProperty::Extend => GB9cConsonant,
                _ => Base,
            },
            GB9cLinker => match incb_prop {
                InCBProperty::Linker | InCBProperty::Extend => GB9cLinker,
                _ => Base,
            },
        }
    }

    fn gb9c_active(self) -> bool {
        matches!(self, Self::GB9cLinker)
    }
    fn gb11_active(self) -> bool {
        matches!(self, Self::GB11AfterZWJ)
    }
    fn gb13_active(self) -> bool {
        matches!(self, Self::AwaitEmojiFlag)
    }
}

/// Returns the exclusive end of the grapheme cluster starting at `offset`,
/// a byte offset into `text` that must land on a `char` boundary.
///
/// Operates over codepoints with a one-codepoint lookahead and the history
/// in [`State`], evaluating GB1-GB999 in precedence order exactly as
/// `State::transition` does. Pure function of `(text, offset)`: no hidden
/// state crosses calls (`spec` §4.2, §5).
///
/// # Errors
/// Returns [`DomainError`] if `offset` is not in `[0, text.len()]` or does
/// not land on a `char` boundary.
pub fn next_break(text: &str, offset: usize) -> Result<usize, DomainError> {
    assert_table_version_matches_engine();
    if offset > text.len() || !text.is_char_boundary(offset) {
        return Err(DomainError { argument: "offset" });
    }
    if offset == text.len() {
        return Ok(offset);
    }

    let mut chars = text[offset..].char_indices();
    let (_, first) = chars.next().expect("offset < text.len() guarantees a first char");
    let mut prev_props = CharProperties::for_char(first);
    let mut state = State::Base.next_state(prev_props);
    let mut last_rel_end = offset + first.len_utf8();

    for (rel, c) in chars {
        let props = CharProperties::for_char(c);
        let (boundary, next_state) = state.transition(prev_props, props);
        if boundary {
            return Ok(offset + rel);
        }
        state = next_state;
        prev_props = props;
        last_rel_end = offset + rel + c.len_utf8();
    }

    Ok(last_rel_end)
}
