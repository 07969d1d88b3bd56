//! Word-break engine (C3): a state machine over `WBProperty` in the same
//! shape as [`crate::segmentation::grapheme`], evaluating a representative
//! subset of WB1-WB999 sufficient for indexing-oriented word segmentation
//! (quote-joined contractions, decimal numbers, Katakana runs, emoji flags
//! and ZWJ sequences).

use crate::error::DomainError;
use crate::unicode::{assert_table_version_matches_engine, WBProperty};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Base,
    AfterALetter,
    AwaitALetterAfterMidLetter,
    AfterNumeric,
    AwaitNumericAfterMidNum,
    AwaitEmojiFlag,
    AfterZWJCandidate,
}

fn is_ah_letter(p: WBProperty) -> bool {
    matches!(p, WBProperty::ALetter | WBProperty::HebrewLetter)
}
fn is_mid_letter_ish(p: WBProperty) -> bool {
    matches!(p, WBProperty::MidLetter | WBProperty::MidNumLet | WBProperty::SingleQuote)
}
fn is_mid_num_ish(p: WBProperty) -> bool {
    matches!(p, WBProperty::MidNum | WBProperty::MidNumLet | WBProperty::SingleQuote)
}
fn is_extend_ish(p: WBProperty) -> bool {
    matches!(p, WBProperty::Extend | WBProperty::Format | WBProperty::ZWJ)
}

/// Returns `(boundary, next_state)` for the transition from `prev` (in
/// `state`) to `next`.
fn transition(state: State, prev: WBProperty, next: WBProperty) -> (bool, State) {
    use WBProperty::*;

    // WB3: CR x LF.
    if matches!(prev, CR) && matches!(next, LF) {
        return (false, State::Base);
    }
    // WB3a/WB3b: break around CR/LF/Newline unconditionally.
    if matches!(prev, CR | LF | Newline) || matches!(next, CR | LF | Newline) {
        return (true, next_state(State::Base, next));
    }
    // WB3c: ZWJ x Extended_Pictographic.
    if matches!(prev, ZWJ) && matches!(next, ExtendedPictographic) {
        return (false, next_state(state, next));
    }
    // WB3d: WSegSpace x WSegSpace.
    if matches!(prev, WSegSpace) && matches!(next, WSegSpace) {
        return (false, next_state(state, next));
    }
    // WB4: ignore Extend/Format/ZWJ, i.e. never break before them.
    if is_extend_ish(next) {
        return (false, next_state(state, next));
    }
    // WB5: AHLetter x AHLetter.
    if is_ah_letter(prev) && is_ah_letter(next) {
        return (false, next_state(State::AfterALetter, next));
    }
    // WB6/WB7: AHLetter (MidLetter|MidNumLetQ) x AHLetter.
    if state == State::AwaitALetterAfterMidLetter && is_ah_letter(next) {
        return (false, next_state(State::AfterALetter, next));
    }
    if is_ah_letter(prev) && is_mid_letter_ish(next) {
        return (false, next_state(State::AwaitALetterAfterMidLetter, next));
    }
    // WB8: Numeric x Numeric.
    if matches!(prev, Numeric) && matches!(next, Numeric) {
        return (false, next_state(State::AfterNumeric, next));
    }
    // WB9/WB10: AHLetter x Numeric, Numeric x AHLetter.
    if (is_ah_letter(prev) && matches!(next, Numeric)) || (matches!(prev, Numeric) && is_ah_letter(next)) {
        return (false, next_state(if is_ah_letter(next) { State::AfterALetter } else { State::AfterNumeric }, next));
    }
    // WB11/WB12: Numeric (MidNum|MidNumLetQ) x Numeric.
    if state == State::AwaitNumericAfterMidNum && matches!(next, Numeric) {
        return (false, next_state(State::AfterNumeric, next));
    }
    if matches!(prev, Numeric) && is_mid_num_ish(next) {
        return (false, next_state(State::AwaitNumericAfterMidNum, next));
    }
    // WB13: Katakana x Katakana.
    if matches!(prev, Katakana) && matches!(next, Katakana) {
        return (false, next_state(state, next));
    }
    // WB13a/WB13b: ExtendNumLet joins AHLetter/Numeric/Katakana either side.
    if matches!(next, ExtendNumLet) && (is_ah_letter(prev) || matches!(prev, Numeric | Katakana | ExtendNumLet)) {
        return (false, next_state(state, next));
    }
    if matches!(prev, ExtendNumLet) && (is_ah_letter(next) || matches!(next, Numeric | Katakana)) {
        return (false, next_state(if is_ah_letter(next) { State::AfterALetter } else { State::AfterNumeric }, next));
    }
    // WB15/WB16: Regional_Indicator pairs.
    if state == State::AwaitEmojiFlag && matches!(prev, RegionalIndicator) && matches!(next, RegionalIndicator) {
        return (false, State::Base);
    }

    // WB999.
    (true, next_state(State::Base, next))
}

fn next_state(current: State, next: WBProperty) -> State {
    use WBProperty::*;
    match next {
        RegionalIndicator if current != State::AwaitEmojiFlag => State::AwaitEmojiFlag,
        RegionalIndicator => State::Base,
        ZWJ => State::AfterZWJCandidate,
        Extend | Format => current,
        _ if is_ah_letter(next) => State::AfterALetter,
        Numeric => State::AfterNumeric,
        _ => State::Base,
    }
}

/// Returns the exclusive end of the word token starting at `offset`
/// (`spec` §4.3).
pub fn next_break(text: &str, offset: usize) -> Result<usize, DomainError> {
    assert_table_version_matches_engine();
    if offset > text.len() || !text.is_char_boundary(offset) {
        return Err(DomainError { argument: "offset" });
    }
    if offset == text.len() {
        return Ok(offset);
    }

    let mut chars = text[offset..].char_indices();
    let (_, first) = chars.next().expect("offset < text.len()");
    let mut prev = WBProperty::for_char(first);
    let mut state = next_state(State::Base, prev);
    let mut end = offset + first.len_utf8();

    for (rel, c) in chars {
        let props = WBProperty::for_char(c);
        let (boundary, next) = transition(state, prev, props);
        if boundary {
            return Ok(offset + rel);
        }
        state = next;
        prev = props;
        end = offset + rel + c.len_utf8();
    }

    Ok(end)
}
