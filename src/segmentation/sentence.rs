//! Sentence-break engine (C3): a state machine over `SBProperty`,
//! implementing a representative subset of SB1-SB999 — terminator
//! detection (ATerm/STerm), trailing Close/Sp absorption, and the
//! numeric-abbreviation exception ("3.14" does not end a sentence).

use crate::error::DomainError;
use crate::unicode::{assert_table_version_matches_engine, SBProperty};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Base,
    AfterTerm,
    AfterTermClose,
    AfterTermSpace,
}

fn is_extend_ish(p: SBProperty) -> bool {
    matches!(p, SBProperty::Extend | SBProperty::Format)
}

fn transition(state: State, prev: SBProperty, next: SBProperty) -> (bool, State) {
    use SBProperty::*;

    // SB3: CR x LF.
    if matches!(prev, CR) && matches!(next, LF) {
        return (false, State::Base);
    }
    // SB4: break after Sep/CR/LF.
    if matches!(prev, Sep | CR | LF) {
        return (true, State::Base);
    }
    // SB5: never break before Extend/Format; they don't change state.
    if is_extend_ish(next) {
        return (false, state);
    }
    // SB6: ATerm x Numeric ("3.14" does not end a sentence).
    if matches!(prev, ATerm) && matches!(next, Numeric) {
        return (false, State::Base);
    }

    match state {
        State::AfterTerm | State::AfterTermClose | State::AfterTermSpace => {
            // SB9: (STerm|ATerm) Close* x (Close|Sp|Sep|CR|LF).
            if state != State::AfterTermSpace && matches!(next, Close) {
                return (false, State::AfterTermClose);
            }
            // SB10: ... Close* Sp* x Sp.
            if matches!(next, Sp) {
                return (false, State::AfterTermSpace);
            }
            // SB8a: (STerm|ATerm) Close* Sp* x (SContinue|STerm|ATerm).
            if matches!(next, SContinue | STerm | ATerm) {
                return (false, State::AfterTerm);
            }
            // SB11: break after the terminator (+ Close*/Sp*) before anything else.
            (true, next_state(next))
        }
        State::Base => (false, next_state(next)),
    }
}

fn next_state(next: SBProperty) -> State {
    use SBProperty::*;
    match next {
        ATerm | STerm => State::AfterTerm,
        _ => State::Base,
    }
}

/// Returns the exclusive end of the sentence starting at `offset`
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
    let mut prev = SBProperty::for_char(first);
    let mut state = next_state(prev);
    let mut end = offset + first.len_utf8();

    for (rel, c) in chars {
        let props = SBProperty::for_char(c);
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

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(text: &str) -> Vec<&str> {
        let mut out = Vec::new();
        let mut pos = 0;
        while pos < text.len() {
            let end = next_break(text, pos).unwrap();
            out.push(&text[pos..end]);
            pos = end;
        }
        out
    }

    #[test]
    fn splits_two_sentences() {
        assert_eq!(sentences("Hello world. Goodbye now."), &["Hello world. ", "Goodbye now."]);
    }

    #[test]
    fn decimal_number_does_not_end_sentence() {
        assert_eq!(sentences("Pi is 3.14 today."), &["Pi is 3.14 today."]);
    }

    #[test]
    fn question_and_exclamation() {
        assert_eq!(sentences("Really? Yes!"), &["Really? ", "Yes!"]);
    }
}
