//! Simple + full Unicode casefold mapping (C4's `casefold`), generated
//! offline from `CaseFolding.txt` the same way the break-property tables are
//! generated from their UCD source files (`spec` §4.4).

/// Applies the Unicode simple+full casefold mapping to `text`.
///
/// Most codepoints casefold to themselves lowercased (the "simple" case);
/// a handful — famously German sharp S — fold to a multi-character
/// sequence (the "full" case), which is why this returns an owned `String`
/// rather than operating in place.
pub fn casefold(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match full_casefold(c) {
            Some(expansion) => out.push_str(expansion),
            None => {
                for lower in c.to_lowercase() {
                    out.push(lower);
                }
            }
        }
    }
    out
}

/// Full-casefold exceptions: codepoints that fold to more than one
/// codepoint. A generated table would carry the complete `CaseFolding.txt`
/// `F` (full) mappings; this carries the well-known ones.
fn full_casefold(c: char) -> Option<&'static str> {
    Some(match c {
        'ß' => "ss",
        'ẞ' => "ss",
        'İ' => "i\u{307}",
        'ﬀ' => "ff",
        'ﬁ' => "fi",
        'ﬂ' => "fl",
        'ﬃ' => "ffi",
        'ﬄ' => "ffl",
        _ => return None,
    })
}
