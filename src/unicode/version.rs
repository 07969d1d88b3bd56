//! Unicode version pairing between the generated tables and the TR29
//! engines that consume them (`spec` §4.1, §6).

/// The Unicode UCD version the generated tables in this crate were built
/// from.
pub const UNICODE_VERSION: &str = "15.1.0";

/// The Unicode version the break engines (`crate::segmentation`) were
/// written against. In this crate both constants are maintained by hand in
/// lockstep, but a real deployment that regenerates tables independently of
/// engine code needs this check to catch drift.
const ENGINE_UNICODE_VERSION: &str = "15.1.0";

/// Verifies the embedded category table agrees with the TR29 engine on
/// Unicode version, per `spec` §4.1 ("the runtime must ... verify at
/// startup that the embedded category engine agrees with the table
/// version"). Every break-engine constructor calls this once.
///
/// # Panics
/// Panics if the versions disagree: this is the "fatal" runtime assertion
/// described in `spec` §6, not a recoverable error.
pub fn assert_table_version_matches_engine() {
    assert_eq!(
        UNICODE_VERSION, ENGINE_UNICODE_VERSION,
        "Unicode table version {UNICODE_VERSION} does not match TR29 engine version {ENGINE_UNICODE_VERSION}"
    );
}

#[cfg(test)]
mod tests {
    #[test]
    fn versions_match() {
        super::assert_table_version_matches_engine();
    }
}
