//! Country autocomplete derived from a single-character directory lookup.

use crate::university::UniversityRecord;

/// Directory query issued for a partial input: its first character only.
///
/// Returns `None` when the input is blank, in which case no lookup happens.
pub fn suggestion_prefix(partial: &str) -> Option<String> {
    if partial.trim().is_empty() {
        return None;
    }
    partial.chars().next().map(|c| c.to_string())
}

/// Country of every record, in result order. Duplicates are kept.
pub fn project_countries(records: &[UniversityRecord]) -> Vec<String> {
    records.iter().map(|r| r.country.clone()).collect()
}
