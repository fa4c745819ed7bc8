//! State/province filter derived from the current result set.

use std::collections::BTreeSet;

use crate::university::UniversityRecord;

/// Every non-empty `state_province` present in `records`, each value once.
pub fn distinct_filter_values(records: &[UniversityRecord]) -> BTreeSet<String> {
    records
        .iter()
        .filter_map(|r| r.state_province.as_deref())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Records matching `selected_filter` exactly; all records when the filter is empty.
pub fn filter_by_state<'a>(records: &'a [UniversityRecord], selected_filter: &str) -> Vec<&'a UniversityRecord> {
    if selected_filter.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|r| r.state_province.as_deref() == Some(selected_filter))
        .collect()
}
