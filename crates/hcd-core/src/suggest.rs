use std::collections::HashSet;

use hcd_model::Record;

/// Distinct record names containing the trimmed `keyword`, in dataset order,
/// at most `limit`. A blank keyword suggests nothing.
pub fn suggest<'a>(records: &'a [Record], keyword: &str, limit: usize) -> Vec<&'a str> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Vec::new();
    }
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|record| record.name.as_str())
        .filter(|name| name.contains(keyword))
        .filter(|name| seen.insert(*name))
        .take(limit)
        .collect()
}
