use chrono::{DateTime, Utc};

/// ISO8601 UTC timestamp with the colons stripped so it is safe in file names,
/// e.g. `2024-05-01T120000.000Z`.
pub fn file_safe_timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%dT%H%M%S%.3fZ").to_string()
}

/// Splits a comma separated list, trimming entries and dropping empty ones.
pub fn split_comma_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
