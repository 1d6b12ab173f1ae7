//! Search Filters
//!
//! Case-insensitive substring predicates applied to a single designated
//! field per listing: driver username, car model, manufacturer name.

/// Returns true when `haystack` contains `needle`, ignoring case.
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Normalize a submitted search query: trim surrounding whitespace and
/// treat empty (or whitespace-only) input as no query at all.
#[must_use]
pub fn normalize_query(query: Option<&str>) -> Option<&str> {
    query.map(str::trim).filter(|q| !q.is_empty())
}

/// Keep the items whose designated field contains the query as a
/// case-insensitive substring. An absent or empty query keeps everything.
pub fn filter_by_field<T, F>(items: Vec<T>, query: Option<&str>, field: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    match normalize_query(query) {
        None => items,
        Some(q) => items
            .into_iter()
            .filter(|item| contains_ignore_case(field(item), q))
            .collect(),
    }
}
