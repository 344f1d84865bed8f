use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for case-insensitive ordering
/// - Normalize unicode (NFD) so composed and decomposed spellings fold together
/// - Lowercase
pub fn fold_for_sorting(s: &str) -> String {
    s.nfd().collect::<String>().to_lowercase()
}

/// Case-insensitive lexicographic comparison
/// Strings that fold to the same key are ordered by code point, so the result is
/// a total order and sorting with it is deterministic
pub fn compare_case_insensitive(a: &str, b: &str) -> Ordering {
    match fold_for_sorting(a).cmp(&fold_for_sorting(b)) {
        // Secondary sort: original text for ties
        Ordering::Equal => a.cmp(b),
        other => other,
    }
}

/// Sort strings in place with [`compare_case_insensitive`]
pub fn sort_case_insensitive<S: AsRef<str>>(items: &mut [S]) {
    items.sort_by_cached_key(|s| (fold_for_sorting(s.as_ref()), s.as_ref().to_string()));
}
