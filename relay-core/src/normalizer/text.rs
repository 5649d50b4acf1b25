use regex::Regex;
use std::sync::OnceLock;

static DIGIT_RUN: OnceLock<Regex> = OnceLock::new();

/// First maximal run of ASCII digits anywhere in `text`, parsed as an
/// integer. "Score: 7/10, confidence 90%" yields 7. A run too long for an
/// i64 yields None, same as no digits at all; scraping free text is lossy
/// by nature and never an error.
///
/// Kept as a named seam so a future structured upstream contract can bypass
/// it without touching callers.
pub fn first_number(text: &str) -> Option<i64> {
    let re = DIGIT_RUN.get_or_init(|| Regex::new(r"[0-9]+").unwrap());
    re.find(text)?.as_str().parse().ok()
}

/// Comma-separated free text into trimmed non-empty items, order preserved.
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
