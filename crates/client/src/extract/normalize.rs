//! Text and URL normalization helpers shared by the extractors.

use std::sync::LazyLock;

use regex::Regex;

/// `"Bourne Legacy, The"` style sortable names.
static SORTABLE_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.+), (the|a|an|der|die|das|ein|eine|la|le|les|un|une|el|los|las|il|lo)$").expect("invalid regex")
});

/// Characters the site's search box chokes on.
static NON_SEARCH_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_.\[\]]").expect("invalid regex"));

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("invalid regex"));

/// Last `", YYYY"` fragment of a text line.
static TRAILING_YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^.*, *([0-9]{4}).*$").expect("invalid regex"));

/// Reorder a trailing sortable article back to the front.
///
/// `"Bourne Legacy, The"` becomes `"The Bourne Legacy"`; titles without the
/// pattern pass through unchanged.
pub fn unsort_title(title: &str) -> String {
    let trimmed = title.trim();
    match SORTABLE_TITLE.captures(trimmed) {
        Some(caps) => format!("{} {}", &caps[2], &caps[1]),
        None => trimmed.to_string(),
    }
}

/// Strip characters that are unsafe in the site's search box.
///
/// Dashes, underscores, dots and brackets become spaces; whitespace runs
/// collapse to a single space.
pub fn scrub_query(query: &str) -> String {
    let replaced = NON_SEARCH_CHARS.replace_all(query, " ");
    WHITESPACE_RUN.replace_all(&replaced, " ").trim().to_string()
}

/// Repair a protocol-relative image URL to an absolute `http:` one.
///
/// Idempotent: already-absolute `http…` URLs are returned unchanged.
pub fn repair_image_url(src: &str) -> String {
    if src.starts_with("http") { src.to_string() } else { format!("http:{src}") }
}

/// Extract the year from the last `", YYYY"` fragment of a line.
///
/// Matches e.g. `"USA, drama, 1968, 112 min"` -> `"1968"`.
pub fn year_after_comma(text: &str) -> Option<String> {
    TRAILING_YEAR.captures(text.trim()).map(|caps| caps[1].to_string())
}

/// Drop parentheses around a bare year fragment like `"(1963)"`.
pub fn strip_parentheses(text: &str) -> String {
    text.replace(['(', ')'], "").trim().to_string()
}
