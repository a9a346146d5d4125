//! Review text cleaning applied before scoring and driver detection.

use std::sync::LazyLock;

use regex::Regex;

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+|www\S+").expect("valid regex"));

static DISALLOWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9\s.,!?]").expect("valid regex"));

/// Strips links, blanks out everything but ASCII alphanumerics, whitespace and
/// `.,!?`, then trims.
///
/// `None` and the empty string both produce `""`. Applying the function to
/// its own output returns the output unchanged.
#[must_use]
pub fn clean_text(text: Option<&str>) -> String {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return String::new();
    };

    let without_links = LINK_RE.replace_all(text, "");
    let restricted = DISALLOWED_RE.replace_all(&without_links, " ");
    restricted.trim().to_string()
}
