//! Heading slug ids.
//!
//! The same function produces the `id` attribute on a heading element
//! and the id its TOC entry points at, so click-to-scroll navigation
//! stays consistent even when two headings collide.

use regex::Regex;
use std::sync::OnceLock;

fn non_alphanumeric_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("invalid slug regex"))
}

/// Derives a URL-safe id from heading text.
///
/// Lower-cases the text, collapses every run of characters outside
/// `[a-z0-9]` into a single hyphen, and trims leading/trailing hyphens.
/// Ids are not deduplicated; identical headings yield identical ids.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let hyphenated = non_alphanumeric_re().replace_all(&lowered, "-");
    hyphenated.trim_matches('-').to_string()
}
