//! Slug rules for project routing keys.
//!
//! A slug is the URL-safe unique identifier a project is routed by, so the
//! pattern is part of the external contract: lowercase alphanumeric runs
//! separated by single hyphens, no leading/trailing hyphen.

use std::sync::LazyLock;

use regex::Regex;

/// Pattern every project slug must match.
pub static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("slug pattern is valid"));

/// Whether `candidate` is a well-formed slug.
pub fn is_valid(candidate: &str) -> bool {
    SLUG_RE.is_match(candidate)
}
