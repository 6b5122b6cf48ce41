//! Detection of markdown heading lines and their already-present decoration.
//!
//! A heading candidate starts with one or more `#` followed by a space.
//! The full pattern additionally strips any decimal or roman index prefix
//! left over from an earlier run, and any trailing anchor tag, so that
//! re-running the tool on its own output regenerates the same line rather
//! than stacking indices.

use once_cell::sync::Lazy;
use regex::Regex;

static HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<marks>#+)\s+((\d\.)*\d\.?\s+)?(([0IXVMC]+\.)*[0IXVMC]+\.?\s+)?(?P<title>[^<]*)(<a[^>]*></a>)?$").unwrap()
});

#[derive(Debug, PartialEq, Eq)]
/// A heading line broken into its level and bare title text.
///
/// Produced transiently per line and consumed immediately by the rewrite
/// pass; any prior index prefix or anchor tag is already stripped.
pub struct Heading<'a> {
    /// Number of leading `#` markers.
    pub level: usize,
    /// Title text without markers, index prefixes, or anchor tags.
    pub title: &'a str,
}

/// Try to interpret a line as a markdown heading.
///
/// Lines that are not candidates (no `#` run followed by a literal space)
/// or that fail the full pattern return `None` and are passed through
/// unchanged by the caller. This is not an error condition.
#[must_use]
pub fn parse(line: &str) -> Option<Heading<'_>> {
    let after_marks = line.trim_start_matches('#');
    if after_marks.len() == line.len() || !after_marks.starts_with(' ') {
        return None;
    }

    let captures = HEADING.captures(line)?;
    Some(Heading {
        level: captures["marks"].len(),
        title: captures.name("title").map_or("", |m| m.as_str()),
    })
}

#[cfg(test)]
#[path = "tests/heading.rs"]
mod tests;
