//! Assembly of the table-of-contents cell from numbered headings.
//!
//! Entries are collected in document order by the rewrite pass and
//! rendered as a nested bullet list of in-document anchor links. The
//! block lands in a cell tagged `TOC` + `NOINDEX`: tagged so a later run
//! finds and replaces it in place instead of inserting a second one, and
//! so the block's own heading never gets numbered.

use crate::notebook::{Cell, Notebook};

#[derive(Debug, Clone)]
/// One table-of-contents bullet, linking a numbered heading to its anchor.
pub struct Entry {
    /// Zero-based depth below the title level; controls indentation.
    pub depth: usize,
    /// Composite index string of the heading, trailing dot included.
    pub index: String,
    /// Heading title text as captured from the rewritten line.
    pub title: String,
    /// Anchor id the bullet links to.
    pub anchor_id: String,
}

impl Entry {
    fn render(&self) -> String {
        format!(
            "{}* [{} {}](#{})",
            "\t".repeat(self.depth),
            self.index,
            self.title,
            self.anchor_id
        )
    }
}

/// Render the full TOC block: a caption heading one level below the
/// title level, then one bullet per entry in document order.
#[must_use]
pub fn build(entries: &[Entry], title_level: usize, caption: &str) -> String {
    let bullets = entries
        .iter()
        .map(Entry::render)
        .collect::<Vec<_>>()
        .join("\n");
    format!("{} {caption}\n{bullets}", "#".repeat(title_level + 1))
}

/// Place the TOC block into the notebook.
///
/// Reuses the first cell tagged `TOC` when one exists, otherwise inserts
/// a fresh markdown cell at position 0. The target cell's metadata is
/// reset to exactly `["TOC", "NOINDEX"]` either way.
pub fn place(notebook: &mut Notebook, entries: &[Entry], title_level: usize, caption: &str) {
    let source = build(entries, title_level, caption);

    if let Some(cell) = notebook.cells.iter_mut().find(|c| c.has_tag("TOC")) {
        cell.set_tags(&["TOC", "NOINDEX"]);
        cell.source = source;
    } else {
        let mut cell = Cell::markdown(source);
        cell.set_tags(&["TOC", "NOINDEX"]);
        notebook.cells.insert(0, cell);
    }
}

#[cfg(test)]
#[path = "tests/toc.rs"]
mod tests;
