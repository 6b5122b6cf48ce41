//! The document pass: scan cells, rewrite heading lines, collect the TOC.
//!
//! One synchronous sweep over the notebook. Markdown cells not tagged
//! `NOINDEX` have their lines scanned for headings; each detected heading
//! advances the indexer and is reconstructed with its composite index
//! prepended. Any ordering error aborts the pass before anything is
//! written back.

use crate::error::Error;
use crate::heading;
use crate::indexer::Indexer;
use crate::notebook::Notebook;
use crate::toc::{self, Entry};
use uuid::Uuid;

/// Settings for one numbering run, merged from config file and CLI flags.
pub struct Options {
    /// Headings at or below this level get no index.
    pub title_level: usize,
    /// Render counters as roman numerals.
    pub roman: bool,
    /// Abort on skipped heading depths.
    pub verify: bool,
    /// Generate anchors and a table-of-contents cell.
    pub add_toc: bool,
    /// Caption text of the table-of-contents heading.
    pub toc_caption: String,
}

/// Number every heading in the notebook and, when enabled, place the TOC.
///
/// # Errors
///
/// Returns [`Error::InvalidHeadingOrder`] when verification is enabled and
/// a heading skips an intermediate depth. The notebook may have been
/// partially mutated in memory at that point; callers must not write it.
pub fn index_headings(notebook: &mut Notebook, opts: &Options) -> Result<(), Error> {
    let mut indexer = Indexer::new(opts.roman, opts.verify);
    let mut toc_entries = Vec::new();

    for cell in &mut notebook.cells {
        if cell.has_tag("NOINDEX") || !cell.is_markdown() {
            continue;
        }

        let mut lines: Vec<String> = cell.source.split('\n').map(str::to_owned).collect();
        let mut first_line = None;
        for line in &lines {
            let Some(found) = heading::parse(line) else {
                continue;
            };
            let (level, title) = (found.level, found.title);

            let mut rebuilt = "#".repeat(level);
            if level > opts.title_level {
                let index = indexer.next_index(level - 1 - opts.title_level)?;
                rebuilt.push(' ');
                rebuilt.push_str(&index);
                rebuilt.push_str("  ");
                rebuilt.push_str(title);

                if opts.add_toc {
                    let anchor_id = Uuid::new_v4().to_string();
                    rebuilt.push_str(&format!(r#"<a class="anchor" id="{anchor_id}"></a>"#));
                    toc_entries.push(Entry {
                        depth: level - 1 - opts.title_level,
                        index,
                        title: title.to_owned(),
                        anchor_id,
                    });
                }
            } else {
                rebuilt.push_str("  ");
                rebuilt.push_str(title);
            }

            // The rewritten text always lands on the first line of the
            // cell, even when the matched heading sits further down.
            first_line = Some(rebuilt);
        }
        if let Some(rebuilt) = first_line {
            lines[0] = rebuilt;
        }
        cell.source = lines.join("\n");
    }

    if opts.add_toc {
        toc::place(notebook, &toc_entries, opts.title_level, &opts.toc_caption);
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/rewrite.rs"]
mod tests;
