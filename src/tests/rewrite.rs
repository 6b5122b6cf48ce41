use super::{index_headings, Options};
use crate::error::Error;
use crate::notebook::{Cell, Notebook};

fn notebook_of(sources: &[&str]) -> Notebook {
    Notebook {
        cells: sources
            .iter()
            .map(|s| Cell::markdown((*s).to_string()))
            .collect(),
        metadata: serde_json::Map::new(),
        nbformat: 4,
        nbformat_minor: 5,
    }
}

fn default_options() -> Options {
    Options {
        title_level: 1,
        roman: false,
        verify: true,
        add_toc: false,
        toc_caption: "Table of Content".to_string(),
    }
}

fn sources(nb: &Notebook) -> Vec<String> {
    nb.cells.iter().map(|c| c.source.clone()).collect()
}

#[test]
fn test_basic_numbering() {
    let mut nb = notebook_of(&["# Title", "## A", "### B", "## C"]);
    index_headings(&mut nb, &default_options()).unwrap();
    assert_eq!(
        sources(&nb),
        vec!["#  Title", "## 1.  A", "### 1.1.  B", "## 2.  C"]
    );
}

#[test]
fn test_numbering_is_idempotent() {
    let mut nb = notebook_of(&["# Title", "## A", "### B", "## C"]);
    index_headings(&mut nb, &default_options()).unwrap();
    let first_pass = sources(&nb);

    index_headings(&mut nb, &default_options()).unwrap();
    assert_eq!(sources(&nb), first_pass);
}

#[test]
fn test_skipped_level_fails_with_verify() {
    let mut nb = notebook_of(&["# Title", "### B"]);
    let err = index_headings(&mut nb, &default_options()).unwrap_err();
    assert!(matches!(err, Error::InvalidHeadingOrder { .. }), "got: {err}");
}

#[test]
fn test_skipped_level_passes_without_verify() {
    let mut nb = notebook_of(&["# Title", "### B"]);
    let opts = Options {
        verify: false,
        ..default_options()
    };
    index_headings(&mut nb, &opts).unwrap();
    assert_eq!(nb.cells[1].source, "### 0.1.  B");
}

#[test]
fn test_roman_numbering() {
    let mut nb = notebook_of(&["# Title", "## A", "### B", "## C"]);
    let opts = Options {
        roman: true,
        ..default_options()
    };
    index_headings(&mut nb, &opts).unwrap();
    assert_eq!(
        sources(&nb),
        vec!["#  Title", "## I.  A", "### I.I.  B", "## II.  C"]
    );
}

#[test]
fn test_title_level_two() {
    let mut nb = notebook_of(&["## Part", "### A", "### B"]);
    let opts = Options {
        title_level: 2,
        ..default_options()
    };
    index_headings(&mut nb, &opts).unwrap();
    assert_eq!(sources(&nb), vec!["##  Part", "### 1.  A", "### 2.  B"]);
}

#[test]
fn test_noindex_cell_is_untouched() {
    let mut nb = notebook_of(&["# Title", "## Skipped", "## A"]);
    nb.cells[1].set_tags(&["NOINDEX"]);
    index_headings(&mut nb, &default_options()).unwrap();
    assert_eq!(nb.cells[1].source, "## Skipped");
    // Numbering continues past the skipped cell without consuming an index
    assert_eq!(nb.cells[2].source, "## 1.  A");
}

#[test]
fn test_code_cells_are_untouched() {
    let mut nb = notebook_of(&["# Title", "# not a heading, just a comment"]);
    nb.cells[1].cell_type = "code".to_string();
    index_headings(&mut nb, &default_options()).unwrap();
    assert_eq!(nb.cells[1].source, "# not a heading, just a comment");
}

#[test]
fn test_non_heading_lines_pass_through() {
    let mut nb = notebook_of(&["## A\n\nbody text\n#nospace"]);
    index_headings(&mut nb, &default_options()).unwrap();
    assert_eq!(nb.cells[0].source, "## 1.  A\n\nbody text\n#nospace");
}

#[test]
fn test_rewrite_lands_on_first_line_of_cell() {
    // A heading below the first line still advances the indexer, but its
    // rewritten text replaces the first line.
    let mut nb = notebook_of(&["intro\n## A"]);
    index_headings(&mut nb, &default_options()).unwrap();
    assert_eq!(nb.cells[0].source, "## 1.  A\n## A");
}

#[test]
fn test_toc_cell_is_inserted_and_linked() {
    let mut nb = notebook_of(&["# Title", "## A", "### B"]);
    let opts = Options {
        add_toc: true,
        ..default_options()
    };
    index_headings(&mut nb, &opts).unwrap();

    assert_eq!(nb.cells.len(), 4);
    let toc = &nb.cells[0];
    assert!(toc.has_tag("TOC"));
    assert!(toc.has_tag("NOINDEX"));
    assert!(toc.source.starts_with("## Table of Content\n"));
    assert!(toc.source.contains("* [1. A](#"));
    assert!(toc.source.contains("\t* [1.1. B](#"));

    // Numbered headings gained anchors; the unnumbered title did not
    assert!(nb.cells[1].source.starts_with("#  Title"));
    assert!(!nb.cells[1].source.contains("<a"));
    assert!(nb.cells[2].source.contains(r#"<a class="anchor" id=""#));

    // TOC links point at the anchors actually placed in the headings
    let anchor_id = nb.cells[2]
        .source
        .split("id=\"")
        .nth(1)
        .and_then(|rest| rest.split('"').next())
        .unwrap();
    assert!(toc.source.contains(&format!("(#{anchor_id})")));
}

#[test]
fn test_second_toc_run_replaces_in_place() {
    let mut nb = notebook_of(&["# Title", "## A"]);
    let opts = Options {
        add_toc: true,
        ..default_options()
    };
    index_headings(&mut nb, &opts).unwrap();
    assert_eq!(nb.cells.len(), 3);

    index_headings(&mut nb, &opts).unwrap();
    assert_eq!(nb.cells.len(), 3);
    let toc_cells = nb.cells.iter().filter(|c| c.has_tag("TOC")).count();
    assert_eq!(toc_cells, 1);

    // Old anchors were stripped before the new one was appended
    let anchors = nb.cells[2].source.matches("<a").count();
    assert_eq!(anchors, 1);
}
