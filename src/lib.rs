//! Hierarchical heading numbering for Jupyter notebooks.
//!
//! nbindex walks the markdown cells of a notebook, detects heading lines,
//! and prepends a composite index ("2.3.1.") that tracks nesting depth
//! below a configurable title level. Counters can render as roman numerals,
//! a table of contents cell can be generated from the numbered headings,
//! and cells tagged `NOINDEX` are left untouched.
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod heading;
pub mod indexer;
pub mod notebook;
pub mod rewrite;
pub mod toc;
