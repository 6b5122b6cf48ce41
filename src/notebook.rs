//! Serde model of the nbformat v4 notebook file.
//!
//! Only the fields the numbering pass touches are modelled as typed
//! fields; everything else (outputs, execution counts, ids, notebook
//! metadata) rides along in flattened JSON maps so a round trip through
//! this tool preserves it byte-for-byte in meaning.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// An nbformat v4 notebook: an ordered sequence of cells plus metadata.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Notebook {
    /// Document cells in order.
    pub cells: Vec<Cell>,
    /// Notebook-level metadata, preserved untouched.
    #[serde(default)]
    pub metadata: serde_json::Map<String, Value>,
    /// Major format version; must be 4.
    pub nbformat: u32,
    /// Minor format version, preserved untouched.
    pub nbformat_minor: u32,
}

/// A single notebook cell with its source normalized to one string.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Cell {
    /// Cell kind: only `"markdown"` cells are rewritten.
    pub cell_type: String,
    /// Cell metadata; the `tags` array carries `NOINDEX` / `TOC` markers.
    #[serde(default)]
    pub metadata: serde_json::Map<String, Value>,
    /// Cell text, joined from nbformat's list-of-lines shape on read and
    /// split back into newline-terminated lines on write.
    #[serde(default, with = "source_text")]
    pub source: String,
    /// Any remaining cell fields, preserved untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Notebook {
    /// Load and validate a notebook file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read and
    /// [`Error::InvalidInputFormat`] when it is not parseable as an
    /// nbformat v4 document. Either way, no indexing has happened yet.
    pub fn open(path: &Path) -> Result<Self, Error> {
        let raw = fs::read_to_string(path)?;
        let notebook: Self =
            serde_json::from_str(&raw).map_err(|e| Error::InvalidInputFormat(e.to_string()))?;
        if notebook.nbformat != 4 {
            return Err(Error::InvalidInputFormat(format!(
                "nbformat {} is not supported, expected 4",
                notebook.nbformat
            )));
        }
        Ok(notebook)
    }

    /// Write the notebook back to `path`, replacing its contents.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the file write fails.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let mut json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::InvalidInputFormat(e.to_string()))?;
        json.push('\n');
        fs::write(path, json)?;
        Ok(())
    }

    /// Print the serialized notebook to stdout instead of saving it.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization fails.
    pub fn write_stdout(&self) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::InvalidInputFormat(e.to_string()))?;
        println!("{json}");
        Ok(())
    }
}

impl Cell {
    /// Build an empty markdown cell.
    #[must_use]
    pub fn markdown(source: String) -> Self {
        Self {
            cell_type: "markdown".to_string(),
            metadata: serde_json::Map::new(),
            source,
            extra: serde_json::Map::new(),
        }
    }

    /// Whether this cell holds markdown text.
    #[must_use]
    pub fn is_markdown(&self) -> bool {
        self.cell_type == "markdown"
    }

    /// Whether the cell's metadata `tags` array contains `tag`.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.metadata
            .get("tags")
            .and_then(Value::as_array)
            .is_some_and(|tags| tags.iter().any(|t| t.as_str() == Some(tag)))
    }

    /// Replace the cell's metadata with exactly the given tags.
    pub fn set_tags(&mut self, tags: &[&str]) {
        self.metadata = serde_json::Map::new();
        self.metadata
            .insert("tags".to_string(), serde_json::json!(tags));
    }
}

/// nbformat stores cell source either as one string or as a list of
/// newline-terminated line strings. Read both, write the list shape.
mod source_text {
    use serde::de::Deserializer;
    use serde::ser::Serializer;
    use serde::Deserialize;

    pub fn serialize<S: Serializer>(source: &str, serializer: S) -> Result<S::Ok, S::Error> {
        let mut lines = Vec::new();
        let mut rest = source;
        while let Some(pos) = rest.find('\n') {
            lines.push(&rest[..=pos]);
            rest = &rest[pos + 1..];
        }
        if !rest.is_empty() {
            lines.push(rest);
        }
        serializer.collect_seq(lines)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Source {
            Joined(String),
            Lines(Vec<String>),
        }

        Ok(match Source::deserialize(deserializer)? {
            Source::Joined(text) => text,
            Source::Lines(lines) => lines.concat(),
        })
    }
}

#[cfg(test)]
#[path = "tests/notebook.rs"]
mod tests;
