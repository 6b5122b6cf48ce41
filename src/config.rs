//! Configuration to acknowledge user preferences as well as set defaults.
//!
//! Specifically, we try to find an nbindex.toml, and if present we load settings from there.
//! This provides the title level, numeral style, and TOC caption preferences.

use facet::Facet;
use std::fs;

#[derive(Facet, Clone)]
/// User preferences loaded from nbindex.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 1)]
    /// Heading level treated as the document's unindexed top title.
    pub title_level: usize,
    #[facet(default = false)]
    /// Render counters as roman numerals instead of decimal.
    pub roman: bool,
    #[facet(default = "Table of Content".to_string())]
    /// Caption of the generated table-of-contents heading.
    pub toc_caption: String,
}

impl Config {
    #[must_use]
    /// Load configuration from nbindex.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        if let Ok(contents) = fs::read_to_string("nbindex.toml") {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                return config;
            }
        }
        facet_toml::from_str::<Self>("").unwrap()
    }
}
