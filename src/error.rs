//! Failure conditions surfaced while loading or numbering a notebook.
//!
//! A numbering run treats the whole document as a unit: any error here
//! aborts the run before the notebook is written back, so a failed run
//! never leaves a half-rewritten file behind.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
/// Everything that can go wrong during a numbering run.
pub enum Error {
    /// A heading skipped an intermediate depth, leaving an ancestor
    /// counter at zero. Only raised while verification is enabled.
    #[error("heading order at {state:?} is not valid")]
    InvalidHeadingOrder {
        /// Counter state at the moment the gap was detected.
        state: Vec<u32>,
    },

    /// The input file is not a notebook this tool understands.
    #[error("invalid notebook document: {0}")]
    InvalidInputFormat(String),

    /// Reading or writing the notebook file failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
