//! nbindex: hierarchical heading numbering for Jupyter notebooks.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use nbindex::{config, error, notebook, rewrite};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "nbindex")]
#[command(
    about = "Number the markdown headings in a Jupyter notebook. Tag a cell NOINDEX to leave it alone",
    long_about = None
)]
#[allow(clippy::struct_excessive_bools)]
struct Args {
    /// Path to the notebook file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Heading level of the unnumbered top title
    #[arg(long, value_name = "N")]
    title_level: Option<usize>,

    /// Use roman numerals instead of decimal
    #[arg(long)]
    roman: bool,

    /// Don't verify that the heading order is valid
    #[arg(long)]
    no_verify: bool,

    /// Insert or refresh a table of contents cell
    #[arg(long)]
    add_toc: bool,

    /// Print the rewritten notebook to stdout instead of saving in place
    #[arg(long)]
    stdout: bool,
}

fn main() -> ExitCode {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), error::Error> {
    let args = Args::parse();
    let mut cfg = config::Config::load();

    // Override config with command line args
    if let Some(level) = args.title_level {
        cfg.title_level = level;
    }
    if args.roman {
        cfg.roman = true;
    }

    let mut nb = notebook::Notebook::open(&args.file)?;

    let opts = rewrite::Options {
        title_level: cfg.title_level,
        roman: cfg.roman,
        verify: !args.no_verify,
        add_toc: args.add_toc,
        toc_caption: cfg.toc_caption,
    };
    rewrite::index_headings(&mut nb, &opts)?;

    if args.stdout {
        nb.write_stdout()?;
    } else {
        nb.save(&args.file)?;
    }
    Ok(())
}
