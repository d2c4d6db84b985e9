//! Core library for nbpandoc, a thin Pandoc wrapper that converts Markdown
//! or Jupyter notebook files to PDF while forwarding notebook metadata.
//!
//! The pipeline is deliberately small: read the notebook, pull out its
//! `metadata` object, write that object to a temporary JSON file, assemble
//! the Pandoc argument list, and run Pandoc synchronously. The only logic
//! with more than one branch is [`pandoc_args::append_pandoc_args`], which
//! normalizes the `pandoc_args` metadata value into command-line tokens.

pub mod cli;
pub mod convert;
pub mod error;
pub mod metadata;
pub mod pandoc_args;

use clap::Parser;

use crate::cli::Cli;

/// Entry point shared by the binary: parses the CLI and runs one
/// conversion.
pub fn run() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    convert::convert(&cli)
}
