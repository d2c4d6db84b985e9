//! Defines the command-line interface for the application.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "nbpandoc",
    version,
    about = "Convert a Markdown or Jupyter notebook file to PDF via Pandoc, \
             including full notebook metadata and custom pandoc_args."
)]
pub struct Cli {
    /// The input file to convert (.md or .ipynb).
    #[arg(value_name = "FILE_PATH")]
    pub input: PathBuf,

    /// Extra Pandoc flags, space-separated.
    #[arg(
        long,
        value_name = "FLAGS",
        default_value = "--pdf-engine=xelatex",
        allow_hyphen_values = true
    )]
    pub flags: String,
}
