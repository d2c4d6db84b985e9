//! Assembles the Pandoc invocation and runs it.

use std::path::Path;
use std::process::Command;

use anyhow::Context;
use log::debug;
use serde_json::Value;

use crate::cli::Cli;
use crate::error::ConvertError;
use crate::metadata::{extract_notebook_metadata, write_metadata_file};
use crate::pandoc_args::append_pandoc_args;

/// A fully assembled Pandoc invocation.
#[derive(Debug)]
pub struct Invocation {
    /// Ordered command tokens. The first token is always the program name
    /// and the second the input file; later tokens are appended in
    /// assembly order and never reordered.
    pub command: Vec<String>,
    /// The destination file, when the program can determine it. For plain
    /// Markdown input the destination is whatever the extra flags say, so
    /// it stays unknown here.
    pub output: Option<String>,
}

/// Builds the Pandoc command for `input`.
///
/// `flags` is a space-separated string of extra Pandoc flags appended
/// right after the input file. For notebook input the notebook metadata
/// is serialized to a temp file and forwarded via `--metadata-file`; the
/// reserved metadata keys `output` and `pandoc_args` additionally steer
/// the destination and extra flags.
pub fn build_command(input: &Path, flags: &str) -> anyhow::Result<Invocation> {
    let mut command = vec!["pandoc".to_string(), input.display().to_string()];
    command.extend(flags.split_whitespace().map(str::to_string));

    let is_notebook = input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ipynb"));
    if !is_notebook {
        return Ok(Invocation {
            command,
            output: None,
        });
    }

    let metadata = extract_notebook_metadata(input);
    if !metadata.is_empty() {
        let meta_file = write_metadata_file(&metadata)?;
        debug!("wrote notebook metadata to {}", meta_file.display());
        command.push(format!("--metadata-file={}", meta_file.display()));
    }

    // Without an `output` override the destination defaults to the input
    // path with a .pdf extension, and Pandoc needs to be told both the
    // target format and the output file.
    let output = match metadata.get("output").and_then(Value::as_str) {
        Some(path) => path.to_string(),
        None => {
            let default = input.with_extension("pdf").display().to_string();
            command.push("--to=pdf".to_string());
            command.push(format!("--output={default}"));
            default
        }
    };

    if let Some(pandoc_args) = metadata.get("pandoc_args") {
        append_pandoc_args(pandoc_args, &mut command)?;
    }

    Ok(Invocation {
        command,
        output: Some(output),
    })
}

/// Converts the input file to PDF by running the assembled command.
pub fn convert(cli: &Cli) -> anyhow::Result<()> {
    let invocation = build_command(&cli.input, &cli.flags)?;
    debug!("executing {:?}", invocation.command);

    let (program, args) = invocation
        .command
        .split_first()
        .context("Assembled command is empty")?;
    let status = Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("Failed to launch {program}; is it on your PATH?"))?;
    if !status.success() {
        return Err(ConvertError::PandocFailed(status).into());
    }

    match &invocation.output {
        Some(output) => println!(
            "Successfully converted {} to {output}",
            cli.input.display()
        ),
        None => println!("Successfully converted {}", cli.input.display()),
    }

    Ok(())
}
