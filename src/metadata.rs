//! Notebook metadata extraction and serialization for Pandoc.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::debug;
use serde_json::{Map, Value};

/// Reads the top-level `metadata` object from a Jupyter notebook.
///
/// The metadata section is optional in notebooks, so every failure mode
/// (missing file, malformed JSON, missing or non-object `metadata` field)
/// degrades to an empty map instead of surfacing an error.
pub fn extract_notebook_metadata(path: &Path) -> Map<String, Value> {
    match read_metadata(path) {
        Ok(metadata) => metadata,
        Err(err) => {
            debug!("no usable metadata in {}: {err:#}", path.display());
            Map::new()
        }
    }
}

fn read_metadata(path: &Path) -> anyhow::Result<Map<String, Value>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read notebook {}", path.display()))?;
    let notebook: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse notebook {}", path.display()))?;

    match notebook.get("metadata") {
        Some(Value::Object(metadata)) => Ok(metadata.clone()),
        _ => Ok(Map::new()),
    }
}

/// Writes the full metadata map to a temporary JSON file and returns its
/// path, for use with Pandoc's `--metadata-file` option.
///
/// The file is persisted on purpose: Pandoc reads it after this function
/// returns, and cleanup is left to the temp-directory policy of the OS.
pub fn write_metadata_file(metadata: &Map<String, Value>) -> anyhow::Result<PathBuf> {
    let file = tempfile::Builder::new()
        .prefix("nbpandoc-metadata-")
        .suffix(".json")
        .tempfile()
        .context("Failed to create temporary metadata file")?;
    serde_json::to_writer_pretty(file.as_file(), metadata)
        .context("Failed to serialize notebook metadata")?;
    let (_, path) = file
        .keep()
        .context("Failed to persist temporary metadata file")?;

    Ok(path)
}
