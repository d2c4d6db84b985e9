//! Defines custom error types for the application.

use std::process::ExitStatus;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Invalid pandoc_args item: {0}")]
    InvalidPandocArgsItem(serde_json::Value),

    #[error("pandoc exited with {0}")]
    PandocFailed(ExitStatus),
}
