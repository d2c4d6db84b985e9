//! Normalizes the `pandoc_args` metadata value into command-line tokens.

use serde_json::Value;

use crate::error::ConvertError;

/// Appends the tokens described by a `pandoc_args` metadata value to an
/// existing command.
///
/// The value may take one of three shapes:
///
/// * an object mapping option names to values, where `snake_case` keys
///   become `--kebab-case` flags and array values are serialized as
///   compact JSON;
/// * a string of space-separated flags;
/// * an array of flag strings, each split on whitespace.
///
/// Any other shape appends nothing. An array element that is not a string
/// is rejected with [`ConvertError::InvalidPandocArgsItem`].
pub fn append_pandoc_args(
    pandoc_args: &Value,
    command: &mut Vec<String>,
) -> Result<(), ConvertError> {
    match pandoc_args {
        Value::Object(options) => {
            for (key, value) in options {
                let cli_key = format!("--{}", key.replace('_', "-"));
                // A string value is passed through bare; everything else
                // (arrays included) uses its compact JSON rendering.
                match value {
                    Value::String(text) => command.push(format!("{cli_key}={text}")),
                    other => command.push(format!("{cli_key}={other}")),
                }
            }
        }
        Value::String(flags) => {
            command.extend(flags.split_whitespace().map(str::to_string));
        }
        Value::Array(items) => {
            for item in items {
                match item {
                    Value::String(flag) => {
                        command.extend(flag.split_whitespace().map(str::to_string));
                    }
                    other => return Err(ConvertError::InvalidPandocArgsItem(other.clone())),
                }
            }
        }
        _ => {}
    }

    Ok(())
}
