use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;

use crate::cli::subcommands::BodyArgs;

/// Read the request body from `--data` or `--file` as a JSON object.
pub fn read_body(args: &BodyArgs) -> anyhow::Result<serde_json::Value> {
    let value: serde_json::Value = match (&args.data, &args.file) {
        (Some(data), _) => serde_json::from_str(data).context("--data is not valid JSON")?,
        (None, Some(path)) => read_json_file(Path::new(path))?,
        (None, None) => anyhow::bail!("one of --data or --file is required"),
    };
    if !value.is_object() {
        anyhow::bail!("request body must be a JSON object");
    }
    Ok(value)
}

/// Read and decode a JSON file.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("{} is not valid JSON", path.display()))
}
