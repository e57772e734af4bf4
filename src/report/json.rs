use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::diff::WorkbookDiff;

pub fn render_json(diff: &WorkbookDiff) -> Result<String> {
    serde_json::to_string_pretty(diff).context("Failed to serialize diff to JSON")
}

pub fn write_json(diff: &WorkbookDiff, path: &Path) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))?;

    let json_string = render_json(diff)?;

    file.write_all(json_string.as_bytes())
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;

    Ok(())
}
