mod html;
mod json;
mod types;

pub use html::{render_html, write_html};
pub use json::{render_json, write_json};
pub use types::ReportFormat;

use anyhow::Result;
use std::path::Path;

use crate::diff::WorkbookDiff;

/// Render `diff` in the requested format and write it to `path`.
pub fn write_report(
    diff: &WorkbookDiff,
    format: ReportFormat,
    path: &Path,
    old_label: &str,
    new_label: &str,
) -> Result<()> {
    match format {
        ReportFormat::Html => write_html(diff, path, old_label, new_label),
        ReportFormat::Json => write_json(diff, path),
    }
}
