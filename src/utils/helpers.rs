use std::path::{Path, PathBuf};

/// Excel column letter for a 0-based column index (0 -> A, 26 -> AA).
#[must_use]
pub fn column_letter(index: usize) -> String {
    let mut col_name = String::new();
    let mut n = index + 1;

    while n > 0 {
        let remainder = (n - 1) % 26;
        col_name.insert(0, (b'A' + remainder as u8) as char);
        n = (n - 1) / 26;
    }

    col_name
}

#[must_use]
pub fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// Report path next to the new workbook: `<stem>_diff.<extension>`
#[must_use]
pub fn default_output_path(new_file: &Path, extension: &str) -> PathBuf {
    let absolute = std::path::absolute(new_file).unwrap_or_else(|_| new_file.to_path_buf());
    let parent_dir = absolute.parent().unwrap_or_else(|| Path::new(""));
    let file_stem = absolute
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("workbook");

    parent_dir.join(format!("{}_diff.{}", file_stem, extension))
}
