use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::diff::{DiffCell, RowType, SheetComparison, SheetStatus, WorkbookDiff};
use crate::utils::{column_letter, html_escape};

const STYLE: &str = r#"        body { padding: 20px; }
        .diff-table { font-size: 0.85rem; border-collapse: collapse; width: 100%; }
        .diff-table th, .diff-table td {
            border: 1px solid #dee2e6;
            padding: 4px 8px;
            vertical-align: top;
            white-space: pre-wrap;
            word-break: break-word;
            max-width: 300px;
        }
        .diff-table th { background-color: #f8f9fa; font-weight: 600; text-align: center; }
        .row-header { background-color: #f8f9fa; font-weight: 600; text-align: center; min-width: 50px; }
        .cell-added { background-color: #d4edda; color: #155724; }
        .cell-deleted { background-color: #f8d7da; color: #721c24; text-decoration: line-through; }
        .cell-modified { background-color: #fff3cd; }
        .cell-modified .old-value {
            background-color: #ffeef0;
            color: #721c24;
            text-decoration: line-through;
            display: block;
            padding: 2px 4px;
            margin-bottom: 2px;
            border-radius: 2px;
        }
        .cell-modified .new-value {
            background-color: #e6ffed;
            color: #155724;
            display: block;
            padding: 2px 4px;
            border-radius: 2px;
        }
        .row-added td { background-color: #d4edda; color: #155724; }
        .row-deleted td { background-color: #f8d7da; color: #721c24; }
        .table-container { overflow-x: auto; margin-bottom: 20px; }
        .nav-tabs { margin-bottom: 20px; }
        .tab-badge { font-size: 0.7rem; margin-left: 5px; }
        .no-diff { color: #28a745; }
        .has-diff { color: #dc3545; }
        .sheet-only-in { font-style: italic; color: #6c757d; }
        .legend { margin-bottom: 20px; padding: 15px; background-color: #f8f9fa; border-radius: 5px; }
        .legend-item { display: inline-block; margin-right: 20px; padding: 4px 8px; border-radius: 3px; font-size: 0.85rem; }
        h1 { margin-bottom: 5px; }
        .subtitle { color: #6c757d; margin-bottom: 20px; }
"#;

fn tab_badge(sheet: &SheetComparison) -> &'static str {
    match sheet.status {
        SheetStatus::Compared if sheet.has_differences => {
            r#"<span class="badge tab-badge has-diff">changed</span>"#
        }
        SheetStatus::Compared => r#"<span class="badge tab-badge no-diff">identical</span>"#,
        SheetStatus::OnlyInOld => r#"<span class="badge tab-badge bg-danger">removed</span>"#,
        SheetStatus::OnlyInNew => r#"<span class="badge tab-badge bg-success">added</span>"#,
    }
}

fn render_cell(html: &mut String, cell: &DiffCell) -> std::fmt::Result {
    match cell {
        DiffCell::Unchanged { value } => write!(html, "<td>{}</td>", html_escape(value)),
        DiffCell::Added { value } => {
            write!(html, r#"<td class="cell-added">{}</td>"#, html_escape(value))
        }
        DiffCell::Deleted { value } => {
            write!(html, r#"<td class="cell-deleted">{}</td>"#, html_escape(value))
        }
        DiffCell::Modified {
            old_value,
            new_value,
        } => write!(
            html,
            r#"<td class="cell-modified"><span class="old-value">{}</span><span class="new-value">{}</span></td>"#,
            html_escape(old_value),
            html_escape(new_value)
        ),
    }
}

fn render_table(html: &mut String, sheet: &SheetComparison) -> std::fmt::Result {
    writeln!(html, r#"                <div class="table-container">"#)?;
    writeln!(html, r#"                    <table class="diff-table">"#)?;

    html.push_str("                        <thead><tr><th></th>");
    for col_idx in 0..sheet.column_count() {
        write!(html, "<th>{}</th>", column_letter(col_idx))?;
    }
    html.push_str("</tr></thead>\n");

    html.push_str("                        <tbody>\n");
    for (row_idx, row) in sheet.diff_grid.iter().enumerate() {
        let row_class = match row.row_type {
            RowType::AddedRow => "row-added",
            RowType::DeletedRow => "row-deleted",
            RowType::Unchanged => "",
        };

        write!(
            html,
            r#"                            <tr class="{}"><td class="row-header">{}</td>"#,
            row_class,
            row_idx + 1
        )?;
        for cell in &row.cells {
            render_cell(html, cell)?;
        }
        html.push_str("</tr>\n");
    }
    html.push_str("                        </tbody>\n");

    writeln!(html, "                    </table>")?;
    writeln!(html, "                </div>")
}

/// Render the whole diff as a standalone HTML page with one tab per sheet.
pub fn render_html(diff: &WorkbookDiff, old_label: &str, new_label: &str) -> Result<String> {
    let old_label = html_escape(old_label);
    let new_label = html_escape(new_label);
    let mut html = String::new();

    write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Excel Diff: {old_label} vs {new_label}</title>
    <link href="https://cdn.jsdelivr.net/npm/bootswatch@5.3.2/dist/cosmo/bootstrap.min.css" rel="stylesheet">
    <style>
{STYLE}    </style>
</head>
<body>
    <div class="container-fluid">
        <h1>Excel Diff Report</h1>
        <p class="subtitle">
            <strong>Old:</strong> {old_label}<br>
            <strong>New:</strong> {new_label}
        </p>

        <div class="legend">
            <strong>Legend:</strong>
            <span class="legend-item cell-added">Added</span>
            <span class="legend-item cell-deleted">Deleted</span>
            <span class="legend-item cell-modified">Modified</span>
            <span class="legend-item">Unchanged</span>
        </div>

        <ul class="nav nav-tabs" id="sheetTabs" role="tablist">
"#
    )?;

    for (idx, sheet) in diff.sheets.iter().enumerate() {
        let active = if idx == 0 { "active" } else { "" };
        let selected = idx == 0;

        write!(
            html,
            r##"            <li class="nav-item" role="presentation">
                <button class="nav-link {active}" id="tab-{idx}" data-bs-toggle="tab"
                        data-bs-target="#content-{idx}" type="button" role="tab"
                        aria-controls="content-{idx}" aria-selected="{selected}">
                    {name}{badge}
                </button>
            </li>
"##,
            name = html_escape(&sheet.name),
            badge = tab_badge(sheet),
        )?;
    }

    html.push_str("        </ul>\n\n        <div class=\"tab-content\" id=\"sheetTabContent\">\n");

    for (idx, sheet) in diff.sheets.iter().enumerate() {
        let active = if idx == 0 { "show active" } else { "" };
        let name = html_escape(&sheet.name);

        writeln!(
            html,
            r#"            <div class="tab-pane fade {active}" id="content-{idx}" role="tabpanel" aria-labelledby="tab-{idx}">"#
        )?;

        match sheet.status {
            SheetStatus::OnlyInOld => writeln!(
                html,
                r#"                <p class="sheet-only-in">Sheet "{name}" was deleted (existed only in old workbook)</p>"#
            )?,
            SheetStatus::OnlyInNew => writeln!(
                html,
                r#"                <p class="sheet-only-in">Sheet "{name}" was added (exists only in new workbook)</p>"#
            )?,
            SheetStatus::Compared => {}
        }

        if !sheet.diff_grid.is_empty() {
            render_table(&mut html, sheet)?;
        }

        html.push_str("            </div>\n");
    }

    html.push_str(
        r#"        </div>
    </div>

    <script src="https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/js/bootstrap.bundle.min.js"></script>
</body>
</html>
"#,
    );

    Ok(html)
}

pub fn write_html(diff: &WorkbookDiff, path: &Path, old_label: &str, new_label: &str) -> Result<()> {
    let html = render_html(diff, old_label, new_label)?;
    fs::write(path, html).with_context(|| format!("Failed to write to file: {}", path.display()))
}
