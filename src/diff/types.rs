use serde::Serialize;

use crate::diff::DiffStats;

pub type Row = Vec<String>;

/// A sheet as a list of rows of string values; `""` marks a blank cell.
pub type Grid = Vec<Row>;

/// Classification of a single cell pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiffCell {
    Unchanged { value: String },
    /// Blank in old, present in new
    Added { value: String },
    /// Present in old, blank in new
    Deleted { value: String },
    Modified { old_value: String, new_value: String },
}

impl DiffCell {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, DiffCell::Unchanged { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowType {
    Unchanged,
    AddedRow,
    DeletedRow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffRow {
    pub row_type: RowType,
    pub cells: Vec<DiffCell>,
}

/// Which workbook a one-sided sheet came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Old,
    New,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetStatus {
    Compared,
    OnlyInOld,
    OnlyInNew,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetComparison {
    pub name: String,
    pub status: SheetStatus,
    pub has_differences: bool,
    pub diff_grid: Vec<DiffRow>,
}

impl SheetComparison {
    /// Width of the widest row. Compared sheets are rectangular; one-sided
    /// sheets keep their ragged rows.
    pub fn column_count(&self) -> usize {
        self.diff_grid
            .iter()
            .map(|row| row.cells.len())
            .max()
            .unwrap_or(0)
    }

    pub fn stats(&self) -> DiffStats {
        DiffStats::from_rows(&self.diff_grid)
    }

    // Short label for terminal output
    pub fn status_label(&self) -> &'static str {
        match self.status {
            SheetStatus::Compared if self.has_differences => "changed",
            SheetStatus::Compared => "identical",
            SheetStatus::OnlyInOld => "only in old (removed)",
            SheetStatus::OnlyInNew => "only in new (added)",
        }
    }
}

/// Per-sheet comparisons, sorted by sheet name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WorkbookDiff {
    pub sheets: Vec<SheetComparison>,
}

impl WorkbookDiff {
    pub fn has_differences(&self) -> bool {
        self.sheets.iter().any(|sheet| sheet.has_differences)
    }

    pub fn stats(&self) -> DiffStats {
        self.sheets
            .iter()
            .map(SheetComparison::stats)
            .fold(DiffStats::default(), |acc, s| acc + s)
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{Side, single_sided};

    #[test]
    fn column_count_uses_the_widest_row() {
        let grid = vec![
            vec!["a".to_string()],
            vec!["b".to_string(), "c".to_string(), "d".to_string()],
        ];
        let sheet = SheetComparison {
            name: "Ragged".to_string(),
            status: SheetStatus::OnlyInOld,
            has_differences: true,
            diff_grid: single_sided(&grid, Side::Old),
        };

        assert_eq!(sheet.column_count(), 3);
    }

    #[test]
    fn empty_sheet_has_no_columns() {
        let sheet = SheetComparison {
            name: "Empty".to_string(),
            status: SheetStatus::Compared,
            has_differences: false,
            diff_grid: Vec::new(),
        };

        assert_eq!(sheet.column_count(), 0);
        assert_eq!(sheet.status_label(), "identical");
    }
}
