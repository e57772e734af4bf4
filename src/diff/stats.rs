use std::ops::Add;

use serde::Serialize;

use crate::diff::{DiffCell, DiffRow, RowType};

/// Cell and row counts for a diff grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    pub unchanged: usize,
    pub added: usize,
    pub deleted: usize,
    pub modified: usize,
    pub added_rows: usize,
    pub deleted_rows: usize,
}

impl DiffStats {
    pub fn from_rows(rows: &[DiffRow]) -> Self {
        let mut stats = DiffStats::default();

        for row in rows {
            match row.row_type {
                RowType::AddedRow => stats.added_rows += 1,
                RowType::DeletedRow => stats.deleted_rows += 1,
                RowType::Unchanged => {}
            }

            for cell in &row.cells {
                match cell {
                    DiffCell::Unchanged { .. } => stats.unchanged += 1,
                    DiffCell::Added { .. } => stats.added += 1,
                    DiffCell::Deleted { .. } => stats.deleted += 1,
                    DiffCell::Modified { .. } => stats.modified += 1,
                }
            }
        }

        stats
    }

    pub fn changed_cells(&self) -> usize {
        self.added + self.deleted + self.modified
    }
}

impl Add for DiffStats {
    type Output = DiffStats;

    fn add(self, other: DiffStats) -> DiffStats {
        DiffStats {
            unchanged: self.unchanged + other.unchanged,
            added: self.added + other.added,
            deleted: self.deleted + other.deleted,
            modified: self.modified + other.modified,
            added_rows: self.added_rows + other.added_rows,
            deleted_rows: self.deleted_rows + other.deleted_rows,
        }
    }
}
