use crate::diff::{DiffCell, DiffRow, Row, RowType, Side, classify_row, diff_cell, normalize};

/// Compare two sheets position by position.
///
/// Returns the diff grid, shaped to the larger of the two inputs, and whether
/// any cell differs.
pub fn compare(old: &[Row], new: &[Row]) -> (Vec<DiffRow>, bool) {
    let (old, new) = normalize(old, new);

    let mut diff_grid = Vec::with_capacity(old.len());
    let mut has_differences = false;

    for (old_row, new_row) in old.iter().zip(new.iter()) {
        let cells: Vec<DiffCell> = old_row
            .iter()
            .zip(new_row.iter())
            .map(|(old_cell, new_cell)| diff_cell(old_cell, new_cell))
            .collect();

        has_differences |= cells.iter().any(|cell| !cell.is_unchanged());

        diff_grid.push(DiffRow {
            row_type: classify_row(old_row, new_row),
            cells,
        });
    }

    (diff_grid, has_differences)
}

/// Diff grid for a sheet that exists in only one workbook.
///
/// Every row and every cell is marked, blank ones included. The grid keeps the
/// input's own shape; it is not padded.
pub fn single_sided(grid: &[Row], side: Side) -> Vec<DiffRow> {
    let row_type = match side {
        Side::Old => RowType::DeletedRow,
        Side::New => RowType::AddedRow,
    };

    grid.iter()
        .map(|row| DiffRow {
            row_type,
            cells: row
                .iter()
                .map(|value| match side {
                    Side::Old => DiffCell::Deleted {
                        value: value.clone(),
                    },
                    Side::New => DiffCell::Added {
                        value: value.clone(),
                    },
                })
                .collect(),
        })
        .collect()
}
