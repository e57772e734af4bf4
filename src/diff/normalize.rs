use crate::diff::{Grid, Row};

fn max_cols(grid: &[Row]) -> usize {
    grid.iter().map(Vec::len).max().unwrap_or(0)
}

fn pad_grid(grid: &[Row], rows: usize, cols: usize) -> Grid {
    let mut padded = Vec::with_capacity(rows);

    for row_idx in 0..rows {
        let mut row = Vec::with_capacity(cols);
        if let Some(existing) = grid.get(row_idx) {
            row.extend(existing.iter().cloned());
        }
        row.resize(cols, String::new());
        padded.push(row);
    }

    padded
}

/// Pad both grids with blank cells to the element-wise maximum of their shapes.
///
/// Never truncates: a row longer than the other grid's widest row sets the
/// width for both.
pub fn normalize(old: &[Row], new: &[Row]) -> (Grid, Grid) {
    let rows = old.len().max(new.len());
    let cols = max_cols(old).max(max_cols(new));

    (pad_grid(old, rows, cols), pad_grid(new, rows, cols))
}
