use calamine::{Data, Range};

use crate::diff::Grid;
use crate::excel::cell_to_string;

/// Build a grid anchored at A1, trimmed of trailing blank rows and columns.
///
/// Ranges that start below or to the right of A1 keep their leading blank rows
/// and columns, so positions line up between workbooks. Only the area up to the
/// last non-blank row and column is allocated.
pub fn grid_from_range(range: &Range<Data>) -> Grid {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };

    let values: Vec<(usize, usize, String)> = range
        .used_cells()
        .map(|(row_idx, col_idx, cell)| {
            (
                start_row as usize + row_idx,
                start_col as usize + col_idx,
                cell_to_string(cell),
            )
        })
        .filter(|(_, _, value)| !value.is_empty())
        .collect();

    let height = values.iter().map(|(row, _, _)| row + 1).max().unwrap_or(0);
    let width = values.iter().map(|(_, col, _)| col + 1).max().unwrap_or(0);

    let mut grid = vec![vec![String::new(); width]; height];
    for (row, col, value) in values {
        grid[row][col] = value;
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Grid {
        rows.iter()
            .map(|row| row.iter().map(|v| v.to_string()).collect())
            .collect()
    }

    #[test]
    fn range_offset_is_kept() {
        let mut range = Range::new((1, 1), (2, 2));
        range.set_value((1, 2), Data::String("x".to_string()));
        range.set_value((2, 1), Data::Float(3.0));

        let g = grid_from_range(&range);

        assert_eq!(g, grid(&[&["", "", ""], &["", "", "x"], &["", "3", ""]]));
    }

    #[test]
    fn trims_trailing_blank_rows_and_columns() {
        let mut range = Range::new((0, 0), (3, 2));
        range.set_value((0, 0), Data::String("a".to_string()));
        range.set_value((1, 1), Data::String("b".to_string()));
        range.set_value((2, 2), Data::String(String::new()));

        assert_eq!(grid_from_range(&range), grid(&[&["a", ""], &["", "b"]]));
    }

    #[test]
    fn keeps_inner_blank_rows() {
        let mut range = Range::new((0, 0), (2, 0));
        range.set_value((0, 0), Data::String("a".to_string()));
        range.set_value((2, 0), Data::String("c".to_string()));

        assert_eq!(grid_from_range(&range), grid(&[&["a"], &[""], &["c"]]));
    }

    #[test]
    fn stray_far_cell_sets_the_bounds() {
        let mut range = Range::new((0, 0), (999, 99));
        range.set_value((0, 0), Data::Int(1));
        range.set_value((4, 2), Data::Bool(true));

        let g = grid_from_range(&range);

        assert_eq!(g.len(), 5);
        assert!(g.iter().all(|row| row.len() == 3));
        assert_eq!(g[4][2], "TRUE");
    }

    #[test]
    fn blank_strings_only_give_empty_grid() {
        let mut range = Range::new((0, 0), (1, 1));
        range.set_value((1, 1), Data::String(String::new()));

        assert!(grid_from_range(&range).is_empty());
    }

    #[test]
    fn empty_range_gives_empty_grid() {
        let range: Range<Data> = Range::empty();
        assert!(grid_from_range(&range).is_empty());
    }
}
