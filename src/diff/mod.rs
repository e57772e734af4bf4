//! Positional cell-by-cell comparison of two workbooks.
//!
//! Grids are compared index-for-index: row `i`, column `j` of the old sheet is
//! compared against row `i`, column `j` of the new sheet. There is no row or
//! column alignment, so a single inserted row shows up as a cascade of
//! modifications for every row below it.

mod cell;
mod normalize;
mod row;
mod sheet;
mod stats;
mod types;
mod workbook;

pub use cell::diff_cell;
pub use normalize::normalize;
pub use row::{classify_row, is_blank_row};
pub use sheet::{compare, single_sided};
pub use stats::DiffStats;
pub use types::{
    DiffCell, DiffRow, Grid, Row, RowType, SheetComparison, SheetStatus, Side, WorkbookDiff,
};
pub use workbook::compare_workbooks;
