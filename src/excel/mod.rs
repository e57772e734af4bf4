mod cell;
mod grid;
mod workbook;

pub use cell::{cell_to_string, excel_date_to_iso_string, excel_duration_to_string};
pub use grid::grid_from_range;
pub use workbook::{Workbook, open_workbook};
