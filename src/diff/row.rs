use crate::diff::RowType;

pub fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|cell| cell.is_empty())
}

/// Coarse row classification based on whole-row blankness only.
///
/// A row with content on both sides stays `Unchanged` even when some of its
/// cells were modified; callers look at the cells for that.
pub fn classify_row(old: &[String], new: &[String]) -> RowType {
    match (is_blank_row(old), is_blank_row(new)) {
        (true, false) => RowType::AddedRow,
        (false, true) => RowType::DeletedRow,
        _ => RowType::Unchanged,
    }
}
