use std::collections::BTreeSet;

use indexmap::IndexMap;
use log::debug;

use crate::diff::{Grid, SheetComparison, SheetStatus, Side, WorkbookDiff, compare, single_sided};

/// Compare every sheet of two workbooks.
///
/// Sheets are matched by exact name and reported in lexicographic name order,
/// whatever order the workbooks list them in.
pub fn compare_workbooks(
    old_sheets: &IndexMap<String, Grid>,
    new_sheets: &IndexMap<String, Grid>,
) -> WorkbookDiff {
    let all_names: BTreeSet<&String> = old_sheets.keys().chain(new_sheets.keys()).collect();

    let mut sheets = Vec::with_capacity(all_names.len());

    for name in all_names {
        let comparison = match (old_sheets.get(name), new_sheets.get(name)) {
            (Some(old), Some(new)) => {
                let (diff_grid, has_differences) = compare(old, new);
                SheetComparison {
                    name: name.clone(),
                    status: SheetStatus::Compared,
                    has_differences,
                    diff_grid,
                }
            }
            (Some(old), None) => SheetComparison {
                name: name.clone(),
                status: SheetStatus::OnlyInOld,
                has_differences: true,
                diff_grid: single_sided(old, Side::Old),
            },
            (None, Some(new)) => SheetComparison {
                name: name.clone(),
                status: SheetStatus::OnlyInNew,
                has_differences: true,
                diff_grid: single_sided(new, Side::New),
            },
            (None, None) => continue,
        };

        debug!(
            "Sheet '{}': {:?}, {} row(s), differences: {}",
            comparison.name,
            comparison.status,
            comparison.diff_grid.len(),
            comparison.has_differences
        );

        sheets.push(comparison);
    }

    WorkbookDiff { sheets }
}
