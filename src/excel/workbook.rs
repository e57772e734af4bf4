use anyhow::{Context, Result};
use calamine::{Reader, open_workbook_auto};
use indexmap::IndexMap;
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::diff::Grid;
use crate::excel::grid_from_range;

/// A loaded workbook: one trimmed grid per worksheet, in workbook order.
#[derive(Debug, Clone)]
pub struct Workbook {
    path: PathBuf,
    sheets: IndexMap<String, Grid>,
}

pub fn open_workbook<P: AsRef<Path>>(path: P) -> Result<Workbook> {
    let path_ref = path.as_ref();
    info!("Loading workbook {}", path_ref.display());

    let mut workbook = open_workbook_auto(path_ref)
        .with_context(|| format!("Unable to parse Excel file: {}", path_ref.display()))?;

    let sheet_names = workbook.sheet_names().to_vec();
    let mut sheets = IndexMap::with_capacity(sheet_names.len());

    for name in &sheet_names {
        let range = workbook
            .worksheet_range(name)
            .with_context(|| format!("Unable to read worksheet: {}", name))?;

        let grid = grid_from_range(&range);
        debug!(
            "Sheet '{}': {} row(s), {} column(s)",
            name,
            grid.len(),
            grid.iter().map(Vec::len).max().unwrap_or(0)
        );

        sheets.insert(name.clone(), grid);
    }

    Ok(Workbook {
        path: path_ref.to_path_buf(),
        sheets,
    })
}

impl Workbook {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sheets(&self) -> &IndexMap<String, Grid> {
        &self.sheets
    }

    pub fn sheet(&self, name: &str) -> Option<&Grid> {
        self.sheets.get(name)
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}
