use crate::diff::DiffCell;

/// Classify one cell pair. Values are compared as plain strings, so `"5"` and
/// `"5.0"` differ even if both came from numbers.
pub fn diff_cell(old: &str, new: &str) -> DiffCell {
    if old == new {
        DiffCell::Unchanged {
            value: old.to_string(),
        }
    } else if old.is_empty() {
        DiffCell::Added {
            value: new.to_string(),
        }
    } else if new.is_empty() {
        DiffCell::Deleted {
            value: old.to_string(),
        }
    } else {
        DiffCell::Modified {
            old_value: old.to_string(),
            new_value: new.to_string(),
        }
    }
}
