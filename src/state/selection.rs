//! Table selection state for the code-generation page.
//!
//! DESIGN
//! ======
//! The checkbox group over the project's tables is the only selection
//! state; rows keep list order so `checked_ids` reports values in the
//! same order they render. Bulk actions and per-row toggles are all
//! synchronous mutations, read live at dispatch time.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

/// One selectable table row on the codegen page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    /// Opaque table identifier sent to the generation endpoints.
    pub table_id: String,
    /// Display name for the checkbox label.
    pub table_name: String,
    /// Whether this row's checkbox is currently checked.
    pub checked: bool,
}

impl TableRow {
    /// Build an unchecked row.
    pub fn new(table_id: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            table_id: table_id.into(),
            table_name: table_name.into(),
            checked: false,
        }
    }
}

/// Checkbox-group state over the table inventory.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    /// Rows in render order.
    pub rows: Vec<TableRow>,
    /// True while the inventory fetch is in flight.
    pub loading: bool,
}

impl SelectionState {
    /// Replace the row inventory. Incoming rows are left as given, so a
    /// reload drops any previous selection.
    pub fn set_rows(&mut self, rows: Vec<TableRow>) {
        self.rows = rows;
        self.loading = false;
    }

    /// Check every row. A no-op on an empty inventory.
    pub fn select_all(&mut self) {
        for row in &mut self.rows {
            row.checked = true;
        }
    }

    /// Uncheck every row. A no-op on an empty inventory.
    pub fn clear_all(&mut self) {
        for row in &mut self.rows {
            row.checked = false;
        }
    }

    /// Set a single row's checked state. Unknown ids are ignored.
    pub fn toggle(&mut self, table_id: &str, checked: bool) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.table_id == table_id) {
            row.checked = checked;
        }
    }

    /// Collect the checked table ids in row order. Pure read; returns an
    /// empty vector when nothing is checked or no rows exist.
    pub fn checked_ids(&self) -> Vec<String> {
        self.rows
            .iter()
            .filter(|r| r.checked)
            .map(|r| r.table_id.clone())
            .collect()
    }
}
