//! Table model implementation for 2D grid data.
//!
//! `TableModel` stores a grid of cells, each holding data for any number of
//! roles plus its own item flags. It supports header data for both rows and
//! columns and is editable through [`ItemModel::set_data`].

use parking_lot::RwLock;
use std::collections::HashMap;

use super::index::ModelIndex;
use super::role::{ItemData, ItemRole};
use super::traits::{ItemFlags, ItemModel, Orientation};

/// A single cell of the grid.
#[derive(Debug, Clone, Default)]
struct Cell {
    roles: HashMap<ItemRole, ItemData>,
    flags: Option<ItemFlags>,
}

impl Cell {
    fn with_display(text: String) -> Self {
        let mut roles = HashMap::new();
        roles.insert(ItemRole::Display, ItemData::String(text));
        Self { roles, flags: None }
    }
}

#[derive(Debug, Default)]
struct TableData {
    rows: Vec<Vec<Cell>>,
    column_count: usize,
    headers: HashMap<(Orientation, usize, ItemRole), ItemData>,
    default_flags: ItemFlags,
}

impl TableData {
    fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|cells| cells.get(column))
    }

    fn cell_mut(&mut self, row: usize, column: usize) -> Option<&mut Cell> {
        self.rows.get_mut(row).and_then(|cells| cells.get_mut(column))
    }
}

/// A table model for displaying 2D grid data.
///
/// Every row has exactly `column_count` cells. Cells carry per-role data and
/// optional flags overriding the model-wide default flags.
///
/// # Example
///
/// ```
/// use horizon_lattice_itemview::model::{ItemModel, ModelIndex, Orientation, ItemRole, TableModel};
///
/// let model = TableModel::from_display(vec![
///     vec!["Alice", "Engineering"],
///     vec!["Bob", "Sales"],
/// ])
/// .with_column_headers(["Name", "Department"]);
///
/// let root = ModelIndex::invalid();
/// assert_eq!(model.row_count(&root), 2);
/// assert_eq!(model.display_text(&model.index(1, 0, &root)).as_deref(), Some("Bob"));
/// assert_eq!(
///     model.header_data(1, Orientation::Horizontal, ItemRole::Display).to_text(),
///     "Department"
/// );
/// ```
#[derive(Debug)]
pub struct TableModel {
    data: RwLock<TableData>,
}

impl TableModel {
    /// Creates an empty grid of `rows` by `columns` cells.
    pub fn new(rows: usize, columns: usize) -> Self {
        let data = TableData {
            rows: vec![vec![Cell::default(); columns]; rows],
            column_count: columns,
            headers: HashMap::new(),
            default_flags: ItemFlags::new(),
        };
        Self {
            data: RwLock::new(data),
        }
    }

    /// Creates a table from display strings, one inner vector per row.
    ///
    /// Short rows are padded with empty cells to the widest row.
    pub fn from_display<S: Into<String>>(rows: Vec<Vec<S>>) -> Self {
        let column_count = rows.iter().map(Vec::len).max().unwrap_or(0);
        let rows = rows
            .into_iter()
            .map(|row| {
                let mut cells: Vec<Cell> = row
                    .into_iter()
                    .map(|text| Cell::with_display(text.into()))
                    .collect();
                cells.resize_with(column_count, Cell::default);
                cells
            })
            .collect();
        Self {
            data: RwLock::new(TableData {
                rows,
                column_count,
                headers: HashMap::new(),
                default_flags: ItemFlags::new(),
            }),
        }
    }

    /// Sets the display labels of the column headers.
    pub fn with_column_headers<I, S>(self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_header_labels(Orientation::Horizontal, labels);
        self
    }

    /// Sets the display labels of the row headers.
    pub fn with_row_headers<I, S>(self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_header_labels(Orientation::Vertical, labels);
        self
    }

    /// Sets the flags used by cells without their own flags.
    pub fn with_default_flags(self, flags: ItemFlags) -> Self {
        self.data.write().default_flags = flags;
        self
    }

    /// Sets the display labels of one header orientation.
    pub fn set_header_labels<I, S>(&self, orientation: Orientation, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut data = self.data.write();
        for (section, label) in labels.into_iter().enumerate() {
            data.headers.insert(
                (orientation, section, ItemRole::Display),
                ItemData::String(label.into()),
            );
        }
    }

    /// Sets header data for a section under a role.
    pub fn set_header_data(
        &self,
        section: usize,
        orientation: Orientation,
        role: ItemRole,
        value: impl Into<ItemData>,
    ) {
        self.data
            .write()
            .headers
            .insert((orientation, section, role), value.into());
    }

    /// Stores data for a cell regardless of its flags.
    ///
    /// Returns `false` if the position is out of bounds.
    pub fn set_cell(&self, row: usize, column: usize, role: ItemRole, value: impl Into<ItemData>) -> bool {
        match self.data.write().cell_mut(row, column) {
            Some(cell) => {
                cell.roles.insert(role, value.into());
                true
            }
            None => false,
        }
    }

    /// Overrides the flags of one cell.
    ///
    /// Returns `false` if the position is out of bounds.
    pub fn set_flags(&self, row: usize, column: usize, flags: ItemFlags) -> bool {
        match self.data.write().cell_mut(row, column) {
            Some(cell) => {
                cell.flags = Some(flags);
                true
            }
            None => false,
        }
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.data.read().rows.len()
    }

    /// Returns the number of columns.
    pub fn columns(&self) -> usize {
        self.data.read().column_count
    }

    // =========================================================================
    // Structural Changes
    // =========================================================================

    /// Inserts `count` empty rows before `first`.
    ///
    /// Returns `false` if `first` is past the end.
    pub fn insert_rows(&self, first: usize, count: usize) -> bool {
        let mut data = self.data.write();
        if first > data.rows.len() {
            return false;
        }
        let columns = data.column_count;
        let blank = (0..count).map(|_| vec![Cell::default(); columns]);
        data.rows.splice(first..first, blank);
        true
    }

    /// Removes `count` rows starting at `first`.
    pub fn remove_rows(&self, first: usize, count: usize) -> bool {
        let mut data = self.data.write();
        let Some(end) = first.checked_add(count) else {
            return false;
        };
        if count == 0 || end > data.rows.len() {
            return false;
        }
        data.rows.drain(first..end);
        true
    }

    /// Inserts `count` empty columns before `first`.
    pub fn insert_columns(&self, first: usize, count: usize) -> bool {
        let mut data = self.data.write();
        if first > data.column_count {
            return false;
        }
        for cells in &mut data.rows {
            let blank = (0..count).map(|_| Cell::default());
            cells.splice(first..first, blank);
        }
        data.column_count += count;
        true
    }

    /// Removes `count` columns starting at `first`.
    pub fn remove_columns(&self, first: usize, count: usize) -> bool {
        let mut data = self.data.write();
        let Some(end) = first.checked_add(count) else {
            return false;
        };
        if count == 0 || end > data.column_count {
            return false;
        }
        for cells in &mut data.rows {
            cells.drain(first..end);
        }
        data.column_count -= count;
        true
    }

    /// Moves the row at `from` so it ends up at position `to`.
    pub fn move_row(&self, from: usize, to: usize) -> bool {
        let mut data = self.data.write();
        if from >= data.rows.len() || to >= data.rows.len() {
            return false;
        }
        let row = data.rows.remove(from);
        data.rows.insert(to, row);
        true
    }

    /// Moves the column at `from` so it ends up at position `to`.
    pub fn move_column(&self, from: usize, to: usize) -> bool {
        let mut data = self.data.write();
        if from >= data.column_count || to >= data.column_count {
            return false;
        }
        for cells in &mut data.rows {
            let cell = cells.remove(from);
            cells.insert(to, cell);
        }
        true
    }
}

impl ItemModel for TableModel {
    fn row_count(&self, parent: &ModelIndex) -> usize {
        if parent.is_valid() {
            0
        } else {
            self.data.read().rows.len()
        }
    }

    fn column_count(&self, parent: &ModelIndex) -> usize {
        if parent.is_valid() {
            0
        } else {
            self.data.read().column_count
        }
    }

    fn data(&self, index: &ModelIndex, role: ItemRole) -> ItemData {
        if !index.is_valid() || index.has_parent() {
            return ItemData::None;
        }
        self.data
            .read()
            .cell(index.row(), index.column())
            .and_then(|cell| cell.roles.get(&role).cloned())
            .unwrap_or_default()
    }

    fn index(&self, row: usize, column: usize, parent: &ModelIndex) -> ModelIndex {
        if parent.is_valid() {
            return ModelIndex::invalid();
        }
        let data = self.data.read();
        if row < data.rows.len() && column < data.column_count {
            ModelIndex::new(row, column, ModelIndex::invalid())
        } else {
            ModelIndex::invalid()
        }
    }

    fn set_data(&self, index: &ModelIndex, value: ItemData, role: ItemRole) -> bool {
        if !index.is_valid() || index.has_parent() {
            return false;
        }
        let updated = self.set_cell(index.row(), index.column(), role, value);
        if updated {
            tracing::trace!(
                target: "horizon_lattice_itemview::model",
                row = index.row(),
                column = index.column(),
                ?role,
                "table cell updated"
            );
        }
        updated
    }

    fn flags(&self, index: &ModelIndex) -> ItemFlags {
        if !index.is_valid() || index.has_parent() {
            return ItemFlags::disabled();
        }
        let data = self.data.read();
        match data.cell(index.row(), index.column()) {
            Some(cell) => cell.flags.unwrap_or(data.default_flags),
            None => ItemFlags::disabled(),
        }
    }

    fn header_data(&self, section: usize, orientation: Orientation, role: ItemRole) -> ItemData {
        self.data
            .read()
            .headers
            .get(&(orientation, section, role))
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> ModelIndex {
        ModelIndex::invalid()
    }

    #[test]
    fn test_from_display_pads_rows() {
        let model = TableModel::from_display(vec![vec!["a", "b", "c"], vec!["d"]]);
        assert_eq!(model.row_count(&root()), 2);
        assert_eq!(model.column_count(&root()), 3);
        assert!(model.index(1, 2, &root()).is_valid());
        assert!(model.data(&model.index(1, 2, &root()), ItemRole::Display).is_none());
        assert!(!model.index(2, 0, &root()).is_valid());
        assert!(!model.index(0, 3, &root()).is_valid());
    }

    #[test]
    fn test_flat_model_has_no_children() {
        let model = TableModel::new(2, 2);
        let cell = model.index(0, 0, &root());
        assert_eq!(model.row_count(&cell), 0);
        assert!(!model.has_children(&cell));
        assert!(!model.index(0, 0, &cell).is_valid());
    }

    #[test]
    fn test_set_data_and_flags() {
        let model = TableModel::new(1, 2);
        let index = model.index(0, 1, &root());

        assert!(model.set_data(&index, ItemData::from("x"), ItemRole::Display));
        assert_eq!(model.display_text(&index).as_deref(), Some("x"));

        assert_eq!(model.flags(&index), ItemFlags::new());
        model.set_flags(0, 1, ItemFlags::editable());
        assert!(model.flags(&index).editable);
        assert!(!model.set_flags(3, 0, ItemFlags::editable()));
    }

    #[test]
    fn test_headers() {
        let model = TableModel::new(2, 2)
            .with_column_headers(["A", "B"])
            .with_row_headers(["1"]);
        model.set_header_data(0, Orientation::Horizontal, ItemRole::AccessibleText, "Column A");

        assert_eq!(model.header_data(1, Orientation::Horizontal, ItemRole::Display).to_text(), "B");
        assert_eq!(model.header_data(0, Orientation::Vertical, ItemRole::Display).to_text(), "1");
        assert!(model.header_data(1, Orientation::Vertical, ItemRole::Display).is_none());
        assert_eq!(
            model.header_data(0, Orientation::Horizontal, ItemRole::AccessibleText).to_text(),
            "Column A"
        );
    }

    #[test]
    fn test_structural_changes() {
        let model = TableModel::from_display(vec![vec!["a", "b"], vec!["c", "d"]]);

        assert!(model.insert_rows(1, 2));
        assert_eq!(model.rows(), 4);
        assert_eq!(model.display_text(&model.index(3, 0, &root())).as_deref(), Some("c"));

        assert!(model.remove_rows(1, 2));
        assert!(!model.remove_rows(1, 5));
        assert_eq!(model.rows(), 2);

        assert!(model.insert_columns(0, 1));
        assert_eq!(model.columns(), 3);
        assert_eq!(model.display_text(&model.index(0, 1, &root())).as_deref(), Some("a"));

        assert!(model.remove_columns(0, 1));
        assert!(model.move_row(0, 1));
        assert_eq!(model.display_text(&model.index(0, 0, &root())).as_deref(), Some("c"));
        assert!(model.move_column(1, 0));
        assert_eq!(model.display_text(&model.index(0, 0, &root())).as_deref(), Some("d"));
    }
}
