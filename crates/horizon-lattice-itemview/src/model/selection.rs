//! Selection model for item views.
//!
//! This module provides [`SelectionModel`], which manages selection state
//! for table, list and tree views.
//!
//! # Example
//!
//! ```
//! use horizon_lattice_itemview::model::{
//!     ItemModel, SelectionFlags, SelectionMode, SelectionModel, TableModel,
//! };
//!
//! let model = TableModel::from_display(vec![vec!["a", "b"], vec!["c", "d"]]);
//! let mut selection = SelectionModel::new();
//! selection.set_selection_mode(SelectionMode::ExtendedSelection);
//!
//! // Select the whole first row through its first cell
//! let first = model.index(0, 0, &Default::default());
//! selection.select(&model, &first, SelectionFlags::SELECT.with_rows());
//!
//! assert!(selection.is_row_selected(&model, 0, &Default::default()));
//! assert_eq!(selection.selected_count(), 2);
//! ```

use std::collections::HashSet;

use super::index::ModelIndex;
use super::traits::ItemModel;

/// Selection behavior mode for views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// No items can be selected.
    NoSelection,
    /// Only one item (or one row/column unit) can be selected at a time (default).
    #[default]
    SingleSelection,
    /// Multiple items can be selected with Ctrl+click.
    MultiSelection,
    /// Range selection with Shift+click, extended by Ctrl+click.
    ExtendedSelection,
}

/// Flags controlling selection operations.
///
/// These flags can be combined to perform complex selection operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionFlags {
    /// Clear existing selection before applying operation.
    pub clear: bool,
    /// Select the specified indices.
    pub select: bool,
    /// Deselect the specified indices.
    pub deselect: bool,
    /// Toggle selection state of specified indices.
    pub toggle: bool,
    /// Set as current index (keyboard focus).
    pub current: bool,
    /// Expand the operation to every column of the index's row.
    pub rows: bool,
    /// Expand the operation to every row of the index's column.
    pub columns: bool,
}

impl SelectionFlags {
    /// No operation.
    pub const NONE: Self = Self::empty();

    /// Clear existing selection.
    pub const CLEAR: Self = Self {
        clear: true,
        ..Self::empty()
    };

    /// Select the index.
    pub const SELECT: Self = Self {
        select: true,
        ..Self::empty()
    };

    /// Deselect the index.
    pub const DESELECT: Self = Self {
        deselect: true,
        ..Self::empty()
    };

    /// Toggle selection of the index.
    pub const TOGGLE: Self = Self {
        toggle: true,
        ..Self::empty()
    };

    /// Clear existing selection and select the index.
    pub const CLEAR_AND_SELECT: Self = Self {
        clear: true,
        select: true,
        ..Self::empty()
    };

    /// Select and set as current.
    pub const SELECT_CURRENT: Self = Self {
        select: true,
        current: true,
        ..Self::empty()
    };

    const fn empty() -> Self {
        Self {
            clear: false,
            select: false,
            deselect: false,
            toggle: false,
            current: false,
            rows: false,
            columns: false,
        }
    }

    /// Creates flags with clear set.
    pub fn with_clear(mut self) -> Self {
        self.clear = true;
        self
    }

    /// Creates flags with current set.
    pub fn with_current(mut self) -> Self {
        self.current = true;
        self
    }

    /// Creates flags that expand to the whole row.
    pub fn with_rows(mut self) -> Self {
        self.rows = true;
        self
    }

    /// Creates flags that expand to the whole column.
    pub fn with_columns(mut self) -> Self {
        self.columns = true;
        self
    }
}

/// Manages selection state for item views.
///
/// SelectionModel tracks which items are selected and the current (focused)
/// item. Selected indices are kept in the order they were selected; every
/// enumeration (`selected_indices`, `selected_rows`, `selected_columns`)
/// follows that order.
///
/// Row and column predicates have full-row / full-column semantics: a row is
/// selected only when every column of that row (under the same parent) is
/// selected.
#[derive(Debug, Clone, Default)]
pub struct SelectionModel {
    mode: SelectionMode,

    /// The current index (has keyboard focus).
    current: ModelIndex,

    /// Set of selected indices for O(1) lookup.
    selected_set: HashSet<ModelIndex>,

    /// Ordered list of selected indices.
    selected_indices: Vec<ModelIndex>,
}

impl SelectionModel {
    /// Creates a new selection model with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Selection Mode
    // =========================================================================

    /// Gets the current selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.mode
    }

    /// Sets the selection mode.
    ///
    /// Changing mode does not clear existing selection, but subsequent
    /// selections will follow the new mode's behavior.
    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
    }

    // =========================================================================
    // Current Index
    // =========================================================================

    /// Gets the current (focused) index.
    pub fn current_index(&self) -> &ModelIndex {
        &self.current
    }

    /// Sets the current index without touching the selection.
    pub fn set_current_index(&mut self, index: ModelIndex) {
        self.current = index;
    }

    // =========================================================================
    // Selection Queries
    // =========================================================================

    /// Checks if an index is selected.
    pub fn is_selected(&self, index: &ModelIndex) -> bool {
        index.is_valid() && self.selected_set.contains(index)
    }

    /// Returns true if any items are selected.
    pub fn has_selection(&self) -> bool {
        !self.selected_indices.is_empty()
    }

    /// Returns the number of selected items.
    pub fn selected_count(&self) -> usize {
        self.selected_indices.len()
    }

    /// Returns the selected indices in selection order.
    pub fn selected_indices(&self) -> &[ModelIndex] {
        &self.selected_indices
    }

    /// Checks if every column of `row` under `parent` is selected.
    pub fn is_row_selected(&self, model: &dyn ItemModel, row: usize, parent: &ModelIndex) -> bool {
        let columns = model.column_count(parent);
        columns > 0
            && (0..columns).all(|column| self.is_selected(&model.index(row, column, parent)))
    }

    /// Checks if every row of `column` under `parent` is selected.
    pub fn is_column_selected(
        &self,
        model: &dyn ItemModel,
        column: usize,
        parent: &ModelIndex,
    ) -> bool {
        let rows = model.row_count(parent);
        rows > 0 && (0..rows).all(|row| self.is_selected(&model.index(row, column, parent)))
    }

    /// Returns one index (column 0) per fully selected row, in selection order.
    pub fn selected_rows(&self, model: &dyn ItemModel) -> Vec<ModelIndex> {
        let mut seen = HashSet::new();
        let mut rows = Vec::new();
        for index in &self.selected_indices {
            let first = index.sibling(index.row(), 0);
            if seen.insert(first.clone())
                && self.is_row_selected(model, index.row(), &index.parent())
            {
                rows.push(model.index(index.row(), 0, &index.parent()));
            }
        }
        rows
    }

    /// Returns one index (row 0) per fully selected column, in selection order.
    pub fn selected_columns(&self, model: &dyn ItemModel) -> Vec<ModelIndex> {
        let mut seen = HashSet::new();
        let mut columns = Vec::new();
        for index in &self.selected_indices {
            let top = index.sibling(0, index.column());
            if seen.insert(top.clone())
                && self.is_column_selected(model, index.column(), &index.parent())
            {
                columns.push(model.index(0, index.column(), &index.parent()));
            }
        }
        columns
    }

    // =========================================================================
    // Selection Operations
    // =========================================================================

    /// Performs a selection operation on an index.
    ///
    /// The behavior depends on the flags:
    /// - `clear`: Deselects all items first
    /// - `select`: Adds the index to selection
    /// - `deselect`: Removes the index from selection
    /// - `toggle`: Toggles the selection state
    /// - `rows` / `columns`: Applies the operation to the whole row / column
    /// - `current`: Makes the index current
    ///
    /// Does nothing in [`SelectionMode::NoSelection`].
    pub fn select(&mut self, model: &dyn ItemModel, index: &ModelIndex, flags: SelectionFlags) {
        if self.mode == SelectionMode::NoSelection {
            return;
        }

        if flags.current {
            self.current = index.clone();
        }

        let targets = Self::expand(model, index, flags);

        let exclusive = self.mode == SelectionMode::SingleSelection && (flags.select || flags.toggle);
        if flags.clear || (exclusive && !targets.is_empty()) {
            self.clear_selection();
        }

        for target in targets {
            if flags.toggle {
                if self.selected_set.contains(&target) {
                    self.remove_from_selection(&target);
                } else {
                    self.add_to_selection(target);
                }
            } else if flags.select {
                self.add_to_selection(target);
            } else if flags.deselect {
                self.remove_from_selection(&target);
            }
        }

        tracing::debug!(
            target: "horizon_lattice_itemview::selection",
            row = index.row(),
            column = index.column(),
            selected = self.selected_indices.len(),
            "selection updated"
        );
    }

    /// Clears all selection.
    pub fn clear_selection(&mut self) {
        self.selected_indices.clear();
        self.selected_set.clear();
    }

    /// Clears all selection and resets the current index.
    pub fn clear(&mut self) {
        self.clear_selection();
        self.current = ModelIndex::invalid();
    }

    fn expand(model: &dyn ItemModel, index: &ModelIndex, flags: SelectionFlags) -> Vec<ModelIndex> {
        if !index.is_valid() {
            return Vec::new();
        }
        let parent = index.parent();
        if flags.rows {
            (0..model.column_count(&parent))
                .map(|column| model.index(index.row(), column, &parent))
                .filter(ModelIndex::is_valid)
                .collect()
        } else if flags.columns {
            (0..model.row_count(&parent))
                .map(|row| model.index(row, index.column(), &parent))
                .filter(ModelIndex::is_valid)
                .collect()
        } else {
            vec![index.clone()]
        }
    }

    fn add_to_selection(&mut self, index: ModelIndex) {
        if self.selected_set.insert(index.clone()) {
            self.selected_indices.push(index);
        }
    }

    fn remove_from_selection(&mut self, index: &ModelIndex) {
        if self.selected_set.remove(index) {
            self.selected_indices.retain(|selected| selected != index);
        }
    }
}
