//! Accessibility adapter for tree views.
//!
//! A tree's accessible rows are the rows it currently shows: the flattened,
//! expansion-aware sequence from [`TreeItemView::visible_rows`], not the
//! model's child rows. Every row or column coordinate handed to a
//! [`TreeAdapter`] is a visible position. Trees never show a row header, so
//! flat indices run over the column header (if any) followed by the cells of
//! each visible row.

use horizon_lattice_itemview::geometry::Rect;
use horizon_lattice_itemview::model::ModelIndex;

use crate::cell::CellObject;
use crate::change::{ChangeTracker, TableModelChange};
use crate::error::AccessResult;
use crate::item::{AccessibleItem, AccessibleObject};
use crate::relation::{Relation, Relationship};
use crate::role::{AccessibleRole, TextKind};
use crate::state::AccessibleState;
use crate::table::TableAdapter;
use crate::view::{TreeItemView, ViewHandle, ViewRef};

/// Resolves a visible row and a column to a model index.
///
/// The visible row gives the item; the column is taken from its sibling
/// under the same parent.
pub(crate) fn visible_index(tree: &dyn TreeItemView, row: usize, column: usize) -> ModelIndex {
    let Some(first) = tree.visible_rows().get(row) else {
        return ModelIndex::invalid();
    };
    if column == 0 {
        first
    } else {
        tree.model().sibling(&first, first.row(), column)
    }
}

/// Exposes a tree view to accessibility clients.
#[derive(Clone, Copy)]
pub struct TreeAdapter<'a> {
    tree: &'a dyn TreeItemView,
    table: TableAdapter<'a>,
}

impl<'a> TreeAdapter<'a> {
    pub fn new(tree: &'a dyn TreeItemView, changes: &'a ChangeTracker) -> Self {
        Self {
            tree,
            table: TableAdapter::from_handle(ViewHandle::new(ViewRef::Tree(tree), changes)),
        }
    }

    /// The grid view of this tree, rows being visible positions.
    pub fn as_table(&self) -> &TableAdapter<'a> {
        &self.table
    }

    pub fn handle(&self) -> ViewHandle<'a> {
        self.table.handle()
    }

    pub fn role(&self) -> AccessibleRole {
        AccessibleRole::Tree
    }

    /// The model index shown at a visible row and column.
    pub fn index_from_logical(&self, row: usize, column: usize) -> ModelIndex {
        visible_index(self.tree, row, column)
    }

    /// Number of visible rows.
    pub fn row_count(&self) -> usize {
        self.tree.visible_rows().len()
    }

    pub fn column_count(&self) -> usize {
        self.table.column_count()
    }

    /// Number of children: `(visible rows + h) * columns`.
    pub fn child_count(&self) -> usize {
        self.table.child_count()
    }

    pub fn try_cell_at(&self, row: usize, column: usize) -> AccessResult<CellObject<'a>> {
        self.table.try_cell_at(row, column)
    }

    pub fn cell_at(&self, row: usize, column: usize) -> Option<CellObject<'a>> {
        self.table.cell_at(row, column)
    }

    pub fn child(&self, index: usize) -> Option<AccessibleItem<'a>> {
        self.table.child(index)
    }

    pub fn child_at(&self, x: f32, y: f32) -> Option<AccessibleItem<'a>> {
        self.table.child_at(x, y)
    }

    pub fn index_of_child(&self, item: &AccessibleItem<'_>) -> Option<usize> {
        self.table.index_of_child(item)
    }

    pub fn try_index_of_child(&self, item: &AccessibleItem<'_>) -> AccessResult<usize> {
        self.table.try_index_of_child(item)
    }

    /// Trees have no row headers.
    pub fn row_description(&self, _row: usize) -> String {
        String::new()
    }

    pub fn column_description(&self, column: usize) -> String {
        self.table.column_description(column)
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn selected_cells(&self) -> Vec<CellObject<'a>> {
        self.table.selected_cells()
    }

    /// Visible positions of the fully selected rows, in selection order.
    pub fn selected_rows(&self) -> Vec<usize> {
        self.table.selected_rows()
    }

    pub fn selected_columns(&self) -> Vec<usize> {
        self.table.selected_columns()
    }

    pub fn selected_cell_count(&self) -> usize {
        self.table.selected_cell_count()
    }

    pub fn selected_row_count(&self) -> usize {
        self.table.selected_row_count()
    }

    pub fn selected_column_count(&self) -> usize {
        self.table.selected_column_count()
    }

    pub fn is_row_selected(&self, row: usize) -> bool {
        self.table.is_row_selected(row)
    }

    pub fn is_column_selected(&self, column: usize) -> bool {
        self.table.is_column_selected(column)
    }

    pub fn select_row(&self, row: usize) -> AccessResult<()> {
        self.table.select_row(row)
    }

    pub fn unselect_row(&self, row: usize) -> AccessResult<()> {
        self.table.unselect_row(row)
    }

    pub fn select_column(&self, column: usize) -> AccessResult<()> {
        self.table.select_column(column)
    }

    pub fn unselect_column(&self, column: usize) -> AccessResult<()> {
        self.table.unselect_column(column)
    }

    // =========================================================================
    // Structural Changes
    // =========================================================================

    pub fn rows_inserted(&self, first: usize, last: usize) {
        self.table.rows_inserted(first, last);
    }

    pub fn rows_removed(&self, first: usize, last: usize) {
        self.table.rows_removed(first, last);
    }

    pub fn columns_inserted(&self, first: usize, last: usize) {
        self.table.columns_inserted(first, last);
    }

    pub fn columns_removed(&self, first: usize, last: usize) {
        self.table.columns_removed(first, last);
    }

    pub fn rows_moved(&self, first: usize, last: usize) {
        self.table.rows_moved(first, last);
    }

    pub fn columns_moved(&self, first: usize, last: usize) {
        self.table.columns_moved(first, last);
    }

    pub fn model_change(&self) -> TableModelChange {
        self.table.model_change()
    }

    // =========================================================================
    // Object Queries
    // =========================================================================

    pub fn text(&self, kind: TextKind) -> String {
        self.table.text(kind)
    }

    pub fn rect(&self) -> Rect {
        self.table.rect()
    }

    pub fn state(&self) -> AccessibleState {
        self.table.state()
    }

    pub fn navigate(&self, relation: Relation, index: usize) -> Option<AccessibleObject<'a>> {
        self.table.navigate(relation, index)
    }

    /// The view itself is unrelated to everything; item relations are
    /// answered by [`CellObject::relation_to`].
    pub fn relation_to(&self, _other: &AccessibleItem<'_>) -> Relationship {
        Relationship::Unrelated
    }
}

impl std::fmt::Debug for TreeAdapter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeAdapter")
            .field("visible_rows", &self.row_count())
            .field("columns", &self.column_count())
            .finish()
    }
}
