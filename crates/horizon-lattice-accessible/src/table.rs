//! Accessibility adapter for grid-shaped views.
//!
//! [`TableAdapter`] exposes a table or list through flat, one-based child
//! indices: the corner button (when both headers are shown), then the column
//! headers, then each row's header followed by its data cells.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_lattice_accessible::{AccessibleRole, ChangeTracker, TableAdapter};
//! use horizon_lattice_accessible::host::StandardTableView;
//! use horizon_lattice_itemview::model::TableModel;
//!
//! let model = Arc::new(
//!     TableModel::from_display(vec![vec!["a", "b"], vec!["c", "d"]])
//!         .with_column_headers(["First", "Second"]),
//! );
//! let view = StandardTableView::new(model).with_row_header(false);
//! let changes = ChangeTracker::new();
//! let table = TableAdapter::new(&view, &changes);
//!
//! assert_eq!(table.child_count(), 6);
//! assert_eq!(table.child(1).unwrap().role(), AccessibleRole::ColumnHeader);
//! assert_eq!(table.child(3).unwrap().role(), AccessibleRole::Cell);
//! ```

use horizon_lattice_itemview::geometry::{Point, Rect};
use horizon_lattice_itemview::model::{
    ItemRole, ModelIndex, Orientation, SelectionFlags, SelectionMode,
};

use crate::cell::{CellObject, CornerButton, HeaderCellObject};
use crate::change::{ChangeTracker, TableModelChange};
use crate::error::{AccessError, AccessResult};
use crate::header::HeaderLocator;
use crate::identity::CellIdentity;
use crate::item::{AccessibleItem, AccessibleObject};
use crate::mapper::LinearIndexMapper;
use crate::relation::{Relation, Relationship};
use crate::role::{AccessibleRole, TextKind};
use crate::state::AccessibleState;
use crate::targets;
use crate::tree::visible_index;
use crate::view::{ItemView, ViewHandle, ViewKind, ViewRef, global_view_rect};

/// Exposes a table or list view to accessibility clients.
///
/// The adapter borrows the view and its change tracker for the duration of
/// one query round-trip. Build a new one after every structural change.
#[derive(Clone, Copy, Debug)]
pub struct TableAdapter<'a> {
    handle: ViewHandle<'a>,
}

impl<'a> TableAdapter<'a> {
    pub fn new(view: &'a dyn ItemView, changes: &'a ChangeTracker) -> Self {
        Self::from_handle(ViewHandle::new(ViewRef::Items(view), changes))
    }

    pub(crate) fn from_handle(handle: ViewHandle<'a>) -> Self {
        Self { handle }
    }

    pub fn handle(&self) -> ViewHandle<'a> {
        self.handle
    }

    pub fn view(&self) -> &'a dyn ItemView {
        self.handle.items()
    }

    /// Header presence of the view, evaluated on every call.
    pub fn headers(&self) -> HeaderLocator<'a> {
        HeaderLocator::new(self.handle.view())
    }

    /// Index mapping for the view's current shape.
    pub fn mapper(&self) -> LinearIndexMapper {
        LinearIndexMapper::with_headers(self.row_count(), self.column_count(), &self.headers())
    }

    pub fn role(&self) -> AccessibleRole {
        match self.handle.view() {
            ViewRef::Tree(_) => AccessibleRole::Tree,
            ViewRef::Items(view) => match view.kind() {
                ViewKind::List => AccessibleRole::List,
                ViewKind::Table | ViewKind::Tree => AccessibleRole::Table,
            },
        }
    }

    /// Role of the data items of this view.
    pub(crate) fn item_role(&self) -> AccessibleRole {
        match self.handle.view() {
            ViewRef::Tree(_) => AccessibleRole::TreeItem,
            ViewRef::Items(view) => match view.kind() {
                ViewKind::List => AccessibleRole::ListItem,
                ViewKind::Table | ViewKind::Tree => AccessibleRole::Cell,
            },
        }
    }

    // =========================================================================
    // Dimensions
    // =========================================================================

    pub fn row_count(&self) -> usize {
        match self.handle.view() {
            ViewRef::Tree(tree) => tree.visible_rows().len(),
            ViewRef::Items(view) => view.model().row_count(&ModelIndex::invalid()),
        }
    }

    pub fn column_count(&self) -> usize {
        self.view().model().column_count(&ModelIndex::invalid())
    }

    /// Number of children: `(rows + h) * (columns + v)`.
    pub fn child_count(&self) -> usize {
        self.mapper().child_count()
    }

    /// Resolves a row and column to a model index; trees go through their
    /// visible rows.
    pub(crate) fn model_index(&self, row: usize, column: usize) -> ModelIndex {
        match self.handle.view() {
            ViewRef::Tree(tree) => visible_index(tree, row, column),
            ViewRef::Items(view) => view.model().index(row, column, &ModelIndex::invalid()),
        }
    }

    /// The data cell identity of a model index shown by this view.
    pub(crate) fn identity_of(&self, index: &ModelIndex) -> Option<CellIdentity> {
        if !index.is_valid() {
            return None;
        }
        match self.handle.view() {
            ViewRef::Tree(tree) => tree
                .visible_rows()
                .position_of(index)
                .map(|row| CellIdentity::cell(row, index.column())),
            ViewRef::Items(_) if index.has_parent() => None,
            ViewRef::Items(_) => Some(CellIdentity::cell(index.row(), index.column())),
        }
    }

    fn cell_for_index(&self, index: ModelIndex) -> CellObject<'a> {
        CellObject::new(self.handle, index, self.item_role())
    }

    // =========================================================================
    // Cells
    // =========================================================================

    /// The data cell at `(row, column)`.
    pub fn try_cell_at(&self, row: usize, column: usize) -> AccessResult<CellObject<'a>> {
        let index = self.model_index(row, column);
        if !index.is_valid() {
            return Err(AccessError::InvalidCell {
                row,
                column,
                rows: self.row_count(),
                columns: self.column_count(),
            });
        }
        Ok(self.cell_for_index(index))
    }

    /// The data cell at `(row, column)`, or `None` with a warning when the
    /// coordinate lies outside the view.
    pub fn cell_at(&self, row: usize, column: usize) -> Option<CellObject<'a>> {
        match self.try_cell_at(row, column) {
            Ok(cell) => Some(cell),
            Err(error) => {
                tracing::warn!(
                    target: targets::ADAPTER,
                    %error,
                    "cell_at called with an invalid coordinate"
                );
                None
            }
        }
    }

    /// The header label of a row, or an empty string.
    pub fn row_description(&self, row: usize) -> String {
        self.view()
            .model()
            .header_data(row, Orientation::Vertical, ItemRole::Display)
            .to_text()
    }

    /// The header label of a column, or an empty string.
    pub fn column_description(&self, column: usize) -> String {
        self.view()
            .model()
            .header_data(column, Orientation::Horizontal, ItemRole::Display)
            .to_text()
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn selected_cell_count(&self) -> usize {
        self.view().selected_indexes().len()
    }

    pub fn selected_row_count(&self) -> usize {
        self.view().selected_rows().len()
    }

    pub fn selected_column_count(&self) -> usize {
        self.selected_columns().len()
    }

    /// Selected cells in selection order.
    pub fn selected_cells(&self) -> Vec<CellObject<'a>> {
        self.view()
            .selected_indexes()
            .into_iter()
            .map(|index| self.cell_for_index(index))
            .collect()
    }

    /// Fully selected rows in selection order.
    pub fn selected_rows(&self) -> Vec<usize> {
        self.view()
            .selected_rows()
            .iter()
            .filter_map(|index| self.identity_of(index))
            .filter_map(|identity| identity.row())
            .collect()
    }

    /// Fully selected columns in selection order.
    ///
    /// Only top-level columns count, matching [`is_column_selected`]; a
    /// column filled under one tree parent is not selected.
    ///
    /// [`is_column_selected`]: Self::is_column_selected
    pub fn selected_columns(&self) -> Vec<usize> {
        let mut columns: Vec<usize> = Vec::new();
        for index in self.view().selected_columns() {
            let column = index.column();
            if !columns.contains(&column) && self.is_column_selected(column) {
                columns.push(column);
            }
        }
        columns
    }

    pub fn is_row_selected(&self, row: usize) -> bool {
        let index = self.model_index(row, 0);
        index.is_valid() && self.view().is_row_selected(index.row(), &index.parent())
    }

    pub fn is_column_selected(&self, column: usize) -> bool {
        column < self.column_count()
            && self.view().is_column_selected(column, &ModelIndex::invalid())
    }

    /// Selects every cell of a row.
    pub fn select_row(&self, row: usize) -> AccessResult<()> {
        let index = self.row_anchor(row)?;
        self.view().select(&index, SelectionFlags::SELECT.with_rows());
        tracing::debug!(target: targets::SELECTION, row, "row selected");
        Ok(())
    }

    /// Deselects every cell of a row.
    pub fn unselect_row(&self, row: usize) -> AccessResult<()> {
        let index = self.row_anchor(row)?;
        self.view().select(&index, SelectionFlags::DESELECT.with_rows());
        tracing::debug!(target: targets::SELECTION, row, "row deselected");
        Ok(())
    }

    /// Selects every cell of a column.
    pub fn select_column(&self, column: usize) -> AccessResult<()> {
        let index = self.column_anchor(column)?;
        self.view().select(&index, SelectionFlags::SELECT.with_columns());
        tracing::debug!(target: targets::SELECTION, column, "column selected");
        Ok(())
    }

    /// Deselects every cell of a column.
    pub fn unselect_column(&self, column: usize) -> AccessResult<()> {
        let index = self.column_anchor(column)?;
        self.view().select(&index, SelectionFlags::DESELECT.with_columns());
        tracing::debug!(target: targets::SELECTION, column, "column deselected");
        Ok(())
    }

    fn ensure_selectable(&self) -> AccessResult<()> {
        if self.view().selection_mode() == SelectionMode::NoSelection {
            Err(AccessError::SelectionDisabled)
        } else {
            Ok(())
        }
    }

    fn row_anchor(&self, row: usize) -> AccessResult<ModelIndex> {
        self.ensure_selectable()?;
        let index = self.model_index(row, 0);
        if index.is_valid() {
            Ok(index)
        } else {
            Err(AccessError::InvalidRow {
                row,
                rows: self.row_count(),
            })
        }
    }

    fn column_anchor(&self, column: usize) -> AccessResult<ModelIndex> {
        self.ensure_selectable()?;
        let index = self.model_index(0, column);
        if index.is_valid() {
            Ok(index)
        } else {
            Err(AccessError::InvalidColumn {
                column,
                columns: self.column_count(),
            })
        }
    }

    // =========================================================================
    // Children
    // =========================================================================

    /// The child at a one-based flat index.
    pub fn child(&self, index: usize) -> Option<AccessibleItem<'a>> {
        let identity = self.mapper().to_identity(index)?;
        self.item_for_identity(identity)
    }

    /// Builds the object for an identity of this view.
    pub fn item_for_identity(&self, identity: CellIdentity) -> Option<AccessibleItem<'a>> {
        if !self.mapper().contains(&identity) {
            return None;
        }
        let item = match identity {
            CellIdentity::DataCell { row, column } => {
                AccessibleItem::Cell(self.try_cell_at(row, column).ok()?)
            }
            CellIdentity::ColumnHeader(column) => AccessibleItem::Header(HeaderCellObject::new(
                self.handle,
                column,
                Orientation::Horizontal,
            )),
            CellIdentity::RowHeader(row) => AccessibleItem::Header(HeaderCellObject::new(
                self.handle,
                row,
                Orientation::Vertical,
            )),
            CellIdentity::Corner => AccessibleItem::Corner(CornerButton::new(self.handle)),
        };
        Some(item)
    }

    /// The one-based flat index of a child of this view.
    pub fn try_index_of_child(&self, item: &AccessibleItem<'_>) -> AccessResult<usize> {
        if !item.handle().same_view(&self.handle) {
            return Err(AccessError::ForeignChild("object belongs to another view".into()));
        }
        if let AccessibleItem::Cell(cell) = item {
            if cell.role() != self.item_role() {
                return Err(AccessError::ForeignChild(format!(
                    "{:?} item in a {:?} view",
                    cell.role(),
                    self.role()
                )));
            }
        }
        let identity = item
            .identity()
            .ok_or_else(|| AccessError::ForeignChild("tree item is not visible".into()))?;

        let headers = self.headers();
        self.mapper()
            .to_logical_index(&identity)
            .ok_or_else(|| match identity {
                CellIdentity::ColumnHeader(_) if !headers.has_column_header() => {
                    AccessError::MissingHeader("column")
                }
                CellIdentity::RowHeader(_) if !headers.has_row_header() => {
                    AccessError::MissingHeader("row")
                }
                CellIdentity::Corner => AccessError::MissingHeader("row or column"),
                other => AccessError::ForeignChild(format!("{other:?} is outside the view")),
            })
    }

    /// The one-based flat index of a child, or `None` with a warning when the
    /// object isn't a child of this view.
    pub fn index_of_child(&self, item: &AccessibleItem<'_>) -> Option<usize> {
        match self.try_index_of_child(item) {
            Ok(index) => Some(index),
            Err(error) => {
                tracing::warn!(
                    target: targets::ADAPTER,
                    %error,
                    "index_of_child called with a foreign object"
                );
                None
            }
        }
    }

    /// The child under a point in global coordinates.
    pub fn child_at(&self, x: f32, y: f32) -> Option<AccessibleItem<'a>> {
        let view = self.view();
        if !view.is_visible() {
            return None;
        }
        let point = view.map_from_global(Point::new(x, y));
        if !Rect::from_origin_size(Point::ZERO, view.size()).contains(point) {
            return None;
        }

        let offset = view.viewport_offset();
        if point.x >= offset.x && point.y >= offset.y {
            let index = view.index_at(point - offset);
            let identity = self.identity_of(&index)?;
            return self.item_for_identity(identity);
        }
        self.header_at(point, offset)
    }

    fn header_at(&self, point: Point, offset: Point) -> Option<AccessibleItem<'a>> {
        let headers = self.headers();
        let in_column_strip = point.y < offset.y;
        let in_row_strip = point.x < offset.x;

        if in_column_strip && in_row_strip {
            return (headers.has_row_header() && headers.has_column_header())
                .then(|| AccessibleItem::Corner(CornerButton::new(self.handle)));
        }
        let (orientation, sections) = if in_column_strip && headers.has_column_header() {
            (Orientation::Horizontal, self.column_count())
        } else if in_row_strip && headers.has_row_header() {
            (Orientation::Vertical, self.row_count())
        } else {
            return None;
        };
        (0..sections)
            .find(|&section| {
                self.view()
                    .header_section_rect(section, orientation)
                    .is_some_and(|rect| rect.contains(point))
            })
            .map(|section| {
                AccessibleItem::Header(HeaderCellObject::new(self.handle, section, orientation))
            })
    }

    // =========================================================================
    // Structural Changes
    // =========================================================================

    pub fn rows_inserted(&self, first: usize, last: usize) {
        self.handle.changes().rows_inserted(first, last);
    }

    pub fn rows_removed(&self, first: usize, last: usize) {
        self.handle.changes().rows_removed(first, last);
    }

    pub fn columns_inserted(&self, first: usize, last: usize) {
        self.handle.changes().columns_inserted(first, last);
    }

    pub fn columns_removed(&self, first: usize, last: usize) {
        self.handle.changes().columns_removed(first, last);
    }

    /// Records moved rows as an update over the whole view.
    pub fn rows_moved(&self, first: usize, last: usize) {
        tracing::debug!(target: targets::CHANGES, first, last, "rows moved");
        self.handle
            .changes()
            .reordered(self.row_count(), self.column_count());
    }

    /// Records moved columns as an update over the whole view.
    pub fn columns_moved(&self, first: usize, last: usize) {
        tracing::debug!(target: targets::CHANGES, first, last, "columns moved");
        self.handle
            .changes()
            .reordered(self.row_count(), self.column_count());
    }

    /// The most recent structural change, or the default record.
    pub fn model_change(&self) -> TableModelChange {
        self.handle.changes().latest()
    }

    // =========================================================================
    // Object Queries
    // =========================================================================

    pub fn text(&self, kind: TextKind) -> String {
        let view = self.view();
        match kind {
            TextKind::Name => view.accessible_name().unwrap_or_default(),
            TextKind::Description => view.accessible_description().unwrap_or_default(),
            TextKind::Value => String::new(),
        }
    }

    /// The view's rectangle in global coordinates, empty while hidden.
    pub fn rect(&self) -> Rect {
        global_view_rect(self.view())
    }

    pub fn state(&self) -> AccessibleState {
        AccessibleState::empty()
    }

    pub fn caption(&self) -> Option<AccessibleItem<'a>> {
        None
    }

    pub fn summary(&self) -> Option<AccessibleItem<'a>> {
        None
    }

    /// Follows a relation from the view; only `Child` is supported.
    pub fn navigate(&self, relation: Relation, index: usize) -> Option<AccessibleObject<'a>> {
        match relation {
            Relation::Child => self.child(index).map(AccessibleObject::Item),
            _ => None,
        }
    }

    pub fn relation_to(&self, _other: &AccessibleItem<'_>) -> Relationship {
        Relationship::Unrelated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StandardTableView;
    use horizon_lattice_itemview::model::TableModel;
    use std::sync::Arc;

    fn grid_view(rows: usize, columns: usize) -> StandardTableView {
        let data = (0..rows)
            .map(|row| (0..columns).map(|column| format!("{row}:{column}")).collect())
            .collect();
        StandardTableView::new(Arc::new(TableModel::from_display(data)))
    }

    #[test]
    fn test_child_order_with_both_headers() {
        let view = grid_view(3, 2);
        let changes = ChangeTracker::new();
        let table = TableAdapter::new(&view, &changes);

        assert_eq!(table.child_count(), 12);
        assert_eq!(table.child(1).unwrap().role(), AccessibleRole::Pane);
        assert_eq!(table.child(2).unwrap().identity(), Some(CellIdentity::ColumnHeader(0)));
        assert_eq!(table.child(3).unwrap().identity(), Some(CellIdentity::ColumnHeader(1)));
        assert_eq!(table.child(4).unwrap().identity(), Some(CellIdentity::RowHeader(0)));
        assert_eq!(table.child(5).unwrap().text(TextKind::Name), "0:0");
        assert_eq!(table.child(6).unwrap().text(TextKind::Name), "0:1");
        assert!(table.child(0).is_none());
        assert!(table.child(13).is_none());
    }

    #[test]
    fn test_index_of_child_inverts_child() {
        let view = grid_view(3, 2);
        let changes = ChangeTracker::new();
        let table = TableAdapter::new(&view, &changes);

        for index in 1..=table.child_count() {
            let item = table.child(index).unwrap();
            assert_eq!(table.index_of_child(&item), Some(index));
        }
    }

    #[test]
    fn test_headers_follow_view_configuration() {
        let view = grid_view(2, 2).with_row_header(false);
        let changes = ChangeTracker::new();
        let table = TableAdapter::new(&view, &changes);

        assert_eq!(table.child_count(), 6);
        let corner = AccessibleItem::Corner(CornerButton::new(table.handle()));
        assert_eq!(
            table.try_index_of_child(&corner),
            Err(AccessError::MissingHeader("row or column"))
        );
    }

    #[test]
    fn test_list_view_roles() {
        let view = grid_view(3, 1).with_kind(ViewKind::List);
        let changes = ChangeTracker::new();
        let list = TableAdapter::new(&view, &changes);

        assert_eq!(list.role(), AccessibleRole::List);
        assert_eq!(list.child_count(), 3);
        assert_eq!(list.child(2).unwrap().role(), AccessibleRole::ListItem);
    }
}
