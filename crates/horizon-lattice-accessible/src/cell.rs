//! Accessible objects for the cells of an item view.
//!
//! Three kinds of objects live inside a view:
//!
//! - [`CellObject`]: a data cell, list item or tree item
//! - [`HeaderCellObject`]: one section of the row or column header
//! - [`CornerButton`]: the button where both header strips meet
//!
//! They are cheap values rebuilt for every query and must be discarded once
//! the view's structure changes.

use horizon_lattice_itemview::geometry::Rect;
use horizon_lattice_itemview::model::{
    CheckState, ItemData, ItemRole, ModelIndex, Orientation, SelectionMode,
};

use crate::error::{AccessError, AccessResult};
use crate::header::HeaderLocator;
use crate::identity::CellIdentity;
use crate::item::{AccessibleItem, AccessibleObject};
use crate::relation::{Relation, Relationship};
use crate::role::{AccessibleRole, TextKind};
use crate::state::AccessibleState;
use crate::targets;
use crate::view::{ViewHandle, global_view_rect, map_rect_to_global};

/// Position and extent of a cell within its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowColumnExtents {
    pub row: usize,
    pub column: usize,
    pub row_extent: usize,
    pub column_extent: usize,
    pub selected: bool,
}

// =============================================================================
// CellObject
// =============================================================================

/// A data cell, list item or tree item.
#[derive(Clone, Debug)]
pub struct CellObject<'a> {
    handle: ViewHandle<'a>,
    index: ModelIndex,
    role: AccessibleRole,
}

impl<'a> CellObject<'a> {
    pub(crate) fn new(handle: ViewHandle<'a>, index: ModelIndex, role: AccessibleRole) -> Self {
        Self {
            handle,
            index,
            role,
        }
    }

    pub fn role(&self) -> AccessibleRole {
        self.role
    }

    /// The model index behind the cell.
    pub fn index(&self) -> &ModelIndex {
        &self.index
    }

    pub fn handle(&self) -> ViewHandle<'a> {
        self.handle
    }

    /// Returns the requested text of the cell.
    ///
    /// Name and value prefer the accessible text and fall back to the display
    /// text when it is empty.
    pub fn text(&self, kind: TextKind) -> String {
        let model = self.handle.items().model();
        match kind {
            TextKind::Name | TextKind::Value => {
                let text = model.data(&self.index, ItemRole::AccessibleText).to_text();
                if text.is_empty() {
                    model.data(&self.index, ItemRole::Display).to_text()
                } else {
                    text
                }
            }
            TextKind::Description => model
                .data(&self.index, ItemRole::AccessibleDescription)
                .to_text(),
        }
    }

    /// Writes new display text into the model.
    ///
    /// Fails without touching the model unless the cell is editable.
    pub fn set_text(&self, value: &str) -> AccessResult<()> {
        let model = self.handle.items().model();
        let not_editable = AccessError::NotEditable {
            row: self.index.row(),
            column: self.index.column(),
        };
        if !model.flags(&self.index).editable {
            return Err(not_editable);
        }
        if model.set_data(&self.index, ItemData::from(value), ItemRole::Display) {
            Ok(())
        } else {
            tracing::warn!(
                target: targets::CELL,
                row = self.index.row(),
                column = self.index.column(),
                "model rejected edit"
            );
            Err(not_editable)
        }
    }

    /// The cell's rectangle in global coordinates.
    ///
    /// Empty while the view is hidden or the cell has no geometry.
    pub fn rect(&self) -> Rect {
        let view = self.handle.items();
        if !view.is_visible() {
            return Rect::ZERO;
        }
        match view.visual_rect(&self.index) {
            Some(rect) => map_rect_to_global(view, rect.translate(view.viewport_offset())),
            None => Rect::ZERO,
        }
    }

    pub fn state(&self) -> AccessibleState {
        let view = self.handle.items();
        let model = view.model();
        let mut state = AccessibleState::empty();

        if !self.rect().intersects(&global_view_rect(view)) {
            state |= AccessibleState::INVISIBLE;
        }
        if view.is_selected(&self.index) {
            state |= AccessibleState::SELECTED;
        }
        if view.current_index() == self.index {
            state |= AccessibleState::FOCUSED;
        }
        if model.check_state(&self.index) == Some(CheckState::Checked) {
            state |= AccessibleState::CHECKED;
        }
        if model.flags(&self.index).selectable {
            state |= AccessibleState::SELECTABLE | AccessibleState::FOCUSABLE;
            match view.selection_mode() {
                SelectionMode::MultiSelection => state |= AccessibleState::MULTI_SELECTABLE,
                SelectionMode::ExtendedSelection => state |= AccessibleState::EXTENDED_SELECTABLE,
                SelectionMode::NoSelection | SelectionMode::SingleSelection => {}
            }
        }
        if self.role == AccessibleRole::TreeItem {
            if model.has_children(&self.index) {
                state |= AccessibleState::EXPANDABLE;
            }
            if self
                .handle
                .view()
                .tree()
                .is_some_and(|tree| tree.is_expanded(&self.index))
            {
                state |= AccessibleState::EXPANDED;
            }
        }
        state
    }

    pub fn is_selected(&self) -> bool {
        self.handle.items().is_selected(&self.index)
    }

    /// The owning table or tree.
    pub fn parent(&self) -> AccessibleObject<'a> {
        AccessibleObject::owner(self.handle)
    }

    /// The row as seen by accessibility clients.
    ///
    /// Tree items report their visible position; `None` if the item is
    /// currently not shown.
    pub fn row_index(&self) -> Option<usize> {
        match self.handle.view().tree() {
            Some(tree) => tree.visible_rows().position_of(&self.index),
            None => Some(self.index.row()),
        }
    }

    pub fn column_index(&self) -> usize {
        self.index.column()
    }

    pub fn row_extent(&self) -> usize {
        1
    }

    pub fn column_extent(&self) -> usize {
        1
    }

    /// Row, column, extents and selection in one query.
    pub fn row_column_extents(&self) -> Option<RowColumnExtents> {
        Some(RowColumnExtents {
            row: self.row_index()?,
            column: self.column_index(),
            row_extent: self.row_extent(),
            column_extent: self.column_extent(),
            selected: self.is_selected(),
        })
    }

    /// The cell's identity in its view's flat child space.
    pub fn identity(&self) -> Option<CellIdentity> {
        Some(CellIdentity::cell(self.row_index()?, self.column_index()))
    }

    /// The header in front of the cell's row, if the view shows one.
    pub fn row_header_cells(&self) -> Vec<HeaderCellObject<'a>> {
        let headers = HeaderLocator::new(self.handle.view());
        if headers.has_row_header() {
            vec![HeaderCellObject::new(self.handle, self.index.row(), Orientation::Vertical)]
        } else {
            Vec::new()
        }
    }

    /// The header above the cell's column, if the view shows one.
    pub fn column_header_cells(&self) -> Vec<HeaderCellObject<'a>> {
        let headers = HeaderLocator::new(self.handle.view());
        if headers.has_column_header() {
            vec![HeaderCellObject::new(
                self.handle,
                self.index.column(),
                Orientation::Horizontal,
            )]
        } else {
            Vec::new()
        }
    }

    /// Follows a relation from this cell.
    ///
    /// `Sibling` uses the parent's one-based flat indices; the directional
    /// relations move to the adjacent data cell.
    pub fn navigate(&self, relation: Relation, index: usize) -> Option<AccessibleObject<'a>> {
        match relation {
            Relation::Ancestor if index == 1 => Some(self.parent()),
            Relation::Ancestor | Relation::Child => None,
            Relation::Sibling => self.parent().child(index).map(AccessibleObject::Item),
            Relation::Up | Relation::Down | Relation::Left | Relation::Right => self
                .neighbour(relation)
                .map(|cell| AccessibleObject::Item(AccessibleItem::Cell(cell))),
        }
    }

    fn neighbour(&self, relation: Relation) -> Option<CellObject<'a>> {
        let row = self.row_index()?;
        let column = self.column_index();
        let (row, column) = match relation {
            Relation::Up => (row.checked_sub(1)?, column),
            Relation::Down => (row + 1, column),
            Relation::Left => (row, column.checked_sub(1)?),
            Relation::Right => (row, column + 1),
            _ => return None,
        };
        self.parent().try_cell_at(row, column).ok()
    }

    /// Classifies the relation between two tree items.
    ///
    /// A tree item is the `Ancestor` of the items whose parent it is, and a
    /// `Child` of its own parent. Everything else is unrelated.
    pub fn relation_to(&self, other: &AccessibleItem<'_>) -> Relationship {
        let AccessibleItem::Cell(other) = other else {
            return Relationship::Unrelated;
        };
        if self.role != AccessibleRole::TreeItem
            || other.role != AccessibleRole::TreeItem
            || !self.handle.same_view(&other.handle)
        {
            return Relationship::Unrelated;
        }
        if other.index.parent() == self.index {
            Relationship::Ancestor
        } else if self.index.parent() == other.index {
            Relationship::Child
        } else {
            Relationship::Unrelated
        }
    }
}

// =============================================================================
// HeaderCellObject
// =============================================================================

/// One section of a row or column header.
#[derive(Clone, Copy, Debug)]
pub struct HeaderCellObject<'a> {
    handle: ViewHandle<'a>,
    section: usize,
    orientation: Orientation,
}

impl<'a> HeaderCellObject<'a> {
    pub(crate) fn new(handle: ViewHandle<'a>, section: usize, orientation: Orientation) -> Self {
        Self {
            handle,
            section,
            orientation,
        }
    }

    pub fn handle(&self) -> ViewHandle<'a> {
        self.handle
    }

    pub fn section(&self) -> usize {
        self.section
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn role(&self) -> AccessibleRole {
        match self.orientation {
            Orientation::Horizontal => AccessibleRole::ColumnHeader,
            Orientation::Vertical => AccessibleRole::RowHeader,
        }
    }

    pub fn identity(&self) -> CellIdentity {
        match self.orientation {
            Orientation::Horizontal => CellIdentity::ColumnHeader(self.section),
            Orientation::Vertical => CellIdentity::RowHeader(self.section),
        }
    }

    pub fn text(&self, kind: TextKind) -> String {
        let model = self.handle.items().model();
        let header = |role| model.header_data(self.section, self.orientation, role).to_text();
        match kind {
            TextKind::Name | TextKind::Value => {
                let text = header(ItemRole::AccessibleText);
                if text.is_empty() {
                    header(ItemRole::Display)
                } else {
                    text
                }
            }
            TextKind::Description => header(ItemRole::AccessibleDescription),
        }
    }

    /// Headers are read-only.
    pub fn set_text(&self, _value: &str) -> AccessResult<()> {
        Err(AccessError::ReadOnly)
    }

    pub fn rect(&self) -> Rect {
        let view = self.handle.items();
        if !view.is_visible() {
            return Rect::ZERO;
        }
        view.header_section_rect(self.section, self.orientation)
            .map(|rect| map_rect_to_global(view, rect))
            .unwrap_or(Rect::ZERO)
    }

    pub fn state(&self) -> AccessibleState {
        AccessibleState::empty()
    }

    pub fn parent(&self) -> AccessibleObject<'a> {
        AccessibleObject::owner(self.handle)
    }

    pub fn navigate(&self, relation: Relation, index: usize) -> Option<AccessibleObject<'a>> {
        match relation {
            Relation::Ancestor if index == 1 => Some(self.parent()),
            _ => None,
        }
    }
}

// =============================================================================
// CornerButton
// =============================================================================

/// The button in the top-left corner of a table with both headers.
#[derive(Clone, Copy, Debug)]
pub struct CornerButton<'a> {
    handle: ViewHandle<'a>,
}

impl<'a> CornerButton<'a> {
    pub(crate) fn new(handle: ViewHandle<'a>) -> Self {
        Self { handle }
    }

    pub fn handle(&self) -> ViewHandle<'a> {
        self.handle
    }

    pub fn role(&self) -> AccessibleRole {
        AccessibleRole::Pane
    }

    pub fn text(&self, _kind: TextKind) -> String {
        String::new()
    }

    /// The area left of the column header and above the row header.
    pub fn rect(&self) -> Rect {
        let view = self.handle.items();
        let corner = view.viewport_offset();
        if !view.is_visible() || corner.x <= 0.0 || corner.y <= 0.0 {
            return Rect::ZERO;
        }
        map_rect_to_global(view, Rect::new(0.0, 0.0, corner.x, corner.y))
    }

    pub fn state(&self) -> AccessibleState {
        AccessibleState::empty()
    }

    pub fn parent(&self) -> AccessibleObject<'a> {
        AccessibleObject::owner(self.handle)
    }

    pub fn navigate(&self, relation: Relation, index: usize) -> Option<AccessibleObject<'a>> {
        match relation {
            Relation::Ancestor if index == 1 => Some(self.parent()),
            _ => None,
        }
    }
}
