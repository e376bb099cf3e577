use std::collections::HashSet;
use std::sync::Arc;

use horizon_lattice_itemview::geometry::{Point, Rect, Size};
use horizon_lattice_itemview::model::{
    ItemModel, ModelIndex, Orientation, SelectionFlags, SelectionMode,
};

use super::{ViewCore, ViewLayout};
use crate::change::ChangeTracker;
use crate::tree::{TreeAdapter, visible_index};
use crate::view::{ItemView, TreeItemView, ViewKind, VisibleRowList, VisibleRows};

/// A tree view over a hierarchical [`ItemModel`].
///
/// Expansion state is keyed by [`ModelIndex::internal_id`], so the model
/// must give every node a unique, stable internal id (as
/// [`TreeModel`](horizon_lattice_itemview::model::TreeModel) does). Trees
/// show an optional column header and never a row header.
///
/// The visible rows are rebuilt on every expand or collapse; after changing
/// the model's structure call [`refresh`](Self::refresh).
pub struct StandardTreeView {
    core: ViewCore,
    column_header: bool,
    indentation: f32,
    expanded: HashSet<u64>,
    rows: VisibleRowList,
}

impl StandardTreeView {
    pub fn new(model: Arc<dyn ItemModel>) -> Self {
        let mut view = Self {
            core: ViewCore::new(model),
            column_header: true,
            indentation: 20.0,
            expanded: HashSet::new(),
            rows: VisibleRowList::new(),
        };
        view.refresh();
        view
    }

    // =========================================================================
    // Builder Pattern
    // =========================================================================

    pub fn with_column_header(mut self, shown: bool) -> Self {
        self.column_header = shown;
        self
    }

    pub fn with_indentation(mut self, indentation: f32) -> Self {
        self.indentation = indentation;
        self
    }

    pub fn with_selection_mode(self, mode: SelectionMode) -> Self {
        self.core.set_selection_mode(mode);
        self
    }

    pub fn with_layout(mut self, layout: ViewLayout) -> Self {
        self.core.layout = layout;
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.core.layout.size = Size::new(width, height);
        self
    }

    pub fn with_global_origin(mut self, origin: Point) -> Self {
        self.core.layout.global_origin = origin;
        self
    }

    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.core.name = Some(name.into());
        self
    }

    pub fn with_accessible_description(mut self, description: impl Into<String>) -> Self {
        self.core.description = Some(description.into());
        self
    }

    // =========================================================================
    // Expansion
    // =========================================================================

    /// Shows the children of an item. Returns `false` if nothing changed.
    pub fn expand(&mut self, index: &ModelIndex) -> bool {
        let Some(row) = self.row_index(index) else {
            return false;
        };
        if !self.core.model.has_children(&row) || !self.expanded.insert(row.internal_id()) {
            return false;
        }
        self.refresh();
        true
    }

    /// Hides the children of an item. Returns `false` if nothing changed.
    pub fn collapse(&mut self, index: &ModelIndex) -> bool {
        let Some(row) = self.row_index(index) else {
            return false;
        };
        if !self.expanded.remove(&row.internal_id()) {
            return false;
        }
        self.refresh();
        true
    }

    pub fn toggle_expanded(&mut self, index: &ModelIndex) -> bool {
        if self.is_expanded(index) {
            self.collapse(index)
        } else {
            self.expand(index)
        }
    }

    /// Expands every item that has children.
    pub fn expand_all(&mut self) {
        let mut pending = vec![ModelIndex::invalid()];
        while let Some(parent) = pending.pop() {
            for row in 0..self.core.model.row_count(&parent) {
                let index = self.core.model.index(row, 0, &parent);
                if self.core.model.has_children(&index) {
                    self.expanded.insert(index.internal_id());
                    pending.push(index);
                }
            }
        }
        self.refresh();
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
        self.refresh();
    }

    /// Rebuilds the visible rows from the model.
    pub fn refresh(&mut self) {
        let expanded = &self.expanded;
        self.rows = VisibleRowList::from_model(&*self.core.model, |index| {
            expanded.contains(&index.internal_id())
        });
        tracing::trace!(
            target: crate::targets::ADAPTER,
            visible_rows = self.rows.len(),
            "tree rows rebuilt"
        );
    }

    fn row_index(&self, index: &ModelIndex) -> Option<ModelIndex> {
        if !index.is_valid() {
            return None;
        }
        if index.column() == 0 {
            Some(index.clone())
        } else {
            Some(self.core.model.index(index.row(), 0, &index.parent()))
        }
    }

    // =========================================================================
    // State
    // =========================================================================

    pub fn layout(&self) -> &ViewLayout {
        &self.core.layout
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.core.layout.visible = visible;
    }

    pub fn set_scroll_offset(&mut self, scroll: Point) {
        self.core.layout.scroll = scroll;
    }

    pub fn set_selection_mode(&self, mode: SelectionMode) {
        self.core.set_selection_mode(mode);
    }

    pub fn set_current_index(&self, index: ModelIndex) {
        self.core.set_current_index(index);
    }

    pub fn clear_selection(&self) {
        self.core.clear_selection();
    }

    pub fn changes(&self) -> &ChangeTracker {
        &self.core.changes
    }

    /// The accessibility adapter for this view.
    pub fn accessible(&self) -> TreeAdapter<'_> {
        TreeAdapter::new(self, &self.core.changes)
    }

    fn columns(&self) -> usize {
        self.core.model.column_count(&ModelIndex::invalid())
    }
}

impl ItemView for StandardTreeView {
    fn kind(&self) -> ViewKind {
        ViewKind::Tree
    }

    fn model(&self) -> &dyn ItemModel {
        &*self.core.model
    }

    fn has_header(&self, orientation: Orientation) -> bool {
        orientation == Orientation::Horizontal && self.column_header
    }

    fn selection_mode(&self) -> SelectionMode {
        self.core.selection_mode()
    }

    fn selected_indexes(&self) -> Vec<ModelIndex> {
        self.core.selected_indexes()
    }

    fn selected_rows(&self) -> Vec<ModelIndex> {
        self.core.selected_rows()
    }

    fn selected_columns(&self) -> Vec<ModelIndex> {
        self.core.selected_columns()
    }

    fn is_selected(&self, index: &ModelIndex) -> bool {
        self.core.is_selected(index)
    }

    fn is_row_selected(&self, row: usize, parent: &ModelIndex) -> bool {
        self.core.is_row_selected(row, parent)
    }

    fn is_column_selected(&self, column: usize, parent: &ModelIndex) -> bool {
        self.core.is_column_selected(column, parent)
    }

    fn select(&self, index: &ModelIndex, flags: SelectionFlags) {
        self.core.select(index, flags);
    }

    fn current_index(&self) -> ModelIndex {
        self.core.current_index()
    }

    fn is_visible(&self) -> bool {
        self.core.layout.visible
    }

    fn size(&self) -> Size {
        self.core.layout.size
    }

    fn viewport_offset(&self) -> Point {
        self.core.layout.viewport_offset(false, self.column_header)
    }

    fn visual_rect(&self, index: &ModelIndex) -> Option<Rect> {
        if index.column() >= self.columns() {
            return None;
        }
        let position = self.rows.position_of(index)?;
        let rect = self.core.layout.slot_rect(position, index.column());
        if index.column() != 0 {
            return Some(rect);
        }
        let indent = (index.depth() as f32 * self.indentation).min(rect.width());
        Some(Rect::new(
            rect.left() + indent,
            rect.top(),
            rect.width() - indent,
            rect.height(),
        ))
    }

    fn map_to_global(&self, point: Point) -> Point {
        self.core.map_to_global(point)
    }

    fn map_from_global(&self, point: Point) -> Point {
        self.core.map_from_global(point)
    }

    fn index_at(&self, point: Point) -> ModelIndex {
        match self.core.layout.slot_at(point, self.viewport_offset()) {
            Some((row, column)) if column < self.columns() => visible_index(self, row, column),
            _ => ModelIndex::invalid(),
        }
    }

    fn header_section_rect(&self, section: usize, orientation: Orientation) -> Option<Rect> {
        if !self.has_header(orientation) || section >= self.columns() {
            return None;
        }
        let layout = &self.core.layout;
        Some(Rect::new(
            section as f32 * layout.column_width - layout.scroll.x,
            0.0,
            layout.column_width,
            layout.column_header_height,
        ))
    }

    fn accessible_name(&self) -> Option<String> {
        self.core.name.clone()
    }

    fn accessible_description(&self) -> Option<String> {
        self.core.description.clone()
    }
}

impl TreeItemView for StandardTreeView {
    fn visible_rows(&self) -> &dyn VisibleRows {
        &self.rows
    }

    fn is_expanded(&self, index: &ModelIndex) -> bool {
        self.row_index(index)
            .is_some_and(|row| self.expanded.contains(&row.internal_id()))
    }
}

impl std::fmt::Debug for StandardTreeView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardTreeView")
            .field("visible_rows", &self.rows.len())
            .field("expanded", &self.expanded.len())
            .field("column_header", &self.column_header)
            .finish_non_exhaustive()
    }
}
