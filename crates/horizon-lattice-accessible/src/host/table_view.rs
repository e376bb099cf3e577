use std::sync::Arc;

use horizon_lattice_itemview::geometry::{Point, Rect, Size};
use horizon_lattice_itemview::model::{
    ItemModel, ModelIndex, Orientation, SelectionFlags, SelectionMode,
};

use super::{ViewCore, ViewLayout};
use crate::change::ChangeTracker;
use crate::table::TableAdapter;
use crate::view::{ItemView, ViewKind};

/// A table or list view over any flat [`ItemModel`].
///
/// Both headers are shown by default. List views never show headers,
/// whatever the header flags say.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use horizon_lattice_accessible::host::StandardTableView;
/// use horizon_lattice_itemview::model::{SelectionMode, TableModel};
///
/// let view = StandardTableView::new(Arc::new(TableModel::new(4, 3)))
///     .with_selection_mode(SelectionMode::MultiSelection)
///     .with_accessible_name("Inventory");
///
/// let table = view.accessible();
/// assert_eq!(table.row_count(), 4);
/// assert!(table.select_row(2).is_ok());
/// assert!(table.is_row_selected(2));
/// ```
pub struct StandardTableView {
    core: ViewCore,
    kind: ViewKind,
    row_header: bool,
    column_header: bool,
}

impl StandardTableView {
    pub fn new(model: Arc<dyn ItemModel>) -> Self {
        Self {
            core: ViewCore::new(model),
            kind: ViewKind::Table,
            row_header: true,
            column_header: true,
        }
    }

    // =========================================================================
    // Builder Pattern
    // =========================================================================

    /// Sets the view shape. Only `Table` and `List` are meaningful here.
    pub fn with_kind(mut self, kind: ViewKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_row_header(mut self, shown: bool) -> Self {
        self.row_header = shown;
        self
    }

    pub fn with_column_header(mut self, shown: bool) -> Self {
        self.column_header = shown;
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

    /// The tracker the view's adapters report structural changes to.
    pub fn changes(&self) -> &ChangeTracker {
        &self.core.changes
    }

    /// The accessibility adapter for this view.
    pub fn accessible(&self) -> TableAdapter<'_> {
        TableAdapter::new(self, &self.core.changes)
    }

    fn rows(&self) -> usize {
        self.core.model.row_count(&ModelIndex::invalid())
    }

    fn columns(&self) -> usize {
        self.core.model.column_count(&ModelIndex::invalid())
    }
}

impl ItemView for StandardTableView {
    fn kind(&self) -> ViewKind {
        self.kind
    }

    fn model(&self) -> &dyn ItemModel {
        &*self.core.model
    }

    fn has_header(&self, orientation: Orientation) -> bool {
        if self.kind == ViewKind::List {
            return false;
        }
        match orientation {
            Orientation::Horizontal => self.column_header,
            Orientation::Vertical => self.row_header,
        }
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
        self.core.layout.viewport_offset(
            self.has_header(Orientation::Vertical),
            self.has_header(Orientation::Horizontal),
        )
    }

    fn visual_rect(&self, index: &ModelIndex) -> Option<Rect> {
        if !index.is_valid() || index.has_parent() {
            return None;
        }
        if index.row() >= self.rows() || index.column() >= self.columns() {
            return None;
        }
        Some(self.core.layout.slot_rect(index.row(), index.column()))
    }

    fn map_to_global(&self, point: Point) -> Point {
        self.core.map_to_global(point)
    }

    fn map_from_global(&self, point: Point) -> Point {
        self.core.map_from_global(point)
    }

    fn index_at(&self, point: Point) -> ModelIndex {
        match self.core.layout.slot_at(point, self.viewport_offset()) {
            Some((row, column)) => self.core.model.index(row, column, &ModelIndex::invalid()),
            None => ModelIndex::invalid(),
        }
    }

    fn header_section_rect(&self, section: usize, orientation: Orientation) -> Option<Rect> {
        if !self.has_header(orientation) {
            return None;
        }
        let layout = &self.core.layout;
        let offset = self.viewport_offset();
        match orientation {
            Orientation::Horizontal if section < self.columns() => Some(Rect::new(
                offset.x + section as f32 * layout.column_width - layout.scroll.x,
                0.0,
                layout.column_width,
                layout.column_header_height,
            )),
            Orientation::Vertical if section < self.rows() => Some(Rect::new(
                0.0,
                offset.y + section as f32 * layout.row_height - layout.scroll.y,
                layout.row_header_width,
                layout.row_height,
            )),
            _ => None,
        }
    }

    fn accessible_name(&self) -> Option<String> {
        self.core.name.clone()
    }

    fn accessible_description(&self) -> Option<String> {
        self.core.description.clone()
    }
}

impl std::fmt::Debug for StandardTableView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardTableView")
            .field("kind", &self.kind)
            .field("rows", &self.rows())
            .field("columns", &self.columns())
            .field("row_header", &self.row_header)
            .field("column_header", &self.column_header)
            .finish_non_exhaustive()
    }
}
