//! Collaborator traits through which the adapters query a hosting view.
//!
//! A view hands out its model, its selection state and its geometry. The
//! adapters never keep anything from a view between two queries.
//!
//! # Coordinate spaces
//!
//! - *viewport* coordinates: relative to the scrolled content area, as used
//!   by [`ItemView::visual_rect`] and [`ItemView::index_at`].
//! - *view* coordinates: relative to the view's top-left corner, header
//!   strips included. A viewport point plus [`ItemView::viewport_offset`]
//!   is a view point.
//! - *global* (screen) coordinates, reached with [`ItemView::map_to_global`].

use std::collections::HashMap;

use horizon_lattice_itemview::geometry::{Point, Rect, Size};
use horizon_lattice_itemview::model::{
    ItemModel, ModelIndex, Orientation, SelectionFlags, SelectionMode,
};

use crate::change::ChangeTracker;

/// The shape of a hosting view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// A grid with optional row and column headers.
    Table,
    /// A hierarchical view with an optional column header.
    Tree,
    /// A header-less list.
    List,
}

/// A view presenting an [`ItemModel`] as rows and columns.
pub trait ItemView: Send + Sync {
    /// The shape of the view.
    fn kind(&self) -> ViewKind;

    /// The model the view presents.
    fn model(&self) -> &dyn ItemModel;

    /// Returns `true` if the header of the given orientation is shown.
    fn has_header(&self, orientation: Orientation) -> bool;

    // =========================================================================
    // Selection
    // =========================================================================

    fn selection_mode(&self) -> SelectionMode;

    /// Selected indices in selection order.
    fn selected_indexes(&self) -> Vec<ModelIndex>;

    /// One index per fully selected row, in selection order.
    fn selected_rows(&self) -> Vec<ModelIndex>;

    /// One index per fully selected column, in selection order.
    fn selected_columns(&self) -> Vec<ModelIndex>;

    fn is_selected(&self, index: &ModelIndex) -> bool;

    /// Returns `true` if every column of `row` under `parent` is selected.
    fn is_row_selected(&self, row: usize, parent: &ModelIndex) -> bool;

    /// Returns `true` if every row of `column` under `parent` is selected.
    fn is_column_selected(&self, column: usize, parent: &ModelIndex) -> bool;

    /// Applies a selection operation.
    fn select(&self, index: &ModelIndex, flags: SelectionFlags);

    /// The current (focused) index.
    fn current_index(&self) -> ModelIndex;

    // =========================================================================
    // Geometry
    // =========================================================================

    fn is_visible(&self) -> bool;

    /// Size of the whole view, header strips included.
    fn size(&self) -> Size;

    /// Position of the viewport's top-left corner in view coordinates.
    fn viewport_offset(&self) -> Point;

    /// Rectangle of an item in viewport coordinates.
    fn visual_rect(&self, index: &ModelIndex) -> Option<Rect>;

    /// Maps a point from view coordinates to global coordinates.
    fn map_to_global(&self, point: Point) -> Point;

    /// Maps a point from global coordinates to view coordinates.
    fn map_from_global(&self, point: Point) -> Point;

    /// Returns the item at a viewport point, or an invalid index.
    fn index_at(&self, point: Point) -> ModelIndex;

    /// Rectangle of a header section in view coordinates.
    fn header_section_rect(&self, section: usize, orientation: Orientation) -> Option<Rect>;

    // =========================================================================
    // Text
    // =========================================================================

    fn accessible_name(&self) -> Option<String> {
        None
    }

    fn accessible_description(&self) -> Option<String> {
        None
    }
}

/// A view presenting a hierarchical model as a flattened list of rows.
pub trait TreeItemView: ItemView {
    /// The rows currently shown, in display order.
    fn visible_rows(&self) -> &dyn VisibleRows;

    /// Returns `true` if the item's children are shown.
    fn is_expanded(&self, index: &ModelIndex) -> bool;
}

/// The ordered sequence of rows a tree view currently shows.
///
/// Entries are column-0 indices. The sequence changes whenever a node is
/// expanded or collapsed, or the model changes.
pub trait VisibleRows {
    /// Number of visible rows.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The row at a visible position.
    fn get(&self, position: usize) -> Option<ModelIndex>;

    /// The visible position of the row holding `index`, in any column.
    fn position_of(&self, index: &ModelIndex) -> Option<usize>;
}

/// A [`VisibleRows`] sequence with constant-time lookups in both directions.
#[derive(Debug, Clone, Default)]
pub struct VisibleRowList {
    rows: Vec<ModelIndex>,
    positions: HashMap<ModelIndex, usize>,
}

impl VisibleRowList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flattens a model depth-first, descending into expanded rows only.
    pub fn from_model(model: &dyn ItemModel, is_expanded: impl Fn(&ModelIndex) -> bool) -> Self {
        let mut list = Self::new();
        list.flatten(model, &ModelIndex::invalid(), &is_expanded);
        list
    }

    fn flatten(
        &mut self,
        model: &dyn ItemModel,
        parent: &ModelIndex,
        is_expanded: &dyn Fn(&ModelIndex) -> bool,
    ) {
        for row in 0..model.row_count(parent) {
            let index = model.index(row, 0, parent);
            if !index.is_valid() {
                continue;
            }
            self.push(index.clone());
            if model.has_children(&index) && is_expanded(&index) {
                self.flatten(model, &index, is_expanded);
            }
        }
    }

    /// Appends a row; the index is normalized to column 0.
    pub fn push(&mut self, index: ModelIndex) {
        let key = Self::row_key(&index);
        self.positions.insert(key.clone(), self.rows.len());
        self.rows.push(key);
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.positions.clear();
    }

    /// Iterates over the visible rows in order.
    pub fn iter(&self) -> impl Iterator<Item = &ModelIndex> {
        self.rows.iter()
    }

    fn row_key(index: &ModelIndex) -> ModelIndex {
        if index.column() == 0 {
            index.clone()
        } else {
            ModelIndex::with_internal_id(index.row(), 0, index.parent(), index.internal_id())
        }
    }
}

impl VisibleRows for VisibleRowList {
    fn len(&self) -> usize {
        self.rows.len()
    }

    fn get(&self, position: usize) -> Option<ModelIndex> {
        self.rows.get(position).cloned()
    }

    fn position_of(&self, index: &ModelIndex) -> Option<usize> {
        if !index.is_valid() {
            return None;
        }
        self.positions.get(&Self::row_key(index)).copied()
    }
}

/// A borrowed view of either shape.
#[derive(Clone, Copy)]
pub enum ViewRef<'a> {
    /// A table or list.
    Items(&'a dyn ItemView),
    /// A tree with its visible-row sequence.
    Tree(&'a dyn TreeItemView),
}

impl<'a> ViewRef<'a> {
    /// The view as a plain item view.
    pub fn items(&self) -> &'a dyn ItemView {
        match *self {
            ViewRef::Items(view) => view,
            ViewRef::Tree(view) => view as &dyn ItemView,
        }
    }

    /// The view as a tree, if it is one.
    pub fn tree(&self) -> Option<&'a dyn TreeItemView> {
        match *self {
            ViewRef::Items(_) => None,
            ViewRef::Tree(view) => Some(view),
        }
    }
}

/// Everything an accessible object needs to rebuild its context on demand.
#[derive(Clone, Copy)]
pub struct ViewHandle<'a> {
    pub(crate) view: ViewRef<'a>,
    pub(crate) changes: &'a ChangeTracker,
}

impl<'a> ViewHandle<'a> {
    pub fn new(view: ViewRef<'a>, changes: &'a ChangeTracker) -> Self {
        Self { view, changes }
    }

    pub fn view(&self) -> ViewRef<'a> {
        self.view
    }

    pub fn items(&self) -> &'a dyn ItemView {
        self.view.items()
    }

    pub fn changes(&self) -> &'a ChangeTracker {
        self.changes
    }

    /// Returns `true` if both handles point at the same view.
    pub fn same_view(&self, other: &ViewHandle<'_>) -> bool {
        std::ptr::addr_eq(
            self.items() as *const dyn ItemView,
            other.items() as *const dyn ItemView,
        )
    }
}

impl std::fmt::Debug for ViewHandle<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewHandle")
            .field("kind", &self.items().kind())
            .finish_non_exhaustive()
    }
}

/// The on-screen rectangle of a view, empty while the view is hidden.
pub(crate) fn global_view_rect(view: &dyn ItemView) -> Rect {
    if !view.is_visible() {
        return Rect::ZERO;
    }
    Rect::from_origin_size(view.map_to_global(Point::ZERO), view.size())
}

/// Maps a rectangle from view coordinates to global coordinates.
pub(crate) fn map_rect_to_global(view: &dyn ItemView, rect: Rect) -> Rect {
    Rect::from_origin_size(view.map_to_global(rect.origin), rect.size)
}
