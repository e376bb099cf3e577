//! Reference views implementing the collaborator traits.
//!
//! [`StandardTableView`] presents any [`ItemModel`] as a table or list and
//! [`StandardTreeView`] presents a hierarchical model with expandable rows.
//! Both lay items out on a uniform grid, keep their selection in a
//! [`SelectionModel`] and own the [`ChangeTracker`] their adapters report to.
//!
//! They render nothing; hosts use them to prototype against the adapters or
//! as a template for wiring their own widgets.

mod table_view;
mod tree_view;

pub use table_view::StandardTableView;
pub use tree_view::StandardTreeView;

use std::sync::Arc;

use parking_lot::RwLock;

use horizon_lattice_itemview::geometry::{Point, Rect, Size};
use horizon_lattice_itemview::model::{
    ItemModel, ModelIndex, SelectionFlags, SelectionMode, SelectionModel,
};

use crate::change::ChangeTracker;

/// Uniform layout of a reference view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewLayout {
    /// Height of every row.
    pub row_height: f32,
    /// Width of every column.
    pub column_width: f32,
    /// Width of the row-header strip, when shown.
    pub row_header_width: f32,
    /// Height of the column-header strip, when shown.
    pub column_header_height: f32,
    /// Size of the whole view.
    pub size: Size,
    /// Global position of the view's top-left corner.
    pub global_origin: Point,
    /// Scroll position of the viewport contents.
    pub scroll: Point,
    /// Whether the view is shown.
    pub visible: bool,
}

impl Default for ViewLayout {
    fn default() -> Self {
        Self {
            row_height: 24.0,
            column_width: 100.0,
            row_header_width: 40.0,
            column_header_height: 24.0,
            size: Size::new(400.0, 300.0),
            global_origin: Point::ZERO,
            scroll: Point::ZERO,
            visible: true,
        }
    }
}

impl ViewLayout {
    /// Top-left corner of the viewport given the shown header strips.
    fn viewport_offset(&self, row_header: bool, column_header: bool) -> Point {
        Point::new(
            if row_header { self.row_header_width } else { 0.0 },
            if column_header {
                self.column_header_height
            } else {
                0.0
            },
        )
    }

    /// Viewport rectangle of the cell in grid slot `(row, column)`.
    fn slot_rect(&self, row: usize, column: usize) -> Rect {
        Rect::new(
            column as f32 * self.column_width - self.scroll.x,
            row as f32 * self.row_height - self.scroll.y,
            self.column_width,
            self.row_height,
        )
    }

    /// Grid slot under a viewport point, if the point is inside the viewport.
    fn slot_at(&self, point: Point, viewport_offset: Point) -> Option<(usize, usize)> {
        let viewport = Rect::from_origin_size(
            Point::ZERO,
            Size::new(
                self.size.width - viewport_offset.x,
                self.size.height - viewport_offset.y,
            ),
        );
        if !viewport.contains(point) || self.row_height <= 0.0 || self.column_width <= 0.0 {
            return None;
        }
        let content = point + self.scroll;
        if content.x < 0.0 || content.y < 0.0 {
            return None;
        }
        Some((
            (content.y / self.row_height) as usize,
            (content.x / self.column_width) as usize,
        ))
    }
}

/// State shared by the reference views.
struct ViewCore {
    model: Arc<dyn ItemModel>,
    selection: RwLock<SelectionModel>,
    layout: ViewLayout,
    name: Option<String>,
    description: Option<String>,
    changes: ChangeTracker,
}

impl ViewCore {
    fn new(model: Arc<dyn ItemModel>) -> Self {
        Self {
            model,
            selection: RwLock::new(SelectionModel::new()),
            layout: ViewLayout::default(),
            name: None,
            description: None,
            changes: ChangeTracker::new(),
        }
    }

    fn selection_mode(&self) -> SelectionMode {
        self.selection.read().selection_mode()
    }

    fn set_selection_mode(&self, mode: SelectionMode) {
        self.selection.write().set_selection_mode(mode);
    }

    fn selected_indexes(&self) -> Vec<ModelIndex> {
        self.selection.read().selected_indices().to_vec()
    }

    fn selected_rows(&self) -> Vec<ModelIndex> {
        self.selection.read().selected_rows(&*self.model)
    }

    fn selected_columns(&self) -> Vec<ModelIndex> {
        self.selection.read().selected_columns(&*self.model)
    }

    fn is_selected(&self, index: &ModelIndex) -> bool {
        self.selection.read().is_selected(index)
    }

    fn is_row_selected(&self, row: usize, parent: &ModelIndex) -> bool {
        self.selection.read().is_row_selected(&*self.model, row, parent)
    }

    fn is_column_selected(&self, column: usize, parent: &ModelIndex) -> bool {
        self.selection
            .read()
            .is_column_selected(&*self.model, column, parent)
    }

    fn select(&self, index: &ModelIndex, flags: SelectionFlags) {
        self.selection.write().select(&*self.model, index, flags);
    }

    fn current_index(&self) -> ModelIndex {
        self.selection.read().current_index().clone()
    }

    fn set_current_index(&self, index: ModelIndex) {
        self.selection.write().set_current_index(index);
    }

    fn clear_selection(&self) {
        self.selection.write().clear_selection();
    }

    fn map_to_global(&self, point: Point) -> Point {
        point + self.layout.global_origin
    }

    fn map_from_global(&self, point: Point) -> Point {
        point - self.layout.global_origin
    }
}

static_assertions::assert_impl_all!(StandardTableView: Send, Sync);
static_assertions::assert_impl_all!(StandardTreeView: Send, Sync);
