//! Header presence for item views.

use horizon_lattice_itemview::model::Orientation;

use crate::view::{ViewKind, ViewRef};

/// Answers whether a view shows a row-header column and a column-header row.
///
/// Tables may show either header or both, trees never show a row header and
/// lists show no headers at all. A [`ViewRef::Tree`] counts as a tree
/// whatever its [`ItemView::kind`](crate::ItemView::kind) reports. Nothing is
/// cached: header visibility may change between two queries.
#[derive(Clone, Copy)]
pub struct HeaderLocator<'a> {
    view: ViewRef<'a>,
}

impl<'a> HeaderLocator<'a> {
    pub fn new(view: ViewRef<'a>) -> Self {
        Self { view }
    }

    fn kind(&self) -> ViewKind {
        match self.view {
            ViewRef::Tree(_) => ViewKind::Tree,
            ViewRef::Items(view) => view.kind(),
        }
    }

    /// Returns `true` if a header column precedes the data cells of each row.
    pub fn has_row_header(&self) -> bool {
        match self.kind() {
            ViewKind::Table => self.view.items().has_header(Orientation::Vertical),
            ViewKind::Tree | ViewKind::List => false,
        }
    }

    /// Returns `true` if a header row precedes the first data row.
    pub fn has_column_header(&self) -> bool {
        match self.kind() {
            ViewKind::Table | ViewKind::Tree => {
                self.view.items().has_header(Orientation::Horizontal)
            }
            ViewKind::List => false,
        }
    }

    /// Number of flat columns taken by the row header (0 or 1).
    #[inline]
    pub fn row_header_columns(&self) -> usize {
        usize::from(self.has_row_header())
    }

    /// Number of flat rows taken by the column header (0 or 1).
    #[inline]
    pub fn column_header_rows(&self) -> usize {
        usize::from(self.has_column_header())
    }
}

impl std::fmt::Debug for HeaderLocator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeaderLocator")
            .field("row_header", &self.has_row_header())
            .field("column_header", &self.has_column_header())
            .finish()
    }
}
