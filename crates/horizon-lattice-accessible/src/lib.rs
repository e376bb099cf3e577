//! Accessibility adapters for Horizon Lattice item views.
//!
//! This crate exposes tables, lists and trees to assistive technologies as a
//! flat sequence of accessible children:
//!
//! - **Adapters**: [`TableAdapter`] and [`TreeAdapter`] answer child, cell,
//!   header and selection queries for a hosting view
//! - **Items**: [`CellObject`], [`HeaderCellObject`] and [`CornerButton`],
//!   created on demand and never cached
//! - **Index mapping**: [`LinearIndexMapper`] converts between one-based flat
//!   child indices and [`CellIdentity`] values
//! - **Change tracking**: [`ChangeTracker`] remembers the latest structural
//!   change for event consumers
//! - **AccessKit export** (feature `accesskit`, on by default): node and tree
//!   update building
//!
//! Adapters hold nothing but borrows of the view and its change tracker, so
//! every answer reflects the view's state at the time of the query.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_lattice_accessible::{AccessibleRole, CellIdentity, TextKind};
//! use horizon_lattice_accessible::host::StandardTableView;
//! use horizon_lattice_itemview::model::TableModel;
//!
//! let model = Arc::new(
//!     TableModel::from_display(vec![vec!["Ada", "1815"], vec!["Grace", "1906"]])
//!         .with_column_headers(["Name", "Born"]),
//! );
//! let view = StandardTableView::new(model);
//! let table = view.accessible();
//!
//! // Corner, two column headers, then a row header and two cells per row.
//! assert_eq!(table.child_count(), 9);
//! assert_eq!(table.child(1).unwrap().role(), AccessibleRole::Pane);
//!
//! let cell = table.cell_at(1, 0).unwrap();
//! assert_eq!(cell.text(TextKind::Name), "Grace");
//! assert_eq!(cell.identity(), Some(CellIdentity::DataCell { row: 1, column: 0 }));
//! assert_eq!(table.column_description(1), "Born");
//! ```

pub mod cell;
pub mod change;
pub mod error;
pub mod header;
pub mod host;
pub mod identity;
pub mod item;
pub mod mapper;
#[cfg(feature = "accesskit")]
mod node;
pub mod relation;
pub mod role;
pub mod state;
pub mod table;
pub mod tree;
pub mod view;

pub use cell::{CellObject, CornerButton, HeaderCellObject, RowColumnExtents};
pub use change::{ChangeKind, ChangeTracker, TableModelChange};
pub use error::{AccessError, AccessResult};
pub use header::HeaderLocator;
pub use identity::CellIdentity;
pub use item::{AccessibleItem, AccessibleObject};
pub use mapper::LinearIndexMapper;
pub use relation::{Relation, Relationship};
pub use role::{AccessibleRole, TextKind};
pub use state::AccessibleState;
pub use table::TableAdapter;
pub use tree::TreeAdapter;
pub use view::{ItemView, TreeItemView, ViewHandle, ViewKind, ViewRef, VisibleRowList, VisibleRows};

/// Log targets used by this crate.
///
/// ```bash
/// RUST_LOG=horizon_lattice_accessible::selection=debug cargo run
/// ```
pub mod targets {
    /// Child lookup and hit testing.
    pub const ADAPTER: &str = "horizon_lattice_accessible::adapter";
    /// Cell text edits.
    pub const CELL: &str = "horizon_lattice_accessible::cell";
    /// Row and column selection requests.
    pub const SELECTION: &str = "horizon_lattice_accessible::selection";
    /// Recorded structural changes.
    pub const CHANGES: &str = "horizon_lattice_accessible::changes";
}

static_assertions::assert_impl_all!(ChangeTracker: Send, Sync);
static_assertions::assert_impl_all!(LinearIndexMapper: Send, Sync, Copy);
