//! Model/View primitives for Horizon Lattice item views.
//!
//! This crate holds the data side of table, list and tree views: model
//! indices, item roles and data, the [`ItemModel`](model::ItemModel) trait,
//! selection state, and the geometry types views use to report layout.
//!
//! The accessibility adapters in `horizon-lattice-accessible` consume these
//! types through the view traits they define.

pub mod geometry;
pub mod model;

pub use geometry::{Point, Rect, Size};

static_assertions::assert_impl_all!(model::TableModel: Send, Sync);
static_assertions::assert_impl_all!(model::TreeModel: Send, Sync);
static_assertions::assert_impl_all!(model::ModelIndex: Send, Sync);
