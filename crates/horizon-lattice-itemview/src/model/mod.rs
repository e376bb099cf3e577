//! Model/View primitives consumed by item views.
//!
//! This module provides the foundational types for the Model/View pattern,
//! which separates data representation from display logic.
//!
//! # Core Types
//!
//! - `ModelIndex`: Identifies an item's position in a model
//! - `ItemRole`: Specifies what type of data to access
//! - `ItemData`: Type-erased container for item data
//! - `ItemModel`: The trait that models implement
//! - `SelectionModel`: Selection state for a view
//!
//! # Model Implementations
//!
//! - `TableModel`: 2D grid with rows and columns, supports headers
//! - `TreeModel`: Hierarchical tree structure with parent-child relationships
//!
//! # Example
//!
//! ```
//! use horizon_lattice_itemview::model::{ItemModel, ModelIndex, TableModel};
//!
//! let model = TableModel::from_display(vec![vec!["Apple"], vec!["Banana"]]);
//!
//! let root = ModelIndex::invalid();
//! let first_item = model.index(0, 0, &root);
//! assert_eq!(model.display_text(&first_item).as_deref(), Some("Apple"));
//! ```
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Model    │<────│    View     │<────│  Adapters   │
//! │ (ItemModel) │     │ + Selection │     │             │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!       │                                       │
//!       │         ┌─────────────┐               │
//!       └────────>│ ModelIndex  │<──────────────┘
//!                 │  ItemRole   │
//!                 │  ItemData   │
//!                 └─────────────┘
//! ```

mod index;
mod role;
pub mod selection;
mod table_model;
mod traits;
mod tree_model;

pub use index::ModelIndex;
pub use role::{CheckState, ItemData, ItemRole};
pub use selection::{SelectionFlags, SelectionMode, SelectionModel};
pub use table_model::TableModel;
pub use traits::{ItemFlags, ItemModel, Orientation};
pub use tree_model::{NodeId, TreeModel};
