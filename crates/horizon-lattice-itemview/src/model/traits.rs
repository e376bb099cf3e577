//! Core traits for the Model/View architecture.
//!
//! This module defines the fundamental traits that models must implement
//! to be presented by item views and their accessibility adapters.

use super::index::ModelIndex;
use super::role::{CheckState, ItemData, ItemRole};

/// Flags indicating what operations are allowed on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemFlags {
    /// Item can be selected.
    pub selectable: bool,
    /// Item can be edited.
    pub editable: bool,
    /// Item has a checkbox.
    pub checkable: bool,
    /// Item is enabled (can interact).
    pub enabled: bool,
}

impl ItemFlags {
    /// Creates flags with all defaults (selectable and enabled only).
    pub fn new() -> Self {
        Self {
            selectable: true,
            enabled: true,
            ..Default::default()
        }
    }

    /// Creates flags for a disabled item.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Creates flags for an editable item.
    pub fn editable() -> Self {
        Self {
            editable: true,
            ..Self::new()
        }
    }

    /// Creates flags for a checkable item.
    pub fn checkable() -> Self {
        Self {
            checkable: true,
            ..Self::new()
        }
    }

    /// Sets the selectable flag.
    pub fn with_selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Sets the editable flag.
    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Sets the checkable flag.
    pub fn with_checkable(mut self, checkable: bool) -> Self {
        self.checkable = checkable;
        self
    }

    /// Sets the enabled flag.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Header orientation for `header_data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Horizontal header (column headers).
    Horizontal,
    /// Vertical header (row headers).
    Vertical,
}

/// The core trait for item models in the Model/View architecture.
///
/// `ItemModel` provides a flexible interface for representing hierarchical
/// data. Views and accessibility adapters use this interface to query data
/// without needing to know the underlying data structure.
///
/// # Implementation Requirements
///
/// At minimum, you must implement:
/// - [`row_count`](ItemModel::row_count) - Number of rows under a parent
/// - [`column_count`](ItemModel::column_count) - Number of columns
/// - [`data`](ItemModel::data) - Data for a given index and role
/// - [`index`](ItemModel::index) - Create an index for a position
///
/// For editable models, also implement:
/// - [`set_data`](ItemModel::set_data) - Modify data at an index
/// - [`flags`](ItemModel::flags) - Return appropriate flags
///
/// `index` must return an invalid index for out-of-bounds positions; callers
/// rely on that to reject bad coordinates.
pub trait ItemModel: Send + Sync {
    /// Returns the number of rows under the given parent.
    fn row_count(&self, parent: &ModelIndex) -> usize;

    /// Returns the number of columns for children of the given parent.
    fn column_count(&self, parent: &ModelIndex) -> usize;

    /// Returns the data stored under the given role for the item.
    fn data(&self, index: &ModelIndex, role: ItemRole) -> ItemData;

    /// Returns the index of the item at `(row, column)` under `parent`.
    fn index(&self, row: usize, column: usize, parent: &ModelIndex) -> ModelIndex;

    /// Sets the role data for the item at index to value.
    ///
    /// Returns `true` if successful. Default implementation returns `false`.
    fn set_data(&self, _index: &ModelIndex, _value: ItemData, _role: ItemRole) -> bool {
        false
    }

    /// Returns the item flags for the given index.
    fn flags(&self, index: &ModelIndex) -> ItemFlags {
        if index.is_valid() {
            ItemFlags::new()
        } else {
            ItemFlags::disabled()
        }
    }

    /// Returns `true` if the parent has any children.
    fn has_children(&self, parent: &ModelIndex) -> bool {
        self.row_count(parent) > 0
    }

    /// Returns the data for the given header section.
    fn header_data(&self, _section: usize, _orientation: Orientation, _role: ItemRole) -> ItemData {
        ItemData::None
    }

    /// Convenience for the display text of an item.
    fn display_text(&self, index: &ModelIndex) -> Option<String> {
        self.data(index, ItemRole::Display).as_string().map(str::to_owned)
    }

    /// Convenience for the check state of an item.
    fn check_state(&self, index: &ModelIndex) -> Option<CheckState> {
        self.data(index, ItemRole::CheckState).as_check_state()
    }

    /// Returns the sibling at `(row, column)` of `index`.
    ///
    /// This validates against the model, unlike `ModelIndex::sibling`.
    fn sibling(&self, index: &ModelIndex, row: usize, column: usize) -> ModelIndex {
        if !index.is_valid() {
            return ModelIndex::invalid();
        }
        self.index(row, column, &index.parent())
    }
}
