//! Model index for addressing items in hierarchical models.
//!
//! The `ModelIndex` type is the fundamental way to reference items within
//! an `ItemModel`. It contains row, column, and parent information to
//! uniquely identify any item in a hierarchical data structure.

use std::hash::{Hash, Hasher};

/// Represents a position within an `ItemModel`.
///
/// `ModelIndex` is used by views, selection models, and the accessibility
/// adapters to locate items within a model. Each index contains:
/// - Row and column within the parent
/// - The parent index (for hierarchical models)
/// - An internal ID that models may use to find their own storage
///
/// Equality is structural: two indices are equal when their row, column and
/// parent chain match. The internal ID is a lookup hint only and does not take
/// part in comparisons or hashing.
///
/// # Index Validity
///
/// Model indices should be used immediately and not stored long-term.
/// After model modifications (insertions, deletions, moves), previously
/// obtained indices may point at different items.
///
/// # Example
///
/// ```
/// use horizon_lattice_itemview::model::ModelIndex;
///
/// let parent = ModelIndex::new(0, 0, ModelIndex::invalid());
/// let child = ModelIndex::new(2, 1, parent.clone());
///
/// assert_eq!(child.parent(), parent);
/// assert_eq!(child.sibling(3, 0).row(), 3);
/// ```
#[derive(Clone)]
pub struct ModelIndex {
    row: usize,
    column: usize,
    /// `None` indicates a root-level item.
    parent: Option<Box<ModelIndex>>,
    internal_id: u64,
    valid: bool,
}

impl Default for ModelIndex {
    fn default() -> Self {
        Self::invalid()
    }
}

impl ModelIndex {
    /// Creates an invalid (null) model index.
    ///
    /// An invalid index is used to represent:
    /// - The root of the model (as a parent reference)
    /// - A non-existent or out-of-bounds item
    #[inline]
    pub const fn invalid() -> Self {
        Self {
            row: 0,
            column: 0,
            parent: None,
            internal_id: 0,
            valid: false,
        }
    }

    /// Creates a new valid model index.
    ///
    /// # Arguments
    ///
    /// * `row` - The row within the parent
    /// * `column` - The column within the parent
    /// * `parent` - The parent index, or `ModelIndex::invalid()` for root items
    #[inline]
    pub fn new(row: usize, column: usize, parent: ModelIndex) -> Self {
        Self::with_internal_id(row, column, parent, 0)
    }

    /// Creates a new valid model index with a custom internal ID.
    ///
    /// Models can use the internal ID to store an identifier for their
    /// internal data structures for efficient lookups.
    #[inline]
    pub fn with_internal_id(row: usize, column: usize, parent: ModelIndex, internal_id: u64) -> Self {
        Self {
            row,
            column,
            parent: if parent.is_valid() {
                Some(Box::new(parent))
            } else {
                None
            },
            internal_id,
            valid: true,
        }
    }

    /// Returns `true` if this is a valid index.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the row of this index within its parent.
    ///
    /// Returns 0 for invalid indices.
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column of this index within its parent.
    ///
    /// Returns 0 for invalid indices.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the parent index, or an invalid index if this is a root item.
    #[inline]
    pub fn parent(&self) -> ModelIndex {
        match &self.parent {
            Some(parent) => (**parent).clone(),
            None => ModelIndex::invalid(),
        }
    }

    /// Returns `true` if this index has a valid parent.
    #[inline]
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    /// Returns the internal ID associated with this index.
    #[inline]
    pub fn internal_id(&self) -> u64 {
        self.internal_id
    }

    /// Creates a sibling index at the given row and column.
    ///
    /// Returns an invalid index if this index is invalid. This does not
    /// validate against a model; use `ItemModel::sibling` for that.
    #[inline]
    pub fn sibling(&self, row: usize, column: usize) -> ModelIndex {
        if !self.is_valid() {
            return ModelIndex::invalid();
        }
        ModelIndex::new(row, column, self.parent())
    }

    /// Returns the depth of this index in the tree hierarchy.
    ///
    /// Root-level items have depth 0. Returns 0 for invalid indices.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.parent.as_deref();
        while let Some(parent) = current {
            depth += 1;
            current = parent.parent.as_deref();
        }
        depth
    }

    /// Checks if this index is a descendant of the given ancestor.
    pub fn is_descendant_of(&self, ancestor: &ModelIndex) -> bool {
        if !self.is_valid() || !ancestor.is_valid() {
            return false;
        }
        let mut current = self.parent.as_deref();
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = parent.parent.as_deref();
        }
        false
    }
}

impl std::fmt::Debug for ModelIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            f.debug_struct("ModelIndex")
                .field("row", &self.row)
                .field("column", &self.column)
                .field("depth", &self.depth())
                .finish()
        } else {
            write!(f, "ModelIndex(invalid)")
        }
    }
}

impl PartialEq for ModelIndex {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_valid(), other.is_valid()) {
            (false, false) => true,
            (true, true) => {
                self.row == other.row && self.column == other.column && self.parent == other.parent
            }
            _ => false,
        }
    }
}

impl Eq for ModelIndex {}

impl Hash for ModelIndex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.valid.hash(state);
        if self.valid {
            self.row.hash(state);
            self.column.hash(state);
            self.parent.hash(state);
        }
    }
}
