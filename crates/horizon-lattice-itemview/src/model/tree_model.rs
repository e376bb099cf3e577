//! Hierarchical tree model implementation.
//!
//! `TreeModel` provides a way to display hierarchical data with parent-child
//! relationships. Every node carries one cell per column.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::index::ModelIndex;
use super::role::{ItemData, ItemRole};
use super::traits::{ItemFlags, ItemModel, Orientation};

/// A node ID for internal tracking.
pub type NodeId = u64;

/// Counter for generating unique node IDs.
static NODE_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

fn next_node_id() -> NodeId {
    NODE_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// A node in the tree structure.
struct TreeNode {
    id: NodeId,
    cells: Vec<HashMap<ItemRole, ItemData>>,
    flags: ItemFlags,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl TreeNode {
    fn new(values: Vec<ItemData>, parent: Option<NodeId>) -> Self {
        let cells = values
            .into_iter()
            .map(|value| {
                let mut roles = HashMap::new();
                if value.is_some() {
                    roles.insert(ItemRole::Display, value);
                }
                roles
            })
            .collect();
        Self {
            id: next_node_id(),
            cells,
            flags: ItemFlags::new(),
            children: Vec::new(),
            parent,
        }
    }
}

/// Internal storage for tree nodes.
#[derive(Default)]
struct TreeStorage {
    nodes: HashMap<NodeId, TreeNode>,
    root_children: Vec<NodeId>,
}

impl TreeStorage {
    fn insert(&mut self, node: TreeNode) -> Option<NodeId> {
        let id = node.id;
        match node.parent {
            None => self.root_children.push(id),
            Some(parent_id) => self.nodes.get_mut(&parent_id)?.children.push(id),
        }
        self.nodes.insert(id, node);
        Some(id)
    }

    fn remove_node(&mut self, id: NodeId) -> bool {
        let Some(node) = self.nodes.get(&id) else {
            return false;
        };
        match node.parent {
            Some(parent_id) => {
                if let Some(parent) = self.nodes.get_mut(&parent_id) {
                    parent.children.retain(|&child_id| child_id != id);
                }
            }
            None => self.root_children.retain(|&child_id| child_id != id),
        }
        self.remove_subtree(id);
        true
    }

    fn remove_subtree(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.remove(&id) {
            for child_id in node.children {
                self.remove_subtree(child_id);
            }
        }
    }

    fn children_of(&self, parent_id: Option<NodeId>) -> &[NodeId] {
        match parent_id {
            None => &self.root_children,
            Some(id) => self
                .nodes
                .get(&id)
                .map(|n| n.children.as_slice())
                .unwrap_or(&[]),
        }
    }

    fn row_of(&self, id: NodeId) -> Option<usize> {
        let parent_id = self.nodes.get(&id)?.parent;
        self.children_of(parent_id)
            .iter()
            .position(|&child_id| child_id == id)
    }
}

/// A hierarchical tree model for displaying parent-child data.
///
/// Nodes are addressed by [`NodeId`]s handed out when they are added. Indices
/// produced by the model store the node ID as their internal ID, so every
/// column of a node shares the same internal ID.
///
/// # Example
///
/// ```
/// use horizon_lattice_itemview::model::{ItemModel, ModelIndex, TreeModel};
///
/// let model = TreeModel::new(1);
/// let docs = model.add_root("Documents");
/// model.add_child(docs, "notes.txt");
/// model.add_root("Pictures");
///
/// let root = ModelIndex::invalid();
/// let docs_index = model.index(0, 0, &root);
/// assert_eq!(model.row_count(&root), 2);
/// assert_eq!(model.row_count(&docs_index), 1);
/// assert_eq!(model.node_id(&docs_index), Some(docs));
/// ```
pub struct TreeModel {
    storage: RwLock<TreeStorage>,
    column_count: usize,
    headers: RwLock<HashMap<(usize, ItemRole), ItemData>>,
}

impl TreeModel {
    /// Creates an empty tree with the given column count.
    pub fn new(column_count: usize) -> Self {
        Self {
            storage: RwLock::new(TreeStorage::default()),
            column_count: column_count.max(1),
            headers: RwLock::new(HashMap::new()),
        }
    }

    /// Sets the display labels of the column headers.
    pub fn with_header_labels<I, S>(self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        {
            let mut headers = self.headers.write();
            for (section, label) in labels.into_iter().enumerate() {
                headers.insert((section, ItemRole::Display), ItemData::String(label.into()));
            }
        }
        self
    }

    /// Sets header data for a column under a role.
    pub fn set_header_data(&self, section: usize, role: ItemRole, value: impl Into<ItemData>) {
        self.headers.write().insert((section, role), value.into());
    }

    /// Adds a root node with a label in the first column.
    pub fn add_root(&self, label: impl Into<String>) -> NodeId {
        self.add_root_row(vec![ItemData::String(label.into())])
    }

    /// Adds a root node with one display value per column.
    pub fn add_root_row(&self, values: Vec<ItemData>) -> NodeId {
        let node = TreeNode::new(self.fit_columns(values), None);
        let id = node.id;
        self.storage.write().insert(node);
        id
    }

    /// Adds a child node with a label in the first column.
    ///
    /// Returns `None` if the parent doesn't exist.
    pub fn add_child(&self, parent: NodeId, label: impl Into<String>) -> Option<NodeId> {
        self.add_child_row(parent, vec![ItemData::String(label.into())])
    }

    /// Adds a child node with one display value per column.
    pub fn add_child_row(&self, parent: NodeId, values: Vec<ItemData>) -> Option<NodeId> {
        let node = TreeNode::new(self.fit_columns(values), Some(parent));
        self.storage.write().insert(node)
    }

    /// Removes a node and all of its descendants.
    pub fn remove(&self, id: NodeId) -> bool {
        self.storage.write().remove_node(id)
    }

    /// Stores data for one column of a node.
    pub fn set_node_data(
        &self,
        id: NodeId,
        column: usize,
        role: ItemRole,
        value: impl Into<ItemData>,
    ) -> bool {
        let mut storage = self.storage.write();
        match storage
            .nodes
            .get_mut(&id)
            .and_then(|node| node.cells.get_mut(column))
        {
            Some(cell) => {
                cell.insert(role, value.into());
                true
            }
            None => false,
        }
    }

    /// Sets the flags of every column of a node.
    pub fn set_node_flags(&self, id: NodeId, flags: ItemFlags) -> bool {
        match self.storage.write().nodes.get_mut(&id) {
            Some(node) => {
                node.flags = flags;
                true
            }
            None => false,
        }
    }

    /// Returns the node behind an index produced by this model.
    pub fn node_id(&self, index: &ModelIndex) -> Option<NodeId> {
        if !index.is_valid() {
            return None;
        }
        let id = index.internal_id();
        self.storage.read().nodes.contains_key(&id).then_some(id)
    }

    /// Builds the index of a node at the given column.
    pub fn index_for_node(&self, id: NodeId, column: usize) -> ModelIndex {
        if column >= self.column_count {
            return ModelIndex::invalid();
        }
        let storage = self.storage.read();
        Self::build_index(&storage, id, column)
    }

    fn build_index(storage: &TreeStorage, id: NodeId, column: usize) -> ModelIndex {
        let Some(node) = storage.nodes.get(&id) else {
            return ModelIndex::invalid();
        };
        let Some(row) = storage.row_of(id) else {
            return ModelIndex::invalid();
        };
        let parent = match node.parent {
            Some(parent_id) => Self::build_index(storage, parent_id, 0),
            None => ModelIndex::invalid(),
        };
        ModelIndex::with_internal_id(row, column, parent, id)
    }

    fn fit_columns(&self, mut values: Vec<ItemData>) -> Vec<ItemData> {
        values.resize(self.column_count, ItemData::None);
        values
    }

    fn parent_node(&self, parent: &ModelIndex) -> Option<Option<NodeId>> {
        if !parent.is_valid() {
            return Some(None);
        }
        // Only the first column of a node has children.
        if parent.column() != 0 {
            return None;
        }
        self.node_id(parent).map(Some)
    }
}

impl ItemModel for TreeModel {
    fn row_count(&self, parent: &ModelIndex) -> usize {
        match self.parent_node(parent) {
            Some(parent_id) => self.storage.read().children_of(parent_id).len(),
            None => 0,
        }
    }

    fn column_count(&self, _parent: &ModelIndex) -> usize {
        self.column_count
    }

    fn data(&self, index: &ModelIndex, role: ItemRole) -> ItemData {
        let Some(id) = self.node_id(index) else {
            return ItemData::None;
        };
        self.storage
            .read()
            .nodes
            .get(&id)
            .and_then(|node| node.cells.get(index.column()))
            .and_then(|cell| cell.get(&role).cloned())
            .unwrap_or_default()
    }

    fn index(&self, row: usize, column: usize, parent: &ModelIndex) -> ModelIndex {
        if column >= self.column_count {
            return ModelIndex::invalid();
        }
        let Some(parent_id) = self.parent_node(parent) else {
            return ModelIndex::invalid();
        };
        let storage = self.storage.read();
        match storage.children_of(parent_id).get(row) {
            Some(&child_id) => ModelIndex::with_internal_id(row, column, parent.clone(), child_id),
            None => ModelIndex::invalid(),
        }
    }

    fn set_data(&self, index: &ModelIndex, value: ItemData, role: ItemRole) -> bool {
        match self.node_id(index) {
            Some(id) => self.set_node_data(id, index.column(), role, value),
            None => false,
        }
    }

    fn flags(&self, index: &ModelIndex) -> ItemFlags {
        self.node_id(index)
            .and_then(|id| self.storage.read().nodes.get(&id).map(|node| node.flags))
            .unwrap_or_else(ItemFlags::disabled)
    }

    fn header_data(&self, section: usize, orientation: Orientation, role: ItemRole) -> ItemData {
        if orientation != Orientation::Horizontal {
            return ItemData::None;
        }
        self.headers
            .read()
            .get(&(section, role))
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> ModelIndex {
        ModelIndex::invalid()
    }

    fn sample() -> (TreeModel, NodeId, NodeId) {
        let model = TreeModel::new(2).with_header_labels(["Name", "Size"]);
        let docs = model.add_root_row(vec!["Documents".into(), ItemData::None]);
        let notes = model
            .add_child_row(docs, vec!["notes.txt".into(), "4 KB".into()])
            .unwrap();
        model.add_root("Pictures");
        (model, docs, notes)
    }

    #[test]
    fn test_counts_and_lookup() {
        let (model, docs, notes) = sample();
        assert_eq!(model.row_count(&root()), 2);
        assert_eq!(model.column_count(&root()), 2);

        let docs_index = model.index(0, 0, &root());
        assert_eq!(model.node_id(&docs_index), Some(docs));
        assert_eq!(model.row_count(&docs_index), 1);

        let size = model.index(0, 1, &docs_index);
        assert_eq!(model.node_id(&size), Some(notes));
        assert_eq!(model.display_text(&size).as_deref(), Some("4 KB"));

        // Non-first columns have no children.
        assert_eq!(model.row_count(&model.index(0, 1, &root())), 0);
        assert!(!model.index(0, 2, &root()).is_valid());
    }

    #[test]
    fn test_index_for_node() {
        let (model, docs, notes) = sample();
        let index = model.index_for_node(notes, 1);
        assert_eq!(index.row(), 0);
        assert_eq!(index.column(), 1);
        assert_eq!(index.parent(), model.index_for_node(docs, 0));
        assert!(!model.index_for_node(9_999_999, 0).is_valid());
    }

    #[test]
    fn test_remove_subtree() {
        let (model, docs, notes) = sample();
        assert!(model.remove(docs));
        assert_eq!(model.row_count(&root()), 1);
        assert!(!model.index_for_node(notes, 0).is_valid());
        assert!(!model.remove(docs));
    }

    #[test]
    fn test_headers_and_flags() {
        let (model, docs, _) = sample();
        assert_eq!(model.header_data(1, Orientation::Horizontal, ItemRole::Display).to_text(), "Size");
        assert!(model.header_data(0, Orientation::Vertical, ItemRole::Display).is_none());

        model.set_node_flags(docs, ItemFlags::editable());
        assert!(model.flags(&model.index(0, 0, &root())).editable);
        assert!(model.set_data(&model.index(0, 1, &root()), ItemData::from("--"), ItemRole::Display));
        assert_eq!(model.display_text(&model.index(0, 1, &root())).as_deref(), Some("--"));
    }
}
