//! AccessKit node building for item views.
//!
//! A view becomes one node with id `base` and one child node per flat child
//! index `i`, with id `base + i`. Hidden tree rows are not part of the flat
//! child space, so they get no node. Children whose id would pass
//! `u64::MAX` are left out.

use accesskit::{Action, Node, NodeId, Toggled, Tree, TreeUpdate};

use horizon_lattice_itemview::geometry::Rect;
use horizon_lattice_itemview::model::{CheckState, Orientation};

use crate::item::AccessibleItem;
use crate::role::TextKind;
use crate::state::AccessibleState;
use crate::table::TableAdapter;
use crate::targets;
use crate::tree::TreeAdapter;

fn to_accesskit_rect(rect: Rect) -> accesskit::Rect {
    accesskit::Rect {
        x0: rect.left() as f64,
        y0: rect.top() as f64,
        x1: rect.right() as f64,
        y1: rect.bottom() as f64,
    }
}

fn child_node_id(base: NodeId, index: usize) -> Option<NodeId> {
    let offset = u64::try_from(index).ok()?;
    base.0.checked_add(offset).map(NodeId)
}

impl AccessibleItem<'_> {
    /// Builds the AccessKit node for this item.
    pub fn build_node(&self) -> Node {
        let mut node = Node::new(self.role().to_accesskit_role());
        node.set_bounds(to_accesskit_rect(self.rect()));

        let name = self.text(TextKind::Name);
        if !name.is_empty() {
            node.set_label(name);
        }

        match self {
            AccessibleItem::Cell(cell) => {
                let description = cell.text(TextKind::Description);
                if !description.is_empty() {
                    node.set_description(description);
                }
                let value = cell.text(TextKind::Value);
                if !value.is_empty() {
                    node.set_value(value);
                }

                let state = cell.state();
                if state.contains(AccessibleState::SELECTABLE) {
                    node.set_selected(state.contains(AccessibleState::SELECTED));
                    node.add_action(Action::Click);
                }
                if state.contains(AccessibleState::FOCUSABLE) {
                    node.add_action(Action::Focus);
                }
                if state.contains(AccessibleState::EXPANDABLE) {
                    node.set_expanded(state.contains(AccessibleState::EXPANDED));
                }

                match cell.handle().items().model().check_state(cell.index()) {
                    Some(CheckState::Checked) => node.set_toggled(Toggled::True),
                    Some(CheckState::PartiallyChecked) => node.set_toggled(Toggled::Mixed),
                    Some(CheckState::Unchecked) => node.set_toggled(Toggled::False),
                    None => {}
                }

                if let Some(row) = cell.row_index() {
                    node.set_row_index(row);
                }
                node.set_column_index(cell.column_index());
                if cell.handle().view().tree().is_some() {
                    node.set_level(cell.index().depth() + 1);
                }
            }
            AccessibleItem::Header(header) => match header.orientation() {
                Orientation::Horizontal => node.set_column_index(header.section()),
                Orientation::Vertical => node.set_row_index(header.section()),
            },
            AccessibleItem::Corner(_) => {}
        }

        node
    }
}

impl TableAdapter<'_> {
    /// Builds the node for the view itself, listing every child.
    pub fn build_node(&self, base: NodeId) -> Node {
        let mut node = Node::new(self.role().to_accesskit_role());
        node.set_bounds(to_accesskit_rect(self.rect()));

        let name = self.text(TextKind::Name);
        if !name.is_empty() {
            node.set_label(name);
        }
        let description = self.text(TextKind::Description);
        if !description.is_empty() {
            node.set_description(description);
        }

        node.set_row_count(self.row_count());
        node.set_column_count(self.column_count());

        let children: Vec<_> = (1..=self.child_count())
            .map_while(|index| child_node_id(base, index))
            .collect();
        if !children.is_empty() {
            node.set_children(children);
        }
        node
    }

    /// Builds a full update for the view rooted at `base`.
    ///
    /// Focus goes to the view's current item when it is shown, otherwise to
    /// the view itself.
    pub fn build_tree_update(&self, base: NodeId) -> TreeUpdate {
        let mut nodes = Vec::with_capacity(self.child_count() + 1);
        nodes.push((base, self.build_node(base)));
        for index in 1..=self.child_count() {
            let Some(id) = child_node_id(base, index) else {
                tracing::warn!(target: targets::ADAPTER, index, "child node id out of range");
                break;
            };
            if let Some(item) = self.child(index) {
                nodes.push((id, item.build_node()));
            }
        }

        let mapper = self.mapper();
        let focus = self
            .identity_of(&self.view().current_index())
            .and_then(|identity| mapper.to_logical_index(&identity))
            .and_then(|index| child_node_id(base, index))
            .unwrap_or(base);

        TreeUpdate {
            nodes,
            tree: Some(Tree::new(base)),
            focus,
        }
    }
}

impl TreeAdapter<'_> {
    pub fn build_node(&self, base: NodeId) -> Node {
        self.as_table().build_node(base)
    }

    pub fn build_tree_update(&self, base: NodeId) -> TreeUpdate {
        self.as_table().build_tree_update(base)
    }
}
