//! Closed sets of accessible objects.
//!
//! [`AccessibleItem`] covers the children of a view, [`AccessibleObject`]
//! adds the views themselves. Both dispatch every query by matching on their
//! variant.

use horizon_lattice_itemview::geometry::Rect;

use crate::cell::{CellObject, CornerButton, HeaderCellObject};
use crate::error::{AccessError, AccessResult};
use crate::identity::CellIdentity;
use crate::relation::{Relation, Relationship};
use crate::role::{AccessibleRole, TextKind};
use crate::state::AccessibleState;
use crate::table::TableAdapter;
use crate::tree::TreeAdapter;
use crate::view::{ViewHandle, ViewRef};

/// A child of an item view.
#[derive(Clone, Debug)]
pub enum AccessibleItem<'a> {
    /// A data cell, list item or tree item.
    Cell(CellObject<'a>),
    /// A row or column header section.
    Header(HeaderCellObject<'a>),
    /// The corner button between the header strips.
    Corner(CornerButton<'a>),
}

impl<'a> AccessibleItem<'a> {
    pub fn handle(&self) -> ViewHandle<'a> {
        match self {
            AccessibleItem::Cell(cell) => cell.handle(),
            AccessibleItem::Header(header) => header.handle(),
            AccessibleItem::Corner(corner) => corner.handle(),
        }
    }

    pub fn role(&self) -> AccessibleRole {
        match self {
            AccessibleItem::Cell(cell) => cell.role(),
            AccessibleItem::Header(header) => header.role(),
            AccessibleItem::Corner(corner) => corner.role(),
        }
    }

    /// The item's identity in its view's flat child space.
    ///
    /// `None` for tree items that are currently hidden.
    pub fn identity(&self) -> Option<CellIdentity> {
        match self {
            AccessibleItem::Cell(cell) => cell.identity(),
            AccessibleItem::Header(header) => Some(header.identity()),
            AccessibleItem::Corner(_) => Some(CellIdentity::Corner),
        }
    }

    pub fn text(&self, kind: TextKind) -> String {
        match self {
            AccessibleItem::Cell(cell) => cell.text(kind),
            AccessibleItem::Header(header) => header.text(kind),
            AccessibleItem::Corner(corner) => corner.text(kind),
        }
    }

    pub fn set_text(&self, value: &str) -> AccessResult<()> {
        match self {
            AccessibleItem::Cell(cell) => cell.set_text(value),
            AccessibleItem::Header(header) => header.set_text(value),
            AccessibleItem::Corner(_) => Err(AccessError::ReadOnly),
        }
    }

    pub fn rect(&self) -> Rect {
        match self {
            AccessibleItem::Cell(cell) => cell.rect(),
            AccessibleItem::Header(header) => header.rect(),
            AccessibleItem::Corner(corner) => corner.rect(),
        }
    }

    pub fn state(&self) -> AccessibleState {
        match self {
            AccessibleItem::Cell(cell) => cell.state(),
            AccessibleItem::Header(header) => header.state(),
            AccessibleItem::Corner(corner) => corner.state(),
        }
    }

    pub fn parent(&self) -> AccessibleObject<'a> {
        AccessibleObject::owner(self.handle())
    }

    pub fn navigate(&self, relation: Relation, index: usize) -> Option<AccessibleObject<'a>> {
        match self {
            AccessibleItem::Cell(cell) => cell.navigate(relation, index),
            AccessibleItem::Header(header) => header.navigate(relation, index),
            AccessibleItem::Corner(corner) => corner.navigate(relation, index),
        }
    }

    pub fn relation_to(&self, other: &AccessibleItem<'_>) -> Relationship {
        match self {
            AccessibleItem::Cell(cell) => cell.relation_to(other),
            AccessibleItem::Header(_) | AccessibleItem::Corner(_) => Relationship::Unrelated,
        }
    }

    pub fn as_cell(&self) -> Option<&CellObject<'a>> {
        match self {
            AccessibleItem::Cell(cell) => Some(cell),
            _ => None,
        }
    }

    pub fn as_header(&self) -> Option<&HeaderCellObject<'a>> {
        match self {
            AccessibleItem::Header(header) => Some(header),
            _ => None,
        }
    }
}

impl<'a> From<CellObject<'a>> for AccessibleItem<'a> {
    fn from(cell: CellObject<'a>) -> Self {
        AccessibleItem::Cell(cell)
    }
}

impl<'a> From<HeaderCellObject<'a>> for AccessibleItem<'a> {
    fn from(header: HeaderCellObject<'a>) -> Self {
        AccessibleItem::Header(header)
    }
}

/// Any object reachable through navigation: a view or one of its children.
#[derive(Clone, Debug)]
pub enum AccessibleObject<'a> {
    Table(TableAdapter<'a>),
    Tree(TreeAdapter<'a>),
    Item(AccessibleItem<'a>),
}

impl<'a> AccessibleObject<'a> {
    /// The adapter owning the children of a view.
    pub(crate) fn owner(handle: ViewHandle<'a>) -> Self {
        match handle.view() {
            ViewRef::Tree(tree) => AccessibleObject::Tree(TreeAdapter::new(tree, handle.changes())),
            ViewRef::Items(view) => {
                AccessibleObject::Table(TableAdapter::new(view, handle.changes()))
            }
        }
    }

    pub fn role(&self) -> AccessibleRole {
        match self {
            AccessibleObject::Table(table) => table.role(),
            AccessibleObject::Tree(tree) => tree.role(),
            AccessibleObject::Item(item) => item.role(),
        }
    }

    pub fn text(&self, kind: TextKind) -> String {
        match self {
            AccessibleObject::Table(table) => table.text(kind),
            AccessibleObject::Tree(tree) => tree.text(kind),
            AccessibleObject::Item(item) => item.text(kind),
        }
    }

    pub fn rect(&self) -> Rect {
        match self {
            AccessibleObject::Table(table) => table.rect(),
            AccessibleObject::Tree(tree) => tree.rect(),
            AccessibleObject::Item(item) => item.rect(),
        }
    }

    pub fn state(&self) -> AccessibleState {
        match self {
            AccessibleObject::Table(table) => table.state(),
            AccessibleObject::Tree(tree) => tree.state(),
            AccessibleObject::Item(item) => item.state(),
        }
    }

    pub fn child_count(&self) -> usize {
        match self {
            AccessibleObject::Table(table) => table.child_count(),
            AccessibleObject::Tree(tree) => tree.child_count(),
            AccessibleObject::Item(_) => 0,
        }
    }

    /// The child at a one-based flat index.
    pub fn child(&self, index: usize) -> Option<AccessibleItem<'a>> {
        match self {
            AccessibleObject::Table(table) => table.child(index),
            AccessibleObject::Tree(tree) => tree.child(index),
            AccessibleObject::Item(_) => None,
        }
    }

    /// The data cell at a row and column of a view object.
    pub fn try_cell_at(&self, row: usize, column: usize) -> AccessResult<CellObject<'a>> {
        match self {
            AccessibleObject::Table(table) => table.try_cell_at(row, column),
            AccessibleObject::Tree(tree) => tree.try_cell_at(row, column),
            AccessibleObject::Item(item) => Err(AccessError::ForeignChild(format!(
                "{:?} has no cells",
                item.role()
            ))),
        }
    }

    pub fn navigate(&self, relation: Relation, index: usize) -> Option<AccessibleObject<'a>> {
        match self {
            AccessibleObject::Table(table) => table.navigate(relation, index),
            AccessibleObject::Tree(tree) => tree.navigate(relation, index),
            AccessibleObject::Item(item) => item.navigate(relation, index),
        }
    }

    pub fn as_item(&self) -> Option<&AccessibleItem<'a>> {
        match self {
            AccessibleObject::Item(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&TableAdapter<'a>> {
        match self {
            AccessibleObject::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_tree(&self) -> Option<&TreeAdapter<'a>> {
        match self {
            AccessibleObject::Tree(tree) => Some(tree),
            _ => None,
        }
    }
}
