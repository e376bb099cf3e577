//! Accessibility roles and text kinds for item views.

/// The accessibility role of a view or one of its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessibleRole {
    /// A grid of rows and columns.
    Table,

    /// A hierarchical view of expandable rows.
    Tree,

    /// A single-column list of items.
    List,

    /// A header cell above a column.
    ColumnHeader,

    /// A header cell in front of a row.
    RowHeader,

    /// A data cell within a table.
    Cell,

    /// An item within a list.
    ListItem,

    /// An item within a tree.
    TreeItem,

    /// The corner button where the two header strips meet.
    Pane,
}

impl AccessibleRole {
    /// Returns `true` for the roles of data-carrying items.
    pub fn is_data_item(self) -> bool {
        matches!(
            self,
            AccessibleRole::Cell | AccessibleRole::ListItem | AccessibleRole::TreeItem
        )
    }

    /// Returns `true` for the header roles.
    pub fn is_header(self) -> bool {
        matches!(self, AccessibleRole::ColumnHeader | AccessibleRole::RowHeader)
    }

    /// Convert to AccessKit's Role enum.
    #[cfg(feature = "accesskit")]
    pub fn to_accesskit_role(self) -> accesskit::Role {
        use accesskit::Role;

        match self {
            AccessibleRole::Table => Role::Table,
            AccessibleRole::Tree => Role::Tree,
            AccessibleRole::List => Role::List,
            AccessibleRole::ColumnHeader => Role::ColumnHeader,
            AccessibleRole::RowHeader => Role::RowHeader,
            AccessibleRole::Cell => Role::Cell,
            AccessibleRole::ListItem => Role::ListItem,
            AccessibleRole::TreeItem => Role::TreeItem,
            AccessibleRole::Pane => Role::Pane,
        }
    }
}

#[cfg(feature = "accesskit")]
impl From<AccessibleRole> for accesskit::Role {
    fn from(role: AccessibleRole) -> Self {
        role.to_accesskit_role()
    }
}

/// Which text of an object is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKind {
    /// The label announced for the object.
    Name,
    /// The current value; items report the same text as for `Name`.
    Value,
    /// A longer description.
    Description,
}
