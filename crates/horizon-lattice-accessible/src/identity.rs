//! Identities of the children of an item view.

/// Identifies one child of an item view by its semantic position.
///
/// Equality is structural: two identities naming the same coordinate compare
/// equal no matter where they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellIdentity {
    /// A data cell at a visible row and a model column.
    DataCell { row: usize, column: usize },
    /// The header above a column.
    ColumnHeader(usize),
    /// The header in front of a row.
    RowHeader(usize),
    /// The corner where the row and column header strips meet.
    Corner,
}

impl CellIdentity {
    /// Shorthand for a data cell identity.
    #[inline]
    pub const fn cell(row: usize, column: usize) -> Self {
        CellIdentity::DataCell { row, column }
    }

    /// Returns `true` for data cells.
    #[inline]
    pub fn is_data_cell(&self) -> bool {
        matches!(self, CellIdentity::DataCell { .. })
    }

    /// Returns `true` for row and column headers.
    #[inline]
    pub fn is_header(&self) -> bool {
        matches!(self, CellIdentity::ColumnHeader(_) | CellIdentity::RowHeader(_))
    }

    /// The data row this identity belongs to, if any.
    pub fn row(&self) -> Option<usize> {
        match *self {
            CellIdentity::DataCell { row, .. } | CellIdentity::RowHeader(row) => Some(row),
            CellIdentity::ColumnHeader(_) | CellIdentity::Corner => None,
        }
    }

    /// The data column this identity belongs to, if any.
    pub fn column(&self) -> Option<usize> {
        match *self {
            CellIdentity::DataCell { column, .. } | CellIdentity::ColumnHeader(column) => {
                Some(column)
            }
            CellIdentity::RowHeader(_) | CellIdentity::Corner => None,
        }
    }
}
