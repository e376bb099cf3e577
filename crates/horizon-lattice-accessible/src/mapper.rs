//! Conversion between cell identities and flat child indices.
//!
//! Accessibility clients address the children of a view with one-based flat
//! indices. The enumeration is row-major over a grid that is one row taller
//! when a column header is shown and one column wider when a row header is
//! shown:
//!
//! ```text
//!            v = 1           v = 0
//! h = 1   [corner][ch0][ch1]   [ch0][ch1]
//!         [rh0   ][c00][c01]   [c00][c01]
//!         [rh1   ][c10][c11]   [c10][c11]
//! ```
//!
//! With `h` and `v` the header extents (0 or 1) and `C` the data column
//! count, the data cell `(r, c)` sits at `(r + h) * (C + v) + (c + v) + 1`.

use crate::header::HeaderLocator;
use crate::identity::CellIdentity;

/// Maps [`CellIdentity`] values to one-based flat indices and back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearIndexMapper {
    rows: usize,
    columns: usize,
    row_header: bool,
    column_header: bool,
}

impl LinearIndexMapper {
    /// Creates a mapper for `rows` by `columns` data cells.
    pub const fn new(rows: usize, columns: usize, row_header: bool, column_header: bool) -> Self {
        Self {
            rows,
            columns,
            row_header,
            column_header,
        }
    }

    /// Creates a mapper using a view's current header configuration.
    pub fn with_headers(rows: usize, columns: usize, headers: &HeaderLocator<'_>) -> Self {
        Self::new(
            rows,
            columns,
            headers.has_row_header(),
            headers.has_column_header(),
        )
    }

    #[inline]
    fn h(&self) -> usize {
        usize::from(self.column_header)
    }

    #[inline]
    fn v(&self) -> usize {
        usize::from(self.row_header)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of flat columns, header column included.
    #[inline]
    pub fn flat_columns(&self) -> usize {
        self.columns + self.v()
    }

    /// Total number of addressable children.
    pub fn child_count(&self) -> usize {
        (self.rows + self.h()) * self.flat_columns()
    }

    /// Returns `true` if the identity exists in this configuration.
    pub fn contains(&self, identity: &CellIdentity) -> bool {
        match *identity {
            CellIdentity::DataCell { row, column } => row < self.rows && column < self.columns,
            CellIdentity::ColumnHeader(column) => self.column_header && column < self.columns,
            CellIdentity::RowHeader(row) => self.row_header && row < self.rows,
            CellIdentity::Corner => self.row_header && self.column_header,
        }
    }

    /// Returns the one-based flat index of an identity.
    ///
    /// Returns `None` if the identity doesn't exist in this configuration.
    pub fn to_logical_index(&self, identity: &CellIdentity) -> Option<usize> {
        if !self.contains(identity) {
            return None;
        }
        let (h, v) = (self.h(), self.v());
        let index = match *identity {
            CellIdentity::DataCell { row, column } => {
                (row + h) * self.flat_columns() + (column + v) + 1
            }
            CellIdentity::ColumnHeader(column) => column + v + 1,
            CellIdentity::RowHeader(row) => (row + h) * self.flat_columns() + 1,
            CellIdentity::Corner => 1,
        };
        Some(index)
    }

    /// Returns the identity at a one-based flat index.
    ///
    /// Index 0 and indices past [`child_count`](Self::child_count) yield `None`.
    pub fn to_identity(&self, logical: usize) -> Option<CellIdentity> {
        if logical == 0 || logical > self.child_count() {
            return None;
        }
        let index = logical - 1;
        let columns = self.flat_columns();
        let row = index / columns;
        let column = index % columns;

        let identity = if self.row_header && column == 0 {
            if self.column_header && row == 0 {
                CellIdentity::Corner
            } else {
                CellIdentity::RowHeader(row - self.h())
            }
        } else if self.column_header && row == 0 {
            CellIdentity::ColumnHeader(column - self.v())
        } else {
            CellIdentity::DataCell {
                row: row - self.h(),
                column: column - self.v(),
            }
        };
        Some(identity)
    }

    /// Enumerates every identity in flat index order.
    pub fn identities(&self) -> impl Iterator<Item = CellIdentity> + '_ {
        (1..=self.child_count()).filter_map(|logical| self.to_identity(logical))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIGS: [(bool, bool); 4] = [(false, false), (true, false), (false, true), (true, true)];

    /// Row-major enumeration built independently of the index formula.
    fn row_major(mapper: &LinearIndexMapper, row_header: bool, column_header: bool) -> Vec<CellIdentity> {
        let mut all = Vec::new();
        if column_header {
            if row_header {
                all.push(CellIdentity::Corner);
            }
            all.extend((0..mapper.columns()).map(CellIdentity::ColumnHeader));
        }
        for row in 0..mapper.rows() {
            if row_header {
                all.push(CellIdentity::RowHeader(row));
            }
            all.extend((0..mapper.columns()).map(|column| CellIdentity::cell(row, column)));
        }
        all
    }

    #[test]
    fn test_round_trip_all_configurations() {
        for (row_header, column_header) in CONFIGS {
            for rows in 0..4 {
                for columns in 0..4 {
                    let mapper = LinearIndexMapper::new(rows, columns, row_header, column_header);
                    for identity in row_major(&mapper, row_header, column_header) {
                        let logical = mapper.to_logical_index(&identity).unwrap();
                        assert_eq!(mapper.to_identity(logical), Some(identity), "{mapper:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_row_major_monotonicity() {
        for (row_header, column_header) in CONFIGS {
            let mapper = LinearIndexMapper::new(3, 4, row_header, column_header);
            let indices: Vec<usize> = row_major(&mapper, row_header, column_header)
                .iter()
                .map(|identity| mapper.to_logical_index(identity).unwrap())
                .collect();
            let expected: Vec<usize> = (1..=mapper.child_count()).collect();
            assert_eq!(indices, expected);
        }
    }

    #[test]
    fn test_three_by_two_with_both_headers() {
        let mapper = LinearIndexMapper::new(3, 2, true, true);
        assert_eq!(mapper.child_count(), 12);
        assert_eq!(mapper.to_identity(1), Some(CellIdentity::Corner));
        assert_eq!(mapper.to_identity(2), Some(CellIdentity::ColumnHeader(0)));
        assert_eq!(mapper.to_identity(3), Some(CellIdentity::ColumnHeader(1)));
        assert_eq!(mapper.to_identity(4), Some(CellIdentity::RowHeader(0)));
        assert_eq!(mapper.to_identity(5), Some(CellIdentity::cell(0, 0)));
        assert_eq!(mapper.to_identity(6), Some(CellIdentity::cell(0, 1)));
        assert_eq!(mapper.to_identity(12), Some(CellIdentity::cell(2, 1)));
    }

    #[test]
    fn test_row_header_only_never_yields_column_header() {
        let mapper = LinearIndexMapper::new(2, 2, true, false);
        assert_eq!(mapper.child_count(), 6);
        assert_eq!(mapper.to_identity(1), Some(CellIdentity::RowHeader(0)));
        assert_eq!(mapper.to_identity(2), Some(CellIdentity::cell(0, 0)));
        assert_eq!(mapper.to_identity(4), Some(CellIdentity::RowHeader(1)));
        assert!(mapper
            .identities()
            .all(|identity| !matches!(identity, CellIdentity::ColumnHeader(_) | CellIdentity::Corner)));
    }

    #[test]
    fn test_out_of_universe() {
        let mapper = LinearIndexMapper::new(2, 2, false, true);
        assert_eq!(mapper.to_identity(0), None);
        assert_eq!(mapper.to_identity(mapper.child_count() + 1), None);
        assert_eq!(mapper.to_logical_index(&CellIdentity::Corner), None);
        assert_eq!(mapper.to_logical_index(&CellIdentity::RowHeader(0)), None);
        assert_eq!(mapper.to_logical_index(&CellIdentity::cell(2, 0)), None);
        assert_eq!(mapper.to_logical_index(&CellIdentity::ColumnHeader(1)), Some(2));

        let empty = LinearIndexMapper::new(0, 0, true, true);
        assert_eq!(empty.child_count(), 1);
        assert_eq!(empty.to_identity(1), Some(CellIdentity::Corner));
        assert_eq!(LinearIndexMapper::new(5, 0, false, false).to_identity(1), None);
    }
}
