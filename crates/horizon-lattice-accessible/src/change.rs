//! Bookkeeping for the most recent structural change of a view.

use parking_lot::Mutex;

use crate::targets;

/// The kind of a structural change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChangeKind {
    /// Rows or columns were inserted.
    Insert,
    /// Rows or columns were removed.
    Delete,
    /// Cells changed in place, including reordering.
    #[default]
    Update,
}

/// A structural change with its affected row and column ranges (inclusive).
///
/// A row change spans columns `0..=0` and a column change spans rows `0..=0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TableModelChange {
    pub kind: ChangeKind,
    pub first_row: usize,
    pub last_row: usize,
    pub first_column: usize,
    pub last_column: usize,
}

impl TableModelChange {
    /// A change affecting rows `first..=last`.
    pub fn rows(kind: ChangeKind, first: usize, last: usize) -> Self {
        Self {
            kind,
            first_row: first,
            last_row: last,
            ..Self::default()
        }
    }

    /// A change affecting columns `first..=last`.
    pub fn columns(kind: ChangeKind, first: usize, last: usize) -> Self {
        Self {
            kind,
            first_column: first,
            last_column: last,
            ..Self::default()
        }
    }

    /// An update spanning a whole `rows` by `columns` view.
    pub fn full_extent(rows: usize, columns: usize) -> Self {
        Self {
            kind: ChangeKind::Update,
            first_row: 0,
            last_row: rows.saturating_sub(1),
            first_column: 0,
            last_column: columns.saturating_sub(1),
        }
    }
}

/// Holds the latest structural change reported for a view.
///
/// Each notification overwrites the previous record; nothing is queued, so
/// readers must poll right after the change they are interested in. Before
/// the first notification the default record is reported.
#[derive(Debug, Default)]
pub struct ChangeTracker {
    latest: Mutex<TableModelChange>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored record.
    pub fn record(&self, change: TableModelChange) {
        tracing::debug!(
            target: targets::CHANGES,
            kind = ?change.kind,
            first_row = change.first_row,
            last_row = change.last_row,
            first_column = change.first_column,
            last_column = change.last_column,
            "structural change recorded"
        );
        *self.latest.lock() = change;
    }

    /// Returns the stored record.
    pub fn latest(&self) -> TableModelChange {
        *self.latest.lock()
    }

    /// Restores the default record.
    pub fn reset(&self) {
        *self.latest.lock() = TableModelChange::default();
    }

    pub fn rows_inserted(&self, first: usize, last: usize) {
        self.record(TableModelChange::rows(ChangeKind::Insert, first, last));
    }

    pub fn rows_removed(&self, first: usize, last: usize) {
        self.record(TableModelChange::rows(ChangeKind::Delete, first, last));
    }

    pub fn columns_inserted(&self, first: usize, last: usize) {
        self.record(TableModelChange::columns(ChangeKind::Insert, first, last));
    }

    pub fn columns_removed(&self, first: usize, last: usize) {
        self.record(TableModelChange::columns(ChangeKind::Delete, first, last));
    }

    /// Records a reordering as an update over the whole current extent.
    pub fn reordered(&self, rows: usize, columns: usize) {
        self.record(TableModelChange::full_extent(rows, columns));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record() {
        let tracker = ChangeTracker::new();
        let change = tracker.latest();
        assert_eq!(change.kind, ChangeKind::Update);
        assert_eq!(change, TableModelChange::default());
    }

    #[test]
    fn test_latest_change_wins() {
        let tracker = ChangeTracker::new();
        tracker.rows_inserted(2, 4);
        assert_eq!(tracker.latest(), TableModelChange::rows(ChangeKind::Insert, 2, 4));

        tracker.columns_removed(0, 0);
        let change = tracker.latest();
        assert_eq!(change.kind, ChangeKind::Delete);
        assert_eq!((change.first_column, change.last_column), (0, 0));
        assert_eq!((change.first_row, change.last_row), (0, 0));
    }

    #[test]
    fn test_reorder_spans_extent() {
        let tracker = ChangeTracker::new();
        tracker.reordered(5, 3);
        assert_eq!(
            tracker.latest(),
            TableModelChange {
                kind: ChangeKind::Update,
                first_row: 0,
                last_row: 4,
                first_column: 0,
                last_column: 2,
            }
        );

        tracker.reset();
        assert_eq!(tracker.latest(), TableModelChange::default());
    }
}
