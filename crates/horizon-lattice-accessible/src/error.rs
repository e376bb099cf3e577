//! Error types for the accessibility adapters.

use thiserror::Error;

/// Errors returned by the fallible (`try_*`) adapter operations.
///
/// The infallible counterparts log these as warnings and return `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// A data cell coordinate outside the view.
    #[error("invalid cell ({row}, {column}) for a {rows}x{columns} view")]
    InvalidCell {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    /// A row outside the view.
    #[error("invalid row {row} (row count {rows})")]
    InvalidRow { row: usize, rows: usize },

    /// A column outside the view.
    #[error("invalid column {column} (column count {columns})")]
    InvalidColumn { column: usize, columns: usize },

    /// The object does not belong to this adapter's view or coordinate space.
    #[error("object is not a child of this view: {0}")]
    ForeignChild(String),

    /// A header was addressed on an axis the view doesn't show.
    #[error("the view has no {0} header")]
    MissingHeader(&'static str),

    /// The view's selection mode disallows selection.
    #[error("selection is disabled for this view")]
    SelectionDisabled,

    /// The cell's flags don't permit editing.
    #[error("cell ({row}, {column}) is not editable")]
    NotEditable { row: usize, column: usize },

    /// Header cells cannot be edited.
    #[error("header cells are read-only")]
    ReadOnly,
}

/// Result type for adapter operations.
pub type AccessResult<T> = Result<T, AccessError>;
