//! Integration tests for table and list accessibility.

use std::sync::Arc;

use horizon_lattice_accessible::host::StandardTableView;
use horizon_lattice_accessible::{
    AccessError, AccessibleItem, AccessibleObject, AccessibleRole, AccessibleState, CellIdentity,
    ChangeKind, Relation, TableModelChange, TextKind,
};
use horizon_lattice_itemview::geometry::{Point, Rect};
use horizon_lattice_itemview::model::{
    ItemFlags, ItemModel, ItemRole, ModelIndex, SelectionMode, TableModel,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn grid(rows: usize, columns: usize) -> Arc<TableModel> {
    let data = (0..rows)
        .map(|row| (0..columns).map(|column| format!("r{row}c{column}")).collect())
        .collect();
    Arc::new(
        TableModel::from_display(data)
            .with_column_headers((0..columns).map(|column| format!("Column {column}")))
            .with_row_headers((0..rows).map(|row| format!("Row {row}"))),
    )
}

#[test]
fn test_three_by_two_child_layout() {
    init_tracing();
    let view = StandardTableView::new(grid(3, 2));
    let table = view.accessible();

    assert_eq!(table.role(), AccessibleRole::Table);
    assert_eq!(table.child_count(), 12);
    assert_eq!(table.child(1).unwrap().identity(), Some(CellIdentity::Corner));
    assert_eq!(table.child(2).unwrap().identity(), Some(CellIdentity::ColumnHeader(0)));
    assert_eq!(table.child(3).unwrap().identity(), Some(CellIdentity::ColumnHeader(1)));
    assert_eq!(table.child(4).unwrap().identity(), Some(CellIdentity::RowHeader(0)));
    assert_eq!(table.child(5).unwrap().identity(), Some(CellIdentity::cell(0, 0)));
    assert_eq!(table.child(6).unwrap().identity(), Some(CellIdentity::cell(0, 1)));
    assert_eq!(table.child(12).unwrap().identity(), Some(CellIdentity::cell(2, 1)));

    assert_eq!(table.child(2).unwrap().text(TextKind::Name), "Column 0");
    assert_eq!(table.child(4).unwrap().text(TextKind::Name), "Row 0");
    assert_eq!(table.row_description(2), "Row 2");
    assert_eq!(table.column_description(1), "Column 1");
    assert_eq!(table.row_description(7), "");
}

#[test]
fn test_child_count_tracks_header_configuration() {
    for (row_header, column_header, expected) in [
        (true, true, 20),
        (true, false, 16),
        (false, true, 15),
        (false, false, 12),
    ] {
        let view = StandardTableView::new(grid(4, 3))
            .with_row_header(row_header)
            .with_column_header(column_header);
        let table = view.accessible();
        assert_eq!(table.child_count(), expected);

        for index in 1..=table.child_count() {
            let item = table.child(index).unwrap();
            assert_eq!(table.index_of_child(&item), Some(index));
        }
        assert!(table.child(expected + 1).is_none());
    }
}

#[test]
fn test_row_header_only_never_reports_column_headers() {
    let view = StandardTableView::new(grid(2, 2)).with_column_header(false);
    let table = view.accessible();

    for index in 1..=table.child_count() {
        let identity = table.child(index).unwrap().identity().unwrap();
        assert!(!matches!(
            identity,
            CellIdentity::ColumnHeader(_) | CellIdentity::Corner
        ));
    }
    assert_eq!(table.child(1).unwrap().role(), AccessibleRole::RowHeader);
}

#[test]
fn test_out_of_range_cells() {
    init_tracing();
    let model = grid(3, 2);
    let view = StandardTableView::new(model.clone());
    let table = view.accessible();

    assert!(table.cell_at(usize::MAX, 0).is_none());
    assert!(table.cell_at(table.row_count(), 0).is_none());
    assert!(table.cell_at(0, table.column_count()).is_none());
    assert_eq!(
        table.try_cell_at(3, 0).unwrap_err(),
        AccessError::InvalidCell {
            row: 3,
            column: 0,
            rows: 3,
            columns: 2
        }
    );

    // Lookups leave the model and the change record alone.
    assert_eq!(model.rows(), 3);
    assert_eq!(table.model_change(), TableModelChange::default());
}

#[test]
fn test_selection_symmetry() {
    init_tracing();
    let view = StandardTableView::new(grid(3, 2)).with_selection_mode(SelectionMode::MultiSelection);
    let table = view.accessible();

    table.select_row(1).unwrap();
    assert!(table.is_row_selected(1));
    assert!(!table.is_row_selected(0));
    assert_eq!(table.selected_rows(), vec![1]);
    assert_eq!(table.selected_row_count(), 1);
    assert_eq!(table.selected_cell_count(), 2);

    table.unselect_row(1).unwrap();
    assert!(!table.is_row_selected(1));
    assert_eq!(table.selected_cell_count(), 0);

    table.select_column(0).unwrap();
    assert!(table.is_column_selected(0));
    assert_eq!(table.selected_columns(), vec![0]);
    assert_eq!(table.selected_cell_count(), 3);
    assert!(table.selected_cells().iter().all(|cell| cell.column_index() == 0));

    table.unselect_column(0).unwrap();
    assert!(!table.is_column_selected(0));
    assert_eq!(table.selected_column_count(), 0);

    assert_eq!(
        table.select_row(3),
        Err(AccessError::InvalidRow { row: 3, rows: 3 })
    );
    assert_eq!(
        table.unselect_column(2),
        Err(AccessError::InvalidColumn { column: 2, columns: 2 })
    );
}

#[test]
fn test_selection_disabled_leaves_state_untouched() {
    let view = StandardTableView::new(grid(3, 2)).with_selection_mode(SelectionMode::MultiSelection);
    let table = view.accessible();
    table.select_row(0).unwrap();

    view.set_selection_mode(SelectionMode::NoSelection);
    assert_eq!(table.select_row(1), Err(AccessError::SelectionDisabled));
    assert_eq!(table.unselect_row(0), Err(AccessError::SelectionDisabled));
    assert_eq!(table.select_column(1), Err(AccessError::SelectionDisabled));
    assert_eq!(table.unselect_column(0), Err(AccessError::SelectionDisabled));

    assert!(table.is_row_selected(0));
    assert!(!table.is_row_selected(1));
    assert_eq!(table.selected_cell_count(), 2);
}

#[test]
fn test_change_record_is_overwritten() {
    init_tracing();
    let model = grid(3, 2);
    let view = StandardTableView::new(model.clone());
    let table = view.accessible();

    assert!(model.insert_rows(2, 3));
    table.rows_inserted(2, 4);
    assert_eq!(
        table.model_change(),
        TableModelChange {
            kind: ChangeKind::Insert,
            first_row: 2,
            last_row: 4,
            first_column: 0,
            last_column: 0,
        }
    );

    assert!(model.remove_columns(0, 1));
    table.columns_removed(0, 0);
    assert_eq!(
        table.model_change(),
        TableModelChange {
            kind: ChangeKind::Delete,
            first_row: 0,
            last_row: 0,
            first_column: 0,
            last_column: 0,
        }
    );

    assert!(model.move_row(0, 5));
    table.rows_moved(0, 0);
    assert_eq!(table.model_change(), TableModelChange::full_extent(6, 1));
    assert_eq!(view.changes().latest(), table.model_change());
}

#[test]
fn test_cell_state_and_text() {
    let model = Arc::new(
        TableModel::from_display(vec![vec!["a", "b"], vec!["c", "d"]])
            .with_default_flags(ItemFlags::editable()),
    );
    model.set_cell(0, 1, ItemRole::AccessibleText, "bee");
    model.set_cell(0, 1, ItemRole::AccessibleDescription, "second letter");
    let view = StandardTableView::new(model.clone()).with_selection_mode(SelectionMode::MultiSelection);
    let table = view.accessible();

    table.select_row(0).unwrap();
    view.set_current_index(model.index(0, 1, &ModelIndex::invalid()));

    let cell = table.cell_at(0, 1).unwrap();
    assert_eq!(cell.role(), AccessibleRole::Cell);
    assert_eq!(cell.text(TextKind::Name), "bee");
    assert_eq!(cell.text(TextKind::Value), "bee");
    assert_eq!(cell.text(TextKind::Description), "second letter");
    assert_eq!(
        cell.state(),
        AccessibleState::SELECTED
            | AccessibleState::FOCUSED
            | AccessibleState::SELECTABLE
            | AccessibleState::FOCUSABLE
            | AccessibleState::MULTI_SELECTABLE
    );

    let other = table.cell_at(1, 0).unwrap();
    assert!(!other.state().contains(AccessibleState::SELECTED));
    assert_eq!(other.text(TextKind::Name), "c");

    other.set_text("see").unwrap();
    assert_eq!(model.display_text(other.index()).as_deref(), Some("see"));

    let extents = other.row_column_extents().unwrap();
    assert_eq!((extents.row, extents.column), (1, 0));
    assert_eq!((extents.row_extent, extents.column_extent), (1, 1));
    assert!(!extents.selected);
}

#[test]
fn test_read_only_items_reject_edits() {
    let model = grid(2, 2);
    let view = StandardTableView::new(model.clone());
    let table = view.accessible();

    let cell = table.cell_at(1, 1).unwrap();
    assert_eq!(
        cell.set_text("changed"),
        Err(AccessError::NotEditable { row: 1, column: 1 })
    );
    assert_eq!(cell.text(TextKind::Name), "r1c1");

    let header = table.child(2).unwrap();
    assert_eq!(header.set_text("changed"), Err(AccessError::ReadOnly));
    assert_eq!(header.state(), AccessibleState::empty());
}

#[test]
fn test_geometry_and_hit_testing() {
    let view = StandardTableView::new(grid(3, 2)).with_global_origin(Point::new(100.0, 50.0));
    let table = view.accessible();

    assert_eq!(table.rect(), Rect::new(100.0, 50.0, 400.0, 300.0));
    assert_eq!(
        table.cell_at(1, 1).unwrap().rect(),
        Rect::new(240.0, 98.0, 100.0, 24.0)
    );
    assert_eq!(
        table.child(2).unwrap().rect(),
        Rect::new(140.0, 50.0, 100.0, 24.0)
    );

    let hit = |x, y| table.child_at(x, y).and_then(|item| item.identity());
    assert_eq!(hit(250.0, 104.0), Some(CellIdentity::cell(1, 1)));
    assert_eq!(hit(145.0, 55.0), Some(CellIdentity::ColumnHeader(0)));
    assert_eq!(hit(105.0, 100.0), Some(CellIdentity::RowHeader(1)));
    assert_eq!(hit(105.0, 55.0), Some(CellIdentity::Corner));
    // Right of the last column, and outside the view.
    assert_eq!(hit(450.0, 104.0), None);
    assert_eq!(hit(99.0, 55.0), None);
}

#[test]
fn test_hidden_and_scrolled_views() {
    let mut view = StandardTableView::new(grid(3, 2));

    view.set_scroll_offset(Point::new(0.0, 1000.0));
    {
        let table = view.accessible();
        let cell = table.cell_at(0, 0).unwrap();
        assert!(cell.state().contains(AccessibleState::INVISIBLE));
    }

    view.set_scroll_offset(Point::ZERO);
    view.set_visible(false);
    let table = view.accessible();
    assert_eq!(table.rect(), Rect::ZERO);
    assert_eq!(table.cell_at(0, 0).unwrap().rect(), Rect::ZERO);
    assert!(table.child_at(50.0, 30.0).is_none());
}

#[test]
fn test_cell_navigation() {
    let view = StandardTableView::new(grid(3, 2));
    let table = view.accessible();
    let cell = table.cell_at(1, 0).unwrap();

    let parent = cell.navigate(Relation::Ancestor, 1).unwrap();
    assert_eq!(parent.role(), AccessibleRole::Table);
    assert!(cell.navigate(Relation::Ancestor, 2).is_none());
    assert!(cell.navigate(Relation::Child, 1).is_none());

    let sibling = cell.navigate(Relation::Sibling, 1).unwrap();
    assert_eq!(sibling.role(), AccessibleRole::Pane);

    let identity = |object: Option<AccessibleObject<'_>>| {
        object.and_then(|object| object.as_item().and_then(AccessibleItem::identity))
    };
    assert_eq!(identity(cell.navigate(Relation::Up, 0)), Some(CellIdentity::cell(0, 0)));
    assert_eq!(identity(cell.navigate(Relation::Down, 0)), Some(CellIdentity::cell(2, 0)));
    assert_eq!(identity(cell.navigate(Relation::Right, 0)), Some(CellIdentity::cell(1, 1)));
    assert_eq!(identity(cell.navigate(Relation::Left, 0)), None);

    let headers = cell.row_header_cells();
    assert_eq!(headers.len(), 1);
    assert_eq!(headers[0].text(TextKind::Name), "Row 1");
    assert_eq!(cell.column_header_cells()[0].text(TextKind::Name), "Column 0");

    assert!(table.navigate(Relation::Child, 5).is_some());
    assert!(table.navigate(Relation::Ancestor, 1).is_none());
    assert!(table.caption().is_none());
    assert!(table.summary().is_none());
}

#[test]
fn test_foreign_children_are_rejected() {
    init_tracing();
    let first = StandardTableView::new(grid(2, 2));
    let second = StandardTableView::new(grid(2, 2));
    let list = StandardTableView::new(grid(2, 1))
        .with_kind(horizon_lattice_accessible::ViewKind::List);

    let table = first.accessible();
    let foreign = second.accessible().child(5).unwrap();
    assert!(matches!(
        table.try_index_of_child(&foreign),
        Err(AccessError::ForeignChild(_))
    ));
    assert_eq!(table.index_of_child(&foreign), None);

    let list_adapter = list.accessible();
    assert_eq!(list_adapter.role(), AccessibleRole::List);
    assert_eq!(list_adapter.child_count(), 2);
    let item = list_adapter.child(1).unwrap();
    assert_eq!(item.role(), AccessibleRole::ListItem);
    assert!(item.as_cell().unwrap().row_header_cells().is_empty());
    assert_eq!(list_adapter.index_of_child(&item), Some(1));
}

#[test]
fn test_view_text() {
    let view = StandardTableView::new(grid(1, 1))
        .with_accessible_name("Results")
        .with_accessible_description("Query output");
    let table = view.accessible();

    assert_eq!(table.text(TextKind::Name), "Results");
    assert_eq!(table.text(TextKind::Description), "Query output");
    assert_eq!(table.text(TextKind::Value), "");
    assert_eq!(table.state(), AccessibleState::empty());
}
