//! Integration tests for tree accessibility.

use std::sync::Arc;

use horizon_lattice_accessible::host::{StandardTableView, StandardTreeView};
use horizon_lattice_accessible::{
    AccessError, AccessibleItem, AccessibleRole, AccessibleState, CellIdentity, ChangeTracker,
    ItemView, Relation, Relationship, TextKind, TreeAdapter, TreeItemView, ViewKind, VisibleRows,
};
use horizon_lattice_itemview::geometry::{Point, Rect, Size};
use horizon_lattice_itemview::model::{
    ItemData, ItemModel, ModelIndex, Orientation, SelectionFlags, SelectionMode, TableModel,
    TreeModel,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn row(name: &str, count: &str) -> Vec<ItemData> {
    vec![ItemData::from(name), ItemData::from(count)]
}

/// Fruits (Apple, Pear (Williams)), Vegetables.
fn pantry() -> Arc<TreeModel> {
    let model = TreeModel::new(2).with_header_labels(["Item", "Count"]);
    let fruits = model.add_root_row(row("Fruits", "3"));
    model.add_child_row(fruits, row("Apple", "1"));
    if let Some(pear) = model.add_child_row(fruits, row("Pear", "2")) {
        model.add_child_row(pear, row("Williams", "2"));
    }
    model.add_root_row(row("Vegetables", "0"));
    Arc::new(model)
}

fn root(model: &TreeModel, row: usize) -> ModelIndex {
    model.index(row, 0, &ModelIndex::invalid())
}

#[test]
fn test_collapsed_tree_layout() {
    init_tracing();
    let view = StandardTreeView::new(pantry());
    let tree = view.accessible();

    assert_eq!(tree.role(), AccessibleRole::Tree);
    assert_eq!(tree.row_count(), 2);
    assert_eq!(tree.column_count(), 2);
    assert_eq!(tree.child_count(), 6);
    assert_eq!(tree.child(1).unwrap().identity(), Some(CellIdentity::ColumnHeader(0)));
    assert_eq!(tree.child(2).unwrap().text(TextKind::Name), "Count");

    let first = tree.child(3).unwrap();
    assert_eq!(first.role(), AccessibleRole::TreeItem);
    assert_eq!(first.text(TextKind::Name), "Fruits");
    assert_eq!(tree.child(6).unwrap().text(TextKind::Name), "0");

    assert_eq!(tree.row_description(0), "");
    assert_eq!(tree.column_description(0), "Item");
    assert!(tree.child(7).is_none());
}

#[test]
fn test_tree_without_header() {
    let view = StandardTreeView::new(pantry()).with_column_header(false);
    let tree = view.accessible();

    assert_eq!(tree.child_count(), 4);
    assert_eq!(tree.child(1).unwrap().identity(), Some(CellIdentity::cell(0, 0)));
    for index in 1..=tree.child_count() {
        let item = tree.child(index).unwrap();
        assert_eq!(tree.index_of_child(&item), Some(index));
    }
}

#[test]
fn test_expansion_changes_visible_rows() {
    init_tracing();
    let model = pantry();
    let mut view = StandardTreeView::new(model.clone());
    let fruits = root(&model, 0);
    let vegetables = root(&model, 1);

    assert!(view.expand(&fruits));
    {
        let tree = view.accessible();
        assert_eq!(tree.row_count(), 4);
        assert_eq!(tree.child_count(), 10);
        assert_eq!(tree.index_from_logical(3, 0), vegetables);
        assert_eq!(
            tree.index_from_logical(1, 1),
            model.index(0, 1, &fruits)
        );
        assert_eq!(tree.cell_at(2, 0).unwrap().text(TextKind::Name), "Pear");
        assert_eq!(tree.cell_at(3, 1).unwrap().text(TextKind::Name), "0");
    }

    view.expand_all();
    assert_eq!(view.accessible().row_count(), 5);

    // Collapsing hides every descendant.
    assert!(view.collapse(&fruits));
    {
        let tree = view.accessible();
        assert_eq!(tree.row_count(), 2);
        assert!(tree.cell_at(2, 0).is_none());
        assert_eq!(tree.index_from_logical(1, 0), vegetables);
        assert!(!tree.index_from_logical(2, 0).is_valid());
    }

    // Expanding restores them in place, nested expansion included.
    assert!(view.expand(&fruits));
    let tree = view.accessible();
    assert_eq!(tree.row_count(), 5);
    let names: Vec<_> = (0..tree.row_count())
        .map(|row| tree.cell_at(row, 0).unwrap().text(TextKind::Name))
        .collect();
    assert_eq!(names, ["Fruits", "Apple", "Pear", "Williams", "Vegetables"]);
}

fn logical_indices(tree: &TreeAdapter<'_>) -> Vec<ModelIndex> {
    let columns = tree.column_count();
    (0..tree.row_count())
        .flat_map(|row| (0..columns).map(move |column| (row, column)))
        .map(|(row, column)| tree.index_from_logical(row, column))
        .collect()
}

#[test]
fn test_reexpanding_restores_the_same_indices() {
    let model = pantry();
    let mut view = StandardTreeView::new(model.clone());
    let fruits = root(&model, 0);
    view.expand_all();

    let before = logical_indices(&view.accessible());
    assert_eq!(before.len(), 10);
    assert!(before.iter().all(ModelIndex::is_valid));

    assert!(view.collapse(&fruits));
    assert_eq!(logical_indices(&view.accessible()).len(), 4);

    assert!(view.expand(&fruits));
    assert_eq!(logical_indices(&view.accessible()), before);
}

#[test]
fn test_out_of_range_rows() {
    init_tracing();
    let view = StandardTreeView::new(pantry());
    let tree = view.accessible();

    assert!(tree.cell_at(usize::MAX, 0).is_none());
    assert!(tree.cell_at(tree.row_count(), 0).is_none());
    assert!(tree.cell_at(0, 2).is_none());
    assert_eq!(tree.select_row(2), Err(AccessError::InvalidRow { row: 2, rows: 2 }));
}

#[test]
fn test_row_selection_uses_visible_rows() {
    let model = pantry();
    let mut view = StandardTreeView::new(model.clone());
    view.expand(&root(&model, 0));

    {
        let tree = view.accessible();
        tree.select_row(2).unwrap();
        assert!(tree.is_row_selected(2));
        assert!(!tree.is_row_selected(1));
        assert_eq!(tree.selected_rows(), vec![2]);
        assert_eq!(tree.selected_cell_count(), 2);

        let selected = tree.selected_cells();
        assert!(selected.iter().all(|cell| cell.text(TextKind::Name) != "Apple"));
        assert_eq!(selected[0].row_index(), Some(2));

        tree.unselect_row(2).unwrap();
        assert!(!tree.is_row_selected(2));
        tree.select_row(2).unwrap();
    }

    // Hidden rows drop out of the reported row selection.
    view.collapse(&root(&model, 0));
    let tree = view.accessible();
    assert!(tree.selected_rows().is_empty());
    assert_eq!(tree.selected_cell_count(), 2);
}

#[test]
fn test_nested_column_selection_is_not_a_column_selection() {
    let model = pantry();
    let mut view = StandardTreeView::new(model.clone())
        .with_selection_mode(SelectionMode::MultiSelection);
    view.expand_all();

    let fruits = root(&model, 0);
    let pear = model.index(1, 0, &fruits);
    let williams = model.index(0, 0, &pear);

    // Williams fills column 0 under Pear only.
    view.select(&williams, SelectionFlags::SELECT);
    {
        let tree = view.accessible();
        assert_eq!(tree.selected_cell_count(), 1);
        assert!(!tree.is_column_selected(0));
        assert!(tree.selected_columns().is_empty());
        assert_eq!(tree.selected_column_count(), 0);
    }

    // Column 0 is now full under both Fruits and Pear.
    view.select(&model.index(0, 0, &fruits), SelectionFlags::SELECT);
    view.select(&pear, SelectionFlags::SELECT);
    assert!(view.accessible().selected_columns().is_empty());

    let tree = view.accessible();
    tree.select_column(0).unwrap();
    assert!(tree.is_column_selected(0));
    assert_eq!(tree.selected_columns(), vec![0]);
    assert_eq!(tree.selected_column_count(), 1);
}

/// A tree host that misreports itself as a table with both headers shown.
struct TableLookingTree(StandardTreeView);

impl ItemView for TableLookingTree {
    fn kind(&self) -> ViewKind {
        ViewKind::Table
    }

    fn model(&self) -> &dyn ItemModel {
        self.0.model()
    }

    fn has_header(&self, _orientation: Orientation) -> bool {
        true
    }

    fn selection_mode(&self) -> SelectionMode {
        self.0.selection_mode()
    }

    fn selected_indexes(&self) -> Vec<ModelIndex> {
        self.0.selected_indexes()
    }

    fn selected_rows(&self) -> Vec<ModelIndex> {
        self.0.selected_rows()
    }

    fn selected_columns(&self) -> Vec<ModelIndex> {
        self.0.selected_columns()
    }

    fn is_selected(&self, index: &ModelIndex) -> bool {
        self.0.is_selected(index)
    }

    fn is_row_selected(&self, row: usize, parent: &ModelIndex) -> bool {
        self.0.is_row_selected(row, parent)
    }

    fn is_column_selected(&self, column: usize, parent: &ModelIndex) -> bool {
        self.0.is_column_selected(column, parent)
    }

    fn select(&self, index: &ModelIndex, flags: SelectionFlags) {
        self.0.select(index, flags);
    }

    fn current_index(&self) -> ModelIndex {
        self.0.current_index()
    }

    fn is_visible(&self) -> bool {
        self.0.is_visible()
    }

    fn size(&self) -> Size {
        self.0.size()
    }

    fn viewport_offset(&self) -> Point {
        self.0.viewport_offset()
    }

    fn visual_rect(&self, index: &ModelIndex) -> Option<Rect> {
        self.0.visual_rect(index)
    }

    fn map_to_global(&self, point: Point) -> Point {
        self.0.map_to_global(point)
    }

    fn map_from_global(&self, point: Point) -> Point {
        self.0.map_from_global(point)
    }

    fn index_at(&self, point: Point) -> ModelIndex {
        self.0.index_at(point)
    }

    fn header_section_rect(&self, section: usize, orientation: Orientation) -> Option<Rect> {
        self.0.header_section_rect(section, orientation)
    }
}

impl TreeItemView for TableLookingTree {
    fn visible_rows(&self) -> &dyn VisibleRows {
        self.0.visible_rows()
    }

    fn is_expanded(&self, index: &ModelIndex) -> bool {
        self.0.is_expanded(index)
    }
}

#[test]
fn test_trees_never_expose_row_headers() {
    init_tracing();
    let view = TableLookingTree(StandardTreeView::new(pantry()));
    let changes = ChangeTracker::new();
    let tree = TreeAdapter::new(&view, &changes);

    assert!(!tree.as_table().headers().has_row_header());
    assert!(tree.as_table().headers().has_column_header());
    assert_eq!(tree.child_count(), (tree.row_count() + 1) * tree.column_count());
    assert_eq!(tree.child_count(), 6);
    assert_eq!(tree.child(1).unwrap().role(), AccessibleRole::ColumnHeader);
    assert_eq!(tree.child(3).unwrap().text(TextKind::Name), "Fruits");

    let cell = tree.cell_at(0, 0).unwrap();
    assert!(cell.row_header_cells().is_empty());
    assert_eq!(cell.column_header_cells().len(), 1);
    assert!(tree.child_at(5.0, 5.0).is_some_and(|item| item.role() != AccessibleRole::Pane));
}

#[test]
fn test_tree_item_state_and_relations() {
    let model = pantry();
    let mut view = StandardTreeView::new(model.clone());
    view.expand(&root(&model, 0));
    let tree = view.accessible();

    let fruits = AccessibleItem::from(tree.cell_at(0, 0).unwrap());
    let apple = AccessibleItem::from(tree.cell_at(1, 0).unwrap());
    let pear = tree.cell_at(2, 0).unwrap();
    let vegetables = AccessibleItem::from(tree.cell_at(3, 0).unwrap());

    let state = fruits.state();
    assert!(state.contains(AccessibleState::EXPANDABLE | AccessibleState::EXPANDED));
    assert!(pear.state().contains(AccessibleState::EXPANDABLE));
    assert!(!pear.state().contains(AccessibleState::EXPANDED));
    assert!(!vegetables.state().contains(AccessibleState::EXPANDABLE));

    assert_eq!(fruits.relation_to(&apple), Relationship::Ancestor);
    assert_eq!(apple.relation_to(&fruits), Relationship::Child);
    assert_eq!(apple.relation_to(&vegetables), Relationship::Unrelated);
    assert_eq!(tree.relation_to(&apple), Relationship::Unrelated);

    assert_eq!(apple.parent().role(), AccessibleRole::Tree);
    let down = apple.navigate(Relation::Down, 0).unwrap();
    assert_eq!(down.text(TextKind::Name), "Pear");
    assert_eq!(pear.row_index(), Some(2));
    assert!(pear.row_header_cells().is_empty());
    assert_eq!(pear.column_header_cells()[0].text(TextKind::Name), "Item");
}

#[test]
fn test_tree_rejects_foreign_items() {
    init_tracing();
    let view = StandardTreeView::new(pantry());
    let table_view = StandardTableView::new(Arc::new(TableModel::new(2, 2)));
    let tree = view.accessible();

    let table_cell = table_view.accessible().child(5).unwrap();
    assert!(matches!(
        tree.try_index_of_child(&table_cell),
        Err(AccessError::ForeignChild(_))
    ));
    assert_eq!(tree.index_of_child(&table_cell), None);
}

#[test]
fn test_tree_hit_testing() {
    let model = pantry();
    let mut view = StandardTreeView::new(model.clone());
    view.expand(&root(&model, 0));
    let tree = view.accessible();

    let hit = |x, y| tree.child_at(x, y).and_then(|item| item.identity());
    // The header strip is 24 high; rows are 24 high.
    assert_eq!(hit(150.0, 53.0), Some(CellIdentity::cell(1, 1)));
    assert_eq!(hit(5.0, 5.0), Some(CellIdentity::ColumnHeader(0)));
    assert_eq!(hit(5.0, 200.0), None);
}
