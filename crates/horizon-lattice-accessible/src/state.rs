//! State flags reported for accessible items.

bitflags::bitflags! {
    /// Composed state of an accessible object.
    ///
    /// Views and header cells report an empty set; data cells combine
    /// visibility, selection, focus and check state with the capabilities
    /// implied by the view's selection mode.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct AccessibleState: u16 {
        /// The item lies outside the visible area of the view.
        const INVISIBLE           = 0b0000_0000_0001;
        /// The item is selected.
        const SELECTED            = 0b0000_0000_0010;
        /// The item is the view's current item.
        const FOCUSED             = 0b0000_0000_0100;
        /// The item's check state is fully checked.
        const CHECKED             = 0b0000_0000_1000;
        /// The item can be selected.
        const SELECTABLE          = 0b0000_0001_0000;
        /// The item can become the current item.
        const FOCUSABLE           = 0b0000_0010_0000;
        /// The view allows several items to be selected independently.
        const MULTI_SELECTABLE    = 0b0000_0100_0000;
        /// The view allows range selection.
        const EXTENDED_SELECTABLE = 0b0000_1000_0000;
        /// The tree item has children.
        const EXPANDABLE          = 0b0001_0000_0000;
        /// The tree item's children are shown.
        const EXPANDED            = 0b0010_0000_0000;
    }
}
