//! Navigation relations between accessible objects.

/// A navigation request issued against an object.
///
/// The `index` passed alongside the relation is one-based: `Child` and
/// `Sibling` use it as a flat child index, `Ancestor` as the number of levels
/// to climb (only `1` is supported).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// A child of the object.
    Child,
    /// The object's parent.
    Ancestor,
    /// A child of the object's parent.
    Sibling,
    /// The data cell above.
    Up,
    /// The data cell below.
    Down,
    /// The data cell to the left.
    Left,
    /// The data cell to the right.
    Right,
}

/// How one object relates to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Relationship {
    /// The first object is the parent of the second.
    Ancestor,
    /// The first object is a child of the second.
    Child,
    #[default]
    Unrelated,
}
