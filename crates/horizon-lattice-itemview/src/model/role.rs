//! Data roles for item models.
//!
//! Roles define what type of data is being requested or set on a model item.
//! Each item can have multiple pieces of data associated with it, distinguished
//! by their role.

/// Standard roles for accessing different aspects of item data.
///
/// When querying data from a model via `ItemModel::data()`, the role specifies
/// what information is being requested.
///
/// # Standard Roles
///
/// - **Display**: The primary text to show (e.g., item label)
/// - **Edit**: Value for editing (may differ from display text)
/// - **ToolTip**: Text shown when hovering over the item
/// - **CheckState**: Checkbox state (unchecked, checked, partial)
/// - **AccessibleText**: Text announced by assistive technology
/// - **AccessibleDescription**: Longer description for assistive technology
/// - **User**: Application-specific data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemRole {
    /// Primary text to display. Should return `String`.
    Display,

    /// Value for editing. Type depends on item.
    Edit,

    /// Tooltip text shown on hover. Should return `String`.
    ToolTip,

    /// Check state for checkable items. Should return `CheckState`.
    CheckState,

    /// Text announced by screen readers in place of the display text.
    AccessibleText,

    /// Accessible description for screen readers. Should return `String`.
    AccessibleDescription,

    /// Application-specific data.
    User(u32),
}

impl ItemRole {
    /// Returns `true` if this is a user-defined role.
    #[inline]
    pub fn is_user_role(&self) -> bool {
        matches!(self, ItemRole::User(_))
    }
}

/// Checkbox state for checkable items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckState {
    #[default]
    Unchecked,
    PartiallyChecked,
    Checked,
}

impl CheckState {
    /// Returns `true` only for the fully checked state.
    pub fn is_fully_checked(&self) -> bool {
        matches!(self, CheckState::Checked)
    }
}

/// Type-erased container for item data.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ItemData {
    #[default]
    None,
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    CheckState(CheckState),
}

impl ItemData {
    pub fn is_none(&self) -> bool {
        matches!(self, ItemData::None)
    }

    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            ItemData::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_check_state(&self) -> Option<CheckState> {
        match self {
            ItemData::CheckState(s) => Some(*s),
            _ => None,
        }
    }

    /// Converts the value to text.
    ///
    /// Scalars are formatted; `None` and check states become an empty string.
    pub fn to_text(&self) -> String {
        match self {
            ItemData::String(s) => s.clone(),
            ItemData::Int(n) => n.to_string(),
            ItemData::Float(n) => n.to_string(),
            ItemData::Bool(b) => b.to_string(),
            ItemData::None | ItemData::CheckState(_) => String::new(),
        }
    }
}

impl From<String> for ItemData {
    fn from(s: String) -> Self {
        ItemData::String(s)
    }
}

impl From<&str> for ItemData {
    fn from(s: &str) -> Self {
        ItemData::String(s.to_string())
    }
}

impl From<i64> for ItemData {
    fn from(n: i64) -> Self {
        ItemData::Int(n)
    }
}

impl From<i32> for ItemData {
    fn from(n: i32) -> Self {
        ItemData::Int(n as i64)
    }
}

impl From<f64> for ItemData {
    fn from(n: f64) -> Self {
        ItemData::Float(n)
    }
}

impl From<bool> for ItemData {
    fn from(b: bool) -> Self {
        ItemData::Bool(b)
    }
}

impl From<CheckState> for ItemData {
    fn from(s: CheckState) -> Self {
        ItemData::CheckState(s)
    }
}
