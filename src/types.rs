//! Domain types for pagemenu.

use std::fmt;

// ============================================================================
// CAPABILITIES
// ============================================================================

/// Something a menu entry stands for.
///
/// The menu never invokes an action; it only shows its one-line description
/// next to the entry name.
pub trait Action {
    /// One-line description. `None` renders as an empty annotation.
    fn description(&self) -> Option<&str> {
        None
    }
}

impl Action for String {
    fn description(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl Action for &str {
    fn description(&self) -> Option<&str> {
        Some(*self)
    }
}

impl<A: Action> Action for Option<A> {
    fn description(&self) -> Option<&str> {
        self.as_ref().and_then(Action::description)
    }
}

impl Action for () {}

// ============================================================================
// STRUCTS
// ============================================================================

/// A named action registered in a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<A> {
    /// Display name, non-empty and unique within its list.
    pub name: String,
    pub action: A,
}

impl<A: Action> Entry<A> {
    /// First line of the action's description, empty when it has none.
    pub fn description(&self) -> &str {
        self.action
            .description()
            .and_then(|d| d.lines().next())
            .unwrap_or("")
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// Rejected list construction or registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Page size must leave room for body rows after the two header rows.
    PageSizeTooSmall { page_size: usize },
    /// Entry names must be non-empty.
    EmptyName,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::PageSizeTooSmall { page_size } => {
                write!(f, "page size must be greater than 2, got {}", page_size)
            }
            ListError::EmptyName => write!(f, "entry name must not be empty"),
        }
    }
}

impl std::error::Error for ListError {}

// ============================================================================
// TESTS
// ============================================================================
