//! Menu definitions loaded from JSON.
//!
//! ```json
//! {
//!   "title": "tools",
//!   "page_size": 15,
//!   "entries": [
//!     { "name": "build", "description": "Compile the project" },
//!     { "name": "clean" }
//!   ]
//! }
//! ```

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::list::{SelectableList, DEFAULT_PAGE_SIZE};
use crate::types::{Action, ListError};

// ============================================================================
// TYPES
// ============================================================================

/// One menu entry as written in a menu file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        MenuItem {
            name: name.into(),
            description: Some(description.into()),
        }
    }
}

impl Action for MenuItem {
    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// A whole menu: title, page size, entries in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub title: String,
    pub page_size: usize,
    pub entries: Vec<MenuItem>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            title: "menu".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            entries: Vec::new(),
        }
    }
}

/// Failure to read or parse a menu file.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "Cannot read menu file {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "Invalid menu file {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl MenuConfig {
    /// The sample menu shown when no menu file is given.
    pub fn demo() -> Self {
        MenuConfig {
            title: "bruh".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            entries: vec![
                MenuItem::new("A thing", "Displays a console UI element."),
                MenuItem::new("Another thing", "Displays a console UI element."),
                MenuItem::new("Your Great grand father", "Displays a console UI element."),
            ],
        }
    }

    /// Build a list, registering entries in file order.
    ///
    /// Later entries with a repeated name replace earlier ones.
    pub fn into_list(self) -> Result<SelectableList<MenuItem>, ListError> {
        let mut list = SelectableList::with_page_size(self.title, self.page_size)?;
        for item in self.entries {
            list.add_entry(item.name.clone(), item)?;
        }
        Ok(list)
    }
}

// ============================================================================
// EFFECT FUNCTIONS
// ============================================================================

/// Parse a menu from JSON text.
pub fn parse_menu(text: &str) -> Result<MenuConfig, serde_json::Error> {
    serde_json::from_str(text)
}

/// Read and parse a menu file.
pub fn load_menu(path: &Path) -> Result<MenuConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config = parse_menu(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!(
        "loaded menu '{}' with {} entries from {}",
        config.title,
        config.entries.len(),
        path.display()
    );
    Ok(config)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_fields_use_defaults() {
        let config = parse_menu(r#"{ "entries": [ { "name": "solo" } ] }"#).unwrap();
        assert_eq!(config.title, "menu");
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.entries, vec![MenuItem { name: "solo".into(), description: None }]);
    }

    #[test]
    fn load_menu_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "title": "tools", "page_size": 5, "entries": [
                {{ "name": "build", "description": "Compile the project" }},
                {{ "name": "clean" }}
            ] }}"#
        )
        .unwrap();

        let config = load_menu(file.path()).unwrap();
        assert_eq!(config.title, "tools");
        assert_eq!(config.page_size, 5);
        assert_eq!(config.entries.len(), 2);
        assert_eq!(config.entries[0].description(), Some("Compile the project"));
    }

    #[test]
    fn load_menu_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_menu(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().starts_with("Cannot read menu file"));
    }

    #[test]
    fn load_menu_bad_json_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = load_menu(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn into_list_keeps_order_and_overwrites_duplicates() {
        let config = MenuConfig {
            title: "t".into(),
            page_size: 15,
            entries: vec![
                MenuItem::new("one", "first"),
                MenuItem::new("two", "second"),
                MenuItem::new("one", "replaced"),
            ],
        };
        let list = config.into_list().unwrap();
        assert_eq!(list.all_names(), vec!["one", "two"]);
        assert_eq!(list.get("one").and_then(Action::description), Some("replaced"));
    }

    #[test]
    fn into_list_rejects_small_page_size() {
        let config = MenuConfig { page_size: 1, ..MenuConfig::demo() };
        assert_eq!(
            config.into_list().unwrap_err(),
            ListError::PageSizeTooSmall { page_size: 1 }
        );
    }

    #[test]
    fn into_list_rejects_empty_names() {
        let config = MenuConfig {
            entries: vec![MenuItem::new("", "nameless")],
            ..MenuConfig::default()
        };
        assert_eq!(config.into_list().unwrap_err(), ListError::EmptyName);
    }

    #[test]
    fn demo_menu_has_three_entries() {
        let list = MenuConfig::demo().into_list().unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.max_page(), 0);
    }
}
