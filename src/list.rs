//! The paginated selection list.
//!
//! A [`SelectableList`] owns an insertion-ordered registry of entries and the
//! current page index. Navigation saturates at both ends; rendering is a pure
//! function of the list, one terminal size snapshot, and a styler.

use std::collections::HashMap;

use crate::banner::format_banner;
use crate::layout::{self, RowBuilder};
use crate::metrics::TerminalMetrics;
use crate::theme::{Styler, PAINT_DESCRIPTION, PAINT_INDEX, PAINT_PAGE_INDICATOR};
use crate::types::{Action, Entry, ListError};

/// Page size used by [`SelectableList::new`].
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// Width of the name column, before the separating space.
pub const NAME_WIDTH: usize = 15;

/// Digits of the page counters in "Page (NN/MM)".
pub const PAGE_DIGITS: usize = 2;

const ROW_MARKER: &str = "# ";
const INDEX_SEPARATOR: &str = " - ";
const DESCRIPTION_SEPARATOR: &str = "| ";

// ============================================================================
// REGISTRY
// ============================================================================

/// Unique-keyed entries kept in insertion order.
///
/// Re-inserting an existing name replaces its action in place, so the entry
/// keeps its original display position.
#[derive(Debug, Clone)]
pub struct Registry<A> {
    entries: Vec<Entry<A>>,
    index: HashMap<String, usize>,
}

impl<A> Registry<A> {
    pub fn new() -> Self {
        Registry {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert or overwrite. Returns the previous action for `name`, if any.
    pub fn insert(&mut self, name: String, action: A) -> Option<A> {
        match self.index.get(&name).copied() {
            Some(pos) => Some(std::mem::replace(&mut self.entries[pos].action, action)),
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push(Entry { name, action });
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&A> {
        self.index.get(name).map(|&pos| &self.entries[pos].action)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry<A>] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }
}

impl<A> Default for Registry<A> {
    fn default() -> Self {
        Registry::new()
    }
}

// ============================================================================
// SELECTABLE LIST
// ============================================================================

/// An interactive, paginated selection list.
#[derive(Debug, Clone)]
pub struct SelectableList<A> {
    title: String,
    entries: Registry<A>,
    page: usize,
    page_size: usize,
}

impl<A: Action> SelectableList<A> {
    /// Create an empty list with the default page size.
    pub fn new(title: impl Into<String>) -> Self {
        SelectableList {
            title: title.into(),
            entries: Registry::new(),
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Create an empty list with `page_size` rows per page, header included.
    pub fn with_page_size(title: impl Into<String>, page_size: usize) -> Result<Self, ListError> {
        if page_size <= layout::RESERVED_ROWS {
            return Err(ListError::PageSizeTooSmall { page_size });
        }
        Ok(SelectableList {
            page_size,
            ..SelectableList::new(title)
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&A> {
        self.entries.get(name)
    }

    /// Register `action` under `name`, replacing any earlier action with the
    /// same name. The current page is left alone.
    pub fn add_entry(&mut self, name: impl Into<String>, action: A) -> Result<(), ListError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ListError::EmptyName);
        }
        if self.entries.insert(name, action).is_some() {
            log::debug!("menu '{}': replaced an existing entry", self.title);
        }
        Ok(())
    }

    /// Names of all entries, in insertion order.
    pub fn all_names(&self) -> Vec<&str> {
        self.entries.names().collect()
    }

    /// Names shown on the current page.
    pub fn current_page_names(&self) -> Vec<&str> {
        self.current_page_entries()
            .iter()
            .map(|e| e.name.as_str())
            .collect()
    }

    /// Zero-indexed last page, recomputed from the current entry count.
    pub fn max_page(&self) -> usize {
        layout::max_page(self.entries.len(), self.page_size)
    }

    pub fn next_page(&mut self) {
        let max = self.max_page();
        if self.page >= max {
            self.page = max;
            return;
        }
        self.page += 1;
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Entry on row `n` (1-based) of the current page.
    pub fn entry_on_page(&self, n: usize) -> Option<&Entry<A>> {
        n.checked_sub(1)
            .and_then(|i| self.current_page_entries().get(i))
    }

    /// Compose banner, page indicator and the current page's rows.
    ///
    /// Takes one size snapshot from `metrics`. Never mutates the list.
    pub fn render(&self, metrics: &dyn TerminalMetrics, styler: &dyn Styler) -> String {
        let width = usize::from(metrics.size().width);

        let mut lines = Vec::with_capacity(self.page_size);
        lines.push(format_banner(&self.title, width, styler));
        lines.push(self.page_indicator(styler));

        for (i, entry) in self.current_page_entries().iter().enumerate() {
            lines.push(render_row(i + 1, entry, width, styler));
        }

        lines.join("\n")
    }

    fn page_indicator(&self, styler: &dyn Styler) -> String {
        let text = format!(
            "Page ({}/{})",
            layout::zero_pad(self.page + 1, PAGE_DIGITS),
            layout::zero_pad(self.max_page() + 1, PAGE_DIGITS),
        );
        styler.paint(&text, PAINT_PAGE_INDICATOR)
    }

    fn current_page_entries(&self) -> &[Entry<A>] {
        layout::page_slice(
            self.entries.entries(),
            self.page,
            layout::body_rows(self.page_size),
        )
    }
}

/// `# [N] - name            | description`, clipped to `width` visible chars.
fn render_row<A: Action>(
    number: usize,
    entry: &Entry<A>,
    width: usize,
    styler: &dyn Styler,
) -> String {
    let name = layout::pad_right(&layout::truncate(&entry.name, NAME_WIDTH as isize), NAME_WIDTH);

    let mut row = RowBuilder::new(styler, width);
    row.push(ROW_MARKER)
        .push_styled(&format!("[{}]", number), PAINT_INDEX)
        .push(INDEX_SEPARATOR)
        .push(&name)
        .push(" ")
        .push(DESCRIPTION_SEPARATOR)
        // Whatever budget is left goes to the description
        .push_styled(entry.description(), PAINT_DESCRIPTION);
    row.finish()
}

// ============================================================================
// TESTS
// ============================================================================
