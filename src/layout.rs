//! Text layout: fixed-width truncation, padding, and pagination arithmetic.
//!
//! Pure functions only. Widths are counted in chars, never bytes.

use crate::theme::{Paint, Styler};

/// Rows of every page taken by the banner and the page indicator.
pub const RESERVED_ROWS: usize = 2;

// ============================================================================
// TEXT
// ============================================================================

/// First `max_width` chars of `text`. Hard cut, no ellipsis.
///
/// A non-positive width yields an empty string.
pub fn truncate(text: &str, max_width: isize) -> String {
    if max_width <= 0 {
        return String::new();
    }
    text.chars().take(max_width as usize).collect()
}

/// Append spaces until `text` is `width` chars wide. Never truncates.
pub fn pad_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let mut out = String::with_capacity(text.len() + width.saturating_sub(len));
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(len)));
    out
}

/// Left-pad a counter with zeros to `digits`. Wider values are kept whole.
pub fn zero_pad(value: usize, digits: usize) -> String {
    format!("{:0width$}", value, width = digits)
}

/// Remove ANSI CSI directives (`ESC [ ... final`), leaving the visible text.
pub fn strip_directives(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\u{1b}' && chars.peek() == Some(&'[') {
            chars.next();
            // Parameters and intermediates run until a final byte in '@'..='~'
            for d in chars.by_ref() {
                if ('@'..='~').contains(&d) {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }

    out
}

// ============================================================================
// PAGINATION
// ============================================================================

/// Entries shown per page once the reserved rows are taken out.
pub fn body_rows(page_size: usize) -> usize {
    page_size.saturating_sub(RESERVED_ROWS).max(1)
}

/// Zero-indexed last page for `total_items` entries.
///
/// `total_items / body_rows`, so an empty list still has page 0.
pub fn max_page(total_items: usize, page_size: usize) -> usize {
    total_items / body_rows(page_size)
}

/// The `page`-th run of `rows_per_page` items. Out-of-range pages are empty.
pub fn page_slice<T>(items: &[T], page: usize, rows_per_page: usize) -> &[T] {
    let start = page.saturating_mul(rows_per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(rows_per_page).min(items.len());
    &items[start..end]
}

// ============================================================================
// ROW BUILDER
// ============================================================================

/// Builds one output line against a visible width budget.
///
/// Each pushed segment is cut to what remains of the budget, so the visible
/// width of the finished line never exceeds it. Styled segments carry their
/// own reset; directives do not count against the budget.
pub struct RowBuilder<'a> {
    styler: &'a dyn Styler,
    budget: usize,
    used: usize,
    out: String,
}

impl<'a> RowBuilder<'a> {
    pub fn new(styler: &'a dyn Styler, budget: usize) -> Self {
        RowBuilder {
            styler,
            budget,
            used: 0,
            out: String::new(),
        }
    }

    /// Visible chars still available.
    pub fn remaining(&self) -> usize {
        self.budget - self.used
    }

    /// Visible chars emitted so far.
    pub fn used(&self) -> usize {
        self.used
    }

    pub fn push(&mut self, text: &str) -> &mut Self {
        let cut = self.fit(text);
        self.used += cut.chars().count();
        self.out.push_str(&cut);
        self
    }

    pub fn push_styled(&mut self, text: &str, paint: Paint) -> &mut Self {
        let cut = self.fit(text);
        self.used += cut.chars().count();
        self.out.push_str(&self.styler.paint(&cut, paint));
        self
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn fit(&self, text: &str) -> String {
        truncate(text, self.remaining() as isize)
    }
}

// ============================================================================
// TESTS
// ============================================================================
