//! Menu shell state algebra: pure types, zero effects.
//!
//! The list carries the page index. The shell's only other state is the
//! row number being typed, held in [`RowPrompt`]. The remaining types describe
//! what a key press means and what the shell should do next.

// ============================================================================
// INPUTS
// ============================================================================

/// Semantic user input, decoupled from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Advance one page.
    NextPage,
    /// Go back one page.
    PrevPage,
    /// One digit (0-9) of a row number on the current page.
    Digit(u8),
    /// Pick the row typed so far.
    Confirm,
    /// Forget the row typed so far.
    ClearRow,
    /// Leave without choosing.
    Quit,
}

// ============================================================================
// ROW PROMPT
// ============================================================================

/// Row number typed so far, one digit at a time.
///
/// Rows past 9 need several digits, so a digit only picks a row at once
/// when no further digit could name a row on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowPrompt {
    pending: Option<usize>,
}

impl RowPrompt {
    pub fn new() -> Self {
        RowPrompt::default()
    }

    /// Row number typed so far, if any.
    pub fn pending(&self) -> Option<usize> {
        self.pending
    }

    pub fn set(&mut self, row: usize) {
        self.pending = Some(row);
    }

    /// Take the typed row, leaving the prompt empty.
    pub fn take(&mut self) -> Option<usize> {
        self.pending.take()
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of applying an [`Input`] to a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Draw the list again (page or prompt may or may not have changed).
    Redraw,
    /// The named entry was chosen; the shell exits with it.
    Selected(String),
    /// Exit with nothing chosen.
    Quit,
}

impl Transition {
    /// Whether the shell loop should stop after this transition.
    pub fn is_final(&self) -> bool {
        !matches!(self, Transition::Redraw)
    }
}

// ============================================================================
// TESTS
// ============================================================================
