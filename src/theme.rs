//! Color semantics and the style directive backend.
//!
//! Paints are pure data. A [`Styler`] turns a paint plus some text into the
//! text wrapped in a style directive and its reset. Renderers hold a styler
//! explicitly; nothing here touches process-wide terminal state.
//!
//! Color semantics:
//! - White on blue: banner title
//! - Red: page indicator
//! - White on red: row index
//! - Yellow: row description

use crossterm::style::{Color, ContentStyle};

// ============================================================================
// PAINTS
// ============================================================================

/// Foreground and optional background color for one styled segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    pub fg: Color,
    pub bg: Option<Color>,
}

impl Paint {
    pub const fn fg(fg: Color) -> Self {
        Paint { fg, bg: None }
    }

    pub const fn on(self, bg: Color) -> Self {
        Paint { fg: self.fg, bg: Some(bg) }
    }

    fn content_style(self) -> ContentStyle {
        let mut style = ContentStyle::new();
        style.foreground_color = Some(self.fg);
        style.background_color = self.bg;
        style
    }
}

/// Bracketed banner title.
pub const PAINT_BANNER: Paint = Paint::fg(Color::White).on(Color::Blue);

/// "Page (NN/MM)" line.
pub const PAINT_PAGE_INDICATOR: Paint = Paint::fg(Color::Red);

/// "[N]" row index.
pub const PAINT_INDEX: Paint = Paint::fg(Color::White).on(Color::Red);

/// Row description after the separator.
pub const PAINT_DESCRIPTION: Paint = Paint::fg(Color::Yellow);

// ============================================================================
// STYLERS
// ============================================================================

/// Style directive capability.
pub trait Styler {
    /// Wrap `text` in the directive for `paint`, followed by a reset.
    fn paint(&self, text: &str, paint: Paint) -> String;
}

/// ANSI escape directives via crossterm.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyler;

/// No directives at all; for redirected output and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl Styler for AnsiStyler {
    fn paint(&self, text: &str, paint: Paint) -> String {
        paint.content_style().apply(text).to_string()
    }
}

impl Styler for PlainStyler {
    fn paint(&self, text: &str, _paint: Paint) -> String {
        text.to_string()
    }
}

/// Pick a styler: plain when asked for, or when stdout is not a terminal.
pub fn styler_for(plain: bool) -> Box<dyn Styler> {
    use std::io::IsTerminal;

    if plain || !std::io::stdout().is_terminal() {
        Box::new(PlainStyler)
    } else {
        Box::new(AnsiStyler)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::strip_directives;

    #[test]
    fn semantic_paints_have_expected_colors() {
        assert_eq!(PAINT_BANNER.fg, Color::White);
        assert_eq!(PAINT_BANNER.bg, Some(Color::Blue));
        assert_eq!(PAINT_PAGE_INDICATOR.fg, Color::Red);
        assert_eq!(PAINT_PAGE_INDICATOR.bg, None);
        assert_eq!(PAINT_INDEX.bg, Some(Color::Red));
        assert_eq!(PAINT_DESCRIPTION.fg, Color::Yellow);
    }

    #[test]
    fn plain_styler_returns_text_untouched() {
        assert_eq!(PlainStyler.paint("[1]", PAINT_INDEX), "[1]");
    }

    #[test]
    fn ansi_styler_wraps_text_in_directives() {
        let styled = AnsiStyler.paint("[1]", PAINT_INDEX);
        assert!(styled.starts_with("\u{1b}["));
        assert!(styled.contains("[1]"));
        assert_ne!(styled, "[1]");
        assert_eq!(strip_directives(&styled), "[1]");
    }

    #[test]
    fn ansi_styler_resets_after_text() {
        let styled = AnsiStyler.paint("hello", PAINT_DESCRIPTION);
        let end = styled.find("hello").unwrap() + "hello".len();
        assert!(styled[end..].starts_with("\u{1b}["), "got {:?}", styled);
    }
}
