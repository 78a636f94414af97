//! Display driver: initialize a UI element, then write it out.

use std::io::{self, Write};

use crate::banner::format_banner;
use crate::list::SelectableList;
use crate::metrics::TerminalMetrics;
use crate::theme::Styler;
use crate::types::Action;

/// Anything that can be shown on the console.
pub trait UiElement {
    /// Called once before the element is written.
    fn init(&mut self) {}

    /// The element's text for the given terminal, style directives included.
    fn out(&self, metrics: &dyn TerminalMetrics, styler: &dyn Styler) -> String;
}

impl<A: Action> UiElement for SelectableList<A> {
    fn out(&self, metrics: &dyn TerminalMetrics, styler: &dyn Styler) -> String {
        self.render(metrics, styler)
    }
}

/// A free-standing title banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub title: String,
}

impl Banner {
    pub fn new(title: impl Into<String>) -> Self {
        Banner { title: title.into() }
    }
}

impl UiElement for Banner {
    fn out(&self, metrics: &dyn TerminalMetrics, styler: &dyn Styler) -> String {
        format_banner(&self.title, usize::from(metrics.width()), styler)
    }
}

/// Initialize `elem` and write its output, newline-terminated, to `writer`.
pub fn display(
    elem: &mut dyn UiElement,
    writer: &mut dyn Write,
    metrics: &dyn TerminalMetrics,
    styler: &dyn Styler,
) -> io::Result<()> {
    elem.init();
    writeln!(writer, "{}", elem.out(metrics, styler))?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::FixedTerminal;
    use crate::theme::PlainStyler;

    struct Counting {
        inits: usize,
    }

    impl UiElement for Counting {
        fn init(&mut self) {
            self.inits += 1;
        }

        fn out(&self, _metrics: &dyn TerminalMetrics, _styler: &dyn Styler) -> String {
            format!("initialized {} times", self.inits)
        }
    }

    #[test]
    fn display_initializes_before_output() {
        let mut elem = Counting { inits: 0 };
        let mut buf = Vec::new();
        display(&mut elem, &mut buf, &FixedTerminal::new(80, 20), &PlainStyler).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "initialized 1 times\n");
    }

    #[test]
    fn display_writes_list_render() {
        let mut list = SelectableList::new("menu");
        list.add_entry("first", "the first one").unwrap();
        let metrics = FixedTerminal::new(60, 20);

        let mut buf = Vec::new();
        display(&mut list, &mut buf, &metrics, &PlainStyler).unwrap();

        let expected = format!("{}\n", list.render(&metrics, &PlainStyler));
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }

    #[test]
    fn banner_element_spans_terminal() {
        let banner = Banner::new("Hello there!");
        let out = banner.out(&FixedTerminal::new(80, 20), &PlainStyler);
        assert_eq!(out, format!("{0}[Hello There!]{0}", "-".repeat(32)));
    }
}
