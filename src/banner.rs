//! Centered, bracket-highlighted title banners.

use crate::theme::{Styler, PAINT_BANNER};

/// Rule character repeated on both sides of the title.
pub const RULE: char = '-';

/// Upper-case the first letter of every word and lower-case the rest.
///
/// A word starts at any letter not preceded by another letter.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

/// Rule width on each side of a title of `title_len` chars.
///
/// `(terminal_width - title_len) / 2 - 2`, floored, never negative.
pub fn rule_width(title_len: usize, terminal_width: usize) -> usize {
    let free = terminal_width as isize - title_len as isize;
    let pad = free.div_euclid(2) - 2;
    pad.max(0) as usize
}

/// Format `-----[Title]-----` for a terminal `terminal_width` columns wide.
pub fn format_banner(title: &str, terminal_width: usize, styler: &dyn Styler) -> String {
    let pad = rule_width(title.chars().count(), terminal_width);
    let rule: String = std::iter::repeat_n(RULE, pad).collect();
    let label = format!("[{}]", title_case(title));

    format!("{}{}{}", rule, styler.paint(&label, PAINT_BANNER), rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::strip_directives;
    use crate::theme::{AnsiStyler, PlainStyler};

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("hello there!"), "Hello There!");
        assert_eq!(title_case("bRUH"), "Bruh");
        assert_eq!(title_case("two-part name"), "Two-Part Name");
    }

    #[test]
    fn rule_width_centers_title() {
        // (80 - 4) / 2 - 2
        assert_eq!(rule_width(4, 80), 36);
        assert_eq!(rule_width(12, 80), 32);
    }

    #[test]
    fn rule_width_never_negative() {
        assert_eq!(rule_width(10, 12), 0);
        assert_eq!(rule_width(100, 20), 0);
    }

    #[test]
    fn banner_layout_for_80_columns() {
        let banner = format_banner("Bruh", 80, &PlainStyler);
        let rule = "-".repeat(36);
        assert_eq!(banner, format!("{}[Bruh]{}", rule, rule));
        assert_eq!(banner.chars().count(), 78);
    }

    #[test]
    fn banner_rules_are_symmetric() {
        for width in 0..120 {
            let banner = format_banner("Hello there!", width, &PlainStyler);
            let rules = banner.chars().filter(|&c| c == RULE).count();
            assert_eq!(rules, 2 * rule_width(12, width));
        }
    }

    #[test]
    fn banner_styles_only_the_bracketed_title() {
        let banner = format_banner("bruh", 40, &AnsiStyler);
        assert!(banner.starts_with("-"));
        assert!(banner.ends_with("-"));
        assert!(banner.contains('\u{1b}'));
        assert_eq!(strip_directives(&banner), format_banner("bruh", 40, &PlainStyler));
    }
}
