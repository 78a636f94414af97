//! Menu shell effects boundary: terminal lifecycle, key mapping, draw loop.
//!
//! This is the only module of the shell with side effects. It wires the pure
//! layers (state, update, list rendering) to the real terminal via crossterm.
//! Everything runs on the calling thread: draw, block on the next event,
//! dispatch, repeat.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{ExecutableCommand, QueueableCommand};

use crate::list::SelectableList;
use crate::metrics::LiveTerminal;
use crate::theme::Styler;
use crate::types::Action;

use super::state::{Input, RowPrompt, Transition};
use super::update::update;

/// Key hints printed under the list.
pub const HELP_LINE: &str = "[n] next  [p] prev  [0-9] row  [Enter] select  [q] quit";

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Input.
///
/// Returns None for keys that don't map to anything.
pub fn map_key(key: KeyEvent) -> Option<Input> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Input::Quit);
    }

    match key.code {
        KeyCode::Char('n') | KeyCode::Char('l') | KeyCode::Right | KeyCode::PageDown => {
            Some(Input::NextPage)
        }
        KeyCode::Char('p') | KeyCode::Char('h') | KeyCode::Left | KeyCode::PageUp => {
            Some(Input::PrevPage)
        }
        KeyCode::Char(c @ '0'..='9') => Some(Input::Digit(c as u8 - b'0')),
        KeyCode::Enter => Some(Input::Confirm),
        KeyCode::Backspace => Some(Input::ClearRow),
        KeyCode::Char('q') | KeyCode::Esc => Some(Input::Quit),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

fn setup_terminal() -> io::Result<()> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?.execute(Hide)?;
    Ok(())
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(Show)?.execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// DRAWING
// ============================================================================

/// Raw mode does not translate '\n', so every line break needs a '\r'.
fn to_raw_lines(text: &str) -> String {
    text.replace('\n', "\r\n")
}

/// Key hints, plus the row number typed so far.
fn footer(prompt: &RowPrompt) -> String {
    match prompt.pending() {
        Some(row) => format!("{}  row: {}_", HELP_LINE, row),
        None => HELP_LINE.to_string(),
    }
}

fn draw<A: Action>(
    out: &mut impl Write,
    list: &SelectableList<A>,
    prompt: &RowPrompt,
    styler: &dyn Styler,
) -> io::Result<()> {
    let frame = list.render(&LiveTerminal, styler);

    out.queue(Clear(ClearType::All))?
        .queue(MoveTo(0, 0))?
        .queue(Print(to_raw_lines(&frame)))?
        .queue(Print("\r\n\r\n"))?
        .queue(Print(footer(prompt)))?;
    out.flush()
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the interactive menu until an entry is chosen or the user quits.
///
/// Returns the chosen entry's name, or None on quit.
pub fn run<A: Action>(
    list: &mut SelectableList<A>,
    styler: &dyn Styler,
) -> io::Result<Option<String>> {
    install_panic_hook();
    setup_terminal()?;

    let result = event_loop(list, styler);

    // Restore even when the loop failed; report the loop's error first.
    let restored = restore_terminal();
    let chosen = result?;
    restored?;
    Ok(chosen)
}

fn event_loop<A: Action>(
    list: &mut SelectableList<A>,
    styler: &dyn Styler,
) -> io::Result<Option<String>> {
    let mut stdout = io::stdout();
    let mut prompt = RowPrompt::new();

    loop {
        draw(&mut stdout, list, &prompt, styler)?;

        let input = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key),
            // Resize just falls through to a redraw with fresh metrics
            _ => None,
        };

        let Some(input) = input else {
            continue;
        };

        log::debug!("input {:?} on page {}", input, list.page());

        match update(list, &mut prompt, &input) {
            Transition::Redraw => {}
            Transition::Selected(name) => {
                log::info!("selected '{}'", name);
                return Ok(Some(name));
            }
            Transition::Quit => return Ok(None),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_c_maps_to_quit() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(Input::Quit));
    }

    #[test]
    fn page_keys_map_to_navigation() {
        for code in [KeyCode::Char('n'), KeyCode::Char('l'), KeyCode::Right, KeyCode::PageDown] {
            let key = KeyEvent::new(code, KeyModifiers::NONE);
            assert_eq!(map_key(key), Some(Input::NextPage));
        }
        for code in [KeyCode::Char('p'), KeyCode::Char('h'), KeyCode::Left, KeyCode::PageUp] {
            let key = KeyEvent::new(code, KeyModifiers::NONE);
            assert_eq!(map_key(key), Some(Input::PrevPage));
        }
    }

    #[test]
    fn digit_keys_map_to_digits() {
        for n in 0..=9u8 {
            let key = KeyEvent::new(KeyCode::Char((b'0' + n) as char), KeyModifiers::NONE);
            assert_eq!(map_key(key), Some(Input::Digit(n)));
        }
    }

    #[test]
    fn enter_confirms_and_backspace_clears() {
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let backspace = KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(map_key(enter), Some(Input::Confirm));
        assert_eq!(map_key(backspace), Some(Input::ClearRow));
    }

    #[test]
    fn footer_shows_typed_row() {
        let mut prompt = RowPrompt::new();
        assert_eq!(footer(&prompt), HELP_LINE);
        prompt.set(1);
        assert!(footer(&prompt).ends_with("row: 1_"));
    }

    #[test]
    fn q_and_esc_quit() {
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(map_key(q), Some(Input::Quit));
        assert_eq!(map_key(esc), Some(Input::Quit));
    }

    #[test]
    fn unmapped_key_returns_none() {
        let key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(map_key(key), None);
    }

    #[test]
    fn raw_lines_carry_carriage_returns() {
        assert_eq!(to_raw_lines("a\nb\nc"), "a\r\nb\r\nc");
    }
}
