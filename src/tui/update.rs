//! Pure transitions: (list, prompt, Input) → Transition.
//!
//! Navigation saturates at both ends and clears any half-typed row number.
//! A digit selects as soon as the typed number cannot grow into another row
//! of the current page; otherwise Confirm finishes it. Numbers naming no row
//! are dropped.

use crate::list::SelectableList;
use crate::types::Action;

use super::state::{Input, RowPrompt, Transition};

/// Apply one input to the list and the row prompt.
pub fn update<A: Action>(
    list: &mut SelectableList<A>,
    prompt: &mut RowPrompt,
    input: &Input,
) -> Transition {
    match input {
        Input::NextPage => {
            prompt.clear();
            list.next_page();
            Transition::Redraw
        }
        Input::PrevPage => {
            prompt.clear();
            list.prev_page();
            Transition::Redraw
        }
        Input::Digit(d) => type_digit(list, prompt, usize::from(*d)),
        Input::Confirm => match prompt.take() {
            Some(row) => select_row(list, row),
            None => Transition::Redraw,
        },
        Input::ClearRow => {
            prompt.clear();
            Transition::Redraw
        }
        Input::Quit => Transition::Quit,
    }
}

fn type_digit<A: Action>(list: &SelectableList<A>, prompt: &mut RowPrompt, digit: usize) -> Transition {
    let rows = list.current_page_names().len();
    let row = prompt.take().unwrap_or(0) * 10 + digit;

    if row == 0 || row > rows {
        return Transition::Redraw;
    }

    // No longer number starting with these digits fits on the page
    if row * 10 > rows {
        return select_row(list, row);
    }

    prompt.set(row);
    Transition::Redraw
}

fn select_row<A: Action>(list: &SelectableList<A>, row: usize) -> Transition {
    match list.entry_on_page(row) {
        Some(entry) => Transition::Selected(entry.name.clone()),
        None => Transition::Redraw,
    }
}

// ============================================================================
// TESTS
// ============================================================================
