use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::router::PickerEvent;
use crate::tui::app::{App, Mode};

/// Goto prompt: type a year, Enter sets it programmatically.
pub(super) fn handle_goto(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.goto_input.clear();
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => {
            let raw = std::mem::take(&mut app.goto_input);
            if let Some(picker) = app.picker.as_mut() {
                // Malformed input is dropped by the picker
                picker.dispatch(PickerEvent::External(raw));
            }
            app.mode = Mode::Navigate;
        }
        KeyCode::Backspace => {
            app.goto_input.pop();
        }
        KeyCode::Char(c) if app.goto_input.len() < 24 => app.goto_input.push(c),
        _ => {}
    }
}
